// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Rufbuch.

use thiserror::Error;

use crate::argscheck::ShapeMismatch;

/// Top-level error type for all Rufbuch operations.
#[derive(Debug, Error)]
pub enum RufbuchError {
    // -- Validation errors --
    #[error("call signature mismatch: {0}")]
    ArgumentShape(ShapeMismatch),

    #[error("call log record {index} failed type validation: {mismatch}")]
    FieldType { index: usize, mismatch: ShapeMismatch },

    #[error("call log record {index} does not have the correct number of fields (found {found})")]
    SchemaFieldCount { index: usize, found: usize },

    #[error("call log record {index} does not have the correct fields (missing `{field}`)")]
    SchemaMissingField { index: usize, field: &'static str },

    // -- Typed record errors --
    #[error("invalid call type code: {0}")]
    InvalidCallType(i64),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RufbuchError>;
