// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rufbuch — call-log schema, typed records, and batch validation shared
// across the plugin and bridge crates.

pub mod argscheck;
pub mod config;
pub mod error;
pub mod schema;
pub mod types;
pub mod validator;

pub use config::PluginConfig;
pub use error::RufbuchError;
pub use schema::*;
pub use types::*;
