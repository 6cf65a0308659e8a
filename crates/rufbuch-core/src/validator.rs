// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bulk call-log record validation.
//
// Record candidates arrive as untyped JSON from the embedding app. Before a
// batch may cross the bridge, every record must carry exactly the six
// call-log fields with the right value types. Validation is all-or-nothing:
// the first violation rejects the whole batch and nothing is dispatched.
//
// The type pass is positional over the record's own key insertion order
// (serde_json's `preserve_order` feature keeps that order observable), not a
// lookup by key name. A record that declares its keys out of canonical order
// therefore fails the type pass even if every value would match under its
// own key. The schema checks afterwards catch wrong field counts and
// missing required fields.

use serde_json::Value;

use crate::argscheck::{self, Arg};
use crate::error::{Result, RufbuchError};
use crate::schema::{ALLOWED_KEYS, RECORD_FIELD_COUNT};

/// Positional value pattern for one record: the number string, then the
/// five numeric fields.
const RECORD_PATTERN: &str = "snnnnn";

/// Call-site name reported in shape mismatches.
const RECORD_CALLER: &str = "CallLogWrite.writeBulk";

/// Validate an ordered batch of call-log record candidates.
///
/// Pure and stateless: the input is never mutated, and an empty batch is
/// valid with zero record checks. Stops at the first violating record; no
/// error aggregation.
///
/// Duplicate keys cannot survive JSON parsing (`serde_json` maps keep one
/// entry per key), so an unexpected extra key is caught by the field-count
/// check, or by the missing-field check when it displaces a required key.
pub fn validate_batch(records: &[Value]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        validate_record(index, record)?;
    }
    Ok(())
}

/// Validate a single record candidate at `index` within its batch.
fn validate_record(index: usize, record: &Value) -> Result<()> {
    let map = record.as_object();

    // Type pass over the values that exist, in insertion order. Absent
    // positions are the field-count check's concern, not a type error.
    let values: Vec<Arg<'_>> = map
        .map(|m| m.values().map(Arg::Value).collect())
        .unwrap_or_default();
    argscheck::check_present(RECORD_PATTERN, RECORD_CALLER, &values)
        .map_err(|mismatch| RufbuchError::FieldType { index, mismatch })?;

    // A non-object record has no fields at all.
    let found = map.map_or(0, |m| m.len());
    if found != RECORD_FIELD_COUNT {
        return Err(RufbuchError::SchemaFieldCount { index, found });
    }

    if let Some(m) = map {
        for field in ALLOWED_KEYS {
            if !m.contains_key(field) {
                return Err(RufbuchError::SchemaMissingField { index, field });
            }
        }
    }

    Ok(())
}
