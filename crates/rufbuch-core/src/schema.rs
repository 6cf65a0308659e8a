// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Call-log schema constants shared between the validator, the typed record
// type, and the bridge front-end. Field names mirror the Android
// `CallLog.Calls` column names.

use serde::{Deserialize, Serialize};

use crate::error::RufbuchError;

/// The phone number as the user entered it.
pub const NUMBER: &str = "number";

/// The date the call occurred, in milliseconds since the epoch.
pub const DATE: &str = "date";

/// The duration of the call in seconds.
pub const DURATION: &str = "duration";

/// The type of the call (incoming, outgoing or missed).
pub const TYPE: &str = "type";

/// Whether the call has been acknowledged: `1` if new, `0` otherwise.
pub const NEW: &str = "new";

/// Whether the entry has been read or otherwise consumed by the user.
/// Unlike [`NEW`], this implies the user has interacted with the entry.
pub const IS_READ: &str = "is_read";

/// Every key a call-log record must carry, in canonical column order.
pub const ALLOWED_KEYS: [&str; 6] = [NUMBER, DATE, DURATION, TYPE, NEW, IS_READ];

/// Required number of fields per record.
pub const RECORD_FIELD_COUNT: usize = ALLOWED_KEYS.len();

/// Service identifier announced to the bridge dispatcher.
pub const SERVICE: &str = "CallLogWrite";

/// Bridge action: write a batch of call-log entries.
pub const ACTION_WRITE_BULK: &str = "writeBulk";

/// Bridge action: clear the device call log.
pub const ACTION_CLEAR: &str = "clear";

/// Direction of a logged call, carried on the wire as its Android
/// `CallLog.Calls` numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum CallType {
    Incoming = 1,
    Outgoing = 2,
    Missed = 3,
}

impl CallType {
    /// Numeric wire code for this call type.
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl From<CallType> for i64 {
    fn from(t: CallType) -> i64 {
        t.code()
    }
}

impl TryFrom<i64> for CallType {
    type Error = RufbuchError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Incoming),
            2 => Ok(Self::Outgoing),
            3 => Ok(Self::Missed),
            other => Err(RufbuchError::InvalidCallType(other)),
        }
    }
}
