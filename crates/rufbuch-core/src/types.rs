// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typed call-log records for callers constructing batches in Rust. The
// untrusted path (records arriving as JSON from the embedding app) bypasses
// this type and goes straight through the validator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::CallType;

/// One call-log entry. Field order matches [`crate::schema::ALLOWED_KEYS`],
/// so serialization yields keys in canonical column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallLogRecord {
    /// The phone number as the user entered it.
    pub number: String,
    /// Call start, in milliseconds since the epoch.
    pub date: i64,
    /// Call duration in seconds.
    pub duration: i64,
    /// Incoming, outgoing or missed.
    #[serde(rename = "type")]
    pub call_type: CallType,
    /// `1` if the call has not been acknowledged yet, `0` otherwise.
    pub new: u8,
    /// `1` if the user has interacted with the entry, `0` otherwise.
    pub is_read: u8,
}

impl CallLogRecord {
    /// Create a record that is still new and unread, the state a freshly
    /// written entry has on the device.
    pub fn new(
        number: impl Into<String>,
        date_ms: i64,
        duration_secs: i64,
        call_type: CallType,
    ) -> Self {
        Self {
            number: number.into(),
            date: date_ms,
            duration: duration_secs,
            call_type,
            new: 1,
            is_read: 0,
        }
    }

    /// Mark the entry as acknowledged (clears the new-flag).
    pub fn acknowledge(mut self) -> Self {
        self.new = 0;
        self
    }

    /// Mark the entry as read. Reading implies acknowledgement.
    pub fn mark_read(mut self) -> Self {
        self.new = 0;
        self.is_read = 1;
        self
    }

    /// Call start as a UTC timestamp. `None` if `date` is outside the
    /// chrono-representable range.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }
}

/// An ordered batch of call-log records; order is the order entries will be
/// written on the device.
pub type CallLogBatch = Vec<CallLogRecord>;
