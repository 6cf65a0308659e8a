// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory dispatcher that records every exec call and resolves success
// immediately. Useful for tests and host-side development, the way the
// native writer would behave on a device with all permissions granted.

use std::sync::Mutex;

use serde_json::Value;

use crate::traits::{BridgeDispatcher, ErrorCallback, SuccessCallback};

/// One captured bridge invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecCall {
    pub service: String,
    pub action: String,
    pub args: Vec<Value>,
}

/// Dispatcher that captures requests instead of crossing into native code.
///
/// Success is resolved synchronously with the number of records in the
/// first argument, mirroring the inserted-count result of the real writer.
#[derive(Default)]
pub struct RecordingDispatcher {
    calls: Mutex<Vec<ExecCall>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All invocations captured so far, oldest first.
    pub fn calls(&self) -> Vec<ExecCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl BridgeDispatcher for RecordingDispatcher {
    fn exec(
        &self,
        on_success: SuccessCallback,
        _on_error: ErrorCallback,
        service: &str,
        action: &str,
        args: Vec<Value>,
    ) {
        tracing::debug!(service, action, "recording bridge exec");

        let affected = match args.first() {
            Some(Value::Array(records)) => records.len() as i64,
            _ => 0,
        };

        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ExecCall {
                service: service.to_owned(),
                action: action.to_owned(),
                args,
            });

        on_success(Value::from(affected));
    }

    fn platform_name(&self) -> &str {
        "Recording (host)"
    }
}
