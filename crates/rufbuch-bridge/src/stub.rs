// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub dispatcher for desktop/CI builds where no native call-log API
// exists. Every request resolves the error callback with the
// `platform-unavailable` code.

use serde_json::Value;

use crate::traits::{BridgeDispatcher, ErrorCallback, SuccessCallback};

/// Error code delivered for every request on non-mobile platforms.
pub const PLATFORM_UNAVAILABLE: &str = "platform-unavailable";

/// No-op dispatcher returned on non-mobile platforms.
pub struct StubDispatcher;

impl BridgeDispatcher for StubDispatcher {
    fn exec(
        &self,
        _on_success: SuccessCallback,
        on_error: ErrorCallback,
        service: &str,
        action: &str,
        _args: Vec<Value>,
    ) {
        tracing::warn!(service, action, "bridge exec called on stub dispatcher");
        on_error(Value::String(PLATFORM_UNAVAILABLE.to_owned()));
    }

    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}
