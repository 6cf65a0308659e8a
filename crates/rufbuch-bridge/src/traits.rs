// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic dispatcher trait for the native bridge.

use serde_json::Value;

/// Callback resolved with the native side's success payload (for bulk
/// writes, the number of inserted entries).
pub type SuccessCallback = Box<dyn FnOnce(Value) + Send>;

/// Callback resolved with the native side's error payload (an error code
/// string such as `permission-access`).
pub type ErrorCallback = Box<dyn FnOnce(Value) + Send>;

/// One-shot asynchronous request channel into native platform code.
///
/// `exec` is fire-and-forget from the caller's perspective: it returns
/// immediately, and the implementation eventually resolves exactly one of
/// the two callbacks, possibly from another thread. The argument list is
/// owned by the dispatcher from this point on and must reach the platform
/// side unchanged.
pub trait BridgeDispatcher: Send + Sync {
    /// Invoke `action` on `service` with the given positional arguments.
    fn exec(
        &self,
        on_success: SuccessCallback,
        on_error: ErrorCallback,
        service: &str,
        action: &str,
        args: Vec<Value>,
    );

    /// Human-readable platform name (e.g. "Android 14", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}
