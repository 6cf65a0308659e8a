// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rufbuch — native platform bridge abstractions and the call-log write
// plugin front-end.
//
// The plugin validates batches on the Rust side and hands them to a
// `BridgeDispatcher`, the one-shot request channel into platform code. The
// real mobile implementations (JNI into the Android `ContentResolver`,
// objc2 on iOS) live with the host apps and plug in through the same trait;
// this crate ships the trait, a desktop/CI stub, and a recording dispatcher
// for host-side tests.

pub mod plugin;
pub mod recording;
pub mod stub;
pub mod traits;

pub use plugin::CallLogWrite;
pub use traits::{BridgeDispatcher, ErrorCallback, SuccessCallback};

/// Dispatcher for the current build target.
///
/// Desktop and CI builds get the stub, which resolves every request with a
/// `platform-unavailable` error payload.
pub fn platform_dispatcher() -> std::sync::Arc<dyn traits::BridgeDispatcher> {
    std::sync::Arc::new(stub::StubDispatcher)
}
