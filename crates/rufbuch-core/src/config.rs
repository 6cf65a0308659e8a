// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plugin configuration.

use serde::{Deserialize, Serialize};

/// Settings for the call-log write plugin front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Service identifier announced to the bridge dispatcher.
    pub service: String,
    /// Permission flag forwarded by the typed write path. `false` tells the
    /// native side it should still request the write permission.
    pub assume_permission: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            service: crate::schema::SERVICE.to_owned(),
            assume_permission: false,
        }
    }
}
