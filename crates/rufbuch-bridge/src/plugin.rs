// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Call-log write plugin front-end.
//
// The embedding app hands over an untyped batch plus a permission flag; the
// plugin shape-checks the call, validates every record, and only then hands
// the batch unchanged to the bridge dispatcher. Validation failures return
// synchronously — the callback pair is reserved for results from the native
// side. No partial dispatch: one bad record rejects the whole batch.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use rufbuch_core::argscheck::{self, Arg, ShapeMismatch};
use rufbuch_core::error::{Result, RufbuchError};
use rufbuch_core::schema::{ACTION_CLEAR, ACTION_WRITE_BULK};
use rufbuch_core::{CallLogRecord, PluginConfig, validator};

use crate::traits::{BridgeDispatcher, ErrorCallback, SuccessCallback};

const WRITE_BULK_CALLER: &str = "CallLogWrite.writeBulk";
const CLEAR_CALLER: &str = "CallLogWrite.clear";

/// The call-log write plugin, bound to one bridge dispatcher.
///
/// Stateless apart from its configuration; construct one per dispatcher and
/// share it freely.
pub struct CallLogWrite {
    dispatcher: Arc<dyn BridgeDispatcher>,
    config: PluginConfig,
}

impl CallLogWrite {
    pub fn new(dispatcher: Arc<dyn BridgeDispatcher>) -> Self {
        Self::with_config(dispatcher, PluginConfig::default())
    }

    pub fn with_config(dispatcher: Arc<dyn BridgeDispatcher>, config: PluginConfig) -> Self {
        Self { dispatcher, config }
    }

    /// Write a batch of call-log entries to the device.
    ///
    /// `batch` must be a JSON array of record objects and both callbacks
    /// must be supplied; the full signature is checked as `a*ff` before any
    /// record is inspected. `has_permission` is forwarded uninterpreted —
    /// `false` tells the native side to request the write permission first.
    ///
    /// On success the batch is dispatched unchanged, in order, and exactly
    /// one of the two callbacks eventually resolves with the native result.
    pub fn write_bulk(
        &self,
        batch: &Value,
        has_permission: &Value,
        on_success: Option<SuccessCallback>,
        on_error: Option<ErrorCallback>,
    ) -> Result<()> {
        argscheck::check_args(
            "a*ff",
            WRITE_BULK_CALLER,
            &[
                Arg::Value(batch),
                Arg::Value(has_permission),
                Arg::Callback {
                    present: on_success.is_some(),
                },
                Arg::Callback {
                    present: on_error.is_some(),
                },
            ],
        )
        .map_err(RufbuchError::ArgumentShape)?;

        match (batch.as_array(), on_success, on_error) {
            (Some(records), Some(call_success), Some(call_error)) => {
                validator::validate_batch(records)?;

                debug!(
                    platform = self.dispatcher.platform_name(),
                    records = records.len(),
                    "dispatching bulk call-log write"
                );
                self.dispatcher.exec(
                    call_success,
                    call_error,
                    &self.config.service,
                    ACTION_WRITE_BULK,
                    vec![batch.clone(), has_permission.clone()],
                );
                Ok(())
            }
            // The shape check above already rejected anything that lands here.
            _ => Err(RufbuchError::ArgumentShape(ShapeMismatch {
                caller: WRITE_BULK_CALLER,
                index: 0,
                expected: "array",
                actual: "missing",
            })),
        }
    }

    /// Typed write path: serialize records (canonical key order) and follow
    /// [`CallLogWrite::write_bulk`], with the permission flag taken from
    /// the plugin configuration.
    pub fn write_records(
        &self,
        records: &[CallLogRecord],
        on_success: SuccessCallback,
        on_error: ErrorCallback,
    ) -> Result<()> {
        let batch = serde_json::to_value(records)?;
        let has_permission = Value::Bool(self.config.assume_permission);
        self.write_bulk(&batch, &has_permission, Some(on_success), Some(on_error))
    }

    /// Clear the device call log.
    pub fn clear(
        &self,
        on_success: Option<SuccessCallback>,
        on_error: Option<ErrorCallback>,
    ) -> Result<()> {
        argscheck::check_args(
            "ff",
            CLEAR_CALLER,
            &[
                Arg::Callback {
                    present: on_success.is_some(),
                },
                Arg::Callback {
                    present: on_error.is_some(),
                },
            ],
        )
        .map_err(RufbuchError::ArgumentShape)?;

        match (on_success, on_error) {
            (Some(call_success), Some(call_error)) => {
                debug!(
                    platform = self.dispatcher.platform_name(),
                    "dispatching call-log clear"
                );
                self.dispatcher.exec(
                    call_success,
                    call_error,
                    &self.config.service,
                    ACTION_CLEAR,
                    vec![],
                );
                Ok(())
            }
            _ => Err(RufbuchError::ArgumentShape(ShapeMismatch {
                caller: CLEAR_CALLER,
                index: 0,
                expected: "function",
                actual: "missing",
            })),
        }
    }

    /// Platform name of the bound dispatcher.
    pub fn platform_name(&self) -> &str {
        self.dispatcher.platform_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use serde_json::json;

    use rufbuch_core::schema::CallType;

    use crate::recording::RecordingDispatcher;

    fn plugin() -> (Arc<RecordingDispatcher>, CallLogWrite) {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let plugin = CallLogWrite::new(dispatcher.clone());
        (dispatcher, plugin)
    }

    /// Helper: a callback pair feeding a channel, tagged by which side fired.
    fn callback_pair(
        tx: &mpsc::Sender<(&'static str, Value)>,
    ) -> (Option<SuccessCallback>, Option<ErrorCallback>) {
        let success_tx = tx.clone();
        let error_tx = tx.clone();
        (
            Some(Box::new(move |v| {
                success_tx.send(("success", v)).expect("send")
            })),
            Some(Box::new(move |v| error_tx.send(("error", v)).expect("send"))),
        )
    }

    fn valid_record() -> Value {
        json!({
            "number": "+15551234567",
            "date": 1_700_000_000_000_i64,
            "duration": 30,
            "type": 1,
            "new": 1,
            "is_read": 0
        })
    }

    #[test]
    fn valid_batch_dispatches_unchanged() {
        let (dispatcher, plugin) = plugin();
        let (tx, rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        let batch = json!([valid_record()]);
        plugin
            .write_bulk(&batch, &json!(false), on_success, on_error)
            .expect("valid batch");

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].service, "CallLogWrite");
        assert_eq!(calls[0].action, "writeBulk");
        assert_eq!(calls[0].args, vec![batch, json!(false)]);

        let (channel, payload) = rx.recv().expect("success resolved");
        assert_eq!(channel, "success");
        assert_eq!(payload, json!(1));
    }

    #[test]
    fn empty_batch_dispatches_with_permission_flag() {
        let (dispatcher, plugin) = plugin();
        let (tx, _rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        plugin
            .write_bulk(&json!([]), &json!(true), on_success, on_error)
            .expect("empty batch is valid");

        assert_eq!(dispatcher.calls()[0].args, vec![json!([]), json!(true)]);
    }

    #[test]
    fn missing_field_is_rejected_before_dispatch() {
        let (dispatcher, plugin) = plugin();
        let (tx, rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        let batch = json!([{
            "number": "+15551234567",
            "date": 1_700_000_000_000_i64,
            "duration": 30,
            "type": 1,
            "new": 1
        }]);
        let err = plugin
            .write_bulk(&batch, &json!(false), on_success, on_error)
            .expect_err("five fields");

        assert!(matches!(err, RufbuchError::SchemaFieldCount { .. }));
        assert!(dispatcher.calls().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn mistyped_number_is_rejected_before_dispatch() {
        let (dispatcher, plugin) = plugin();
        let (tx, _rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        let batch = json!([{
            "number": 15551234567_i64,
            "date": 1_700_000_000_000_i64,
            "duration": 30,
            "type": 1,
            "new": 1,
            "is_read": 0
        }]);
        let err = plugin
            .write_bulk(&batch, &json!(false), on_success, on_error)
            .expect_err("numeric number field");

        assert!(matches!(err, RufbuchError::FieldType { index: 0, .. }));
        assert!(dispatcher.calls().is_empty());
    }

    #[test]
    fn omitted_error_callback_fails_shape_check_first() {
        let (dispatcher, plugin) = plugin();
        let (tx, _rx) = mpsc::channel();
        let (on_success, _) = callback_pair(&tx);

        // The batch is also invalid; the outer shape check must win.
        let batch = json!([{"number": 42}]);
        let err = plugin
            .write_bulk(&batch, &json!(false), on_success, None)
            .expect_err("missing error callback");

        assert!(matches!(
            err,
            RufbuchError::ArgumentShape(ref m) if m.index == 3 && m.actual == "missing"
        ));
        assert!(dispatcher.calls().is_empty());
    }

    #[test]
    fn non_array_batch_fails_shape_check() {
        let (dispatcher, plugin) = plugin();
        let (tx, _rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        let err = plugin
            .write_bulk(&json!({}), &json!(false), on_success, on_error)
            .expect_err("batch must be an array");

        assert!(matches!(
            err,
            RufbuchError::ArgumentShape(ref m) if m.index == 0 && m.expected == "array"
        ));
        assert!(dispatcher.calls().is_empty());
    }

    #[test]
    fn repeat_dispatch_sends_identical_arguments() {
        let (dispatcher, plugin) = plugin();
        let batch = json!([valid_record()]);

        for _ in 0..2 {
            let (tx, _rx) = mpsc::channel();
            let (on_success, on_error) = callback_pair(&tx);
            plugin
                .write_bulk(&batch, &json!(true), on_success, on_error)
                .expect("valid batch");
        }

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0].args[0], batch);
    }

    #[test]
    fn typed_records_dispatch_with_configured_permission() {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let plugin = CallLogWrite::with_config(
            dispatcher.clone(),
            PluginConfig {
                assume_permission: true,
                ..PluginConfig::default()
            },
        );
        let (tx, rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        let records: rufbuch_core::CallLogBatch = vec![
            CallLogRecord::new("+15551234567", 1_700_000_000_000, 30, CallType::Incoming),
            CallLogRecord::new("+15557654321", 1_700_000_100_000, 0, CallType::Missed).mark_read(),
        ];
        plugin
            .write_records(&records, on_success.expect("success"), on_error.expect("error"))
            .expect("typed records are canonical");

        let calls = dispatcher.calls();
        assert_eq!(calls[0].args[1], json!(true));
        assert_eq!(
            calls[0].args[0],
            serde_json::to_value(&records).expect("serialize")
        );

        let (channel, payload) = rx.recv().expect("resolved");
        assert_eq!((channel, payload), ("success", json!(2)));
    }

    #[test]
    fn clear_dispatches_with_no_arguments() {
        let (dispatcher, plugin) = plugin();
        let (tx, rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        plugin.clear(on_success, on_error).expect("clear dispatches");

        let calls = dispatcher.calls();
        assert_eq!(calls[0].action, "clear");
        assert!(calls[0].args.is_empty());

        let (channel, payload) = rx.recv().expect("resolved");
        assert_eq!((channel, payload), ("success", json!(0)));
    }

    #[test]
    fn clear_requires_both_callbacks() {
        let (dispatcher, plugin) = plugin();
        let (tx, _rx) = mpsc::channel();
        let (on_success, _) = callback_pair(&tx);

        let err = plugin.clear(on_success, None).expect_err("missing callback");
        assert!(matches!(
            err,
            RufbuchError::ArgumentShape(ref m) if m.index == 1 && m.actual == "missing"
        ));
        assert!(dispatcher.calls().is_empty());
    }

    #[test]
    fn configured_service_name_reaches_the_dispatcher() {
        let dispatcher = Arc::new(RecordingDispatcher::new());
        let plugin = CallLogWrite::with_config(
            dispatcher.clone(),
            PluginConfig {
                service: "CallLogWriteDebug".into(),
                ..PluginConfig::default()
            },
        );
        let (tx, _rx) = mpsc::channel();
        let (on_success, on_error) = callback_pair(&tx);

        plugin
            .write_bulk(&json!([]), &json!(false), on_success, on_error)
            .expect("valid");
        assert_eq!(dispatcher.calls()[0].service, "CallLogWriteDebug");
    }
}
