// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for the workspace specs.

pub use dash_core::{Event, ResourceKind, RpcRequest};
pub use dash_runtime::{
    Config, FakeNotifier, FakeTransport, FormName, Intent, Runtime, SubmissionError,
};
pub use dash_store::{PersistedState, Selectors, Store};
pub use serde_json::json;

use std::time::Duration;

/// Upper bound for any single spec-level wait.
pub const SPEC_WAIT_MAX_MS: u64 = 2_000;

/// A booted runtime over fake adapters.
pub struct Harness {
    pub runtime: Runtime<FakeTransport, FakeNotifier>,
    pub transport: FakeTransport,
    pub notifier: FakeNotifier,
    pub store: Store,
}

pub fn harness() -> Harness {
    init_tracing();
    let transport = FakeTransport::new();
    let notifier = FakeNotifier::new();
    let mut runtime = Runtime::new(Config::default(), transport.clone(), notifier.clone());
    runtime.start();
    let store = runtime.store().clone();
    Harness { runtime, transport, notifier, store }
}

/// Poll until a condition holds, failing after [`SPEC_WAIT_MAX_MS`].
pub async fn eventually(description: &str, check: impl Fn() -> bool) {
    for _ in 0..(SPEC_WAIT_MAX_MS / 5) {
        if check() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("never happened: {description}");
}

/// Route runtime logs through the test harness when `RUST_LOG` is set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
