// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dash-runtime: event bus, RPC client, dispatchers and flows
//!
//! The runtime wires the pieces together: RPC invocations emit lifecycle
//! events onto a broadcast bus, per-kind dispatchers funnel them into
//! resource actions, and a single store task folds everything into the
//! materialized state.

pub mod bus;
pub mod client;
pub mod config;
mod context;
pub mod dispatcher;
mod fetch;
pub mod forms;
pub mod notify;
pub mod runtime;
pub mod transport;

pub use bus::{EventBus, EventReader};
pub use client::RpcClient;
pub use config::{Config, ConfigError};
pub use dispatcher::ResourceDispatcher;
pub use forms::{FormName, Submission, SubmissionError};
pub use notify::{Intent, Notifier, TracingNotifier};
pub use runtime::Runtime;
pub use transport::RpcTransport;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifier;
#[cfg(any(test, feature = "test-support"))]
pub use transport::FakeTransport;
