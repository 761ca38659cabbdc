// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing notification seam.

use async_trait::async_trait;
use tracing::{info, warn};

/// Visual intent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Success,
    Danger,
}

/// Adapter for surfacing notifications to the user.
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    async fn notify(&self, intent: Intent, message: &str);
}

/// Default notifier: structured log lines only.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, intent: Intent, message: &str) {
        match intent {
            Intent::Success => info!(%message, "notification"),
            Intent::Danger => warn!(%message, "notification"),
        }
    }
}

/// Recording notifier for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug, Default)]
pub struct FakeNotifier {
    notices: std::sync::Arc<parking_lot::Mutex<Vec<(Intent, String)>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(Intent, String)> {
        self.notices.lock().clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, intent: Intent, message: &str) {
        self.notices.lock().push((intent, message.to_string()));
    }
}
