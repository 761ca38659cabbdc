// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared handle to the materialized state.

use std::sync::Arc;

use dash_core::Event;
use parking_lot::Mutex;

use crate::snapshot::PersistedState;
use crate::state::DashboardState;

/// Cloneable handle to the materialized state.
///
/// All mutation funnels through [`Store::apply`]; reads run a closure under
/// the lock so borrows never escape it. The event-processing loop is the
/// single writer, which serializes every state transition.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<DashboardState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an event into the state.
    pub fn apply(&self, event: &Event) {
        self.inner.lock().apply(event);
    }

    /// Run a read view against the current state.
    pub fn select<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Capture the persisted slice.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState::snapshot(&self.inner.lock())
    }

    /// Restore a previously captured persisted slice.
    pub fn restore(&self, persisted: &PersistedState) {
        persisted.restore(&mut self.inner.lock());
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
