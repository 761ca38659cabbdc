// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted state slice.
//!
//! A small whitelist of state survives restarts — the working organization.
//! The storage medium is the embedder's concern; this type only defines
//! what is captured and how it is put back.

use serde::{Deserialize, Serialize};

use crate::state::DashboardState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub current_organization: Option<String>,
}

impl PersistedState {
    /// Capture the persisted slice of a state.
    pub fn snapshot(state: &DashboardState) -> Self {
        Self { current_organization: state.current_organization.clone() }
    }

    /// Restore the persisted slice into a state, leaving everything else
    /// untouched.
    pub fn restore(&self, state: &mut DashboardState) {
        state.current_organization = self.current_organization.clone();
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
