// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dash-store: materialized dashboard state, selectors and persistence

pub mod selectors;
pub mod snapshot;
mod state;
pub mod store;

pub use selectors::{
    current_organization, projects_for_organization, sites_for_project, Selectors,
};
pub use snapshot::PersistedState;
pub use state::{DashboardState, ResourceTable};
pub use store::Store;
