// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-flight RPC tracking.

use dash_core::Event;

use super::DashboardState;

/// Track outstanding RPCs by structural equality of their requests.
///
/// Completion removes a single matching entry, so identical concurrent
/// requests drain one per completion. Completion of an unknown request is
/// a no-op.
pub(crate) fn apply(state: &mut DashboardState, event: &Event) {
    match event {
        Event::RpcInvoked { request } => {
            state.ongoing.push(request.clone());
        }

        Event::RpcSucceeded { request, .. } | Event::RpcFailed { request, .. } => {
            if let Some(position) = state.ongoing.iter().position(|r| r == request) {
                state.ongoing.remove(position);
            }
        }

        _ => {}
    }
}
