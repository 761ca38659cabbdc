// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-kind resource action dispatchers.

use dash_core::{kind_from_method, verb_from_method, ActionTypes, Event, ResourceKind, ResourcePayload};
use tracing::debug;

use crate::bus::{EventBus, EventReader};

/// Funnels generic RPC lifecycle events into one kind's resource actions.
///
/// [`ResourceDispatcher::react`] is pure and stateless, so any number of
/// dispatcher instances can observe the same shared event stream: each
/// re-emits only its own kind's traffic and ignores everything else.
#[derive(Debug, Clone)]
pub struct ResourceDispatcher {
    kind: ResourceKind,
    types: ActionTypes,
}

impl ResourceDispatcher {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind, types: ActionTypes::new(kind) }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Derive this kind's resource action from a generic lifecycle event.
    ///
    /// Returns `None` for non-RPC events, for traffic addressed to other
    /// kinds, and for method names with no recognizable verb or resource.
    /// The payload is forwarded unchanged.
    pub fn react(&self, event: &Event) -> Option<Event> {
        let method = rpc_method(event)?;
        if kind_from_method(method)? != self.kind {
            return None;
        }
        let verb = verb_from_method(method)?;
        let payload = payload_of(event)?;
        if !self.types.contains(verb, payload.status()) {
            return None;
        }

        debug!(action = self.types.get(verb, payload.status()), "resource action");
        Some(Event::Resource { kind: self.kind, verb, payload })
    }

    /// Observe the bus until shutdown, re-emitting this kind's actions.
    pub async fn run(self, bus: EventBus, mut reader: EventReader) {
        while let Some(event) = reader.next().await {
            if matches!(event, Event::Shutdown) {
                break;
            }
            if let Some(action) = self.react(&event) {
                bus.emit(action);
            }
        }
    }
}

/// The RPC method behind a lifecycle event (from the request directly, or
/// from the request echoed inside a response).
fn rpc_method(event: &Event) -> Option<&str> {
    match event {
        Event::RpcInvoked { request }
        | Event::RpcSucceeded { request, .. }
        | Event::RpcFailed { request, .. } => Some(&request.method),
        _ => None,
    }
}

fn payload_of(event: &Event) -> Option<ResourcePayload> {
    match event {
        Event::RpcInvoked { request } => {
            Some(ResourcePayload::Requested { request: request.clone() })
        }
        Event::RpcSucceeded { request, data } => {
            Some(ResourcePayload::Succeeded { request: request.clone(), data: data.clone() })
        }
        Event::RpcFailed { request, error } => {
            Some(ResourcePayload::Failed { request: request.clone(), error: error.clone() })
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
