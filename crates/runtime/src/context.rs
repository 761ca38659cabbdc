// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working-organization context.
//!
//! Keeps the selected organization in step with the URL and the table:
//! prefer the organization the location addresses, else the one already
//! selected, else the first listed. Selection pins the `organization`
//! metadata on the transport so subsequent calls carry the context.

use dash_core::{is_empty_response, name_of, Event, ResourceKind, Status, Verb};
use dash_store::{current_organization, Selectors, Store};
use serde_json::json;
use tracing::debug;

use crate::bus::EventBus;
use crate::client::RpcClient;
use crate::transport::RpcTransport;

/// Engine-loop handler; runs after the event has been folded into the
/// store, so the table already reflects this event.
pub(crate) fn handle<T: RpcTransport>(
    event: &Event,
    store: &Store,
    client: &RpcClient<T>,
    bus: &EventBus,
) {
    match event {
        Event::OrganizationSelected { name } => {
            client.transport().set_metadata("organization", name);
        }

        Event::RouteChanged { .. } => decide(store, client, bus, true),

        Event::Resource { kind: ResourceKind::Organization, verb, payload }
            if payload.status() == Status::Succeeded =>
        {
            match verb {
                Verb::Create | Verb::Destroy => decide(store, client, bus, true),
                // A fresh listing settles the context. An empty listing
                // leaves nothing to select and must not re-trigger a list.
                Verb::List => {
                    let empty = payload
                        .data()
                        .is_some_and(|data| is_empty_response(ResourceKind::Organization, data));
                    if !empty {
                        decide(store, client, bus, false);
                    }
                }
                _ => {}
            }
        }

        _ => {}
    }
}

/// Pick the working organization, listing first when the table is empty
/// and listing is allowed for this trigger.
fn decide<T: RpcTransport>(store: &Store, client: &RpcClient<T>, bus: &EventBus, may_list: bool) {
    let selected = store.select(|state| {
        if state.organizations.is_empty() {
            return None;
        }
        let selectors = Selectors::new(ResourceKind::Organization);
        let from_url =
            selectors.get_for_current_url(state).and_then(name_of).map(str::to_string);
        let current = current_organization(state).and_then(name_of).map(str::to_string);
        let first = state.organizations.values().next().and_then(name_of).map(str::to_string);
        from_url.or(current).or(first)
    });

    match selected {
        Some(name) => {
            debug!(%name, "organization context");
            bus.emit(Event::OrganizationSelected { name });
        }
        None if may_list => client.list(ResourceKind::Organization, json!({})),
        None => {}
    }
}
