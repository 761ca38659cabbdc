// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Route-driven resource fetching.
//!
//! When the location changes, any nested resource addressed by the new URL
//! that is missing from the store is fetched, so deep links hydrate
//! themselves.

use dash_core::{Event, ResourceKind};
use dash_store::{Selectors, Store};
use serde_json::json;
use tracing::debug;

use crate::client::RpcClient;
use crate::transport::RpcTransport;

/// Kinds resolvable directly from a URL.
const URL_ADDRESSED: [ResourceKind; 2] = [ResourceKind::Project, ResourceKind::Site];

/// Engine-loop handler; runs after the event has been folded into the
/// store.
pub(crate) fn handle<T: RpcTransport>(event: &Event, store: &Store, client: &RpcClient<T>) {
    if let Event::RouteChanged { path } = event {
        fetch_missing(store, client, path);
    }
}

fn fetch_missing<T: RpcTransport>(store: &Store, client: &RpcClient<T>, path: &str) {
    for kind in URL_ADDRESSED {
        let parsed = kind.name_helpers().parse_name(path);
        let Some(name) = parsed.name else {
            continue;
        };
        let known =
            store.select(|state| Selectors::new(kind).get_by_name(state, &name).is_some());
        if !known {
            debug!(%name, kind = %kind, "fetching resource for route");
            client.get(kind, json!({ "name": name }));
        }
    }
}
