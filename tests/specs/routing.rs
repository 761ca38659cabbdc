// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Routing specs.
//!
//! Location changes are matched against the route table and hydrate any
//! URL-addressed resources the store is missing.

use crate::prelude::*;

#[tokio::test]
async fn deep_links_hydrate_missing_resources() {
    let h = harness();
    h.transport.succeed("getProject", json!({ "name": "project/abc" }));
    h.transport.succeed("getSite", json!({ "name": "project/abc/sites/xyz" }));

    h.runtime.bus().emit(Event::RouteChanged { path: "/project/abc/sites/xyz".to_string() });

    eventually("the project is fetched", || {
        h.store.select(|s| s.projects.contains_key("project/abc"))
    })
    .await;
    eventually("the site is fetched", || {
        h.store.select(|s| s.sites.contains_key("project/abc/sites/xyz"))
    })
    .await;

    // A second visit finds everything in the store and fetches nothing.
    let calls_before = h.transport.calls().len();
    h.runtime.bus().emit(Event::RouteChanged { path: "/project/abc/sites/xyz".to_string() });
    eventually("the second visit settles", || {
        h.store.select(|s| s.route.as_ref().is_some_and(|r| r.url.ends_with("xyz")))
    })
    .await;
    let refetched = h
        .transport
        .calls()
        .iter()
        .skip(calls_before)
        .any(|r| r.method == "getSite" || r.method == "getProject");
    assert!(!refetched, "hydration repeated for known resources");

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn matched_routes_capture_segments_and_query() {
    let h = harness();

    h.runtime.bus().emit(Event::RouteChanged { path: "/orgs/abc/edit?tab=domains".to_string() });

    eventually("the route is matched", || {
        h.store.select(|s| {
            s.route.as_ref().is_some_and(|route| route.key.as_deref() == Some("organization"))
        })
    })
    .await;

    let params = h.store.select(|s| s.route.as_ref().map(|route| route.params.clone()));
    let params = params.unwrap_or_default();
    assert_eq!(params.get("slug").map(String::as_str), Some("abc"));
    assert_eq!(params.get("action").map(String::as_str), Some("edit"));
    assert_eq!(params.get("tab").map(String::as_str), Some("domains"));

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn unmatched_locations_keep_the_raw_path() {
    let h = harness();

    h.runtime.bus().emit(Event::RouteChanged { path: "/totally/unknown/path".to_string() });

    eventually("the route is recorded", || h.store.select(|s| s.route.is_some())).await;
    let route = h.store.select(|s| s.route.clone());
    let route = route.unwrap_or_else(|| panic!("route missing"));
    assert_eq!(route.key, None);
    assert_eq!(route.url, "/totally/unknown/path");

    h.runtime.shutdown().await;
}
