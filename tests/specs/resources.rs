// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource lifecycle specs.
//!
//! Verify that RPC lifecycle events flow through the dispatchers into the
//! normalized tables and back out through the selectors.

use crate::prelude::*;

#[tokio::test]
async fn listed_entities_land_in_table_order() {
    let h = harness();
    h.transport.succeed(
        "listSites",
        json!({ "sites": [
            { "name": "proj/abc/sites/a" },
            { "name": "proj/abc/sites/b" }
        ] }),
    );

    h.runtime.client().list(ResourceKind::Site, json!({}));
    eventually("sites are listed", || h.store.select(|s| s.sites.len() == 2)).await;

    let names = h.store.select(|s| s.sites.keys().cloned().collect::<Vec<_>>());
    assert_eq!(names, ["proj/abc/sites/a", "proj/abc/sites/b"]);

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn listing_twice_is_idempotent() {
    let h = harness();
    h.transport.succeed(
        "listProjects",
        json!({ "projects": [{ "name": "project/abc", "displayName": "Abc" }] }),
    );

    h.runtime.client().list(ResourceKind::Project, json!({}));
    eventually("projects are listed", || h.store.select(|s| s.projects.len() == 1)).await;
    let first = h.store.select(|s| s.projects.clone());

    h.runtime.client().list(ResourceKind::Project, json!({}));
    eventually("second listing settles", || {
        h.transport.calls().len() == 2 && h.store.select(|s| !s.is_loading())
    })
    .await;

    assert_eq!(h.store.select(|s| s.projects.clone()), first);

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn updates_merge_without_losing_fields() {
    let h = harness();
    h.transport.succeed(
        "getSite",
        json!({ "name": "proj/abc/sites/x", "primaryDomain": "x.com", "status": "running" }),
    );
    h.transport.succeed(
        "updateSite",
        json!({ "name": "proj/abc/sites/x", "primaryDomain": "y.com" }),
    );

    h.runtime.client().get(ResourceKind::Site, json!({ "name": "proj/abc/sites/x" }));
    eventually("site arrives", || h.store.select(|s| !s.sites.is_empty())).await;

    h.runtime.client().update(ResourceKind::Site, json!({ "name": "proj/abc/sites/x" }));
    eventually("domain is updated", || {
        h.store.select(|s| {
            s.sites
                .get("proj/abc/sites/x")
                .and_then(|site| site.get("primaryDomain"))
                .and_then(|domain| domain.as_str())
                == Some("y.com")
        })
    })
    .await;

    let status = h.store.select(|s| {
        s.sites.get("proj/abc/sites/x").and_then(|site| site.get("status")).cloned()
    });
    assert_eq!(status, Some(json!("running")), "merge dropped an existing field");

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn destroy_identity_comes_from_the_request() {
    let h = harness();
    h.transport.succeed("getSite", json!({ "name": "proj/abc/sites/x" }));
    // A delete response carries no body.
    h.transport.succeed("deleteSite", json!(null));

    h.runtime.client().get(ResourceKind::Site, json!({ "name": "proj/abc/sites/x" }));
    eventually("site arrives", || h.store.select(|s| !s.sites.is_empty())).await;

    h.runtime.client().destroy(ResourceKind::Site, json!({ "name": "proj/abc/sites/x" }));
    eventually("site is removed", || h.store.select(|s| s.sites.is_empty())).await;

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn unrelated_traffic_is_ignored() {
    let h = harness();

    h.runtime.client().invoke(RpcRequest {
        service: "dashboard.auth.v1.AuthService".to_string(),
        method: "refreshToken".to_string(),
        data: json!({}),
    });
    eventually("the call completes", || {
        h.transport.calls().len() == 1 && h.store.select(|s| !s.is_loading())
    })
    .await;

    let tables_empty = h.store.select(|s| {
        s.organizations.is_empty() && s.projects.is_empty() && s.sites.is_empty()
    });
    assert!(tables_empty, "unrelated traffic reached a resource table");

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn failures_leave_the_tables_untouched() {
    let h = harness();
    h.transport.fail("listSites", "service unavailable");

    h.runtime.client().list(ResourceKind::Site, json!({}));
    eventually("the failure drains the in-flight list", || {
        h.transport.calls().len() == 1 && h.store.select(|s| !s.is_loading())
    })
    .await;

    assert!(h.store.select(|s| s.sites.is_empty()));

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn selectors_resolve_entities_by_url() {
    let h = harness();
    h.transport.succeed(
        "listSites",
        json!({ "sites": [
            { "name": "project/abc/sites/x" },
            { "name": "project/abc/sites/xy" }
        ] }),
    );

    h.runtime.client().list(ResourceKind::Site, json!({}));
    eventually("sites are listed", || h.store.select(|s| s.sites.len() == 2)).await;

    let selectors = Selectors::new(ResourceKind::Site);
    let found = h.store.select(|s| {
        selectors
            .get_for_url(s, "https://host/project/abc/sites/x/edit?tab=domains")
            .and_then(dash_core::name_of)
            .map(str::to_string)
    });
    assert_eq!(found.as_deref(), Some("project/abc/sites/x"));

    let missing = h
        .store
        .select(|s| selectors.get_for_url(s, "/project/other/sites/zzz").is_some());
    assert!(!missing);

    h.runtime.shutdown().await;
}
