// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Organization context specs.
//!
//! The working organization follows the location and the table, pins the
//! transport metadata, and survives restarts through the persisted slice.

use crate::prelude::*;

#[tokio::test]
async fn first_listed_organization_becomes_current() {
    let h = harness();
    h.transport.succeed(
        "listOrganizations",
        json!({ "organizations": [{ "name": "orgs/one" }, { "name": "orgs/two" }] }),
    );

    h.runtime.bus().emit(Event::RouteChanged { path: "/".to_string() });

    eventually("the first organization is selected", || {
        h.store.select(|s| s.current_organization.as_deref() == Some("orgs/one"))
    })
    .await;
    eventually("the transport metadata is pinned", || {
        h.transport.metadata("organization").as_deref() == Some("orgs/one")
    })
    .await;

    // A location that addresses an organization wins over the default.
    h.runtime.bus().emit(Event::RouteChanged { path: "/orgs/two/edit".to_string() });
    eventually("the url-addressed organization is selected", || {
        h.store.select(|s| s.current_organization.as_deref() == Some("orgs/two"))
    })
    .await;

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn destroying_an_organization_clears_its_projects() {
    let h = harness();
    h.transport.succeed(
        "listOrganizations",
        json!({ "organizations": [{ "name": "orgs/one" }, { "name": "orgs/two" }] }),
    );
    h.transport.succeed(
        "listProjects",
        json!({ "projects": [{ "name": "project/abc", "organization": "orgs/one" }] }),
    );
    h.transport.succeed("deleteOrganization", json!(null));

    h.runtime.client().list(ResourceKind::Organization, json!({}));
    h.runtime.client().list(ResourceKind::Project, json!({}));
    eventually("both listings land", || {
        h.store.select(|s| s.organizations.len() == 2 && s.projects.len() == 1)
    })
    .await;

    h.runtime.client().destroy(ResourceKind::Organization, json!({ "name": "orgs/one" }));
    eventually("the organization is removed", || {
        h.store.select(|s| s.organizations.len() == 1)
    })
    .await;

    assert!(h.store.select(|s| s.projects.is_empty()), "projects outlived their organization");
    eventually("the remaining organization takes over", || {
        h.store.select(|s| s.current_organization.as_deref() == Some("orgs/two"))
    })
    .await;

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn persisted_slice_round_trips_the_selection() {
    let h = harness();
    h.transport.succeed("listOrganizations", json!({ "organizations": [{ "name": "orgs/one" }] }));

    h.runtime.bus().emit(Event::RouteChanged { path: "/".to_string() });
    eventually("an organization is selected", || {
        h.store.select(|s| s.current_organization.is_some())
    })
    .await;

    let snapshot = h.store.snapshot();
    h.runtime.shutdown().await;

    // A fresh runtime restores only the selection; the tables start empty.
    let next = harness();
    next.store.restore(&snapshot);
    assert_eq!(
        next.store.select(|s| s.current_organization.clone()).as_deref(),
        Some("orgs/one")
    );
    assert!(next.store.select(|s| s.organizations.is_empty()));

    next.runtime.shutdown().await;
}

#[tokio::test]
async fn reset_restores_the_default_state() {
    let h = harness();
    h.transport.succeed("listOrganizations", json!({ "organizations": [{ "name": "orgs/one" }] }));

    h.runtime.bus().emit(Event::RouteChanged { path: "/".to_string() });
    eventually("state is populated", || {
        h.store.select(|s| !s.organizations.is_empty() && s.current_organization.is_some())
    })
    .await;

    h.runtime.bus().emit(Event::Reset);
    eventually("state is back to default", || {
        h.store.select(|s| {
            s.organizations.is_empty() && s.current_organization.is_none() && s.route.is_none()
        })
    })
    .await;

    h.runtime.shutdown().await;
}
