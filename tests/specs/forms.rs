// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form submission specs.
//!
//! A submission creates or updates its entry depending on whether it
//! already carries a persisted name, then completes with the raced
//! lifecycle outcome.

use crate::prelude::*;

#[tokio::test]
async fn new_entries_are_created() {
    let h = harness();
    h.transport.succeed("createProject", json!({ "name": "project/new", "displayName": "New" }));

    let result = h
        .runtime
        .submit(FormName::Project, json!({ "projects": { "displayName": "New" } }))
        .await;
    assert_eq!(result, Ok(()));

    assert_eq!(h.transport.calls()[0].method, "createProject");
    eventually("the project reaches the store", || {
        h.store.select(|s| s.projects.contains_key("project/new"))
    })
    .await;
    assert!(h.notifier.notices().contains(&(Intent::Success, "Project created".to_string())));

    // Success navigates back to the dashboard.
    eventually("the location returns to the dashboard", || {
        h.store.select(|s| {
            s.route.as_ref().is_some_and(|route| route.key.as_deref() == Some("dashboard"))
        })
    })
    .await;

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn named_entries_are_updated() {
    let h = harness();
    h.transport.succeed(
        "updateSite",
        json!({ "name": "project/abc/sites/x", "primaryDomain": "y.com" }),
    );

    let result = h
        .runtime
        .submit(
            FormName::Site,
            json!({ "sites": { "name": "project/abc/sites/x", "primaryDomain": "y.com" } }),
        )
        .await;
    assert_eq!(result, Ok(()));

    assert_eq!(h.transport.calls()[0].method, "updateSite");
    assert!(h.notifier.notices().contains(&(Intent::Success, "Site updated".to_string())));

    h.runtime.shutdown().await;
}

#[tokio::test]
async fn failed_submissions_reject_with_a_danger_notice() {
    let h = harness();
    h.transport.fail("createOrganization", "quota exhausted");

    let result = h
        .runtime
        .submit(FormName::Organization, json!({ "organizations": { "displayName": "Acme" } }))
        .await;
    assert_eq!(result, Err(SubmissionError));

    assert!(h
        .notifier
        .notices()
        .contains(&(Intent::Danger, "Failed to create organization".to_string())));
    assert!(h.store.select(|s| s.organizations.is_empty()));

    h.runtime.shutdown().await;
}
