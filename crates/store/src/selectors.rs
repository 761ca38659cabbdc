// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read views over the materialized state

use dash_core::{clean_path, name_of, Entity, ResourceKind};
use serde_json::Value;

use crate::state::{DashboardState, ResourceTable};

/// Read views for one resource kind.
///
/// Selectors borrow from the state they are given; events that leave the
/// state untouched leave every view identical.
#[derive(Debug, Clone, Copy)]
pub struct Selectors {
    kind: ResourceKind,
}

impl Selectors {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// This kind's entity table.
    pub fn get_all<'a>(&self, state: &'a DashboardState) -> &'a ResourceTable {
        state.table(self.kind)
    }

    pub fn count_all(&self, state: &DashboardState) -> usize {
        self.get_all(state).len()
    }

    /// Exact lookup by name.
    pub fn get_by_name<'a>(&self, state: &'a DashboardState, name: &str) -> Option<&'a Entity> {
        self.get_all(state).get(name)
    }

    /// Resolve the entity addressed by a URL: the entity whose name is a
    /// segment-aligned prefix of the cleaned path. Tolerates scheme, host,
    /// query and trailing action segments (`/orgs/abc/edit`).
    pub fn get_for_url<'a>(&self, state: &'a DashboardState, url: &str) -> Option<&'a Entity> {
        let path = clean_path(url);
        self.get_all(state)
            .values()
            .find(|entity| name_of(entity).is_some_and(|name| path_prefixed(&path, name)))
    }

    /// The entity addressed by the current route, if any.
    pub fn get_for_current_url<'a>(&self, state: &'a DashboardState) -> Option<&'a Entity> {
        let url = state.route.as_ref()?.url.clone();
        self.get_for_url(state, &url)
    }
}

/// True when `name` is `path` or a parent path of it.
fn path_prefixed(path: &str, name: &str) -> bool {
    path == name || (path.starts_with(name) && path.as_bytes().get(name.len()) == Some(&b'/'))
}

/// The currently selected organization, when it is present in the table.
pub fn current_organization(state: &DashboardState) -> Option<&Entity> {
    let name = state.current_organization.as_deref()?;
    state.organizations.get(name)
}

/// Projects belonging to an organization, matched on the entity's
/// `organization` member.
pub fn projects_for_organization<'a>(
    state: &'a DashboardState,
    organization: &str,
) -> Vec<&'a Entity> {
    state
        .projects
        .values()
        .filter(|project| {
            project.get("organization").and_then(Value::as_str) == Some(organization)
        })
        .collect()
}

/// Sites nested under a project (name-prefix relationship).
pub fn sites_for_project<'a>(state: &'a DashboardState, project: &str) -> Vec<&'a Entity> {
    state
        .sites
        .values()
        .filter(|site| name_of(site).is_some_and(|name| path_prefixed(name, project)))
        .collect()
}

#[cfg(test)]
#[path = "selectors_tests.rs"]
mod tests;
