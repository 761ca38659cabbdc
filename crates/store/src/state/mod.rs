// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized state folded from runtime events

mod resources;
mod rpc;

use dash_core::{match_route, Entity, Event, ResourceKind, RouteMatch, RpcRequest, Status, Verb};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name-keyed entity table for one resource kind. Insertion order is
/// preserved for UI stability; every key equals its entity's `name`.
pub type ResourceTable = IndexMap<String, Entity>;

/// Materialized dashboard state built from runtime events.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub organizations: ResourceTable,
    pub projects: ResourceTable,
    pub sites: ResourceTable,
    /// Name of the currently selected organization.
    #[serde(default)]
    pub current_organization: Option<String>,
    /// The route currently addressed by the client.
    #[serde(default)]
    pub route: Option<RouteMatch>,
    /// RPCs handed to the transport and not yet completed.
    #[serde(skip)]
    pub ongoing: Vec<RpcRequest>,
}

impl DashboardState {
    pub fn table(&self, kind: ResourceKind) -> &ResourceTable {
        match kind {
            ResourceKind::Organization => &self.organizations,
            ResourceKind::Project => &self.projects,
            ResourceKind::Site => &self.sites,
        }
    }

    pub fn table_mut(&mut self, kind: ResourceKind) -> &mut ResourceTable {
        match kind {
            ResourceKind::Organization => &mut self.organizations,
            ResourceKind::Project => &mut self.projects,
            ResourceKind::Site => &mut self.sites,
        }
    }

    /// Apply an event to derive state changes.
    ///
    /// State is derived from events; events are facts about what happened.
    /// Resource handlers are idempotent (merges assign by name, removals
    /// are keyed) and total: malformed or unrecognized payloads leave the
    /// state untouched, so downstream readers can treat an unchanged state
    /// as unchanged views. The in-flight list is the exception by design —
    /// it counts invocations and completions one for one.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::RpcInvoked { .. } | Event::RpcSucceeded { .. } | Event::RpcFailed { .. } => {
                rpc::apply(self, event);
            }

            Event::Resource { kind, verb, payload } => {
                resources::apply(self.table_mut(*kind), *kind, *verb, payload);

                // A removed organization invalidates the projects that hung
                // off it.
                if *kind == ResourceKind::Organization
                    && *verb == Verb::Destroy
                    && payload.status() == Status::Succeeded
                {
                    self.projects.clear();
                }
            }

            Event::OrganizationSelected { name } => {
                self.current_organization = Some(name.clone());
            }

            Event::RouteChanged { path } => {
                self.route = Some(match_route(path).unwrap_or_else(|| RouteMatch {
                    key: None,
                    path: path.clone(),
                    url: path.clone(),
                    params: HashMap::new(),
                }));
            }

            Event::Reset => {
                *self = DashboardState::default();
            }

            Event::Shutdown | Event::Custom => {}
        }
    }

    /// True while any RPC is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.ongoing.is_empty()
    }
}

#[cfg(test)]
#[path = "../state_tests.rs"]
mod tests;
