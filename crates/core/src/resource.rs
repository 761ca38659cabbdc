// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource kinds managed by the dashboard

use serde::{Deserialize, Serialize};

use crate::name::NameHelpers;

/// A category of manageable entity.
///
/// The plural form doubles as the state-slice key and as the namespace of
/// action-type strings; the singular form appears in RPC method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "organizations")]
    Organization,
    #[serde(rename = "projects")]
    Project,
    #[serde(rename = "sites")]
    Site,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] =
        [ResourceKind::Organization, ResourceKind::Project, ResourceKind::Site];

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "organizations",
            ResourceKind::Project => "projects",
            ResourceKind::Site => "sites",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "organization",
            ResourceKind::Project => "project",
            ResourceKind::Site => "site",
        }
    }

    /// Capitalized singular, for user-facing copy.
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "Organization",
            ResourceKind::Project => "Project",
            ResourceKind::Site => "Site",
        }
    }

    /// Match a lower-case method-name token in either singular or plural form.
    pub fn from_token(token: &str) -> Option<ResourceKind> {
        Self::ALL.into_iter().find(|kind| kind.singular() == token || kind.plural() == token)
    }

    /// RPC service path serving this kind.
    pub fn service(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "dashboard.organizations.v1.OrganizationsService",
            ResourceKind::Project => "dashboard.projects.v1.ProjectsService",
            ResourceKind::Site => "dashboard.sites.v1.SitesService",
        }
    }

    /// Hierarchical name template for this kind's entities.
    pub fn name_pattern(&self) -> &'static str {
        match self {
            ResourceKind::Organization => "orgs/:slug",
            ResourceKind::Project => "project/:slug",
            ResourceKind::Site => "project/:project/sites/:slug",
        }
    }

    /// Name helpers compiled from [`ResourceKind::name_pattern`].
    pub fn name_helpers(&self) -> NameHelpers {
        NameHelpers::new(self.name_pattern())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plural())
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
