// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side route table: matching and URL building

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{name_of, Entity};
use crate::name::NameHelpers;

/// Route table: name → path template. Match order follows table order.
pub const ROUTES: [(&str, &str); 4] = [
    ("dashboard", "/"),
    ("organization", "/orgs/:slug?/:action?"),
    ("project", "/project/:slug?/:action?"),
    ("site", "/project/:project/sites/:slug?/:action?"),
];

/// Errors from route URL construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid route key: {0}")]
    UnknownRoute(String),
    #[error("missing required segment :{0}")]
    MissingParam(String),
}

/// A matched route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    /// Route-table key, `None` when the location matched no known route.
    pub key: Option<String>,
    /// The route's path template (the raw location when unmatched).
    pub path: String,
    /// The location that matched.
    pub url: String,
    /// Path segment captures plus query arguments.
    pub params: HashMap<String, String>,
}

/// Build a URL for a route key. Params fill the template's segments;
/// leftovers become query arguments.
pub fn route_for(key: &str, params: &HashMap<String, String>) -> Result<String, RouteError> {
    let (_, template) = ROUTES
        .iter()
        .find(|(k, _)| *k == key)
        .ok_or_else(|| RouteError::UnknownRoute(key.to_string()))?;
    let helpers = NameHelpers::new(template);
    let path = helpers.compile(params).map_err(RouteError::MissingParam)?;
    let query = query_string(params, &helpers.param_names());
    Ok(format!("/{path}{query}"))
}

/// Build a URL from an entity's hierarchical name, optionally appending an
/// `action` segment; other params become query arguments.
pub fn route_for_resource(entity: &Entity, params: &HashMap<String, String>) -> String {
    let name = name_of(entity).unwrap_or_default();
    let mut url = format!("/{name}");
    if let Some(action) = params.get("action") {
        url.push('/');
        url.push_str(action);
    }
    url.push_str(&query_string(params, &["action"]));
    url
}

/// Match a location against the route table. The first exact match wins;
/// query arguments fold into the captured params.
pub fn match_route(location: &str) -> Option<RouteMatch> {
    let path_part = location.split(['?', '#']).next().unwrap_or_default();
    for (key, template) in ROUTES {
        if let Some(mut params) = NameHelpers::new(template).match_exact(path_part) {
            for (k, v) in query_params(location) {
                params.entry(k).or_insert(v);
            }
            return Some(RouteMatch {
                key: Some(key.to_string()),
                path: template.to_string(),
                url: location.to_string(),
                params,
            });
        }
    }
    None
}

fn query_params(location: &str) -> Vec<(String, String)> {
    let Some((_, query)) = location.split_once('?') else {
        return Vec::new();
    };
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn query_string(params: &HashMap<String, String>, path_params: &[&str]) -> String {
    let mut extra: Vec<(&str, &str)> = params
        .iter()
        .filter(|(key, _)| !path_params.contains(&key.as_str()))
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    if extra.is_empty() {
        return String::new();
    }
    extra.sort_unstable();
    let joined: Vec<String> = extra.iter().map(|(key, value)| format!("{key}={value}")).collect();
    format!("?{}", joined.join("&"))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
