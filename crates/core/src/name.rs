// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical resource-name parsing and building
//!
//! Resource names are path strings (`orgs/abc`, `project/abc/sites/xyz`)
//! that identify an entity and encode its position in the parent/child
//! hierarchy. A pattern (`project/:project/sites/:slug`) compiles to a
//! parser/builder pair; parsing never fails, it degrades to a canonical
//! empty payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One segment of a name or route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `:name` — required
    Param(String),
    /// `:name?` — optional, only meaningful in trailing position
    OptionalParam(String),
}

/// Structural pieces of a parsed resource name.
///
/// A non-matching input yields the canonical empty payload: `slug`, `name`
/// and `parent` all `None`, a `url` of `/` and empty `params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub slug: Option<String>,
    pub name: Option<String>,
    /// Ancestor path when the pattern nests a parent identifier
    /// (`project/abc` for `project/abc/sites/xyz`).
    pub parent: Option<String>,
    pub url: String,
    pub params: HashMap<String, String>,
}

impl NameParts {
    pub fn empty() -> Self {
        Self { slug: None, name: None, parent: None, url: "/".to_string(), params: HashMap::new() }
    }

    pub fn is_match(&self) -> bool {
        self.name.is_some()
    }
}

impl Default for NameParts {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parser/builder pair compiled from a path pattern.
#[derive(Debug, Clone)]
pub struct NameHelpers {
    segments: Vec<Segment>,
}

impl NameHelpers {
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(rest) => match rest.strip_suffix('?') {
                    Some(name) => Segment::OptionalParam(name.to_string()),
                    None => Segment::Param(rest.to_string()),
                },
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Parse a name or URL into its structural parameters.
    ///
    /// Accepts full URLs (scheme, host, query and fragment are stripped)
    /// and paths carrying extra trailing segments; the match is anchored at
    /// the start of the path. Non-matching input yields
    /// [`NameParts::empty`].
    pub fn parse_name(&self, input: &str) -> NameParts {
        let path = clean_path(input);
        let segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut params = HashMap::new();
        let mut matched: Vec<&str> = Vec::new();
        let mut param_positions: Vec<usize> = Vec::new();
        let mut last_param: Option<String> = None;
        let mut idx = 0;

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => match segs.get(idx) {
                    Some(s) if *s == lit => {
                        matched.push(s);
                        idx += 1;
                    }
                    _ => return NameParts::empty(),
                },
                Segment::Param(name) => match segs.get(idx) {
                    Some(s) => {
                        params.insert(name.clone(), (*s).to_string());
                        last_param = Some((*s).to_string());
                        param_positions.push(matched.len());
                        matched.push(s);
                        idx += 1;
                    }
                    None => return NameParts::empty(),
                },
                Segment::OptionalParam(name) => {
                    if let Some(s) = segs.get(idx) {
                        params.insert(name.clone(), (*s).to_string());
                        last_param = Some((*s).to_string());
                        param_positions.push(matched.len());
                        matched.push(s);
                        idx += 1;
                    }
                }
            }
        }

        let name = matched.join("/");
        let parent = if param_positions.len() >= 2 {
            let end = param_positions[param_positions.len() - 2];
            Some(matched[..=end].join("/"))
        } else {
            None
        };
        let slug = params.get("slug").cloned().or(last_param);
        NameParts { slug, parent, url: format!("/{name}"), name: Some(name), params }
    }

    /// Structurally match a full path: every path segment must be consumed.
    /// Returns the captured params on a match.
    pub fn match_exact(&self, path: &str) -> Option<HashMap<String, String>> {
        let cleaned = clean_path(path);
        let segs: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();

        let mut params = HashMap::new();
        let mut idx = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    if segs.get(idx).copied() != Some(lit.as_str()) {
                        return None;
                    }
                    idx += 1;
                }
                Segment::Param(name) => {
                    let s = segs.get(idx)?;
                    params.insert(name.clone(), (*s).to_string());
                    idx += 1;
                }
                Segment::OptionalParam(name) => {
                    if let Some(s) = segs.get(idx) {
                        params.insert(name.clone(), (*s).to_string());
                        idx += 1;
                    }
                }
            }
        }
        (idx == segs.len()).then_some(params)
    }

    /// Compile the pattern with the given params. The error carries the
    /// first missing required parameter's name.
    pub fn compile(&self, params: &HashMap<String, String>) -> Result<String, String> {
        let mut out: Vec<&str> = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => out.push(lit),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if !value.is_empty() => out.push(value),
                    _ => return Err(name.clone()),
                },
                Segment::OptionalParam(name) => {
                    if let Some(value) = params.get(name) {
                        if !value.is_empty() {
                            out.push(value);
                        }
                    }
                }
            }
        }
        Ok(out.join("/"))
    }

    /// Compile the pattern; `None` when required params are missing.
    pub fn build_name(&self, params: &HashMap<String, String>) -> Option<String> {
        self.compile(params).ok()
    }

    /// Names of the pattern's parameters, required and optional.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) | Segment::OptionalParam(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

/// Strip scheme, host, query and fragment from a URL-ish input, returning
/// the bare path without its leading slash.
pub fn clean_path(input: &str) -> String {
    let mut rest = input;
    if let Some(pos) = rest.find("://") {
        rest = &rest[pos + 3..];
        rest = match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "",
        };
    }
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    rest.trim_start_matches('/').to_string()
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "name_property_tests.rs"]
mod property_tests;
