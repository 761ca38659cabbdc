// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical action-type strings per resource kind

use crate::resource::ResourceKind;
use crate::verb::{Status, Verb};

/// Dictionary key identifying a lifecycle transition: `VERB_STATUS`.
pub fn descriptor(verb: Verb, status: Status) -> String {
    format!("{}_{}", verb.as_str(), status.as_str())
}

/// Immutable table of dispatched action-type strings for one kind.
///
/// Built once at construction time: every (verb, status) pair maps to
/// `"@ <plural> / <VERB>_<STATUS>"`. The table is total, so lookups never
/// miss and [`ActionTypes::decode`] is its exact inverse.
#[derive(Debug, Clone)]
pub struct ActionTypes {
    kind: ResourceKind,
    types: [[String; 3]; 5],
}

impl ActionTypes {
    pub fn new(kind: ResourceKind) -> Self {
        let types = Verb::ALL.map(|verb| {
            Status::ALL.map(|status| format!("@ {} / {}", kind.plural(), descriptor(verb, status)))
        });
        Self { kind, types }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The dispatched action-type string for a transition.
    pub fn get(&self, verb: Verb, status: Status) -> &str {
        &self.types[verb as usize][status as usize]
    }

    /// Whether the table carries a transition. A table built by
    /// [`ActionTypes::new`] is total; dispatchers still consult this
    /// before re-emitting.
    pub fn contains(&self, verb: Verb, status: Status) -> bool {
        !self.types[verb as usize][status as usize].is_empty()
    }

    /// The (verb, status) pair behind an action-type string, if it belongs
    /// to this kind's table.
    pub fn decode(&self, action_type: &str) -> Option<(Verb, Status)> {
        self.iter()
            .find(|(_, _, ty)| *ty == action_type)
            .map(|(verb, status, _)| (verb, status))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Verb, Status, &str)> {
        Verb::ALL.into_iter().flat_map(move |verb| {
            Status::ALL.into_iter().map(move |status| (verb, status, self.get(verb, status)))
        })
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
