// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request verbs and RPC lifecycle statuses

use serde::{Deserialize, Serialize};

/// The CRUD-style operation kind carried by an RPC method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    List,
    Get,
    Create,
    Update,
    Destroy,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::List, Verb::Get, Verb::Create, Verb::Update, Verb::Destroy];

    /// Upper-case descriptor token (`LIST`, `DESTROY`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::List => "LIST",
            Verb::Get => "GET",
            Verb::Create => "CREATE",
            Verb::Update => "UPDATE",
            Verb::Destroy => "DESTROY",
        }
    }

    /// Match the leading token of a snake-split method name.
    ///
    /// `delete` maps to `Destroy`; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Verb> {
        match token {
            "list" => Some(Verb::List),
            "get" => Some(Verb::Get),
            "create" => Some(Verb::Create),
            "update" => Some(Verb::Update),
            "delete" | "destroy" => Some(Verb::Destroy),
            _ => None,
        }
    }

    /// Token used when composing RPC method names (`delete`, not `destroy`).
    pub fn method_token(&self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Destroy => "delete",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle phase of an in-flight RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Requested,
    Succeeded,
    Failed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Requested, Status::Succeeded, Status::Failed];

    /// Upper-case descriptor token (`REQUESTED`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Requested => "REQUESTED",
            Status::Succeeded => "SUCCEEDED",
            Status::Failed => "FAILED",
        }
    }

    /// Descriptor suffix (`_REQUESTED`, ...), used when deriving a status
    /// from an action-type string.
    pub fn suffix(&self) -> &'static str {
        match self {
            Status::Requested => "_REQUESTED",
            Status::Succeeded => "_SUCCEEDED",
            Status::Failed => "_FAILED",
        }
    }

    /// Derive a status from an action-type string by its suffix.
    pub fn from_action_type(action_type: &str) -> Option<Status> {
        Self::ALL.into_iter().find(|status| action_type.ends_with(status.suffix()))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "verb_tests.rs"]
mod tests;
