// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Open-shaped resource entities

use serde_json::{Map, Value};

use crate::resource::ResourceKind;

/// A resource record: a JSON object whose mandatory `name` member both
/// identifies the entity and encodes its position in the hierarchy
/// (`orgs/abc`, `project/abc/sites/xyz`).
pub type Entity = Map<String, Value>;

/// The `name` member of an entity-shaped JSON value, if present and
/// non-empty.
pub fn entity_name(value: &Value) -> Option<&str> {
    value.get("name").and_then(Value::as_str).filter(|name| !name.is_empty())
}

/// The `name` member of an entity, if present and non-empty.
pub fn name_of(entity: &Entity) -> Option<&str> {
    entity.get("name").and_then(Value::as_str).filter(|name| !name.is_empty())
}

/// True when a form entry has no persisted identity yet. Drives the
/// create-vs-update decision in form handling.
pub fn is_new_entry(entry: Option<&Value>) -> bool {
    match entry {
        None => true,
        Some(value) => entity_name(value).is_none(),
    }
}

/// Shallow merge-by-name: incoming members overwrite, members absent from
/// the incoming partial are preserved.
pub fn merge_entity(existing: &mut Entity, incoming: &Entity) {
    for (key, value) in incoming {
        existing.insert(key.clone(), value.clone());
    }
}

/// True when a LIST response payload carries no entries for the kind.
pub fn is_empty_response(kind: ResourceKind, data: &Value) -> bool {
    data.get(kind.plural()).and_then(Value::as_array).map_or(true, |entries| entries.is_empty())
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
