// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic resource-table event handlers.

use dash_core::{entity_name, merge_entity, ResourceKind, ResourcePayload, Verb};
use serde_json::Value;

use super::ResourceTable;

/// Fold one resource lifecycle action into a kind's table.
///
/// Entries enter the table only on successful LIST/GET/CREATE/UPDATE
/// responses and leave only on successful DESTROY responses. Requested and
/// failed phases, unknown verbs and malformed payloads are no-ops.
pub(crate) fn apply(
    table: &mut ResourceTable,
    kind: ResourceKind,
    verb: Verb,
    payload: &ResourcePayload,
) {
    let ResourcePayload::Succeeded { request, data } = payload else {
        return;
    };

    match verb {
        Verb::List => {
            if let Some(entries) = data.get(kind.plural()).and_then(Value::as_array) {
                for entry in entries {
                    merge(table, entry);
                }
            }
        }

        Verb::Get | Verb::Create | Verb::Update => merge(table, data),

        Verb::Destroy => {
            // The destroy response body is typically empty; the identity
            // comes from the echoed request payload.
            if let Some(name) = entity_name(&request.data) {
                table.shift_remove(name);
            }
        }
    }
}

/// Shallow merge-by-name. Entries without a usable `name` are dropped.
fn merge(table: &mut ResourceTable, entry: &Value) {
    let Some(name) = entity_name(entry) else {
        return;
    };
    let Some(incoming) = entry.as_object() else {
        return;
    };
    let slot = table.entry(name.to_string()).or_default();
    merge_entity(slot, incoming);
}
