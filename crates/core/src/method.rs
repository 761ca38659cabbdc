// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RPC method-name derivation
//!
//! Method names follow the `<verb><Resource>` camelCase convention
//! (`listSites`, `deleteOrganization`). Derivation inspects the leading and
//! trailing snake-split tokens and degrades to `None` for anything else, so
//! dispatchers can silently ignore unrelated traffic.

use crate::resource::ResourceKind;
use crate::verb::Verb;

/// Split a camelCase or snake_case method name into lower-case tokens.
///
/// Runs of capitals stay together until a lower-case letter follows
/// (`invalidRPC` → `invalid`, `rpc`).
fn tokens(method: &str) -> Vec<String> {
    let chars: Vec<char> = method.chars().collect();
    let mut out = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev_lower || acronym_end {
                out.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// The verb encoded in a method name's leading token, if any.
pub fn verb_from_method(method: &str) -> Option<Verb> {
    Verb::from_token(tokens(method).first()?)
}

/// The resource kind encoded in a method name's trailing token, if any.
/// Both singular and plural forms match.
pub fn kind_from_method(method: &str) -> Option<ResourceKind> {
    ResourceKind::from_token(tokens(method).last()?)
}

/// Compose the RPC method name for a verb on a kind (`listSites`,
/// `deleteOrganization`). The exact inverse of the derivation above.
pub fn method_name(kind: ResourceKind, verb: Verb) -> String {
    let noun = match verb {
        Verb::List => kind.plural(),
        _ => kind.singular(),
    };
    format!("{}{}", verb.method_token(), capitalize(noun))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;
