// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events that flow through the runtime's broadcast bus

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::descriptor;
use crate::resource::ResourceKind;
use crate::rpc::{ResourcePayload, RpcError, RpcRequest};
use crate::verb::Verb;

/// Events that trigger state transitions in the runtime.
///
/// Serializes with `{"type": "domain:name", ...fields}` format. Unknown
/// type tags deserialize to `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An RPC was handed to the transport.
    #[serde(rename = "rpc:invoked")]
    RpcInvoked { request: RpcRequest },

    /// The transport reported success for a request.
    #[serde(rename = "rpc:succeeded")]
    RpcSucceeded { request: RpcRequest, data: Value },

    /// The transport reported failure for a request.
    #[serde(rename = "rpc:failed")]
    RpcFailed { request: RpcRequest, error: RpcError },

    /// A resource-specific lifecycle action, re-emitted by the kind's
    /// dispatcher with the generic payload forwarded unchanged.
    #[serde(rename = "resource:action")]
    Resource { kind: ResourceKind, verb: Verb, payload: ResourcePayload },

    /// The client-side location changed.
    #[serde(rename = "route:changed")]
    RouteChanged { path: String },

    /// An organization became the current working context.
    #[serde(rename = "organizations:selected")]
    OrganizationSelected { name: String },

    /// Full state reset (logout).
    #[serde(rename = "session:reset")]
    Reset,

    #[serde(rename = "system:shutdown")]
    Shutdown,

    /// Catch-all for unknown event types (extensibility)
    #[serde(other, skip_serializing)]
    Custom,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::RpcInvoked { .. } => "rpc:invoked",
            Event::RpcSucceeded { .. } => "rpc:succeeded",
            Event::RpcFailed { .. } => "rpc:failed",
            Event::Resource { .. } => "resource:action",
            Event::RouteChanged { .. } => "route:changed",
            Event::OrganizationSelected { .. } => "organizations:selected",
            Event::Reset => "session:reset",
            Event::Shutdown => "system:shutdown",
            Event::Custom => "custom",
        }
    }

    /// The dispatched action-type string for resource actions
    /// (`"@ sites / LIST_SUCCEEDED"`); `None` for other events.
    pub fn action_type(&self) -> Option<String> {
        match self {
            Event::Resource { kind, verb, payload } => Some(format!(
                "@ {} / {}",
                kind.plural(),
                descriptor(*verb, payload.status())
            )),
            _ => None,
        }
    }

    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::RpcInvoked { request } => format!("{t} {}", request.method),
            Event::RpcSucceeded { request, .. } => format!("{t} {}", request.method),
            Event::RpcFailed { request, error } => {
                format!("{t} {} error={}", request.method, error.message)
            }
            Event::Resource { .. } => self.action_type().unwrap_or_else(|| t.to_string()),
            Event::RouteChanged { path } => format!("{t} {path}"),
            Event::OrganizationSelected { name } => format!("{t} {name}"),
            Event::Reset | Event::Shutdown | Event::Custom => t.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
