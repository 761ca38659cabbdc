// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RPC request and lifecycle payload types
//!
//! These are the shapes validated at the transport boundary; everything
//! downstream (dispatchers, reducers) consumes them as tagged types instead
//! of reaching into loose JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::verb::Status;

/// A single RPC invocation descriptor.
///
/// Structural equality identifies the request while it is in flight, and
/// the transport echoes it back with the outcome, so responses correlate to
/// their requests without synthetic identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub service: String,
    pub method: String,
    #[serde(default)]
    pub data: Value,
}

/// A transport-reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("rpc failed: {message}")]
pub struct RpcError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    pub message: String,
}

impl RpcError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }
}

/// Lifecycle payload of a resource action: the generic RPC payload,
/// forwarded unchanged by the dispatchers.
///
/// The phase mirrors [`Status`]; a succeeded payload carries response data,
/// a failed one carries the error, and every phase carries the originating
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ResourcePayload {
    Requested { request: RpcRequest },
    Succeeded { request: RpcRequest, data: Value },
    Failed { request: RpcRequest, error: RpcError },
}

impl ResourcePayload {
    /// The originating request.
    pub fn request(&self) -> &RpcRequest {
        match self {
            ResourcePayload::Requested { request }
            | ResourcePayload::Succeeded { request, .. }
            | ResourcePayload::Failed { request, .. } => request,
        }
    }

    /// Response data, for succeeded payloads.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ResourcePayload::Succeeded { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The failure, for failed payloads.
    pub fn error(&self) -> Option<&RpcError> {
        match self {
            ResourcePayload::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ResourcePayload::Requested { .. } => Status::Requested,
            ResourcePayload::Succeeded { .. } => Status::Succeeded,
            ResourcePayload::Failed { .. } => Status::Failed,
        }
    }
}

#[cfg(test)]
#[path = "rpc_tests.rs"]
mod tests;
