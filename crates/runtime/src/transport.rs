// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RPC transport seam.

use async_trait::async_trait;
use dash_core::{RpcError, RpcRequest};
use serde_json::Value;

/// Adapter for the remote RPC service.
///
/// A call reports exactly one of success-with-data or failure-with-error.
/// The wire format is the implementation's concern; everything on this side
/// of the seam consumes only that binary outcome.
#[async_trait]
pub trait RpcTransport: Clone + Send + Sync + 'static {
    async fn call(&self, request: &RpcRequest) -> Result<Value, RpcError>;

    /// Attach ambient metadata to subsequent calls (e.g. the working
    /// organization). Ignored by default.
    fn set_metadata(&self, _key: &str, _value: &str) {}
}

/// Scripted transport for tests: maps method names to outcomes and records
/// every call and metadata write.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug, Default)]
pub struct FakeTransport {
    inner: std::sync::Arc<parking_lot::Mutex<FakeTransportState>>,
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
struct FakeTransportState {
    outcomes: std::collections::HashMap<String, Result<Value, RpcError>>,
    calls: Vec<RpcRequest>,
    metadata: std::collections::HashMap<String, String>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a success for a method name.
    pub fn succeed(&self, method: &str, data: Value) {
        self.inner.lock().outcomes.insert(method.to_string(), Ok(data));
    }

    /// Script a failure for a method name.
    pub fn fail(&self, method: &str, message: &str) {
        self.inner.lock().outcomes.insert(method.to_string(), Err(RpcError::new(message)));
    }

    /// Every request handed to the transport, in call order.
    pub fn calls(&self) -> Vec<RpcRequest> {
        self.inner.lock().calls.clone()
    }

    pub fn metadata(&self, key: &str) -> Option<String> {
        self.inner.lock().metadata.get(key).cloned()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl RpcTransport for FakeTransport {
    async fn call(&self, request: &RpcRequest) -> Result<Value, RpcError> {
        let mut inner = self.inner.lock();
        inner.calls.push(request.clone());
        // Unscripted methods succeed with an empty body, like a service
        // that acknowledges without data.
        inner.outcomes.get(&request.method).cloned().unwrap_or(Ok(Value::Null))
    }

    fn set_metadata(&self, key: &str, value: &str) {
        self.inner.lock().metadata.insert(key.to_string(), value.to_string());
    }
}
