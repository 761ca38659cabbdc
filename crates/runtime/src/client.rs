// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RPC invocation client.

use dash_core::{method_name, Event, ResourceKind, RpcRequest, Verb};
use serde_json::Value;

use crate::bus::EventBus;
use crate::transport::RpcTransport;

/// Invokes RPCs and reports their lifecycle on the event bus.
///
/// Every invocation emits `rpc:invoked`, then exactly one of
/// `rpc:succeeded` or `rpc:failed` echoing the originating request. There
/// are no retries, and dropping interest in a result does not cancel the
/// underlying call.
#[derive(Clone, Debug)]
pub struct RpcClient<T> {
    bus: EventBus,
    transport: T,
}

impl<T: RpcTransport> RpcClient<T> {
    pub fn new(bus: EventBus, transport: T) -> Self {
        Self { bus, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Hand a request to the transport, emitting lifecycle events as it
    /// progresses. Returns immediately; the outcome arrives on the bus.
    pub fn invoke(&self, request: RpcRequest) {
        self.bus.emit(Event::RpcInvoked { request: request.clone() });

        let bus = self.bus.clone();
        let transport = self.transport.clone();
        tokio::spawn(async move {
            match transport.call(&request).await {
                Ok(data) => bus.emit(Event::RpcSucceeded { request, data }),
                Err(error) => bus.emit(Event::RpcFailed { request, error }),
            }
        });
    }

    fn request(kind: ResourceKind, verb: Verb, data: Value) -> RpcRequest {
        RpcRequest {
            service: kind.service().to_string(),
            method: method_name(kind, verb),
            data,
        }
    }

    pub fn list(&self, kind: ResourceKind, data: Value) {
        self.invoke(Self::request(kind, Verb::List, data));
    }

    pub fn get(&self, kind: ResourceKind, data: Value) {
        self.invoke(Self::request(kind, Verb::Get, data));
    }

    pub fn create(&self, kind: ResourceKind, data: Value) {
        self.invoke(Self::request(kind, Verb::Create, data));
    }

    pub fn update(&self, kind: ResourceKind, data: Value) {
        self.invoke(Self::request(kind, Verb::Update, data));
    }

    pub fn destroy(&self, kind: ResourceKind, data: Value) {
        self.invoke(Self::request(kind, Verb::Destroy, data));
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
