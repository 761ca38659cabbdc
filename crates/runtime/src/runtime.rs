// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime assembly.

use dash_core::{Event, ResourceKind};
use dash_store::Store;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::info;

use crate::bus::EventBus;
use crate::client::RpcClient;
use crate::config::Config;
use crate::dispatcher::ResourceDispatcher;
use crate::forms::{self, FormName, Submission, SubmissionError};
use crate::notify::Notifier;
use crate::transport::RpcTransport;
use crate::{context, fetch};

/// The assembled client runtime.
///
/// Owns the store, the event bus and the background tasks: the engine
/// loop (the single state writer, which also drives the route and
/// organization flows), one dispatcher per resource kind, and the form
/// worker. Events emitted before [`Runtime::start`] have no subscribers
/// and are dropped.
pub struct Runtime<T: RpcTransport, N: Notifier> {
    config: Config,
    bus: EventBus,
    store: Store,
    client: RpcClient<T>,
    notifier: N,
    forms_tx: mpsc::Sender<Submission>,
    forms_rx: Option<mpsc::Receiver<Submission>>,
    tasks: Vec<JoinHandle<()>>,
}

impl<T: RpcTransport, N: Notifier> Runtime<T, N> {
    pub fn new(config: Config, transport: T, notifier: N) -> Self {
        let bus = EventBus::new(config.channel_capacity);
        let store = Store::new();
        let client = RpcClient::new(bus.clone(), transport);
        let (forms_tx, forms_rx) = mpsc::channel(config.form_buffer);
        Self {
            config,
            bus,
            store,
            client,
            notifier,
            forms_tx,
            forms_rx: Some(forms_rx),
            tasks: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn client(&self) -> &RpcClient<T> {
        &self.client
    }

    /// Spawn the background tasks. A second call is a no-op.
    pub fn start(&mut self) {
        let Some(forms_rx) = self.forms_rx.take() else {
            return;
        };

        // Engine loop: the single state writer. Each event is folded into
        // the store first, then the flow handlers see it, so they always
        // read a state that already reflects the event.
        let store = self.store.clone();
        let client = self.client.clone();
        let bus = self.bus.clone();
        let mut reader = self.bus.subscribe();
        self.tasks.push(tokio::spawn(async move {
            while let Some(event) = reader.next().await {
                if matches!(event, Event::Shutdown) {
                    break;
                }
                store.apply(&event);
                context::handle(&event, &store, &client, &bus);
                fetch::handle(&event, &store, &client);
            }
        }));

        for kind in ResourceKind::ALL {
            let dispatcher = ResourceDispatcher::new(kind);
            let reader = self.bus.subscribe();
            self.tasks.push(tokio::spawn(dispatcher.run(self.bus.clone(), reader)));
        }

        self.tasks.push(tokio::spawn(forms::run_worker(
            self.bus.clone(),
            self.client.clone(),
            self.notifier.clone(),
            forms_rx,
        )));

        info!(tasks = self.tasks.len(), "runtime started");
    }

    /// Submit form values and await the outcome.
    ///
    /// Completes when the corresponding succeeded or failed lifecycle
    /// action arrives; there is no built-in timeout (see [`forms`]).
    pub async fn submit(
        &self,
        form: FormName,
        values: serde_json::Value,
    ) -> Result<(), SubmissionError> {
        let (done, outcome) = oneshot::channel();
        if self.forms_tx.send(Submission { form, values, done }).await.is_err() {
            return Err(SubmissionError);
        }
        outcome.await.unwrap_or(Err(SubmissionError))
    }

    /// Emit shutdown and wait for the background tasks to drain.
    pub async fn shutdown(mut self) {
        self.bus.emit(Event::Shutdown);
        drop(self.forms_tx);
        for task in self.tasks.drain(..) {
            let _ = task.await;
        }
        info!("runtime stopped");
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
