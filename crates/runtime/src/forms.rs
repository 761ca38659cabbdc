// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form submission flows.
//!
//! A submission either creates or updates its entry, decided by whether the
//! entry already carries a persisted name. The handler then waits for the
//! corresponding succeeded/failed resource action, completes the
//! submission, and surfaces a notification.

use dash_core::{is_new_entry, route_for, Event, ResourceKind, Status, Verb};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::bus::EventBus;
use crate::client::RpcClient;
use crate::notify::{Intent, Notifier};
use crate::transport::RpcTransport;

/// Forms managed by the dashboard, one per resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormName {
    Organization,
    Project,
    Site,
}

impl FormName {
    pub fn kind(&self) -> ResourceKind {
        match self {
            FormName::Organization => ResourceKind::Organization,
            FormName::Project => ResourceKind::Project,
            FormName::Site => ResourceKind::Site,
        }
    }
}

/// Submission failure surfaced to the form.
///
/// Field-level detail from the transport is not guaranteed to survive the
/// lifecycle round-trip; the form receives this generic error and the
/// danger notification carries the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("submission failed")]
pub struct SubmissionError;

/// A submitted form: values plus a completion channel.
#[derive(Debug)]
pub struct Submission {
    pub form: FormName,
    /// Form values, keyed by the resource's plural slice name.
    pub values: Value,
    pub done: oneshot::Sender<Result<(), SubmissionError>>,
}

/// Drain the submission channel, handling each submission concurrently.
pub(crate) async fn run_worker<T, N>(
    bus: EventBus,
    client: RpcClient<T>,
    notifier: N,
    mut rx: mpsc::Receiver<Submission>,
) where
    T: RpcTransport,
    N: Notifier,
{
    while let Some(submission) = rx.recv().await {
        debug!(form = ?submission.form, "form submitted");
        tokio::spawn(handle_submission(
            bus.clone(),
            client.clone(),
            notifier.clone(),
            submission,
        ));
    }
}

/// Process one submission: create or update the entry, then race the
/// matching succeeded and failed resource actions.
///
/// The race deliberately has no timeout: a transport that never reports
/// completion stalls the submission indefinitely. Callers that need a
/// bound should wrap the completion future in `tokio::time::timeout`.
pub(crate) async fn handle_submission<T, N>(
    bus: EventBus,
    client: RpcClient<T>,
    notifier: N,
    submission: Submission,
) where
    T: RpcTransport,
    N: Notifier,
{
    let Submission { form, values, done } = submission;
    let kind = form.kind();
    let verb = if is_new_entry(values.get(kind.plural())) { Verb::Create } else { Verb::Update };

    // Subscribe before invoking so the outcome cannot slip past the race.
    let mut reader = bus.subscribe();
    match verb {
        Verb::Create => client.create(kind, values),
        _ => client.update(kind, values),
    }

    let outcome = loop {
        let Some(event) = reader.next().await else {
            // The bus is gone; the submission can never complete.
            return;
        };
        match &event {
            Event::Shutdown => {
                let _ = done.send(Err(SubmissionError));
                return;
            }
            Event::Resource { kind: k, verb: v, payload } if *k == kind && *v == verb => {
                match payload.status() {
                    Status::Succeeded => break Ok(()),
                    Status::Failed => break Err(SubmissionError),
                    Status::Requested => {}
                }
            }
            _ => {}
        }
    };

    let verb_word = match verb {
        Verb::Create => "create",
        _ => "update",
    };
    match outcome {
        Ok(()) => {
            let _ = done.send(Ok(()));
            notifier
                .notify(Intent::Success, &format!("{} {}d", kind.title(), verb_word))
                .await;
            if let Ok(path) = route_for("dashboard", &HashMap::new()) {
                bus.emit(Event::RouteChanged { path });
            }
        }
        Err(error) => {
            let _ = done.send(Err(error));
            notifier
                .notify(Intent::Danger, &format!("Failed to {verb_word} {}", kind.singular()))
                .await;
        }
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
