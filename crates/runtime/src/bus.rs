// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broadcast event bus.
//!
//! One publish point fanning out to independent subscribers. Emission never
//! blocks; a subscriber that falls behind is skipped forward and keeps
//! reading.

use dash_core::Event;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Cloneable sending half of the bus.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to every current subscriber. An event emitted while
    /// nobody subscribes is dropped.
    pub fn emit(&self, event: Event) {
        debug!(event = %event.log_summary(), "emit");
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> EventReader {
        EventReader { rx: self.tx.subscribe() }
    }
}

/// Reading half of the bus.
#[derive(Debug)]
pub struct EventReader {
    rx: broadcast::Receiver<Event>,
}

impl EventReader {
    /// The next event, or `None` once every sender is gone. A lagged
    /// reader logs, skips ahead and keeps reading.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "event reader lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
