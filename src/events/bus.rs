//! Publish/subscribe channel for confirmed dates.
//!
//! The picker publishes here instead of calling back into its owner, so any
//! number of listeners can react to a confirmation without the picker
//! knowing about them.

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::picker::calendar;

/// Emitted when the user confirms a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSelected {
    pub date: NaiveDate,
    /// Long form, e.g. "February 29, 2024"
    pub formatted: String,
}

impl DateSelected {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            formatted: calendar::format_long(date),
        }
    }
}

/// Cloneable handle to the date channel.
#[derive(Debug, Clone)]
pub struct DateBus {
    tx: broadcast::Sender<DateSelected>,
}

impl Default for DateBus {
    fn default() -> Self {
        Self::new(16)
    }
}

impl DateBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DateSelected> {
        self.tx.subscribe()
    }

    /// Publish to every current subscriber.
    ///
    /// Returns how many subscribers received it; zero is not an error.
    pub fn publish(&self, event: DateSelected) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
