//! Simulated data loading.
//!
//! A [`LoadingSimulator`] is a two-state machine:
//!
//! ```text
//!            trigger()                 delay elapsed
//!   Idle ───────────────▶ Loading ───────────────────▶ Idle
//!                          │   ▲
//!                          └───┘ trigger() is a no-op
//! ```
//!
//! The delay runs in a spawned tokio task that sleeps until a deadline fixed
//! at trigger time and then posts [`AppMessage::LoadingFinished`] to the UI
//! loop. The flag itself only ever changes on the UI loop, in
//! [`LoadingSimulator::trigger`], [`LoadingSimulator::finish`] and
//! [`LoadingSimulator::cancel`].

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::app::{AppMessage, SectionId};

/// Whether a simulated fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading {
        /// When the fetch started; the shimmer animation measures from here.
        started_at: Instant,
        /// When the fetch is scheduled to complete.
        deadline: Instant,
    },
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading { .. })
    }
}

/// Fake asynchronous fetch that flips a loading flag for a fixed delay.
#[derive(Debug)]
pub struct LoadingSimulator {
    section: SectionId,
    delay: Duration,
    state: LoadingState,
    /// Identifies the current fetch; completions carrying an older ticket are
    /// ignored.
    ticket: u64,
    pending: Option<JoinHandle<()>>,
}

impl LoadingSimulator {
    pub fn new(section: SectionId, delay: Duration) -> Self {
        Self {
            section,
            delay,
            state: LoadingState::Idle,
            ticket: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the current fetch will complete, if one is in flight.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LoadingState::Loading { deadline, .. } => Some(deadline),
            LoadingState::Idle => None,
        }
    }

    /// Start a simulated fetch.
    ///
    /// Returns `false` without touching the flag or the scheduled completion
    /// when a fetch is already in flight. Must be called within a tokio
    /// runtime.
    pub fn trigger(&mut self, tx: &UnboundedSender<AppMessage>) -> bool {
        if self.is_loading() {
            tracing::debug!(section = %self.section, "trigger ignored, already loading");
            return false;
        }

        let started_at = Instant::now();
        let deadline = started_at + self.delay;
        self.ticket = self.ticket.wrapping_add(1);

        let section = self.section;
        let ticket = self.ticket;
        let tx = tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // The receiver is gone once the UI loop has shut down.
            let _ = tx.send(AppMessage::LoadingFinished { section, ticket });
        }));

        self.state = LoadingState::Loading { started_at, deadline };
        tracing::info!(
            section = %self.section,
            delay_ms = self.delay.as_millis() as u64,
            "loading started"
        );
        true
    }

    /// Complete the fetch identified by `ticket`.
    ///
    /// Returns `false` for stale or duplicate completions.
    pub fn finish(&mut self, ticket: u64) -> bool {
        if !self.is_loading() || ticket != self.ticket {
            tracing::debug!(section = %self.section, ticket, "stale completion dropped");
            return false;
        }
        self.pending = None;
        self.state = LoadingState::Idle;
        tracing::info!(section = %self.section, "loading finished");
        true
    }

    /// Abandon any in-flight fetch. Its completion will never be applied.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!(section = %self.section, "pending load cancelled");
        }
        self.ticket = self.ticket.wrapping_add(1);
        self.state = LoadingState::Idle;
    }
}

impl Drop for LoadingSimulator {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
