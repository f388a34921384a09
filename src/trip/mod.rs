//! Exploration trip module - the bounded generate-then-check loop

pub mod controller;

// Re-export main functionality
pub use controller::TripController;

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::types::{AttemptRecord, ExplorationSession, TripConfig};

/// Phase of an exploration trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripPhase {
    /// No trip in progress
    Idle,
    /// Acquiring the vocabulary (word-based strategy only)
    Preparing,
    /// Generate-then-check loop running
    Exploring,
    /// A candidate resolved; trip over
    Found,
    /// Attempt budget spent without a hit
    Exhausted,
    /// Trip ended early (cancellation or generator inconsistency)
    Aborted,
}

impl TripPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripPhase::Found | TripPhase::Exhausted | TripPhase::Aborted)
    }
}

/// Progress report delivered on every state transition and every attempt
#[derive(Debug, Clone)]
pub struct TripProgress {
    pub phase: TripPhase,
    pub attempts: u32,
    pub max_attempts: u32,
    /// Human-readable status line for the presentation layer
    pub message: String,
    /// The record the current report is about, if any
    pub last_record: Option<AttemptRecord>,
}

/// Read-only handle onto a live session
///
/// Only the controller writes; observers take snapshots. History grows
/// append-only, and a record is never observable as Pending after its
/// lookup has returned.
#[derive(Clone)]
pub struct SessionWatch {
    inner: Arc<RwLock<ExplorationSession>>,
}

impl SessionWatch {
    pub(crate) fn new(config: &TripConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ExplorationSession::new(
                config.strategy,
                config.max_attempts,
            ))),
        }
    }

    /// Clone out the current session state
    pub fn snapshot(&self) -> ExplorationSession {
        self.inner.read().clone()
    }

    pub(crate) fn write(&self) -> parking_lot::RwLockWriteGuard<'_, ExplorationSession> {
        self.inner.write()
    }
}

/// Cooperative cancellation signal
///
/// Checked between attempts, never mid-attempt, so a Pending record already
/// written is settled before the trip stops.
#[derive(Clone, Default)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the trip to stop before its next attempt
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
