//! Core types and structures for domain-tripper

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Candidate generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    WordBased,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::WordBased => write!(f, "words"),
        }
    }
}

/// Outcome of a single existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pending,
    Exists,
    NotFound,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pending => write!(f, "pending"),
            Outcome::Exists => write!(f, "exists"),
            Outcome::NotFound => write!(f, "not-found"),
        }
    }
}

/// One generate-then-check cycle, as recorded in session history
///
/// Created in `Pending` the instant a candidate is chosen; settled exactly once
/// after the oracle responds. That settle is the only record mutation in the
/// system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub domain: String,
    pub outcome: Outcome,
    pub checked_at: Option<DateTime<Utc>>,
}

impl AttemptRecord {
    /// Create a fresh pending record for a chosen candidate
    pub fn pending(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            outcome: Outcome::Pending,
            checked_at: None,
        }
    }

    /// Settle the record with the oracle's answer
    pub(crate) fn settle(&mut self, exists: bool) {
        self.outcome = if exists {
            Outcome::Exists
        } else {
            Outcome::NotFound
        };
        self.checked_at = Some(Utc::now());
    }
}

/// Terminal result of an exploration session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripResult {
    Running,
    Found(String),
    Exhausted,
    Aborted(String),
}

impl TripResult {
    /// Whether the session has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TripResult::Running)
    }
}

/// One complete run of the exploration loop
///
/// Mutated only by the controller; observers read snapshots through
/// [`crate::trip::SessionWatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationSession {
    pub strategy: Strategy,
    pub vocabulary: Vec<String>,
    pub history: Vec<AttemptRecord>,
    pub attempts: u32,
    pub max_attempts: u32,
    pub result: TripResult,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ExplorationSession {
    pub fn new(strategy: Strategy, max_attempts: u32) -> Self {
        Self {
            strategy,
            vocabulary: Vec::new(),
            history: Vec::new(),
            attempts: 0,
            max_attempts,
            result: TripResult::Running,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// The discovered domain, if the session ended in `Found`
    pub fn found_domain(&self) -> Option<&str> {
        match &self.result {
            TripResult::Found(domain) => Some(domain),
            _ => None,
        }
    }
}

/// Configuration for an exploration trip
#[derive(Debug, Clone)]
pub struct TripConfig {
    /// Candidate generation strategy
    pub strategy: Strategy,
    /// Attempt ceiling for one session
    pub max_attempts: u32,
    /// Fixed throttle between non-terminal attempts (not a retry backoff)
    pub pacing: Duration,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Random,
            max_attempts: 50,
            pacing: Duration::from_millis(300),
        }
    }
}

impl TripConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_record_settles_once() {
        let mut record = AttemptRecord::pending("ab12.com");
        assert_eq!(record.outcome, Outcome::Pending);
        assert!(record.checked_at.is_none());

        record.settle(true);
        assert_eq!(record.outcome, Outcome::Exists);
        assert!(record.checked_at.is_some());
    }

    #[test]
    fn test_trip_result_terminality() {
        assert!(!TripResult::Running.is_terminal());
        assert!(TripResult::Found("ab12.com".to_string()).is_terminal());
        assert!(TripResult::Exhausted.is_terminal());
        assert!(TripResult::Aborted("cancelled".to_string()).is_terminal());
    }

    #[test]
    fn test_default_trip_config() {
        let config = TripConfig::default();
        assert_eq!(config.max_attempts, 50);
        assert_eq!(config.pacing, Duration::from_millis(300));
        assert_eq!(config.strategy, Strategy::Random);
    }

    #[test]
    fn test_session_found_domain() {
        let mut session = ExplorationSession::new(Strategy::Random, 50);
        assert_eq!(session.found_domain(), None);

        session.result = TripResult::Found("blue-cat.org".to_string());
        assert_eq!(session.found_domain(), Some("blue-cat.org"));
    }
}
