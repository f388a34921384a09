//! Trip controller - drives the bounded exploration loop

use chrono::Utc;
use tokio::time::sleep;

use super::{CancelHandle, SessionWatch, TripPhase, TripProgress};
use crate::generate::{CandidateGenerator, Generate};
use crate::resolve::{ExistenceCheck, ExistenceOracle};
use crate::types::{AttemptRecord, ExplorationSession, Strategy, TripConfig, TripResult};
use crate::words::{WordSource, WordSupplier};

/// Orchestrates one exploration session at a time
///
/// Attempts are issued strictly sequentially. That keeps history in exact
/// issue order and avoids bursting the resolver; the only throttle is the
/// fixed pacing delay between non-terminal attempts.
pub struct TripController {
    config: TripConfig,
    generator: Box<dyn Generate>,
    oracle: Box<dyn ExistenceCheck>,
    words: Box<dyn WordSource>,
    watch: SessionWatch,
    cancel: CancelHandle,
    phase: TripPhase,
}

impl TripController {
    /// Create a controller wired to the live collaborators
    pub fn new(config: TripConfig) -> Self {
        Self::with_components(
            config,
            Box::new(CandidateGenerator::new()),
            Box::new(ExistenceOracle::new()),
            Box::new(WordSupplier::new()),
        )
    }

    /// Create a controller with injected collaborators
    pub fn with_components(
        config: TripConfig,
        generator: Box<dyn Generate>,
        oracle: Box<dyn ExistenceCheck>,
        words: Box<dyn WordSource>,
    ) -> Self {
        let watch = SessionWatch::new(&config);
        Self {
            config,
            generator,
            oracle,
            words,
            watch,
            cancel: CancelHandle::new(),
            phase: TripPhase::Idle,
        }
    }

    /// Read-only handle for observers of the live session
    pub fn watch(&self) -> SessionWatch {
        self.watch.clone()
    }

    /// Handle for cooperative cancellation between attempts
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Current trip phase
    pub fn phase(&self) -> TripPhase {
        self.phase
    }

    /// Run one complete trip, returning the settled session
    ///
    /// A call on a controller that already finished starts a brand-new session
    /// with cleared history and a reset counter.
    pub async fn run<F>(&mut self, on_progress: F) -> ExplorationSession
    where
        F: Fn(&TripProgress),
    {
        self.reset();

        let vocabulary = if self.config.strategy == Strategy::WordBased {
            self.phase = TripPhase::Preparing;
            self.report(&on_progress, "Fetching word list...".to_string(), None);

            let words = self.words.fetch().await;
            self.watch.write().vocabulary = words.clone();
            self.report(
                &on_progress,
                format!("{} words ready. Starting exploration...", words.len()),
                None,
            );
            words
        } else {
            Vec::new()
        };

        self.phase = TripPhase::Exploring;
        let opening = match self.config.strategy {
            Strategy::Random => "Exploring random domains...",
            Strategy::WordBased => "Exploring word domains...",
        };
        self.report(&on_progress, opening.to_string(), None);

        loop {
            if self.cancel.is_cancelled() {
                self.finish(TripResult::Aborted("cancelled".to_string()));
                self.report(&on_progress, "Trip cancelled.".to_string(), None);
                break;
            }

            let candidate = match self.generator.generate(self.config.strategy, &vocabulary) {
                Some(domain) => domain,
                None => {
                    // Empty vocabulary slipped through: a configuration
                    // inconsistency, distinct from budget exhaustion.
                    self.finish(TripResult::Aborted(
                        "generator produced no candidate".to_string(),
                    ));
                    self.report(
                        &on_progress,
                        "Sorry, something went wrong. Please try again.".to_string(),
                        None,
                    );
                    break;
                }
            };

            let (attempts, max_attempts) = {
                let mut session = self.watch.write();
                session.attempts += 1;
                session.history.push(AttemptRecord::pending(&candidate));
                (session.attempts, session.max_attempts)
            };

            self.report(
                &on_progress,
                format!("{}/{}: checking {} ...", attempts, max_attempts, candidate),
                None,
            );

            let exists = self.oracle.exists(&candidate).await;

            // The one permitted record mutation: settle the record just pushed.
            let record = {
                let mut session = self.watch.write();
                let record = session
                    .history
                    .last_mut()
                    .expect("history has the record pushed this iteration");
                record.settle(exists);
                record.clone()
            };

            if exists {
                self.finish(TripResult::Found(candidate.clone()));
                self.report(
                    &on_progress,
                    format!("Found! {}", candidate),
                    Some(record),
                );
                break;
            }

            if attempts >= max_attempts {
                self.finish(TripResult::Exhausted);
                self.report(
                    &on_progress,
                    format!("Tried {} times, nothing found.", max_attempts),
                    Some(record),
                );
                break;
            }

            self.report(
                &on_progress,
                format!("{}/{}: {} not found", attempts, max_attempts, candidate),
                Some(record),
            );

            sleep(self.config.pacing).await;
        }

        self.watch.snapshot()
    }

    /// Reset to a brand-new session for this controller's configuration
    fn reset(&mut self) {
        let mut session = self.watch.write();
        *session = ExplorationSession::new(self.config.strategy, self.config.max_attempts);
        self.phase = TripPhase::Idle;
    }

    fn finish(&mut self, result: TripResult) {
        self.phase = match &result {
            TripResult::Found(_) => TripPhase::Found,
            TripResult::Exhausted => TripPhase::Exhausted,
            TripResult::Aborted(_) => TripPhase::Aborted,
            TripResult::Running => TripPhase::Exploring,
        };

        let mut session = self.watch.write();
        session.result = result;
        session.finished_at = Some(Utc::now());
    }

    fn report<F>(&self, on_progress: &F, message: String, last_record: Option<AttemptRecord>)
    where
        F: Fn(&TripProgress),
    {
        let session = self.watch.snapshot();
        on_progress(&TripProgress {
            phase: self.phase,
            attempts: session.attempts,
            max_attempts: session.max_attempts,
            message,
            last_record,
        });
    }
}
