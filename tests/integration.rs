//! Integration tests for domain-tripper
//!
//! End-to-end trips with scripted collaborators, plus live-component
//! degradation behavior that needs no network.

use async_trait::async_trait;
use domain_tripper::{
    resolve::{ExistenceOracle, OracleConfig},
    trip::{TripController, TripPhase},
    types::{Outcome, Strategy, TripConfig, TripResult},
    words::{WordSource, WordSupplier, WordSupplierConfig},
    CandidateGenerator, ExistenceCheck, Generate,
};
use std::sync::Mutex;
use std::time::Duration;

struct ScriptedGenerator {
    script: Vec<String>,
    next: usize,
}

impl ScriptedGenerator {
    fn new(script: &[&str]) -> Self {
        Self {
            script: script.iter().map(|s| s.to_string()).collect(),
            next: 0,
        }
    }
}

impl Generate for ScriptedGenerator {
    fn generate(&mut self, _strategy: Strategy, _vocabulary: &[String]) -> Option<String> {
        let idx = self.next.min(self.script.len() - 1);
        self.next += 1;
        Some(self.script[idx].clone())
    }
}

struct TrueOnlyFor(&'static str);

#[async_trait]
impl ExistenceCheck for TrueOnlyFor {
    async fn exists(&self, domain: &str) -> bool {
        domain == self.0
    }
}

struct NeverExists;

#[async_trait]
impl ExistenceCheck for NeverExists {
    async fn exists(&self, _domain: &str) -> bool {
        false
    }
}

struct StaticWords(Vec<String>);

#[async_trait]
impl WordSource for StaticWords {
    async fn fetch(&self) -> Vec<String> {
        self.0.clone()
    }
}

fn fast_config(strategy: Strategy) -> TripConfig {
    TripConfig {
        strategy,
        max_attempts: 50,
        pacing: Duration::ZERO,
    }
}

#[tokio::test]
async fn test_trip_found_on_third_attempt() {
    // Random strategy, oracle answers true only for ab12.com, generator
    // scripted to yield it on attempt 3.
    let mut controller = TripController::with_components(
        fast_config(Strategy::Random),
        Box::new(ScriptedGenerator::new(&["q7x9.net", "m3k2pz.org", "ab12.com"])),
        Box::new(TrueOnlyFor("ab12.com")),
        Box::new(StaticWords(Vec::new())),
    );

    let session = controller.run(|_| {}).await;

    assert_eq!(session.result, TripResult::Found("ab12.com".to_string()));
    assert_eq!(session.attempts, 3);
    assert_eq!(session.history.len(), 3);
    assert_eq!(session.history[2].domain, "ab12.com");
    assert_eq!(session.history[2].outcome, Outcome::Exists);
    assert_eq!(session.history[0].outcome, Outcome::NotFound);
    assert_eq!(session.history[1].outcome, Outcome::NotFound);
    assert_eq!(session.found_domain(), Some("ab12.com"));
}

#[tokio::test]
async fn test_trip_aborts_on_empty_vocabulary() {
    // Word-based strategy with an empty vocabulary aborts on the very first
    // generation attempt, before any existence check.
    let mut controller = TripController::with_components(
        fast_config(Strategy::WordBased),
        Box::new(CandidateGenerator::seeded(11)),
        Box::new(NeverExists),
        Box::new(StaticWords(Vec::new())),
    );

    let session = controller.run(|_| {}).await;

    assert_eq!(
        session.result,
        TripResult::Aborted("generator produced no candidate".to_string())
    );
    assert_eq!(session.attempts, 0);
    assert!(session.history.is_empty());
    assert_eq!(controller.phase(), TripPhase::Aborted);
}

#[tokio::test]
async fn test_trip_exhausts_budget_with_real_generator() {
    let mut controller = TripController::with_components(
        fast_config(Strategy::Random),
        Box::new(CandidateGenerator::seeded(23)),
        Box::new(NeverExists),
        Box::new(StaticWords(Vec::new())),
    );

    let session = controller.run(|_| {}).await;

    assert_eq!(session.result, TripResult::Exhausted);
    assert_eq!(session.attempts, 50);
    assert_eq!(session.history.len(), 50);

    let pattern = regex::Regex::new(r"^[a-z0-9]{4,8}\.(com|net|org|jp)$").unwrap();
    for record in &session.history {
        assert!(pattern.is_match(&record.domain), "bad candidate: {}", record.domain);
        assert_eq!(record.outcome, Outcome::NotFound);
        assert!(record.checked_at.is_some());
    }
}

#[tokio::test]
async fn test_word_trip_degrades_to_fallback_vocabulary() {
    // Unreachable word API: the supplier falls back silently and the trip
    // proceeds with the built-in ten words.
    let supplier = WordSupplier::with_config(WordSupplierConfig {
        endpoint: "http://127.0.0.1:9/word".to_string(),
        count: 100,
        timeout: Duration::from_secs(1),
    });

    let mut controller = TripController::with_components(
        fast_config(Strategy::WordBased),
        Box::new(CandidateGenerator::seeded(31)),
        Box::new(NeverExists),
        Box::new(supplier),
    );

    let session = controller.run(|_| {}).await;

    assert_eq!(session.vocabulary, WordSupplier::fallback());
    assert_eq!(session.vocabulary.len(), 10);
    assert_eq!(session.result, TripResult::Exhausted);
    assert_eq!(session.attempts, 50);
}

#[tokio::test]
async fn test_unreachable_oracle_consumes_attempts_quietly() {
    // A dead resolver endpoint just yields false answers; the loop keeps its
    // termination guarantees instead of erroring out.
    let oracle = ExistenceOracle::with_config(OracleConfig {
        endpoint: "http://127.0.0.1:9/dns-query".to_string(),
        timeout: Duration::from_secs(1),
    });

    let mut controller = TripController::with_components(
        TripConfig {
            strategy: Strategy::Random,
            max_attempts: 3,
            pacing: Duration::ZERO,
        },
        Box::new(CandidateGenerator::seeded(47)),
        Box::new(oracle),
        Box::new(StaticWords(Vec::new())),
    );

    let session = controller.run(|_| {}).await;

    assert_eq!(session.result, TripResult::Exhausted);
    assert_eq!(session.attempts, 3);
    assert!(session.history.iter().all(|r| r.outcome == Outcome::NotFound));
}

#[tokio::test]
async fn test_progress_reports_observe_consistent_history() {
    let mut controller = TripController::with_components(
        fast_config(Strategy::Random),
        Box::new(ScriptedGenerator::new(&["trip1.com", "trip2.com", "trip3.com"])),
        Box::new(TrueOnlyFor("trip3.com")),
        Box::new(StaticWords(Vec::new())),
    );

    let watch = controller.watch();
    let messages: Mutex<Vec<String>> = Mutex::new(Vec::new());

    controller
        .run(|progress| {
            let snapshot = watch.snapshot();
            assert_eq!(snapshot.history.len() as u32, snapshot.attempts);
            messages.lock().unwrap().push(progress.message.clone());
        })
        .await;

    let messages = messages.into_inner().unwrap();
    assert!(messages.iter().any(|m| m.contains("1/50")));
    assert!(messages.last().unwrap().contains("Found! trip3.com"));

    // Snapshots taken after the run stay settled.
    let final_snapshot = watch.snapshot();
    assert_eq!(final_snapshot.result, TripResult::Found("trip3.com".to_string()));
}
