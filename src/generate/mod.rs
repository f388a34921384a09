//! Candidate generation module - produce domain names to probe

pub mod candidate;

// Re-export main functionality
pub use candidate::CandidateGenerator;

use crate::types::Strategy;

/// Top-level labels a candidate may carry
pub const TLDS: &[&str] = &["com", "net", "org", "jp"];

/// 36-symbol alphabet for the random strategy
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Name label length range for the random strategy (inclusive)
pub const NAME_LEN_MIN: usize = 4;
pub const NAME_LEN_MAX: usize = 8;

/// Trait for candidate production
///
/// The controller only sees this seam, so tests can script exact candidates.
pub trait Generate: Send {
    /// Produce one fresh candidate, or `None` when the strategy cannot act
    /// (word-based with an empty vocabulary). `None` is fatal to the session,
    /// not a retryable miss.
    fn generate(&mut self, strategy: Strategy, vocabulary: &[String]) -> Option<String>;
}
