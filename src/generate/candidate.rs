//! Random and word-based candidate generators

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Generate, ALPHABET, NAME_LEN_MAX, NAME_LEN_MIN, TLDS};
use crate::types::Strategy;

/// Generator for candidate domain names
///
/// Holds an injectable RNG so candidate sequences are reproducible in tests.
/// Candidates carry no identity beyond their text; repeats across calls are
/// possible and treated as independent attempts.
pub struct CandidateGenerator<R: Rng> {
    rng: R,
}

impl CandidateGenerator<StdRng> {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (for reproducible sequences)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CandidateGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CandidateGenerator<R> {
    /// Create a generator backed by the given RNG
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a `name.tld` with a uniformly random alphanumeric label
    pub fn random_domain(&mut self) -> String {
        let length = self.rng.gen_range(NAME_LEN_MIN..=NAME_LEN_MAX);
        let name: String = (0..length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())])
            .collect();
        format!("{}.{}", name, self.pick_tld())
    }

    /// Draw a `word1[sep][word2].tld` from the vocabulary
    ///
    /// Returns `None` on an empty vocabulary. Words are drawn with
    /// replacement, so `blue-blue.com` is a legitimate candidate.
    pub fn word_domain(&mut self, vocabulary: &[String]) -> Option<String> {
        if vocabulary.is_empty() {
            return None;
        }

        let count = self.rng.gen_range(1..=2);
        let separator = if self.rng.gen_bool(0.5) { "-" } else { "" };

        let words: Vec<&str> = (0..count)
            .map(|_| vocabulary[self.rng.gen_range(0..vocabulary.len())].as_str())
            .collect();

        let name = words.join(separator);
        Some(format!("{}.{}", name, self.pick_tld()))
    }

    fn pick_tld(&mut self) -> &'static str {
        TLDS[self.rng.gen_range(0..TLDS.len())]
    }
}

impl<R: Rng + Send> Generate for CandidateGenerator<R> {
    fn generate(&mut self, strategy: Strategy, vocabulary: &[String]) -> Option<String> {
        match strategy {
            Strategy::Random => Some(self.random_domain()),
            Strategy::WordBased => self.word_domain(vocabulary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_random_domain_shape() {
        let pattern = Regex::new(r"^[a-z0-9]{4,8}\.(com|net|org|jp)$").unwrap();
        let mut generator = CandidateGenerator::seeded(42);

        for _ in 0..500 {
            let domain = generator.random_domain();
            assert!(pattern.is_match(&domain), "bad candidate: {}", domain);
        }
    }

    #[test]
    fn test_random_strategy_always_produces() {
        let mut generator = CandidateGenerator::seeded(7);
        for _ in 0..100 {
            assert!(generator.generate(Strategy::Random, &[]).is_some());
        }
    }

    #[test]
    fn test_word_domain_shape() {
        let pattern = Regex::new(r"^(blue|cat)(-)?(blue|cat)?\.(com|net|org|jp)$").unwrap();
        let vocabulary = vocab(&["blue", "cat"]);
        let mut generator = CandidateGenerator::seeded(42);

        for _ in 0..500 {
            let domain = generator.word_domain(&vocabulary).unwrap();
            assert!(pattern.is_match(&domain), "bad candidate: {}", domain);
        }
    }

    #[test]
    fn test_word_domain_refuses_empty_vocabulary() {
        let mut generator = CandidateGenerator::seeded(42);
        assert_eq!(generator.word_domain(&[]), None);
        assert_eq!(generator.generate(Strategy::WordBased, &[]), None);
    }

    #[test]
    fn test_word_domain_draws_with_replacement() {
        // Single-word vocabulary: any two-word candidate must repeat it.
        let vocabulary = vocab(&["cat"]);
        let mut generator = CandidateGenerator::seeded(3);

        let mut saw_pair = false;
        for _ in 0..200 {
            let domain = generator.word_domain(&vocabulary).unwrap();
            let name = domain.split('.').next().unwrap();
            if name == "catcat" || name == "cat-cat" {
                saw_pair = true;
            }
        }
        assert!(saw_pair);
    }

    #[test]
    fn test_seeded_sequences_are_reproducible() {
        let mut a = CandidateGenerator::seeded(99);
        let mut b = CandidateGenerator::seeded(99);
        for _ in 0..20 {
            assert_eq!(a.random_domain(), b.random_domain());
        }
    }
}
