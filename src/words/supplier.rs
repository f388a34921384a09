//! Word supplier backed by an external lexical API

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

use super::WordSource;
use crate::error::{DomainTripperError, Result};

/// Default word API endpoint
pub const DEFAULT_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Built-in vocabulary used whenever the word API cannot deliver
pub const FALLBACK_WORDS: &[&str] = &[
    "blue", "red", "green", "cat", "dog", "happy", "cloud", "sun", "book", "music",
];

/// Configuration for the word supplier
#[derive(Debug, Clone)]
pub struct WordSupplierConfig {
    /// Base URL of the word API
    pub endpoint: String,
    /// Number of words to request per fetch
    pub count: usize,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for WordSupplierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WORD_API_URL.to_string(),
            count: 100,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Vocabulary supplier for the word-based strategy
///
/// Fetched at most once per session, before the exploration loop begins.
pub struct WordSupplier {
    config: WordSupplierConfig,
    client: Client,
}

impl WordSupplier {
    /// Create a supplier with default configuration
    pub fn new() -> Self {
        Self::with_config(WordSupplierConfig::default())
    }

    /// Create a supplier with custom configuration
    pub fn with_config(config: WordSupplierConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("domain-tripper/0.1.0")
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to create HTTP client: {}. Using default.", e);
                Client::new()
            });

        Self { config, client }
    }

    /// Fixed fallback vocabulary as an owned list
    pub fn fallback() -> Vec<String> {
        FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
    }

    async fn fetch_words(&self) -> Result<Vec<String>> {
        // One length for the whole batch, drawn fresh per fetch.
        let length = rand::thread_rng().gen_range(3..=6);
        let url = format!(
            "{}?number={}&length={}",
            self.config.endpoint, self.config.count, length
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DomainTripperError::network(
                format!("word API request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let words: Vec<String> = response.json().await.map_err(|e| {
            DomainTripperError::parse(format!("word API response: {}", e), None)
        })?;

        Ok(words)
    }
}

impl Default for WordSupplier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WordSource for WordSupplier {
    /// Fetch a vocabulary, degrading silently to the built-in fallback
    ///
    /// A well-formed empty response is returned as-is; only acquisition
    /// failures trigger the fallback.
    async fn fetch(&self) -> Vec<String> {
        match self.fetch_words().await {
            Ok(words) => {
                tracing::debug!(count = words.len(), "fetched vocabulary");
                words
            }
            Err(e) => {
                tracing::warn!(error = %e, "word fetch failed, using fallback vocabulary");
                Self::fallback()
            }
        }
    }
}
