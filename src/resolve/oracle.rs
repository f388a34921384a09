//! Existence oracle backed by DNS-over-HTTPS

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use super::ExistenceCheck;
use crate::error::{DomainTripperError, Result};

/// Default DNS-over-HTTPS endpoint (JSON API)
pub const DEFAULT_DOH_URL: &str = "https://cloudflare-dns.com/dns-query";

/// Configuration for the existence oracle
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// DoH endpoint serving `application/dns-json`
    pub endpoint: String,
    /// Hard bound on one lookup, network behavior notwithstanding
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DOH_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Answers whether a candidate domain currently resolves
///
/// Performs a single A-record query per candidate. There is no retry of a
/// failed lookup; a false negative simply consumes one attempt upstream.
pub struct ExistenceOracle {
    config: OracleConfig,
    client: Client,
}

impl ExistenceOracle {
    /// Create an oracle with default configuration
    pub fn new() -> Self {
        Self::with_config(OracleConfig::default())
    }

    /// Create an oracle with custom configuration
    pub fn with_config(config: OracleConfig) -> Self {
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

    async fn lookup(&self, domain: &str) -> Result<bool> {
        let url = format!("{}?name={}&type=A", self.config.endpoint, domain);
        let timeout_secs = self.config.timeout.as_secs();

        let request = self
            .client
            .get(&url)
            .header("Accept", "application/dns-json")
            .send();

        let response = timeout(self.config.timeout, request)
            .await
            .map_err(|_| DomainTripperError::timeout("DNS lookup", timeout_secs))?
            .map_err(|e| DomainTripperError::network(e.to_string(), None, Some(url.clone())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainTripperError::network(
                format!("DoH request failed with status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainTripperError::network(e.to_string(), None, Some(url)))?;

        let dns_response: DnsResponse = serde_json::from_str(&text)
            .map_err(|e| DomainTripperError::parse(e.to_string(), Some(text)))?;

        Ok(interpret(&dns_response))
    }
}

impl Default for ExistenceOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExistenceCheck for ExistenceOracle {
    /// Check whether the domain resolves, collapsing all trouble to `false`
    async fn exists(&self, domain: &str) -> bool {
        match self.lookup(domain).await {
            Ok(exists) => {
                tracing::debug!(domain = %domain, exists, "DNS lookup completed");
                exists
            }
            Err(e) => {
                tracing::debug!(domain = %domain, error = %e, "DNS lookup failed");
                false
            }
        }
    }
}

/// A domain exists when the resolver reports no error and at least one answer
fn interpret(response: &DnsResponse) -> bool {
    response.status == 0 && !response.answer.is_empty()
}

/// DNS JSON response structures
#[derive(Debug, Deserialize)]
struct DnsResponse {
    #[serde(rename = "Status")]
    status: i32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DnsAnswer>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct DnsAnswer {
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
    data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DnsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_interpret_answer_present() {
        let response = parse(
            r#"{"Status":0,"Answer":[{"name":"example.com","type":1,"TTL":300,"data":"93.184.216.34"}]}"#,
        );
        assert!(interpret(&response));
    }

    #[test]
    fn test_interpret_nxdomain() {
        // NXDOMAIN: Status 3, no Answer section at all.
        let response = parse(r#"{"Status":3}"#);
        assert!(!interpret(&response));
    }

    #[test]
    fn test_interpret_noerror_without_answers() {
        let response = parse(r#"{"Status":0,"Answer":[]}"#);
        assert!(!interpret(&response));
    }

    #[test]
    fn test_interpret_error_status_with_answers() {
        let response = parse(
            r#"{"Status":2,"Answer":[{"name":"example.com","type":1,"data":"93.184.216.34"}]}"#,
        );
        assert!(!interpret(&response));
    }

    #[tokio::test]
    async fn test_exists_collapses_unreachable_endpoint_to_false() {
        let oracle = ExistenceOracle::with_config(OracleConfig {
            endpoint: "http://127.0.0.1:9/dns-query".to_string(),
            timeout: Duration::from_secs(1),
        });
        assert!(!oracle.exists("example.com").await);
    }

    #[test]
    fn test_default_oracle_config() {
        let config = OracleConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.endpoint, DEFAULT_DOH_URL);
    }
}
