//! Domain existence checking module

pub mod oracle;

// Re-export main functionality
pub use oracle::{ExistenceOracle, OracleConfig};

use async_trait::async_trait;

/// Trait for existence checks
///
/// An oracle always answers with a boolean; transient lookup trouble collapses
/// to `false` so the exploration loop never stalls or crashes on a bad lookup.
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    /// Whether the candidate domain currently resolves
    async fn exists(&self, domain: &str) -> bool;
}
