//! Vocabulary acquisition module

pub mod supplier;

// Re-export main functionality
pub use supplier::{WordSupplier, WordSupplierConfig, FALLBACK_WORDS};

use async_trait::async_trait;

/// Trait for vocabulary sources
///
/// A source always returns a vocabulary; acquisition failures degrade inside
/// the implementation instead of surfacing to the caller.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Obtain a working vocabulary of short lowercase words
    async fn fetch(&self) -> Vec<String>;
}
