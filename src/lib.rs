//! Domain Tripper - random domain discovery over live DNS
//!
//! A small CLI tool and library that probes randomly generated domain names
//! against DNS-over-HTTPS until one resolves or the attempt budget runs out.

pub mod error;
pub mod generate;
pub mod resolve;
pub mod trip;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use error::{DomainTripperError, Result};
pub use types::{
    AttemptRecord, ExplorationSession, Outcome, Strategy, TripConfig, TripResult,
};

// Re-export main functionality
pub use generate::{CandidateGenerator, Generate};
pub use resolve::{ExistenceCheck, ExistenceOracle};
pub use trip::{CancelHandle, SessionWatch, TripController, TripPhase, TripProgress};
pub use words::{WordSource, WordSupplier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
