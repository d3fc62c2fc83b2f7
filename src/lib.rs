//! Travel Advisor - destination recommendations with best-season advice
//!
//! This library filters a destination fact base by continent, type and
//! budget, and attaches a deterministic "best season to visit" suggestion to
//! every match.

pub mod config;
pub mod error;
pub mod facts;
pub mod filter;
pub mod logging;
pub mod models;
pub mod recommend;
pub mod season;

// Re-export core types for public API
pub use crate::config::AdvisorConfig;
pub use error::AdvisorError;
pub use facts::{Catalog, FactStore, FileFactStore};
pub use filter::{Criteria, QuickFilter, filter};
pub use models::{Continent, Destination, DestinationType, SeasonAdvice};
pub use recommend::{Recommendation, TravelAdvisor};
pub use season::{advise, advise_lookup, advise_tokens};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
