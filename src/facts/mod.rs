//! Fact stores
//!
//! The engine only consumes a materialized list of destinations. Where the
//! facts come from is up to the store:
//! - [`Catalog`]: the built-in fact set, or any in-memory list
//! - [`FileFactStore`]: JSON or XML fact files

pub mod catalog;
pub mod file;

pub use catalog::Catalog;
pub use file::FileFactStore;

use crate::Result;
use crate::models::Destination;

/// Source of destination facts
pub trait FactStore: Send + Sync {
    /// Load every destination the store knows about, in store order
    fn load_destinations(&self) -> Result<Vec<Destination>>;
}

impl<S: FactStore + ?Sized> FactStore for Box<S> {
    fn load_destinations(&self) -> Result<Vec<Destination>> {
        (**self).load_destinations()
    }
}
