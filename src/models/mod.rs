//! Data models for the travel advisor
//!
//! - Destination: fact records and their continent/type keys
//! - Advice: season recommendations derived per destination

pub mod advice;
pub mod destination;

pub use advice::SeasonAdvice;
pub use destination::{Continent, Destination, DestinationType};
