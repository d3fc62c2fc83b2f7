//! Recommendation facade
//!
//! Loads destinations from a fact store, filters them and attaches season
//! advice to every survivor. This is the single entry point presentation
//! layers call.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::Result;
use crate::facts::FactStore;
use crate::filter::{Criteria, filter};
use crate::models::{Destination, SeasonAdvice};
use crate::season;

/// A destination paired with its season advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub destination: Destination,
    pub season: SeasonAdvice,
}

impl Recommendation {
    /// Pair a destination with the advice for its own type and continent
    #[must_use]
    pub fn for_destination(destination: Destination) -> Self {
        let season = season::advise(destination.kind, destination.continent);
        Self {
            destination,
            season,
        }
    }
}

/// Travel recommendation service over a fact store
pub struct TravelAdvisor<S> {
    store: S,
}

impl<S: FactStore> TravelAdvisor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every destination the store knows about
    pub fn destinations(&self) -> Result<Vec<Destination>> {
        self.store.load_destinations()
    }

    /// Season advice for a single destination
    #[must_use]
    pub fn advise_for(&self, destination: &Destination) -> SeasonAdvice {
        season::advise(destination.kind, destination.continent)
    }

    /// Destinations matching the criteria, each with its season advice
    ///
    /// Advice is keyed by the destination's own type and continent, not by
    /// the search criteria.
    #[instrument(skip(self))]
    pub fn recommend(&self, criteria: &Criteria) -> Result<Vec<Recommendation>> {
        criteria.validate()?;

        let destinations = self.store.load_destinations()?;
        let recommendations: Vec<Recommendation> = filter(&destinations, criteria)?
            .into_iter()
            .map(Recommendation::for_destination)
            .collect();

        info!(
            "Found {} recommendations out of {} destinations",
            recommendations.len(),
            destinations.len()
        );

        Ok(recommendations)
    }
}
