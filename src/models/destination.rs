//! Destination fact model and its closed continent/type keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;

/// Continent a destination belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    Europe,
    Asia,
    NorthAmerica,
    SouthAmerica,
    Africa,
    Australia,
}

impl Continent {
    /// Every continent in authoring order
    pub const ALL: [Continent; 6] = [
        Continent::Europe,
        Continent::Asia,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Africa,
        Continent::Australia,
    ];

    /// Canonical lowercase token, e.g. `north_america`
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Continent::Europe => "europe",
            Continent::Asia => "asia",
            Continent::NorthAmerica => "north_america",
            Continent::SouthAmerica => "south_america",
            Continent::Africa => "africa",
            Continent::Australia => "australia",
        }
    }

    /// Human readable name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Africa => "Africa",
            Continent::Australia => "Australia",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Continent {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|continent| continent.token() == s)
            .ok_or_else(|| {
                AdvisorError::invalid_input(format!(
                    "Unknown continent '{s}'. Must be one of: {}",
                    Continent::ALL.map(Continent::token).join(", ")
                ))
            })
    }
}

/// Kind of trip a destination is known for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    Beach,
    Mountain,
    City,
    Historical,
    Adventure,
}

impl DestinationType {
    /// Every destination type in authoring order
    pub const ALL: [DestinationType; 5] = [
        DestinationType::Beach,
        DestinationType::Mountain,
        DestinationType::City,
        DestinationType::Historical,
        DestinationType::Adventure,
    ];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            DestinationType::Beach => "beach",
            DestinationType::Mountain => "mountain",
            DestinationType::City => "city",
            DestinationType::Historical => "historical",
            DestinationType::Adventure => "adventure",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DestinationType::Beach => "Beach",
            DestinationType::Mountain => "Mountain",
            DestinationType::City => "City",
            DestinationType::Historical => "Historical",
            DestinationType::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DestinationType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DestinationType::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| {
                AdvisorError::invalid_input(format!(
                    "Unknown travel type '{s}'. Must be one of: {}",
                    DestinationType::ALL.map(DestinationType::token).join(", ")
                ))
            })
    }
}

/// A place to visit, as supplied by a fact store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
    pub continent: Continent,
    #[serde(rename = "type")]
    pub kind: DestinationType,
    /// Price per person
    pub cost: f64,
}

impl Destination {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        continent: Continent,
        kind: DestinationType,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            continent,
            kind,
            cost,
        }
    }

    /// Check the record invariants a fact store must guarantee
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(AdvisorError::invalid_input("Destination name cannot be empty"));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(AdvisorError::invalid_input(format!(
                "Destination '{}' has an invalid cost: {}",
                self.name, self.cost
            )));
        }
        Ok(())
    }
}
