//! Filter stage
//!
//! Narrows a destination list by optional continent, type and maximum cost
//! constraints. Matching is conjunctive and the input order is preserved.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::error::AdvisorError;
use crate::models::{Continent, Destination, DestinationType};

/// Selector value that means "no constraint"
pub const ANY: &str = "Any";

/// Price ceiling used by the budget quick filter
pub const BUDGET_QUICK_FILTER_MAX_COST: f64 = 700.0;

/// Search criteria; `None` leaves that dimension unconstrained
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub continent: Option<Continent>,
    pub kind: Option<DestinationType>,
    pub max_cost: Option<f64>,
}

impl Criteria {
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_continent(mut self, continent: Continent) -> Self {
        self.continent = Some(continent);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: DestinationType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Build criteria from raw selector and budget input
    ///
    /// `"Any"` or an empty selector means no constraint; see [`parse_budget`]
    /// for the budget rules.
    pub fn parse(continent: &str, kind: &str, budget: &str) -> Result<Self> {
        Ok(Self {
            continent: parse_selector(continent)?,
            kind: parse_selector(kind)?,
            max_cost: parse_budget(budget)?,
        })
    }

    /// Reject a cost ceiling that is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if let Some(max_cost) = self.max_cost {
            if !max_cost.is_finite() || max_cost <= 0.0 {
                return Err(AdvisorError::invalid_input(format!(
                    "Maximum cost must be a positive number, got {max_cost}"
                )));
            }
        }
        Ok(())
    }

    /// Whether a destination satisfies every supplied constraint
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        self.continent.is_none_or(|c| destination.continent == c)
            && self.kind.is_none_or(|k| destination.kind == k)
            && self.max_cost.is_none_or(|max| destination.cost <= max)
    }

    /// True when no constraint is set
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.continent.is_none() && self.kind.is_none() && self.max_cost.is_none()
    }
}

/// Filter destinations by the given criteria, keeping their original order
pub fn filter(destinations: &[Destination], criteria: &Criteria) -> Result<Vec<Destination>> {
    criteria.validate()?;

    let matching: Vec<Destination> = destinations
        .iter()
        .filter(|destination| criteria.matches(destination))
        .cloned()
        .collect();

    debug!(
        "Filtered {} destinations down to {} ({:?})",
        destinations.len(),
        matching.len(),
        criteria
    );

    Ok(matching)
}

/// Parse a continent or type selector where `"Any"` means no constraint
pub fn parse_selector<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr<Err = AdvisorError>,
{
    let raw = raw.trim();
    if raw.is_empty() || raw == ANY {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// Parse a user-entered budget
///
/// Blank input means no budget. Anything else must be a positive number.
pub fn parse_budget(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let budget: f64 = raw
        .parse()
        .map_err(|_| AdvisorError::invalid_input("Please enter a valid budget amount"))?;

    if !budget.is_finite() || budget <= 0.0 {
        return Err(AdvisorError::invalid_input("Budget must be a positive number"));
    }

    Ok(Some(budget))
}

/// One-click search presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    Beach,
    Historical,
    City,
    Adventure,
    /// Everything up to [`BUDGET_QUICK_FILTER_MAX_COST`]
    Budget,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 5] = [
        QuickFilter::Beach,
        QuickFilter::Historical,
        QuickFilter::City,
        QuickFilter::Adventure,
        QuickFilter::Budget,
    ];

    /// Criteria for this preset; all other constraints are cleared
    #[must_use]
    pub fn criteria(self) -> Criteria {
        match self {
            QuickFilter::Beach => Criteria::any().with_kind(DestinationType::Beach),
            QuickFilter::Historical => Criteria::any().with_kind(DestinationType::Historical),
            QuickFilter::City => Criteria::any().with_kind(DestinationType::City),
            QuickFilter::Adventure => Criteria::any().with_kind(DestinationType::Adventure),
            QuickFilter::Budget => Criteria::any().with_max_cost(BUDGET_QUICK_FILTER_MAX_COST),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::Beach => "Beach",
            QuickFilter::Historical => "Historical",
            QuickFilter::City => "City",
            QuickFilter::Adventure => "Adventure",
            QuickFilter::Budget => "Budget (<$700)",
        }
    }

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            QuickFilter::Beach => "beach",
            QuickFilter::Historical => "historical",
            QuickFilter::City => "city",
            QuickFilter::Adventure => "adventure",
            QuickFilter::Budget => "budget",
        }
    }
}

impl FromStr for QuickFilter {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        QuickFilter::ALL
            .into_iter()
            .find(|quick| quick.token() == s)
            .ok_or_else(|| {
                AdvisorError::invalid_input(format!(
                    "Unknown quick filter '{s}'. Must be one of: {}",
                    QuickFilter::ALL.map(QuickFilter::token).join(", ")
                ))
            })
    }
}
