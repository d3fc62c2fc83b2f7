//! Built-in destination catalog

use crate::Result;
use crate::facts::FactStore;
use crate::models::{Continent, Destination, DestinationType};

/// In-memory fact store
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Wrap an already validated list of destinations
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// The hand-authored destination set shipped with the advisor
    #[must_use]
    pub fn builtin() -> Self {
        use Continent::*;
        use DestinationType::*;

        let entries: [(&str, &str, Continent, DestinationType, f64); 20] = [
            ("Santorini", "Greece", Europe, Beach, 1100.0),
            ("Paris", "France", Europe, Historical, 1200.0),
            ("Rome", "Italy", Europe, Historical, 1000.0),
            ("Swiss Alps", "Switzerland", Europe, Mountain, 1500.0),
            ("Barcelona", "Spain", Europe, City, 900.0),
            ("Bali", "Indonesia", Asia, Beach, 600.0),
            ("Tokyo", "Japan", Asia, City, 1400.0),
            ("Kyoto", "Japan", Asia, Historical, 1100.0),
            ("Kathmandu", "Nepal", Asia, Adventure, 500.0),
            ("Phuket", "Thailand", Asia, Beach, 550.0),
            ("New York", "USA", NorthAmerica, City, 1600.0),
            ("Banff", "Canada", NorthAmerica, Mountain, 1300.0),
            ("Cancun", "Mexico", NorthAmerica, Beach, 800.0),
            ("Machu Picchu", "Peru", SouthAmerica, Historical, 900.0),
            ("Rio de Janeiro", "Brazil", SouthAmerica, Beach, 850.0),
            ("Patagonia", "Argentina", SouthAmerica, Adventure, 1250.0),
            ("Cape Town", "South Africa", Africa, City, 950.0),
            ("Serengeti", "Tanzania", Africa, Adventure, 1800.0),
            ("Sydney", "Australia", Australia, City, 1700.0),
            ("Gold Coast", "Australia", Australia, Beach, 1150.0),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(name, country, continent, kind, cost)| {
                    Destination::new(name, country, continent, kind, cost)
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl FactStore for Catalog {
    fn load_destinations(&self) -> Result<Vec<Destination>> {
        Ok(self.destinations.clone())
    }
}
