//! Season advisor
//!
//! Deterministic lookup of the best time to visit, keyed first by destination
//! type and then by continent. All tables are fixed authored data.

use tracing::debug;

use crate::models::{Continent, DestinationType, SeasonAdvice};

/// Seasons used when no table entry matches
pub const FALLBACK_SEASONS: [&str; 2] = ["Spring (March-May)", "Autumn (September-November)"];

/// Reason used for types without an authored justification
pub const GENERIC_REASON: &str = "Favorable weather conditions and optimal travel experience";

type SeasonTable = [(Continent, &'static [&'static str])];

static BEACH_SEASONS: &SeasonTable = &[
    (
        Continent::Europe,
        &["Summer (June-August)", "Late Spring (May)", "Early Autumn (September)"],
    ),
    (Continent::Asia, &["Dry Season (November-April)", "Summer (June-August)"]),
    (
        Continent::NorthAmerica,
        &["Summer (June-August)", "Late Spring (May)", "Early Fall (September)"],
    ),
    (Continent::SouthAmerica, &["Summer (December-March)", "Dry Season (May-October)"]),
    (Continent::Africa, &["Dry Season (June-October)", "Summer (December-February)"]),
    (Continent::Australia, &["Summer (December-February)", "Spring (September-November)"]),
];

static MOUNTAIN_SEASONS: &SeasonTable = &[
    (
        Continent::Europe,
        &["Summer (June-September)", "Spring (April-June)", "Autumn (September-October)"],
    ),
    (Continent::Asia, &["Spring (March-May)", "Autumn (September-November)"]),
    (Continent::NorthAmerica, &["Summer (June-September)", "Fall (September-October)"]),
    (Continent::SouthAmerica, &["Dry Season (May-September)", "Summer (December-February)"]),
    (Continent::Africa, &["Dry Season (June-October)", "Winter (December-February)"]),
    (Continent::Australia, &["Summer (December-February)", "Autumn (March-May)"]),
];

static CITY_SEASONS: &SeasonTable = &[
    (
        Continent::Europe,
        &["Spring (April-June)", "Autumn (September-October)", "Summer (June-August)"],
    ),
    (Continent::Asia, &["Winter (November-February)", "Spring (March-May)"]),
    (Continent::NorthAmerica, &["Spring (April-June)", "Fall (September-October)"]),
    (Continent::SouthAmerica, &["Spring (September-November)", "Autumn (March-May)"]),
    (Continent::Africa, &["Dry Season (June-October)", "Winter (December-February)"]),
    (Continent::Australia, &["Spring (September-November)", "Autumn (March-May)"]),
];

static HISTORICAL_SEASONS: &SeasonTable = &[
    (Continent::Europe, &["Spring (April-June)", "Autumn (September-October)"]),
    (Continent::Asia, &["Winter (November-February)", "Spring (March-May)"]),
    (Continent::NorthAmerica, &["Spring (April-June)", "Fall (September-October)"]),
    (Continent::SouthAmerica, &["Dry Season (May-September)", "Spring (September-November)"]),
    (Continent::Africa, &["Dry Season (June-October)", "Winter (December-February)"]),
    (Continent::Australia, &["Autumn (March-May)", "Spring (September-November)"]),
];

static ADVENTURE_SEASONS: &SeasonTable = &[
    (Continent::Europe, &["Summer (June-September)", "Spring (April-June)"]),
    (Continent::Asia, &["Dry Season (November-April)", "Spring (March-May)"]),
    (Continent::NorthAmerica, &["Summer (June-September)", "Spring (April-June)"]),
    (Continent::SouthAmerica, &["Dry Season (May-September)", "Summer (December-February)"]),
    (Continent::Africa, &["Dry Season (June-October)", "Winter (December-February)"]),
    (Continent::Australia, &["Spring (September-November)", "Autumn (March-May)"]),
];

fn season_table(kind: DestinationType) -> &'static SeasonTable {
    match kind {
        DestinationType::Beach => BEACH_SEASONS,
        DestinationType::Mountain => MOUNTAIN_SEASONS,
        DestinationType::City => CITY_SEASONS,
        DestinationType::Historical => HISTORICAL_SEASONS,
        DestinationType::Adventure => ADVENTURE_SEASONS,
    }
}

fn base_reason(kind: DestinationType) -> &'static str {
    match kind {
        DestinationType::Beach => {
            "Perfect weather for beach activities with warm temperatures and minimal rainfall"
        }
        DestinationType::Mountain => {
            "Ideal conditions for hiking and mountain activities with clear skies and comfortable temperatures"
        }
        DestinationType::City => {
            "Pleasant weather for city exploration with mild temperatures and fewer crowds"
        }
        DestinationType::Historical => {
            "Best time for sightseeing with comfortable weather and good visibility"
        }
        DestinationType::Adventure => {
            "Optimal conditions for adventure activities with stable weather and accessible terrain"
        }
    }
}

/// Continent-specific clause; each starts with its own leading space
fn continent_clause(continent: Continent) -> &'static str {
    match continent {
        Continent::Europe => " during this popular travel period",
        Continent::Asia => " with comfortable humidity levels",
        Continent::NorthAmerica => " with excellent travel conditions",
        Continent::SouthAmerica => " during the dry season",
        Continent::Africa => " with minimal rainfall",
        Continent::Australia => " with perfect outdoor conditions",
    }
}

/// Resolve the ranked season list for a (type, continent) pair
fn resolve_seasons(
    kind: Option<DestinationType>,
    continent: Option<Continent>,
) -> &'static [&'static str] {
    let Some(kind) = kind else {
        return &FALLBACK_SEASONS;
    };
    continent
        .and_then(|continent| {
            season_table(kind)
                .iter()
                .find(|(entry, _)| *entry == continent)
                .map(|(_, seasons)| *seasons)
        })
        .unwrap_or(&FALLBACK_SEASONS)
}

/// Compose the justification for a (type, continent) pair
#[must_use]
pub fn season_reason(kind: Option<DestinationType>, continent: Option<Continent>) -> String {
    let mut reason = kind.map_or(GENERIC_REASON, base_reason).to_string();
    if let Some(continent) = continent {
        reason.push_str(continent_clause(continent));
    }
    reason
}

/// Season advice for a known destination type and continent
#[must_use]
pub fn advise(kind: DestinationType, continent: Continent) -> SeasonAdvice {
    advise_lookup(Some(kind), Some(continent))
}

/// Season advice where either key may be unrecognized
///
/// A missing type or continent falls back to
/// [`FALLBACK_SEASONS`]; a missing type also uses [`GENERIC_REASON`].
#[must_use]
pub fn advise_lookup(kind: Option<DestinationType>, continent: Option<Continent>) -> SeasonAdvice {
    let seasons = resolve_seasons(kind, continent);
    debug!(
        kind = ?kind,
        continent = ?continent,
        seasons = seasons.len(),
        "Resolved season advice"
    );
    SeasonAdvice::from_ranked(seasons, season_reason(kind, continent))
}

/// Season advice from raw tokens such as `"beach"` and `"north_america"`
///
/// Tokens that are not canonical enum encodings count as unrecognized.
#[must_use]
pub fn advise_tokens(kind: &str, continent: &str) -> SeasonAdvice {
    advise_lookup(kind.parse().ok(), continent.parse().ok())
}
