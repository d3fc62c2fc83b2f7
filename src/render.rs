//! Text rendering for the command-line front end
//!
//! Everything display related lives here: icons, labels, value ratings and
//! card layout. The library only hands over structured data.

use travel_advisor::{
    Criteria, Destination, DestinationType, QuickFilter, Recommendation, SeasonAdvice,
};

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 50;

fn type_icon(kind: DestinationType) -> &'static str {
    match kind {
        DestinationType::Beach => "🏖️",
        DestinationType::Mountain => "⛰️",
        DestinationType::City => "🏙️",
        DestinationType::Historical => "🏛️",
        DestinationType::Adventure => "🎯",
    }
}

/// Star rating from cost, cheaper is better; always 1 to 5
pub fn value_rating(cost: f64) -> u8 {
    let buckets = (cost / 400.0).floor();
    (6.0 - buckets).clamp(1.0, 5.0) as u8
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 {
        format!("${cost:.0}")
    } else {
        format!("${cost:.2}")
    }
}

pub fn welcome() -> String {
    let presets: Vec<&str> = QuickFilter::ALL.iter().map(|quick| quick.token()).collect();
    format!(
        "\
Welcome to Travel Advisor!

Find destinations that match your preferences, each with advice on the best
season to visit.

How to use:
  • travel-advisor recommend --continent europe --type historical
  • travel-advisor recommend --max-budget 900
  • travel-advisor recommend --quick beach   ({})
  • travel-advisor advise --type mountain --continent asia
  • travel-advisor list

Use 'Any' (the default) to search every continent or travel type.
",
        presets.join(", ")
    )
}

/// One-line summary of the active filters, empty when unconstrained
pub fn filter_summary(criteria: &Criteria) -> String {
    let mut filters = Vec::new();
    if let Some(continent) = criteria.continent {
        filters.push(format!("🌍 {}", continent.label()));
    }
    if let Some(kind) = criteria.kind {
        filters.push(format!("🎯 {}", kind.label()));
    }
    if let Some(max_cost) = criteria.max_cost {
        filters.push(format!("💰 {}", format_cost(max_cost)));
    }

    if filters.is_empty() {
        String::new()
    } else {
        format!("📊 Search Filters: {}", filters.join(" • "))
    }
}

fn no_results() -> String {
    "\
😔 No destinations found matching your criteria.

💡 Suggestions:
  • Try broadening your search by selecting 'Any' for continent or type
  • Increase your budget range
  • Check out the quick filters for popular options
"
    .to_string()
}

fn season_lines(season: &SeasonAdvice) -> String {
    let mut lines = format!(
        "   🌤️ Best Time to Visit: {}\n   💡 Why: {}\n",
        season.best_season, season.reason
    );
    if !season.alternative_seasons.is_empty() {
        lines.push_str(&format!(
            "   🌈 Also Good: {}\n",
            season.alternative_seasons.join(", ")
        ));
    }
    lines
}

fn destination_card(destination: &Destination) -> String {
    format!(
        "{} {}, {}\n   🌐 {} • 🎯 {} • 💰 {} per person\n   ⭐ {} Value Rating\n",
        type_icon(destination.kind),
        destination.name,
        destination.country,
        destination.continent.label(),
        destination.kind.label(),
        format_cost(destination.cost),
        stars(value_rating(destination.cost))
    )
}

/// Heading for a result page; `total` counts matches before any output cap
fn found_heading(shown: usize, total: usize) -> String {
    if shown < total {
        format!("🎯 Found {total} Destination(s), showing the first {shown}")
    } else {
        format!("🎯 Found {total} Destination(s)")
    }
}

/// Render a full result page
///
/// `quick` names the preset the criteria came from, if any.
pub fn recommendations(
    results: &[Recommendation],
    total: usize,
    criteria: &Criteria,
    quick: Option<QuickFilter>,
) -> String {
    if results.is_empty() {
        return no_results();
    }

    let mut out = format!("{}\n\n", found_heading(results.len(), total));

    if let Some(quick) = quick {
        out.push_str(&format!("⚡ Quick Filter: {}\n\n", quick.label()));
    }

    let summary = filter_summary(criteria);
    if !summary.is_empty() {
        out.push_str(&format!("{summary}\n\n{}\n\n", "=".repeat(RULE_WIDE)));
    }

    for recommendation in results {
        out.push_str(&destination_card(&recommendation.destination));
        out.push('\n');
        out.push_str(&season_lines(&recommendation.season));
        out.push_str(&format!("\n{}\n\n", "-".repeat(RULE_NARROW)));
    }

    out.push_str(&format!("🎉 Found {total} destination(s) for you!\n\n"));
    out.push_str("💡 Tip: Consider the seasonal recommendations when planning your trip!\n");
    out
}

/// Render advice for a raw (type, continent) query
pub fn advice(kind: &str, continent: &str, season: &SeasonAdvice) -> String {
    format!(
        "Season advice for {kind} destinations in {continent}\n\n{}",
        season_lines(season)
    )
}

/// Render the full fact list, one line per destination
pub fn destination_list(destinations: &[Destination]) -> String {
    let mut out: String = destinations
        .iter()
        .map(|destination| {
            format!(
                "{} {:<18} {:<14} {:<14} {:<11} {:>8}\n",
                type_icon(destination.kind),
                destination.name,
                destination.country,
                destination.continent.label(),
                destination.kind.label(),
                format_cost(destination.cost)
            )
        })
        .collect();
    out.push_str(&format!("\n{} destination(s)\n", destinations.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_advisor::{Catalog, Continent, FactStore, advise};

    #[test]
    fn test_value_rating_buckets() {
        assert_eq!(value_rating(0.0), 5);
        assert_eq!(value_rating(399.0), 5);
        assert_eq!(value_rating(600.0), 5);
        assert_eq!(value_rating(800.0), 4);
        assert_eq!(value_rating(1200.0), 3);
        assert_eq!(value_rating(2000.0), 1);
        assert_eq!(value_rating(10_000.0), 1);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn test_filter_summary() {
        assert!(filter_summary(&Criteria::any()).is_empty());
        let criteria = Criteria::any()
            .with_continent(Continent::NorthAmerica)
            .with_max_cost(700.0);
        assert_eq!(
            filter_summary(&criteria),
            "📊 Search Filters: 🌍 North America • 💰 $700"
        );
    }

    #[test]
    fn test_empty_results_show_suggestions() {
        let page = recommendations(&[], 0, &Criteria::any(), None);
        assert!(page.contains("No destinations found"));
    }

    #[test]
    fn test_recommendation_card() {
        let bali = Destination::new(
            "Bali",
            "Indonesia",
            Continent::Asia,
            DestinationType::Beach,
            600.0,
        );
        let results = vec![Recommendation::for_destination(bali)];
        let criteria = Criteria::any().with_continent(Continent::Asia);
        let page = recommendations(&results, 1, &criteria, None);

        assert!(page.contains("Found 1 Destination(s)"));
        assert!(page.contains("Bali, Indonesia"));
        assert!(page.contains("$600 per person"));
        assert!(page.contains("Best Time to Visit: Dry Season (November-April)"));
        assert!(page.contains("Also Good: Summer (June-August)"));
    }

    #[test]
    fn test_capped_page_reports_total() {
        let results: Vec<Recommendation> = Catalog::builtin()
            .load_destinations()
            .unwrap()
            .into_iter()
            .take(2)
            .map(Recommendation::for_destination)
            .collect();
        let page = recommendations(&results, 7, &Criteria::any(), None);

        assert!(page.contains("Found 7 Destination(s), showing the first 2"));
        assert!(page.contains("Found 7 destination(s) for you!"));
    }

    #[test]
    fn test_quick_filter_label_shown() {
        let criteria = QuickFilter::Budget.criteria();
        let results: Vec<Recommendation> = Catalog::builtin()
            .load_destinations()
            .unwrap()
            .into_iter()
            .filter(|destination| criteria.matches(destination))
            .map(Recommendation::for_destination)
            .collect();
        let page = recommendations(&results, results.len(), &criteria, Some(QuickFilter::Budget));

        assert!(page.contains("⚡ Quick Filter: Budget (<$700)"));
        assert!(page.contains("💰 $700"));
    }

    #[test]
    fn test_welcome_lists_quick_filters() {
        assert!(welcome().contains("(beach, historical, city, adventure, budget)"));
    }

    #[test]
    fn test_advice_without_alternatives_omits_line() {
        let mut season = advise(DestinationType::City, Continent::Asia);
        season.alternative_seasons.clear();
        let text = advice("city", "asia", &season);
        assert!(!text.contains("Also Good"));
        assert!(text.contains("Winter (November-February)"));
    }
}
