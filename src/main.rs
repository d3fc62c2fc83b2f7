use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use travel_advisor::filter::ANY;
use travel_advisor::{
    AdvisorConfig, AdvisorError, Criteria, QuickFilter, TravelAdvisor, advise_tokens, logging,
};

mod render;

#[derive(Parser)]
#[command(name = "travel-advisor")]
#[command(version, about = "Find travel destinations and the best season to visit them")]
struct CommandLine {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend destinations matching the given criteria
    #[command(alias = "r")]
    Recommend {
        /// Continent token, e.g. north_america, or 'Any'
        #[arg(long, default_value = ANY)]
        continent: String,
        /// Travel type token, e.g. beach, or 'Any'
        #[arg(long = "type", default_value = ANY)]
        kind: String,
        /// Maximum cost per person
        #[arg(long)]
        max_budget: Option<String>,
        /// Use a preset instead of the individual filters
        #[arg(long, conflicts_with_all = ["continent", "kind", "max_budget"])]
        quick: Option<QuickFilter>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the best season for a travel type and continent
    #[command(alias = "a")]
    Advise {
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        continent: String,
        #[arg(long)]
        json: bool,
    },
    /// List every known destination
    #[command(alias = "l")]
    List {
        #[arg(long)]
        json: bool,
    },
}

fn run(commands: CommandLine) -> Result<()> {
    let config = AdvisorConfig::load_from_path(commands.config)?;
    logging::init(&config.logging, commands.verbose)?;
    debug!("Using configuration: {:?}", config);

    let advisor = TravelAdvisor::new(config.fact_store());

    match commands.command {
        None => print!("{}", render::welcome()),
        Some(Commands::Recommend {
            continent,
            kind,
            max_budget,
            quick,
            json,
        }) => {
            let criteria = match quick {
                Some(quick) => quick.criteria(),
                None => Criteria::parse(&continent, &kind, max_budget.as_deref().unwrap_or(""))?,
            };

            let mut results = advisor.recommend(&criteria)?;
            let total = results.len();
            if let Some(limit) = config.result_limit() {
                results.truncate(limit);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render::recommendations(&results, total, &criteria, quick));
            }
        }
        Some(Commands::Advise {
            kind,
            continent,
            json,
        }) => {
            let season = advise_tokens(&kind, &continent);
            if json {
                println!("{}", serde_json::to_string_pretty(&season)?);
            } else {
                print!("{}", render::advice(&kind, &continent, &season));
            }
        }
        Some(Commands::List { json }) => {
            let destinations = advisor.destinations()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&destinations)?);
            } else {
                print!("{}", render::destination_list(&destinations));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let commands = CommandLine::parse();

    match run(commands) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AdvisorError>() {
                Some(advisor_err) => eprintln!("Error: {}", advisor_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
