// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use pointsplan_core::airports::AirportDirectory;
use pointsplan_core::client::TripClient;
use pointsplan_core::config::ConfigManager;
use pointsplan_core::envelope::TripResponse;
use pointsplan_core::loyalty::{LoyaltyClient, NewProgram, ProgramId, ProgramType};
use pointsplan_core::render::{render_failure, render_results};
use pointsplan_core::request::{AirportSelection, ToggleOutcome, TripRequest, TripTypeSelection};
use pointsplan_core::PlannerError;
use pointsplan_itinerary::{display_value, parse_itinerary_report, Destination, ParseReport};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the planner service
    #[arg(long, env = "POINTSPLAN_URL", global = true)]
    base_url: Option<String>,

    /// Path to config.json (defaults to the platform config directory)
    #[arg(long, env = "POINTSPLAN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a saved itinerary and print the destinations
    Parse {
        file: PathBuf,
        /// The file holds the JSON response body rather than raw text
        #[arg(long)]
        envelope: bool,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Ask the planner service for trip ideas
    Generate {
        /// Departure airport code (repeatable)
        #[arg(short, long = "airport", required = true)]
        airports: Vec<String>,
        /// Trip type such as beach or city (repeatable, at most two)
        #[arg(short, long = "trip-type", required = true)]
        trip_types: Vec<String>,
        /// Preferred travel months
        #[arg(long)]
        months: String,
        /// Trip length in days
        #[arg(long)]
        length: Option<u32>,
        /// Maximum flight length in hours
        #[arg(long)]
        max_flight: Option<u32>,
        #[arg(long)]
        direct: bool,
        /// Free-text preferences, one per line
        #[arg(long, default_value = "")]
        preferences: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Search the departure airport directory
    Airports { query: String },
    /// Manage loyalty programs
    Points {
        #[command(subcommand)]
        action: PointsAction,
    },
    /// Show the effective configuration, optionally writing it to disk
    Config {
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum PointsAction {
    /// List programs and balances
    List,
    /// Add a program
    Add {
        #[arg(value_enum)]
        program_type: CliProgramType,
        name: String,
        balance: i64,
    },
    /// Set a program's balance
    Update { id: String, balance: i64 },
    /// Remove a program
    Delete { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliProgramType {
    Airline,
    Hotel,
    Creditcard,
}

impl From<CliProgramType> for ProgramType {
    fn from(t: CliProgramType) -> Self {
        match t {
            CliProgramType::Airline => ProgramType::Airline,
            CliProgramType::Hotel => ProgramType::Hotel,
            CliProgramType::Creditcard => ProgramType::CreditCard,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logging")?;

    let manager = match &cli.config {
        Some(path) => ConfigManager::at(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load_or_default();
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }

    match cli.command {
        Commands::Parse {
            file,
            envelope,
            format,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {:?}", file))?;
            let text = if envelope {
                match TripResponse::from_json(&content).and_then(|r| r.into_itinerary_text()) {
                    Ok(text) => text,
                    Err(e) => return report_failure(&e, format),
                }
            } else {
                content
            };
            let report = parse_itinerary_report(&text);
            print_report(&report, format)?;
        }
        Commands::Generate {
            airports,
            trip_types,
            months,
            length,
            max_flight,
            direct,
            preferences,
            format,
        } => {
            let request = build_request(
                &airports,
                &trip_types,
                months,
                length,
                max_flight,
                direct,
                preferences,
            )?;
            let client = TripClient::new(&config)?;
            info!(
                "Generating trip — endpoint={} timeout_secs={}",
                client.endpoint(),
                client.timeout_for(&request).as_secs()
            );
            match client.generate(&request) {
                Ok(destinations) => print_destinations(&destinations, format)?,
                Err(e) => return report_failure(&e, format),
            }
        }
        Commands::Airports { query } => {
            let directory = AirportDirectory::builtin();
            let matches = directory.search(&query);
            if matches.is_empty() {
                println!("No airports match '{}'", query);
            }
            for airport in matches {
                println!("{}", airport.label());
            }
        }
        Commands::Points { action } => {
            let client = LoyaltyClient::new(&config)?;
            let result = match action {
                PointsAction::List => client.list().map(|programs| {
                    if programs.is_empty() {
                        println!("No loyalty programs yet");
                    }
                    for p in programs {
                        println!("[{}] {}: {} points", p.id, p.program_name, p.points_balance);
                    }
                }),
                PointsAction::Add {
                    program_type,
                    name,
                    balance,
                } => client
                    .add(&NewProgram {
                        program_type: program_type.into(),
                        program_name: name,
                        points_balance: balance,
                    })
                    .map(|id| println!("Added program {}", id)),
                PointsAction::Update { id, balance } => {
                    let id = ProgramId::from(id.as_str());
                    client
                        .update(&id, balance)
                        .map(|_| println!("Updated program {}", id))
                }
                PointsAction::Delete { id } => {
                    let id = ProgramId::from(id.as_str());
                    client.delete(&id).map(|_| println!("Deleted program {}", id))
                }
            };
            if let Err(e) = result {
                return report_failure(&e, OutputFormat::Text);
            }
        }
        Commands::Config { save } => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                manager.save(&config)?;
                println!("Saved to {}", manager.path().display());
            }
        }
    }

    Ok(())
}

fn build_request(
    airports: &[String],
    trip_types: &[String],
    months: String,
    length: Option<u32>,
    max_flight: Option<u32>,
    direct: bool,
    preferences: String,
) -> Result<TripRequest> {
    let directory = AirportDirectory::builtin();
    let mut airport_selection = AirportSelection::new();
    for code in airports {
        if directory.get(code).is_none() {
            warn!("Airport not in directory, sending as typed — code={}", code);
        }
        airport_selection.add(code);
    }

    let mut type_selection = TripTypeSelection::new();
    for trip_type in trip_types {
        if type_selection.toggle(trip_type) == ToggleOutcome::LimitReached {
            anyhow::bail!(
                "At most {} trip types can be selected",
                pointsplan_core::request::MAX_TRIP_TYPES
            );
        }
    }

    Ok(TripRequest {
        trip_types: type_selection.selected().to_vec(),
        airports: airport_selection.codes().to_vec(),
        travel_months: months,
        trip_length: length,
        max_flight_length: max_flight,
        direct_flights: direct,
        preferences,
    })
}

fn report_failure(error: &PlannerError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Html => println!("{}", render_failure(error)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "success": false, "error": error.user_message() })
        ),
        // anyhow prints the message on the way out of main.
        OutputFormat::Text => {}
    }
    Err(anyhow::anyhow!(error.user_message()))
}

fn print_report(report: &ParseReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Html => println!("{}", render_results(&report.destinations)),
        OutputFormat::Text => {
            if report.is_empty() {
                println!("{}", PlannerError::NoValidDestinations.user_message());
            } else {
                print!("{}", format_text(&report.destinations));
            }
            for skipped in &report.skipped {
                eprintln!(
                    "Skipped block {} ({}): {}",
                    skipped.position, skipped.name, skipped.reason
                );
            }
        }
    }
    Ok(())
}

fn print_destinations(destinations: &[Destination], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(destinations)?),
        OutputFormat::Html => println!("{}", render_results(destinations)),
        OutputFormat::Text => print!("{}", format_text(destinations)),
    }
    Ok(())
}

fn format_text(destinations: &[Destination]) -> String {
    let mut out = String::new();
    for d in destinations {
        let _ = writeln!(out, "Destination {} - {}", d.index, d.name);
        if let Some(pref) = &d.preference_match {
            let _ = writeln!(out, "  Preference Match: {}", pref);
        }
        if let Some(summary) = &d.summary {
            let _ = writeln!(out, "  Summary:");
            for line in summary.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
        for category in &d.recommendations {
            if !category.category.is_empty() {
                let _ = writeln!(out, "  {}:", category.category);
            }
            for item in &category.items {
                let _ = writeln!(out, "    - {}", item);
            }
        }
        for (heading, option) in [("Economy", &d.economy), ("Luxury", &d.luxury)] {
            let _ = writeln!(out, "  {} Experience [{}]", heading, option.kind);
            for (title, fields) in [
                ("Flight Details", option.flight_fields()),
                ("Hotel Option", option.hotel_fields()),
                ("Value Analysis", option.value_fields()),
            ] {
                if fields.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "    {}", title);
                for (label, value) in fields {
                    let _ = writeln!(out, "      {}: {}", label, display_value(value));
                }
            }
        }
        out.push('\n');
    }
    out
}
