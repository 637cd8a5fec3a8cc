use airscan::advisory::assess_conditions;
use airscan::cities;
use airscan::models::{Advisory, CropAdvisory};
use airscan::{
    AdvisoryEngine, AirScanConfig, AirScanError, Coordinate, ForecastOutlook, LocationContext,
    LocationResolver, LocationStore, ManualSelection, Season,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "airscan")]
#[command(about = "Air quality, health and crop advisories for Indian locations")]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve coordinates to the nearest city and save them as current
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Reported accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
    },

    /// Pick a known city as the current location (Delhi when omitted)
    Select {
        #[arg(long)]
        city: Option<String>,
    },

    /// Show the saved current location
    Current,

    /// List or search known cities
    Cities {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Health advisory for an AQI value
    Health {
        #[arg(long)]
        aqi: f64,
        #[arg(long, requires = "humidity", allow_hyphen_values = true)]
        temperature: Option<f64>,
        #[arg(long, requires = "temperature")]
        humidity: Option<f64>,
    },

    /// Agricultural advisory for a set of readings
    Crop {
        #[arg(long)]
        aqi: f64,
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
        #[arg(long)]
        humidity: f64,
        /// winter, spring, summer or monsoon
        #[arg(long)]
        season: Option<String>,
    },

    /// Summarize a JSON file of forecast days
    Forecast {
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn init_tracing(config: &AirScanConfig, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_advisory(advisory: &Advisory) {
    println!("{} ({})", advisory.title, advisory.severity_level);
    for line in &advisory.guidance_lines {
        println!("  - {line}");
    }
    println!("Actions: {}", advisory.action_tags.join(", "));
    for alert in &advisory.alerts {
        println!("! {alert}");
    }
}

fn print_crop_advisory(advice: &CropAdvisory) {
    let sections = [
        ("Air quality impact", &advice.air_quality_impact),
        ("Irrigation", &advice.irrigation),
        ("Fertilization", &advice.fertilization),
        ("Pest control", &advice.pest_control),
        ("Planting", &advice.planting),
        ("Harvesting", &advice.harvesting),
    ];
    for (label, text) in sections {
        if !text.is_empty() {
            println!("{label}: {text}");
        }
    }
    if !advice.recommendations.is_empty() {
        println!("Recommendations:");
        for line in &advice.recommendations {
            println!("  - {line}");
        }
    }
    for alert in &advice.alerts {
        println!("! {alert}");
    }
}

async fn open_context(config: &AirScanConfig) -> Result<LocationContext> {
    let path = config.store_path()?;
    debug!("Opening location store at {}", path.display());
    let store = LocationStore::open(&path)
        .with_context(|| format!("Failed to open location store at {}", path.display()))?;
    Ok(LocationContext::startup(store, LocationResolver::india()?).await?)
}

async fn run(cli: Cli, config: AirScanConfig) -> Result<()> {
    let engine = AdvisoryEngine::new(config.unknown_season_policy()?);

    match cli.command {
        Commands::Locate { lat, lon, accuracy } => {
            let mut coordinate = Coordinate::new(lat, lon);
            if let Some(accuracy) = accuracy {
                coordinate = coordinate.with_precision(accuracy);
            }
            let mut context = open_context(&config).await?;
            let resolved = context.locate(coordinate).await?;
            if cli.json {
                print_json(&resolved)?;
            } else {
                println!(
                    "{} ({:.1} km from {})",
                    resolved.point.label(),
                    resolved.distance_km,
                    coordinate.format_coordinates()
                );
            }
        }

        Commands::Select { city } => {
            let selection = match city {
                Some(name) => {
                    let point = cities::find_by_name(&name)
                        .ok_or_else(|| AirScanError::invalid_input(format!("Unknown city '{name}'")))?;
                    ManualSelection {
                        latitude: Some(point.latitude),
                        longitude: Some(point.longitude),
                        city: Some(point.name),
                        state: Some(point.region),
                    }
                }
                None => ManualSelection::default(),
            };
            let mut context = open_context(&config).await?;
            let record = context.set_manual(selection).await?;
            if cli.json {
                print_json(record)?;
            } else {
                println!("Current location: {}", record.label());
            }
        }

        Commands::Current => {
            let context = open_context(&config).await?;
            match context.current() {
                Some(record) if cli.json => print_json(record)?,
                Some(record) => println!(
                    "{} ({})",
                    record.label(),
                    record.coordinate.format_coordinates()
                ),
                None if cli.json => println!("null"),
                None => println!("No saved location"),
            }
        }

        Commands::Cities { search } => {
            let points = match search.as_deref() {
                Some(term) => cities::search(term),
                None => cities::reference_set(),
            };
            if cli.json {
                print_json(&points)?;
            } else if points.is_empty() {
                println!("No matching cities");
            } else {
                for point in &points {
                    println!("{}", point.label());
                }
            }
        }

        Commands::Health {
            aqi,
            temperature,
            humidity,
        } => {
            let advisory = engine.health(aqi)?;
            let conditions = match (temperature, humidity) {
                (Some(t), Some(h)) => Some(assess_conditions(t, h)?),
                _ => None,
            };
            if cli.json {
                #[derive(Serialize)]
                struct HealthOutput<'a> {
                    advisory: &'a Advisory,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    conditions: Option<airscan::advisory::ConditionsAssessment>,
                }
                print_json(&HealthOutput {
                    advisory: &advisory,
                    conditions,
                })?;
            } else {
                print_advisory(&advisory);
                if let Some(conditions) = conditions {
                    println!(
                        "Temperature: {} | Humidity: {}",
                        conditions.temperature.label(),
                        conditions.humidity.label()
                    );
                }
            }
        }

        Commands::Crop {
            aqi,
            temperature,
            humidity,
            season,
        } => {
            let season = match season {
                Some(season) => season,
                None => config
                    .default_season()?
                    .unwrap_or_else(|| Season::for_date(chrono::Local::now().date_naive()))
                    .to_string(),
            };
            let advice = engine.crop(aqi, temperature, humidity, &season)?;
            if cli.json {
                print_json(&advice)?;
            } else {
                print_crop_advisory(&advice);
            }
        }

        Commands::Forecast { file } => {
            let outlook = ForecastOutlook::from_json_file(&file)?;
            if cli.json {
                print_json(&outlook)?;
            } else {
                for day in &outlook.days {
                    println!(
                        "{:<10} AQI {:>5.0} {:<24} {} {:<7} {}",
                        day.day.day_name,
                        day.day.aqi,
                        day.category.label(),
                        day.day.format_temperature(),
                        day.day.condition,
                        day.resolved_trend
                    );
                }
                println!(
                    "Good days: {} | Moderate days: {} | Unhealthy days: {}",
                    outlook.good_days, outlook.moderate_days, outlook.unhealthy_days
                );
                if let Some(best) = outlook.cleanest() {
                    println!("Cleanest day: {} (AQI {:.0})", best.day.day_name, best.day.aqi);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AirScanConfig::load_from_path(cli.config.clone())?;
    init_tracing(&config, cli.verbose);

    if let Err(err) = run(cli, config).await {
        if let Some(airscan_err) = err.downcast_ref::<AirScanError>() {
            debug!("{err:?}");
            eprintln!("Error: {}", airscan_err.user_message());
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
