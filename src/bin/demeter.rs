//! demeter CLI: crop recommendations from the command line.

use std::time::Duration;

use clap::{Parser, Subcommand};

use demeter::config::Config;
use demeter::providers::remote::DEFAULT_BASE_URL;
use demeter::{
    Crop, Demeter, Parameter, RemoteModelClient, SoilReading, catalog, rules, timeline,
};

/// Demeter CLI
#[derive(Parser)]
#[command(name = "demeter")]
#[command(version = demeter::PKG_VERSION)]
#[command(about = "Recommend crops from soil and climate readings")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend a crop for a set of readings
    Recommend {
        /// Nitrogen, mg/kg
        #[arg(short = 'n', long, default_value_t = 50.0)]
        nitrogen: f64,
        /// Phosphorus, mg/kg
        #[arg(short = 'p', long, default_value_t = 50.0)]
        phosphorus: f64,
        /// Potassium, mg/kg
        #[arg(short = 'k', long, default_value_t = 50.0)]
        potassium: f64,
        /// Temperature, °C
        #[arg(short = 't', long, default_value_t = 25.0, allow_hyphen_values = true)]
        temperature: f64,
        /// Relative humidity, %
        #[arg(short = 'u', long, default_value_t = 50.0)]
        humidity: f64,
        /// Soil pH
        #[arg(long, default_value_t = 7.0)]
        ph: f64,
        /// Rainfall, mm
        #[arg(short = 'r', long, default_value_t = 150.0)]
        rainfall: f64,
        /// Seed for the default branch (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the remote prediction service is reachable
    Health,

    /// List the known crops
    Crops,

    /// Print the decision list
    Rules,

    /// Show the growth timeline for a crop
    Timeline {
        /// Crop name (e.g. "rice")
        crop: String,
        /// Show only the stage for this day after sowing
        #[arg(short, long)]
        day: Option<u16>,
    },

    /// Describe the seven input parameters
    Parameters,

    /// Print the full build version
    Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Recommend {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
            seed,
            json,
        } => {
            let reading = SoilReading {
                nitrogen,
                phosphorus,
                potassium,
                temperature,
                humidity,
                ph,
                rainfall,
            };

            let mut builder = config.apply(Demeter::builder());
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }

            let recommender = if config.remote.base_url.is_some() {
                let (recommender, probe) = builder.build_probed()?;
                // Shadow traffic only goes out once the probe has answered.
                probe.ready().await;
                recommender
            } else {
                builder.build()?
            };

            let prediction = recommender.recommend(&reading).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                println!("crop:   {}", prediction.name());
                println!("image:  {}", prediction.image());
                println!("reason: {}", rules::explain(&reading));
                println!("remote: {}", recommender.status());
            }
        }

        Command::Health => {
            let url = config
                .remote
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL);
            let client = RemoteModelClient::new(url)?.probe_timeout(Duration::from_secs(
                config.remote.probe_timeout_secs,
            ));
            println!("{}: {}", client.base_url(), client.probe().await);
            if let Ok(report) = client.health().await
                && let Some(message) = report.message
            {
                println!("  {message}");
            }
        }

        Command::Crops => {
            for record in catalog::all() {
                println!("{:>2}  {:<12} {}", record.crop.class_id(), record.name, record.image);
            }
        }

        Command::Rules => {
            for (index, rule) in rules::RULES.iter().enumerate() {
                println!("{:>2}. {:<12} if {}", index + 1, rule.crop.name(), rule.condition);
            }
            println!("    otherwise    random choice among {} crops", catalog::len());
        }

        Command::Timeline { crop, day } => {
            let crop: Crop = crop.parse()?;
            let Some(timeline) = timeline::for_crop(crop) else {
                let available: Vec<_> = timeline::all().iter().map(|t| t.crop.name()).collect();
                return Err(format!(
                    "no growth timeline for {crop} (available: {})",
                    available.join(", ")
                )
                .into());
            };

            match day {
                Some(day) => match timeline.stage_on_day(day) {
                    Some(stage) => print_stage(stage),
                    None => println!(
                        "day {day} is outside the {}-day {crop} cycle",
                        timeline.total_days()
                    ),
                },
                None => {
                    println!("{crop}: {} days", timeline.total_days());
                    for stage in timeline.stages {
                        println!();
                        print_stage(stage);
                    }
                }
            }
        }

        Command::Parameters => {
            for parameter in Parameter::ALL {
                let range = parameter.slider_range();
                println!(
                    "{:<12} {:<16} {:>6} .. {:<6} step {:<4} {}",
                    parameter.as_str(),
                    parameter.label(),
                    range.min,
                    range.max,
                    range.step,
                    parameter.unit()
                );
            }
        }

        Command::Version => {
            println!("demeter {}", demeter::version_string());
        }
    }

    Ok(())
}

/// Display one growth stage.
fn print_stage(stage: &timeline::GrowthStage) {
    println!("{} (days {}-{})", stage.name, stage.start_day, stage.end_day);
    println!("  {}", stage.description);
    println!("  tasks: {}", stage.tasks.join(", "));
    println!("  tip:   {}", stage.tip);
}
