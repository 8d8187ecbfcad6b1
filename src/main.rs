use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huewheel::error::ColorError;
use huewheel::models::{AppConfig, ColorRecord};
use huewheel::services::{ColorApiProvider, ColorFetcher};

#[derive(Parser)]
#[command(name = "huewheel")]
#[command(about = "Walk the color wheel in cached batches of analogous color schemes")]
struct Cli {
    /// Path to huewheel.yaml (defaults to $HUEWHEEL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one analogous scheme at a random hue
    Random {
        /// Saturation in percent (0-100)
        #[arg(short, long, default_value_t = 50)]
        saturation: u32,

        /// Lightness in percent (0-100)
        #[arg(short, long, default_value_t = 50)]
        lightness: u32,
    },
    /// Fetch consecutive hue batches, starting at hue 0
    Batches {
        /// Saturation in percent (0-100)
        #[arg(short, long, default_value_t = 50)]
        saturation: u32,

        /// Lightness in percent (0-100)
        #[arg(short, long, default_value_t = 50)]
        lightness: u32,

        /// Number of batches to fetch (stops early when the wheel is used up)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Convert an HSL color to hex locally
    Hex {
        /// Hue in degrees
        #[arg(allow_hyphen_values = true)]
        hue: f64,
        /// Saturation in percent
        saturation: f64,
        /// Lightness in percent
        lightness: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huewheel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Hex {
            hue,
            saturation,
            lightness,
        }) => {
            println!("{}", huewheel::hsl_to_hex(hue, saturation, lightness));
            Ok(())
        }
        Some(Commands::Random {
            saturation,
            lightness,
        }) => {
            let fetcher = build_fetcher(cli.config)?;
            let colors = fetcher.fetch_colors(saturation, lightness).await?;
            for color in &colors {
                print_color(None, color);
            }
            Ok(())
        }
        Some(Commands::Batches {
            saturation,
            lightness,
            count,
        }) => {
            let mut fetcher = build_fetcher(cli.config)?;
            run_batches_command(&mut fetcher, saturation, lightness, count).await
        }
        None => {
            run_status_command(cli.config);
            Ok(())
        }
    }
}

/// Load configuration and apply environment overrides
fn load_config(path: Option<PathBuf>) -> AppConfig {
    let path = path.or_else(|| std::env::var("HUEWHEEL_CONFIG").ok().map(PathBuf::from));

    let mut config = match path {
        Some(path) => AppConfig::load_or_default(path),
        None => AppConfig::default(),
    };

    if let Ok(endpoint) = std::env::var("COLOR_API_URL") {
        tracing::info!(endpoint = %endpoint, "Using endpoint from COLOR_API_URL");
        config.provider.endpoint = endpoint;
    }

    config
}

fn build_fetcher(path: Option<PathBuf>) -> anyhow::Result<ColorFetcher<ColorApiProvider>> {
    let config = load_config(path);
    let provider = ColorApiProvider::new(&config.provider)?;
    Ok(ColorFetcher::from_config(provider, &config)?)
}

async fn run_batches_command(
    fetcher: &mut ColorFetcher<ColorApiProvider>,
    saturation: u32,
    lightness: u32,
    count: usize,
) -> anyhow::Result<()> {
    for _ in 0..count {
        let batch = match fetcher.fetch_next_batch(saturation, lightness).await {
            Ok(batch) => batch,
            Err(ColorError::Exhausted) => {
                eprintln!("Hue wheel exhausted.");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        println!(
            "Batch {} (hue {}..{}{})",
            batch.index,
            batch.start_hue,
            batch.hues().last().map(|h| h.degrees()).unwrap_or_default(),
            if batch.from_cache { ", cached" } else { "" }
        );
        for (hue, color) in &batch.entries {
            print_color(Some(hue.degrees()), color);
        }
    }
    Ok(())
}

fn print_color(hue: Option<u16>, color: &ColorRecord) {
    let hex = color.hex().unwrap_or("?");
    let name = color.name().unwrap_or("");
    match hue {
        Some(hue) => println!("  {hue:>3}  {hex}  {name}"),
        None => println!("{hex}  {name}"),
    }
}

/// Show version and effective configuration
fn run_status_command(path: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var("HUEWHEEL_CONFIG").ok();
    let endpoint_env = std::env::var("COLOR_API_URL").ok();

    println!("Huewheel v{VERSION}");
    println!("Cached, batched walks around the color wheel\n");

    println!("Environment Variables:");
    println!(
        "  HUEWHEEL_CONFIG = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  COLOR_API_URL   = {}",
        endpoint_env.as_deref().unwrap_or("(not set)")
    );

    let config = load_config(path);
    println!("\nEffective Configuration:");
    println!("  endpoint     = {}", config.provider.endpoint);
    println!("  timeout      = {}s", config.provider.timeout_secs);
    println!("  batch_size   = {}", config.batch_size);
    println!("  scheme_count = {}", config.scheme_count);

    println!("\nRun `huewheel --help` for commands.");
}
