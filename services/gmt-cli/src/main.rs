//! `gmtrs`: load remote grids and draw maps through the GMT bindings.

mod demo;
mod summary;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gmt_clib::{GmtCli, LengthUnit, SessionConfig};
use gmt_common::{Region, Registration};
use gmt_datasets::{load_earth_geoid, LoadOptions};
use gmt_figure::OriginOffset;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use summary::GridSummary;

#[derive(Parser, Debug)]
#[command(name = "gmtrs")]
#[command(about = "Load GMT remote datasets and draw maps", long_about = None)]
struct Cli {
    /// Path or name of the gmt executable
    #[arg(long, env = "GMT_BIN", global = true)]
    gmt_bin: Option<PathBuf>,

    /// Unit for shifts given without a suffix (c, i or p)
    #[arg(long, env = "GMT_LENGTH_UNIT", global = true)]
    length_unit: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the EGM2008 geoid and print a JSON summary
    LoadGeoid {
        /// Grid resolution (01d, 30m, 20m, 15m, 10m, 06m, 05m, 04m, 03m, 02m, 01m)
        #[arg(short, long, default_value = "01d")]
        resolution: String,

        /// Subregion as xmin/xmax/ymin/ymax or any other GMT -R text
        #[arg(long)]
        region: Option<String>,

        /// pixel or gridline
        #[arg(long)]
        registration: Option<String>,

        /// Write the summary here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw two basemaps side by side by shifting the plot origin
    ShiftDemo {
        /// Horizontal shift, e.g. 12 or 4.5i
        #[arg(long, default_value = "12", allow_hyphen_values = true)]
        xshift: String,

        /// Vertical shift
        #[arg(long, allow_hyphen_values = true)]
        yshift: Option<String>,

        /// Shift only for the second basemap and draw a third at the start
        #[arg(long)]
        scoped: bool,

        /// Output figure; format from the extension
        #[arg(short, long, default_value = "shift_origin.png")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = session_config(&cli)?;
    info!(gmt_bin = %config.gmt_bin.display(), session = %config.session_name, "Using GMT");

    match cli.command {
        Commands::LoadGeoid {
            resolution,
            region,
            registration,
            output,
        } => {
            let options = LoadOptions {
                resolution,
                region: region
                    .map(|r| r.parse::<Region>())
                    .transpose()
                    .context("invalid --region")?,
                registration: registration
                    .map(|r| r.parse::<Registration>())
                    .transpose()?,
            };

            let gmt = GmtCli::new(config)?;
            let grid = load_earth_geoid(&gmt, &options)?;
            let json = serde_json::to_string_pretty(&GridSummary::from_grid(&grid))?;

            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "Wrote grid summary");
                }
                None => println!("{}", json),
            }
        }
        Commands::ShiftDemo {
            xshift,
            yshift,
            scoped,
            output,
        } => {
            let mut offset = OriginOffset::new().x(demo::parse_shift_arg(&xshift));
            if let Some(y) = yshift {
                offset = offset.y(demo::parse_shift_arg(&y));
            }

            let gmt = GmtCli::begin(config)?;
            demo::shift_demo(&gmt, &offset, scoped, &output)?;
            gmt.end()?;
        }
    }

    Ok(())
}

/// Environment config with command-line overrides applied.
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = SessionConfig::from_env()?;
    if let Some(bin) = &cli.gmt_bin {
        config.gmt_bin = bin.clone();
    }
    if let Some(unit) = &cli.length_unit {
        config.length_unit = unit.parse::<LengthUnit>()?;
    }
    config.validate()?;
    Ok(config)
}
