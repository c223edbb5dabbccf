mod bearing;
mod color;
mod data;
mod icons;
mod location;
mod render;
mod time;
mod units;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color::Colorize;
use data::Forecast;
use location::parse_location;
use render::Renderer;

#[derive(Parser)]
#[command(name = "forecast-render")]
#[command(about = "Render a forecast document as colored terminal text")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Forecast JSON document, or '-' for stdin
    file: PathBuf,

    /// Place the forecast is for, as "City, Region"
    #[arg(short, long)]
    location: String,

    /// Region code overriding the document's units (us, si, ca, uk2)
    #[arg(short, long)]
    units: Option<String>,

    /// Number of days to show after today
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    days: i32,

    /// Don't print weather alerts
    #[arg(long)]
    ignore_alerts: bool,

    /// Don't print the condition icon
    #[arg(long)]
    hide_icon: bool,

    /// Print plain text without color escapes
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_forecast(path: &Path) -> anyhow::Result<Forecast> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read forecast from stdin")?;
        json
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    Forecast::from_json(&json)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let location = parse_location(&cli.location)?;
    let mut forecast = read_forecast(&cli.file)?;
    if let Some(units) = cli.units {
        forecast.flags.units = units;
    }
    tracing::debug!(
        units = %forecast.flags.units,
        timezone = %forecast.timezone,
        days = forecast.daily.data.len(),
        alerts = forecast.alerts.len(),
        "loaded forecast"
    );
    if units::lookup(&forecast.flags.units) == units::UnitProfile::default() {
        tracing::warn!(units = %forecast.flags.units, "unknown units, labels will be empty");
    }

    let mut renderer = Renderer::new(std::io::stdout().lock(), Colorize::new(!cli.no_color));
    renderer.print_current(&forecast, &location, cli.ignore_alerts, cli.hide_icon)?;
    if cli.days > 0 {
        renderer.print_daily(&forecast, cli.days)?;
    }
    Ok(())
}
