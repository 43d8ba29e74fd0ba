use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use seat_chart::chart::text;
use seat_chart::layout::standard_registry;
use seat_chart::{
    Config, InteractionMode, RenderRequest, SeatChart, Snapshot,
    init_logger_with_file, legend,
};
use shared::models::ZoneId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seat-chart")]
#[command(about = "Validate study-room layouts and print seating charts", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot file with seats and reservations (overrides SEAT_CHART_SNAPSHOT)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Max log level (overrides LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every zone layout against the seat catalog
    Validate,

    /// Print the chart for one viewer grade
    Render {
        #[arg(long)]
        grade: u8,

        /// Reservation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value = "view")]
        mode: InteractionMode,

        /// Seat id currently picked by the user
        #[arg(long)]
        selected: Option<String>,

        /// Only this zone
        #[arg(long)]
        zone: Option<ZoneId>,

        /// Print JSON instead of the text grid
        #[arg(long)]
        json: bool,
    },

    /// Print the status legend
    Legend,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let explicit_snapshot = cli.snapshot.is_some();
    if let Some(path) = cli.snapshot {
        config.snapshot_path = path;
    }

    match cli.command {
        Commands::Validate => validate(&config, explicit_snapshot),
        Commands::Render {
            grade,
            date,
            mode,
            selected,
            zone,
            json,
        } => {
            let snapshot = load_snapshot(&config, explicit_snapshot)?;
            let chart = SeatChart::with_catalog(snapshot.catalog()?)?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let request = RenderRequest {
                reservations: &snapshot.reservations,
                date,
                mode,
                selected_seat_id: selected.as_deref(),
            };
            render(&chart, grade, zone, &request, json)
        }
        Commands::Legend => {
            let mut out = String::new();
            text::render_legend(&mut out, &legend());
            print!("{out}");
            Ok(())
        }
    }
}

/// Missing default snapshot means "standard catalog, no reservations";
/// a missing file named on the command line is an error.
fn load_snapshot(config: &Config, explicit: bool) -> anyhow::Result<Snapshot> {
    let path = &config.snapshot_path;
    if !explicit && !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Snapshot not found, using the standard catalog without reservations"
        );
        return Ok(Snapshot::default());
    }
    Snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()))
}

fn validate(config: &Config, explicit_snapshot: bool) -> anyhow::Result<()> {
    let snapshot = load_snapshot(config, explicit_snapshot)?;
    let catalog = snapshot.catalog()?;
    let registry = standard_registry()?;

    let issues = registry.inconsistencies(&catalog);
    if issues.is_empty() {
        println!(
            "ok: {} zones, {} seats",
            registry.zones().count(),
            catalog.len()
        );
        return Ok(());
    }

    for (zone, issue) in &issues {
        println!("zone {zone}: {issue}");
    }
    bail!("{} layout inconsistencies found", issues.len())
}

fn render(
    chart: &SeatChart,
    grade: u8,
    zone: Option<ZoneId>,
    request: &RenderRequest<'_>,
    json: bool,
) -> anyhow::Result<()> {
    match zone {
        Some(zone) => {
            let Some(view) = chart.render_zone(zone, grade, request)? else {
                println!("Zone {zone} is not visible to grade {grade}");
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                let mut out = String::new();
                text::render_zone(&mut out, &view);
                print!("{out}");
            }
        }
        None => {
            let view = chart.render_chart(grade, request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", text::render_chart(&view));
            }
        }
    }
    Ok(())
}
