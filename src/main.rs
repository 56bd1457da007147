//! Bike Rental Dashboard
//!
//! Opens the dashboard window by default; `summary` and `export` run headless.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eframe::egui;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

use bikestats::analysis::{load_dataset, Session};
use bikestats::app::App;
use bikestats::config::{Config, Labels};
use bikestats::plotting::{export_panels, render_report};
use bikestats::types::DateRange;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, help = "JSON config file")]
    config: Option<PathBuf>,

    #[arg(long, help = "dataset CSV, overrides the config file")]
    data: Option<PathBuf>,

    #[arg(long, help = "label preset: en or id")]
    locale: Option<String>,

    /// first day of the initial filter
    #[arg(long, value_parser = parse_date, help = "start date, 2011-01-01")]
    start: Option<NaiveDate>,

    /// last day of the initial filter
    #[arg(long, value_parser = parse_date, help = "end date, 2012-12-31")]
    end: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the dashboard window (default)
    Gui,
    /// Print metrics and aggregate tables for the date range
    Summary,
    /// Render the chart panels to PNG files
    Export {
        #[arg(long, help = "output directory")]
        out: PathBuf,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date `{}`: {}", s, e))
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if let Some(locale) = &args.locale {
        config.locale = Labels::preset(locale)?;
    }
    Ok(config)
}

fn run_gui(session: Session, config: Config) -> Result<()> {
    let title = config.locale.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(session, config)) as Box<dyn eframe::App>)),
    )
    .map_err(|e| anyhow!("error running application: {}", e))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let dataset = load_dataset(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    let bounds = dataset.bounds();
    let range = DateRange::new(
        args.start.unwrap_or(bounds.start),
        args.end.unwrap_or(bounds.end),
    );
    let session = Session::with_range(dataset, range);
    info!("Initial date range: {}", session.range());

    match args.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(session, config),
        Command::Summary => {
            print!("{}", session.report().summary());
            Ok(())
        }
        Command::Export { out, width, height } => {
            let mut size = config.chart;
            if let Some(width) = width {
                size.width = width;
            }
            if let Some(height) = height {
                size.height = height;
            }
            let charts = render_report(session.report(), &config.locale, size)
                .inspect_err(|e| error!("Plotting error: {}", e))?;
            let written = export_panels(&charts, &out)?;
            info!("Exported {} charts to {}", written.len(), out.display());
            Ok(())
        }
    }
}
