use std::path::PathBuf;
use std::time::Duration as StdDuration;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use timetracker_core::{
    ApiClient, CalendarPayload, Config, DayView, ViewBuilder, WeekView,
};

#[derive(Args)]
pub struct ViewOpts {
    /// Date within the day/week to render (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Read the payload from a JSON file instead of the configured API
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_day(opts: ViewOpts) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let date = opts.date.unwrap_or_else(|| Local::now().date_naive());
    let payload = load_payload(&opts.input, &config, date, date + Duration::days(1))?;

    let view = builder(&config).day(&payload.items, date);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_day(&view);
    }
    Ok(())
}

pub fn run_week(opts: ViewOpts) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let date = opts.date.unwrap_or_else(|| Local::now().date_naive());
    let week_start = date.week(config.week_start()).first_day();
    let payload = load_payload(&opts.input, &config, week_start, week_start + Duration::days(7))?;

    let view = builder(&config).week(&payload.items, date);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_week(&view);
    }
    Ok(())
}

fn builder(config: &Config) -> ViewBuilder {
    ViewBuilder::new()
        .with_palette(config.palette())
        .with_week_start(config.week_start())
}

fn load_payload(
    input: &Option<PathBuf>,
    config: &Config,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<CalendarPayload, Box<dyn std::error::Error>> {
    match input {
        Some(path) => {
            let body = std::fs::read_to_string(path)?;
            Ok(CalendarPayload::from_json(&body)?)
        }
        None => {
            let client = ApiClient::with_timeout(
                &config.api.base_url,
                StdDuration::from_secs(config.api.timeout_secs),
            )?;
            let rt = tokio::runtime::Runtime::new()?;
            Ok(rt.block_on(client.fetch_range(start, end))?)
        }
    }
}

fn print_day(view: &DayView) {
    println!(
        "{}  ({} blocks, {} columns)",
        view.date,
        view.blocks.len(),
        view.total_columns
    );
    for block in &view.blocks {
        println!(
            "  {}-{}  [{}] {}  (left {:.1}%, width {:.1}%)",
            block.start.format("%H:%M"),
            block.end.format("%H:%M"),
            block.kind.as_str(),
            block.title,
            block.geometry.left,
            block.geometry.width,
        );
    }
}

fn print_week(view: &WeekView) {
    println!("week of {}", view.week_start);
    for day in &view.days {
        print_day(day);
    }
}
