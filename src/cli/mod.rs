// Command-line front end
// Loads occurrences from JSON, positions the cursor and prints the view

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::models::settings::Settings;
use crate::models::view::{Direction, ViewMode};
use crate::services::cursor::DateCursor;
use crate::services::engine::CalendarEngine;
use crate::services::settings::SettingsService;
use crate::services::source::JsonFileSource;
use crate::ui::{render_agenda, render_columns};
use crate::utils::date::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Day,
    Workweek,
    Week,
    Month,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "school-calendar",
    version,
    about = "Lay out school schedule occurrences on a day/week time grid"
)]
pub struct Cli {
    /// JSON file containing an array of occurrences
    pub occurrences: PathBuf,

    /// View to render; defaults to the view in the settings file
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Length of the rolling month window
    #[arg(long)]
    pub days: Option<usize>,

    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_anchor)]
    pub date: Option<NaiveDate>,

    /// Move the anchor by this many view periods (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Print a chronological list instead of day columns
    #[arg(long)]
    pub agenda: bool,

    /// Settings file; defaults to the platform config directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_anchor(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("expected a date like 2024-02-05, got '{}'", value))
}

impl Cli {
    /// The view to render: command line first, then settings.
    pub fn view_mode(&self, settings: &Settings) -> ViewMode {
        let month_days = self.days.unwrap_or(settings.month_window_days);
        match self.view {
            Some(ViewArg::Day) => ViewMode::Day,
            Some(ViewArg::Workweek) => ViewMode::WorkWeek,
            Some(ViewArg::Week) => ViewMode::Week,
            Some(ViewArg::Month) => ViewMode::Month(month_days),
            None => match settings.view_mode() {
                ViewMode::Month(_) => ViewMode::Month(month_days),
                other => other,
            },
        }
    }

    fn settings_service(&self) -> Result<SettingsService> {
        match &self.config {
            Some(path) => Ok(SettingsService::new(path)),
            None => SettingsService::from_default_location(),
        }
    }
}

/// Execute a parsed command line and return the text to print.
pub fn run(cli: &Cli) -> Result<String> {
    let settings = cli.settings_service()?.load()?;
    let config = settings
        .layout_config()
        .context("layout settings rejected")?;
    let view = cli.view_mode(&settings);

    let mut cursor = DateCursor::today();
    if let Some(date) = cli.date {
        cursor.set_anchor(date);
    }
    let direction = if cli.offset < 0 {
        Direction::Backward
    } else {
        Direction::Forward
    };
    for _ in 0..cli.offset.unsigned_abs() {
        cursor.navigate(view, direction);
    }

    log::info!("Rendering {} view anchored on {}", view, cursor.anchor());

    let mut engine = CalendarEngine::new(
        JsonFileSource::new(&cli.occurrences),
        cursor,
        view,
        config,
    );

    if cli.agenda {
        let entries = engine.agenda()?;
        return Ok(render_agenda(&entries, &settings.date_format));
    }

    let columns = engine.render()?;
    Ok(render_columns(
        &columns,
        engine.occurrences(),
        engine.config(),
        &settings.date_format,
    ))
}
