// Occurrence sources
// The data-fetch collaborator that supplies occurrences for a date range

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::occurrence::ScheduleOccurrence;

/// Supplies the occurrences to render for a visible range.
///
/// Called once per range change. The returned collection replaces whatever
/// was fetched before; sources may return occurrences outside the range,
/// the binner ignores them.
#[cfg_attr(test, mockall::automock)]
pub trait OccurrenceSource {
    fn fetch(&self, range: &[NaiveDate]) -> Result<Vec<ScheduleOccurrence>>;
}

/// Fixed in-memory occurrence list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    occurrences: Vec<ScheduleOccurrence>,
}

impl StaticSource {
    pub fn new(occurrences: Vec<ScheduleOccurrence>) -> Self {
        Self { occurrences }
    }
}

impl OccurrenceSource for StaticSource {
    fn fetch(&self, _range: &[NaiveDate]) -> Result<Vec<ScheduleOccurrence>> {
        Ok(self.occurrences.clone())
    }
}

/// Reads a JSON array of occurrences from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OccurrenceSource for JsonFileSource {
    fn fetch(&self, range: &[NaiveDate]) -> Result<Vec<ScheduleOccurrence>> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read occurrences from {}", self.path.display()))?;
        let occurrences: Vec<ScheduleOccurrence> = serde_json::from_str(&data).with_context(
            || format!("failed to deserialize occurrences from {}", self.path.display()),
        )?;
        log::info!(
            "Loaded {} occurrence(s) from {} for {} day(s)",
            occurrences.len(),
            self.path.display(),
            range.len()
        );
        Ok(occurrences)
    }
}
