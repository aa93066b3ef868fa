//! The time tracker workflow: authentication, entry submission, and the
//! loaded-dates listing.

pub mod dates;
pub mod login;
pub mod submit;

pub use dates::fetch_loaded_dates;
pub use login::open_entry_page;
pub use submit::track;

use crate::{browser::BrowserSession, config::EntryDefaults, error::Result, form};
use chrono::NaiveDate;
use std::time::Duration;

/// Everything needed to load one day's entry
#[derive(Debug, Clone)]
pub struct TrackingOptions {
    pub date: NaiveDate,
    pub project: String,
    pub assignment: String,
    pub hours: String,
    pub focal: String,
    pub description: String,

    /// Ceiling for the per-field settle wait
    pub latency: Duration,

    /// Fill every field but never submit
    pub dry_run: bool,
}

impl TrackingOptions {
    /// Merge the configuration defaults with the run's own parameters
    pub fn merge(
        defaults: &EntryDefaults,
        date: NaiveDate,
        description: String,
        dry_run: bool,
        latency_override: Option<u64>,
    ) -> Self {
        Self {
            date,
            project: defaults.project.clone(),
            assignment: defaults.assignment.clone(),
            hours: defaults.hours.clone(),
            focal: defaults.focal.clone(),
            description,
            latency: Duration::from_millis(latency_override.unwrap_or(defaults.latency)),
            dry_run,
        }
    }
}

/// The page operations the submission workflow is written against.
///
/// `BrowserSession` is the real implementation; tests drive the workflow with
/// a recording stand-in.
pub trait PageDriver {
    /// Replace a text field's value
    fn fill(&self, selector: &str, value: &str) -> Result<()>;

    /// Select the dropdown option(s) matching a label fragment; returns how
    /// many options were marked
    fn select(&self, selector: &str, fragment: &str) -> Result<usize>;

    /// Click an element
    fn click(&self, selector: &str) -> Result<()>;

    /// Let the page settle after a field commit, bounded by `ceiling`
    fn settle(&self, ceiling: Duration) -> Result<()>;

    /// Wait for a dropdown's option list to stabilize, bounded by `ceiling`
    fn wait_for_options(&self, selector: &str, ceiling: Duration) -> Result<()>;
}

impl PageDriver for BrowserSession {
    fn fill(&self, selector: &str, value: &str) -> Result<()> {
        form::replace_field_value(self.tab(), selector, value)
    }

    fn select(&self, selector: &str, fragment: &str) -> Result<usize> {
        form::select_dropdown_option(self.tab(), selector, fragment)
    }

    fn click(&self, selector: &str) -> Result<()> {
        BrowserSession::click(self, selector)
    }

    fn settle(&self, ceiling: Duration) -> Result<()> {
        form::settle(self.tab(), ceiling)
    }

    fn wait_for_options(&self, selector: &str, ceiling: Duration) -> Result<()> {
        form::wait_for_options(self.tab(), selector, ceiling)
    }
}
