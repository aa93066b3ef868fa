//! # load-tt
//!
//! Loads a day's entry into the legacy BairesDev time tracker by driving a
//! headless Chrome instance via the Chrome DevTools Protocol (CDP).
//!
//! The whole system is one linear workflow: launch a browser, authenticate,
//! populate the entry form field by field, optionally submit, and keep a
//! screenshot as the receipt. The legacy page revalidates after every field
//! change, so each commit waits for the page to settle before the next one.
//!
//! ## CLI
//!
//! The usual way in is the `load-tt` binary:
//!
//! ```bash
//! # Track yesterday's eight hours
//! load-tt --yesterday "Worked on module X"
//!
//! # Fill the form and screenshot it without committing anything
//! load-tt --dry "Checking the form still matches"
//!
//! # List the dates already loaded this period
//! load-tt --dates
//! ```
//!
//! Credentials and per-user defaults live in `~/.timetracker/config.yml`:
//!
//! ```yaml
//! credentials:
//!   username: jdoe
//!   password: hunter2
//! options:
//!   project: Acme
//!   assignment: Development
//!   focal: Jane
//!   hours: "8"
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use load_tt::{AppConfig, BrowserSession, LaunchOptions, TrackingOptions, tracker};
//!
//! # fn main() -> load_tt::Result<()> {
//! let config = AppConfig::load()?;
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//!
//! tracker::open_entry_page(&session, &config.page, &config.credentials)?;
//!
//! let options = TrackingOptions::merge(
//!     &config.options,
//!     load_tt::date::resolve(None, true),
//!     "Worked on module X".to_string(),
//!     false,
//!     None,
//! );
//! tracker::track(&session, &config.page.entry, &options)?;
//!
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: launch options and the [`BrowserSession`] wrapper over `headless_chrome`
//! - [`form`]: the low-level form interaction primitives
//! - [`tracker`]: authentication, the submission workflow, and the loaded-dates listing
//! - [`page`]: the target page's URLs and selector mapping, overridable from configuration
//! - [`config`]: YAML configuration loading
//! - [`date`]: target date resolution and formatting
//! - [`error`]: error types and the result alias

pub mod browser;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod page;
pub mod tracker;

pub use browser::{BrowserSession, LaunchOptions};
pub use config::{AppConfig, Credentials, EntryDefaults};
pub use error::{Result, TrackerError};
pub use page::{EntrySelectors, LoginSelectors, PageMap};
pub use tracker::{PageDriver, TrackingOptions};
