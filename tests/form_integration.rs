//! Browser-backed tests for the form interaction primitives.
//!
//! These require Chrome to be installed and are ignored by default; run them
//! with: cargo test -- --ignored

use load_tt::{BrowserSession, LaunchOptions, TrackerError, form};
use std::time::{Duration, Instant};

fn launch() -> BrowserSession {
    BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser")
}

const PROJECT_LIST_PAGE: &str = "data:text/html,<html><body>\
<select id='projects'>\
<option>Alpha Project</option>\
<option>Beta Project</option>\
</select>\
</body></html>";

#[test]
#[ignore] // Requires Chrome to be installed
fn test_replace_field_value_discards_prior_content() {
    let session = launch();
    session
        .open("data:text/html,<html><body><input id='hours' value='stale'></body></html>")
        .expect("Failed to open page");

    form::replace_field_value(session.tab(), "#hours", "8").expect("Failed to replace value");

    let value = session.evaluate("document.querySelector('#hours').value").expect("Failed to read value");
    assert_eq!(value.as_str(), Some("8"));
}

#[test]
#[ignore]
fn test_replace_field_value_missing_element() {
    let session = launch();
    session.open("data:text/html,<html><body></body></html>").expect("Failed to open page");

    let result = form::replace_field_value(session.tab(), "#missing", "8");
    assert!(matches!(result, Err(TrackerError::ElementNotFound(_))));
}

#[test]
#[ignore]
fn test_unique_fragment_marks_exactly_one_option() {
    let session = launch();
    session.open(PROJECT_LIST_PAGE).expect("Failed to open page");

    let marked = form::select_dropdown_option(session.tab(), "#projects", "Alpha").expect("Failed to select");
    assert_eq!(marked, 1);

    let index = session.evaluate("document.querySelector('#projects').selectedIndex").expect("Failed to read index");
    assert_eq!(index.as_i64(), Some(0));
}

#[test]
#[ignore]
fn test_ambiguous_fragment_marks_every_match() {
    // A multi-select keeps every mark visible; on the legacy single-selects
    // the same scan runs and the last match ends up selected.
    let session = launch();
    session
        .open(
            "data:text/html,<html><body>\
<select id='projects' multiple>\
<option>Alpha Project</option>\
<option>Beta Project</option>\
</select>\
</body></html>",
        )
        .expect("Failed to open page");

    let marked = form::select_dropdown_option(session.tab(), "#projects", "Project").expect("Failed to select");
    assert_eq!(marked, 2);

    let selected = session
        .evaluate("document.querySelector('#projects').selectedOptions.length")
        .expect("Failed to count selection");
    assert_eq!(selected.as_i64(), Some(2));
}

#[test]
#[ignore]
fn test_no_matching_option_is_an_error() {
    let session = launch();
    session.open(PROJECT_LIST_PAGE).expect("Failed to open page");

    let result = form::select_dropdown_option(session.tab(), "#projects", "Gamma");
    assert!(matches!(result, Err(TrackerError::NoMatchingOption { .. })));
}

#[test]
#[ignore]
fn test_change_event_is_flagged_simulated() {
    let session = launch();
    session
        .open(
            "data:text/html,<html><body>\
<select id='projects'><option>Alpha Project</option></select>\
<script>document.querySelector('#projects').addEventListener('change', e => { window.__simulated = e.simulated; });</script>\
</body></html>",
        )
        .expect("Failed to open page");

    form::select_dropdown_option(session.tab(), "#projects", "Alpha").expect("Failed to select");

    let flagged = session.evaluate("window.__simulated === true").expect("Failed to read flag");
    assert_eq!(flagged.as_bool(), Some(true));
}

#[test]
#[ignore]
fn test_settle_returns_early_on_a_quiet_page() {
    let session = launch();
    session.open("data:text/html,<html><body><p>quiet</p></body></html>").expect("Failed to open page");

    let ceiling = Duration::from_secs(5);
    let started = Instant::now();
    form::settle(session.tab(), ceiling).expect("Failed to settle");

    // A loaded static page is quiescent on the first poll
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
#[ignore]
fn test_wait_for_options_is_bounded_by_the_ceiling() {
    let session = launch();
    session.open("data:text/html,<html><body></body></html>").expect("Failed to open page");

    let ceiling = Duration::from_millis(300);
    let started = Instant::now();
    // The list never appears; the wait must give up at the ceiling.
    form::wait_for_options(session.tab(), "#never", ceiling).expect("Failed to wait");

    assert!(started.elapsed() < ceiling + Duration::from_secs(1));
}
