//! Listing of the dates already loaded into the tracker.
//!
//! The entry page shows the period's loaded entries in a table whose first
//! column is the date; scraping that column is the only way the legacy
//! application exposes what has been tracked.

use crate::{browser::BrowserSession, error::{Result, TrackerError}, form::js_string, page::EntrySelectors};
use chrono::NaiveDate;

/// How the loaded-entries table renders its dates
const LOADED_DATE_FORMAT: &str = "%d-%m-%Y";

/// Fetch the loaded dates from the entry page the session is positioned on
pub fn fetch_loaded_dates(session: &BrowserSession, selectors: &EntrySelectors) -> Result<Vec<NaiveDate>> {
    let script = format!(
        r#"(() => {{
            const cells = document.querySelectorAll({});
            return JSON.stringify(Array.from(cells, cell => cell.textContent.trim()));
        }})()"#,
        js_string(&selectors.loaded_rows),
    );

    let value = session.evaluate(&script)?;
    let raw = value
        .as_str()
        .ok_or_else(|| TrackerError::EvaluationFailed("loaded-rows scan returned no string".to_string()))?;

    let texts: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| TrackerError::EvaluationFailed(format!("loaded-rows scan returned malformed JSON: {}", e)))?;

    Ok(parse_loaded_dates(&texts))
}

/// Parse the scraped cell texts into dates.
///
/// The table's last row carries an empty first cell, and summary rows hold
/// non-date text; both are skipped.
fn parse_loaded_dates(texts: &[String]) -> Vec<NaiveDate> {
    texts
        .iter()
        .filter(|text| !text.is_empty())
        .filter_map(|text| match NaiveDate::parse_from_str(text, LOADED_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                log::debug!("Skipping non-date cell {:?}", text);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parses_loaded_dates() {
        let dates = parse_loaded_dates(&cells(&["04-03-2024", "05-03-2024"]));
        assert_eq!(
            dates,
            vec![NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()]
        );
    }

    #[test]
    fn test_trailing_empty_cell_is_skipped() {
        let dates = parse_loaded_dates(&cells(&["04-03-2024", ""]));
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_non_date_cells_are_skipped() {
        let dates = parse_loaded_dates(&cells(&["Total", "04-03-2024", "8.5", ""]));
        assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()]);
    }
}
