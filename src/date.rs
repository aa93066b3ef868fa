//! Target date resolution and formatting.

use chrono::{Local, NaiveDate};

/// Figure out which day the entry is for.
///
/// An explicit date always wins; otherwise `--yesterday` means today minus one
/// calendar day, and the fallback is today. No combination is rejected, the
/// precedence just applies.
pub fn resolve(explicit: Option<NaiveDate>, yesterday: bool) -> NaiveDate {
    resolve_from(Local::now().date_naive(), explicit, yesterday)
}

fn resolve_from(today: NaiveDate, explicit: Option<NaiveDate>, yesterday: bool) -> NaiveDate {
    if let Some(date) = explicit {
        return date;
    }
    if yesterday {
        return today.pred_opt().unwrap_or(today);
    }
    today
}

/// Format a date the way the entry form's date field expects it
pub fn format_entry_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
