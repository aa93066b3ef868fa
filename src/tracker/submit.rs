//! The submission workflow: populate the entry form one field at a time and
//! optionally commit it.

use crate::{date, error::Result, page::EntrySelectors, tracker::{PageDriver, TrackingOptions}};

/// Load one day's entry into the form.
///
/// The legacy page revalidates and reflows after every field change, so each
/// commit is followed by a blur (clicking an inert label) and a settle wait
/// bounded by `options.latency`. The order matters: the focal point list only
/// populates once a project is selected.
///
/// With `dry_run` set, every field is populated but the accept control is
/// never clicked.
pub fn track<D: PageDriver>(driver: &D, selectors: &EntrySelectors, options: &TrackingOptions) -> Result<()> {
    let latency = options.latency;

    driver.fill(&selectors.date_field, &date::format_entry_date(options.date))?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    driver.select(&selectors.project_list, &options.project)?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    driver.select(&selectors.assignment_list, &options.assignment)?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    driver.fill(&selectors.hours_field, &options.hours)?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    // Clicking the focal point list forces it to populate from the selected
    // project before we try to pick from it.
    driver.click(&selectors.focal_list)?;
    driver.wait_for_options(&selectors.focal_list, latency)?;
    driver.select(&selectors.focal_list, &options.focal)?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    driver.fill(&selectors.description_field, &options.description)?;
    driver.click(&selectors.outside_label)?;
    driver.settle(latency)?;

    if options.dry_run {
        log::info!("Dry run, not submitting");
        return Ok(());
    }

    driver.click(&selectors.accept_button)?;
    driver.settle(latency)
}
