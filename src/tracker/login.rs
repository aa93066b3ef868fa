//! Session bootstrapping: authenticate and land on the entry page.

use crate::{browser::BrowserSession, config::Credentials, error::Result, form, page::PageMap};

/// Prefix for in-page console messages forwarded to the operator's log
const CONSOLE_PREFIX: &str = "TIME TRACKER:";

/// Authenticate against the login form currently loaded in the session
pub fn login(session: &BrowserSession, page: &PageMap, credentials: &Credentials) -> Result<()> {
    form::replace_field_value(session.tab(), &page.login.username_field, &credentials.username)?;
    form::replace_field_value(session.tab(), &page.login.password_field, &credentials.password)?;

    session.click(&page.login.login_button)?;

    // The login posts back and redirects; wait for the dust to settle before
    // touching the page again.
    session.wait_for_navigation()
}

/// Open the application, authenticate, and navigate to the timesheet entry
/// page, leaving the session positioned for the submission workflow
pub fn open_entry_page(session: &BrowserSession, page: &PageMap, credentials: &Credentials) -> Result<()> {
    session.open(&page.root_url)?;

    login(session, page, credentials)?;

    session.open(&page.entry_url)?;

    session.forward_console(CONSOLE_PREFIX)?;

    log::debug!("Authenticated as {} and positioned on {}", credentials.username, page.entry_url);

    Ok(())
}
