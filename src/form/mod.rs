//! Form interaction primitives.
//!
//! Everything the workflow does to the entry form goes through these four
//! operations. Each one synthesizes the DOM events a human interaction would
//! produce, since the legacy page's client-side handlers only run for
//! event-driven changes.

use crate::error::{Result, TrackerError};
use headless_chrome::Tab;
use std::time::{Duration, Instant};

/// Pause after focusing a field, before typing into it
const FOCUS_SETTLE: Duration = Duration::from_millis(50);

/// Interval between quiescence polls
const SETTLE_POLL: Duration = Duration::from_millis(25);

/// Quiescence check: document loaded and, on WebForms pages, no async
/// postback in flight.
const QUIESCENT_CHECK: &str = r#"(() => {
    if (document.readyState !== 'complete') return false;
    if (window.Sys && Sys.WebForms && Sys.WebForms.PageRequestManager) {
        return !Sys.WebForms.PageRequestManager.getInstance().get_isInAsyncPostBack();
    }
    return true;
})()"#;

/// Embed a Rust string into an in-page script as a JS string literal
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Replace the value of the text field matched by `selector` with `value`.
///
/// Focuses the field, selects its existing content (what a user's triple-click
/// would do), lets focus settle, then types `value` keystroke by keystroke so
/// the page sees ordinary key events.
pub fn replace_field_value(tab: &Tab, selector: &str, value: &str) -> Result<()> {
    let element = tab
        .find_element(selector)
        .map_err(|e| TrackerError::ElementNotFound(format!("{}: {}", selector, e)))?;

    element.focus().map_err(|e| TrackerError::InteractionFailed {
        selector: selector.to_string(),
        reason: format!("focus: {}", e),
    })?;

    element
        .call_js_fn("function() { if (this.select) this.select(); }", vec![], false)
        .map_err(|e| TrackerError::InteractionFailed {
            selector: selector.to_string(),
            reason: format!("select content: {}", e),
        })?;

    std::thread::sleep(FOCUS_SETTLE);

    tab.type_str(value).map_err(|e| TrackerError::InteractionFailed {
        selector: selector.to_string(),
        reason: format!("type: {}", e),
    })?;

    Ok(())
}

/// Select the option(s) of the dropdown matched by `selector` whose visible
/// text contains `fragment`, then dispatch a synthetic bubbling `change` event
/// flagged as simulated.
///
/// Matching is by substring, so the caller must supply a fragment unique
/// within the option list. Zero matches is an error. More than one match
/// leaves every match marked, as the legacy page always behaved, and logs a
/// warning; the returned count lets the caller notice the ambiguity.
pub fn select_dropdown_option(tab: &Tab, selector: &str, fragment: &str) -> Result<usize> {
    let element = tab
        .find_element(selector)
        .map_err(|e| TrackerError::ElementNotFound(format!("{}: {}", selector, e)))?;

    // Open the dropdown first; the focal point list populates itself lazily.
    element.click().map_err(|e| TrackerError::InteractionFailed {
        selector: selector.to_string(),
        reason: format!("click: {}", e),
    })?;

    let script = format!(
        r#"(() => {{
            const list = document.querySelector({selector});
            if (list === null) return -1;
            const fragment = {fragment};
            let marked = 0;
            for (const option of list.options) {{
                if (option.textContent.indexOf(fragment) > -1) {{
                    option.selected = true;
                    marked += 1;
                }}
            }}
            const change = new Event('change', {{ bubbles: true }});
            change.simulated = true;
            list.dispatchEvent(change);
            return marked;
        }})()"#,
        selector = js_string(selector),
        fragment = js_string(fragment),
    );

    let marked = tab
        .evaluate(&script, false)
        .map_err(|e| TrackerError::EvaluationFailed(e.to_string()))?
        .value
        .and_then(|v| v.as_i64())
        .unwrap_or(-1);

    match marked {
        -1 => Err(TrackerError::ElementNotFound(selector.to_string())),
        0 => Err(TrackerError::NoMatchingOption {
            selector: selector.to_string(),
            fragment: fragment.to_string(),
        }),
        1 => Ok(1),
        n => {
            log::warn!("'{}' matches {} options in {}; all of them were marked", fragment, n, selector);
            Ok(n as usize)
        }
    }
}

/// Wait for the page to go quiet after a field commit.
///
/// Polls the quiescence check and returns as soon as it holds; `ceiling` is
/// the old fixed delay, kept as the upper bound so a page that never reports
/// quiet still only costs the original wait.
pub fn settle(tab: &Tab, ceiling: Duration) -> Result<()> {
    let deadline = Instant::now() + ceiling;

    loop {
        // Sleep before the first check so a postback kicked off by the commit
        // has a chance to start.
        std::thread::sleep(SETTLE_POLL.min(deadline.saturating_duration_since(Instant::now())));

        if Instant::now() >= deadline {
            return Ok(());
        }

        let quiet = tab
            .evaluate(QUIESCENT_CHECK, false)
            .ok()
            .and_then(|object| object.value)
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        if quiet {
            return Ok(());
        }
    }
}

/// Wait for the dropdown matched by `selector` to hold a stable, non-empty
/// option list, bounded by `ceiling`.
///
/// The focal point list repopulates itself from the selected project, so its
/// option count is the observable completion signal.
pub fn wait_for_options(tab: &Tab, selector: &str, ceiling: Duration) -> Result<()> {
    let deadline = Instant::now() + ceiling;
    let script = format!(
        "(() => {{ const list = document.querySelector({}); return list === null ? -1 : list.options.length; }})()",
        js_string(selector),
    );

    let mut previous = -1i64;

    loop {
        std::thread::sleep(SETTLE_POLL.min(deadline.saturating_duration_since(Instant::now())));

        let count = tab
            .evaluate(&script, false)
            .ok()
            .and_then(|object| object.value)
            .and_then(|value| value.as_i64())
            .unwrap_or(-1);

        if count > 0 && count == previous {
            return Ok(());
        }

        if Instant::now() >= deadline {
            // Ceiling reached; proceed with whatever the list holds.
            return Ok(());
        }

        previous = count;
    }
}
