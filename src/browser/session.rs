use crate::{browser::config::LaunchOptions, error::{Result, TrackerError}};
use headless_chrome::protocol::cdp::{Page, types::Event};
use headless_chrome::{Browser, Tab};
use std::{path::Path, sync::Arc, time::Duration};

/// Browser session holding a Chrome/Chromium instance and the single page the
/// run operates on.
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The one tab every interaction goes through
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance and open the working page
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // The default 30 second idle timeout is shorter than a run with a
        // generous latency ceiling, so raise it well past any real run.
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 10);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        let browser = Browser::new(launch_opts).map_err(|e| TrackerError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| TrackerError::LaunchFailed(format!("Failed to open page: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// The tab this session operates on
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate the page to a URL
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| TrackerError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for the current navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| TrackerError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Navigate to a URL and wait for the page to finish loading
    pub fn open(&self, url: &str) -> Result<()> {
        self.navigate(url)?;
        self.wait_for_navigation()
    }

    /// Click the element matched by a CSS selector
    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .tab
            .find_element(selector)
            .map_err(|e| TrackerError::ElementNotFound(format!("{}: {}", selector, e)))?;

        element.click().map_err(|e| TrackerError::InteractionFailed {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Evaluate an expression in the page and return its value
    pub fn evaluate(&self, expression: &str) -> Result<serde_json::Value> {
        let object = self
            .tab
            .evaluate(expression, false)
            .map_err(|e| TrackerError::EvaluationFailed(e.to_string()))?;

        Ok(object.value.unwrap_or(serde_json::Value::Null))
    }

    /// Forward in-page console messages to the operator's log under a prefix
    pub fn forward_console(&self, prefix: &str) -> Result<()> {
        let prefix = prefix.to_owned();

        self.tab
            .enable_log()
            .map_err(|e| TrackerError::TabOperationFailed(format!("Failed to enable log domain: {}", e)))?;

        self.tab
            .add_event_listener(Arc::new(move |event: &Event| {
                if let Event::LogEntryAdded(entry) = event {
                    log::info!("{} {}", prefix, entry.params.entry.text);
                }
            }))
            .map_err(|e| TrackerError::TabOperationFailed(format!("Failed to register console listener: {}", e)))?;

        Ok(())
    }

    /// Capture a full-page PNG screenshot and write it to a file
    pub fn screenshot_to(&self, path: &Path) -> Result<()> {
        // The capture clip defaults to the viewport; widen it to the laid-out
        // content size so the whole page lands in the image.
        let metrics = self
            .tab
            .call_method(Page::GetLayoutMetrics(None))
            .map_err(|e| TrackerError::ScreenshotFailed(format!("Failed to measure page: {}", e)))?;

        let content = metrics.css_content_size;
        let clip = Page::Viewport {
            x: 0.0,
            y: 0.0,
            width: content.width,
            height: content.height,
            scale: 1.0,
        };

        let data = self
            .tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, Some(clip), true)
            .map_err(|e| TrackerError::ScreenshotFailed(e.to_string()))?;

        std::fs::write(path, data)
            .map_err(|e| TrackerError::ScreenshotFailed(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Close the browser
    pub fn close(&self) -> Result<()> {
        // headless_chrome has no public close on Browser; closing the tabs
        // shuts the instance down, and Drop cleans up the process.
        self.tab
            .close(false)
            .map_err(|e| TrackerError::TabOperationFailed(format!("Failed to close tab: {}", e)))?;

        Ok(())
    }
}
