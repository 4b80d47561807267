use crate::utils::error::{Result, ScrapeError};
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

/// One headless Chrome session with a single tab. The browser process is
/// owned by the session and killed when the session drops, so an early
/// error can no longer leak the process.
pub struct BrowserSession {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// 啟動無頭瀏覽器,選項固定為 CI 可用的組合
    pub fn launch() -> Result<Self> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            args: vec![OsStr::new("--disable-gpu")],
            ..Default::default()
        })?;
        let tab = browser.new_tab()?;

        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Bounded wait for the page's defining element.
    pub fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|_| ScrapeError::MarkerTimeoutError {
                selector: selector.to_string(),
                seconds: timeout.as_secs(),
            })?;
        Ok(())
    }

    /// Fixed pause for asynchronous rendering to settle.
    pub fn settle(&self, pause: Duration) {
        std::thread::sleep(pause);
    }

    /// Scroll to the bottom until `document.body.scrollHeight` stops
    /// changing across one iteration, returning the number of rounds
    /// taken. The fixed-point loop is explicitly bounded: a listing that
    /// keeps growing past `max_rounds` surfaces an error instead of
    /// hanging the run.
    pub fn scroll_to_bottom(&self, pause: Duration, max_rounds: usize) -> Result<usize> {
        let mut last_height = self.page_height()?;

        for round in 1..=max_rounds {
            self.tab
                .evaluate("window.scrollTo(0, document.body.scrollHeight);", false)?;
            std::thread::sleep(pause);

            let new_height = self.page_height()?;
            if new_height == last_height {
                return Ok(round);
            }
            last_height = new_height;
        }

        Err(ScrapeError::ScrollNotSettledError { rounds: max_rounds })
    }

    /// Rendered DOM serialized back to an HTML string.
    pub fn content(&self) -> Result<String> {
        Ok(self.tab.get_content()?)
    }

    fn page_height(&self) -> Result<i64> {
        let result = self
            .tab
            .evaluate("document.body.scrollHeight", false)?;
        Ok(result.value.and_then(|v| v.as_i64()).unwrap_or(0))
    }
}
