//! WebDriver session wrapper.
//!
//! Thin convenience layer over a `thirtyfour` Chrome session. Every helper
//! that locates an element polls for it with a shared timeout, which is the
//! only waiting the robot does; anything not found within the timeout is a
//! hard error for the caller to propagate or swallow.

use std::time::Duration;

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use thirtyfour::Key;
use tracing::info;

const ELEMENT_TIMEOUT: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A live Chrome session driven over the WebDriver protocol.
pub struct Browser {
    driver: WebDriver,
}

impl Browser {
    /// Connect to a running WebDriver endpoint and open a maximized Chrome
    /// window.
    pub async fn connect(webdriver_url: &str, headless: bool) -> WebDriverResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.set_headless()?;
        }

        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver.maximize_window().await?;
        info!(%webdriver_url, headless, "Browser session started");

        Ok(Browser { driver })
    }

    /// Navigate to a URL.
    pub async fn goto(&self, url: &str) -> WebDriverResult<()> {
        self.driver.goto(url).await
    }

    /// Wait for an element to appear, then return it.
    pub async fn find_when_present(&self, xpath: &str) -> WebDriverResult<WebElement> {
        self.driver
            .query(By::XPath(xpath))
            .wait(ELEMENT_TIMEOUT, POLL_INTERVAL)
            .first()
            .await
    }

    /// Wait for an element to appear, then click it.
    pub async fn click_when_present(&self, xpath: &str) -> WebDriverResult<()> {
        self.find_when_present(xpath).await?.click().await
    }

    /// Wait for an input to appear, clear it, and type into it.
    pub async fn fill(&self, xpath: &str, text: &str) -> WebDriverResult<()> {
        let input = self.find_when_present(xpath).await?;
        input.clear().await?;
        input.send_keys(text).await
    }

    /// Send an Enter keypress to an element.
    pub async fn press_enter(&self, xpath: &str) -> WebDriverResult<()> {
        self.find_when_present(xpath)
            .await?
            .send_keys(Key::Enter + "")
            .await
    }

    /// Whether an element exists right now, without waiting.
    pub async fn exists_now(&self, xpath: &str) -> WebDriverResult<bool> {
        self.driver.query(By::XPath(xpath)).nowait().exists().await
    }

    /// Select an option from a `<select>` element by its value attribute.
    pub async fn select_by_value(&self, xpath: &str, value: &str) -> WebDriverResult<()> {
        let element = self.find_when_present(xpath).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_value(value).await
    }

    /// The current page source.
    pub async fn page_source(&self) -> WebDriverResult<String> {
        self.driver.source().await
    }

    /// Quit the browser, ending the session.
    pub async fn close(self) -> WebDriverResult<()> {
        info!("Closing browser session");
        self.driver.quit().await
    }
}
