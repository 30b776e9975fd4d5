//! Fallback renderer: headless Chrome over the DevTools protocol

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

use crate::error::{Error, Result};
use crate::{RenderConfig, Renderer};

/// Captures a page with a scoped Chrome instance and exports it to PDF.
///
/// Every attempt launches its own browser. The `Browser` handle is owned by
/// the attempt scope, so dropping it tears the Chrome child process down on
/// every exit path, including navigation failures, the body-wait timeout and
/// write errors.
pub struct ChromeRenderer {
    config: RenderConfig,
}

impl ChromeRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn launch(&self) -> Result<Browser> {
        let launch_options = LaunchOptions::default_builder()
            .headless(self.config.headless)
            .sandbox(false)
            .window_size(Some(self.config.window_size))
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(|e| Error::LaunchError(format!("failed to build launch options: {}", e)))?;

        Browser::new(launch_options)
            .map_err(|e| Error::LaunchError(format!("failed to launch browser: {}", e)))
    }
}

impl Renderer for ChromeRenderer {
    fn name(&self) -> &'static str {
        "chrome"
    }

    fn attempt(&self, url: &str, output: &Path) -> Result<()> {
        let browser = self.launch()?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::LaunchError(format!("failed to create tab: {}", e)))?;

        tab.navigate_to(url)
            .map_err(|e| Error::LoadError(format!("navigation failed: {}", e)))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::LoadError(format!("wait for navigation failed: {}", e)))?;

        // Bounded wait: a page whose body never appears is a failure, not a hang.
        tab.wait_for_element_with_custom_timeout("body", self.config.body_timeout)
            .map_err(|_| Error::Timeout(self.config.body_timeout.as_millis() as u64))?;

        let pdf = tab
            .print_to_pdf(Some(print_options()))
            .map_err(|e| Error::RenderError(format!("PDF export failed: {}", e)))?;

        fs::write(output, pdf)?;
        Ok(())
    }
}

/// No header or footer, keep background graphics, and let the page's own CSS
/// page rules win over the defaults.
fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        display_header_footer: Some(false),
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        ..Default::default()
    }
}
