//! pagesnap
//!
//! Reads URLs from line-oriented text files and saves a rendered PDF snapshot
//! of each page into an output directory.
//!
//! # Renderer strategies
//!
//! Two strategies are tried in a fixed order for every URL:
//!
//! - **wkhtmltopdf**: drives the external `wkhtmltopdf` binary straight from
//!   the URL, no browser session
//! - **chrome**: on failure, launches a headless Chrome instance, waits for
//!   the page body, and exports the rendered page over the DevTools protocol
//!
//! Both implement the [`Renderer`] trait, so the fallback policy is just an
//! ordered list the driver walks until one strategy succeeds.
//!
//! # Example
//!
//! ```no_run
//! use pagesnap::{Agent, RenderConfig};
//!
//! # fn main() -> pagesnap::Result<()> {
//! let agent = Agent::new("pdf_output", &RenderConfig::default())?;
//! agent.run(std::path::Path::new("urls.txt"))?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod error;
pub use error::{Error, Result};

pub mod batch;
pub mod chrome;
pub mod collect;
pub mod filename;
pub mod logging;
pub mod wkhtml;

pub use batch::Agent;

/// Configuration shared by the renderer strategies
///
/// The defaults mirror how the tool is normally run: a headless browser,
/// a desktop-sized window, a bounded wait for the page body, and a settle
/// delay so script-heavy pages finish drawing before capture.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Run the fallback browser without a visible window
    pub headless: bool,
    /// Browser window size for the fallback capture
    pub window_size: (u32, u32),
    /// How long the fallback waits for the `body` element to appear
    pub body_timeout: Duration,
    /// Delay in milliseconds given to page scripts before the primary capture
    pub settle_delay_ms: u64,
    /// Path to the wkhtmltopdf binary
    pub wkhtmltopdf_bin: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            body_timeout: Duration::from_secs(10),
            settle_delay_ms: 2000,
            // The binary is looked up on PATH unless WKHTMLTOPDF_BIN points
            // somewhere explicit.
            wkhtmltopdf_bin: std::env::var_os("WKHTMLTOPDF_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("wkhtmltopdf")),
        }
    }
}

/// A single PDF-producing strategy
pub trait Renderer {
    /// Short name used in log lines when the driver reports and falls back
    fn name(&self) -> &'static str;

    /// Render `url` to a PDF at `output`, reporting any failure as an error
    fn attempt(&self, url: &str, output: &Path) -> Result<()>;
}

/// Build the default strategy order: wkhtmltopdf first, Chrome on failure.
pub fn renderer_stack(config: &RenderConfig) -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(wkhtml::WkhtmlRenderer::new(config)),
        Box::new(chrome::ChromeRenderer::new(config)),
    ]
}
