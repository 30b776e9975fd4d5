//! Primary renderer: drives the external `wkhtmltopdf` binary

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::{RenderConfig, Renderer};

const PAGE_SIZE: &str = "A4";
const MARGIN: &str = "0.75in";

/// Renders a URL straight to PDF through the wkhtmltopdf CLI.
///
/// The page options are fixed: A4, 0.75in margins all around, UTF-8, no
/// outline, local file access allowed, and load/media errors ignored so a
/// partially broken page still produces output. The settle delay gives page
/// scripts time to run before capture.
pub struct WkhtmlRenderer {
    binary: PathBuf,
    settle_delay_ms: u64,
}

impl WkhtmlRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            binary: config.wkhtmltopdf_bin.clone(),
            settle_delay_ms: config.settle_delay_ms,
        }
    }
}

impl Renderer for WkhtmlRenderer {
    fn name(&self) -> &'static str {
        "wkhtmltopdf"
    }

    fn attempt(&self, url: &str, output: &Path) -> Result<()> {
        let result = Command::new(&self.binary)
            .args(["--page-size", PAGE_SIZE])
            .args(["--margin-top", MARGIN])
            .args(["--margin-right", MARGIN])
            .args(["--margin-bottom", MARGIN])
            .args(["--margin-left", MARGIN])
            .args(["--encoding", "UTF-8"])
            .arg("--no-outline")
            .arg("--enable-local-file-access")
            .args(["--javascript-delay", &self.settle_delay_ms.to_string()])
            .args(["--load-error-handling", "ignore"])
            .args(["--load-media-error-handling", "ignore"])
            .arg("--quiet")
            .arg(url)
            .arg(output)
            .output()
            .map_err(|e| {
                Error::LaunchError(format!("failed to run {}: {}", self.binary.display(), e))
            })?;

        if result.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&result.stderr);
            Err(Error::RenderError(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_with_binary(binary: &str) -> WkhtmlRenderer {
        let config = RenderConfig {
            wkhtmltopdf_bin: PathBuf::from(binary),
            ..Default::default()
        };
        WkhtmlRenderer::new(&config)
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_with_binary("definitely-not-a-wkhtmltopdf-binary");
        let result = renderer.attempt("https://example.com", &dir.path().join("out.pdf"));
        assert!(matches!(result, Err(Error::LaunchError(_))));
    }

    #[test]
    fn nonzero_exit_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_with_binary("false");
        let result = renderer.attempt("https://example.com", &dir.path().join("out.pdf"));
        assert!(matches!(result, Err(Error::RenderError(_))));
    }

    #[test]
    fn zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer_with_binary("true");
        let result = renderer.attempt("https://example.com", &dir.path().join("out.pdf"));
        assert!(result.is_ok());
    }
}
