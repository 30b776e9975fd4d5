//! Sequential batch driver: input files → URLs → renderer stack

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::collect::read_urls_from_file;
use crate::error::{Error, Result};
use crate::filename::pdf_filename;
use crate::{renderer_stack, RenderConfig, Renderer};

/// Drives a whole run, one URL at a time.
///
/// Owns the output directory and the ordered renderer strategies. Per-URL and
/// per-file failures are logged and absorbed; only an invalid top-level input
/// path is an error.
pub struct Agent {
    output_dir: PathBuf,
    renderers: Vec<Box<dyn Renderer>>,
}

impl Agent {
    /// Create an agent with the default strategy order, creating the output
    /// directory if it does not exist yet.
    pub fn new(output_dir: impl Into<PathBuf>, config: &RenderConfig) -> Result<Self> {
        Self::with_renderers(output_dir, renderer_stack(config))
    }

    /// Same as [`Agent::new`] but with an explicit strategy list.
    pub fn with_renderers(
        output_dir: impl Into<PathBuf>,
        renderers: Vec<Box<dyn Renderer>>,
    ) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            renderers,
        })
    }

    /// Process a single URL list file, or every `.txt` file in a directory.
    pub fn run(&self, input: &Path) -> Result<()> {
        if input.is_file() {
            self.process_file(input);
            Ok(())
        } else if input.is_dir() {
            self.process_directory(input);
            Ok(())
        } else {
            Err(Error::InvalidInput(input.to_path_buf()))
        }
    }

    /// Try the strategies in order; true as soon as one of them succeeds.
    pub fn process_url(&self, url: &str) -> bool {
        let output = self.output_dir.join(pdf_filename(url));
        info!("processing URL: {}", url);

        let mut renderers = self.renderers.iter().peekable();
        while let Some(renderer) = renderers.next() {
            match renderer.attempt(url, &output) {
                Ok(()) => {
                    info!("PDF created with {}: {}", renderer.name(), output.display());
                    return true;
                }
                Err(e) => {
                    error!("{} failed for {}: {}", renderer.name(), url, e);
                    if let Some(next) = renderers.peek() {
                        info!("falling back to {} for {}", next.name(), url);
                    }
                }
            }
        }
        false
    }

    /// Process every URL in one text file, returning (successes, total).
    ///
    /// A file with zero valid URLs triggers no render attempt at all.
    pub fn process_file(&self, path: &Path) -> (usize, usize) {
        let urls = read_urls_from_file(path);
        if urls.is_empty() {
            warn!("no valid URLs found in {}", path.display());
            return (0, 0);
        }

        let mut successes = 0;
        for url in &urls {
            if self.process_url(url) {
                successes += 1;
            }
        }

        info!(
            "{}/{} URLs processed successfully from {}",
            successes,
            urls.len(),
            path.display()
        );
        (successes, urls.len())
    }

    /// Process every `.txt` file directly inside `dir`, in sorted order.
    /// Not recursive.
    pub fn process_directory(&self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("error reading directory {}: {}", dir.display(), e);
                return;
            }
        };

        let mut files: Vec<_> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension() == Some(OsStr::new("txt")))
            .collect();
        files.sort();

        if files.is_empty() {
            warn!("no .txt files found in {}", dir.display());
            return;
        }

        for file in files {
            info!("processing file: {}", file.display());
            self.process_file(&file);
        }
    }
}
