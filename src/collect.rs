//! URL collection from line-oriented text files

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{error, info, warn};

/// Read URLs from a text file, one per line.
///
/// Each line is trimmed; blank lines and lines starting with `#` are skipped
/// silently. A line is accepted only if it starts with `http://` or
/// `https://`; anything else gets a warning with its 1-based line number and
/// is dropped. Order is preserved and duplicates are kept.
///
/// An unreadable file is logged and yields an empty list: zero URLs means
/// "nothing to do" for the caller, never a fatal error for the batch.
pub fn read_urls_from_file(path: &Path) -> Vec<String> {
    match collect_lines(path) {
        Ok(urls) => {
            info!("read {} URLs from {}", urls.len(), path.display());
            urls
        }
        Err(e) => {
            error!("error reading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn collect_lines(path: &Path) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut urls = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with("http://") || line.starts_with("https://") {
            urls.push(line.to_string());
        } else {
            warn!("invalid URL at line {}: {}", idx + 1, line);
        }
    }

    Ok(urls)
}
