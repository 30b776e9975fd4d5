//! Logging init: timestamped lines teed to stdout and an append-only file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Default log file, created in whatever directory the tool is run from.
pub const LOG_FILE: &str = "pagesnap.log";

/// Writer that duplicates every line to the log file and stdout; degrades to
/// stdout alone when the file handle cannot be cloned.
enum TeeWriter {
    FileAndStdout(File),
    Stdout,
}

impl io::Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let TeeWriter::FileAndStdout(file) = self {
            file.write_all(buf)?;
        }
        io::stdout().lock().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let TeeWriter::FileAndStdout(file) = self {
            file.flush()?;
        }
        io::stdout().lock().flush()
    }
}

struct TeeMakeWriter(File);

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(TeeWriter::FileAndStdout)
            .unwrap_or(TeeWriter::Stdout)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to stdout and `log_path` (appended
/// across runs). Returns Err when the log file cannot be opened so the caller
/// can fall back to [`init_stdout`] instead of aborting.
pub fn init(log_path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(TeeMakeWriter(file)))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Stdout-only variant used when the log file is unavailable.
pub fn init_stdout() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stdout)
        .with_ansi(false)
        .init();
}
