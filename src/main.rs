use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use pagesnap::{logging, Agent, RenderConfig};

/// Convert URLs from text files into per-page PDF snapshots.
#[derive(Debug, Parser)]
#[command(name = "pagesnap", version)]
#[command(about = "Convert URLs from text files to PDFs", long_about = None)]
struct Cli {
    /// Input file or directory containing .txt files with URLs
    input: PathBuf,

    /// Output directory for PDFs
    #[arg(short, long, default_value = "pdf_output")]
    output: PathBuf,

    /// Run the fallback browser in non-headless mode
    #[arg(long)]
    no_headless: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(Path::new(logging::LOG_FILE)) {
        eprintln!(
            "warning: could not open {} ({}), logging to stdout only",
            logging::LOG_FILE,
            e
        );
        logging::init_stdout();
    }

    if !cli.input.is_file() && !cli.input.is_dir() {
        eprintln!(
            "Error: {} is not a valid file or directory",
            cli.input.display()
        );
        return ExitCode::from(1);
    }

    let config = RenderConfig {
        headless: !cli.no_headless,
        ..Default::default()
    };

    let agent = match Agent::new(cli.output, &config) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    // Per-URL and per-file failures are logged and absorbed; the input path
    // was already validated, so this only fails on a race with its removal.
    if let Err(e) = agent.run(&cli.input) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
