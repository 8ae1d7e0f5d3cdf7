//! tomldoc: list the doc-comments of TOML configuration files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tomldoc::formats::json::JsonFormat;
use tomldoc::formats::text::TextFormat;
use tomldoc::formats::Format;
use tomldoc::{config, input};
use tracing::{error, Level};

#[derive(Parser)]
#[command(name = "tomldoc")]
#[command(about = "Extract doc-comments from TOML configuration files", long_about = None)]
struct Args {
    /// Files or directories to scan
    #[arg(value_name = "PATH", default_value = ".")]
    paths: Vec<PathBuf>,

    /// File extensions to match when scanning directories
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Emit JSON instead of a text listing
    #[arg(long)]
    json: bool,

    /// Indent JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Show full doc-comment content instead of a preview
    #[arg(long, conflicts_with = "json")]
    full: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let documents = match input::find_documents(args.paths, &cfg.file_extensions) {
        Ok(documents) => documents,
        Err(e) => {
            error!("Failed to scan paths: {e}");
            return ExitCode::FAILURE;
        }
    };

    if documents.is_empty() {
        eprintln!("No matching files found");
        return ExitCode::SUCCESS;
    }

    let batch = input::extract_documents(&documents);

    let format: Box<dyn Format> = if args.json {
        Box::new(JsonFormat {
            pretty: args.pretty,
        })
    } else {
        Box::new(TextFormat {
            preview_width: cfg.preview_width,
            full: args.full,
        })
    };

    match format.render(&batch.reports) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    }

    if cfg.fail_on_unreadable && !batch.failures.is_empty() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
