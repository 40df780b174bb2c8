use std::path::PathBuf;

use clap::Parser;

/// Hover: an always-on-top chat window with a canvas layout.
#[derive(Parser, Debug)]
#[command(name = "hover", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load this address instead of the configured content URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Files to paste into the chat once it has loaded.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// The given files that exist, as absolute paths.
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|p| p.is_file())
            .filter_map(|p| std::fs::canonicalize(p).ok())
            .collect()
    }
}

pub fn parse() -> Args {
    Args::parse()
}
