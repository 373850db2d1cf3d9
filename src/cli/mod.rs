use clap::Parser;
use std::path::PathBuf;

/// Keyword-driven emotion analysis for diary entries
#[derive(Parser, Debug)]
#[clap(name = "maum", about = "Keyword-driven emotion analysis for diary entries")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Diary text to analyze (reads standard input when neither text nor --file is given)
    #[clap(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the diary text from a file
    #[clap(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Classify with the remote sentiment service instead of the keyword lexicon
    #[clap(short = 'r', long)]
    pub remote: bool,

    /// Print the result as JSON
    #[clap(short = 'j', long)]
    pub json: bool,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
