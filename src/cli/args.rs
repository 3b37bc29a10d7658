//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// tubenotes - YouTube videos in, AI-generated PDF notes out
#[derive(Parser, Debug)]
#[command(name = "tubenotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a video and export the notes as a PDF
    Summarize {
        /// YouTube video URL
        url: String,

        /// Summary word budget (clamped to the configured range)
        #[arg(short, long)]
        words: Option<u32>,

        /// Custom instruction replacing the built-in summary prompt
        #[arg(short, long)]
        prompt: Option<String>,

        /// Output PDF path (defaults to summary_report.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PDF backend (printpdf, wkhtmltopdf, chromium)
        #[arg(short, long)]
        backend: Option<String>,

        /// Print the summary only, skip the PDF
        #[arg(long)]
        no_pdf: bool,
    },

    /// Fetch and print a video's transcript
    Transcript {
        /// YouTube video URL
        url: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
