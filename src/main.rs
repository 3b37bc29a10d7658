//! tubenotes - YouTube videos in, AI-generated PDF notes out
//!
//! Entry point for the tubenotes CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tubenotes::cli::{Cli, Commands};
use tubenotes::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            tubenotes::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Summarize {
                    url,
                    words,
                    prompt,
                    output,
                    backend,
                    no_pdf,
                } => {
                    tubenotes::cli::commands::summarize(
                        &settings, &url, words, prompt, output, backend, no_pdf,
                    )
                    .await?;
                }
                Commands::Transcript { url } => {
                    tubenotes::cli::commands::show_transcript(&settings, &url).await?;
                }
                Commands::Config(config_cmd) => {
                    tubenotes::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
