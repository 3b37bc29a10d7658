//! CLI command implementations

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::build_generator;
use crate::llm::prompts::WordLimit;
use crate::pipeline::{self, Outcome, SummaryRequest};
use crate::render::build_backend;
use crate::transcript::{fetch_english, InnerTubeCatalog};
use crate::video;

/// Run the full pipeline for one video and export the notes.
pub async fn summarize(
    settings: &Settings,
    url: &str,
    words: Option<u32>,
    prompt: Option<String>,
    output: Option<PathBuf>,
    backend: Option<String>,
    no_pdf: bool,
) -> Result<()> {
    // An invalid link fails before any remote collaborator is set up.
    video::resolve(url)?;

    let word_limit = match words {
        Some(requested) => WordLimit::new(requested, &settings.summary),
        None => WordLimit::default_for(&settings.summary),
    };

    let catalog = InnerTubeCatalog::new()?;
    let generator = build_generator(settings)?;

    let outcome = pipeline::run(
        SummaryRequest {
            url,
            word_limit,
            instruction: prompt.as_deref(),
        },
        &catalog,
        generator.as_ref(),
    )
    .await?;

    let context = match outcome {
        Outcome::Summarized(context) => context,
        Outcome::TranscriptUnavailable { video_id } => {
            println!("Could not fetch transcript for this video.");
            tracing::debug!("No transcript for {video_id}");
            return Ok(());
        }
    };

    println!("Video: {}", context.video_id);
    println!("Thumbnail: {}", context.video_id.thumbnail_url());
    println!();
    println!("Detailed Notes:");
    println!();
    println!("{}", context.summary);

    if no_pdf {
        return Ok(());
    }

    let backend = build_backend(&settings.render, backend.as_deref())?;
    let document = pipeline::render_document(&context.summary, backend.as_ref())?;

    let path = output.unwrap_or_else(|| settings.render.output_file.clone());
    std::fs::write(&path, document)?;
    println!();
    println!("PDF saved to: {}", path.display());

    Ok(())
}

/// Fetch and print a video's transcript without summarizing.
pub async fn show_transcript(_settings: &Settings, url: &str) -> Result<()> {
    let video_id = video::resolve(url)?;

    let catalog = InnerTubeCatalog::new()?;
    match fetch_english(&catalog, &video_id).await {
        Some(transcript) => {
            println!("{}", transcript);
        }
        None => {
            println!("Could not fetch transcript for this video.");
            tracing::debug!("No transcript for {video_id}");
        }
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
