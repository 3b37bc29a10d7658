//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Summary word-budget settings
    #[serde(default)]
    pub summary: SummarySettings,

    /// PDF rendering settings
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for custom deployments)
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Smallest accepted summary word budget
    #[serde(default = "default_min_words")]
    pub min_words: u32,

    /// Largest accepted summary word budget
    #[serde(default = "default_max_words")]
    pub max_words: u32,

    /// Word budget granularity
    #[serde(default = "default_word_step")]
    pub word_step: u32,

    /// Word budget used when none is given
    #[serde(default = "default_words")]
    pub default_words: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// PDF backend (printpdf, wkhtmltopdf, chromium)
    #[serde(default = "default_render_backend")]
    pub backend: String,

    /// Path to the wkhtmltopdf binary
    #[serde(default = "default_wkhtmltopdf_path")]
    pub wkhtmltopdf_path: PathBuf,

    /// Path to the chromium binary
    #[serde(default = "default_chromium_path")]
    pub chromium_path: PathBuf,

    /// Default output file name for the rendered document
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_min_words() -> u32 {
    50
}

fn default_max_words() -> u32 {
    500
}

fn default_word_step() -> u32 {
    10
}

fn default_words() -> u32 {
    250
}

fn default_render_backend() -> String {
    "printpdf".to_string()
}

fn default_wkhtmltopdf_path() -> PathBuf {
    PathBuf::from("wkhtmltopdf")
}

fn default_chromium_path() -> PathBuf {
    PathBuf::from("chromium")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("summary_report.pdf")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            max_words: default_max_words(),
            word_step: default_word_step(),
            default_words: default_words(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            backend: default_render_backend(),
            wkhtmltopdf_path: default_wkhtmltopdf_path(),
            chromium_path: default_chromium_path(),
            output_file: default_output_file(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            llm: LlmSettings::default(),
            summary: SummarySettings::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("TUBENOTES_GEMINI_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "tubenotes", "tubenotes")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gemini_25_flash() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn summary_bounds_default_to_slider_range() {
        let summary = SummarySettings::default();
        assert_eq!(summary.min_words, 50);
        assert_eq!(summary.max_words, 500);
        assert_eq!(summary.word_step, 10);
        assert_eq!(summary.default_words, 250);
    }

    #[test]
    fn output_defaults_to_fixed_report_name() {
        let render = RenderSettings::default();
        assert_eq!(render.backend, "printpdf");
        assert_eq!(render.output_file, PathBuf::from("summary_report.pdf"));
    }
}
