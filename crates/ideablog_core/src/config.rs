//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from ideablog.toml)
//! - ~/.config/ideablog/ideablog.toml
//! - ./ideablog.toml
//! - `IDEABLOG__<SECTION>__<KEY>` environment variables

use crate::GenerationConfig;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use ideablog_error::{ConfigError, IdeaBlogError, IdeaBlogResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../ideablog.toml");

/// Gemini REST endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiSettings {
    /// Base URL up to and including the API version segment
    pub base_url: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Relay bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` string suitable for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 10000,
        }
    }
}

/// Default export destinations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Final narrative document
    pub narrative_file: PathBuf,
    /// Style transformer draft history
    pub blog_history_file: PathBuf,
    /// Narrative processor interaction history
    pub narrative_history_file: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            narrative_file: PathBuf::from("final_narrative.json"),
            blog_history_file: PathBuf::from("blog_history.json"),
            narrative_history_file: PathBuf::from("narrative_history.json"),
        }
    }
}

/// Complete ideablog configuration.
///
/// # Example
///
/// ```no_run
/// use ideablog_core::IdeaBlogConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IdeaBlogConfig::load()?;
/// println!("Styling with {}", config.style.model_name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IdeaBlogConfig {
    /// Narrative processor generation settings
    pub narrative: GenerationConfig,
    /// Style transformer generation settings
    pub style: GenerationConfig,
    /// Remote endpoint
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Relay bind address
    #[serde(default)]
    pub server: ServerSettings,
    /// Export file names
    #[serde(default)]
    pub export: ExportSettings,
}

impl Default for IdeaBlogConfig {
    fn default() -> Self {
        Self {
            narrative: GenerationConfig::narrative_default(),
            style: GenerationConfig::style_default(),
            gemini: GeminiSettings::default(),
            server: ServerSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl IdeaBlogConfig {
    /// Load configuration from every standard source.
    #[instrument]
    pub fn load() -> IdeaBlogResult<Self> {
        Self::load_with(None)
    }

    /// Load the standard sources, then layer an explicit file on top.
    ///
    /// The explicit file, when given, must exist.
    #[instrument]
    pub fn load_with(path: Option<&Path>) -> IdeaBlogResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/ideablog/ideablog.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("ideablog").required(false));

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("IDEABLOG")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML string.
    pub fn from_toml_str(overrides: &str) -> IdeaBlogResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(overrides, FileFormat::Toml)))
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> IdeaBlogResult<Self> {
        builder
            .build()
            .map_err(|e| {
                IdeaBlogError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                IdeaBlogError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
