//! # configs
//!
//! Layered settings for the postfeed binary.
//!
//! Loading order, later layers win:
//! 1. `config/defaults.toml`, embedded at build time
//! 2. a TOML file (the given path, or `postfeed.toml` in the working dir if present)
//! 3. `POSTFEED__*` environment variables, `.env` included

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULTS: &str = include_str!("../config/defaults.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("display offset of {0} minutes is out of range")]
    InvalidOffset(i32),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, `RUST_LOG` takes precedence
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub title: String,
    /// Offset from UTC for naive feed timestamps and date labels
    pub display_offset_minutes: i32,
    pub seed_comment: String,
    pub required_message: String,
    pub link_href: String,
    /// Feed document; the bundled demo feed when unset
    #[serde(default)]
    pub feed_path: Option<PathBuf>,
    /// Event script replayed before rendering
    #[serde(default)]
    pub events_path: Option<PathBuf>,
    /// Stdout when unset
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    pub log: LogSettings,
}

impl Settings {
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Self::defaults();
        builder = match config_path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("postfeed").required(false)),
        };
        builder = builder.add_source(
            config::Environment::with_prefix("POSTFEED")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Defaults overlaid with one TOML document. Ignores files and environment.
    pub fn from_toml(layer: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()
            .add_source(config::File::from_str(layer, config::FileFormat::Toml));
        Self::finish(builder)
    }

    pub fn display_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.display_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.display_offset_minutes))
    }

    fn defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.display_offset()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
