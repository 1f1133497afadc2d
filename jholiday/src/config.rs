use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "jhcal.toml";

/// Top-level `jhcal.toml` structure. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JhcalConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub weeks: WeeksConfig,
}

/// Which view runs when no subcommand is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Monthly,
    Weekly,
    Yearly,
}

/// `[view]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    #[serde(default)]
    pub default: View,
    #[serde(default = "default_true")]
    pub weekday_header: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            default: View::default(),
            weekday_header: true,
        }
    }
}

/// `[weeks]` section: size of the weekly window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeksConfig {
    #[serde(default = "default_weeks")]
    pub past: u32,
    #[serde(default = "default_weeks")]
    pub next: u32,
}

impl Default for WeeksConfig {
    fn default() -> Self {
        WeeksConfig {
            past: default_weeks(),
            next: default_weeks(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_weeks() -> u32 {
    jholiday::time::matrix::DEFAULT_PAST_WEEKS
}

impl JhcalConfig {
    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one, `jhcal.toml` in the working
    /// directory is used when present, and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
