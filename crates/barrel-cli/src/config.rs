//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the resulting
//! [`ExportLayout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by [`AppConfig::layout_with`] at the call-site)
//! 2. Environment variables (`BARREL_LAYOUT__SOURCE_ROOT`, `BARREL_OUTPUT__NO_COLOR`, ...)
//! 3. Config file (`--config`, `./.barrel.toml`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use barrel_core::domain::ExportLayout;

use crate::cli::{LayoutArgs, MapFormat};

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "BARREL";

/// File name of a project-local config.
pub const LOCAL_CONFIG_FILE: &str = ".barrel.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Source layout of generated libraries.
    pub layout: ExportLayout,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: MapFormat,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(
                    config::File::from(path.as_path())
                        .format(config::FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(path) = Self::discovered_path() {
                    builder = builder.add_source(
                        config::File::from(path.as_path())
                            .format(config::FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The config file that applies when `--config` is not given.
    pub fn discovered_path() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.barrel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "barrel", "barrel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The path reported by `barrel config path`.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(Self::discovered_path)
            .unwrap_or_else(Self::config_path)
    }

    /// The configured layout with per-invocation flags applied.
    pub fn layout_with(&self, args: &LayoutArgs) -> ExportLayout {
        let mut layout = self.layout.clone();
        if let Some(root) = &args.source_root {
            layout.source_root = root.clone();
        }
        if let Some(dir) = &args.lib_dir {
            layout.lib_dir = dir.clone();
        }
        if let Some(ext) = &args.extension {
            layout.extension = ext.clone();
        }
        layout
    }
}
