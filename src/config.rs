//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mansion/mansion.toml`
//! 3. Explicit config file given with `--config`
//! 4. Environment variables: `MANSION_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, SessionOptions};

/// Unified configuration for mansion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Map layout file to explore instead of the built-in mansion
    pub map_file: Option<PathBuf>,
    /// List the destination room next to each direction
    pub show_destinations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_file: None,
            show_destinations: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub map_file: Option<PathBuf>,
    pub show_destinations: Option<bool>,
}

/// Get the XDG config directory for mansion.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mansion").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mansion.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            map_file: overlay.map_file.clone().or_else(|| self.map_file.clone()),
            show_destinations: overlay.show_destinations.unwrap_or(self.show_destinations),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(map_file) = &self.map_file {
            self.map_file = Some(PathBuf::from(expand_env_vars(
                map_file.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/mansion/mansion.toml` (if present)
    /// 3. `config_file`
    /// 4. Environment variables: `MANSION_*` prefix
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_layers(
            global.as_deref(),
            config_file,
            Environment::with_prefix("MANSION")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    /// Merge the given layers over the compiled defaults.
    ///
    /// `global` and `config_file` must exist when given; `env` is applied last.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> ApplicationResult<Self> {
        let mut current = Self::default();

        for path in global.into_iter().chain(config_file) {
            debug!("config layer: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current, env)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply environment variables as explicit overrides.
    ///
    /// Unset variables leave the value alone; unparsable ones are an error.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        match config.get_string("map_file") {
            Ok(val) => settings.map_file = Some(PathBuf::from(val)),
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_bool("show_destinations") {
            Ok(val) => settings.show_destinations = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            show_destinations: self.show_destinations,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mansion configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mansion/mansion.toml
#   File:   mansion --config <file>
#   Env:    MANSION_* environment variables (e.g. MANSION_SHOW_DESTINATIONS=false)

# Map layout to explore instead of the built-in mansion
# map_file = "~/maps/castle.toml"

# List the destination room next to each direction
# show_destinations = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
