//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wasteland/wasteland.toml`
//! 3. Local config: `--config <file>`, else `./wasteland.toml` if present
//! 4. Environment variables: `WASTELAND_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::Fixture;
use crate::application::ApplicationError;
use crate::domain::{WalkOptions, DEFAULT_START, DEFAULT_TERMINAL};

/// Name of the local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wasteland.toml";

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub start: Option<String>,
    pub terminal: Option<String>,
    pub max_steps: Option<u64>,
    pub fixtures: Option<Vec<Fixture>>,
}

/// Unified configuration for wasteland.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory fixture files are resolved against (default: ./data)
    pub data_dir: PathBuf,
    /// Label the walk starts from
    pub start: String,
    /// Label that ends the walk
    pub terminal: String,
    /// Optional bound on walk length; unset walks without limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u64>,
    /// Inputs checked by `wasteland verify`, in order
    pub fixtures: Vec<Fixture>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            start: DEFAULT_START.into(),
            terminal: DEFAULT_TERMINAL.into(),
            max_steps: None,
            fixtures: default_fixtures(),
        }
    }
}

/// The two worked examples plus the full puzzle input.
pub fn default_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new("Example 1", "example.txt", 2),
        Fixture::new("Example 2", "example2.txt", 6),
        Fixture::new("Part 1", "data.txt", 22411),
    ]
}

/// Get the XDG config directory for wasteland.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wasteland").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wasteland.toml"))
}

/// Get the path to the local config file in the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Expand `~`, `$VAR` and `${VAR}`; on failure the input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Trim a node label, rejecting blank values.
fn label(key: &str, value: &str) -> Result<String, ApplicationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::Config {
            message: format!("{} must not be empty", key),
        });
    }
    Ok(trimmed.to_string())
}

/// Read one env-derived key, treating "not set" as `None`.
fn env_value<T>(
    config: &Config,
    key: &str,
    get: impl Fn(&Config, &str) -> Result<T, ConfigError>,
) -> Result<Option<T>, ApplicationError> {
    match get(config, key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Walk parameters derived from these settings.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            start: self.start.clone(),
            terminal: self.terminal.clone(),
            max_steps: self.max_steps,
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
    }

    /// Overlay a config file layer onto self.
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - Fixtures: replaced entirely if the overlay lists any
    /// - Labels are trimmed; blank labels are rejected
    pub fn merge_with(&self, overlay: &RawSettings) -> Result<Self, ApplicationError> {
        let start = match &overlay.start {
            Some(val) => label("start", val)?,
            None => self.start.clone(),
        };
        let terminal = match &overlay.terminal {
            Some(val) => label("terminal", val)?,
            None => self.terminal.clone(),
        };

        Ok(Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            start,
            terminal,
            max_steps: overlay.max_steps.or(self.max_steps),
            fixtures: overlay
                .fixtures
                .clone()
                .unwrap_or_else(|| self.fixtures.clone()),
        })
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Explicit local config file; must exist when given.
    ///   Without it, `./wasteland.toml` is used if present.
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw)?;
            }
        }

        // 3. Local config
        match local_config {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                debug!("local config: {}", path.display());
                current = current.merge_with(&load_raw_settings(path)?)?;
            }
            None => {
                let path = local_config_path();
                if path.exists() {
                    debug!("local config: {}", path.display());
                    current = current.merge_with(&load_raw_settings(&path)?)?;
                }
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply WASTELAND_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("WASTELAND"));
        let config = builder.build().map_err(config_err)?;

        if let Some(val) = env_value(&config, "data_dir", Config::get_string)? {
            settings.data_dir = PathBuf::from(val);
        }
        if let Some(val) = env_value(&config, "start", Config::get_string)? {
            settings.start = label("start", &val)?;
        }
        if let Some(val) = env_value(&config, "terminal", Config::get_string)? {
            settings.terminal = label("terminal", &val)?;
        }
        if let Some(val) = env_value(&config, "max_steps", Config::get_int)? {
            let limit = u64::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("max_steps must not be negative: {}", val),
            })?;
            settings.max_steps = Some(limit);
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
