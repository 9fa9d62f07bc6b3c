//! @acp:module "Configuration"
//! @acp:summary "Default CLI settings loaded from a JSON config file"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::render::OutputFormat;
use crate::vocab;

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".nebulaforge.json";

fn default_count() -> usize {
    1
}

/// @acp:summary "Defaults applied when the matching CLI flag is absent"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How many ideas to show
    #[serde(default = "default_count")]
    pub count: usize,

    /// Stack category to restrict ideas to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,

    /// Append the action plan to each idea
    #[serde(default)]
    pub detail: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: default_count(),
            focus: None,
            detail: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load and validate config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise the local file, then the user
    /// config directory, are tried before falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_in(explicit, Path::new("."), user_config_path())
    }

    /// `discover` against a given working directory and user config path
    pub fn discover_in(
        explicit: Option<&Path>,
        cwd: &Path,
        user_config: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        let candidates = std::iter::once(cwd.join(LOCAL_CONFIG_FILE)).chain(user_config);
        for candidate in candidates {
            if candidate.exists() {
                tracing::debug!("Loading config from {}", candidate.display());
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        match self.focus.as_deref() {
            Some(focus) if !vocab::is_stack_key(focus) => Err(ForgeError::UnknownFocus(
                focus.to_string(),
                vocab::stack_keys().join(", "),
            )),
            _ => Ok(()),
        }
    }
}

/// `<config dir>/nebulaforge/config.json`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("nebulaforge").join("config.json"))
}
