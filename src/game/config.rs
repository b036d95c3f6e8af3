//! Game configuration
//!
//! Grid size and generation tuning, loaded from an optional RON file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CAVEWALK_CONFIG";
/// Environment variable overriding the generation seed
pub const SEED_ENV: &str = "CAVEWALK_SEED";

const CONFIG_FILE_NAME: &str = "cavewalk.ron";

/// Largest width or height; the map view draws one terminal cell per tile
const MAX_GRID_SIDE: i32 = 1000;
/// Largest total cell count
const MAX_GRID_CELLS: usize = 250_000;

/// Tunable settings for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    /// Number of smoothing passes after the random walk
    pub smoothing_iterations: u32,
    /// Share of the grid the random walk carves before stopping
    pub fill_fraction: f64,
    /// Fixed generation seed; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Minimum frame duration in milliseconds (0 = unpaced)
    pub frame_time_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 45,
            smoothing_iterations: 3,
            fill_fraction: 0.5,
            seed: None,
            frame_time_ms: 16,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Resolve the config for a run: the file named by `CAVEWALK_CONFIG`, else
    /// `cavewalk.ron` in the user config dir, else defaults. A `CAVEWALK_SEED`
    /// variable overrides the seed either way.
    pub fn load_or_default() -> Self {
        let path = config_path_from(env::var(CONFIG_PATH_ENV).ok());
        Self::resolve(path, env::var(SEED_ENV).ok())
    }

    /// Build the config from an optional file and an optional raw seed
    /// override. A missing file gives defaults; a file that fails to load is
    /// logged and also gives defaults. A seed that does not parse is ignored.
    pub fn resolve(path: Option<PathBuf>, seed_var: Option<String>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|e| {
                log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Some(raw) = seed_var {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => log::warn!("Ignoring {}={:?}: {}", SEED_ENV, raw, e),
            }
        }

        config
    }

    /// Reject settings the generator cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 3x3, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::Invalid(format!(
                "grid sides must be at most {}, got {}x{}",
                MAX_GRID_SIDE, self.width, self.height
            )));
        }
        let cells = (self.width as usize).checked_mul(self.height as usize);
        if cells.map_or(true, |cells| cells > MAX_GRID_CELLS) {
            return Err(ConfigError::Invalid(format!(
                "grid of {}x{} exceeds {} cells",
                self.width, self.height, MAX_GRID_CELLS
            )));
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "fill_fraction must be between 0 and 1 (exclusive), got {}",
                self.fill_fraction
            )));
        }
        Ok(())
    }
}

/// Where to look for a config file. An explicit path wins over the
/// platform config dir.
fn config_path_from(explicit: Option<String>) -> Option<PathBuf> {
    use directories::ProjectDirs;

    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("com", "cavewalk", "Cavewalk")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
