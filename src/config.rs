use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/procread.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Lines shown from the head of each system pseudo-file.
    pub lines: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { lines: 10 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// File read by both methods; `<proc_root>/version` when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proc_root: PathBuf,
    pub system: SystemConfig,
    pub compare: CompareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            system: SystemConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

impl Config {
    /// Clamp fields to valid ranges.
    pub fn validate(&mut self) {
        self.system.lines = self.system.lines.clamp(1, 1000);
        if self.proc_root.as_os_str().is_empty() {
            self.proc_root = PathBuf::from(DEFAULT_PROC_ROOT);
        }
    }

    pub fn compare_path(&self) -> PathBuf {
        match &self.compare.path {
            Some(p) => p.clone(),
            None => self.proc_root.join("version"),
        }
    }
}

/// Load configuration from a TOML file.
///
/// - If `explicit_path` is `Some` and the file is missing, returns an error.
/// - If `explicit_path` is `None`, tries `/etc/procread.toml`; if missing, returns defaults.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, Error> {
    let path = match explicit_path {
        Some(p) => {
            if !p.exists() {
                return Err(Error::InvalidArgs(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                return Ok(Config::default());
            }
            default.to_path_buf()
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        Error::InvalidArgs(format!("failed to read config {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| {
        Error::InvalidArgs(format!("failed to parse config {}: {}", path.display(), e))
    })?;

    Ok(config)
}
