use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Location of the icon relative to the crate root
const ICON_RELATIVE_PATH: &str = "../../web/current/server-icon.png";

/// The icon checked when no path is given.
///
/// Resolved two levels above the crate root at compile time, then into
/// `web/current/`.
pub fn default_icon_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(ICON_RELATIVE_PATH)
}

/// Main configuration for iconmeta
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Image to inspect instead of the default icon
    pub path: Option<PathBuf>,
    /// Print the resolved path to stderr before reading
    pub verbose: bool,
}

impl ReporterConfig {
    /// The file the reporter will read.
    pub fn icon_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_icon_path)
    }

    /// Loads a TOML config file named explicitly on the command line.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Invalid config: {:?}", path))
    }
}
