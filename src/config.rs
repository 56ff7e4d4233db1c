// Config module for persisted user preferences

use crate::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub fn config_dir() -> String {
    std::env::var("BSUPGRADE_DIR").unwrap_or_else(|_| ".".to_string())
}

pub fn preferences_path() -> PathBuf {
    Path::new(&config_dir()).join(constants::PREFERENCES_FILE)
}

/// Preferences remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Beat Saber install directory used in the previous run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
}

impl Preferences {
    /// Load preferences from the config directory, or defaults on first run
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&preferences_path())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&preferences_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Invalid preferences file {}: {}", path.display(), e))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let prefs = Preferences::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join(constants::PREFERENCES_FILE);
        let prefs = Preferences {
            install_dir: Some(PathBuf::from("/games/Beat Saber")),
        };

        prefs.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("install_dir"));
        assert_eq!(Preferences::load_from(&path).unwrap(), prefs);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(constants::PREFERENCES_FILE);
        std::fs::write(&path, "install_dir = [").unwrap();

        assert!(Preferences::load_from(&path).is_err());
    }
}
