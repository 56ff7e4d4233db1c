// Installed game version detection from Unity's globalgamemanagers file

use crate::constants::{GLOBAL_GAME_MANAGERS, VERSION_BLOCK_LEN, VERSION_MARKER, VERSION_OFFSET};
use crate::model::game_version::find_version;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Read the installed Beat Saber version number (the alias) from the game data.
///
/// Same approach as ModAssistant: the version string sits in a 32 byte block
/// that starts 136 characters after the app category marker. Returns `None`
/// when the data file, the marker or a version number is missing.
pub fn detect_version_alias(install_dir: &Path) -> anyhow::Result<Option<String>> {
    let path = install_dir.join(GLOBAL_GAME_MANAGERS);
    if !path.is_file() {
        debug!("No game data file at {}", path.display());
        return Ok(None);
    }

    let data = fs::read(&path)?;
    Ok(parse_version_alias(&data))
}

/// Extract the version number from raw globalgamemanagers content
pub fn parse_version_alias(data: &[u8]) -> Option<String> {
    // Invalid UTF-8 is dropped rather than replaced so offsets count real characters
    let text: String = String::from_utf8_lossy(data)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect();

    let Some(marker) = text.find(VERSION_MARKER) else {
        warn!("Version marker not found in {}", GLOBAL_GAME_MANAGERS);
        return None;
    };

    let block: String = text[marker..]
        .chars()
        .skip(VERSION_OFFSET)
        .take(VERSION_BLOCK_LEN)
        .collect();

    find_version(&block).map(str::to_string)
}

/// Fake globalgamemanagers content holding `version`, with some invalid UTF-8 up front
#[cfg(test)]
pub(crate) fn game_data(version: &str) -> Vec<u8> {
    let mut data = vec![0xffu8, 0xfe, 0x00, 0x01];
    data.extend_from_slice(VERSION_MARKER.as_bytes());
    data.resize(4 + VERSION_OFFSET, 0);
    data.extend_from_slice(version.as_bytes());
    data.extend_from_slice(&[0u8; 40]);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_version_alias() {
        assert_eq!(
            parse_version_alias(&game_data("1.15.0_1234")),
            Some("1.15.0".to_string())
        );
    }

    #[test]
    fn test_parse_version_with_build_letters() {
        assert_eq!(
            parse_version_alias(&game_data("1.1.0p1")),
            Some("1.1.0p1".to_string())
        );
    }

    #[test]
    fn test_parse_without_marker() {
        assert_eq!(parse_version_alias(b"nothing to see here"), None);
    }

    #[test]
    fn test_parse_without_version() {
        assert_eq!(parse_version_alias(&game_data("unknown")), None);
    }

    #[test]
    fn test_detect_from_install_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        assert_eq!(detect_version_alias(root).unwrap(), None);

        let path = root.join(GLOBAL_GAME_MANAGERS);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, game_data("1.29.1")).unwrap();

        assert_eq!(
            detect_version_alias(root).unwrap(),
            Some("1.29.1".to_string())
        );
    }
}
