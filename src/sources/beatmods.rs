// BeatMods catalog implementation

use crate::constants::{BEAT_MODS_ALIASES, BEAT_MODS_API};
use crate::model::{FileHash, GameVersion, Mod, ModelError};
use crate::sources::catalog::ModCatalog;
use crate::sources::http;
use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct BeatModsMod {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub downloads: Vec<Download>,
}

#[derive(Debug, Deserialize)]
pub struct Download {
    #[serde(rename = "hashMd5", default)]
    pub hash_md5: Vec<DownloadFile>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadFile {
    pub file: String,
    pub hash: String,
}

/// BeatMods version aliases: BeatMods version to the game releases sharing it,
/// in document order
pub type Aliases = Map<String, Value>;

impl BeatModsMod {
    /// Convert to a mod with one file group per download
    ///
    /// File entries without a hash are skipped; the rest of the mod is kept.
    pub fn into_mod(self) -> Result<Mod, ModelError> {
        let name = self.name;
        let files = self
            .downloads
            .into_iter()
            .map(|download| {
                download
                    .hash_md5
                    .into_iter()
                    .filter_map(|f| match FileHash::new(f.file, f.hash) {
                        Ok(file) => Some(file),
                        Err(e) => {
                            warn!("Skipping file of {}: {}", name, e);
                            None
                        }
                    })
                    .collect()
            })
            .collect();
        let link = self.link.filter(|link| !link.is_empty());
        Mod::new(name, Some(self.version), link, files)
    }
}

/// Convert catalog entries to mods, keeping catalog order. Malformed entries are skipped.
pub fn catalog_mods(entries: Vec<BeatModsMod>) -> Vec<Mod> {
    entries
        .into_iter()
        .filter_map(|entry| match entry.into_mod() {
            Ok(mod_) => Some(mod_),
            Err(e) => {
                warn!("Skipping catalog entry: {}", e);
                None
            }
        })
        .collect()
}

fn alias_list(version: &str, aliases: &Value) -> anyhow::Result<Vec<String>> {
    serde_json::from_value(aliases.clone())
        .map_err(|e| anyhow::anyhow!("Invalid aliases for BeatMods version {}: {}", version, e))
}

/// Find the BeatMods version a game release belongs to
pub fn find_alias(aliases: &Aliases, alias: &str) -> anyhow::Result<Option<GameVersion>> {
    for (version, entries) in aliases {
        if alias == version || alias_list(version, entries)?.iter().any(|a| a == alias) {
            return Ok(Some(GameVersion::new(version.as_str(), alias)));
        }
    }
    Ok(None)
}

/// The newest game release across all BeatMods versions and their aliases.
///
/// Each BeatMods version also counts as a release of its own. When several
/// candidates rank equal the first one in document order wins.
pub fn newest_alias(aliases: &Aliases) -> anyhow::Result<GameVersion> {
    let mut candidates = Vec::new();
    for (version, entries) in aliases {
        candidates.push(GameVersion::new(version.as_str(), version.as_str()));
        for alias in alias_list(version, entries)? {
            candidates.push(GameVersion::new(version.as_str(), alias));
        }
    }

    candidates
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.is_newer_than(&best) {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| anyhow::anyhow!("BeatMods did not list any game versions"))
}

pub struct BeatModsCatalog;

impl BeatModsCatalog {
    async fn fetch_aliases(&self) -> anyhow::Result<Aliases> {
        http::fetch_json(BEAT_MODS_ALIASES).await
    }
}

#[async_trait]
impl ModCatalog for BeatModsCatalog {
    async fn mods_for_version(&self, version: &GameVersion) -> anyhow::Result<Vec<Mod>> {
        let url = format!(
            "{}mod?gameVersion={}&status=approved",
            BEAT_MODS_API,
            urlencoding::encode(version.version())
        );
        let entries: Vec<BeatModsMod> = http::fetch_json(&url).await?;
        let mods = catalog_mods(entries);
        debug!("BeatMods lists {} mod(s) for {}", mods.len(), version);
        Ok(mods)
    }

    async fn resolve_alias(&self, alias: &str) -> anyhow::Result<Option<GameVersion>> {
        let aliases = self.fetch_aliases().await?;
        find_alias(&aliases, alias)
    }

    async fn latest_version(&self) -> anyhow::Result<GameVersion> {
        let aliases = self.fetch_aliases().await?;
        newest_alias(&aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::upgrade_diff;

    fn aliases() -> Aliases {
        serde_json::from_str(
            r#"{
                "1.13.4": ["1.14.0", "1.15.0"],
                "1.13.2": ["1.13.3"],
                "1.16.0": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_catalog_mods() {
        let entries: Vec<BeatModsMod> = serde_json::from_str(
            r#"[
                {
                    "name": "SongCore",
                    "version": "2.9.0",
                    "link": "https://github.com/Kylemc1413/SongCore",
                    "downloads": [
                        {"type": "universal", "url": "/uploads/a.zip", "hashMd5": [
                            {"hash": "AAA", "file": "Plugins/SongCore.dll"},
                            {"hash": "bbb", "file": "Plugins/SongCore.manifest"}
                        ]},
                        {"type": "steam", "url": "/uploads/b.zip", "hashMd5": [
                            {"hash": "ccc", "file": "Libs/Helper.dll"}
                        ]}
                    ]
                },
                {"name": "NoDownloads", "version": "1.0.0", "downloads": []},
                {"name": "Camera2", "version": "0.6.0", "link": "", "downloads": [
                    {"hashMd5": [{"hash": "ddd", "file": "Plugins/Camera2.dll"}]}
                ]}
            ]"#,
        )
        .unwrap();

        let mods = catalog_mods(entries);

        assert_eq!(mods.len(), 2);
        assert_eq!(mods[0].name(), "SongCore");
        assert_eq!(mods[0].version(), Some("2.9.0"));
        assert_eq!(mods[0].files().len(), 2);
        assert_eq!(mods[0].files()[0][0].digest(), "aaa");
        assert_eq!(mods[0].files()[1][0].path(), "Libs/Helper.dll");
        assert_eq!(mods[1].name(), "Camera2");
        assert_eq!(mods[1].link(), None);
    }

    #[test]
    fn test_blank_file_hash_keeps_mod() {
        let entries: Vec<BeatModsMod> = serde_json::from_str(
            r#"[
                {"name": "SongCore", "version": "3.0.0", "downloads": [
                    {"hashMd5": [
                        {"hash": "abc", "file": "Plugins/SongCore.dll"},
                        {"hash": "", "file": "Plugins/SongCore.manifest"}
                    ]}
                ]}
            ]"#,
        )
        .unwrap();

        let target = catalog_mods(entries);

        assert_eq!(target.len(), 1);
        assert_eq!(target[0].files().len(), 1);
        assert_eq!(target[0].files()[0].len(), 1);
        assert_eq!(target[0].files()[0][0].digest(), "abc");

        let installed = Mod::new(
            "SongCore",
            Some("2.9.0".to_string()),
            None,
            vec![vec![FileHash::new("Plugins/SongCore.dll", "old").unwrap()]],
        )
        .unwrap();
        let diff = upgrade_diff(&[installed], &target);
        assert_eq!(diff[0].new.as_ref().and_then(Mod::version), Some("3.0.0"));
    }

    #[test]
    fn test_find_alias() {
        let aliases = aliases();

        assert_eq!(
            find_alias(&aliases, "1.15.0").unwrap(),
            Some(GameVersion::new("1.13.4", "1.15.0"))
        );
        assert_eq!(
            find_alias(&aliases, "1.13.2").unwrap(),
            Some(GameVersion::new("1.13.2", "1.13.2"))
        );
        assert_eq!(find_alias(&aliases, "9.9.9").unwrap(), None);
    }

    #[test]
    fn test_newest_alias() {
        assert_eq!(
            newest_alias(&aliases()).unwrap(),
            GameVersion::new("1.16.0", "1.16.0")
        );
    }

    #[test]
    fn test_newest_alias_prefers_latest_alias_in_group() {
        let aliases: Aliases =
            serde_json::from_str(r#"{"1.13.4": ["1.14.0", "1.15.0"]}"#).unwrap();

        assert_eq!(
            newest_alias(&aliases).unwrap(),
            GameVersion::new("1.13.4", "1.15.0")
        );
    }

    #[test]
    fn test_newest_alias_empty() {
        assert!(newest_alias(&Aliases::new()).is_err());
    }

    #[test]
    fn test_invalid_alias_document() {
        let aliases: Aliases = serde_json::from_str(r#"{"1.13.4": "1.15.0"}"#).unwrap();
        assert!(find_alias(&aliases, "1.15.0").is_err());
    }
}
