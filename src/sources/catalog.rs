// Trait definition for mod catalogs

use crate::model::{GameVersion, Mod};
use anyhow::Result;

/// A registry publishing approved mods per game version (BeatMods, or a fake in tests)
#[async_trait::async_trait]
pub trait ModCatalog: Send + Sync {
    /// Get all approved mods for a game version, in catalog order
    ///
    /// # Arguments
    /// * `version` - The game version; only its BeatMods version is used
    async fn mods_for_version(&self, version: &GameVersion) -> Result<Vec<Mod>>;

    /// Resolve a Beat Saber version number to its BeatMods version
    ///
    /// # Returns
    /// `None` if the catalog doesn't know the version
    async fn resolve_alias(&self, alias: &str) -> Result<Option<GameVersion>>;

    /// Get the newest game version the catalog knows
    async fn latest_version(&self) -> Result<GameVersion>;
}
