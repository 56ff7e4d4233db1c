// Pair known mods with their builds for a target game version

use crate::model::Mod;
use log::debug;

/// An installed catalog mod and the same-named mod for the target version,
/// if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModUpgrade {
    pub old: Mod,
    pub new: Option<Mod>,
}

impl ModUpgrade {
    /// Whether the target catalog has a versioned build of this mod
    pub fn is_upgradeable(&self) -> bool {
        self.new.as_ref().and_then(Mod::version).is_some()
    }
}

/// Pair each known mod with the first target catalog mod of the same name.
///
/// File hashes change between builds, so the pairing goes by name only.
/// Every known mod yields exactly one entry, in input order; mods without a
/// counterpart get `new: None`.
pub fn upgrade_diff(known: &[Mod], target: &[Mod]) -> Vec<ModUpgrade> {
    let pairs: Vec<ModUpgrade> = known
        .iter()
        .map(|old| ModUpgrade {
            old: old.clone(),
            new: target
                .iter()
                .find(|available| old.names_match(available))
                .cloned(),
        })
        .collect();

    debug!(
        "Diffed {} known mod(s): {} with an upgrade",
        pairs.len(),
        pairs.iter().filter(|pair| pair.new.is_some()).count()
    );
    pairs
}
