// Reconcile installed mods against a BeatMods catalog by file hash

use crate::model::Mod;
use log::debug;

/// Installed mods split by whether BeatMods knows them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Catalog mods proven installed by a shared file hash, without duplicates
    pub known: Vec<Mod>,
    /// Installed mods matching no catalog mod, in scan order
    pub unknown: Vec<Mod>,
}

/// Partition installed mods into catalog mods and unknown mods.
///
/// Installed mods carry no trustworthy name, only file hashes, so each one is
/// matched to the first catalog mod (in catalog order) sharing any file with
/// it. The catalog mod is what gets recorded, once, even when several
/// installed files point at it.
pub fn reconcile(installed: &[Mod], catalog: &[Mod]) -> Reconciliation {
    let mut result = Reconciliation::default();

    for local in installed {
        match catalog
            .iter()
            .find(|available| available.shares_file_with(local))
        {
            Some(available) => {
                debug!("{} matched catalog mod {}", local, available);
                // Dedup is by value: identical catalog entries count as one mod
                if !result.known.contains(available) {
                    result.known.push(available.clone());
                }
            }
            None => {
                for file in local.all_files() {
                    debug!("No catalog mod has {} ({})", file.path(), file.digest());
                }
                result.unknown.push(local.clone());
            }
        }
    }

    debug!(
        "Reconciled {} installed mod(s): {} known, {} unknown",
        installed.len(),
        result.known.len(),
        result.unknown.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileHash;

    fn hash(digest: &str) -> FileHash {
        FileHash::new(format!("Plugins/{digest}.dll"), digest).unwrap()
    }

    fn local(name: &str, digest: &str) -> Mod {
        Mod::local(name, hash(digest))
    }

    fn catalog(name: &str, version: &str, groups: &[&[&str]]) -> Mod {
        let files = groups
            .iter()
            .map(|group| group.iter().map(|d| hash(d)).collect())
            .collect();
        Mod::new(name, Some(version.to_string()), None, files).unwrap()
    }

    #[test]
    fn test_matches_by_hash_and_returns_catalog_mod() {
        let installed = vec![local("SongCore", "h1")];
        let available = vec![catalog("SongCore", "2.9.0", &[&["h1"]])];

        let result = reconcile(&installed, &available);

        assert_eq!(result.known, available);
        assert!(result.unknown.is_empty());
        assert_eq!(result.known[0].version(), Some("2.9.0"));
    }

    #[test]
    fn test_unknown_preserves_input_order() {
        let installed = vec![
            local("Zeta", "z"),
            local("SongCore", "h1"),
            local("Alpha", "a"),
        ];
        let available = vec![catalog("SongCore", "2.9.0", &[&["h1"]])];

        let result = reconcile(&installed, &available);

        let names: Vec<_> = result.unknown.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_catalog_mod_claimed_twice_appears_once() {
        let installed = vec![local("Chroma", "dll"), local("Chroma", "manifest")];
        let available = vec![catalog("Chroma", "2.0.0", &[&["dll", "manifest"]])];

        let result = reconcile(&installed, &available);

        assert_eq!(result.known.len(), 1);
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn test_identical_catalog_entries_count_once() {
        let installed = vec![local("Chroma", "dll"), local("Helper", "lib")];
        let available = vec![
            catalog("Chroma", "2.0.0", &[&["dll", "lib"]]),
            catalog("Chroma", "2.0.0", &[&["dll", "lib"]]),
        ];

        let result = reconcile(&installed, &available);

        assert_eq!(result.known, vec![available[0].clone()]);
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn test_first_catalog_match_wins() {
        let installed = vec![local("Shared", "h1")];
        let available = vec![
            catalog("First", "1.0.0", &[&["h1"]]),
            catalog("Second", "1.0.0", &[&["h1"]]),
        ];

        let result = reconcile(&installed, &available);

        assert_eq!(result.known.len(), 1);
        assert_eq!(result.known[0].name(), "First");
    }

    #[test]
    fn test_match_in_later_file_group() {
        let installed = vec![local("Helper", "lib")];
        let available = vec![catalog("Chroma", "2.0.0", &[&["dll"], &["lib"]])];

        let result = reconcile(&installed, &available);

        assert_eq!(result.known[0].name(), "Chroma");
    }

    #[test]
    fn test_known_follows_first_claim_order() {
        let installed = vec![local("B", "b"), local("A", "a")];
        let available = vec![
            catalog("A", "1.0.0", &[&["a"]]),
            catalog("B", "1.0.0", &[&["b"]]),
        ];

        let result = reconcile(&installed, &available);

        let names: Vec<_> = result.known.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_empty_inputs() {
        let installed = vec![local("SongCore", "h1")];
        let available = vec![catalog("SongCore", "2.9.0", &[&["h1"]])];

        assert_eq!(reconcile(&[], &available), Reconciliation::default());

        let result = reconcile(&installed, &[]);
        assert!(result.known.is_empty());
        assert_eq!(result.unknown, installed);
    }

    #[test]
    fn test_empty_file_group_never_matches() {
        let installed = vec![local("SongCore", "h1")];
        let available = vec![catalog("SongCore", "2.9.0", &[&[]])];

        let result = reconcile(&installed, &available);

        assert!(result.known.is_empty());
        assert_eq!(result.unknown.len(), 1);
    }

    #[test]
    fn test_every_installed_mod_is_accounted_for() {
        let installed = vec![
            local("A", "a"),
            local("B", "b"),
            local("A2", "a"),
            local("C", "c"),
        ];
        let available = vec![
            catalog("A", "1.0.0", &[&["a"]]),
            catalog("B", "1.0.0", &[&["b"]]),
        ];

        let result = reconcile(&installed, &available);

        for mod_ in &installed {
            let matched = result.known.iter().any(|k| k.shares_file_with(mod_));
            let unknown = result.unknown.contains(mod_);
            assert!(matched ^ unknown, "{} must be in exactly one subset", mod_);
        }
    }

    #[test]
    fn test_idempotent() {
        let installed = vec![local("A", "a"), local("X", "x"), local("B", "b")];
        let available = vec![
            catalog("B", "1.0.0", &[&["b"]]),
            catalog("A", "1.0.0", &[&["a"]]),
        ];

        assert_eq!(
            reconcile(&installed, &available),
            reconcile(&installed, &available)
        );
    }
}
