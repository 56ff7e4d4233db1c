// Scanner for mod files installed in a Beat Saber directory

use crate::constants::{BSIPA_INJECTOR, BSIPA_NAME, MOD_DIRECTORIES, MOD_EXTENSIONS};
use crate::install::hash::hash_file;
use crate::model::{FileHash, Mod};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the installed BSIPA injector, if any
pub fn find_bsipa(install_dir: &Path) -> anyhow::Result<Option<Mod>> {
    let injector = install_dir.join(BSIPA_INJECTOR);
    if !injector.is_file() {
        debug!("BSIPA injector not found at {}", injector.display());
        return Ok(None);
    }

    let digest = hash_file(&injector)?;
    let file = FileHash::new(injector.display().to_string(), digest)?;
    Ok(Some(Mod::local(BSIPA_NAME, file)))
}

/// Scan the mod directories for installed mod files.
///
/// Every dll or manifest file becomes its own mod named after the file stem,
/// so a mod shipping both files shows up twice. Subdirectories are skipped.
pub fn scan_installed_mods(install_dir: &Path) -> anyhow::Result<Vec<Mod>> {
    let mut installed = Vec::new();

    for subdir in MOD_DIRECTORIES {
        let dir = install_dir.join(subdir);
        if !dir.is_dir() {
            continue;
        }

        for path in mod_files(&dir)? {
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let digest = hash_file(&path)?;
            let file = FileHash::new(path.display().to_string(), digest)?;
            installed.push(Mod::local(stem, file));
        }
    }

    debug!(
        "Scanned {}: found {} mod file(s)",
        install_dir.display(),
        installed.len()
    );
    Ok(installed)
}

/// Mod files directly inside `dir`, sorted by file name
fn mod_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_mod_file = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| MOD_EXTENSIONS.contains(&ext));
        if path.is_file() && is_mod_file {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
