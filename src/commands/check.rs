// Check command: can the installed mods survive an upgrade?

use crate::config::Preferences;
use crate::diff::upgrade_diff;
use crate::install::{detect_version_alias, find_bsipa, scan_installed_mods};
use crate::model::GameVersion;
use crate::reconcile::{Reconciliation, reconcile};
use crate::rows::{diff_rows, unknown_rows};
use crate::sources::ModCatalog;
use crate::ui::{TableUi, term};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Options for a check run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Target game version; the latest on BeatMods when unset
    pub target: Option<String>,
    /// Install directory; the remembered one when unset
    pub install_path: Option<PathBuf>,
    /// Hide mods that have an upgrade available
    pub no_upgrade_only: bool,
}

/// Run the upgrade check and render the result.
///
/// Returns the exit code: 0 when the table was shown, 1 when a precondition
/// failed and the user was alerted. The validated install directory is
/// stored in `prefs`; persisting it is up to the caller.
pub async fn check(
    options: CheckOptions,
    prefs: &mut Preferences,
    catalog: &dyn ModCatalog,
    ui: &mut dyn TableUi,
) -> anyhow::Result<i32> {
    let Some(install_dir) = options
        .install_path
        .clone()
        .or_else(|| prefs.install_dir.clone())
        .or_else(|| ui.prompt_for_directory("Where is Beat Saber installed?"))
    else {
        ui.alert("No Beat Saber install directory given. Pass --install-path on the first run.");
        return Ok(1);
    };

    let Some(current) = installed_version(&install_dir, catalog).await? else {
        ui.alert(&format!(
            "{} is not a valid Beat Saber install directory, or your installed version is not available on BeatMods.",
            install_dir.display()
        ));
        return Ok(1);
    };
    info!("Installed: {}", current);
    prefs.install_dir = Some(install_dir.clone());

    let target = match options.target.as_deref() {
        Some(alias) => match catalog.resolve_alias(alias).await? {
            Some(target) => target,
            None => {
                ui.alert(&format!(
                    "{} is not a valid Beat Saber version or alias, or is not available on BeatMods.",
                    alias
                ));
                return Ok(1);
            }
        },
        None => catalog.latest_version().await?,
    };
    info!("Target: {}", target);

    if !target.is_newer_than(&current) {
        ui.alert(&format!(
            "Target version ({}) must be newer than current version ({}).",
            target.alias(),
            current.alias()
        ));
        return Ok(1);
    }

    ui.set_versions(&current, &target);

    let pb = term::spinner("Fetching mods from BeatMods...");
    let fetched = tokio::try_join!(
        catalog.mods_for_version(&current),
        catalog.mods_for_version(&target)
    );
    let (current_mods, target_mods) = match fetched {
        Ok(mods) => mods,
        Err(e) => {
            term::finish_spinner_error(&pb, "Failed to fetch mods from BeatMods");
            return Err(e);
        }
    };
    term::finish_spinner_success(
        &pb,
        &format!(
            "Fetched {} mod(s) for {} and {} for {}",
            current_mods.len(),
            current.alias(),
            target_mods.len(),
            target.alias()
        ),
    );

    // Without a recognised BSIPA this isn't a modded install
    let bsipa_on_catalog = match find_bsipa(&install_dir)? {
        Some(bsipa) => !reconcile(&[bsipa], &current_mods).known.is_empty(),
        None => false,
    };
    if !bsipa_on_catalog {
        ui.alert("BSIPA is not installed.");
        return Ok(1);
    }

    let installed = scan_installed_mods(&install_dir)?;
    let Reconciliation { known, unknown } = reconcile(&installed, &current_mods);
    let diff = upgrade_diff(&known, &target_mods);
    debug!(
        "{} mod file(s) installed, {} on BeatMods, {} not",
        installed.len(),
        known.len(),
        unknown.len()
    );

    ui.add_rows(&diff_rows(&diff, !options.no_upgrade_only));
    ui.add_rows(&unknown_rows(&unknown));
    ui.show()?;

    Ok(0)
}

/// Detect the installed game version and resolve it on the catalog
async fn installed_version(
    install_dir: &Path,
    catalog: &dyn ModCatalog,
) -> anyhow::Result<Option<GameVersion>> {
    if !install_dir.is_dir() {
        return Ok(None);
    }
    match detect_version_alias(install_dir)? {
        Some(alias) => catalog.resolve_alias(&alias).await,
        None => Ok(None),
    }
}
