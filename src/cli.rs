// CLI module for handling command-line interface

use crate::model::game_version::looks_like_version;
use crate::ui::UiStyle;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
If a mod you want to keep doesn't have an upgrade available, some things to try:

* Check beatmods.com: the source of truth for Mod Assistant. It can help you find new mods that replace the functionality you're after.
* Check the #pc-mods channel on the BSMG Discord: a good source for mods that are new or not yet in Mod Assistant.
* Check the mod's GitHub page: it may mention upcoming releases or have a beta build. At a minimum you can tell whether the mod is still being developed.";

#[derive(Parser, Debug)]
#[command(name = "bsupgrade", version)]
#[command(
    about = "Tells you which of your installed Beat Saber mods have a known upgrade on BeatMods for your target version",
    long_about = "Helps you decide whether it's safe to upgrade your PC installation of Beat Saber by telling you \
which of your installed mods have a known upgrade available in your target version. It can't tell you anything \
about mods that aren't on BeatMods, nor whether a mod's functionality has been replaced by a new mod or the base game."
)]
#[command(after_long_help = AFTER_HELP)]
pub struct Cli {
    /// The version to upgrade to. Defaults to the latest Beat Saber version on BeatMods
    #[arg(short, long, value_parser = parse_version)]
    pub target: Option<String>,

    /// The Beat Saber install directory. Defaults to the one used in the previous run; required on the first run
    #[arg(short = 'p', long)]
    pub install_path: Option<PathBuf>,

    /// Hide mods that have an upgrade available
    #[arg(short, long)]
    pub no_upgrade_only: bool,

    /// Show the installed and target version of each mod
    #[arg(short = 'v', long)]
    pub show_versions: bool,

    /// How to show the result
    #[arg(long, value_enum, default_value_t = UiStyle::Console)]
    pub ui: UiStyle,
}

fn parse_version(value: &str) -> Result<String, String> {
    if looks_like_version(value) {
        Ok(value.to_string())
    } else {
        Err(format!("{} is not a valid Beat Saber version", value))
    }
}
