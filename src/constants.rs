// Constants module for shared string constants

/// BeatMods REST API root
pub const BEAT_MODS_API: &str = "https://beatmods.com/api/v1/";
/// BeatMods version alias document
pub const BEAT_MODS_ALIASES: &str = "https://alias.beatmods.com/aliases.json";

pub const PREFERENCES_FILE: &str = "bsupgrade.toml";

/// Name of the bootstrap loader mod every other mod depends on
pub const BSIPA_NAME: &str = "BSIPA";

/// BSIPA injector, relative to the install directory
pub const BSIPA_INJECTOR: &str = "Beat Saber_Data/Managed/IPA.Injector.dll";

/// Directories scanned for installed mods, relative to the install directory
pub const MOD_DIRECTORIES: &[&str] = &[
    "IPA/Pending/Plugins",
    "IPA/Pending/Libs",
    "Plugins",
    "Libs",
];

/// File extensions of installed mod files
pub const MOD_EXTENSIONS: &[&str] = &["dll", "manifest"];

/// Unity data file holding the game version
pub const GLOBAL_GAME_MANAGERS: &str = "Beat Saber_Data/globalgamemanagers";

/// Marker preceding the version string in globalgamemanagers
pub const VERSION_MARKER: &str = "public.app-category.games";
/// Offset from the marker start to the version block
pub const VERSION_OFFSET: usize = 136;
/// Length of the block holding the version string
pub const VERSION_BLOCK_LEN: usize = 32;

/// Beat Saber version numbers. The build part may carry letters, e.g. 1.1.0p1
pub const VERSION_REGEX: &str = r"\d+\.\d+\.[a-zA-Z0-9]+";

/// Placeholder shown for absent values
pub const NO_VALUE: &str = "-";
