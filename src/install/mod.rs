// Install module for inspecting a local Beat Saber installation

pub mod game_version;
pub mod hash;
pub mod scanner;

pub use game_version::detect_version_alias;
pub use scanner::{find_bsipa, scan_installed_mods};
