// Model module for mods, file hashes and game versions

pub mod display_order;
pub mod error;
pub mod fingerprint;
pub mod game_version;
pub mod mod_entity;

pub use error::ModelError;
pub use fingerprint::FileHash;
pub use game_version::GameVersion;
pub use mod_entity::Mod;
