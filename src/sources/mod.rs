// Sources module for mod catalog implementations

pub mod beatmods;
pub mod catalog;
pub mod http;

pub use beatmods::BeatModsCatalog;
pub use catalog::ModCatalog;
