// Beat Saber version model as published by BeatMods

use crate::constants::VERSION_REGEX;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

lazy_static::lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(VERSION_REGEX).expect("version regex is valid");
}

/// Whether `value` starts with a Beat Saber version number
pub fn looks_like_version(value: &str) -> bool {
    VERSION_RE.find(value).is_some_and(|m| m.start() == 0)
}

/// Find the first Beat Saber version number in `text`
pub fn find_version(text: &str) -> Option<&str> {
    VERSION_RE.find(text).map(|m| m.as_str())
}

/// A Beat Saber release as BeatMods sees it.
///
/// `version` is the BeatMods version: the lowest game release of a group of
/// releases that share compatible mods. `alias` is the game release number
/// players see, and may equal `version`.
///
/// Equality requires both fields to match exactly. Release ordering is a
/// separate notion (see [`GameVersion::compare_release`]), which is why this
/// type implements neither `PartialOrd` nor `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameVersion {
    version: String,
    alias: String,
}

impl GameVersion {
    pub fn new(version: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            alias: alias.into(),
        }
    }

    /// The BeatMods version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The Beat Saber release number
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Order two releases: BeatMods version first, then alias.
    ///
    /// Segments are compared as strings. A longer segment is always the
    /// greater one (more digits); segments of the same length compare
    /// lexicographically. Only as many segments as the shorter side has are
    /// compared. Leading zeros are not normalised, so "09" ranks above "9".
    pub fn compare_release(&self, other: &GameVersion) -> Ordering {
        compare_segments(&self.version, &other.version)
            .then_with(|| compare_segments(&self.alias, &other.alias))
    }

    /// Whether this release is strictly newer than `other`
    pub fn is_newer_than(&self, other: &GameVersion) -> bool {
        self.compare_release(other) == Ordering::Greater
    }
}

fn compare_segments(a: &str, b: &str) -> Ordering {
    a.split('.')
        .zip(b.split('.'))
        .map(|(x, y)| x.len().cmp(&y.len()).then_with(|| x.cmp(y)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beat Saber v{} (BeatMods v{})", self.alias, self.version)
    }
}
