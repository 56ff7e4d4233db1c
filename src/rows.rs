// Table rows built from the upgrade diff and the unknown mods

use crate::constants::NO_VALUE;
use crate::diff::ModUpgrade;
use crate::model::{Mod, display_order};
use serde::Serialize;
use std::collections::BTreeSet;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

/// Columns of the result table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    FromBeatMods,
    Upgradeable,
    OldVersion,
    NewVersion,
    Link,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::FromBeatMods,
        Column::Upgradeable,
        Column::OldVersion,
        Column::NewVersion,
        Column::Link,
    ];

    /// Machine-readable column name
    pub fn key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::FromBeatMods => "from_beatmods",
            Column::Upgradeable => "upgradeable",
            Column::OldVersion => "old_version",
            Column::NewVersion => "new_version",
            Column::Link => "link",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::FromBeatMods => "From BeatMods",
            Column::Upgradeable => "Upgradeable",
            Column::OldVersion => "Old Version",
            Column::NewVersion => "New Version",
            Column::Link => "Link",
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Column::Name => Align::Center,
            _ => Align::Left,
        }
    }
}

/// Columns to show. Version columns are hidden unless asked for.
pub fn columns(show_versions: bool) -> Vec<Column> {
    if show_versions {
        Column::ALL.to_vec()
    } else {
        vec![
            Column::Name,
            Column::FromBeatMods,
            Column::Upgradeable,
            Column::Link,
        ]
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Name(String),
    Flag(bool),
    Text(Option<String>),
}

impl Cell {
    /// Render the cell as text. Absent text renders as [`NO_VALUE`].
    pub fn format(&self) -> String {
        match self {
            Cell::Name(name) => name.clone(),
            Cell::Flag(true) => "Yes".to_string(),
            Cell::Flag(false) => "No".to_string(),
            Cell::Text(Some(text)) => text.clone(),
            Cell::Text(None) => NO_VALUE.to_string(),
        }
    }
}

/// One mod in the result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub on_catalog: bool,
    pub upgradeable: bool,
    pub old_version: Option<String>,
    pub new_version: Option<String>,
    pub link: Option<String>,
}

impl Row {
    /// A row for an installed mod BeatMods doesn't know
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_catalog: false,
            upgradeable: false,
            old_version: None,
            new_version: None,
            link: None,
        }
    }

    pub fn cell(&self, column: Column) -> Cell {
        match column {
            Column::Name => Cell::Name(self.name.clone()),
            Column::FromBeatMods => Cell::Flag(self.on_catalog),
            Column::Upgradeable => Cell::Flag(self.upgradeable),
            Column::OldVersion => Cell::Text(self.old_version.clone()),
            Column::NewVersion => Cell::Text(self.new_version.clone()),
            Column::Link => Cell::Text(self.link.clone()),
        }
    }

    /// Formatted cells for the given columns
    pub fn formatted(&self, columns: &[Column]) -> Vec<String> {
        columns
            .iter()
            .map(|column| self.cell(*column).format())
            .collect()
    }
}

impl From<&ModUpgrade> for Row {
    fn from(pair: &ModUpgrade) -> Self {
        let new_version = pair.new.as_ref().and_then(Mod::version).map(str::to_string);
        Self {
            name: pair.old.name().to_string(),
            on_catalog: pair.old.version().is_some(),
            upgradeable: new_version.is_some(),
            old_version: pair.old.version().map(str::to_string),
            new_version,
            link: pair.old.link().map(str::to_string),
        }
    }
}

/// Rows for the upgrade diff, in display order.
///
/// With `include_upgradeable` unset only mods without an upgrade are kept.
pub fn diff_rows(diff: &[ModUpgrade], include_upgradeable: bool) -> Vec<Row> {
    let mut pairs: Vec<&ModUpgrade> = diff
        .iter()
        .filter(|pair| include_upgradeable || !pair.is_upgradeable())
        .collect();
    pairs.sort_by(|a, b| display_order::compare(a.old.name(), b.old.name()));
    pairs.into_iter().map(Row::from).collect()
}

/// Rows for mods missing from BeatMods, one per distinct name.
///
/// A scan yields one mod per file, so a mod shipping a dll and a manifest
/// shows up twice under the same name.
pub fn unknown_rows(mods: &[Mod]) -> Vec<Row> {
    let mut names: Vec<&str> = mods
        .iter()
        .map(Mod::name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    names.sort_by(|a, b| display_order::compare(a, b));
    names.into_iter().map(Row::unknown).collect()
}
