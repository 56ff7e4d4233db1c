// JSON UI printing the result as a single document on stdout

use crate::model::GameVersion;
use crate::rows::{Align, Column, Row};
use crate::ui::{TableUi, term};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ColumnInfo {
    key: &'static str,
    header: &'static str,
    align: Align,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    current: Option<&'a GameVersion>,
    target: Option<&'a GameVersion>,
    columns: Vec<ColumnInfo>,
    rows: Vec<Map<String, Value>>,
}

pub struct JsonTableUi {
    columns: Vec<Column>,
    rows: Vec<Row>,
    versions: Option<(GameVersion, GameVersion)>,
}

impl JsonTableUi {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            versions: None,
        }
    }

    /// Render the collected table as pretty JSON.
    /// Cells are formatted exactly as the console shows them.
    pub fn render(&self) -> anyhow::Result<String> {
        let report = Report {
            current: self.versions.as_ref().map(|(current, _)| current),
            target: self.versions.as_ref().map(|(_, target)| target),
            columns: self
                .columns
                .iter()
                .map(|column| ColumnInfo {
                    key: column.key(),
                    header: column.header(),
                    align: column.align(),
                })
                .collect(),
            rows: self
                .rows
                .iter()
                .map(|row| {
                    self.columns
                        .iter()
                        .map(|column| {
                            (
                                column.key().to_string(),
                                Value::String(row.cell(*column).format()),
                            )
                        })
                        .collect()
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl TableUi for JsonTableUi {
    fn set_versions(&mut self, current: &GameVersion, target: &GameVersion) {
        self.versions = Some((current.clone(), target.clone()));
    }

    fn add_rows(&mut self, rows: &[Row]) {
        self.rows.extend_from_slice(rows);
    }

    fn show(&mut self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        term::error(message);
    }

    fn prompt_for_directory(&mut self, _message: &str) -> Option<PathBuf> {
        None
    }
}
