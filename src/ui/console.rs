// Console UI rendering the result as a text table

use crate::model::GameVersion;
use crate::rows::{Align, Column, Row};
use crate::ui::{TableUi, term};
use console::Term;
use std::path::PathBuf;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

const FOOTER: &str = "Mods without an upgrade may still have one outside BeatMods: \
check beatmods.com, the #pc-mods channel on the BSMG Discord, or the mod's GitHub page.";

pub struct ConsoleTableUi {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl ConsoleTableUi {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }
}

/// Render rows as an ASCII table with a header line
pub fn render_table(columns: &[Column], rows: &[Row]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|column| column.header().to_string()));
    for row in rows {
        builder.push_record(row.formatted(columns));
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    for (index, column) in columns.iter().enumerate() {
        let alignment = match column.align() {
            Align::Left => Alignment::left(),
            Align::Center => Alignment::center(),
        };
        table.modify(Columns::new(index..index + 1), alignment);
    }
    table.to_string()
}

impl TableUi for ConsoleTableUi {
    fn set_versions(&mut self, current: &GameVersion, target: &GameVersion) {
        term::action(&format!(
            "Evaluating upgrade from {} to {}...",
            current.alias(),
            target.alias()
        ));
    }

    fn add_rows(&mut self, rows: &[Row]) {
        self.rows.extend_from_slice(rows);
    }

    fn show(&mut self) -> anyhow::Result<()> {
        println!("{}", render_table(&self.columns, &self.rows));
        if self.rows.iter().any(|row| !row.upgradeable) {
            term::dim(FOOTER);
        }
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        term::error(message);
    }

    fn prompt_for_directory(&mut self, message: &str) -> Option<PathBuf> {
        if !term::is_interactive() {
            return None;
        }
        term::action(message);
        let line = Term::stderr().read_line().ok()?;
        let trimmed = line.trim().trim_matches('"');
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
