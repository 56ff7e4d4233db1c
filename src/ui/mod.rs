// UI module: the table capability shared by all renderers

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod console;
pub mod json;
pub mod term;

use crate::model::GameVersion;
use crate::rows::{Column, Row};
use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

pub use console::ConsoleTableUi;
pub use json::JsonTableUi;

/// A place to show the result table and talk to the user
pub trait TableUi {
    /// Record the installed and target game versions
    fn set_versions(&mut self, current: &GameVersion, target: &GameVersion);

    /// Append rows to the table. Rows must carry every column the UI was built with.
    fn add_rows(&mut self, rows: &[Row]);

    /// Render the table
    fn show(&mut self) -> anyhow::Result<()>;

    /// Show a message to the user
    fn alert(&mut self, message: &str);

    /// Ask the user for a directory, if the UI can
    fn prompt_for_directory(&mut self, message: &str) -> Option<PathBuf>;
}

/// Available renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UiStyle {
    #[default]
    Console,
    Json,
}

impl UiStyle {
    /// Build the UI for this style showing the given columns
    pub fn build(self, columns: Vec<Column>) -> Box<dyn TableUi> {
        match self {
            UiStyle::Console => Box::new(ConsoleTableUi::new(columns)),
            UiStyle::Json => Box::new(JsonTableUi::new(columns)),
        }
    }
}

impl fmt::Display for UiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiStyle::Console => write!(f, "console"),
            UiStyle::Json => write!(f, "json"),
        }
    }
}
