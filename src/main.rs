mod cli;
mod commands;
mod config;
mod constants;
mod diff;
mod install;
mod model;
mod reconcile;
mod rows;
mod sources;
mod ui;

use clap::Parser;
use cli::Cli;
use commands::check::{CheckOptions, check};
use config::Preferences;
use sources::BeatModsCatalog;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            ui::term::error(&format!("{:#}", e));
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut prefs = Preferences::load()?;
    let remembered = prefs.clone();

    let mut table_ui = cli.ui.build(rows::columns(cli.show_versions));
    let options = CheckOptions {
        target: cli.target,
        install_path: cli.install_path,
        no_upgrade_only: cli.no_upgrade_only,
    };

    let result = check(options, &mut prefs, &BeatModsCatalog, table_ui.as_mut()).await;

    // Remember the install directory even when the check itself fails later on
    if prefs != remembered {
        prefs.save()?;
    }

    result
}
