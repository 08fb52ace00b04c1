mod alert;
mod error;
mod export;
mod models;
mod report;
mod run;
mod storage;
mod store;
mod ui;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use crate::storage::Storage;
use crate::store::BudgetStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let db_path = get_db_path()?;
    let storage = Storage::open(&db_path)
        .with_context(|| format!("Failed to open budget database at {}", db_path.display()))?;

    let mut store = match storage.load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: could not read saved budget ({e}); starting empty");
            BudgetStore::default()
        }
    };

    match args.len() {
        1 => run::as_tui(&mut store, &storage),
        _ => run::as_cli(&args, &mut store, &storage),
    }
}

fn get_db_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "hausbudget", "Hausbudget")
        .context("Could not determine a data directory")?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    Ok(data_dir.join("hausbudget.db"))
}
