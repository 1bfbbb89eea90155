//! The `uniroll run` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use uniroll_core::controller::{Menu, UniversityController};
use uniroll_core::store::StudentStore;

use crate::console::ConsoleView;

pub fn execute(data_file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = super::resolve_data_file(data_file, config_path)?;
    let mut store = StudentStore::open(&path)
        .with_context(|| format!("failed to open student store: {}", path.display()))?;
    tracing::info!(
        "opened {} with {} student(s)",
        store.path().display(),
        store.len()
    );

    let stdin = io::stdin();
    let mut view = ConsoleView::new(stdin.lock(), io::stdout());
    let mut rng = rand::rng();

    UniversityController::new(&mut store, &mut view, &mut rng).run();

    Ok(())
}
