//! The `uniroll show` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use uniroll_core::store::StudentStore;

use crate::console::students_table;

pub fn execute(
    data_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let path = super::resolve_data_file(data_file, config_path)?;
    // Read-only: a missing data file is shown as an empty store, not created.
    let students = if path.exists() {
        StudentStore::open(&path)
            .with_context(|| format!("failed to open student store: {}", path.display()))?
            .load_all_students()
    } else {
        tracing::debug!("no data file at {}", path.display());
        Vec::new()
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&students)?);
        }
        "table" => {
            if students.is_empty() {
                println!("No students found");
            } else {
                println!("{}", students_table(&students));
                println!("{} student(s)", students.len());
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
