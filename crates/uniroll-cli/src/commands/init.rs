//! The `uniroll init` command.

use std::path::Path;

use anyhow::{Context, Result};

use uniroll_core::config::LOCAL_CONFIG_FILE;
use uniroll_core::store::{StudentStore, DEFAULT_DATA_FILE};

pub fn execute() -> Result<()> {
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG_FILE, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {LOCAL_CONFIG_FILE}"))?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    if Path::new(DEFAULT_DATA_FILE).exists() {
        println!("{DEFAULT_DATA_FILE} already exists, skipping.");
    } else {
        StudentStore::open(DEFAULT_DATA_FILE)?;
        println!("Created {DEFAULT_DATA_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_CONFIG_FILE} to move the data file if needed");
    println!("  2. Run: uniroll run");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# uniroll configuration

# JSON file holding all student records. ${VAR} references are expanded.
data_file = "students.data"
"#;
