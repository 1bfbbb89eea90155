//! uniroll CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "uniroll", version, about = "University enrolment manager")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive university menu
    Run {
        /// Student data file (overrides config)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print every student record
    Show {
        /// Student data file (overrides config)
        #[arg(long)]
        data_file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Create a starter config and an empty data file
    Init,
}

fn main() {
    // Logs go to stderr so they never interleave with menu prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("uniroll_core=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { data_file, config } => commands::run::execute(data_file, config),
        Commands::Show {
            data_file,
            config,
            format,
        } => commands::show::execute(data_file, config, format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
