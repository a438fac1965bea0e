//! Velum CLI — run, inspect, and validate cloth simulations.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velum")]
#[command(version, about = "Velum — XPBD cloth simulation core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a hanging-cloth scenario and export a JSON animation.
    Simulate {
        /// Path to a scenario config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Output JSON animation file path.
        #[arg(short, long, default_value = "animation.json")]
        output: String,
    },

    /// Print mesh and constraint topology statistics for a quad grid.
    Info {
        /// Quads along X.
        #[arg(long, default_value_t = 10)]
        cols: usize,

        /// Quads along Y.
        #[arg(long, default_value_t = 10)]
        rows: usize,
    },

    /// Validate a scenario config (TOML) or mesh (JSON).
    Validate {
        /// Path to config or mesh file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config, output } => commands::simulate(config.as_deref(), &output),
        Commands::Info { cols, rows } => commands::info(cols, rows),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
