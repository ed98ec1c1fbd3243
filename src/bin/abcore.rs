//! CLI entry point for the `abcore` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use abcore::cli::{commands, ConfigOverrides, IndexKind};
use abcore::engine::CoreQuery;
use abcore::types::Timestamp;

#[derive(Parser)]
#[command(
    name = "abcore",
    about = "Temporal (alpha, beta)-core queries over bipartite edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the bounds derived from the edge list.
#[derive(Args)]
struct BoundArgs {
    /// Largest alpha to index (default: largest upper-layer degree)
    #[arg(long)]
    max_alpha: Option<u32>,
    /// Largest beta to index (default: largest lower-layer degree)
    #[arg(long)]
    max_beta: Option<u32>,
    /// Largest timestamp to reach (default: largest timestamp in the file)
    #[arg(long)]
    tmax: Option<Timestamp>,
}

impl BoundArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            max_alpha: self.max_alpha,
            max_beta: self.max_beta,
            tmax: self.tmax,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about an edge list
    Info {
        /// Path to the edge list ("upper lower time" per line)
        file: PathBuf,
    },
    /// Find the vertices of an (alpha, beta)-core within a time window
    Query {
        /// Path to the edge list
        file: PathBuf,
        /// Upper-layer degree threshold
        #[arg(long)]
        alpha: u32,
        /// Lower-layer degree threshold
        #[arg(long)]
        beta: u32,
        /// Window start
        #[arg(long)]
        ts: Timestamp,
        /// Window end
        #[arg(long)]
        te: Timestamp,
        /// Index to answer with: superior, pair, vertex
        #[arg(long, default_value = "superior")]
        index: String,
        #[command(flatten)]
        bounds: BoundArgs,
    },
    /// Build every index and compare their sizes
    Stats {
        /// Path to the edge list
        file: PathBuf,
        #[command(flatten)]
        bounds: BoundArgs,
    },
    /// List the superior-index hubs and their links
    Hubs {
        /// Path to the edge list
        file: PathBuf,
        #[command(flatten)]
        bounds: BoundArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Query {
            file,
            alpha,
            beta,
            ts,
            te,
            index,
            bounds,
        } => {
            let kind = match IndexKind::from_name(&index) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid index kind: {}", index);
                    process::exit(3);
                }
            };
            let query = match CoreQuery::new(alpha, beta, ts, te) {
                Ok(query) => query,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(3);
                }
            };
            commands::cmd_query(&file, &bounds.overrides(), query, kind, json)
        }
        Commands::Stats { file, bounds } => commands::cmd_stats(&file, &bounds.overrides(), json),
        Commands::Hubs { file, bounds } => commands::cmd_hubs(&file, &bounds.overrides(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            abcore::AbcError::Io(_) => 1,
            abcore::AbcError::InvalidWindow { .. } | abcore::AbcError::InvalidThreshold { .. } => 3,
        };
        process::exit(code);
    }
}
