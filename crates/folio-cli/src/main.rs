//! Folio CLI - Command-line interface for identifier minting and manifest inspection.

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

use commands::{inspect, mint, skolem};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio identifier minting and manifest inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Resource kinds the mint command can produce identifiers for.
#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Canvas identifiers
    Canvas,
    /// Annotation identifiers
    Annotation,
    /// Annotation page identifiers (requires --canvas)
    AnnoPage,
    /// Range identifiers
    Range,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint identifiers for a document
    Mint {
        /// Document base identifier (not needed with --manifest)
        base: Option<String>,
        /// Resource kind to mint
        #[arg(long, value_enum, default_value = "canvas")]
        kind: Kind,
        /// Number of identifiers to mint
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Manifest JSON file to seed the minter against
        #[arg(long)]
        manifest: Option<String>,
        /// Canvas identifier to scope annotation page IDs under
        #[arg(long)]
        canvas: Option<String>,
    },
    /// Mint Skolem IRIs for blank-node resources
    Skolem {
        /// Well-known base for addressable IRIs
        #[arg(long)]
        base: Option<String>,
        /// Number of IRIs to mint
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Report minter capacity usage for a manifest file
    Inspect {
        /// Path to manifest JSON file
        manifest: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mint {
            base,
            kind,
            count,
            manifest,
            canvas,
        } => mint::run(base, kind, count, manifest, canvas),
        Commands::Skolem { base, count } => skolem::run(base, count),
        Commands::Inspect { manifest, json } => inspect::run(manifest, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
