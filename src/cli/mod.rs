//! CLI argument definitions for the ballast schema tool.
//!
//! The binary is offline tooling only: it inspects the declared schema,
//! emits the checked-in generated artifacts, and dumps the default
//! snapshot for debugging. It never talks to a server.

use clap::{Parser, Subcommand};

/// Ballast - settings resolution engine for the run-tracking client.
#[derive(Parser, Debug)]
#[command(name = "ballast")]
#[command(author, version, about = "Schema tooling for the Ballast settings engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved default snapshot as pretty JSON
    Dump,

    /// Schema inspection and artifact generation
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
}

/// Schema subcommands
#[derive(Subcommand, Debug)]
pub enum SchemaCommands {
    /// Print every declared setting name, one per line
    Names,

    /// Print the canonical modification order, one per line
    ///
    /// Every setting appears after the settings its derivers read.
    Order,

    /// Emit the generated Rust module (`schema/generated.rs` content)
    Generate {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}
