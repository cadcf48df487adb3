//! Ballast CLI - offline schema tooling for the settings engine.

use ballast::cli::{Cli, Commands, SchemaCommands};
use ballast::schema::{self, graph::DependencyGraph};
use ballast::settings::Settings;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Commands) -> ballast::Result<()> {
    match command {
        Commands::Dump => {
            let settings = Settings::new();
            println!("{}", serde_json::to_string_pretty(&settings.snapshot())?);
        }
        Commands::Schema { command } => match command {
            SchemaCommands::Names => {
                for spec in schema::specs() {
                    println!("{}", spec.name);
                }
            }
            SchemaCommands::Order => {
                let graph = DependencyGraph::from_specs(&schema::specs())?;
                for name in graph.modification_order()? {
                    println!("{name}");
                }
            }
            SchemaCommands::Generate { out } => {
                let rendered = schema::render_generated_module()?;
                match out {
                    Some(path) => std::fs::write(path, rendered)?,
                    None => print!("{rendered}"),
                }
            }
        },
    }
    Ok(())
}
