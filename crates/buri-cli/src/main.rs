// Buri
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use buri_cli::commands::build::{self, BuildArgs};
use buri_cli::commands::query::{self, QueryCommands};
use buri_cli::commands::{CommandContext, parse};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Buri build tool
#[derive(Parser, Debug)]
#[command(name = "buri", version, about = "Resolve and inspect Buri build targets")]
pub struct Cli {
    /// Workspace root (overrides $BURI_WORKSPACE and discovery)
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a target and print the order its units would be built in
    Build(BuildArgs),

    /// Inspect the dependency graph
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },

    /// Parse a label and print its fields
    Parse {
        /// Label to parse
        label: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse { label } => parse::handle_parse(&label),
        Commands::Build(args) => {
            let ctx = context(cli.workspace)?;
            build::handle_build(&ctx, &args)
        }
        Commands::Query { command } => {
            let ctx = context(cli.workspace)?;
            query::handle_query_command(&ctx, &command)
        }
    }
}

fn context(workspace: Option<PathBuf>) -> Result<CommandContext> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    CommandContext::new(workspace, cwd)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
