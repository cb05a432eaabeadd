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

//! `buri build`: resolve a target and print its build order

use super::CommandContext;
use anyhow::{Context, Result};
use buri_graph::{TargetFiles, topologically_sort_dep_graph};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt::Write;
use tracing::info;

/// Output format for build plans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Target label, e.g. //app:server
    pub target: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// One step of a build plan as written to JSON
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BuildStep {
    pub target: String,
    pub files: Vec<String>,
}

impl From<&TargetFiles> for BuildStep {
    fn from(entry: &TargetFiles) -> Self {
        Self {
            target: entry.target.to_string(),
            files: entry.files.clone(),
        }
    }
}

pub fn handle_build(ctx: &CommandContext, args: &BuildArgs) -> Result<()> {
    let target = ctx.parse_label(&args.target)?;
    info!("Resolving {} in workspace {}", target, ctx.workspace.name());

    let order = topologically_sort_dep_graph(target.clone(), &ctx.loader()).with_context(|| format!("Failed to resolve {}", target))?;
    info!("{} targets in build order", order.len());

    print!("{}", render_build_order(&order, args.format)?);
    Ok(())
}

/// Render a build order in the requested format
pub fn render_build_order(order: &[TargetFiles], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let width = order.len().to_string().len();
            for (index, entry) in order.iter().enumerate() {
                writeln!(out, "{:>width$}. {}", index + 1, entry.target, width = width)?;
                for file in &entry.files {
                    writeln!(out, "{:>width$}  {}", "", file, width = width)?;
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let steps: Vec<BuildStep> = order.iter().map(BuildStep::from).collect();
            let mut out = serde_json::to_string_pretty(&steps)?;
            out.push('\n');
            Ok(out)
        }
    }
}
