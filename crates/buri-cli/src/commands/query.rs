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

//! `buri query`: inspect the dependency graph without building

use super::CommandContext;
use anyhow::{Context, Result};
use buri_graph::{DepGraph, DepGraphNode, resolve};
use clap::Subcommand;
use std::collections::HashSet;
use std::fmt::Write;
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Print the dependency tree of a target
    Deps {
        /// Target label
        target: String,
    },
}

pub fn handle_query_command(ctx: &CommandContext, command: &QueryCommands) -> Result<()> {
    match command {
        QueryCommands::Deps { target } => {
            let target = ctx.parse_label(target)?;
            let graph = resolve(target.clone(), &ctx.loader()).with_context(|| format!("Failed to resolve {}", target))?;
            print!("{}", render_dependency_tree(&graph)?);
            Ok(())
        }
    }
}

/// Render the graph as an indented tree. Shared nodes are expanded once and
/// marked with `(*)` where they appear again.
pub fn render_dependency_tree(graph: &DepGraph) -> Result<String> {
    let mut out = String::new();
    let mut shown = HashSet::new();
    render_node(&graph.root, "", "", &mut shown, &mut out)?;
    Ok(out)
}

fn render_node(node: &Arc<DepGraphNode>, prefix: &str, child_prefix: &str, shown: &mut HashSet<*const DepGraphNode>, out: &mut String) -> Result<()> {
    let first_visit = shown.insert(Arc::as_ptr(node));
    if !first_visit && !node.deps.is_empty() {
        writeln!(out, "{}{} (*)", prefix, node.target)?;
        return Ok(());
    }
    writeln!(out, "{}{}", prefix, node.target)?;

    let count = node.deps.len();
    for (index, dep) in node.deps.iter().enumerate() {
        let last = index + 1 == count;
        let (branch, continuation) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        render_node(dep, &format!("{}{}", child_prefix, branch), &format!("{}{}", child_prefix, continuation), shown, out)?;
    }
    Ok(())
}
