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

pub mod build;
pub mod parse;
pub mod query;

use crate::config::Workspace;
use anyhow::{Context, Result};
use buri_graph::{DirectorySource, SourceDescriptorLoader};
use buri_target::{Target, parse_target};
use std::path::PathBuf;
use tracing::debug;

/// State shared by commands that operate on a workspace
pub struct CommandContext {
    pub workspace: Workspace,
    /// Directory the command was invoked from
    pub cwd: PathBuf,
}

impl CommandContext {
    pub fn new(cli_workspace: Option<PathBuf>, cwd: PathBuf) -> Result<Self> {
        let workspace = Workspace::resolve(cli_workspace, &cwd)?;
        Ok(Self { workspace, cwd })
    }

    /// Loader reading `BUILD` files from the workspace directory
    pub fn loader(&self) -> SourceDescriptorLoader<DirectorySource> {
        SourceDescriptorLoader::new(DirectorySource::new(&self.workspace.root))
    }

    /// Parse a user-supplied label. Relative labels are anchored at the
    /// package of the invocation directory.
    pub fn parse_label(&self, label: &str) -> Result<Target> {
        let target = parse_target(label).with_context(|| format!("Invalid target `{}`", label))?;
        let package = self.workspace.package_of(&self.cwd);
        let target = target.rebase(&package);
        debug!("Resolved label `{}` to {}", label, target);
        Ok(target)
    }
}
