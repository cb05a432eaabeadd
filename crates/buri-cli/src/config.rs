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

//! Workspace discovery and `WORKSPACE.toml` configuration

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File marking the root of a workspace
pub const WORKSPACE_FILE_NAME: &str = "WORKSPACE.toml";

/// Environment variable overriding workspace discovery
pub const WORKSPACE_ENV_VAR: &str = "BURI_WORKSPACE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorkspaceConfig {
    /// Display name of the workspace
    #[serde(default)]
    pub name: Option<String>,
}

impl WorkspaceConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content).with_context(|| format!("Invalid workspace file {}", path.display()))?;
        Ok(config)
    }
}

/// A located workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: WorkspaceConfig,
}

impl Workspace {
    /// Open the workspace whose `WORKSPACE.toml` lives in `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let workspace_file = root.join(WORKSPACE_FILE_NAME);
        if !workspace_file.is_file() {
            return Err(anyhow!("{} is not a workspace: missing {}", root.display(), WORKSPACE_FILE_NAME));
        }

        let config = WorkspaceConfig::load_from_file(&workspace_file)?;
        debug!("Opened workspace {:?} at {}", config.name, root.display());
        Ok(Self { root, config })
    }

    /// Walk up from `start` to the nearest directory holding `WORKSPACE.toml`
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            if dir.join(WORKSPACE_FILE_NAME).is_file() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "You must be in a workspace to use Buri: no {} found in {} or any parent directory",
            WORKSPACE_FILE_NAME,
            start.display()
        ))
    }

    /// Pick the workspace: CLI flag, then `$BURI_WORKSPACE`, then discovery from `cwd`
    pub fn resolve(cli_workspace: Option<PathBuf>, cwd: &Path) -> Result<Self> {
        if let Some(root) = cli_workspace {
            return Self::open(root);
        }
        if let Ok(root) = std::env::var(WORKSPACE_ENV_VAR) {
            debug!("Using workspace from ${}", WORKSPACE_ENV_VAR);
            return Self::open(root);
        }
        Self::discover(cwd)
    }

    /// Package directories of `dir` relative to the workspace root.
    ///
    /// Directories outside the workspace have no package and yield an empty
    /// list, so relative labels typed there resolve from the root.
    pub fn package_of(&self, dir: &Path) -> Vec<String> {
        let Ok(relative) = dir.strip_prefix(&self.root) else {
            return Vec::new();
        };

        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    /// Display name, falling back to the root directory name
    pub fn name(&self) -> String {
        self.config
            .name
            .clone()
            .or_else(|| self.root.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "workspace".to_string())
    }
}
