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

//! Filesystem content source rooted at a workspace directory

use super::{ContentSource, normalize_path};
use crate::error::LoadError;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads descriptors from disk below `root`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirectorySource {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, LoadError> {
        let full_path = self.root.join(normalize_path(path));
        debug!("Reading build file {}", full_path.display());

        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Build file {} not found", full_path.display());
                Ok(None)
            }
            Err(e) => Err(LoadError::Io {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
