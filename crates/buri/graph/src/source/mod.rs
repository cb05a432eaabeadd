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

//! Descriptor content sources
//!
//! A [`ContentSource`] answers "what bytes live at this workspace path".
//! [`SourceDescriptorLoader`] builds on it to implement
//! [`DescriptorLoader`]: it computes the descriptor location of a target,
//! reads it and decodes the TOML content.

pub mod directory;
pub mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;

use crate::descriptor::BuildDescriptor;
use crate::error::LoadError;
use crate::loader::DescriptorLoader;
use buri_target::Target;

/// Path -> bytes lookup relative to the workspace root
pub trait ContentSource {
    /// Read the content at `path`, `Ok(None)` when nothing is stored there
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, LoadError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn read(&self, path: &str) -> Result<Option<Vec<u8>>, LoadError> {
        (**self).read(path)
    }
}

/// Descriptor locations are workspace-relative; a target without directories
/// maps to `/BUILD`, which is the descriptor at the workspace root.
pub(crate) fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Loads TOML descriptors from a [`ContentSource`]
#[derive(Debug, Clone)]
pub struct SourceDescriptorLoader<S> {
    source: S,
}

impl<S: ContentSource> SourceDescriptorLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: ContentSource> DescriptorLoader for SourceDescriptorLoader<S> {
    fn load(&self, target: &Target) -> Result<BuildDescriptor, LoadError> {
        let path = target.build_file_location();
        let bytes = self.source.read(&path)?.ok_or_else(|| LoadError::NotFound { path: path.clone() })?;
        let content = String::from_utf8(bytes).map_err(|e| LoadError::Malformed {
            path: path.clone(),
            message: format!("not valid UTF-8: {}", e),
        })?;

        BuildDescriptor::from_toml(&path, &content)
    }
}
