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

//! Build descriptor model

use crate::error::LoadError;
use serde::Deserialize;

/// Deserialized content of one `BUILD` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildDescriptor {
    /// Libraries in declaration order
    #[serde(default, rename = "library")]
    pub libraries: Vec<Library>,
}

/// One buildable unit declared in a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Library {
    /// Name matched against a target's name
    pub name: String,
    /// Source files owned by this library
    #[serde(default)]
    pub files: Vec<String>,
    /// Raw labels of the targets this library depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Library {
    /// Create a library without files or dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(dependencies.into_iter().map(Into::into));
        self
    }
}

impl BuildDescriptor {
    pub fn new(libraries: Vec<Library>) -> Self {
        Self { libraries }
    }

    /// Decode a TOML descriptor. `path` is only used in error reports.
    pub fn from_toml(path: &str, content: &str) -> Result<Self, LoadError> {
        toml::from_str(content).map_err(|e| LoadError::Malformed {
            path: path.to_string(),
            message: e.message().to_string(),
        })
    }

    /// First library declared with `name`
    pub fn library(&self, name: &str) -> Option<&Library> {
        self.libraries.iter().find(|library| library.name == name)
    }

    /// Take ownership of the first library declared with `name`
    pub fn into_library(self, name: &str) -> Option<Library> {
        self.libraries.into_iter().find(|library| library.name == name)
    }
}
