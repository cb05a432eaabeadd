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

//! Error types for descriptor loading and graph resolution

use buri_target::{Target, TargetParseError};
use thiserror::Error;

/// Result type for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Failure to produce a descriptor for a target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("build file `{path}` does not exist")]
    NotFound { path: String },

    #[error("cannot read build file `{path}`: {message}")]
    Io { path: String, message: String },

    #[error("malformed build file `{path}`: {message}")]
    Malformed { path: String, message: String },
}

impl LoadError {
    /// Descriptor location the error refers to
    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path } | LoadError::Io { path, .. } | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// Failure to resolve a dependency graph. Every variant aborts resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("building recursive target `{0}` is not supported yet")]
    Unsupported(Target),

    #[error("cannot load build file for target `{target}`")]
    Load {
        target: Target,
        #[source]
        source: LoadError,
    },

    #[error("library `{}` not found in build file `{descriptor}`", .target.name())]
    LibraryNotFound { target: Target, descriptor: String },

    #[error("library `{}` required by `{dependent}` not found in build file `{descriptor}`", .target.name())]
    DependencyNotFound { target: Target, dependent: Target, descriptor: String },

    #[error("invalid dependency `{label}` declared by `{target}`")]
    InvalidDependency {
        target: Target,
        label: String,
        #[source]
        source: TargetParseError,
    },

    #[error("circular dependency detected at `{target}`: {}", format_cycle(.path))]
    Cycle { target: Target, path: Vec<Target> },
}

impl ResolveError {
    /// Target at which resolution failed
    pub fn target(&self) -> &Target {
        match self {
            ResolveError::Unsupported(target) => target,
            ResolveError::Load { target, .. }
            | ResolveError::LibraryNotFound { target, .. }
            | ResolveError::DependencyNotFound { target, .. }
            | ResolveError::InvalidDependency { target, .. }
            | ResolveError::Cycle { target, .. } => target,
        }
    }
}

fn format_cycle(path: &[Target]) -> String {
    path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ")
}
