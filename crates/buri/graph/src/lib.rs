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

//! Buri dependency graph resolution
//!
//! Turns a root [`Target`](buri_target::Target) into a build order in which
//! every target appears after all of its dependencies.
//!
//! ## Components
//!
//! ### Descriptors (`descriptor`)
//! - In-memory form of a `BUILD` file: an ordered list of libraries
//! - Each library owns a file list and raw dependency labels
//!
//! ### Loading (`loader`, `source`)
//! - [`DescriptorLoader`] is the only capability the resolver needs
//! - Plain closures implement it, which keeps tests fully in memory
//! - [`SourceDescriptorLoader`] decodes TOML descriptors from any [`ContentSource`]
//!
//! ### Resolution (`resolver`)
//! - Depth-first walk with in-progress/finished coloring
//! - Diamond dependencies collapse onto one shared node
//! - Cycles abort resolution with the offending path

pub mod descriptor;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod source;

pub use descriptor::{BuildDescriptor, Library};
pub use error::{LoadError, ResolveError, ResolveResult};
pub use loader::DescriptorLoader;
pub use resolver::{DepGraph, DepGraphNode, TargetFiles, resolve, topologically_sort_dep_graph};
pub use source::{ContentSource, DirectorySource, MemorySource, SourceDescriptorLoader};
