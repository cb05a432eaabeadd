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

//! Buri target labels
//!
//! A target label names one buildable unit inside a workspace:
//!
//! - `//foo/bar:baz` - absolute label, library `baz` declared in `foo/bar/BUILD`
//! - `foo/bar` - relative label, implicitly naming library `bar`
//! - `:baz` - library `baz` in the current directory
//! - `//foo:...` - recursive label, everything under `foo`
//!
//! Parsing is pure and allocation-light; see [`parse::parse_target`].

pub mod parse;

use std::fmt;
use std::str::FromStr;

pub use parse::{TargetParseError, parse_target};

/// File name of the per-directory build descriptor
pub const BUILD_FILE_NAME: &str = "BUILD";

/// Text used for the recursive (wildcard) target name
pub const RECURSIVE_TARGET_NAME: &str = "...";

/// Name component of a target label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetName {
    /// A single named unit
    Specific(String),
    /// Every unit under the label's directories
    Recursive,
}

impl TargetName {
    /// Name text as it appears after the colon
    pub fn as_str(&self) -> &str {
        match self {
            TargetName::Specific(value) => value,
            TargetName::Recursive => RECURSIVE_TARGET_NAME,
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed build label.
///
/// Equality is field-wise, which for well-formed labels coincides with
/// equality of the canonical string produced by `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    /// True when the label did not start with `//`
    pub is_relative: bool,
    /// Path segments leading to the descriptor directory
    pub directories: Vec<String>,
    /// Unit selected inside the descriptor
    pub name: TargetName,
}

impl Target {
    /// Create an absolute target naming a specific unit
    pub fn absolute<I, S>(directories: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_relative: false,
            directories: directories.into_iter().map(Into::into).collect(),
            name: TargetName::Specific(name.into()),
        }
    }

    /// Name of the selected unit, `...` for recursive targets
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    pub fn is_recursive(&self) -> bool {
        matches!(self.name, TargetName::Recursive)
    }

    /// Directory segments joined with `/`
    pub fn directories_path(&self) -> String {
        self.directories.join("/")
    }

    /// Location of the descriptor that declares this target
    pub fn build_file_location(&self) -> String {
        format!("{}/{}", self.directories_path(), BUILD_FILE_NAME)
    }

    /// Anchor a relative label at `base`, the directories of the package it
    /// was written in. Absolute labels are returned unchanged.
    pub fn rebase(&self, base: &[String]) -> Target {
        if !self.is_relative {
            return self.clone();
        }

        let mut directories = Vec::with_capacity(base.len() + self.directories.len());
        directories.extend(base.iter().cloned());
        directories.extend(self.directories.iter().cloned());

        Target {
            is_relative: false,
            directories,
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_relative {
            f.write_str("//")?;
        }
        write!(f, "{}:{}", self.directories_path(), self.name)
    }
}

impl FromStr for Target {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_target(s)
    }
}
