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

//! Target label parsing

use crate::{RECURSIVE_TARGET_NAME, Target, TargetName};
use thiserror::Error;

const ABSOLUTE_PREFIX: &str = "//";

/// Grammar violations in a target label
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("too many colons in target `{0}`")]
    TooManyColons(String),

    #[error("invalid directory \"{segment}\" in target `{label}`")]
    InvalidDirectory { label: String, segment: String },

    #[error("invalid target name \"{name}\" in target `{label}`")]
    InvalidTargetName { label: String, name: String },

    #[error("expected 1 or more directories in target `{0}`")]
    MissingDirectories(String),
}

impl TargetParseError {
    /// The label text that failed to parse
    pub fn label(&self) -> &str {
        match self {
            TargetParseError::TooManyColons(label) | TargetParseError::MissingDirectories(label) => label,
            TargetParseError::InvalidDirectory { label, .. } | TargetParseError::InvalidTargetName { label, .. } => label,
        }
    }
}

fn is_valid_part_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// A directory segment or target name: non-empty, `[A-Za-z0-9_-]` only
fn is_valid_part(part: &str) -> bool {
    !part.is_empty() && part.chars().all(is_valid_part_character)
}

/// Parse a target label such as `//foo/bar:baz`.
pub fn parse_target(label: &str) -> Result<Target, TargetParseError> {
    let (is_relative, rest) = match label.strip_prefix(ABSOLUTE_PREFIX) {
        Some(rest) => (false, rest),
        None => (true, label),
    };

    if rest == RECURSIVE_TARGET_NAME {
        return Ok(Target {
            is_relative,
            directories: Vec::new(),
            name: TargetName::Recursive,
        });
    }

    let mut colon_parts = rest.split(':');
    let directories_part = colon_parts.next().unwrap_or_default();
    let name_part = colon_parts.next();
    if colon_parts.next().is_some() {
        return Err(TargetParseError::TooManyColons(label.to_string()));
    }

    let directories: Vec<String> = if directories_part.is_empty() {
        Vec::new()
    } else {
        directories_part.split('/').map(str::to_string).collect()
    };

    if let Some(segment) = directories.iter().find(|segment| !is_valid_part(segment)) {
        return Err(TargetParseError::InvalidDirectory {
            label: label.to_string(),
            segment: segment.clone(),
        });
    }

    let name = match name_part {
        Some(RECURSIVE_TARGET_NAME) => TargetName::Recursive,
        Some(name) if is_valid_part(name) => TargetName::Specific(name.to_string()),
        Some(name) => {
            return Err(TargetParseError::InvalidTargetName {
                label: label.to_string(),
                name: name.to_string(),
            });
        }
        // A path-only label names the unit matching its final directory
        None => match directories.last() {
            Some(last) => TargetName::Specific(last.clone()),
            None => return Err(TargetParseError::MissingDirectories(label.to_string())),
        },
    };

    Ok(Target { is_relative, directories, name })
}
