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

//! Descriptor loading capability

use crate::descriptor::BuildDescriptor;
use crate::error::LoadError;
use buri_target::Target;

/// Produces the descriptor that declares a target.
///
/// Implementations decide where descriptors live and how they are decoded;
/// the resolver only sees the result. Any closure of the matching shape is a
/// loader.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptorLoader {
    /// Load the descriptor found at `target.build_file_location()`
    fn load(&self, target: &Target) -> Result<BuildDescriptor, LoadError>;
}

impl<F> DescriptorLoader for F
where
    F: Fn(&Target) -> Result<BuildDescriptor, LoadError>,
{
    fn load(&self, target: &Target) -> Result<BuildDescriptor, LoadError> {
        self(target)
    }
}
