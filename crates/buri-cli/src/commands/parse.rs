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

//! `buri parse`: show how a label is understood

use anyhow::{Context, Result};
use buri_target::{Target, parse_target};
use std::fmt::Write;

pub fn handle_parse(label: &str) -> Result<()> {
    let target = parse_target(label).with_context(|| format!("Invalid target `{}`", label))?;
    print!("{}", describe_target(&target)?);
    Ok(())
}

pub fn describe_target(target: &Target) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "label:       {}", target)?;
    writeln!(out, "kind:        {}", if target.is_relative() { "relative" } else { "absolute" })?;
    writeln!(out, "directories: [{}]", target.directories.join(", "))?;
    writeln!(out, "name:        {}{}", target.name(), if target.is_recursive() { " (recursive)" } else { "" })?;
    writeln!(out, "build file:  {}", target.build_file_location())?;
    Ok(out)
}
