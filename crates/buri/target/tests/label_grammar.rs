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

//! Grammar tests for target labels
//!
//! Table tests pin down the valid/invalid partition, property tests check
//! that the canonical form is stable under re-parsing.

use buri_target::{Target, TargetName, parse_target};
use proptest::prelude::*;
use test_case::test_case;

#[test_case("//" ; "only absolute prefix")]
#[test_case(":" ; "only colon")]
#[test_case("\\" ; "backslash")]
#[test_case("hello world" ; "whitespace")]
#[test_case("//foo/bar..." ; "dots in directory")]
#[test_case("//foo/bar:baz..." ; "dots in name")]
#[test_case("//foo/bar:baz:..." ; "two colons before recursive")]
#[test_case("foo/.../bar" ; "recursive segment in path")]
#[test_case("//foo " ; "trailing space")]
#[test_case("/hello" ; "single leading slash")]
#[test_case("hello/" ; "trailing slash")]
#[test_case("//foo/bar:baz/qux" ; "slash in name")]
#[test_case("...:foo" ; "recursive directory")]
#[test_case("foo:bar:baz" ; "too many colons")]
#[test_case("foo::bar" ; "double colon")]
#[test_case("foo:" ; "empty name")]
#[test_case("foo//bar" ; "empty segment")]
#[test_case("  ..." ; "padded recursive")]
#[test_case("foo..." ; "dots suffix")]
#[test_case("" ; "empty label")]
fn test_invalid_labels(label: &str) {
    assert!(parse_target(label).is_err(), "`{}` should not parse", label);
}

#[test_case("foo", true, Some("foo") ; "bare directory")]
#[test_case("//foo:bar", false, Some("bar") ; "absolute with name")]
#[test_case(":hello", true, Some("hello") ; "name only")]
#[test_case("...", true, None ; "recursive root")]
#[test_case("foo/bar:...", true, None ; "recursive under path")]
#[test_case("//...", false, None ; "absolute recursive root")]
#[test_case("//a-b/c_d:E-9", false, Some("E-9") ; "dashes and underscores")]
fn test_valid_labels(label: &str, is_relative: bool, name: Option<&str>) {
    let target = parse_target(label).unwrap();
    assert_eq!(target.is_relative, is_relative);
    match name {
        Some(name) => assert_eq!(target.name, TargetName::Specific(name.to_string())),
        None => assert_eq!(target.name, TargetName::Recursive),
    }
}

fn part() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,8}"
}

fn target_name() -> impl Strategy<Value = TargetName> {
    prop_oneof![
        4 => part().prop_map(TargetName::Specific),
        1 => Just(TargetName::Recursive),
    ]
}

fn target() -> impl Strategy<Value = Target> {
    (any::<bool>(), prop::collection::vec(part(), 0..5), target_name()).prop_map(|(is_relative, directories, name)| Target { is_relative, directories, name })
}

proptest! {
    #[test]
    fn test_canonical_form_round_trips(target in target()) {
        let reparsed = parse_target(&target.to_string()).unwrap();
        prop_assert_eq!(reparsed, target);
    }

    #[test]
    fn test_parse_is_stable_under_reprinting(absolute in any::<bool>(), directories in prop::collection::vec(part(), 1..5)) {
        // Path-only labels normalize to their canonical form after one pass
        let prefix = if absolute { "//" } else { "" };
        let label = format!("{}{}", prefix, directories.join("/"));

        let first = parse_target(&label).unwrap();
        let second = parse_target(&first.to_string()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.name(), directories.last().unwrap().as_str());
    }

    #[test]
    fn test_labels_with_foreign_characters_fail(prefix in part(), bad in "[ ./\\\\@#!]", suffix in part()) {
        let label = format!("//{}:{}{}{}", prefix, prefix, bad, suffix);
        prop_assert!(parse_target(&label).is_err());
    }
}
