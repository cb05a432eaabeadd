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

//! End-to-end resolution over TOML build files
//!
//! These tests drive the resolver through `SourceDescriptorLoader`, the same
//! path the CLI takes, with workspaces held in memory or in a temp directory.

use buri_graph::{DirectorySource, LoadError, MemorySource, ResolveError, SourceDescriptorLoader, resolve, topologically_sort_dep_graph};
use buri_target::parse_target;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn workspace(files: &[(&str, &str)]) -> SourceDescriptorLoader<MemorySource> {
    let source = files.iter().fold(MemorySource::new(), |source, (path, content)| source.with_file(path, *content));
    SourceDescriptorLoader::new(source)
}

#[test]
fn test_errors_if_build_file_does_not_exist() {
    let loader = workspace(&[]);

    let result = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader);

    assert!(matches!(result, Err(ResolveError::Load { source: LoadError::NotFound { .. }, .. })));
}

#[test]
fn test_errors_if_build_file_does_not_contain_target() {
    let loader = workspace(&[("foo/BUILD", "")]);

    let result = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader);

    assert!(matches!(result, Err(ResolveError::LibraryNotFound { .. })));
}

#[test]
fn test_errors_if_build_file_is_malformed() {
    let loader = workspace(&[("foo/BUILD", "library = 12")]);

    let result = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader);

    assert!(matches!(result, Err(ResolveError::Load { source: LoadError::Malformed { .. }, .. })));
}

#[test]
fn test_only_one_target_if_target_has_no_dependencies() {
    let loader = workspace(&[(
        "foo/BUILD",
        r#"
        [[library]]
        name = "bar"
        "#,
    )]);
    let target = parse_target("//foo:bar").unwrap();

    let order = topologically_sort_dep_graph(target.clone(), &loader).unwrap();

    assert_eq!(order.len(), 1);
    assert_eq!(order[0].target, target);
}

#[test]
fn test_errors_if_dependency_build_file_does_not_exist() {
    let loader = workspace(&[(
        "foo/BUILD",
        r#"
        [[library]]
        name = "bar"
        dependencies = ["//baz:qux"]
        "#,
    )]);

    let result = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader);

    match result {
        Err(ResolveError::Load { target, .. }) => assert_eq!(target.to_string(), "//baz:qux"),
        other => panic!("expected load error, got {:?}", other),
    }
}

#[test]
fn test_errors_if_dependency_build_file_does_not_include_target() {
    let loader = workspace(&[
        (
            "foo/BUILD",
            r#"
            [[library]]
            name = "bar"
            dependencies = ["//fizz:buzz"]
            "#,
        ),
        ("fizz/BUILD", ""),
    ]);

    let result = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader);

    assert!(matches!(result, Err(ResolveError::DependencyNotFound { .. })));
}

#[test]
fn test_traverses_multiple_build_files() {
    let loader = workspace(&[
        (
            "foo/BUILD",
            r#"
            [[library]]
            name = "bar"
            dependencies = ["//fizz/buzz:qux", "//hello:world"]
            "#,
        ),
        ("fizz/buzz/BUILD", "[[library]]\nname = \"qux\"\n"),
        ("hello/BUILD", "[[library]]\nname = \"world\"\n"),
    ]);

    let order = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader).unwrap();

    assert_eq!(order.len(), 3);
}

#[test]
fn test_traverses_multiple_targets_in_same_build_file() {
    let loader = workspace(&[
        (
            "foo/BUILD",
            r#"
            [[library]]
            name = "bar"
            dependencies = ["//fizz/buzz:qux", "//fizz/buzz:world"]
            "#,
        ),
        (
            "fizz/buzz/BUILD",
            r#"
            [[library]]
            name = "qux"

            [[library]]
            name = "world"
            "#,
        ),
    ]);

    let order = topologically_sort_dep_graph(parse_target("//foo:bar").unwrap(), &loader).unwrap();

    assert_eq!(order.len(), 3);
}

const DIAMOND: &str = r#"
[[library]]
name = "a"
files = ["a.buri"]
dependencies = ["//foo:b", "//foo:c"]

[[library]]
name = "b"
files = ["b.buri"]
dependencies = ["//foo:d"]

[[library]]
name = "c"
files = ["c.buri"]
dependencies = ["//foo:d"]

[[library]]
name = "d"
files = ["d1.buri", "d2.buri"]
"#;

#[test]
fn test_diamond_dependency_produces_one_node() {
    let loader = workspace(&[("foo/BUILD", DIAMOND)]);

    let graph = resolve(parse_target("//foo:a").unwrap(), &loader).unwrap();

    assert_eq!(graph.len(), 4);
    assert!(Arc::ptr_eq(&graph.root.deps[0].deps[0], &graph.root.deps[1].deps[0]));
    assert_eq!(graph.root.deps[0].deps[0].files, vec!["d1.buri", "d2.buri"]);
}

#[test]
fn test_topologically_sorts_dependencies() {
    let loader = workspace(&[("foo/BUILD", DIAMOND)]);

    let order = topologically_sort_dep_graph(parse_target("//foo:a").unwrap(), &loader).unwrap();
    let labels: Vec<String> = order.iter().map(|entry| entry.target.to_string()).collect();

    assert_eq!(labels.len(), 4);
    // First because it has no dependencies
    assert_eq!(labels[0], "//foo:d");
    // The middle two may come in either order
    assert!(labels[1..3].contains(&"//foo:b".to_string()));
    assert!(labels[1..3].contains(&"//foo:c".to_string()));
    // Last because it depends on everything else
    assert_eq!(labels[3], "//foo:a");
}

#[test]
fn test_errors_with_dependency_cycle() {
    let loader = workspace(&[(
        "foo/BUILD",
        r#"
        [[library]]
        name = "a"
        dependencies = ["//foo:b"]

        [[library]]
        name = "b"
        dependencies = ["//foo:a"]
        "#,
    )]);

    let result = topologically_sort_dep_graph(parse_target("//foo:a").unwrap(), &loader);

    assert!(matches!(result, Err(ResolveError::Cycle { .. })));
}

#[test]
fn test_resolves_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("app")).unwrap();
    fs::create_dir_all(temp_dir.path().join("lib/core")).unwrap();
    fs::write(temp_dir.path().join("app/BUILD"), "[[library]]\nname = \"app\"\nfiles = [\"main.buri\"]\ndependencies = [\"//lib/core\"]\n").unwrap();
    fs::write(temp_dir.path().join("lib/core/BUILD"), "[[library]]\nname = \"core\"\nfiles = [\"core.buri\"]\n").unwrap();

    let loader = SourceDescriptorLoader::new(DirectorySource::new(temp_dir.path()));
    let order = topologically_sort_dep_graph(parse_target("//app").unwrap(), &loader).unwrap();

    let labels: Vec<String> = order.iter().map(|entry| entry.target.to_string()).collect();
    assert_eq!(labels, vec!["//lib/core:core", "//app:app"]);
    assert_eq!(order[1].files, vec!["main.buri"]);
}
