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

//! Dependency graph construction and topological ordering

use crate::error::{ResolveError, ResolveResult};
use crate::loader::DescriptorLoader;
use buri_target::{Target, parse_target};
use std::collections::HashMap;
use std::sync::Arc;

/// One resolved unit in the dependency graph
#[derive(Debug, PartialEq, Eq)]
pub struct DepGraphNode {
    pub target: Target,
    pub files: Vec<String>,
    /// Shared with every other node that depends on the same target
    pub deps: Vec<Arc<DepGraphNode>>,
}

/// A target and the files it owns, as emitted in build order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFiles {
    pub target: Target,
    pub files: Vec<String>,
}

/// Result of resolving one root target
#[derive(Debug)]
pub struct DepGraph {
    /// Node of the requested target
    pub root: Arc<DepGraphNode>,
    /// Every reachable target exactly once, dependencies first
    pub order: Vec<TargetFiles>,
}

impl DepGraph {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `target` in the build order
    pub fn position(&self, target: &Target) -> Option<usize> {
        self.order.iter().position(|entry| &entry.target == target)
    }

    pub fn into_order(self) -> Vec<TargetFiles> {
        self.order
    }
}

enum Visit {
    InProgress,
    Finished(Arc<DepGraphNode>),
}

/// Traversal state for a single resolution. Nothing outlives the call.
struct Resolver<'a, L: ?Sized> {
    loader: &'a L,
    /// Keyed by canonical target string
    visits: HashMap<String, Visit>,
    /// Targets currently being resolved, outermost first
    stack: Vec<Target>,
    order: Vec<TargetFiles>,
}

impl<'a, L> Resolver<'a, L>
where
    L: DescriptorLoader + ?Sized,
{
    fn new(loader: &'a L) -> Self {
        Self {
            loader,
            visits: HashMap::new(),
            stack: Vec::new(),
            order: Vec::new(),
        }
    }

    fn resolve_target(&mut self, target: Target, dependent: Option<&Target>) -> ResolveResult<Arc<DepGraphNode>> {
        if target.is_recursive() {
            return Err(ResolveError::Unsupported(target));
        }

        let key = target.to_string();
        match self.visits.get(&key) {
            Some(Visit::Finished(node)) => return Ok(Arc::clone(node)),
            Some(Visit::InProgress) => {
                return Err(ResolveError::Cycle {
                    path: self.cycle_path(&target),
                    target,
                });
            }
            None => {}
        }
        self.visits.insert(key.clone(), Visit::InProgress);
        self.stack.push(target.clone());

        let descriptor = self.loader.load(&target).map_err(|source| ResolveError::Load { target: target.clone(), source })?;
        let library = match descriptor.into_library(target.name()) {
            Some(library) => library,
            None => {
                let descriptor = target.build_file_location();
                return Err(match dependent {
                    Some(dependent) => ResolveError::DependencyNotFound {
                        target,
                        dependent: dependent.clone(),
                        descriptor,
                    },
                    None => ResolveError::LibraryNotFound { target, descriptor },
                });
            }
        };

        let mut deps = Vec::with_capacity(library.dependencies.len());
        for label in &library.dependencies {
            let dep_target = parse_target(label).map_err(|source| ResolveError::InvalidDependency {
                target: target.clone(),
                label: label.clone(),
                source,
            })?;
            deps.push(self.resolve_target(dep_target, Some(&target))?);
        }

        self.stack.pop();
        let node = Arc::new(DepGraphNode {
            target: target.clone(),
            files: library.files.clone(),
            deps,
        });
        self.visits.insert(key, Visit::Finished(Arc::clone(&node)));
        self.order.push(TargetFiles { target, files: library.files });

        Ok(node)
    }

    /// Path from the first occurrence of `target` on the stack back to itself
    fn cycle_path(&self, target: &Target) -> Vec<Target> {
        let start = self.stack.iter().position(|entry| entry == target).unwrap_or(0);
        let mut path: Vec<Target> = self.stack[start..].to_vec();
        path.push(target.clone());
        path
    }
}

/// Resolve the dependency graph rooted at `root`.
///
/// Descriptors are requested from `loader` at most once per target. The
/// returned order lists each reachable target once, after all of its
/// dependencies; siblings appear in declaration order.
pub fn resolve<L>(root: Target, loader: &L) -> ResolveResult<DepGraph>
where
    L: DescriptorLoader + ?Sized,
{
    if root.is_recursive() {
        return Err(ResolveError::Unsupported(root));
    }

    let mut resolver = Resolver::new(loader);
    let root = resolver.resolve_target(root, None)?;

    Ok(DepGraph { root, order: resolver.order })
}

/// Build order for `head_target`, dependencies first
pub fn topologically_sort_dep_graph<L>(head_target: Target, loader: &L) -> ResolveResult<Vec<TargetFiles>>
where
    L: DescriptorLoader + ?Sized,
{
    resolve(head_target, loader).map(DepGraph::into_order)
}
