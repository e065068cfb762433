//! Dependency graph for module installation ordering.
//!
//! The graph is a derived view over a manifest's module list: nodes are
//! module positions, and each module has an edge to every module it lists
//! in `dependencies`. Ids resolve to their first declaration, so a
//! duplicated id never makes an edge ambiguous.

use std::cell::OnceCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::error::{ManifestError, Result};
use crate::manifest::{Manifest, Module};

/// An id declared by more than one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    /// The repeated id.
    pub id: String,
    /// Every position (0-indexed) the id is declared at.
    pub positions: Vec<usize>,
}

/// A dependency on an id that no module declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDependency<'m> {
    /// The module declaring the dependency.
    pub module: &'m Module,
    /// The id that could not be found.
    pub dependency: &'m str,
}

/// Find every id declared more than once.
///
/// Results follow the order in which each id was first repeated.
pub fn find_duplicate_ids(modules: &[Module]) -> Vec<DuplicateId> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates: Vec<DuplicateId> = Vec::new();
    let mut reported: HashMap<&str, usize> = HashMap::new();

    for (pos, module) in modules.iter().enumerate() {
        let id = module.id.as_str();
        match seen.get(id) {
            None => {
                seen.insert(id, pos);
            }
            Some(&first) => match reported.get(id) {
                Some(&slot) => duplicates[slot].positions.push(pos),
                None => {
                    reported.insert(id, duplicates.len());
                    duplicates.push(DuplicateId {
                        id: id.to_string(),
                        positions: vec![first, pos],
                    });
                }
            },
        }
    }

    duplicates
}

/// Dependency relationships between the modules of one manifest.
#[derive(Debug)]
pub struct DependencyGraph<'m> {
    /// Modules in declaration order.
    modules: &'m [Module],
    /// Map of id to the position of its first declaration.
    index: HashMap<&'m str, usize>,
    /// Resolved direct dependencies per position, without repeats.
    edges: Vec<Vec<usize>>,
    /// Reverse edges, built on first use.
    dependents: OnceCell<Vec<Vec<usize>>>,
}

impl<'m> DependencyGraph<'m> {
    /// Build the graph for a manifest.
    pub fn new(manifest: &'m Manifest) -> Self {
        Self::from_modules(&manifest.modules)
    }

    /// Build the graph over a module list.
    pub fn from_modules(modules: &'m [Module]) -> Self {
        let mut index = HashMap::with_capacity(modules.len());
        for (pos, module) in modules.iter().enumerate() {
            index.entry(module.id.as_str()).or_insert(pos);
        }

        let edges: Vec<Vec<usize>> = modules
            .iter()
            .map(|module| {
                let mut seen = HashSet::new();
                module
                    .dependencies
                    .iter()
                    .filter_map(|dep| index.get(dep.as_str()).copied())
                    .filter(|pos| seen.insert(*pos))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            modules,
            index,
            edges,
            dependents: OnceCell::new(),
        }
    }

    /// Modules in declaration order.
    pub fn modules(&self) -> &'m [Module] {
        self.modules
    }

    /// Check if a module id exists in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a module by id (first declaration wins).
    pub fn module(&self, id: &str) -> Option<&'m Module> {
        self.index.get(id).map(|&pos| &self.modules[pos])
    }

    /// Get the number of modules in the graph.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Direct dependencies of a module that exist in the graph.
    pub fn dependencies_of(&self, id: &str) -> Vec<&'m Module> {
        self.index
            .get(id)
            .map(|&pos| self.resolve(&self.edges[pos]))
            .unwrap_or_default()
    }

    /// Direct dependencies of the module declared at `position`.
    ///
    /// Unlike [`dependencies_of`](Self::dependencies_of), this reaches
    /// later declarations of a duplicated id.
    pub fn dependencies_at(&self, position: usize) -> Vec<&'m Module> {
        self.edges
            .get(position)
            .map(|edges| self.resolve(edges))
            .unwrap_or_default()
    }

    /// Modules that list the given id directly in their dependencies.
    pub fn dependents_of(&self, id: &str) -> Vec<&'m Module> {
        self.index
            .get(id)
            .map(|&pos| self.resolve(&self.reverse_edges()[pos]))
            .unwrap_or_default()
    }

    /// Every dependency that names an id absent from the graph.
    pub fn missing_dependencies(&self) -> Vec<MissingDependency<'m>> {
        let modules = self.modules;
        modules
            .iter()
            .flat_map(move |module| {
                module
                    .dependencies
                    .iter()
                    .filter(move |dep| !self.contains(dep))
                    .map(move |dep| MissingDependency {
                        module,
                        dependency: dep.as_str(),
                    })
            })
            .collect()
    }

    /// All modules reachable from `id` through dependency edges.
    ///
    /// Each module appears once, in breadth-first discovery order, and
    /// `id` itself is never included. Unknown ids yield an empty list.
    pub fn transitive_dependencies(&self, id: &str) -> Vec<&'m Module> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.modules.len()];
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut result = Vec::new();

        while let Some(current) = queue.pop_front() {
            for &dep in &self.edges[current] {
                if !visited[dep] {
                    visited[dep] = true;
                    result.push(&self.modules[dep]);
                    queue.push_back(dep);
                }
            }
        }

        result
    }

    /// Find a cycle in the graph, returning the path if one exists.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        self.find_cycles().into_iter().next()
    }

    /// Find cycles in the graph.
    ///
    /// Every module and edge is visited once, without recursion, so deep
    /// chains are safe. Each cycle is reported as the path from the module
    /// where it was entered back to that same module, so a self-dependency
    /// comes back as `[id, id]`. Paths that are rotations of one another
    /// are the same cycle and reported once.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Visited,
        }

        let mut state = vec![State::Unvisited; self.modules.len()];
        // Frames of (node, index of the next edge to follow); `path` holds
        // the same nodes in the same order.
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut path: Vec<usize> = Vec::new();
        let mut cycles = Vec::new();

        for root in 0..self.modules.len() {
            if state[root] != State::Unvisited {
                continue;
            }
            state[root] = State::Visiting;
            stack.push((root, 0));
            path.push(root);

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                let Some(&dep) = self.edges[node].get(next) else {
                    stack.pop();
                    path.pop();
                    state[node] = State::Visited;
                    continue;
                };
                frame.1 += 1;

                match state[dep] {
                    State::Visiting => {
                        if let Some(start) = path.iter().rposition(|&p| p == dep) {
                            let mut cycle = path[start..].to_vec();
                            cycle.push(dep);
                            cycles.push(cycle);
                        }
                    }
                    State::Unvisited => {
                        state[dep] = State::Visiting;
                        stack.push((dep, 0));
                        path.push(dep);
                    }
                    State::Visited => {}
                }
            }
        }

        let mut reported = HashSet::new();
        cycles
            .into_iter()
            .filter(|cycle| reported.insert(cycle_key(cycle)))
            .map(|cycle| {
                cycle
                    .into_iter()
                    .map(|pos| self.modules[pos].id.clone())
                    .collect()
            })
            .collect()
    }

    /// Returns modules in installation order (dependencies before dependents).
    ///
    /// Modules with no ordering constraint between them keep their
    /// declaration order. Returns an error if a cycle is detected.
    pub fn topological_order(&self) -> Result<Vec<&'m Module>> {
        let dependents = self.reverse_edges();
        let mut in_degree: Vec<usize> = self.edges.iter().map(Vec::len).collect();

        // Min-heap on position keeps ties in declaration order
        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(pos, _)| Reverse(pos))
            .collect();

        let mut order = Vec::with_capacity(self.modules.len());

        while let Some(Reverse(pos)) = ready.pop() {
            order.push(&self.modules[pos]);

            for &dependent in &dependents[pos] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push(Reverse(dependent));
                }
            }
        }

        if order.len() != self.modules.len() {
            let cycle = match self.find_cycle() {
                Some(cycle) => cycle.join(" -> "),
                None => in_degree
                    .iter()
                    .enumerate()
                    .filter(|(_, &degree)| degree > 0)
                    .map(|(pos, _)| self.modules[pos].id.as_str())
                    .collect::<Vec<_>>()
                    .join(" -> "),
            };
            return Err(ManifestError::CircularDependency { cycle });
        }

        Ok(order)
    }

    fn reverse_edges(&self) -> &Vec<Vec<usize>> {
        self.dependents.get_or_init(|| {
            let mut dependents = vec![Vec::new(); self.modules.len()];
            for (pos, deps) in self.edges.iter().enumerate() {
                for &dep in deps {
                    dependents[dep].push(pos);
                }
            }
            dependents
        })
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&'m Module> {
        positions.iter().map(|&pos| &self.modules[pos]).collect()
    }
}

/// A closed cycle path rotated to start at its lowest position.
fn cycle_key(cycle: &[usize]) -> Vec<usize> {
    let open = &cycle[..cycle.len() - 1];
    let lowest = open
        .iter()
        .enumerate()
        .min_by_key(|(_, &pos)| pos)
        .map_or(0, |(i, _)| i);
    open[lowest..].iter().chain(&open[..lowest]).copied().collect()
}
