//! Dependency graph over the declared settings schema.
//!
//! Each setting whose derivers read other settings declares those reads in
//! its [`SettingSpec::deps`](crate::schema::SettingSpec) list. This module
//! turns the declared lists into a DAG, rejects cycles, and produces the
//! canonical *modification order*: the sequence in which settings must be
//! finalized so that every dependency is resolved before its dependents are
//! read.
//!
//! The graph is a schema-level artifact: it is built once per schema
//! version at build/test time (linear in nodes + edges), never per registry
//! instance or per read.

use std::collections::{BTreeMap, BTreeSet};

use crate::schema::SettingSpec;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Directed dependency graph: an edge `A -> B` means "A's derivers read B's
/// resolved value".
///
/// Nodes and out-edges are kept in `BTree` containers so every traversal is
/// deterministic: re-running the sort on an unchanged schema is
/// byte-identical output.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from the declared schema.
    ///
    /// A dep naming an undeclared setting is a schema defect and fails with
    /// [`Error::UnknownSetting`].
    pub fn from_specs(specs: &[SettingSpec]) -> Result<Self> {
        let names: BTreeSet<&str> = specs.iter().map(|spec| spec.name).collect();
        let mut graph = Self::new();
        for spec in specs {
            graph.add_node(spec.name);
            for dep in spec.deps {
                if !names.contains(dep) {
                    return Err(Error::UnknownSetting(format!(
                        "{dep} (dependency of {})",
                        spec.name
                    )));
                }
                graph.add_dep(spec.name, dep);
            }
        }
        Ok(graph)
    }

    /// Add a node with no dependencies.
    ///
    /// If the node already exists, this is a no-op.
    pub fn add_node(&mut self, name: &'static str) {
        self.edges.entry(name).or_default();
    }

    /// Add the edge `name -> dep` (both nodes are created if missing).
    pub fn add_dep(&mut self, name: &'static str, dep: &'static str) {
        self.edges.entry(dep).or_default();
        self.edges.entry(name).or_default().insert(dep);
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The declared dependencies of one node, in sorted order.
    pub fn deps_of(&self, name: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.edges.get(name).into_iter().flatten().copied()
    }

    /// Depth-first topological sort: dependencies always precede their
    /// dependents.
    ///
    /// Nodes are visited in sorted name order and out-edges in sorted dep
    /// order, so the output is deterministic for a given schema. Revisiting
    /// a node that is still in progress is a cycle and fails with
    /// [`Error::CyclicDependency`] carrying the cycle path.
    pub fn modification_order(&self) -> Result<Vec<&'static str>> {
        let mut states: BTreeMap<&'static str, VisitState> = BTreeMap::new();
        let mut path: Vec<&'static str> = Vec::new();
        let mut order: Vec<&'static str> = Vec::with_capacity(self.edges.len());
        for node in self.edges.keys() {
            self.visit(node, &mut states, &mut path, &mut order)?;
        }
        Ok(order)
    }

    fn visit(
        &self,
        node: &'static str,
        states: &mut BTreeMap<&'static str, VisitState>,
        path: &mut Vec<&'static str>,
        order: &mut Vec<&'static str>,
    ) -> Result<()> {
        match states.get(node) {
            Some(VisitState::Done) => return Ok(()),
            Some(VisitState::InProgress) => {
                // close the loop in the reported path: a -> b -> a
                let start = path.iter().position(|seen| *seen == node).unwrap_or(0);
                let mut cycle: Vec<&str> = path[start..].to_vec();
                cycle.push(node);
                return Err(Error::CyclicDependency(cycle.join(" -> ")));
            }
            None => {}
        }
        states.insert(node, VisitState::InProgress);
        path.push(node);
        if let Some(deps) = self.edges.get(node) {
            for dep in deps {
                self.visit(dep, states, path, order)?;
            }
        }
        path.pop();
        states.insert(node, VisitState::Done);
        order.push(node);
        Ok(())
    }
}
