//! Graph-theoretic representation of a HELM molecule.
//!
//! Vertices are monomer occurrences, edges are bonds. The graph is an
//! undirected petgraph arena: vertices are addressed by stable, contiguous
//! indices in insertion order, and adjacency lives in the edge list rather
//! than in per-vertex neighbor collections, so vertices never alias each
//! other's state.

use std::fmt::Display;

use petgraph::{
    dot::Dot,
    graph::{Graph, NodeIndex},
    Undirected,
};

use crate::notation::{Monomer, PolymerType};

pub(crate) type Index = u32;
pub(crate) type VGraph = Graph<Vertex, Bond, Undirected, Index>;

/// One monomer occurrence in a [`MoleculeGraph`].
///
/// `non_natural` marks bracket-wrapped (multi-character) identifiers;
/// `unique_unit` marks single-character RNA units whose canonical path form
/// is lower-cased (upper/lower case distinguishes ribose variants in HELM).
#[derive(Debug, Clone)]
pub struct Vertex {
    monomer: Monomer,
    non_natural: bool,
    unique_unit: bool,
}

impl Vertex {
    pub fn new(monomer: Monomer, non_natural: bool, unique_unit: bool) -> Self {
        Self {
            monomer,
            non_natural,
            unique_unit,
        }
    }

    /// The underlying monomer of this vertex.
    pub fn monomer(&self) -> &Monomer {
        &self.monomer
    }

    /// The monomer identifier, verbatim from the notation.
    pub fn unit(&self) -> &str {
        self.monomer.unit()
    }

    /// The polymer type this vertex is tagged with.
    pub fn kind(&self) -> PolymerType {
        self.monomer.kind()
    }

    pub fn is_non_natural(&self) -> bool {
        self.non_natural
    }

    pub fn has_unique_unit(&self) -> bool {
        self.unique_unit
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.unit())
    }
}

// Equality is structural: polymer-type tag, non-natural flag, and the
// underlying monomer. `unique_unit` is a traversal hint, not identity.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.non_natural == other.non_natural && self.monomer == other.monomer
    }
}

impl Eq for Vertex {}

/// The edges of a [`MoleculeGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bond {
    /// Backbone bond: ribose-phosphate, phosphate-ribose, or a peptide bond.
    Backbone,
    /// Branch bond from a ribose to its base.
    Branch,
    /// Bond declared in the notation's connection section.
    Connection,
}

/// An undirected graph of monomer [`Vertex`]s.
///
/// Vertex insertion order is semantically significant: it defines the DFS
/// iteration order of path enumeration and therefore which member of each
/// palindromic path pair is encountered first.
#[derive(Debug, Clone, Default)]
pub struct MoleculeGraph {
    graph: VGraph,
}

impl MoleculeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, returning its stable index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> NodeIndex<Index> {
        self.graph.add_node(vertex)
    }

    /// Add an undirected bond between `a` and `b`. Both endpoints see each
    /// other as neighbors.
    pub fn add_bond(&mut self, a: NodeIndex<Index>, b: NodeIndex<Index>, bond: Bond) {
        self.graph.add_edge(a, b, bond);
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn vertex(&self, ix: NodeIndex<Index>) -> &Vertex {
        &self.graph[ix]
    }

    /// Iterate vertex indices in insertion order.
    pub fn vertex_indices(&self) -> impl Iterator<Item = NodeIndex<Index>> {
        self.graph.node_indices()
    }

    /// Iterate the neighbors of `ix`.
    pub fn neighbors(&self, ix: NodeIndex<Index>) -> impl Iterator<Item = NodeIndex<Index>> + '_ {
        self.graph.neighbors(ix)
    }

    /// Return `true` iff `a` and `b` are bonded.
    pub fn are_neighbors(&self, a: NodeIndex<Index>, b: NodeIndex<Index>) -> bool {
        self.graph.find_edge(a, b).is_some()
    }

    /// Return a pretty-printable representation of this graph.
    pub fn info(&self) -> String {
        let dot = Dot::new(&self.graph);
        format!("{dot:?}")
    }
}

// Graphs are equal when their vertex sequences match and the same index
// pairs are bonded, regardless of edge insertion order or bond kind.
impl PartialEq for MoleculeGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.graph.node_count() != other.graph.node_count()
            || self.graph.edge_count() != other.graph.edge_count()
        {
            return false;
        }
        if !self
            .graph
            .node_indices()
            .all(|ix| self.graph[ix] == other.graph[ix])
        {
            return false;
        }
        self.graph.edge_indices().all(|e| {
            let (a, b) = self.graph.edge_endpoints(e).unwrap();
            other.graph.find_edge(a, b).is_some()
        })
    }
}

impl Eq for MoleculeGraph {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Monomer;

    fn peptide_vertex(unit: &str) -> Vertex {
        Vertex::new(
            Monomer::new(unit, PolymerType::Peptide),
            unit.len() > 1,
            false,
        )
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut g = MoleculeGraph::new();
        let a = g.add_vertex(peptide_vertex("A"));
        let b = g.add_vertex(peptide_vertex("G"));
        g.add_bond(a, b, Bond::Backbone);

        assert!(g.neighbors(a).any(|n| n == b));
        assert!(g.neighbors(b).any(|n| n == a));
    }

    #[test]
    fn vertex_equality_ignores_unique_unit() {
        let m = Monomer::new("A", PolymerType::Rna);
        let v1 = Vertex::new(m.clone(), false, true);
        let v2 = Vertex::new(m, false, false);
        assert_eq!(v1, v2);
    }

    #[test]
    fn vertex_equality_checks_flags_and_monomer() {
        let v1 = Vertex::new(Monomer::new("A", PolymerType::Rna), false, true);
        let v2 = Vertex::new(Monomer::new("A", PolymerType::Peptide), false, false);
        let v3 = Vertex::new(Monomer::new("A", PolymerType::Rna), true, false);
        assert_ne!(v1, v2);
        assert_ne!(v1, v3);
    }
}
