//! Enumerate canonical monomer paths of a molecule graph.
//!
//! From every vertex, a depth-first search produces all simple paths of 1 to
//! [`SEARCH_DEPTH`] monomers. Each path is tracked in two parallel forms: the
//! original form (verbatim or case-folded identifiers) and the natural-analog
//! form (modified monomers replaced by their natural analogs). A path and its
//! token-reversal are the same path walked from either end, so only the
//! lexicographically smaller of the two is kept.

use std::collections::HashSet;

use bit_set::BitSet;
use log::warn;
use petgraph::graph::NodeIndex;

use crate::{
    graph::{Index, MoleculeGraph, Vertex},
    monomers::MonomerStore,
    notation::PolymerType,
};

/// Maximum path length in monomers, root included.
pub const SEARCH_DEPTH: usize = 6;

/// The two deduplicated path sets of one enumeration run.
///
/// Each call to [`find_paths`] returns a fresh value, so concurrent
/// enumerations never share accumulation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSets {
    /// Paths over original (case-folded) monomer identifiers.
    pub paths: HashSet<String>,
    /// Paths over natural-analog identifiers.
    pub natural_paths: HashSet<String>,
}

impl PathSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one path given as parallel original and natural token lists,
    /// canonicalizing each form against its token-reversal independently: a
    /// path and its natural form may resolve to different members of their
    /// palindrome pairs.
    pub fn store(&mut self, orig_tokens: &[String], nat_tokens: &[String]) {
        canonical_insert(&mut self.paths, orig_tokens);
        canonical_insert(&mut self.natural_paths, nat_tokens);
    }
}

/// Insert the joined path unless its token-reversal is already stored, in
/// which case keep whichever of the two is lexicographically smaller.
fn canonical_insert(set: &mut HashSet<String>, tokens: &[String]) {
    let path = tokens.concat();
    let reversed: String = tokens.iter().rev().map(String::as_str).collect();

    if set.contains(&reversed) {
        if path < reversed {
            set.remove(&reversed);
            set.insert(path);
        }
    } else {
        set.insert(path);
    }
}

/// Enumerate all canonical paths of `graph`, rooted at every vertex in graph
/// order.
pub fn find_paths(graph: &MoleculeGraph, store: &MonomerStore) -> PathSets {
    let mut sets = PathSets::new();
    let mut visited = BitSet::with_capacity(graph.vertex_count());

    for root in graph.vertex_indices() {
        let vertex = graph.vertex(root);
        let orig_tokens = vec![original_unit(vertex)];
        let nat_tokens = vec![natural_unit(vertex, store)];
        sets.store(&orig_tokens, &nat_tokens);

        // The visited set is scoped to one root's traversal.
        visited.clear();
        visited.insert(root.index());
        depth_first_search(
            graph,
            store,
            root,
            &mut visited,
            &orig_tokens,
            &nat_tokens,
            &mut sets,
        );
    }
    sets
}

/// Extend the current path into every unvisited neighbor, recording each
/// intermediate path. Recursion passes freshly extended token lists instead
/// of backtracking a shared one.
fn depth_first_search(
    graph: &MoleculeGraph,
    store: &MonomerStore,
    node: NodeIndex<Index>,
    visited: &mut BitSet,
    orig_tokens: &[String],
    nat_tokens: &[String],
    sets: &mut PathSets,
) {
    if orig_tokens.len() == SEARCH_DEPTH {
        return;
    }

    for neighbor in graph.neighbors(node) {
        if visited.contains(neighbor.index()) {
            continue;
        }
        let vertex = graph.vertex(neighbor);

        let mut orig = orig_tokens.to_vec();
        orig.push(original_unit(vertex));
        let mut nat = nat_tokens.to_vec();
        nat.push(natural_unit(vertex, store));
        sets.store(&orig, &nat);

        visited.insert(neighbor.index());
        depth_first_search(graph, store, neighbor, visited, &orig, &nat, sets);
        visited.remove(neighbor.index());
    }
}

/// A vertex's token in the original path form.
fn original_unit(vertex: &Vertex) -> String {
    if vertex.has_unique_unit() {
        vertex.unit().to_lowercase()
    } else {
        vertex.unit().to_owned()
    }
}

/// A vertex's token in the natural-analog path form.
///
/// A failed lookup falls back to the bracket-wrapped original identifier with
/// a logged warning; one unresolved monomer must not abort the enumeration.
fn natural_unit(vertex: &Vertex, store: &MonomerStore) -> String {
    if vertex.is_non_natural() {
        let inner = vertex
            .unit()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or_else(|| vertex.unit());
        let analog = match vertex.kind() {
            PolymerType::Peptide => store.natural_peptide(inner),
            PolymerType::Rna => store.natural_rna(inner),
            // CHEM identifiers have no analog; reuse them verbatim.
            PolymerType::Chem => return vertex.unit().to_owned(),
        };
        analog.unwrap_or_else(|err| {
            warn!("{err}; keeping the original identifier");
            format!("[{inner}]")
        })
    } else if vertex.has_unique_unit() {
        vertex.unit().to_lowercase()
    } else {
        vertex.unit().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{Bond, MoleculeGraph, Vertex},
        notation::Monomer,
    };

    fn tokens(units: &[&str]) -> Vec<String> {
        units.iter().map(|u| u.to_string()).collect()
    }

    fn set_of(paths: &[&str]) -> HashSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn palindrome_insert_replaces_larger_member() {
        // "RA" is stored; inserting its reversal "AR" replaces it because
        // "AR" is lexicographically smaller.
        let mut sets = PathSets::new();
        sets.paths = set_of(&["R", "RA", "RP", "RPR", "RPRP"]);
        sets.natural_paths = sets.paths.clone();

        sets.store(&tokens(&["A", "R"]), &tokens(&["A", "R"]));

        let expected = set_of(&["R", "AR", "RP", "RPR", "RPRP"]);
        assert_eq!(sets.paths, expected);
        assert_eq!(sets.natural_paths, expected);
    }

    #[test]
    fn palindrome_insert_never_keeps_both_members() {
        let mut sets = PathSets::new();
        sets.paths = set_of(&["R", "RA", "RP", "RPR", "RPRP"]);

        sets.store(&tokens(&["A", "R"]), &tokens(&["A", "R"]));

        let unchanged = set_of(&["R", "RA", "RP", "RPR", "RPRP"]);
        assert_ne!(sets.paths, unchanged, "\"RA\" should have been replaced");
    }

    #[test]
    fn original_and_natural_forms_canonicalize_independently() {
        // The original form replaces its stored palindrome member while the
        // natural form keeps the stored one.
        let mut sets = PathSets::new();
        sets.paths = set_of(&["[dR]", "A[dR]", "[dR]P", "[dR]P[LR]", "[dR]P[LR][sP]"]);
        sets.natural_paths = set_of(&["R", "AR", "RP", "RPR", "RPRP"]);

        sets.store(&tokens(&["A", "[dR]"]), &tokens(&["A", "R"]));

        assert_eq!(
            sets.paths,
            set_of(&["[dR]", "A[dR]", "[dR]P", "[dR]P[LR]", "[dR]P[LR][sP]"])
        );
        assert_eq!(sets.natural_paths, set_of(&["R", "AR", "RP", "RPR", "RPRP"]));
    }

    #[test]
    fn stored_palindrome_member_survives_larger_insert() {
        let mut sets = PathSets::new();
        sets.paths = set_of(&["AR"]);
        sets.store(&tokens(&["R", "A"]), &tokens(&["R", "A"]));
        assert_eq!(sets.paths, set_of(&["AR"]));
    }

    fn rna_vertex(unit: &str) -> Vertex {
        let non_natural = unit.len() > 1;
        Vertex::new(
            Monomer::new(unit, crate::notation::PolymerType::Rna),
            non_natural,
            !non_natural,
        )
    }

    fn peptide_vertex(unit: &str) -> Vertex {
        Vertex::new(
            Monomer::new(unit, crate::notation::PolymerType::Peptide),
            unit.len() > 1,
            false,
        )
    }

    /// RNA dinucleotide with a CHEM monomer bonded to the first ribose; the
    /// complete path sets are known exactly.
    #[test]
    fn find_paths_on_rna_chem_fixture() {
        let mut graph = MoleculeGraph::new();
        let v1 = graph.add_vertex(rna_vertex("[LR]"));
        let v2 = graph.add_vertex(rna_vertex("A"));
        let v3 = graph.add_vertex(rna_vertex("P"));
        let v4 = graph.add_vertex(rna_vertex("[LR]"));
        let v5 = graph.add_vertex(rna_vertex("A"));
        let v6 = graph.add_vertex(Vertex::new(
            Monomer::new("[Test_m]", crate::notation::PolymerType::Chem),
            false,
            false,
        ));
        graph.add_bond(v1, v2, Bond::Branch);
        graph.add_bond(v1, v3, Bond::Backbone);
        graph.add_bond(v3, v4, Bond::Backbone);
        graph.add_bond(v4, v5, Bond::Branch);
        graph.add_bond(v6, v1, Bond::Connection);

        let sets = find_paths(&graph, &MonomerStore::with_defaults());

        let expected_paths = set_of(&[
            "[LR]",
            "a",
            "p",
            "[Test_m]",
            "[LR]a",
            "[LR]p",
            "[LR]p[LR]",
            "[LR]p[LR]a",
            "[LR][Test_m]",
            "a[LR]p",
            "a[LR]p[LR]a",
            "[Test_m][LR]a",
            "[Test_m][LR]p",
            "[LR]p[LR][Test_m]",
            "[Test_m][LR]p[LR]a",
        ]);
        let expected_natural_paths = set_of(&[
            "r",
            "a",
            "p",
            "[Test_m]",
            "ar",
            "pr",
            "rpr",
            "arpr",
            "arp",
            "arpra",
            "[Test_m]r",
            "[Test_m]ra",
            "[Test_m]rp",
            "[Test_m]rpr",
            "[Test_m]rpra",
        ]);
        assert_eq!(sets.paths, expected_paths);
        assert_eq!(sets.natural_paths, expected_natural_paths);
    }

    /// The same monomer letters produce different path sets for RNA (branched
    /// topology, case-folded) and peptide (linear chain, case preserved).
    #[test]
    fn rna_and_peptide_paths_differ() {
        let mut rna = MoleculeGraph::new();
        let r1 = rna.add_vertex(rna_vertex("R"));
        let r2 = rna.add_vertex(rna_vertex("A"));
        let r3 = rna.add_vertex(rna_vertex("P"));
        let r4 = rna.add_vertex(rna_vertex("R"));
        let r5 = rna.add_vertex(rna_vertex("C"));
        rna.add_bond(r1, r2, Bond::Branch);
        rna.add_bond(r1, r3, Bond::Backbone);
        rna.add_bond(r3, r4, Bond::Backbone);
        rna.add_bond(r4, r5, Bond::Branch);

        let mut peptide = MoleculeGraph::new();
        let p1 = peptide.add_vertex(peptide_vertex("R"));
        let p2 = peptide.add_vertex(peptide_vertex("A"));
        let p3 = peptide.add_vertex(peptide_vertex("P"));
        let p4 = peptide.add_vertex(peptide_vertex("R"));
        let p5 = peptide.add_vertex(peptide_vertex("C"));
        peptide.add_bond(p1, p2, Bond::Backbone);
        peptide.add_bond(p2, p3, Bond::Backbone);
        peptide.add_bond(p3, p4, Bond::Backbone);
        peptide.add_bond(p4, p5, Bond::Backbone);

        let store = MonomerStore::with_defaults();
        let rna_sets = find_paths(&rna, &store);
        let peptide_sets = find_paths(&peptide, &store);

        let expected_rna = set_of(&[
            "r", "a", "p", "c", "ar", "arp", "arpr", "arprc", "pr", "rpr", "crpr", "crp", "cr",
        ]);
        let expected_peptide = set_of(&[
            "R", "A", "P", "C", "AR", "PAR", "RAPR", "CRPAR", "AP", "APR", "APRC", "PR", "CRP",
            "CR",
        ]);
        assert_eq!(rna_sets.paths, expected_rna);
        assert_eq!(rna_sets.natural_paths, expected_rna);
        assert_eq!(peptide_sets.paths, expected_peptide);
        assert_eq!(peptide_sets.natural_paths, expected_peptide);
    }

    /// Unresolved modified monomers fall back to their bracket-wrapped form
    /// instead of failing the enumeration.
    #[test]
    fn unresolved_analog_falls_back_to_original() {
        let mut graph = MoleculeGraph::new();
        graph.add_vertex(rna_vertex("[qqR]"));

        let sets = find_paths(&graph, &MonomerStore::new());
        assert_eq!(sets.paths, set_of(&["[qqR]"]));
        assert_eq!(sets.natural_paths, set_of(&["[qqR]"]));
    }

    /// Paths are capped at six monomers even on longer chains.
    #[test]
    fn search_depth_bounds_path_length() {
        let mut graph = MoleculeGraph::new();
        let units = ["A", "C", "D", "E", "F", "G", "H", "I"];
        let mut prev = None;
        for unit in units {
            let ix = graph.add_vertex(peptide_vertex(unit));
            if let Some(p) = prev {
                graph.add_bond(p, ix, Bond::Backbone);
            }
            prev = Some(ix);
        }

        let sets = find_paths(&graph, &MonomerStore::with_defaults());
        let longest = sets.paths.iter().map(String::len).max().unwrap();
        assert_eq!(longest, SEARCH_DEPTH);
        assert!(sets.paths.contains("ACDEFG"));
        assert!(!sets.paths.contains("ACDEFGH"));
    }
}
