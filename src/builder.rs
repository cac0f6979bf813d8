//! Build a [`MoleculeGraph`] from a parsed [`Notation`].
//!
//! Each polymer contributes a sub-graph according to its type: RNA monomers
//! decompose into ribose/base/phosphate structural units with backbone and
//! branch bonds, peptides form a linear chain, and a CHEM polymer is a single
//! vertex. The sub-graphs are concatenated in polymer order (vertex indices
//! are therefore contiguous and stable) and the notation's connection list is
//! resolved into bonds between absolute vertex indices.

use log::debug;
use petgraph::graph::NodeIndex;

use crate::{
    errors::NotationError,
    graph::{Bond, Index, MoleculeGraph, Vertex},
    notation::{Monomer, Notation, Polymer, PolymerType},
};

/// Structural role of an RNA unit within its nucleotide repeat.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RnaUnit {
    Ribose,
    Phosphate,
    Base,
}

/// Build the molecule graph of a notation.
pub fn build_graph(notation: &Notation) -> Result<MoleculeGraph, NotationError> {
    let mut graph = MoleculeGraph::new();
    let mut polymer_starts = Vec::with_capacity(notation.polymers().len());
    debug!("building molecule graph");

    for polymer in notation.polymers() {
        if polymer.monomers().is_empty() {
            return Err(NotationError::EmptyPolymer {
                id: polymer.id().to_string(),
            });
        }

        let start = graph.vertex_count();
        match polymer.kind() {
            PolymerType::Rna => build_rna_part(&mut graph, polymer)?,
            PolymerType::Peptide => build_peptide_part(&mut graph, polymer),
            PolymerType::Chem => build_chem_part(&mut graph, polymer),
        }
        polymer_starts.push((start, graph.vertex_count() - start));
    }

    add_connections(&mut graph, notation, &polymer_starts)?;
    Ok(graph)
}

/// Add the vertices and internal bonds of one RNA polymer.
///
/// The flattened structural-unit list is scanned for consecutive role
/// patterns: `R,P` and `P,R` are backbone bonds, `R,X` is a branch bond, and
/// `R,X,P` additionally bonds the ribose to the phosphate (the base never
/// bonds to the phosphate, keeping the repeat triangle-free).
fn build_rna_part(graph: &mut MoleculeGraph, polymer: &Polymer) -> Result<(), NotationError> {
    debug!("building RNA part of molecule graph");
    let mut units = Vec::new();
    for monomer in polymer.monomers() {
        units.extend(rna_structural_units(monomer.unit())?);
    }

    let mut indices = Vec::with_capacity(units.len());
    for (text, _) in &units {
        // Multi-character codes are modified monomers; single-character RNA
        // units are case-folded in path form to keep ribose variants apart.
        let non_natural = text.chars().count() > 1;
        let vertex = Vertex::new(
            Monomer::new(text.clone(), PolymerType::Rna),
            non_natural,
            !non_natural,
        );
        indices.push(graph.add_vertex(vertex));
    }

    for i in 0..units.len().saturating_sub(1) {
        match (units[i].1, units[i + 1].1) {
            (RnaUnit::Ribose, RnaUnit::Phosphate) | (RnaUnit::Phosphate, RnaUnit::Ribose) => {
                graph.add_bond(indices[i], indices[i + 1], Bond::Backbone);
            }
            (RnaUnit::Ribose, RnaUnit::Base) => {
                graph.add_bond(indices[i], indices[i + 1], Bond::Branch);
                if i + 2 < units.len() && units[i + 2].1 == RnaUnit::Phosphate {
                    graph.add_bond(indices[i], indices[i + 2], Bond::Backbone);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Decompose one RNA monomer group (e.g. `R(A)P` or `[dR](A)[sP]`) into its
/// structural units in notation order.
fn rna_structural_units(group: &str) -> Result<Vec<(String, RnaUnit)>, NotationError> {
    let mut units = Vec::new();
    let mut backbone_seen = 0usize;
    let mut chars = group.chars();

    while let Some(c) = chars.next() {
        if c == '(' {
            let mut base = String::new();
            for inner in chars.by_ref() {
                if inner == ')' {
                    break;
                }
                base.push(inner);
            }
            units.push((base, RnaUnit::Base));
            continue;
        }

        let text = if c == '[' {
            let mut token = String::from('[');
            for inner in chars.by_ref() {
                token.push(inner);
                if inner == ']' {
                    break;
                }
            }
            token
        } else {
            c.to_string()
        };

        let role = match backbone_seen {
            0 => RnaUnit::Ribose,
            1 => RnaUnit::Phosphate,
            _ => {
                return Err(NotationError::malformed(format!(
                    "RNA group {group:?} has more than two backbone units"
                )))
            }
        };
        backbone_seen += 1;
        units.push((text, role));
    }

    if units.is_empty() {
        return Err(NotationError::malformed("empty RNA monomer group"));
    }
    // A group consisting of a lone backbone unit is a terminal phosphate,
    // not a ribose, when written as `P`.
    if units.len() == 1 && units[0].0 == "P" {
        units[0].1 = RnaUnit::Phosphate;
    }
    Ok(units)
}

/// Add the vertices and peptide bonds of one peptide polymer. Branching
/// connections are not built here; they arrive via the connection list.
fn build_peptide_part(graph: &mut MoleculeGraph, polymer: &Polymer) {
    debug!("building PEPTIDE part of molecule graph");
    let mut previous: Option<NodeIndex<Index>> = None;
    for monomer in polymer.monomers() {
        let non_natural = monomer.unit().chars().count() > 1;
        let ix = graph.add_vertex(Vertex::new(monomer.clone(), non_natural, false));
        if let Some(prev) = previous {
            graph.add_bond(prev, ix, Bond::Backbone);
        }
        previous = Some(ix);
    }
}

/// Add the single vertex of a CHEM polymer. CHEM identifiers take part in
/// paths verbatim, so neither flag is set.
fn build_chem_part(graph: &mut MoleculeGraph, polymer: &Polymer) {
    debug!("building CHEM part of molecule graph");
    graph.add_vertex(Vertex::new(polymer.monomers()[0].clone(), false, false));
}

/// Resolve every declared connection into a bond between absolute vertex
/// indices: the referenced polymer's starting offset plus the 1-based unit
/// position.
fn add_connections(
    graph: &mut MoleculeGraph,
    notation: &Notation,
    polymer_starts: &[(usize, usize)],
) -> Result<(), NotationError> {
    for connection in notation.connections() {
        debug!(
            "adding connection {} -> {}",
            connection.source_id(),
            connection.target_id()
        );
        let source = resolve_vertex(
            notation,
            polymer_starts,
            connection.source_id(),
            connection.source_unit(),
        )?;
        let target = resolve_vertex(
            notation,
            polymer_starts,
            connection.target_id(),
            connection.target_unit(),
        )?;
        graph.add_bond(source, target, Bond::Connection);
    }
    Ok(())
}

fn resolve_vertex(
    notation: &Notation,
    polymer_starts: &[(usize, usize)],
    polymer_id: &str,
    unit: usize,
) -> Result<NodeIndex<Index>, NotationError> {
    let ordinal = notation
        .polymers()
        .iter()
        .position(|p| p.id() == polymer_id)
        .ok_or_else(|| NotationError::UnknownPolymer {
            id: polymer_id.to_string(),
        })?;
    let (start, len) = polymer_starts[ordinal];
    if unit == 0 || unit > len {
        return Err(NotationError::UnitOutOfRange {
            id: polymer_id.to_string(),
            unit,
            len,
        });
    }
    Ok(NodeIndex::new(start + unit - 1))
}
