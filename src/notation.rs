//! Data model for parsed HELM notations.
//!
//! A [`Notation`] is the structured form of one HELM string: an ordered list
//! of polymers (each an ordered list of monomers) plus the inter- and
//! intra-polymer connections. Producing it from the full HELM2 grammar is the
//! job of an external parser; [`crate::loader`] covers the plain subset used
//! by the CLI and the test fixtures.

use std::{fmt::Display, str::FromStr};

/// Thrown by [`PolymerType::from_str`] if the string does not name a
/// supported polymer type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePolymerTypeError;

/// The three polymer classes a monomer can belong to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolymerType {
    Rna,
    Peptide,
    Chem,
}

impl Display for PolymerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolymerType::Rna => write!(f, "RNA"),
            PolymerType::Peptide => write!(f, "PEPTIDE"),
            PolymerType::Chem => write!(f, "CHEM"),
        }
    }
}

impl FromStr for PolymerType {
    type Err = ParsePolymerTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("RNA") {
            Ok(PolymerType::Rna)
        } else if s.eq_ignore_ascii_case("PEPTIDE") {
            Ok(PolymerType::Peptide)
        } else if s.eq_ignore_ascii_case("CHEM") {
            Ok(PolymerType::Chem)
        } else {
            Err(ParsePolymerTypeError)
        }
    }
}

/// One monomer entry of a polymer.
///
/// For RNA polymers the `unit` is the full dotted group (e.g. `R(A)P`); the
/// graph builder decomposes it into structural sub-units. For peptides and
/// CHEM polymers it is the monomer identifier itself, bracket-wrapped when
/// multi-character (e.g. `[meA]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomer {
    unit: String,
    kind: PolymerType,
    count: u32,
}

impl Monomer {
    /// Construct a [`Monomer`] with a repeat count of 1.
    pub fn new(unit: impl Into<String>, kind: PolymerType) -> Self {
        Self {
            unit: unit.into(),
            kind,
            count: 1,
        }
    }

    /// Construct a [`Monomer`] with an explicit repeat count.
    pub fn with_count(unit: impl Into<String>, kind: PolymerType, count: u32) -> Self {
        Self {
            unit: unit.into(),
            kind,
            count,
        }
    }

    /// The monomer identifier, verbatim from the notation.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The polymer type this monomer belongs to.
    pub fn kind(&self) -> PolymerType {
        self.kind
    }

    /// The repeat count of this monomer entry.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// One polymer of a HELM notation, e.g. `RNA1{R(A)P.R(G)P}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polymer {
    id: String,
    kind: PolymerType,
    monomers: Vec<Monomer>,
}

impl Polymer {
    pub fn new(id: impl Into<String>, kind: PolymerType, monomers: Vec<Monomer>) -> Self {
        Self {
            id: id.into(),
            kind,
            monomers,
        }
    }

    /// The polymer identifier, e.g. `RNA1`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> PolymerType {
        self.kind
    }

    /// The ordered monomer entries of this polymer.
    pub fn monomers(&self) -> &[Monomer] {
        &self.monomers
    }
}

/// A bond between two monomers, named by polymer id and 1-based unit
/// position. Source and target polymer ids are equal for intra-polymer bonds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source_id: String,
    target_id: String,
    source_unit: usize,
    target_unit: usize,
}

impl Connection {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        source_unit: usize,
        target_unit: usize,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            source_unit,
            target_unit,
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// 1-based unit position within the source polymer.
    pub fn source_unit(&self) -> usize {
        self.source_unit
    }

    /// 1-based unit position within the target polymer.
    pub fn target_unit(&self) -> usize {
        self.target_unit
    }
}

/// A complete parsed HELM notation: ordered polymers plus connections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notation {
    polymers: Vec<Polymer>,
    connections: Vec<Connection>,
}

impl Notation {
    pub fn new(polymers: Vec<Polymer>, connections: Vec<Connection>) -> Self {
        Self {
            polymers,
            connections,
        }
    }

    pub fn polymers(&self) -> &[Polymer] {
        &self.polymers
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

mod tests {
    #![allow(unused_imports)]
    use super::*;

    #[test]
    fn polymer_type_to_string() {
        assert!(PolymerType::Rna.to_string() == "RNA");
        assert!(PolymerType::Chem.to_string() == "CHEM");
    }

    #[test]
    fn polymer_type_from_string() {
        assert!(str::parse("PEPTIDE") == Ok(PolymerType::Peptide));
        assert!(str::parse("peptide") == Ok(PolymerType::Peptide));
        assert!(str::parse::<PolymerType>("BLOB").is_err());
    }

    #[test]
    fn monomer_counts() {
        assert!(Monomer::new("A", PolymerType::Peptide).count() == 1);
        assert!(Monomer::with_count("A", PolymerType::Peptide, 3).count() == 3);
    }
}
