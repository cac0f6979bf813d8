//! Natural-analog lookup for modified monomers.
//!
//! A [`MonomerStore`] maps modified-monomer identifiers to their natural
//! analogs, split into a peptide table and an RNA table. Lookups match the
//! record's alternate identifier case-insensitively; RNA analogs are returned
//! lower-cased (the case-folded canonical form used in natural paths) while
//! peptide analogs keep their case. CHEM monomers have no analogs.

use crate::{errors::NaturalAnalogError, notation::PolymerType};

/// One monomer record: the identifier it is looked up by and its natural
/// analog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonomerRecord {
    alternate_id: String,
    natural_analog: String,
}

impl MonomerRecord {
    pub fn new(alternate_id: impl Into<String>, natural_analog: impl Into<String>) -> Self {
        Self {
            alternate_id: alternate_id.into(),
            natural_analog: natural_analog.into(),
        }
    }
}

/// Lookup table of modified monomers, queried during path enumeration.
#[derive(Debug, Clone, Default)]
pub struct MonomerStore {
    peptides: Vec<MonomerRecord>,
    nucleotides: Vec<MonomerRecord>,
}

impl MonomerStore {
    /// An empty store; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with common modified monomers.
    pub fn with_defaults() -> Self {
        let peptides = [
            ("meA", "A"),
            ("meF", "F"),
            ("meG", "G"),
            ("dA", "A"),
            ("dC", "C"),
            ("dF", "F"),
            ("dW", "W"),
            ("Aib", "A"),
            ("Nle", "L"),
            ("Orn", "K"),
            ("seC", "C"),
            ("Hyp", "P"),
        ];
        let nucleotides = [
            // Riboses.
            ("dR", "R"),
            ("LR", "R"),
            ("mR", "R"),
            ("fR", "R"),
            ("eR", "R"),
            // Phosphates.
            ("sP", "P"),
            // Bases.
            ("5meC", "C"),
            ("m6A", "A"),
            ("5fU", "U"),
            ("In", "A"),
        ];

        let records = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|&(id, analog)| MonomerRecord::new(id, analog))
                .collect()
        };
        Self {
            peptides: records(&peptides),
            nucleotides: records(&nucleotides),
        }
    }

    /// Register an additional record, e.g. for in-house monomers.
    pub fn insert(&mut self, kind: PolymerType, record: MonomerRecord) {
        match kind {
            PolymerType::Peptide => self.peptides.push(record),
            PolymerType::Rna => self.nucleotides.push(record),
            // CHEM monomers have no analog table.
            PolymerType::Chem => {}
        }
    }

    /// Natural analog of a modified peptide monomer, case preserved.
    pub fn natural_peptide(&self, id: &str) -> Result<String, NaturalAnalogError> {
        Self::lookup(&self.peptides, id)
            .map(String::from)
            .ok_or_else(|| NaturalAnalogError {
                kind: PolymerType::Peptide,
                id: id.to_string(),
            })
    }

    /// Natural analog of a modified RNA monomer, lower-cased.
    pub fn natural_rna(&self, id: &str) -> Result<String, NaturalAnalogError> {
        Self::lookup(&self.nucleotides, id)
            .map(str::to_lowercase)
            .ok_or_else(|| NaturalAnalogError {
                kind: PolymerType::Rna,
                id: id.to_string(),
            })
    }

    fn lookup<'a>(records: &'a [MonomerRecord], id: &str) -> Option<&'a str> {
        records
            .iter()
            .find(|r| r.alternate_id.eq_ignore_ascii_case(id))
            .map(|r| r.natural_analog.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rna_analogs_are_lowercased() {
        let store = MonomerStore::with_defaults();
        assert_eq!(store.natural_rna("dR").unwrap(), "r");
        assert_eq!(store.natural_rna("LR").unwrap(), "r");
        assert_eq!(store.natural_rna("sP").unwrap(), "p");
    }

    #[test]
    fn peptide_analogs_keep_case() {
        let store = MonomerStore::with_defaults();
        assert_eq!(store.natural_peptide("meA").unwrap(), "A");
        assert_eq!(store.natural_peptide("Nle").unwrap(), "L");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = MonomerStore::with_defaults();
        assert_eq!(store.natural_peptide("MEA").unwrap(), "A");
        assert_eq!(store.natural_rna("lr").unwrap(), "r");
    }

    #[test]
    fn unknown_monomers_fail() {
        let store = MonomerStore::with_defaults();
        assert!(store.natural_peptide("xyz").is_err());
        assert!(store.natural_rna("Test_m").is_err());
    }

    #[test]
    fn registered_records_are_found() {
        let mut store = MonomerStore::new();
        store.insert(PolymerType::Rna, MonomerRecord::new("xR", "R"));
        assert_eq!(store.natural_rna("xR").unwrap(), "r");
    }
}
