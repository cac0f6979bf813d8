//! Batch similarity search: one query against many stored notations.
//!
//! Each candidate's graph, path sets, and fingerprint are computed
//! independently, so the batch parallelizes across notations with only the
//! monomer store and the query fingerprint shared read-only. A candidate
//! whose notation fails to build is logged and skipped; it never aborts the
//! batch.

use clap::ValueEnum;
use log::warn;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    errors::NotationError,
    fingerprint::{notation_fingerprint, notation_fingerprint_natural, Fingerprint},
    monomers::MonomerStore,
    notation::Notation,
    similarity::tanimoto,
};

/// Which fingerprint variant a search compares.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum FingerprintMode {
    /// Raw monomer paths only.
    Original,
    /// Union of raw and natural-analog paths.
    Natural,
}

impl FingerprintMode {
    fn fingerprint(
        &self,
        notation: &Notation,
        store: &MonomerStore,
    ) -> Result<Fingerprint, NotationError> {
        match self {
            FingerprintMode::Original => notation_fingerprint(notation, store),
            FingerprintMode::Natural => notation_fingerprint_natural(notation, store),
        }
    }
}

/// One search result: a candidate id and its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
}

/// Rank `candidates` by similarity to `query`, dropping hits below
/// `min_score`. Results are sorted by descending score, ties broken by id.
pub fn similarity_search(
    query: &Notation,
    candidates: &[(String, Notation)],
    mode: FingerprintMode,
    min_score: f64,
    store: &MonomerStore,
) -> Result<Vec<SearchHit>, NotationError> {
    let query_fingerprint = mode.fingerprint(query, store)?;

    let mut hits: Vec<SearchHit> = candidates
        .par_iter()
        .filter_map(|(id, notation)| match mode.fingerprint(notation, store) {
            Ok(fingerprint) => {
                let score = tanimoto(&query_fingerprint, &fingerprint);
                (score >= min_score).then(|| SearchHit {
                    id: id.clone(),
                    score,
                })
            }
            Err(err) => {
                warn!("skipping candidate {id}: {err}");
                None
            }
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap()
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(hits)
}
