//! Tanimoto similarity and subset tests over path fingerprints.

use crate::{
    errors::NotationError,
    fingerprint::{notation_fingerprint, notation_fingerprint_natural, Fingerprint},
    monomers::MonomerStore,
    notation::Notation,
};

/// Tanimoto coefficient of two fingerprints: |A ∩ B| / (|A| + |B| − |A ∩ B|).
///
/// Two empty fingerprints are identical, so their similarity is defined as
/// 1.0 rather than leaving the quotient 0/0 undefined.
pub fn tanimoto(a: &Fingerprint, b: &Fingerprint) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection_cardinality(b) as f64;
    let union = a.cardinality() as f64 + b.cardinality() as f64 - intersection;
    intersection / union
}

/// Return `true` iff every bit of `parent` is also set in `child`, i.e. the
/// parent's monomer-path signature is entirely contained in the child's.
pub fn is_subset(parent: &Fingerprint, child: &Fingerprint) -> bool {
    parent.is_subset_of(child)
}

/// Raw-path similarity of two notations.
pub fn notation_similarity(
    a: &Notation,
    b: &Notation,
    store: &MonomerStore,
) -> Result<f64, NotationError> {
    Ok(tanimoto(
        &notation_fingerprint(a, store)?,
        &notation_fingerprint(b, store)?,
    ))
}

/// Natural-analog-aware similarity of two notations.
pub fn notation_similarity_natural(
    a: &Notation,
    b: &Notation,
    store: &MonomerStore,
) -> Result<f64, NotationError> {
    Ok(tanimoto(
        &notation_fingerprint_natural(a, store)?,
        &notation_fingerprint_natural(b, store)?,
    ))
}

/// Test whether `parent`'s path signature is contained in `child`'s.
pub fn notation_subset(
    parent: &Notation,
    child: &Notation,
    store: &MonomerStore,
) -> Result<bool, NotationError> {
    Ok(is_subset(
        &notation_fingerprint(parent, store)?,
        &notation_fingerprint(child, store)?,
    ))
}
