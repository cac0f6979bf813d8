//! Hashed bit fingerprints over monomer path sets.
//!
//! Every path string is digested with SHA-256 and the 256-bit digest is
//! folded down to a 10-bit position by repeated XOR halving, so each path
//! sets exactly one bit of a 1024-bit fingerprint. The fold is a fixed
//! bit-mixing recipe, not a cryptographic property: equal paths always land
//! on the same bit, and stored fingerprints from other implementations of
//! the same recipe stay comparable.

use std::{fmt::Display, str::FromStr};

use bit_set::BitSet;
use log::debug;
use sha2::{Digest, Sha256};

use crate::{
    builder::build_graph,
    errors::{NotationError, ParseFingerprintError},
    monomers::MonomerStore,
    notation::Notation,
    paths::find_paths,
};

/// Fingerprint width in bits.
pub const FINGERPRINT_BITS: usize = 1024;

const DIGEST_BITS: usize = 256;
const FOLDED_BITS: usize = 10;

/// A 1024-bit path fingerprint of one notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    bits: BitSet,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self {
            bits: BitSet::with_capacity(FINGERPRINT_BITS),
        }
    }

    /// Fingerprint a set of path strings. Colliding paths set the same bit,
    /// which is a no-op; the result is independent of iteration order.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a String>) -> Self {
        debug!("calculating fingerprint");
        let mut fingerprint = Self::new();
        for path in paths {
            fingerprint.insert(bit_position(path));
        }
        fingerprint
    }

    /// Set one bit position.
    pub fn insert(&mut self, position: usize) {
        self.bits.insert(position % FINGERPRINT_BITS);
    }

    pub fn contains(&self, position: usize) -> bool {
        self.bits.contains(position)
    }

    /// Number of set bits.
    pub fn cardinality(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// OR another fingerprint into this one.
    pub fn union_with(&mut self, other: &Fingerprint) {
        self.bits.union_with(&other.bits);
    }

    /// Cardinality of the intersection with `other`.
    pub fn intersection_cardinality(&self, other: &Fingerprint) -> usize {
        self.bits.intersection(&other.bits).count()
    }

    /// Return `true` iff every bit set here is also set in `other`.
    pub fn is_subset_of(&self, other: &Fingerprint) -> bool {
        self.bits.is_subset(&other.bits)
    }

    /// Iterate set bit positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter()
    }
}

/// Serializes as the sorted set-bit positions, e.g. `{3, 17, 512}`. This
/// textual form is the persisted fingerprint representation and must stay
/// re-parseable by [`Fingerprint::from_str`].
impl Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{position}")?;
        }
        write!(f, "}}")
    }
}

impl FromStr for Fingerprint {
    type Err = ParseFingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(ParseFingerprintError::MissingBraces)?;

        let mut fingerprint = Fingerprint::new();
        for part in inner.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let position: usize = part
                .parse()
                .map_err(|_| ParseFingerprintError::InvalidPosition(part.to_string()))?;
            if position >= FINGERPRINT_BITS {
                return Err(ParseFingerprintError::PositionOutOfRange(position));
            }
            fingerprint.insert(position);
        }
        Ok(fingerprint)
    }
}

/// Map one path string to its bit position: SHA-256 the UTF-8 bytes, fold
/// 256 bits down to 10 by XOR halving, and read the remainder big-endian.
fn bit_position(path: &str) -> usize {
    let digest = Sha256::digest(path.as_bytes());

    // Digest bits indexed least-significant-first within each byte.
    let mut bits = [false; DIGEST_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (digest[i / 8] >> (i % 8)) & 1 == 1;
    }

    // Halve 256 -> 128 -> 64 -> 32 -> 16 by XORing the upper half into the
    // lower half.
    let mut width = DIGEST_BITS;
    while width > 16 {
        width /= 2;
        for i in 0..width {
            bits[i] ^= bits[i + width];
        }
    }

    // Fold the remaining 6 high bits into the low 6 positions of the final
    // 10-bit window.
    for i in 0..(width - FOLDED_BITS) {
        bits[i] ^= bits[FOLDED_BITS + i];
    }

    // The first folded bit is the most significant of the 10-bit position.
    bits[..FOLDED_BITS]
        .iter()
        .fold(0usize, |position, &bit| (position << 1) | bit as usize)
}

/// Compute the raw-path fingerprint of a notation.
pub fn notation_fingerprint(
    notation: &Notation,
    store: &MonomerStore,
) -> Result<Fingerprint, NotationError> {
    let graph = build_graph(notation)?;
    let sets = find_paths(&graph, store);
    Ok(Fingerprint::from_paths(&sets.paths))
}

/// Compute the natural-analog-aware fingerprint of a notation: the union of
/// the raw-path and natural-path fingerprints.
pub fn notation_fingerprint_natural(
    notation: &Notation,
    store: &MonomerStore,
) -> Result<Fingerprint, NotationError> {
    let graph = build_graph(notation)?;
    let sets = find_paths(&graph, store);

    let mut fingerprint = Fingerprint::from_paths(&sets.natural_paths);
    fingerprint.union_with(&Fingerprint::from_paths(&sets.paths));
    Ok(fingerprint)
}
