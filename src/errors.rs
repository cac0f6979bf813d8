//! Error types shared across the crate.
//!
//! A [`NotationError`] is fatal to one notation's computation but must never
//! poison another notation's state; batch callers isolate failures per item.
//! A [`NaturalAnalogError`] is recoverable: path enumeration substitutes the
//! bracket-wrapped original identifier and keeps going.

use thiserror::Error;

use crate::notation::PolymerType;

/// Malformed or inconsistent polymer/connection data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("polymer {id:?} has no monomers")]
    EmptyPolymer { id: String },

    #[error("connection references unknown polymer {id:?}")]
    UnknownPolymer { id: String },

    #[error("connection unit {unit} is out of range for polymer {id:?} ({len} units)")]
    UnitOutOfRange { id: String, unit: usize, len: usize },

    #[error("polymer id {id:?} does not start with a supported polymer type")]
    UnknownPolymerType { id: String },

    #[error("malformed HELM notation: {0}")]
    Malformed(String),
}

impl NotationError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// No natural analog is known for a modified monomer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no natural analog known for {kind} monomer {id:?}")]
pub struct NaturalAnalogError {
    pub kind: PolymerType,
    pub id: String,
}

/// Thrown when parsing a serialized fingerprint like `{3, 17, 512}` fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFingerprintError {
    #[error("fingerprint text must be enclosed in braces")]
    MissingBraces,

    #[error("invalid bit position {0:?}")]
    InvalidPosition(String),

    #[error("bit position {0} exceeds the fingerprint size")]
    PositionOutOfRange(usize),
}
