// Parsed HELM data model
pub mod notation;

// Plain-HELM string parsing
pub mod loader;

// Monomer graph representation
pub mod graph;

// Notation -> graph construction
pub mod builder;

// Natural-analog monomer lookup
pub mod monomers;

// The hard bit: canonical path enumeration
pub mod paths;

// Path hashing into 1024-bit fingerprints
pub mod fingerprint;

// Tanimoto similarity and subset tests
pub mod similarity;

// Parallel batch similarity search
pub mod search;

// Error types
pub mod errors;
