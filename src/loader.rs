//! Parse plain HELM strings into [`Notation`]s.
//!
//! This covers the straightforward HELM subset used by the CLI database files
//! and the test fixtures: a `|`-separated polymer section, an optional
//! connection section, and trailing empty sections with an optional version
//! tag, e.g. `RNA1{R(A)P.R(G)P}|CHEM1{[Test_m]}$CHEM1,RNA1,1:R1-1:R1$$$V2.0`.
//! Polymer groups, ambiguity, and annotations belong to a full HELM2 parser
//! and are out of scope here.

use std::str::FromStr;

use crate::{
    errors::NotationError,
    notation::{Connection, Monomer, Notation, Polymer, PolymerType},
};

/// Parse one HELM string into a [`Notation`].
pub fn parse_helm(helm: &str) -> Result<Notation, NotationError> {
    let helm = helm.trim();
    if helm.is_empty() {
        return Err(NotationError::malformed("empty notation"));
    }

    let mut sections = helm.split('$');
    let polymer_section = sections
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| NotationError::malformed("missing polymer section"))?;
    let connection_section = sections.next().unwrap_or("");

    let mut polymers = Vec::new();
    for part in polymer_section.split('|') {
        polymers.push(parse_polymer(part)?);
    }

    let mut connections = Vec::new();
    if !connection_section.is_empty() {
        for part in connection_section.split('|') {
            connections.push(parse_connection(part)?);
        }
    }

    Ok(Notation::new(polymers, connections))
}

/// Parse one polymer, e.g. `RNA1{R(A)P.R(G)P}`.
fn parse_polymer(part: &str) -> Result<Polymer, NotationError> {
    let (id, rest) = part
        .split_once('{')
        .ok_or_else(|| NotationError::malformed(format!("polymer {part:?} has no monomer list")))?;
    let units = rest
        .strip_suffix('}')
        .ok_or_else(|| NotationError::malformed(format!("polymer {id:?} has an unclosed brace")))?;

    let kind = polymer_kind(id)?;
    if units.is_empty() {
        return Err(NotationError::EmptyPolymer { id: id.to_string() });
    }

    let monomers = split_monomer_units(units)
        .into_iter()
        .map(|unit| Monomer::new(unit, kind))
        .collect();
    Ok(Polymer::new(id, kind, monomers))
}

/// The polymer type is the alphabetic prefix of the polymer id.
fn polymer_kind(id: &str) -> Result<PolymerType, NotationError> {
    let prefix: String = id.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    PolymerType::from_str(&prefix).map_err(|_| NotationError::UnknownPolymerType {
        id: id.to_string(),
    })
}

/// Split a monomer list on dots, ignoring dots nested in brackets or parens.
fn split_monomer_units(units: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for c in units.chars() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                result.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    result.push(current);
    result
}

/// Parse one connection, e.g. `CHEM1,RNA1,1:R1-1:R1`.
fn parse_connection(part: &str) -> Result<Connection, NotationError> {
    let fields: Vec<&str> = part.split(',').collect();
    let [source_id, target_id, bond] = fields[..] else {
        return Err(NotationError::malformed(format!(
            "connection {part:?} must have three comma-separated fields"
        )));
    };

    let (source, target) = bond.split_once('-').ok_or_else(|| {
        NotationError::malformed(format!("connection {part:?} has no source-target bond"))
    })?;

    Ok(Connection::new(
        source_id,
        target_id,
        parse_unit_position(source, part)?,
        parse_unit_position(target, part)?,
    ))
}

/// The unit position is the integer before the attachment point, `14` in
/// `14:R3`.
fn parse_unit_position(bond_end: &str, context: &str) -> Result<usize, NotationError> {
    let position = bond_end.split(':').next().unwrap_or(bond_end);
    position.parse::<usize>().map_err(|_| {
        NotationError::malformed(format!(
            "connection {context:?} has a non-numeric unit position {position:?}"
        ))
    })
}
