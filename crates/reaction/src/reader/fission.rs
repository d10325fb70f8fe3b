//! Parser for fission reaction blocks
//!
//! Fission blocks name every species by its (Z, A) pair, and may list any
//! number of product branches that share the reactants and rate data:
//!
//! ```text
//! <type>              single_rate or rate_table
//! <source>
//! <n_reactants>
//! <Z> <A>             repeated n_reactants times
//! <rate data>
//! <Z> <A> ... <f>     one line per product branch, with branching factor f
//! <blank line>
//! ```

use std::io::BufRead;

use log::{debug, trace, warn};
use nrates_nuclide::NuclideIndex;

use super::rate::{rate_table, single_rate};
use super::LineReader;
use crate::core::{reaction_string, RateData, RateKind, Reaction};
use crate::error::{Error, Result};

/// One product branch of a fission block
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Product species names
    pub products: Vec<String>,
    /// Factor applied to the rates for this branch
    pub factor: f64,
}

/// A fully validated fission block
#[derive(Debug, Clone, PartialEq)]
pub struct FissionBlock {
    /// Provenance of the rate data
    pub source: String,
    /// Reactant species names
    pub reactants: Vec<String>,
    /// Unscaled rate data shared by every branch
    pub data: RateData,
    /// Product branches in file order
    pub branches: Vec<Branch>,
}

impl FissionBlock {
    /// One reaction per branch, with rates scaled by the branching factor
    pub fn records(&self) -> Result<Vec<Reaction>> {
        self.branches
            .iter()
            .map(|branch| {
                let reaction = Reaction {
                    source: self.source.clone(),
                    reactants: self.reactants.clone(),
                    products: branch.products.clone(),
                    data: self.data.clone(),
                };
                reaction.scaled(branch.factor)
            })
            .collect()
    }
}

/// Running totals of atomic and mass numbers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    z: u32,
    a: u32,
}

/// Read the next fission block
///
/// Returns `None` when a blank line or the end of input is found where the
/// type tag should be.
///
/// Every species is resolved through the `index`, and every branch is checked
/// to conserve the summed Z and A of the reactants. Any failure is returned
/// immediately, before the block is handed back.
pub fn fission_block<R: BufRead>(
    reader: &mut LineReader<R>,
    index: &NuclideIndex,
) -> Result<Option<FissionBlock>> {
    let Some(tag) = reader.next_tag()? else {
        return Ok(None);
    };
    let kind: RateKind = tag.parse()?;
    debug!("Fission block at line {}: {kind}", reader.line_number());

    let source = reader.next_line()?.trim().to_string();
    debug!("Source      = {source:?}");

    let n_reactants = reader.next_int()?;
    let mut reactants = Vec::new();
    let mut totals = Totals::default();
    for _ in 0..n_reactants {
        let fields = reader.next_tokens()?;
        let [z, a, rest @ ..] = fields.as_slice() else {
            return Err(reader.unexpected_length("2", fields.len()));
        };
        if !rest.is_empty() {
            warn!("Line {} has extra fields after Z and A", reader.line_number());
        }
        let (z, a) = (reader.uint_field(z)?, reader.uint_field(a)?);
        reactants.push(index.lookup(z, a)?.to_string());
        totals.z += z;
        totals.a += a;
    }
    debug!("Reactants   = {reactants:?}");

    let data = match kind {
        RateKind::SingleRate => single_rate(reader)?,
        RateKind::RateTable => rate_table(reader)?,
        _ => return Err(Error::InvalidRateType(tag)),
    };

    let mut branches = Vec::new();
    while let Some(line) = reader.next_content()? {
        let fields = line
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<String>>();
        let branch = product_branch(reader, index, &fields, &reactants, totals)?;
        trace!("Branch      = {branch:?}");
        branches.push(branch);
    }

    if branches.is_empty() {
        warn!("No product branches for {:?}, nothing will be written", source);
    }
    debug!("Branches    = {}", branches.len());

    Ok(Some(FissionBlock {
        source,
        reactants,
        data,
        branches,
    }))
}

/// Resolve and validate one product line against the reactants
fn product_branch<R: BufRead>(
    reader: &LineReader<R>,
    index: &NuclideIndex,
    fields: &[String],
    reactants: &[String],
    expected: Totals,
) -> Result<Branch> {
    // Z/A pairs followed by the factor
    if fields.len() < 3 || fields.len() % 2 == 0 {
        return Err(reader.unexpected_length("3, 5, 7, ...", fields.len()));
    }
    let (pairs, factor) = fields.split_at(fields.len() - 1);

    let mut products = Vec::with_capacity(pairs.len() / 2);
    let mut totals = Totals::default();
    for pair in pairs.chunks_exact(2) {
        let (z, a) = (reader.uint_field(&pair[0])?, reader.uint_field(&pair[1])?);
        products.push(index.lookup(z, a)?.to_string());
        totals.z += z;
        totals.a += a;
    }

    if totals != expected {
        return Err(Error::ConservationViolation {
            reaction: reaction_string(reactants, &products),
        });
    }

    Ok(Branch {
        products,
        factor: reader.float_field(&factor[0])?,
    })
}
