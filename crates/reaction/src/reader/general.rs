//! Parser for general reaction blocks
//!
//! General blocks name every species directly, one per line, and may carry any
//! of the rate data variants:
//!
//! ```text
//! <type>
//! <key>               user_supplied_fit only
//! <source>
//! <n_reactants>
//! <species>           repeated n_reactants times
//! <n_products>
//! <species>           repeated n_products times
//! <rate data>
//! <separator>         single_rate, rate_table, and user_supplied_fit only
//! ```
//!
//! This is exactly what the fission converter writes, so its output can be
//! read back here.

use std::io::BufRead;

use log::debug;
use nrates_nuclide::NuclideIndex;

use super::rate::{non_smoker_fit, rate_table, single_rate, user_supplied_fit};
use super::LineReader;
use crate::core::{RateKind, Reaction};
use crate::error::Result;
use crate::parsers::nuclide_pair;

/// Options for reading general reaction blocks
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralOptions<'a> {
    /// Delimiter for user-supplied fit properties, whitespace if `None`
    pub user_delimiter: Option<&'a str>,
    /// Resolve species given as `<Z> <A>` pairs through this index
    pub index: Option<&'a NuclideIndex>,
}

/// Read the next general reaction block
///
/// Returns `None` when a blank line or the end of input is found where the
/// type tag should be.
pub fn general_block<R: BufRead>(
    reader: &mut LineReader<R>,
    options: &GeneralOptions,
) -> Result<Option<Reaction>> {
    let Some(tag) = reader.next_tag()? else {
        return Ok(None);
    };
    let kind: RateKind = tag.parse()?;
    debug!("Reaction block at line {}: {kind}", reader.line_number());

    let key = match kind {
        RateKind::UserSuppliedFit => reader.next_line()?.trim().to_string(),
        _ => String::new(),
    };

    let source = reader.next_line()?.trim().to_string();
    let reactants = species_list(reader, options.index)?;
    let products = species_list(reader, options.index)?;
    debug!("Source      = {source:?}");
    debug!("Reactants   = {reactants:?}");
    debug!("Products    = {products:?}");

    let data = match kind {
        RateKind::SingleRate => single_rate(reader)?,
        RateKind::RateTable => rate_table(reader)?,
        RateKind::NonSmokerFit => non_smoker_fit(reader)?,
        RateKind::UserSuppliedFit => user_supplied_fit(reader, key, options.user_delimiter)?,
    };

    // fits end with their own separator lines
    if kind != RateKind::NonSmokerFit {
        reader.skip_separator()?;
    }

    Ok(Some(Reaction {
        source,
        reactants,
        products,
        data,
    }))
}

/// Read a count line followed by that many species lines
fn species_list<R: BufRead>(
    reader: &mut LineReader<R>,
    index: Option<&NuclideIndex>,
) -> Result<Vec<String>> {
    let n_species = reader.next_int()?;
    let mut species = Vec::new();

    for _ in 0..n_species {
        let line = reader.next_line()?.trim().to_string();
        if line.is_empty() {
            return Err(reader.format_error());
        }

        let pair = nuclide_pair(&line).ok().map(|(_, pair)| pair);
        let name = match (index, pair) {
            (Some(index), Some((z, a))) => index.lookup(z, a)?.to_string(),
            _ => line,
        };
        species.push(name);
    }

    Ok(species)
}
