//! Parsers for each rate data variant
//!
//! Every parser reads exactly the lines belonging to its rate data block,
//! starting from the line after the species lists.

use std::collections::BTreeMap;
use std::io::BufRead;

use log::{debug, trace, warn};
use nrates_utils::f;

use super::LineReader;
use crate::core::{NonSmokerFit, PropertyKey, RateData, TableEntry, UserRate};
use crate::error::{Error, Result};

/// Number of fields on a NON-SMOKER fit metadata line
const FIT_METADATA_FIELDS: usize = 10;

/// Number of coefficients on each NON-SMOKER coefficient line
const FIT_COEFFICIENTS_PER_LINE: usize = 4;

/// Property name that never takes tags
const NOTE_PROPERTY: &str = "note";

/// Read a `single_rate` block: one line with the rate value
pub fn single_rate<R: BufRead>(reader: &mut LineReader<R>) -> Result<RateData> {
    let rate = reader.next_float()?;
    debug!("Rate        = {rate}");
    Ok(RateData::SingleRate(rate))
}

/// Read a `rate_table` block
///
/// A count line is followed by that many `<T9> <rate> [<sef>]` lines. The
/// screening enhancement factor is 1 when omitted.
pub fn rate_table<R: BufRead>(reader: &mut LineReader<R>) -> Result<RateData> {
    let n_entries = reader.next_int()?;
    let mut entries = Vec::new();

    for _ in 0..n_entries {
        let fields = reader.next_tokens()?;
        let entry = match fields.as_slice() {
            [t9, rate] => TableEntry::new(reader.float_field(t9)?, reader.float_field(rate)?, 1.0),
            [t9, rate, sef] => TableEntry::new(
                reader.float_field(t9)?,
                reader.float_field(rate)?,
                reader.float_field(sef)?,
            ),
            _ => return Err(reader.unexpected_length("2 or 3", fields.len())),
        };
        entries.push(entry);
    }

    debug!("Table rows  = {}", entries.len());
    trace!("Table       = {entries:?}");
    Ok(RateData::RateTable(entries))
}

/// Read a `non_smoker_fit` block
///
/// A count line is followed by that many fits, each made up of:
///
/// - a note line
/// - a metadata line `Zt At Zf Af Q spint spinf TlowHf Tlowfit acc`
/// - two lines of four coefficients, `a1..a4` and `a5..a8`
/// - a separator line
///
/// Note that an empty note line is skipped and the line after it is taken as
/// the note instead. An intentionally blank note therefore has to be written
/// as two empty lines.
pub fn non_smoker_fit<R: BufRead>(reader: &mut LineReader<R>) -> Result<RateData> {
    let n_fits = reader.next_int()?;
    let mut fits = Vec::new();

    for _ in 0..n_fits {
        let mut note = reader.next_line()?.trim_end().to_string();
        if note.is_empty() {
            note = reader.next_line()?.trim_end().to_string();
        }

        let mut fit = fit_metadata(reader, note)?;
        fit_coefficients(reader, &mut fit.coefficients[..4])?;
        fit_coefficients(reader, &mut fit.coefficients[4..])?;
        reader.skip_separator()?;

        trace!("Fit         = {fit:?}");
        fits.push(fit);
    }

    debug!("Fits        = {}", fits.len());
    Ok(RateData::NonSmokerFit(fits))
}

/// Read a `user_supplied_fit` block
///
/// A property count and a tag arity (0, 1, or 2) are followed by that many
/// property lines, split on `delimiter` or whitespace if `None`:
///
/// ```text
/// <name> [<tag1>] [<tag2>] <value...>
/// ```
///
/// The `note` property never takes tags, whatever the declared arity. The
/// remaining fields are joined by single spaces to form the value.
pub fn user_supplied_fit<R: BufRead>(
    reader: &mut LineReader<R>,
    key: String,
    delimiter: Option<&str>,
) -> Result<RateData> {
    let n_properties = reader.next_int()?;
    let tag_arity = reader.next_int()?;
    if tag_arity > 2 {
        return Err(Error::InvalidTagArity(tag_arity));
    }

    let mut properties = BTreeMap::new();
    for _ in 0..n_properties {
        let fields = reader.next_fields(delimiter)?;
        let Some(name) = fields.first().filter(|name| !name.is_empty()) else {
            return Err(reader.format_error());
        };

        let n_tags = if name == NOTE_PROPERTY { 0 } else { tag_arity };
        if fields.len() <= n_tags {
            return Err(reader.unexpected_length(f!("at least {}", n_tags + 1), fields.len()));
        }

        let property = fields[1..=n_tags]
            .iter()
            .fold(PropertyKey::new(name.as_str()), |key, tag| key.with_tag(tag.as_str()));
        let value = fields[n_tags + 1..].join(" ").trim().to_string();

        trace!("Property    = {property} -> {value:?}");
        if properties.insert(property, value).is_some() {
            warn!("Line {} repeats a property, keeping the last", reader.line_number());
        }
    }

    debug!("Properties  = {}", properties.len());
    Ok(RateData::UserSuppliedFit(UserRate {
        key,
        tag_arity,
        properties,
    }))
}

/// Read the metadata line of a fit, leaving the coefficients at zero
fn fit_metadata<R: BufRead>(reader: &mut LineReader<R>, note: String) -> Result<NonSmokerFit> {
    let fields = reader.next_tokens()?;
    if fields.len() < FIT_METADATA_FIELDS {
        return Err(reader.unexpected_length(f!("{FIT_METADATA_FIELDS}"), fields.len()));
    }

    Ok(NonSmokerFit {
        note,
        zt: reader.uint_field(&fields[0])?,
        at: reader.uint_field(&fields[1])?,
        zf: reader.uint_field(&fields[2])?,
        af: reader.uint_field(&fields[3])?,
        q: reader.float_field(&fields[4])?,
        spin_target: reader.float_field(&fields[5])?,
        spin_final: reader.float_field(&fields[6])?,
        t_low_hf: reader.float_field(&fields[7])?,
        t_low_fit: reader.float_field(&fields[8])?,
        t_high_fit: NonSmokerFit::T_HIGH_FIT,
        accuracy: reader.float_field(&fields[9])?,
        coefficients: [0.0; 8],
    })
}

/// Read one line of fit coefficients into `coefficients`
fn fit_coefficients<R: BufRead>(
    reader: &mut LineReader<R>,
    coefficients: &mut [f64],
) -> Result<()> {
    let fields = reader.next_tokens()?;
    if fields.len() < FIT_COEFFICIENTS_PER_LINE {
        return Err(reader.unexpected_length(f!("{FIT_COEFFICIENTS_PER_LINE}"), fields.len()));
    }

    for (coefficient, field) in coefficients.iter_mut().zip(&fields) {
        *coefficient = reader.float_field(field)?;
    }
    Ok(())
}
