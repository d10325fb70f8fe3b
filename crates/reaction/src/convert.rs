//! End-to-end conversions between reaction text and reaction-data XML

use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};
use nrates_nuclide::NuclideIndex;

use crate::core::ReactionSet;
use crate::error::Result;
use crate::reader::fission::fission_block;
use crate::reader::general::{general_block, GeneralOptions};
use crate::reader::LineReader;
use crate::validate::validate_reaction_xml;
use crate::writer::init_writer;
use crate::writer::text::write_reaction_text;
use crate::writer::xml::write_reaction_xml;

/// Rewrite fission reaction text as general reaction text
///
/// Every block is read and validated in full before any of its records are
/// written. Each product branch becomes one record with the rates scaled by
/// the branching factor. Returns the number of records written.
///
/// Processing stops at the first error, so the output may hold the records of
/// earlier blocks.
///
/// ```rust
/// # use nrates_nuclide::NuclideIndex;
/// # use nrates_reaction::convert_fission_text;
/// let mut index = NuclideIndex::new();
/// index.insert(0, 1, "n");
/// index.insert(92, 235, "u235");
/// index.insert(92, 236, "u236");
///
/// let input = "single_rate\ntest\n2\n92 235\n0 1\n2.5\n92 236 0.9\n";
/// let mut output = Vec::new();
///
/// let records = convert_fission_text(&index, input.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(records, 1);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "single_rate\ntest\n2\nu235\nn\n1\nu236\n2.25\n\n"
/// );
/// ```
pub fn convert_fission_text<R: BufRead, W: Write>(
    index: &NuclideIndex,
    input: R,
    output: &mut W,
) -> Result<usize> {
    rewrite_fission(index, &mut LineReader::new(input), output)
}

/// Rewrite a fission reaction text file, see [convert_fission_text()]
pub fn convert_fission_file<P: AsRef<Path>, Q: AsRef<Path>>(
    index: &NuclideIndex,
    input: P,
    output: Q,
) -> Result<usize> {
    info!("Reading fission reactions from {}", input.as_ref().display());
    let mut reader = LineReader::from_file(input)?;
    let mut writer = init_writer(output)?;
    rewrite_fission(index, &mut reader, &mut writer)
}

/// Read every general reaction block into a set
///
/// Reading stops at the first blank line or the end of input where a type tag
/// is expected. Later reactions replace earlier ones with the same key.
///
/// ```rust
/// # use nrates_reaction::{read_reactions, GeneralOptions, RateData};
/// let input = "single_rate\ntest\n1\nn\n1\nh1\n1.5e-3\n\n";
/// let set = read_reactions(input.as_bytes(), &GeneralOptions::default()).unwrap();
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.iter().next().unwrap().data, RateData::SingleRate(1.5e-3));
/// ```
pub fn read_reactions<R: BufRead>(input: R, options: &GeneralOptions) -> Result<ReactionSet> {
    collect_reactions(&mut LineReader::new(input), options)
}

/// Read every general reaction block in a file, see [read_reactions()]
pub fn read_reaction_file<P: AsRef<Path>>(
    path: P,
    options: &GeneralOptions,
) -> Result<ReactionSet> {
    info!("Reading reactions from {}", path.as_ref().display());
    collect_reactions(&mut LineReader::from_file(path)?, options)
}

/// Write a set of reactions to an XML file, see [write_reaction_xml()]
pub fn write_reaction_xml_file<P: AsRef<Path>>(set: &ReactionSet, path: P) -> Result<()> {
    info!("Writing reaction data to {}", path.as_ref().display());
    let mut writer = init_writer(path)?;
    write_reaction_xml(set, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Check a reaction-data XML file, see [validate_reaction_xml()]
pub fn validate_reaction_xml_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    info!("Validating {}", path.as_ref().display());
    let xml = std::fs::read_to_string(path)?;
    validate_reaction_xml(&xml)
}

fn rewrite_fission<R: BufRead, W: Write>(
    index: &NuclideIndex,
    reader: &mut LineReader<R>,
    output: &mut W,
) -> Result<usize> {
    let mut n_records = 0;

    while let Some(block) = fission_block(reader, index)? {
        for record in block.records()? {
            write_reaction_text(output, &record)?;
            n_records += 1;
        }
    }

    output.flush()?;
    info!("Written {n_records} fission records");
    Ok(n_records)
}

fn collect_reactions<R: BufRead>(
    reader: &mut LineReader<R>,
    options: &GeneralOptions,
) -> Result<ReactionSet> {
    let mut set = ReactionSet::new();
    let mut n_blocks = 0;

    while let Some(reaction) = general_block(reader, options)? {
        n_blocks += 1;
        set.insert(reaction);
    }

    debug!("Read {n_blocks} blocks");
    info!("Collected {} unique reactions", set.len());
    Ok(set)
}
