//! Write operations for reactions
//!
//! - [text] - the line-oriented reaction text format
//! - [xml] - reaction-data XML documents

pub mod text;
pub mod xml;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;

/// Initialise a writer from anything that can be turned into a path
pub(crate) fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
