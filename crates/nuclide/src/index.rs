//! Lookup from (Z, A) pairs to species names

// standard library
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// external crates
use log::{debug, info};

// internal modules
use crate::error::{Error, Result};
use crate::nuclide::Nuclide;
use crate::reader::read_nuclear_data;

/// Immutable mapping from (Z, A) to a canonical species name
///
/// The index is built once from a reference dataset and then only queried.
/// It is an ordinary value, so a run owns its index and passes it by
/// reference to whatever needs to resolve nuclides.
///
/// ```rust
/// # use nrates_nuclide::{NuclideIndex, Nuclide};
/// let index = NuclideIndex::from_nuclides([Nuclide::new(92, 235), Nuclide::new(0, 1)]).unwrap();
///
/// assert_eq!(index.lookup(92, 235).unwrap(), "u235");
/// assert_eq!(index.lookup(0, 1).unwrap(), "n");
/// assert!(index.lookup(999, 999).is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct NuclideIndex {
    species: HashMap<(u32, u32), String>,
}

impl NuclideIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a collection of nuclides
    ///
    /// Pairs that appear more than once keep the last name seen, so isomers
    /// listed after their ground state replace it.
    pub fn from_nuclides<I: IntoIterator<Item = Nuclide>>(nuclides: I) -> Result<Self> {
        let mut index = Self::new();
        for nuclide in nuclides {
            let name = nuclide.name()?;
            index.insert(nuclide.z, nuclide.a, name);
        }
        Ok(index)
    }

    /// Build an index from the text of a nuclear-data XML document
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        Self::from_nuclides(read_nuclear_data(xml)?)
    }

    /// Build an index from a nuclear-data XML file
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    pub fn from_xml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading nuclide data from {}", path.as_ref().display());
        let index = Self::from_xml_str(&fs::read_to_string(path)?)?;
        info!("Indexed {} nuclides", index.len());
        Ok(index)
    }

    /// Add a species name for a (Z, A) pair, returning any name it replaced
    pub fn insert<S: Into<String>>(&mut self, z: u32, a: u32, name: S) -> Option<String> {
        let replaced = self.species.insert((z, a), name.into());
        if let Some(previous) = &replaced {
            debug!("({z}, {a}) already indexed as {previous:?}, replaced");
        }
        replaced
    }

    /// Find the species name for a (Z, A) pair
    ///
    /// Fails with [Error::UnknownNuclide] if the pair is not indexed.
    pub fn lookup(&self, z: u32, a: u32) -> Result<&str> {
        self.species
            .get(&(z, a))
            .map(String::as_str)
            .ok_or(Error::UnknownNuclide { z, a })
    }

    /// Check if a (Z, A) pair is indexed
    pub fn contains(&self, z: u32, a: u32) -> bool {
        self.species.contains_key(&(z, a))
    }

    /// Number of indexed pairs
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// True if nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
