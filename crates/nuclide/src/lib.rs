//! Nuclide identity and lookup for reaction-rate conversion
//!
//! Reaction text files refer to nuclides by their atomic and mass numbers,
//! while reaction-data documents use canonical species names such as `u235`
//! or `n`. This crate provides the translation between the two.
//!
//! - [Nuclide] - a (Z, A, state) triple and its canonical name
//! - [NuclideIndex] - lookup from (Z, A) to a species name
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use nrates_nuclide::NuclideIndex;
//! // Index every nuclide in a nuclear-data XML file
//! let index = NuclideIndex::from_xml_file("path/to/nuclear_data.xml").unwrap();
//!
//! // Resolve a pair to its species name
//! assert_eq!(index.lookup(92, 235).unwrap(), "u235");
//! ```

// Modules
mod element;
mod error;
mod index;
mod nuclide;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use element::element_symbol;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use index::NuclideIndex;

#[doc(inline)]
pub use nuclide::Nuclide;

#[doc(inline)]
pub use reader::read_nuclear_data;
