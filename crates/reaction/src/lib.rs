//! Reading and writing nuclear reaction rate data
//!
//! Reaction rates arrive as line-oriented text, one block per reaction. Two
//! flavours of text are understood:
//!
//! | Flavour | Species given as    | Rate data                       | Reader             |
//! | ------- | ------------------- | ------------------------------- | ------------------ |
//! | fission | `<Z> <A>` pairs     | single rates and rate tables    | [fission_block()]  |
//! | general | species names       | any [RateData] variant          | [general_block()]  |
//!
//! Fission text is rewritten as general text with one record per product
//! branch, while general text is collected into a [ReactionSet] and written
//! out as a reaction-data XML document.
//!
//! - [convert_fission_text()] - fission text to general text
//! - [read_reactions()] - general text to a [ReactionSet]
//! - [write_reaction_xml()] - [ReactionSet] to XML
//! - [validate_reaction_xml()] - structural checks on a written document
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use nrates_nuclide::NuclideIndex;
//! # use nrates_reaction::*;
//! // Rewrite fission reactions with named species
//! let index = NuclideIndex::from_xml_file("path/to/nuclear_data.xml").unwrap();
//! convert_fission_file(&index, "fission.txt", "reactions.txt").unwrap();
//!
//! // Collect the reactions and write them as XML
//! let set = read_reaction_file("reactions.txt", &GeneralOptions::default()).unwrap();
//! write_reaction_xml_file(&set, "reactions.xml").unwrap();
//!
//! // Check the result
//! let n_reactions = validate_reaction_xml_file("reactions.xml").unwrap();
//! ```

// Modules
mod convert;
mod core;
mod error;
mod parsers;
mod reader;
mod validate;
mod writer;

// flatten public API and inline the documentation
#[doc(inline)]
pub use crate::core::*;

#[doc(inline)]
pub use convert::{
    convert_fission_file, convert_fission_text, read_reaction_file, read_reactions,
    validate_reaction_xml_file, write_reaction_xml_file,
};

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use reader::fission::{fission_block, Branch, FissionBlock};

#[doc(inline)]
pub use reader::general::{general_block, GeneralOptions};

#[doc(inline)]
pub use reader::rate::{non_smoker_fit, rate_table, single_rate, user_supplied_fit};

#[doc(inline)]
pub use reader::LineReader;

#[doc(inline)]
pub use validate::validate_reaction_xml;

#[doc(inline)]
pub use writer::text::write_reaction_text;

#[doc(inline)]
pub use writer::xml::write_reaction_xml;
