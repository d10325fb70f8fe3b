//! `nrates` converts nuclear reaction rate data between line-oriented text
//! and reaction-data XML
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of workspace crates.
#[doc(inline)]
pub use nrates_utils as utils;

#[doc(inline)]
pub use nrates_nuclide as nuclide;

#[doc(inline)]
pub use nrates_reaction as reaction;
