//! Result and Error types for the nuclide module

/// Type alias for `Result<T, nuclide::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nrates-nuclide`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Malformed nuclear-data XML
    #[error("failed to read nuclear data XML: {0}")]
    Xml(String),

    /// The (Z, A) pair is not in the reference data
    #[error("({z}, {a}) not present")]
    UnknownNuclide { z: u32, a: u32 },

    /// Atomic number beyond the element table
    #[error("no element symbol for Z = {0}")]
    UnknownElement(u32),

    /// Nuclide entry with missing or non-numeric fields
    #[error("invalid nuclide entry: {0}")]
    InvalidNuclide(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
