//! Result and Error types for the reaction module

/// Type alias for `Result<T, reaction::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `nrates-reaction`
///
/// Every variant is fatal to a conversion run. Line numbers refer to the
/// 1-based line of the input text that was being read.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Nuclide lookup failures, including unknown (Z, A) pairs
    #[error(transparent)]
    Nuclide(#[from] nrates_nuclide::Error),

    /// Input ended part way through a reaction block
    #[error("unexpected end of input after line {line}")]
    EndOfInput { line: usize },

    /// Malformed number or missing content on a line
    #[error("line {line}: could not parse {content:?}")]
    FormatError { line: usize, content: String },

    /// Wrong number of fields on a line
    #[error("line {line}: expected {expected} fields, found {found}")]
    UnexpectedLength {
        line: usize,
        expected: String,
        found: usize,
    },

    /// Unrecognised reaction type tag, or a type the operation does not support
    #[error("invalid rate type {0:?}")]
    InvalidRateType(String),

    /// User-supplied fit declared with a tag arity other than 0, 1 or 2
    #[error("invalid number of property tags: {0}")]
    InvalidTagArity(usize),

    /// Summed Z or A differs between reactants and products
    #[error("invalid reaction: {reaction}")]
    ConservationViolation { reaction: String },

    /// Failure reading or writing XML
    #[error("XML failure: {0}")]
    Xml(String),

    /// Well-formed XML that is not a valid reaction-data document
    #[error("invalid reaction data document: {0}")]
    InvalidDocument(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
