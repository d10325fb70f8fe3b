// All nom parsers split amoung files for organisation
mod number;
mod species;

// Internal re-exports for convenience
pub(crate) use number::*;
pub(crate) use species::*;

/// Check if a line has no content other than whitespace
pub(crate) fn is_blank(i: &str) -> bool {
    i.trim().is_empty()
}
