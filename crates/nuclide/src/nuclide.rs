//! Nuclide identity and naming

use nrates_utils::f;

use crate::element::element_symbol;
use crate::error::{Error, Result};

/// Definition for a particular nuclide
///
/// A nuclide is identified by its atomic number `z`, mass number `a`, and an
/// optional isomeric `state` label (empty for the ground state).
///
/// The canonical species name is `<element><mass number><state>` with a
/// lowercase element symbol, except for the free neutron which is simply `n`.
///
/// ```rust
/// # use nrates_nuclide::Nuclide;
/// assert_eq!(Nuclide::new(92, 235).name().unwrap(), "u235");
/// assert_eq!(Nuclide::new(0, 1).name().unwrap(), "n");
///
/// let isomer = Nuclide { z: 95, a: 242, state: "m".to_string() };
/// assert_eq!(isomer.name().unwrap(), "am242m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nuclide {
    /// Atomic number (proton count)
    pub z: u32,
    /// Mass number (nucleon count)
    pub a: u32,
    /// Isomeric state label, empty for the ground state
    pub state: String,
}

impl Nuclide {
    /// Ground state nuclide for a (Z, A) pair
    pub fn new(z: u32, a: u32) -> Self {
        Self {
            z,
            a,
            state: String::new(),
        }
    }

    /// Canonical species name for the nuclide
    ///
    /// Fails with [Error::UnknownElement] if `z` is beyond the element table.
    pub fn name(&self) -> Result<String> {
        if self.z == 0 && self.a == 1 {
            return Ok("n".to_string());
        }

        let symbol = element_symbol(self.z).ok_or(Error::UnknownElement(self.z))?;
        Ok(f!("{}{}{}", symbol, self.a, self.state))
    }
}
