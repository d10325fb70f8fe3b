use nrates_utils::f;

use crate::core::{RateData, RateKind};
use crate::error::Result;

/// A nuclear reaction with its rate data
///
/// Species are kept in the order they were read, which is preserved in every
/// output.
///
/// ```rust
/// # use nrates_reaction::{Reaction, RateData, RateKind};
/// let reaction = Reaction {
///     source: "test".to_string(),
///     reactants: vec!["n".to_string(), "u235".to_string()],
///     products: vec!["u236".to_string()],
///     data: RateData::SingleRate(2.5),
/// };
///
/// assert_eq!(reaction.kind(), RateKind::SingleRate);
/// assert_eq!(reaction.to_string(), "n + u235 -> u236");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Provenance of the rate data
    pub source: String,
    /// Reactant species names
    pub reactants: Vec<String>,
    /// Product species names
    pub products: Vec<String>,
    /// Rate data
    pub data: RateData,
}

impl Reaction {
    /// Type of rate data attached to the reaction
    pub fn kind(&self) -> RateKind {
        self.data.kind()
    }

    /// Key used to identify duplicate reactions
    ///
    /// Built from the source, reactants, and products. Two reactions with the
    /// same key are considered the same entry in a [ReactionSet](crate::ReactionSet).
    pub fn key(&self) -> String {
        f!("{}: {}", self.source, self)
    }

    /// The reaction with rates multiplied by `factor`
    ///
    /// See [RateData::scale()] for what is scaled.
    ///
    /// ```rust
    /// # use nrates_reaction::{Reaction, RateData};
    /// let reaction = Reaction {
    ///     source: "test".to_string(),
    ///     reactants: vec!["u235".to_string()],
    ///     products: vec!["u235".to_string()],
    ///     data: RateData::SingleRate(2.5),
    /// };
    ///
    /// let reaction = reaction.scaled(0.5).unwrap();
    /// assert_eq!(reaction.data, RateData::SingleRate(1.25));
    /// ```
    pub fn scaled(mut self, factor: f64) -> Result<Self> {
        self.data.scale(factor)?;
        Ok(self)
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", reaction_string(&self.reactants, &self.products))
    }
}

/// Human readable `a + b -> c + d` form of a reaction
pub(crate) fn reaction_string<S: AsRef<str>>(reactants: &[S], products: &[S]) -> String {
    let join = |species: &[S]| {
        species
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" + ")
    };
    f!("{} -> {}", join(reactants), join(products))
}
