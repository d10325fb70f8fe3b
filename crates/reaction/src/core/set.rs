use std::collections::HashMap;

use log::debug;

use crate::core::Reaction;

/// Collection of reactions, unique by [Reaction::key()]
///
/// Reactions keep the order in which their keys were first seen. Inserting a
/// reaction whose key is already present replaces the earlier reaction in
/// place, so the last one read wins.
///
/// ```rust
/// # use nrates_reaction::{Reaction, ReactionSet, RateData};
/// let mut reaction = Reaction {
///     source: "test".to_string(),
///     reactants: vec!["h1".to_string(), "h1".to_string()],
///     products: vec!["h2".to_string()],
///     data: RateData::SingleRate(1.0),
/// };
///
/// let mut set = ReactionSet::new();
/// set.insert(reaction.clone());
///
/// reaction.data = RateData::SingleRate(2.0);
/// assert!(set.insert(reaction).is_some());
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.iter().next().unwrap().data, RateData::SingleRate(2.0));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ReactionSet {
    reactions: Vec<Reaction>,
    positions: HashMap<String, usize>,
}

impl ReactionSet {
    /// Create a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reaction, returning the reaction it replaced if the key existed
    pub fn insert(&mut self, reaction: Reaction) -> Option<Reaction> {
        let key = reaction.key();
        match self.positions.get(&key) {
            Some(&i) => {
                debug!("Replacing {key:?}");
                Some(std::mem::replace(&mut self.reactions[i], reaction))
            }
            None => {
                self.positions.insert(key, self.reactions.len());
                self.reactions.push(reaction);
                None
            }
        }
    }

    /// Find a reaction by key
    pub fn get(&self, key: &str) -> Option<&Reaction> {
        self.positions.get(key).map(|&i| &self.reactions[i])
    }

    /// Iterate over reactions in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Reaction> {
        self.reactions.iter()
    }

    /// Number of unique reactions
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    /// True if there are no reactions
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReactionSet {
    type Item = &'a Reaction;
    type IntoIter = std::slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
