// Core data types split amoung files for organisation
mod kind;
mod rate;
mod reaction;
mod set;

pub use kind::RateKind;
pub use rate::{NonSmokerFit, PropertyKey, RateData, TableEntry, UserRate};
pub use reaction::Reaction;
pub use set::ReactionSet;

pub(crate) use reaction::reaction_string;
