use crate::error::{Error, Result};

/// Type of rate data attached to a reaction
///
/// The `FromStr` trait is implemented for the type tags used in reaction text
/// files, and `Display` gives the tag back.
///
/// ```rust
/// # use nrates_reaction::RateKind;
/// # use std::str::FromStr;
/// assert_eq!(RateKind::from_str("rate_table").unwrap(), RateKind::RateTable);
/// assert_eq!(RateKind::NonSmokerFit.to_string(), "non_smoker_fit");
/// assert!(RateKind::from_str("fission_yield").is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RateKind {
    /// One rate value (`single_rate`)
    SingleRate,
    /// Rates tabulated against temperature (`rate_table`)
    RateTable,
    /// NON-SMOKER parameterised fits (`non_smoker_fit`)
    NonSmokerFit,
    /// Free-form user properties (`user_supplied_fit`)
    UserSuppliedFit,
}

impl RateKind {
    /// Type tag used in reaction text files
    pub fn tag(&self) -> &'static str {
        match self {
            RateKind::SingleRate => "single_rate",
            RateKind::RateTable => "rate_table",
            RateKind::NonSmokerFit => "non_smoker_fit",
            RateKind::UserSuppliedFit => "user_supplied_fit",
        }
    }
}

impl std::str::FromStr for RateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "single_rate" => Ok(RateKind::SingleRate),
            "rate_table" => Ok(RateKind::RateTable),
            "non_smoker_fit" => Ok(RateKind::NonSmokerFit),
            "user_supplied_fit" => Ok(RateKind::UserSuppliedFit),
            _ => Err(Error::InvalidRateType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
