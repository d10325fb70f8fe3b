use std::collections::BTreeMap;

use crate::core::RateKind;
use crate::error::{Error, Result};

/// Rate data attached to a reaction
///
/// Exactly one representation is active for any reaction, and the
/// [RateKind] is always derived from the variant so the two can not
/// disagree.
///
/// | Variant           | Tag                 | Payload                          |
/// | ----------------- | ------------------- | -------------------------------- |
/// | `SingleRate`      | `single_rate`       | one rate value                   |
/// | `RateTable`       | `rate_table`        | [TableEntry] per temperature     |
/// | `NonSmokerFit`    | `non_smoker_fit`    | [NonSmokerFit] per fit           |
/// | `UserSuppliedFit` | `user_supplied_fit` | [UserRate] property mapping      |
#[derive(Debug, Clone, PartialEq)]
pub enum RateData {
    /// One rate value
    SingleRate(f64),
    /// Rates tabulated against T9, in file order
    RateTable(Vec<TableEntry>),
    /// Parameterised fits, in file order
    NonSmokerFit(Vec<NonSmokerFit>),
    /// Free-form properties for a user-supplied rate function
    UserSuppliedFit(UserRate),
}

impl RateData {
    /// The type of rate data
    pub fn kind(&self) -> RateKind {
        match self {
            RateData::SingleRate(_) => RateKind::SingleRate,
            RateData::RateTable(_) => RateKind::RateTable,
            RateData::NonSmokerFit(_) => RateKind::NonSmokerFit,
            RateData::UserSuppliedFit(_) => RateKind::UserSuppliedFit,
        }
    }

    /// Multiply rates by a branching factor
    ///
    /// A single rate is multiplied directly, and every rate in a table is
    /// multiplied independently. The T9 and SEF columns are left untouched.
    ///
    /// Fits have no rate values to scale and fail with
    /// [Error::InvalidRateType].
    ///
    /// ```rust
    /// # use nrates_reaction::{RateData, TableEntry};
    /// let mut data = RateData::RateTable(vec![TableEntry::new(0.1, 2.0, 1.5)]);
    /// data.scale(0.5).unwrap();
    /// assert_eq!(data, RateData::RateTable(vec![TableEntry::new(0.1, 1.0, 1.5)]));
    /// ```
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        match self {
            RateData::SingleRate(rate) => *rate *= factor,
            RateData::RateTable(entries) => {
                entries.iter_mut().for_each(|entry| entry.rate *= factor)
            }
            RateData::NonSmokerFit(_) | RateData::UserSuppliedFit(_) => {
                return Err(Error::InvalidRateType(self.kind().to_string()))
            }
        }
        Ok(())
    }
}

/// One row of a rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// Temperature (10^9 K)
    pub t9: f64,
    /// Rate at this temperature
    pub rate: f64,
    /// Screening enhancement factor
    pub sef: f64,
}

impl TableEntry {
    /// Create a new table row
    pub fn new(t9: f64, rate: f64, sef: f64) -> Self {
        Self { t9, rate, sef }
    }
}

/// One NON-SMOKER fit
///
/// The rate is described by eight coefficients `a1..a8`, along with the
/// target and final nuclei and the temperature range over which the fit is
/// valid.
#[derive(Debug, Clone, PartialEq)]
pub struct NonSmokerFit {
    /// Free text note describing the fit
    pub note: String,
    /// Target atomic number
    pub zt: u32,
    /// Target mass number
    pub at: u32,
    /// Final nucleus atomic number
    pub zf: u32,
    /// Final nucleus mass number
    pub af: u32,
    /// Reaction Q-value (MeV)
    pub q: f64,
    /// Target ground state spin
    pub spin_target: f64,
    /// Final nucleus ground state spin
    pub spin_final: f64,
    /// Lowest temperature for the Hauser-Feshbach calculation (T9)
    pub t_low_hf: f64,
    /// Lowest temperature for the fit (T9)
    pub t_low_fit: f64,
    /// Highest temperature for the fit (T9)
    pub t_high_fit: f64,
    /// Accuracy of the fit
    pub accuracy: f64,
    /// Fit coefficients `a1..a8`
    pub coefficients: [f64; 8],
}

impl NonSmokerFit {
    /// Upper temperature bound assigned to every fit (T9)
    pub const T_HIGH_FIT: f64 = 10.0;
}

/// Key for a user-supplied rate property
///
/// A property is named, and optionally qualified by up to two tags. For
/// example, a `halflife` property could be tagged by the nuclide it refers
/// to.
///
/// ```rust
/// # use nrates_reaction::PropertyKey;
/// let key = PropertyKey::new("halflife").with_tag("X");
/// assert_eq!(key.to_string(), "(halflife, X)");
/// assert_eq!(PropertyKey::new("note").to_string(), "note");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey {
    /// Property name
    pub name: String,
    /// Qualifying tags, at most two
    pub tags: Vec<String>,
}

impl PropertyKey {
    /// Untagged property key
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Add a qualifying tag
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "({}, {})", self.name, self.tags.join(", "))
        }
    }
}

/// Properties of a user-supplied rate function
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRate {
    /// Identifier of the user rate function
    pub key: String,
    /// Number of tags declared for the properties
    pub tag_arity: usize,
    /// Property values by key
    pub properties: BTreeMap<PropertyKey, String>,
}

impl UserRate {
    /// Get a property value
    pub fn get(&self, key: &PropertyKey) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
