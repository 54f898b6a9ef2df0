use crate::error::CycleError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The shortest cycle length the [`CyclePolicy::Typical`] policy accepts, in days.
pub const TYPICAL_MIN_DAYS: i32 = 21;

/// The longest cycle length the [`CyclePolicy::Typical`] policy accepts, in days.
pub const TYPICAL_MAX_DAYS: i32 = 35;

/// A whole number of days between the start of one period and the start of the next.
///
/// Parsing accepts *any* integer, including zero and negative values. Whether such a length is
/// acceptable is a separate question, answered by a [`CyclePolicy`] at prediction time.
///
/// ```
/// use nextperiod::CycleLength;
///
/// let cycle: CycleLength = "28".parse().unwrap();
/// assert_eq!(28, cycle.days());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleLength(i32);

impl CycleLength {
    /// Returns a new [`CycleLength`] of the given number of days.
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    /// Returns the length in days.
    pub fn days(&self) -> i32 {
        self.0
    }
}

impl From<i32> for CycleLength {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl FromStr for CycleLength {
    type Err = CycleError;

    /// Parses a string of decimal digits (with optional leading sign) into a [`CycleLength`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| CycleError::UnparseableCycleLength { text: s.to_owned() })
    }
}

impl Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How strictly a cycle length should be validated before it is used in a prediction.
///
/// The source material accepts any integer at all, so that is the default here. Callers who
/// would rather reject nonsense up front can opt into a stricter policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Any parseable integer is accepted, including zero and negative lengths.
    #[default]
    Lenient,

    /// The length must be at least one day.
    Positive,

    /// The length must fall within the textbook adult range of
    /// [`TYPICAL_MIN_DAYS`]–[`TYPICAL_MAX_DAYS`] days.
    Typical,
}

impl CyclePolicy {
    /// Checks `cycle` against this policy, returning it unchanged if acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::DisallowedByPolicy`] if the length falls outside what this policy
    /// allows.
    pub fn check(&self, cycle: CycleLength) -> Result<CycleLength, CycleError> {
        let days = cycle.days();
        let ok = match self {
            CyclePolicy::Lenient => true,
            CyclePolicy::Positive => days >= 1,
            CyclePolicy::Typical => (TYPICAL_MIN_DAYS..=TYPICAL_MAX_DAYS).contains(&days),
        };
        if ok {
            Ok(cycle)
        } else {
            Err(CycleError::DisallowedByPolicy {
                days,
                policy: *self,
            })
        }
    }
}

impl Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CyclePolicy::Lenient => "lenient",
            CyclePolicy::Positive => "positive",
            CyclePolicy::Typical => "typical",
        };
        f.write_str(name)
    }
}
