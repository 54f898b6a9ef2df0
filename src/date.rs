use crate::error::DateError;
use chrono::{Local, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// The first day of the cycle being tracked, the reference point every prediction is measured
/// from.
///
/// ```
/// use nextperiod::StartDate;
///
/// let from_text: StartDate = "2024-06-15".parse().unwrap();
/// let explicit = StartDate::explicit(2024, 6, 15).unwrap();
/// assert_eq!(from_text, explicit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StartDate(NaiveDate);

impl StartDate {
    /// Returns a new [`StartDate`] representing the current date in UTC at the time of this
    /// call.
    pub fn utc_today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns a new [`StartDate`] representing the current date in the system's local timezone
    /// at the time of this call.
    pub fn local_today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns a new [`StartDate`] for the given calendar date, or
    /// [`DateError::InvalidDateArguments`] if the arguments do not name a real date.
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }

    /// Returns the underlying [`NaiveDate`].
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for StartDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for StartDate {
    type Err = DateError;

    /// Parses a date string into a [`StartDate`]. The string must be in the format `YYYY-MM-DD`,
    /// where `YYYY` is the year zero-padded to 4 digits, `MM` is the month zero-padded to 2
    /// digits, and `DD` is the day zero-padded to 2 digits.
    ///
    /// See [`NaiveDate::from_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::from_str(s)?))
    }
}

impl Deref for StartDate {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
