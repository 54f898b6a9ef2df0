use crate::{
    cycle::{CycleLength, CyclePolicy},
    date::StartDate,
    error::PredictError,
};
use chrono::{Duration, NaiveDate};
use core::fmt::{self, Display};

/// Returns the date `cycle` days after `start`, with month and year rollover handled by the
/// calendar (e.g. January 30th + 5 days lands in February).
///
/// This is the whole of the arithmetic in this crate, isolated so it can be called and tested
/// without any parsing or rendering around it.
///
/// ```
/// use chrono::NaiveDate;
/// use nextperiod::{predict_next_date, CycleLength};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
/// let next = predict_next_date(start, CycleLength::new(5)).unwrap();
/// assert_eq!(NaiveDate::from_ymd_opt(2024, 2, 4).unwrap(), next);
/// ```
///
/// # Errors
///
/// Returns [`PredictError::OutOfRange`] if the sum leaves chrono's representable calendar
/// range.
pub fn predict_next_date(
    start: NaiveDate,
    cycle: CycleLength,
) -> Result<NaiveDate, PredictError> {
    start
        .checked_add_signed(Duration::days(i64::from(cycle.days())))
        .ok_or_else(|| PredictError::OutOfRange {
            start: start.to_string(),
            days: cycle.days(),
        })
}

/// A computed prediction: the start date, the cycle length it was advanced by, and the
/// resulting date.
///
/// Its [`Display`] impl renders the user-facing sentence:
///
/// ```
/// use nextperiod::Predictor;
///
/// let prediction = Predictor::default().predict_str("2024-06-15", "28").unwrap();
/// assert_eq!(
///     "Your next period is expected on: 7/13/2024",
///     prediction.to_string()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    start: NaiveDate,
    cycle: CycleLength,
    date: NaiveDate,
}

impl Prediction {
    /// The predicted date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The start date the prediction was measured from.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The cycle length the start date was advanced by.
    pub fn cycle(&self) -> CycleLength {
        self.cycle
    }

    /// The predicted date rendered as `M/D/YYYY`, without zero padding.
    pub fn short_date(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your next period is expected on: {}", self.short_date())
    }
}

/// Computes [`Prediction`]s, validating cycle lengths against a [`CyclePolicy`] first.
///
/// The default predictor uses [`CyclePolicy::Lenient`], which accepts any integer length.
///
/// ```
/// use nextperiod::prelude::*;
///
/// let predictor = Predictor::new(CyclePolicy::Positive);
/// assert!(predictor.predict_str("2024-06-15", "0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predictor {
    policy: CyclePolicy,
}

impl Predictor {
    /// Returns a new [`Predictor`] that validates cycle lengths with `policy`.
    pub fn new(policy: CyclePolicy) -> Self {
        Self { policy }
    }

    /// The policy this predictor validates cycle lengths with.
    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    /// Predicts the next period date from an already-parsed start date and cycle length.
    ///
    /// # Errors
    ///
    /// - Returns [`PredictError::Cycle`] if the policy rejects `cycle`.
    /// - Returns [`PredictError::OutOfRange`] if the arithmetic overflows the calendar.
    pub fn predict(
        &self,
        start: StartDate,
        cycle: CycleLength,
    ) -> Result<Prediction, PredictError> {
        let cycle = self.policy.check(cycle)?;
        let date = predict_next_date(start.date(), cycle)?;
        Ok(Prediction {
            start: start.date(),
            cycle,
            date,
        })
    }

    /// Predicts the next period date from raw text, the way the inputs arrive from a form or a
    /// command line.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`Predictor::predict`]:
    ///
    /// - Returns [`PredictError::Date`] if `start` is not a `YYYY-MM-DD` date.
    /// - Returns [`PredictError::Cycle`] if `cycle` is not an integer.
    pub fn predict_str(&self, start: &str, cycle: &str) -> Result<Prediction, PredictError> {
        let start: StartDate = start.parse()?;
        let cycle: CycleLength = cycle.parse()?;
        self.predict(start, cycle)
    }
}
