use crate::cycle::CyclePolicy;

/// Errors from constructing or parsing a start date.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DateError {
    /// The date text could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("date should be a valid date in `YYYY-MM-DD` format")]
    UnparseableDate {
        /// The underlying chrono parse error.
        #[from]
        source: chrono::ParseError,
    },

    /// The explicit year/month/day arguments do not name a real calendar date.
    #[error("explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a valid date")]
    InvalidDateArguments {
        /// The year argument.
        year: i32,
        /// The month argument.
        month: u32,
        /// The day argument.
        day: u32,
    },
}

/// Errors from constructing, parsing, or validating a cycle length.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// The cycle length text could not be parsed as a whole number of days.
    #[error("cycle length `{text}` should be a whole number of days")]
    UnparseableCycleLength {
        /// The text that failed to parse.
        text: String,
    },

    /// The cycle length parsed, but the active policy rejects it.
    #[error("cycle length of {days} days is not allowed by the {policy} policy")]
    DisallowedByPolicy {
        /// The rejected length in days.
        days: i32,
        /// The policy that rejected it.
        policy: CyclePolicy,
    },

    /// The cycle is too short for an ovulation window to fit inside it.
    #[error("cycle length of {days} days is too short to place an ovulation window")]
    TooShortForOvulation {
        /// The offending length in days.
        days: i32,
    },

    /// A cycle-day index fell outside `1..=days`.
    #[error("day {day} should be within the cycle (1 through {days})")]
    DayOutOfCycle {
        /// The offending day index.
        day: u32,
        /// The cycle length in days.
        days: i32,
    },
}

/// A composite over every error this crate can produce while predicting. Returned from APIs
/// where more than one kind of error is possible, such as
/// [`Predictor::predict_str`](crate::Predictor::predict_str).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// See [`DateError`].
    #[error(transparent)]
    Date(#[from] DateError),

    /// See [`CycleError`].
    #[error(transparent)]
    Cycle(#[from] CycleError),

    /// Adding the cycle length to the start date left the representable calendar range.
    #[error("adding {days} days to {start} leaves the supported calendar range")]
    OutOfRange {
        /// The start date, rendered as `YYYY-MM-DD`.
        start: String,
        /// The offset that overflowed.
        days: i32,
    },
}
