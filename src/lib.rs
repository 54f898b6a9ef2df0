//! # nextperiod
//!
//! A library and CLI for predicting menstrual cycle dates.
//!
//! Given the start date of a period and an average cycle length in days, this crate computes
//! the expected start of the next period with calendar-aware day arithmetic (month and year
//! rollover handled by [chrono](https://docs.rs/chrono)), and can additionally estimate the
//! ovulation phase and modeled hormone levels across the cycle.
//!
//! ## Examples
//!
//! Quickly get a prediction from raw text, the way inputs arrive from a form or command line:
//!
//! ```
//! use nextperiod::prelude::*;
//!
//! let prediction = Predictor::default()
//!     .predict_str("2024-06-15", "28")
//!     .unwrap();
//! assert_eq!(
//!     "Your next period is expected on: 7/13/2024",
//!     prediction.to_string()
//! );
//! ```
//!
//! Or, break down the steps for reusability:
//!
//! ```
//! use nextperiod::prelude::*;
//!
//! let start: StartDate = "2024-01-30".parse().unwrap();
//! let cycle: CycleLength = "5".parse().unwrap();
//! let prediction = Predictor::new(CyclePolicy::Lenient)
//!     .predict(start, cycle)
//!     .unwrap();
//! // the calendar rolls the month over
//! assert_eq!("2/4/2024", prediction.short_date());
//! ```
//!
//! ## Important Terms
//!
//! - **Start Date**: the date a period began, the reference point every prediction is measured
//!   from. Modeled by [`StartDate`].
//! - **Cycle Length**: a whole number of days from one period's start to the next. Modeled by
//!   [`CycleLength`].
//! - **Prediction**: the derived output, start date plus cycle length days. Modeled by
//!   [`Prediction`], whose `Display` impl renders the user-facing sentence.
//!
//! ## Validation policy
//!
//! The source material this crate models accepts *any* integer cycle length, including zero
//! and negative values. Rather than guess at intent, validation is configurable: a
//! [`Predictor`] checks lengths against its [`CyclePolicy`], and the default policy
//! ([`CyclePolicy::Lenient`]) preserves the permissive behavior. Malformed input is never
//! silently rendered as an invalid date; every fallible step returns a typed error
//! ([`DateError`], [`CycleError`], or the composite [`PredictError`]).
//!
//! ## Ovulation and hormones
//!
//! [`OvulationPhase`] estimates the ovulation day as the cycle midpoint, with a fertile window
//! of two days either side. [`HormoneLevels`] models estrogen and progesterone as half-sine
//! curves over the cycle. Both are estimates of textbook shapes, not medical advice.
//!
//! ## Prelude
//!
//! nextperiod provides a prelude module for convenience. It contains everything needed to
//! interact with the library.
//!
//! Use it with:
//!
//! ```
//! use nextperiod::prelude::*;
//! ```
#![warn(missing_docs)]

mod cycle;
mod date;
mod error;
mod phase;
mod predict;

pub use crate::cycle::{CycleLength, CyclePolicy, TYPICAL_MAX_DAYS, TYPICAL_MIN_DAYS};
pub use crate::date::StartDate;
pub use crate::error::{CycleError, DateError, PredictError};
pub use crate::phase::{HormoneLevels, OvulationPhase};
pub use crate::predict::{predict_next_date, Prediction, Predictor};

/// A convenience module appropriate for glob imports (`use nextperiod::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::CycleError;
    #[doc(no_inline)]
    pub use crate::CycleLength;
    #[doc(no_inline)]
    pub use crate::CyclePolicy;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::HormoneLevels;
    #[doc(no_inline)]
    pub use crate::OvulationPhase;
    #[doc(no_inline)]
    pub use crate::PredictError;
    #[doc(no_inline)]
    pub use crate::Prediction;
    #[doc(no_inline)]
    pub use crate::Predictor;
    #[doc(no_inline)]
    pub use crate::StartDate;
    #[doc(no_inline)]
    pub use crate::predict_next_date;
}
