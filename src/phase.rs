use crate::{
    cycle::CycleLength, date::StartDate, error::CycleError, error::PredictError,
    predict::predict_next_date,
};
use chrono::NaiveDate;
use core::ops::RangeInclusive;
use std::f64::consts::PI;

const MIN_ESTROGEN: f64 = 50.0;
const MAX_ESTROGEN: f64 = 200.0;
const MIN_PROGESTERONE: f64 = 1.0;
const MAX_PROGESTERONE: f64 = 25.0;

// an ovulation window is ovulation day +/- 2, so both edges must fit inside the cycle
const MIN_OVULATION_CYCLE_DAYS: i32 = 6;

/// The estimated ovulation phase of a cycle: the ovulation day itself and the fertile window
/// around it, both as 1-based cycle-day indices (day 1 is the start date).
///
/// Ovulation is approximated as the midpoint of the cycle, and the fertile window as the two
/// days either side of it.
///
/// ```
/// use nextperiod::{CycleLength, OvulationPhase};
///
/// let phase = OvulationPhase::for_cycle(CycleLength::new(28)).unwrap();
/// assert_eq!(14, phase.day());
/// assert_eq!(12..=16, phase.window());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvulationPhase {
    day: u32,
    window_start: u32,
    window_end: u32,
}

impl OvulationPhase {
    /// Estimates the ovulation phase for a cycle of the given length.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::TooShortForOvulation`] if the cycle has fewer than 6 days, which
    /// is too short for the window to fit inside it.
    pub fn for_cycle(cycle: CycleLength) -> Result<Self, CycleError> {
        let days = cycle.days();
        if days < MIN_OVULATION_CYCLE_DAYS {
            return Err(CycleError::TooShortForOvulation { days });
        }
        let day = (days / 2) as u32;
        Ok(Self {
            day,
            window_start: day - 2,
            window_end: day + 2,
        })
    }

    /// The estimated ovulation day, as a 1-based cycle-day index.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The fertile window, as an inclusive range of 1-based cycle-day indices.
    pub fn window(&self) -> RangeInclusive<u32> {
        self.window_start..=self.window_end
    }

    /// The calendar date of the estimated ovulation day, given the cycle's start date.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::OutOfRange`] if the projection leaves the representable calendar
    /// range.
    pub fn date(&self, start: StartDate) -> Result<NaiveDate, PredictError> {
        cycle_day_to_date(start, self.day)
    }

    /// The calendar dates of the first and last day of the fertile window, given the cycle's
    /// start date.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::OutOfRange`] if the projection leaves the representable calendar
    /// range.
    pub fn window_dates(&self, start: StartDate) -> Result<(NaiveDate, NaiveDate), PredictError> {
        Ok((
            cycle_day_to_date(start, self.window_start)?,
            cycle_day_to_date(start, self.window_end)?,
        ))
    }
}

// cycle day 1 is the start date itself
fn cycle_day_to_date(start: StartDate, day: u32) -> Result<NaiveDate, PredictError> {
    predict_next_date(start.date(), CycleLength::new(day as i32 - 1))
}

/// Modeled estrogen and progesterone levels for one day of a cycle.
///
/// Estrogen follows a half-sine over the whole cycle, peaking at the midpoint. Progesterone
/// stays at its baseline through the follicular half, then follows a half-sine over the luteal
/// half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HormoneLevels {
    /// Modeled estrogen level, ranging from 50 up to 200 at the cycle midpoint.
    pub estrogen: f64,
    /// Modeled progesterone level, ranging from a baseline of 1 up to 25 in the luteal phase.
    pub progesterone: f64,
}

impl HormoneLevels {
    /// Returns the modeled levels on the given 1-based cycle day.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::DayOutOfCycle`] if `day` is zero or past the end of the cycle.
    pub fn on_day(day: u32, cycle: CycleLength) -> Result<Self, CycleError> {
        let days = cycle.days();
        if day < 1 || days < 1 || day as i64 > days as i64 {
            return Err(CycleError::DayOutOfCycle { day, days });
        }

        let len = f64::from(days);
        let day = f64::from(day);
        let midpoint = len / 2.0;

        let estrogen = MIN_ESTROGEN + (MAX_ESTROGEN - MIN_ESTROGEN) * (PI * day / len).sin();
        let progesterone = if day < midpoint {
            MIN_PROGESTERONE
        } else {
            MIN_PROGESTERONE
                + (MAX_PROGESTERONE - MIN_PROGESTERONE)
                    * (PI * (day - midpoint) / midpoint).sin()
        };

        Ok(Self {
            estrogen,
            progesterone,
        })
    }

    /// Returns the modeled levels for every day of the cycle, in day order.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::DayOutOfCycle`] if the cycle has no days at all.
    pub fn series(cycle: CycleLength) -> Result<Vec<Self>, CycleError> {
        let days = cycle.days();
        if days < 1 {
            return Err(CycleError::DayOutOfCycle { day: 1, days });
        }
        (1..=days as u32).map(|day| Self::on_day(day, cycle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ovulation_phase_for_cycle() {
        let args = [
            (28, 14, 12..=16),
            (21, 10, 8..=12),
            (35, 17, 15..=19),
            (6, 3, 1..=5), // shortest cycle the window fits in
        ];

        for (days, expected_day, expected_window) in args {
            let phase = OvulationPhase::for_cycle(CycleLength::new(days)).unwrap();
            assert_eq!(expected_day, phase.day());
            assert_eq!(expected_window, phase.window());
        }
    }

    #[test]
    fn test_ovulation_phase_too_short() {
        for days in [-28, 0, 1, 5] {
            let phase = OvulationPhase::for_cycle(CycleLength::new(days));
            assert!(matches!(
                phase,
                Err(CycleError::TooShortForOvulation { .. })
            ));
        }
    }

    #[test]
    fn test_ovulation_dates() {
        let start = StartDate::explicit(2024, 6, 15).unwrap();
        let phase = OvulationPhase::for_cycle(CycleLength::new(28)).unwrap();

        // day 14 of a cycle starting June 15th is June 28th
        let expected = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        assert_eq!(expected, phase.date(start).unwrap());

        let (window_start, window_end) = phase.window_dates(start).unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2024, 6, 26).unwrap(), window_start);
        assert_eq!(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(), window_end);
    }

    #[test]
    fn test_estrogen_peaks_at_midpoint() {
        let cycle = CycleLength::new(28);
        let midpoint = HormoneLevels::on_day(14, cycle).unwrap();
        assert_close(200.0, midpoint.estrogen);

        // symmetric about the midpoint
        let before = HormoneLevels::on_day(7, cycle).unwrap();
        let after = HormoneLevels::on_day(21, cycle).unwrap();
        assert_close(before.estrogen, after.estrogen);
    }

    #[test]
    fn test_progesterone_baseline_then_peak() {
        let cycle = CycleLength::new(28);

        // follicular half sits at the baseline
        for day in 1..14 {
            let levels = HormoneLevels::on_day(day, cycle).unwrap();
            assert_close(1.0, levels.progesterone);
        }

        // luteal peak at three quarters of the cycle
        let peak = HormoneLevels::on_day(21, cycle).unwrap();
        assert_close(25.0, peak.progesterone);
    }

    #[test]
    fn test_hormone_day_out_of_cycle() {
        let cycle = CycleLength::new(28);
        for day in [0, 29, 100] {
            let levels = HormoneLevels::on_day(day, cycle);
            assert!(matches!(levels, Err(CycleError::DayOutOfCycle { .. })));
        }
    }

    #[test]
    fn test_hormone_series_covers_cycle() {
        let cycle = CycleLength::new(28);
        let series = HormoneLevels::series(cycle).unwrap();
        assert_eq!(28, series.len());
        assert_eq!(HormoneLevels::on_day(1, cycle).unwrap(), series[0]);
        assert_eq!(HormoneLevels::on_day(28, cycle).unwrap(), series[27]);
    }

    #[test]
    fn test_hormone_series_empty_cycle() {
        let series = HormoneLevels::series(CycleLength::new(0));
        assert!(matches!(series, Err(CycleError::DayOutOfCycle { .. })));
    }
}
