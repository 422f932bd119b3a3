//! Countdown to a fixed instant.
//!
//! The display is recomputed from the wall clock on every tick, so missed
//! or delayed ticks never accumulate drift. Once the target has passed the
//! gap goes negative and the fields show negative numbers.

use crate::config::{DAY_MS, HOUR_MS, MINUTE_MS, SECOND_MS};
use chrono::{DateTime, Local, TimeZone};
use gloo_timers::callback::Interval;
use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Split a millisecond gap into days, hours, minutes and seconds.
///
/// Each field is `floor((gap % unit_above) / unit)` with a truncating `%`,
/// so a negative gap yields negative fields.
pub fn decompose_gap(gap_ms: i64) -> CountdownDisplay {
    CountdownDisplay {
        days: gap_ms.div_euclid(DAY_MS),
        hours: (gap_ms % DAY_MS).div_euclid(HOUR_MS),
        minutes: (gap_ms % HOUR_MS).div_euclid(MINUTE_MS),
        seconds: (gap_ms % MINUTE_MS).div_euclid(SECOND_MS),
    }
}

pub fn countdown<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> CountdownDisplay {
    decompose_gap(target.timestamp_millis() - now.timestamp_millis())
}

pub fn countdown_from_now(target: &DateTime<Local>) -> CountdownDisplay {
    countdown(target, &Local::now())
}

/// A running ticker. Dropping the handle also stops it.
pub struct TickerHandle {
    interval: Interval,
}

impl TickerHandle {
    pub fn cancel(self) {
        debug!("Countdown ticker cancelled");
        let _ = self.interval.cancel();
    }
}

/// Call `tick` every `period_ms` milliseconds until the handle is cancelled.
pub fn start_ticker<F>(period_ms: u32, tick: F) -> TickerHandle
where
    F: FnMut() + 'static,
{
    debug!("Countdown ticker started ({} ms)", period_ms);
    TickerHandle {
        interval: Interval::new(period_ms, tick),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn one_of_each_unit() {
        let display = decompose_gap(90_061_000);
        assert_eq!(
            display,
            CountdownDisplay {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let display = decompose_gap(59_999);
        assert_eq!((display.days, display.hours, display.minutes, display.seconds), (0, 0, 0, 59));
    }

    #[test]
    fn past_target_shows_negative_numbers() {
        let display = decompose_gap(-1_000);
        assert_eq!(
            display,
            CountdownDisplay {
                days: -1,
                hours: -1,
                minutes: -1,
                seconds: -1
            }
        );

        let display = decompose_gap(-(DAY_MS + 2 * HOUR_MS));
        assert_eq!((display.days, display.hours, display.minutes, display.seconds), (-2, -2, 0, 0));
    }

    #[test]
    fn gap_between_instants() {
        let now = Utc.with_ymd_and_hms(2025, 12, 7, 12, 30, 15).unwrap();
        let target = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
        let display = countdown(&target, &now);
        assert_eq!(
            display,
            CountdownDisplay {
                days: 2,
                hours: 11,
                minutes: 29,
                seconds: 45
            }
        );
    }

    #[test]
    fn target_reached_is_all_zero() {
        let target = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
        assert_eq!(countdown(&target, &target), CountdownDisplay::default());
        let just_before = target - Duration::milliseconds(400);
        assert_eq!(countdown(&target, &just_before), CountdownDisplay::default());
    }
}
