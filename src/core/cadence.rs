//! Periodic deadlines driven by an external tick.
//!
//! A [`Cadence`] does not own a timer. The host ticks the dashboard at the
//! finest period it needs and each cadence tells whether its engine is due.
//!
//! Three policies decide the next deadline after firing:
//!
//! - Fixed delay: `now + period`. A late tick delays every following one.
//!   Used by the stopwatch, which recomputes its value from the timestamp
//!   so a missed frame costs nothing.
//! - Aligned: the next whole multiple of the period since the Unix Epoch.
//!   Late ticks do not accumulate, so the wall clock fires once for each of
//!   its seconds.
//! - Fixed rate: `deadline + period`. A late tick is caught up on the
//!   following host ticks, one period per host tick. Used by the countdown,
//!   which consumes one second per tick.
use std::time::Duration;

use clock_dashboard_primitives::DurationSinceUnixEpoch;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Policy {
    FixedDelay,
    Aligned,
    FixedRate,
}

#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    period: Duration,
    policy: Policy,
    deadline: Option<DurationSinceUnixEpoch>,
}

impl Cadence {
    /// A disarmed fixed-delay cadence.
    #[must_use]
    pub fn fixed_delay(period: Duration) -> Self {
        Self {
            period,
            policy: Policy::FixedDelay,
            deadline: None,
        }
    }

    /// A disarmed cadence firing on the whole multiples of the period.
    #[must_use]
    pub fn aligned(period: Duration) -> Self {
        Self {
            period,
            policy: Policy::Aligned,
            deadline: None,
        }
    }

    /// A disarmed fixed-rate cadence.
    #[must_use]
    pub fn fixed_rate(period: Duration) -> Self {
        Self {
            period,
            policy: Policy::FixedRate,
            deadline: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// It sets the next deadline.
    pub fn schedule_at(&mut self, deadline: DurationSinceUnixEpoch) {
        self.deadline = Some(deadline);
    }

    /// It sets the next deadline one period after `now`.
    pub fn anchor(&mut self, now: DurationSinceUnixEpoch) {
        self.schedule_at(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// It returns `true` if the deadline has been reached, moving it
    /// forward. A disarmed cadence never fires.
    pub fn fire(&mut self, now: DurationSinceUnixEpoch) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };

        if now < deadline {
            return false;
        }

        self.deadline = Some(match self.policy {
            Policy::FixedDelay => now + self.period,
            Policy::Aligned => next_multiple(now, self.period),
            Policy::FixedRate => deadline + self.period,
        });

        true
    }
}

/// The first whole multiple of `period` after `now`.
fn next_multiple(now: DurationSinceUnixEpoch, period: Duration) -> DurationSinceUnixEpoch {
    let period_nanos = period.as_nanos();

    if period_nanos == 0 {
        return now;
    }

    let into_period = u64::try_from(now.as_nanos() % period_nanos).map_or(Duration::ZERO, Duration::from_nanos);

    now - into_period + period
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::cadence::Cadence;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn a_disarmed_cadence_should_never_fire() {
        let mut cadence = Cadence::fixed_delay(ms(1_000));

        assert!(!cadence.fire(ms(1_000_000)));
    }

    #[test]
    fn it_should_fire_once_the_deadline_is_reached() {
        let mut cadence = Cadence::fixed_delay(ms(1_000));
        cadence.anchor(ms(0));

        assert!(!cadence.fire(ms(999)));
        assert!(cadence.fire(ms(1_000)));
        assert!(!cadence.fire(ms(1_000)));
    }

    #[test]
    fn a_fixed_delay_cadence_should_restart_the_period_from_a_late_tick() {
        let mut cadence = Cadence::fixed_delay(ms(1_000));
        cadence.anchor(ms(0));

        assert!(cadence.fire(ms(3_500)));
        assert!(!cadence.fire(ms(4_000)));
        assert!(cadence.fire(ms(4_500)));
    }

    #[test]
    fn an_aligned_cadence_should_fire_on_the_next_whole_period() {
        let mut cadence = Cadence::aligned(ms(1_000));
        cadence.schedule_at(Duration::ZERO);

        assert!(cadence.fire(ms(5_340)));
        assert!(!cadence.fire(ms(5_999)));
        assert!(cadence.fire(ms(6_000)));
        assert!(cadence.fire(ms(7_016)));
        assert!(!cadence.fire(ms(7_999)));
    }

    #[test]
    fn an_aligned_cadence_should_fire_once_per_period_whatever_the_tick_step() {
        let mut cadence = Cadence::aligned(ms(1_000));
        cadence.schedule_at(Duration::ZERO);

        // a step that does not divide the period
        let fired_seconds: Vec<u64> = (0..=600_000 / 17)
            .map(|step| ms(step * 17))
            .filter(|now| cadence.fire(*now))
            .map(|now| now.as_secs())
            .collect();

        assert_eq!(fired_seconds, (0..=599).collect::<Vec<u64>>());
    }

    #[test]
    fn a_fixed_rate_cadence_should_catch_up_one_period_per_tick() {
        let mut cadence = Cadence::fixed_rate(ms(1_000));
        cadence.anchor(ms(0));

        // three periods were missed
        let fired = (0..5).filter(|_| cadence.fire(ms(3_500))).count();

        assert_eq!(fired, 3);
    }

    #[test]
    fn it_should_be_disarmed() {
        let mut cadence = Cadence::fixed_rate(ms(1_000));
        cadence.anchor(ms(0));

        cadence.disarm();

        assert!(!cadence.is_armed());
        assert!(!cadence.fire(ms(2_000)));
    }

    #[test]
    fn it_should_fire_at_a_given_deadline() {
        let mut cadence = Cadence::fixed_delay(ms(1_000));
        cadence.schedule_at(Duration::ZERO);

        assert!(cadence.fire(ms(0)));
    }
}
