//! The discrete time base that drives a simulation run.

use thiserror::Error;
use uom::si::{f64::Time, time::second};

/// The fixed step size and total duration of a simulation run.
///
/// A `DiscreteTime` is immutable after construction and produces the ordered
/// sequence of instants `0, dt, 2·dt, …` via [`steps`](Self::steps). Both the
/// step size and the duration must be strictly positive.
///
/// # Example
///
/// ```
/// use axisim::time::DiscreteTime;
///
/// let time = DiscreteTime::from_seconds(0.5, 2.0)?;
/// assert_eq!(time.steps().count(), 5); // 0.0, 0.5, 1.0, 1.5, 2.0
/// # Ok::<(), axisim::time::DiscreteTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteTime {
    dt: Time,
    duration: Time,
}

/// Error type returned when constructing an invalid [`DiscreteTime`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiscreteTimeError {
    #[error("time step must be greater than zero, got {0} s")]
    StepNotPositive(f64),
    #[error("duration must be greater than zero, got {0} s")]
    DurationNotPositive(f64),
}

impl DiscreteTime {
    /// Creates a discrete time base from a step size and a duration.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscreteTimeError`] if either value is zero or negative.
    pub fn new(dt: Time, duration: Time) -> Result<Self, DiscreteTimeError> {
        let dt_s = dt.get::<second>();
        if !(dt_s > 0.0) {
            return Err(DiscreteTimeError::StepNotPositive(dt_s));
        }
        let duration_s = duration.get::<second>();
        if !(duration_s > 0.0) {
            return Err(DiscreteTimeError::DurationNotPositive(duration_s));
        }
        Ok(Self { dt, duration })
    }

    /// Creates a discrete time base from raw SI values (s).
    ///
    /// # Errors
    ///
    /// Returns a [`DiscreteTimeError`] if either value is zero or negative.
    pub fn from_seconds(dt: f64, duration: f64) -> Result<Self, DiscreteTimeError> {
        Self::new(Time::new::<second>(dt), Time::new::<second>(duration))
    }

    /// The step size.
    #[must_use]
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// The total duration.
    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Returns a fresh, lazy iterator over the simulation instants.
    ///
    /// Instants are yielded while they are `<= duration`. Each instant is
    /// computed as `i·dt` rather than by accumulation, so a duration that is
    /// an exact multiple of `dt` keeps its final instant. Whether the terminal
    /// sample lands exactly on or just short of the duration still depends on
    /// floating-point rounding of `i·dt`.
    #[must_use]
    pub fn steps(&self) -> TimeSteps {
        TimeSteps {
            dt: self.dt,
            duration: self.duration,
            index: 0,
        }
    }
}

/// Lazy, finite iterator over the instants of a [`DiscreteTime`].
#[derive(Debug, Clone)]
pub struct TimeSteps {
    dt: Time,
    duration: Time,
    index: u32,
}

impl Iterator for TimeSteps {
    type Item = Time;

    fn next(&mut self) -> Option<Time> {
        let t = f64::from(self.index) * self.dt;
        if t <= self.duration {
            self.index += 1;
            Some(t)
        } else {
            None
        }
    }
}
