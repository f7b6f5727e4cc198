use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Time, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use super::Command;

/// A trapezoidal velocity profile: accelerate, cruise, decelerate, hold.
///
/// The profile moves a signed travel length `L` at acceleration magnitude `A`,
/// cruising at max velocity `V`. When the travel is too short to reach `V`,
/// the profile degenerates to a triangular one that accelerates halfway and
/// decelerates the rest.
///
/// The sign of `L` gives the direction of travel; all internal formulas use
/// its magnitude and scale the outputs by the direction.
///
/// # Example
///
/// ```
/// use axisim::profile::TrapezoidProfile;
/// use uom::si::{f64::Time, time::second};
///
/// let profile = TrapezoidProfile::from_si(1.0, 2.0, 1.0)?;
/// assert_eq!(profile.total_time(), Time::new::<second>(1.5));
/// # Ok::<(), axisim::profile::ProfileError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidProfile {
    direction: f64,
    length: Length,
    max_velocity: Velocity,
    acceleration: Acceleration,
    accel_time: Time,
    cruise_time: Time,
    total_time: Time,
}

/// Error type returned when constructing an invalid motion profile.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    #[error("maximum velocity must be greater than zero, got {0} m/s")]
    VelocityNotPositive(f64),
    #[error("acceleration must be greater than zero, got {0} m/s²")]
    AccelerationNotPositive(f64),
    #[error("travel length must be non-zero")]
    TravelZero,
}

impl TrapezoidProfile {
    /// Creates a trapezoidal profile from a max velocity, an acceleration
    /// magnitude, and a signed travel length.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the max velocity or acceleration is not
    /// strictly positive, or if the travel length is zero.
    pub fn new(
        max_velocity: Velocity,
        acceleration: Acceleration,
        travel: Length,
    ) -> Result<Self, ProfileError> {
        let v = max_velocity.get::<meter_per_second>();
        if v <= 0.0 {
            return Err(ProfileError::VelocityNotPositive(v));
        }
        let a = acceleration.get::<meter_per_second_squared>();
        if a <= 0.0 {
            return Err(ProfileError::AccelerationNotPositive(a));
        }
        let l = travel.get::<meter>();
        if l == 0.0 {
            return Err(ProfileError::TravelZero);
        }

        let direction = l.signum();
        let length = travel.abs();

        let mut accel_time = max_velocity / acceleration;
        let mut total_time = length / max_velocity + accel_time;
        let mut cruise_time = total_time - 2.0 * accel_time;
        if cruise_time < Time::default() {
            // Too short to reach max velocity: triangular correction.
            accel_time = (length / acceleration).sqrt();
            cruise_time = Time::default();
            total_time = 2.0 * accel_time;
        }

        Ok(Self {
            direction,
            length,
            max_velocity,
            acceleration,
            accel_time,
            cruise_time,
            total_time,
        })
    }

    /// Creates a trapezoidal profile from raw SI values (m/s, m/s², m).
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if any parameter is invalid.
    pub fn from_si(
        max_velocity: f64,
        acceleration: f64,
        travel: f64,
    ) -> Result<Self, ProfileError> {
        Self::new(
            Velocity::new::<meter_per_second>(max_velocity),
            Acceleration::new::<meter_per_second_squared>(acceleration),
            Length::new::<meter>(travel),
        )
    }

    /// The configured maximum velocity.
    #[must_use]
    pub fn max_velocity(&self) -> Velocity {
        self.max_velocity
    }

    /// Time spent accelerating (and, symmetrically, decelerating).
    #[must_use]
    pub fn accel_time(&self) -> Time {
        self.accel_time
    }

    /// Time spent cruising at peak velocity; zero for a triangular profile.
    #[must_use]
    pub fn cruise_time(&self) -> Time {
        self.cruise_time
    }

    /// Total time the profile takes to reach its travel target.
    #[must_use]
    pub fn total_time(&self) -> Time {
        self.total_time
    }

    /// The velocity actually reached at the end of the acceleration phase.
    ///
    /// Equals the configured max velocity unless the profile is triangular.
    #[must_use]
    pub fn peak_velocity(&self) -> Velocity {
        self.acceleration * self.accel_time
    }

    /// Returns the command velocity and position for elapsed time `t`.
    #[must_use]
    pub fn command(&self, t: Time) -> Command {
        let dir = self.direction;
        let a = self.acceleration;
        // The peak, not the configured max: they differ for triangular
        // profiles.
        let v = self.peak_velocity();
        let ta = self.accel_time;
        let tc = self.cruise_time;

        if t < ta {
            // Accelerating.
            Command::new(dir * (a * t), dir * (0.5 * a * t * t))
        } else if t < ta + tc {
            // Cruising.
            Command::new(dir * (a * ta), dir * (0.5 * a * ta * ta + v * (t - ta)))
        } else if t <= self.total_time {
            // Decelerating.
            let td = t - ta - tc;
            Command::new(
                dir * (a * (self.total_time - t)),
                dir * (0.5 * a * ta * ta + v * tc + v * td - 0.5 * a * td * td),
            )
        } else {
            // Holding at the travel target.
            Command::new(Velocity::default(), dir * self.length)
        }
    }
}
