use std::f64::consts::TAU;

use uom::si::{
    f64::{Force, Frequency, Time},
    ratio::ratio,
};

/// A controller that applies a sinusoidal force.
///
/// The force at elapsed time `t` is `amplitude · sin(2π · frequency · t)`,
/// independent of the command and the plant's state. Useful for exciting a
/// plant near a frequency of interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidController {
    amplitude: Force,
    frequency: Frequency,
    last_force: Force,
}

impl SinusoidController {
    /// Creates a sinusoid controller.
    #[must_use]
    pub fn new(amplitude: Force, frequency: Frequency) -> Self {
        Self {
            amplitude,
            frequency,
            last_force: Force::default(),
        }
    }

    /// Creates a sinusoid controller from raw SI values (N, Hz).
    #[must_use]
    pub fn from_si(amplitude: f64, frequency: f64) -> Self {
        use uom::si::{force::newton, frequency::hertz};
        Self::new(
            Force::new::<newton>(amplitude),
            Frequency::new::<hertz>(frequency),
        )
    }

    /// Computes the force for elapsed time `t`.
    pub fn control_force(&mut self, t: Time) -> Force {
        let cycles = (self.frequency * t).get::<ratio>();
        self.last_force = (TAU * cycles).sin() * self.amplitude;
        self.last_force
    }

    /// Zeroes the last computed force.
    pub fn reset(&mut self) {
        self.last_force = Force::default();
    }

    /// The force computed by the most recent call.
    #[must_use]
    pub fn last_force(&self) -> Force {
        self.last_force
    }
}
