use uom::si::f64::{Length, Velocity};

use super::Command;

/// A profile that commands a fixed impulse for the first N steps.
///
/// Unlike [`TrapezoidProfile`](super::TrapezoidProfile), the output depends on
/// call order, not on elapsed time: an internal counter advances on every
/// [`command`](Self::command) call, and the impulse is emitted while the
/// counter is below the configured step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseProfile {
    velocity: Velocity,
    position: Length,
    on_step_count: u32,
    calls: u32,
}

impl ImpulseProfile {
    /// Creates an impulse profile emitting the given command for the first
    /// `on_step_count` calls.
    #[must_use]
    pub fn new(velocity: Velocity, position: Length, on_step_count: u32) -> Self {
        Self {
            velocity,
            position,
            on_step_count,
            calls: 0,
        }
    }

    /// Creates an impulse profile from raw SI values (m/s, m).
    #[must_use]
    pub fn from_si(velocity: f64, position: f64, on_step_count: u32) -> Self {
        use uom::si::{length::meter, velocity::meter_per_second};
        Self::new(
            Velocity::new::<meter_per_second>(velocity),
            Length::new::<meter>(position),
            on_step_count,
        )
    }

    /// Returns the impulse command and advances the call counter.
    pub fn command(&mut self) -> Command {
        if self.calls < self.on_step_count {
            self.calls += 1;
            Command::new(self.velocity, self.position)
        } else {
            Command::zero()
        }
    }

    /// Zeroes the call counter.
    pub fn reset(&mut self) {
        self.calls = 0;
    }
}
