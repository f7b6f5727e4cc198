use uom::si::f64::{Force, Length, Velocity};

use crate::{
    profile::Command,
    units::{damping_si, stiffness_si, Damping, Stiffness},
};

/// The six gains of a [`PidController`].
///
/// The velocity-loop gains have damping dimensions (N per m/s) and the
/// position-loop gains stiffness dimensions (N per m). The integral gains
/// multiply raw error sums and the derivative gains raw one-step differences
/// — neither is scaled by the step size — so gain values carry the `dt`
/// convention of the run they were tuned for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidGains {
    pub kvp: Damping,
    pub kvi: Damping,
    pub kvd: Damping,
    pub kpp: Stiffness,
    pub kpi: Stiffness,
    pub kpd: Stiffness,
}

impl PidGains {
    /// Creates gains from raw SI values (N·s/m for the velocity loop, N/m for
    /// the position loop).
    #[must_use]
    pub fn from_si(kvp: f64, kvi: f64, kvd: f64, kpp: f64, kpi: f64, kpd: f64) -> Self {
        Self {
            kvp: damping_si(kvp),
            kvi: damping_si(kvi),
            kvd: damping_si(kvd),
            kpp: stiffness_si(kpp),
            kpi: stiffness_si(kpi),
            kpd: stiffness_si(kpd),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PidState {
    velocity_error: Velocity,
    velocity_error_sum: Velocity,
    velocity_error_diff: Velocity,
    prev_velocity_error: Velocity,
    position_error: Length,
    position_error_sum: Length,
    position_error_diff: Length,
    prev_position_error: Length,
    force: Force,
}

/// A textbook PID controller with separate velocity and position loops.
///
/// Tracks the commanded velocity and position simultaneously; the output
/// force is the sum of proportional, integral, and derivative terms of both
/// tracking errors. The error sums have no clamping and no leakage, so a
/// long run with a persistent error winds up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidController {
    gains: PidGains,
    state: PidState,
}

impl PidController {
    /// Creates a PID controller with zeroed tracking state.
    #[must_use]
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            state: PidState::default(),
        }
    }

    /// The configured gains.
    #[must_use]
    pub fn gains(&self) -> PidGains {
        self.gains
    }

    /// Computes the control force and advances the tracking state.
    pub fn control_force(
        &mut self,
        command: Command,
        velocity: Velocity,
        position: Length,
    ) -> Force {
        let gains = self.gains;
        let state = &mut self.state;

        // Command leads: error = commanded − measured.
        state.velocity_error = command.velocity - velocity;
        state.velocity_error_sum += state.velocity_error;
        state.velocity_error_diff = state.velocity_error - state.prev_velocity_error;
        state.prev_velocity_error = state.velocity_error;

        state.position_error = command.position - position;
        state.position_error_sum += state.position_error;
        state.position_error_diff = state.position_error - state.prev_position_error;
        state.prev_position_error = state.position_error;

        state.force = gains.kvp * state.velocity_error
            + gains.kvi * state.velocity_error_sum
            + gains.kvd * state.velocity_error_diff
            + gains.kpp * state.position_error
            + gains.kpi * state.position_error_sum
            + gains.kpd * state.position_error_diff;

        state.force
    }

    /// Zeroes every piece of tracking state.
    pub fn reset(&mut self) {
        self.state = PidState::default();
    }

    /// The current velocity tracking error.
    #[must_use]
    pub fn velocity_error(&self) -> Velocity {
        self.state.velocity_error
    }

    /// The current position tracking error.
    #[must_use]
    pub fn position_error(&self) -> Length {
        self.state.position_error
    }

    /// The running sum of velocity errors since the last reset.
    #[must_use]
    pub fn velocity_error_sum(&self) -> Velocity {
        self.state.velocity_error_sum
    }

    /// The running sum of position errors since the last reset.
    #[must_use]
    pub fn position_error_sum(&self) -> Length {
        self.state.position_error_sum
    }

    /// The one-step difference of the velocity error.
    #[must_use]
    pub fn velocity_error_diff(&self) -> Velocity {
        self.state.velocity_error_diff
    }

    /// The one-step difference of the position error.
    #[must_use]
    pub fn position_error_diff(&self) -> Length {
        self.state.position_error_diff
    }

    /// The force computed by the most recent call.
    #[must_use]
    pub fn last_force(&self) -> Force {
        self.state.force
    }
}
