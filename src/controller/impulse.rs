use uom::si::f64::{Force, Time};

/// A controller that fires a force impulse after a delay.
///
/// Returns zero while `t < delay`. Once the delay has passed, it returns the
/// configured force for the first `on_step_count` qualifying calls — counted
/// by an internal counter that only advances on those calls — and zero
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseController {
    force: Force,
    on_step_count: u32,
    delay: Time,
    fired: u32,
    last_force: Force,
}

impl ImpulseController {
    /// Creates an impulse controller.
    #[must_use]
    pub fn new(force: Force, on_step_count: u32, delay: Time) -> Self {
        Self {
            force,
            on_step_count,
            delay,
            fired: 0,
            last_force: Force::default(),
        }
    }

    /// Creates an impulse controller from raw SI values (N, steps, s).
    #[must_use]
    pub fn from_si(force: f64, on_step_count: u32, delay: f64) -> Self {
        use uom::si::{force::newton, time::second};
        Self::new(
            Force::new::<newton>(force),
            on_step_count,
            Time::new::<second>(delay),
        )
    }

    /// Computes the force for elapsed time `t`.
    pub fn control_force(&mut self, t: Time) -> Force {
        self.last_force = if t < self.delay {
            Force::default()
        } else if self.fired < self.on_step_count {
            self.fired += 1;
            self.force
        } else {
            Force::default()
        };
        self.last_force
    }

    /// Zeroes the impulse counter and the last computed force.
    pub fn reset(&mut self) {
        self.fired = 0;
        self.last_force = Force::default();
    }

    /// The force computed by the most recent call.
    #[must_use]
    pub fn last_force(&self) -> Force {
        self.last_force
    }
}
