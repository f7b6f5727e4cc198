use uom::si::f64::{Force, Time};

/// A controller that applies a constant force after a delay.
///
/// Returns zero while `t < delay` and the configured force unconditionally
/// afterwards. The step has no control state; only the last computed force is
/// kept, for observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepController {
    force: Force,
    delay: Time,
    last_force: Force,
}

impl StepController {
    /// Creates a step controller.
    #[must_use]
    pub fn new(force: Force, delay: Time) -> Self {
        Self {
            force,
            delay,
            last_force: Force::default(),
        }
    }

    /// Creates a step controller from raw SI values (N, s).
    #[must_use]
    pub fn from_si(force: f64, delay: f64) -> Self {
        use uom::si::{force::newton, time::second};
        Self::new(Force::new::<newton>(force), Time::new::<second>(delay))
    }

    /// Computes the force for elapsed time `t`.
    pub fn control_force(&mut self, t: Time) -> Force {
        self.last_force = if t < self.delay {
            Force::default()
        } else {
            self.force
        };
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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{force::newton, time::second};

    #[test]
    fn steps_up_at_the_delay_and_stays_up() {
        let mut controller = StepController::from_si(3.0, 1.0);
        let expected = Force::new::<newton>(3.0);

        assert_eq!(controller.control_force(Time::new::<second>(0.0)), Force::default());
        assert_eq!(controller.control_force(Time::new::<second>(0.99)), Force::default());
        assert_eq!(controller.control_force(Time::new::<second>(1.0)), expected);
        assert_eq!(controller.control_force(Time::new::<second>(100.0)), expected);
    }
}
