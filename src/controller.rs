//! Controllers: they turn the reference command and the plant's state into a
//! force.

mod impulse;
mod pid;
mod sinusoid;
mod step;

use uom::si::f64::{Force, Length, Time, Velocity};

use crate::profile::Command;

pub use impulse::ImpulseController;
pub use pid::{PidController, PidGains};
pub use sinusoid::SinusoidController;
pub use step::StepController;

/// The closed family of controllers.
///
/// Only [`PidController`] closes the loop; the impulse, step, and sinusoid
/// variants are open-loop excitations used to characterize a plant, and
/// `Null` applies no force at all.
///
/// Controllers carry mutable state (tracking errors, counters, the last
/// computed force). [`reset`](Self::reset) returns that state to its
/// post-construction zeros and is called once before every simulation run.
#[derive(Debug, Clone)]
pub enum Controller {
    /// Never applies a force.
    Null,
    /// Velocity- and position-loop PID tracking of the commanded trajectory.
    Pid(PidController),
    /// A force impulse lasting a fixed number of steps after a delay.
    Impulse(ImpulseController),
    /// A constant force after a delay.
    Step(StepController),
    /// A sinusoidal force, ignoring command and feedback.
    Sinusoid(SinusoidController),
}

impl Controller {
    /// Computes the force to apply for this step.
    ///
    /// `t` is the elapsed time, `command` the reference from the motion
    /// profile, and `velocity`/`position` the plant's current state. Stateful
    /// variants mutate their tracking state, so call this exactly once per
    /// simulated step, in order.
    pub fn control_force(
        &mut self,
        t: Time,
        command: Command,
        velocity: Velocity,
        position: Length,
    ) -> Force {
        match self {
            Self::Null => Force::default(),
            Self::Pid(controller) => controller.control_force(command, velocity, position),
            Self::Impulse(controller) => controller.control_force(t),
            Self::Step(controller) => controller.control_force(t),
            Self::Sinusoid(controller) => controller.control_force(t),
        }
    }

    /// Zeroes all mutable controller state.
    pub fn reset(&mut self) {
        match self {
            Self::Null => {}
            Self::Pid(controller) => controller.reset(),
            Self::Impulse(controller) => controller.reset(),
            Self::Step(controller) => controller.reset(),
            Self::Sinusoid(controller) => controller.reset(),
        }
    }

    /// The current velocity tracking error; zero for non-tracking variants.
    #[must_use]
    pub fn velocity_error(&self) -> Velocity {
        match self {
            Self::Pid(controller) => controller.velocity_error(),
            _ => Velocity::default(),
        }
    }

    /// The current position tracking error; zero for non-tracking variants.
    #[must_use]
    pub fn position_error(&self) -> Length {
        match self {
            Self::Pid(controller) => controller.position_error(),
            _ => Length::default(),
        }
    }

    /// The running sum of velocity errors; zero for non-tracking variants.
    #[must_use]
    pub fn velocity_error_sum(&self) -> Velocity {
        match self {
            Self::Pid(controller) => controller.velocity_error_sum(),
            _ => Velocity::default(),
        }
    }

    /// The running sum of position errors; zero for non-tracking variants.
    #[must_use]
    pub fn position_error_sum(&self) -> Length {
        match self {
            Self::Pid(controller) => controller.position_error_sum(),
            _ => Length::default(),
        }
    }

    /// The one-step velocity error difference; zero for non-tracking variants.
    #[must_use]
    pub fn velocity_error_diff(&self) -> Velocity {
        match self {
            Self::Pid(controller) => controller.velocity_error_diff(),
            _ => Velocity::default(),
        }
    }

    /// The one-step position error difference; zero for non-tracking variants.
    #[must_use]
    pub fn position_error_diff(&self) -> Length {
        match self {
            Self::Pid(controller) => controller.position_error_diff(),
            _ => Length::default(),
        }
    }

    /// The force computed by the most recent
    /// [`control_force`](Self::control_force) call.
    #[must_use]
    pub fn last_force(&self) -> Force {
        match self {
            Self::Null => Force::default(),
            Self::Pid(controller) => controller.last_force(),
            Self::Impulse(controller) => controller.last_force(),
            Self::Step(controller) => controller.last_force(),
            Self::Sinusoid(controller) => controller.last_force(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::time::second;

    #[test]
    fn null_controller_never_applies_force() {
        let mut controller = Controller::Null;
        for i in 0..5 {
            let t = Time::new::<second>(f64::from(i));
            let force = controller.control_force(
                t,
                Command::zero(),
                Velocity::default(),
                Length::default(),
            );
            assert_eq!(force, Force::default());
        }
        assert_eq!(controller.velocity_error(), Velocity::default());
        assert_eq!(controller.position_error(), Length::default());
        assert_eq!(controller.last_force(), Force::default());
    }
}
