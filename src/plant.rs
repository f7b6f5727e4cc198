//! Plant models: the physical objects a controller drives.

mod mass_damper_spring;
mod single_mass;

use thiserror::Error;
use uom::si::f64::{Acceleration, Force, Length, Mass, Time, Velocity};

pub use mass_damper_spring::MassDamperSpring;
pub use single_mass::SingleMass;

/// Kinematic state of a plant, with the previous value of each signal.
///
/// The previous velocity is load-bearing: the position update of
/// [`integrate`](Self::integrate) uses it, not the just-updated velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    pub acceleration: Acceleration,
    pub prev_acceleration: Acceleration,
    pub velocity: Velocity,
    pub prev_velocity: Velocity,
    pub position: Length,
    pub prev_position: Length,
}

impl KinematicState {
    /// The all-zero state every plant starts from.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// A state seeded with the given signals; previous values are set to the
    /// same signals, as if the plant had been holding them.
    #[must_use]
    pub fn seeded(acceleration: Acceleration, velocity: Velocity, position: Length) -> Self {
        Self {
            acceleration,
            prev_acceleration: acceleration,
            velocity,
            prev_velocity: velocity,
            position,
            prev_position: position,
        }
    }

    /// One constant-acceleration integration step under `force`.
    ///
    /// Takes the pre-step state and returns the post-step state:
    ///
    /// ```text
    ///   acc' = force / mass
    ///   vel' = vel + acc'·dt
    ///   pos' = pos + vel·dt + ½·acc'·dt²
    /// ```
    ///
    /// The position term uses the pre-update velocity `vel`; using `vel'`
    /// would count the step's acceleration twice.
    #[must_use]
    pub fn integrate(self, force: Force, mass: Mass, dt: Time) -> Self {
        let acceleration = force / mass;
        let velocity = self.velocity + acceleration * dt;
        let position = self.position + self.velocity * dt + 0.5 * acceleration * dt * dt;

        Self {
            acceleration,
            prev_acceleration: self.acceleration,
            velocity,
            prev_velocity: self.velocity,
            position,
            prev_position: self.position,
        }
    }
}

/// Error type returned when constructing an invalid plant.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlantError {
    #[error("mass must be greater than zero, got {0} kg")]
    MassNotPositive(f64),
}

/// The closed family of plant models.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalObject {
    /// A rigid mass driven only by the applied force.
    SingleMass(SingleMass),
    /// A mass with a damper and a spring restoring it toward a balance position.
    MassDamperSpring(MassDamperSpring),
}

impl PhysicalObject {
    /// Applies a force over one time step, advancing the kinematic state.
    pub fn apply_force(&mut self, force: Force, dt: Time) {
        match self {
            Self::SingleMass(plant) => plant.apply_force(force, dt),
            Self::MassDamperSpring(plant) => plant.apply_force(force, dt),
        }
    }

    /// Zeroes the kinematic state (and any per-step force bookkeeping).
    pub fn reset(&mut self) {
        match self {
            Self::SingleMass(plant) => plant.reset(),
            Self::MassDamperSpring(plant) => plant.reset(),
        }
    }

    /// Seeds the kinematic state, e.g. to start a run away from rest.
    pub fn set_state(&mut self, acceleration: Acceleration, velocity: Velocity, position: Length) {
        let state = KinematicState::seeded(acceleration, velocity, position);
        match self {
            Self::SingleMass(plant) => plant.set_state(state),
            Self::MassDamperSpring(plant) => plant.set_state(state),
        }
    }

    /// The plant's mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        match self {
            Self::SingleMass(plant) => plant.mass(),
            Self::MassDamperSpring(plant) => plant.mass(),
        }
    }

    /// The current kinematic state.
    #[must_use]
    pub fn state(&self) -> KinematicState {
        match self {
            Self::SingleMass(plant) => plant.state(),
            Self::MassDamperSpring(plant) => plant.state(),
        }
    }

    /// The current acceleration.
    #[must_use]
    pub fn acceleration(&self) -> Acceleration {
        self.state().acceleration
    }

    /// The current velocity.
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.state().velocity
    }

    /// The current position.
    #[must_use]
    pub fn position(&self) -> Length {
        self.state().position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        force::newton, length::meter, mass::kilogram, time::second, velocity::meter_per_second,
    };

    #[test]
    fn integrate_uses_the_pre_update_velocity_for_position() {
        let state = KinematicState::seeded(
            Acceleration::default(),
            Velocity::new::<meter_per_second>(1.0),
            Length::new::<meter>(2.0),
        );
        let next = state.integrate(
            Force::new::<newton>(4.0),
            Mass::new::<kilogram>(2.0),
            Time::new::<second>(0.5),
        );

        // acc = 2, vel = 1 + 2·0.5 = 2, pos = 2 + 1·0.5 + ½·2·0.25 = 2.75.
        assert_relative_eq!(next.acceleration.get::<uom::si::acceleration::meter_per_second_squared>(), 2.0);
        assert_relative_eq!(next.velocity.get::<meter_per_second>(), 2.0);
        assert_relative_eq!(next.position.get::<meter>(), 2.75);

        // Previous values archive the pre-step state.
        assert_relative_eq!(next.prev_velocity.get::<meter_per_second>(), 1.0);
        assert_relative_eq!(next.prev_position.get::<meter>(), 2.0);
    }

    #[test]
    fn physical_objects_compare_by_parameters_and_state() {
        let resting = PhysicalObject::SingleMass(SingleMass::from_si(1.0).unwrap());
        let mut pushed = resting.clone();
        assert_eq!(resting, pushed);

        pushed.apply_force(Force::new::<newton>(1.0), Time::new::<second>(0.1));
        assert_ne!(resting, pushed);
    }

    #[test]
    fn seeded_state_archives_the_same_signals() {
        let state = KinematicState::seeded(
            Acceleration::default(),
            Velocity::new::<meter_per_second>(3.0),
            Length::new::<meter>(-1.0),
        );
        assert_eq!(state.velocity, state.prev_velocity);
        assert_eq!(state.position, state.prev_position);
    }
}
