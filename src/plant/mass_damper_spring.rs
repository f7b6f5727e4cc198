use uom::si::{
    f64::{Force, Length, Mass, Time},
    mass::kilogram,
};

use crate::units::{Damping, Stiffness};

use super::{KinematicState, PlantError};

/// A mass with a damper and a spring restoring it toward a balance position.
///
/// Each [`apply_force`](Self::apply_force) call evaluates the damper and
/// spring forces from the pre-step state, sums them with the external force,
/// and performs exactly one integration pass with the net force. The three
/// per-step force values are kept for observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassDamperSpring {
    mass: Mass,
    damper: Damping,
    spring: Stiffness,
    balance_position: Length,
    state: KinematicState,
    damper_force: Force,
    spring_force: Force,
    net_force: Force,
}

impl MassDamperSpring {
    /// Creates a mass-damper-spring plant at rest.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::MassNotPositive`] if the mass is zero or negative.
    pub fn new(
        mass: Mass,
        damper: Damping,
        spring: Stiffness,
        balance_position: Length,
    ) -> Result<Self, PlantError> {
        let kg = mass.get::<kilogram>();
        if kg <= 0.0 {
            return Err(PlantError::MassNotPositive(kg));
        }
        Ok(Self {
            mass,
            damper,
            spring,
            balance_position,
            state: KinematicState::zero(),
            damper_force: Force::default(),
            spring_force: Force::default(),
            net_force: Force::default(),
        })
    }

    /// Creates a mass-damper-spring plant from raw SI values
    /// (kg, N·s/m, N/m, m).
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::MassNotPositive`] if the mass is zero or negative.
    pub fn from_si(
        mass: f64,
        damper: f64,
        spring: f64,
        balance_position: f64,
    ) -> Result<Self, PlantError> {
        use uom::si::length::meter;

        use crate::units::{damping_si, stiffness_si};

        Self::new(
            Mass::new::<kilogram>(mass),
            damping_si(damper),
            stiffness_si(spring),
            Length::new::<meter>(balance_position),
        )
    }

    /// The plant's mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// The damper coefficient.
    #[must_use]
    pub fn damper(&self) -> Damping {
        self.damper
    }

    /// The spring coefficient.
    #[must_use]
    pub fn spring(&self) -> Stiffness {
        self.spring
    }

    /// The position at which the spring exerts no force.
    #[must_use]
    pub fn balance_position(&self) -> Length {
        self.balance_position
    }

    /// The current kinematic state.
    #[must_use]
    pub fn state(&self) -> KinematicState {
        self.state
    }

    /// The damper force evaluated during the last step.
    #[must_use]
    pub fn damper_force(&self) -> Force {
        self.damper_force
    }

    /// The spring force evaluated during the last step.
    #[must_use]
    pub fn spring_force(&self) -> Force {
        self.spring_force
    }

    /// The net force integrated during the last step.
    #[must_use]
    pub fn net_force(&self) -> Force {
        self.net_force
    }

    /// Applies an external force over one time step.
    ///
    /// The restoring forces use the pre-step velocity and position; the state
    /// is then advanced by a single integration pass with the net force.
    pub fn apply_force(&mut self, external_force: Force, dt: Time) {
        self.damper_force = -(self.damper * self.state.velocity);
        self.spring_force = -(self.spring * (self.state.position - self.balance_position));
        self.net_force = external_force + self.damper_force + self.spring_force;

        self.state = self.state.integrate(self.net_force, self.mass, dt);
    }

    /// Zeroes the kinematic state and the per-step force bookkeeping.
    pub fn reset(&mut self) {
        self.state = KinematicState::zero();
        self.damper_force = Force::default();
        self.spring_force = Force::default();
        self.net_force = Force::default();
    }

    /// Replaces the kinematic state, e.g. to start away from rest.
    pub fn set_state(&mut self, state: KinematicState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Acceleration, Velocity},
        force::newton,
        length::meter,
        time::second,
        velocity::meter_per_second,
    };

    fn displaced_plant() -> MassDamperSpring {
        let mut plant = MassDamperSpring::from_si(1.0, 1.0, 1.0, 0.0).unwrap();
        plant.set_state(KinematicState::seeded(
            Acceleration::default(),
            Velocity::new::<meter_per_second>(1.0),
            Length::new::<meter>(1.0),
        ));
        plant
    }

    #[test]
    fn restoring_forces_use_the_pre_step_state() {
        // vel = 1, pos = 1, d = k = 1: Fd = -1, Fs = -1, net = 3 - 2 = 1.
        let mut plant = displaced_plant();
        let dt = Time::new::<second>(0.1);
        plant.apply_force(Force::new::<newton>(3.0), dt);

        assert_relative_eq!(plant.damper_force().get::<newton>(), -1.0);
        assert_relative_eq!(plant.spring_force().get::<newton>(), -1.0);
        assert_relative_eq!(plant.net_force().get::<newton>(), 1.0);

        // Exactly one integration pass with net = 1 N on 1 kg:
        // vel = 1 + 1·0.1 = 1.1, pos = 1 + 1·0.1 + ½·1·0.01 = 1.105.
        let state = plant.state();
        assert_relative_eq!(state.velocity.get::<meter_per_second>(), 1.1);
        assert_relative_eq!(state.position.get::<meter>(), 1.105);
    }

    #[test]
    fn holds_still_at_the_balance_position() {
        let mut plant = MassDamperSpring::from_si(2.0, 0.5, 10.0, 1.5).unwrap();
        plant.set_state(KinematicState::seeded(
            Acceleration::default(),
            Velocity::default(),
            Length::new::<meter>(1.5),
        ));

        let dt = Time::new::<second>(0.01);
        for _ in 0..50 {
            plant.apply_force(Force::default(), dt);
        }

        assert_relative_eq!(plant.state().position.get::<meter>(), 1.5);
        assert_relative_eq!(plant.state().velocity.get::<meter_per_second>(), 0.0);
    }

    #[test]
    fn damped_free_motion_decays() {
        // Released from pos = 1 with no external force: the spring pulls the
        // mass back and the damper bleeds energy every step.
        let mut plant = MassDamperSpring::from_si(1.0, 2.0, 5.0, 0.0).unwrap();
        plant.set_state(KinematicState::seeded(
            Acceleration::default(),
            Velocity::default(),
            Length::new::<meter>(1.0),
        ));

        let dt = Time::new::<second>(0.001);
        for _ in 0..10_000 {
            plant.apply_force(Force::default(), dt);
        }

        // 10 s is many time constants for this system.
        assert_relative_eq!(plant.state().position.get::<meter>(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(
            plant.state().velocity.get::<meter_per_second>(),
            0.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn reset_clears_state_and_force_bookkeeping() {
        let mut plant = displaced_plant();
        plant.apply_force(Force::new::<newton>(3.0), Time::new::<second>(0.1));

        plant.reset();
        assert_eq!(plant.state(), KinematicState::zero());
        assert_eq!(plant.damper_force(), Force::default());
        assert_eq!(plant.spring_force(), Force::default());
        assert_eq!(plant.net_force(), Force::default());
    }
}
