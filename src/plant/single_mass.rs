use uom::si::{
    f64::{Force, Mass, Time},
    mass::kilogram,
};

use super::{KinematicState, PlantError};

/// A rigid mass: the applied force is the only force acting on it.
///
/// # Example
///
/// ```
/// use axisim::plant::SingleMass;
/// use uom::si::{f64::{Force, Time}, force::newton, time::second};
///
/// let mut plant = SingleMass::from_si(2.0)?;
/// plant.apply_force(Force::new::<newton>(4.0), Time::new::<second>(0.1));
/// # Ok::<(), axisim::plant::PlantError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleMass {
    mass: Mass,
    state: KinematicState,
}

impl SingleMass {
    /// Creates a rigid mass plant at rest.
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::MassNotPositive`] if the mass is zero or negative.
    pub fn new(mass: Mass) -> Result<Self, PlantError> {
        let kg = mass.get::<kilogram>();
        if kg <= 0.0 {
            return Err(PlantError::MassNotPositive(kg));
        }
        Ok(Self {
            mass,
            state: KinematicState::zero(),
        })
    }

    /// Creates a rigid mass plant from a raw SI value (kg).
    ///
    /// # Errors
    ///
    /// Returns [`PlantError::MassNotPositive`] if the mass is zero or negative.
    pub fn from_si(mass: f64) -> Result<Self, PlantError> {
        Self::new(Mass::new::<kilogram>(mass))
    }

    /// The plant's mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// The current kinematic state.
    #[must_use]
    pub fn state(&self) -> KinematicState {
        self.state
    }

    /// Applies a force over one time step.
    pub fn apply_force(&mut self, force: Force, dt: Time) {
        self.state = self.state.integrate(force, self.mass, dt);
    }

    /// Zeroes the kinematic state.
    pub fn reset(&mut self) {
        self.state = KinematicState::zero();
    }

    /// Replaces the kinematic state, e.g. to start away from rest.
    pub fn set_state(&mut self, state: KinematicState) {
        self.state = state;
    }
}
