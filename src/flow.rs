//! The orchestrator that steps a profile, controller, and plant through a run.

use thiserror::Error;
use uom::si::f64::Time;

use crate::{
    controller::Controller,
    observe::{ControllerObserver, ControllerSeries, PlantObserver, PlantSeries, ProfileObserver, ProfileSeries},
    plant::PhysicalObject,
    profile::MotionProfile,
    time::DiscreteTime,
};

/// Error type returned when executing an incompletely configured flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("no discrete time base has been set")]
    MissingDiscreteTime,
    #[error("no motion profile has been set")]
    MissingMotionProfile,
    #[error("no controller has been set")]
    MissingController,
    #[error("no plant has been set")]
    MissingPlant,
}

/// The recorded time series of one simulation run.
///
/// Every series has one sample per time instant; plant samples are taken
/// before that instant's force is applied, so the first plant sample is the
/// initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRecord {
    pub time: Vec<Time>,
    pub profile: ProfileSeries,
    pub controller: ControllerSeries,
    pub plant: PlantSeries,
}

impl MotionRecord {
    /// The number of simulated instants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Wires a time base, motion profile, controller, and plant into a closed
/// loop and executes it.
///
/// Components are set individually; [`execute`](Self::execute) fails fast if
/// any is missing. Each run resets the controller's tracking state, but not
/// the plant or the profile: a second `execute` continues from the plant
/// state (and profile step count) the first one left behind. Callers that
/// want independent runs reset those components explicitly, or seed the plant
/// with [`PhysicalObject::set_state`].
#[derive(Debug, Default)]
pub struct MotionFlow {
    discrete_time: Option<DiscreteTime>,
    motion_profile: Option<MotionProfile>,
    controller: Option<Controller>,
    plant: Option<PhysicalObject>,
}

impl MotionFlow {
    /// Creates a flow with no components configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time base for subsequent runs.
    pub fn set_discrete_time(&mut self, discrete_time: DiscreteTime) {
        self.discrete_time = Some(discrete_time);
    }

    /// Sets the motion profile for subsequent runs.
    pub fn set_motion_profile(&mut self, motion_profile: MotionProfile) {
        self.motion_profile = Some(motion_profile);
    }

    /// Sets the controller for subsequent runs.
    pub fn set_controller(&mut self, controller: Controller) {
        self.controller = Some(controller);
    }

    /// Sets the plant for subsequent runs.
    pub fn set_plant(&mut self, plant: PhysicalObject) {
        self.plant = Some(plant);
    }

    /// The configured time base, if any.
    #[must_use]
    pub fn discrete_time(&self) -> Option<&DiscreteTime> {
        self.discrete_time.as_ref()
    }

    /// The configured motion profile, if any.
    #[must_use]
    pub fn motion_profile(&self) -> Option<&MotionProfile> {
        self.motion_profile.as_ref()
    }

    /// The configured controller, if any.
    #[must_use]
    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    /// The configured plant, if any.
    #[must_use]
    pub fn plant(&self) -> Option<&PhysicalObject> {
        self.plant.as_ref()
    }

    /// Mutable access to the configured plant, for resetting or seeding its
    /// state between runs.
    pub fn plant_mut(&mut self) -> Option<&mut PhysicalObject> {
        self.plant.as_mut()
    }

    /// Runs the closed loop over every instant of the time base.
    ///
    /// Per instant `t`, in order: the profile produces the command, the
    /// controller turns the command and the plant's current velocity and
    /// position into a force, the observers snapshot the command, the
    /// controller, and the plant's pre-step state, and the force is applied
    /// to the plant over `dt`. Termination is solely the end of the time
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] naming the first missing component, before any
    /// stepping happens.
    pub fn execute(&mut self) -> Result<MotionRecord, FlowError> {
        let discrete_time = self.discrete_time.ok_or(FlowError::MissingDiscreteTime)?;
        let profile = self
            .motion_profile
            .as_mut()
            .ok_or(FlowError::MissingMotionProfile)?;
        let controller = self.controller.as_mut().ok_or(FlowError::MissingController)?;
        let plant = self.plant.as_mut().ok_or(FlowError::MissingPlant)?;

        controller.reset();

        let mut time = Vec::new();
        let mut profile_observer = ProfileObserver::new();
        let mut controller_observer = ControllerObserver::new();
        let mut plant_observer = PlantObserver::new(plant);

        let dt = discrete_time.dt();
        for t in discrete_time.steps() {
            time.push(t);

            let command = profile.command(t);
            profile_observer.observe(command);

            let force = controller.control_force(t, command, plant.velocity(), plant.position());
            controller_observer.observe(controller);

            plant_observer.observe(plant);
            plant.apply_force(force, dt);
        }

        Ok(MotionRecord {
            time,
            profile: profile_observer.finish(),
            controller: controller_observer.finish(),
            plant: plant_observer.finish(),
        })
    }
}
