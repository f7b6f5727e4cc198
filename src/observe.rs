//! Per-step recorders that accumulate simulation signals into series.
//!
//! Observers are plain accumulators driven by the simulation loop: the loop
//! pushes one sample per time instant, then finishes each observer into its
//! series struct. Every series in a finished record has the same length as
//! the time sequence.

use uom::si::f64::{Acceleration, Force, Length, Velocity};

use crate::{
    controller::Controller,
    plant::PhysicalObject,
    profile::Command,
};

/// The commanded trajectory, one sample per time instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSeries {
    pub cmd_velocity: Vec<Velocity>,
    pub cmd_position: Vec<Length>,
}

/// The controller's tracking state and output, one sample per time instant.
///
/// The error series are identically zero for non-tracking controllers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSeries {
    pub velocity_error: Vec<Velocity>,
    pub position_error: Vec<Length>,
    pub velocity_error_sum: Vec<Velocity>,
    pub position_error_sum: Vec<Length>,
    pub velocity_error_diff: Vec<Velocity>,
    pub position_error_diff: Vec<Length>,
    pub force: Vec<Force>,
}

/// The internal forces of a mass-damper-spring plant, one sample per step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MdsForceSeries {
    pub damper_force: Vec<Force>,
    pub spring_force: Vec<Force>,
    pub net_force: Vec<Force>,
}

/// The plant's kinematic state, one sample per time instant.
///
/// Samples are taken before the step's force is applied, so the first sample
/// is the plant's initial state. `forces` is present only for plants that
/// expose internal forces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantSeries {
    pub acceleration: Vec<Acceleration>,
    pub velocity: Vec<Velocity>,
    pub position: Vec<Length>,
    pub forces: Option<MdsForceSeries>,
}

/// Accumulates [`Command`] samples into a [`ProfileSeries`].
#[derive(Debug, Default)]
pub struct ProfileObserver {
    series: ProfileSeries,
}

impl ProfileObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one command sample.
    pub fn observe(&mut self, command: Command) {
        self.series.cmd_velocity.push(command.velocity);
        self.series.cmd_position.push(command.position);
    }

    /// Consumes the observer, yielding the accumulated series.
    #[must_use]
    pub fn finish(self) -> ProfileSeries {
        self.series
    }
}

/// Accumulates controller snapshots into a [`ControllerSeries`].
#[derive(Debug, Default)]
pub struct ControllerObserver {
    series: ControllerSeries,
}

impl ControllerObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the controller's current tracking state and last force.
    pub fn observe(&mut self, controller: &Controller) {
        let series = &mut self.series;
        series.velocity_error.push(controller.velocity_error());
        series.position_error.push(controller.position_error());
        series.velocity_error_sum.push(controller.velocity_error_sum());
        series.position_error_sum.push(controller.position_error_sum());
        series.velocity_error_diff.push(controller.velocity_error_diff());
        series.position_error_diff.push(controller.position_error_diff());
        series.force.push(controller.last_force());
    }

    /// Consumes the observer, yielding the accumulated series.
    #[must_use]
    pub fn finish(self) -> ControllerSeries {
        self.series
    }
}

/// Accumulates plant state snapshots into a [`PlantSeries`].
#[derive(Debug)]
pub struct PlantObserver {
    series: PlantSeries,
}

impl PlantObserver {
    /// Creates an observer shaped for the given plant: force series are
    /// allocated only for plants that expose internal forces.
    #[must_use]
    pub fn new(plant: &PhysicalObject) -> Self {
        let forces = match plant {
            PhysicalObject::SingleMass(_) => None,
            PhysicalObject::MassDamperSpring(_) => Some(MdsForceSeries::default()),
        };
        Self {
            series: PlantSeries {
                forces,
                ..PlantSeries::default()
            },
        }
    }

    /// Records the plant's current state, plus internal forces where present.
    pub fn observe(&mut self, plant: &PhysicalObject) {
        let state = plant.state();
        self.series.acceleration.push(state.acceleration);
        self.series.velocity.push(state.velocity);
        self.series.position.push(state.position);

        if let (Some(forces), PhysicalObject::MassDamperSpring(mds)) =
            (self.series.forces.as_mut(), plant)
        {
            forces.damper_force.push(mds.damper_force());
            forces.spring_force.push(mds.spring_force());
            forces.net_force.push(mds.net_force());
        }
    }

    /// Consumes the observer, yielding the accumulated series.
    #[must_use]
    pub fn finish(self) -> PlantSeries {
        self.series
    }
}
