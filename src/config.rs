//! Serde-deserializable specs for every component family.
//!
//! The crate performs no file I/O: callers parse a document with the serde
//! format of their choice and convert the resulting specs into validated
//! components. Polymorphic families deserialize from tagged representations
//! (a `"type"` field selects the variant), and numeric fields carry their SI
//! unit in the name.

use serde::Deserialize;
use thiserror::Error;

use crate::{
    controller::{Controller, ImpulseController, PidController, PidGains, SinusoidController, StepController},
    flow::MotionFlow,
    plant::{MassDamperSpring, PhysicalObject, PlantError, SingleMass},
    profile::{ImpulseProfile, MotionProfile, ProfileError, TrapezoidProfile},
    time::{DiscreteTime, DiscreteTimeError},
};

/// Error type returned when a spec fails component validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid discrete time: {0}")]
    DiscreteTime(#[from] DiscreteTimeError),
    #[error("invalid motion profile: {0}")]
    MotionProfile(#[from] ProfileError),
    #[error("invalid plant: {0}")]
    Plant(#[from] PlantError),
}

/// Spec for a [`DiscreteTime`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DiscreteTimeSpec {
    pub time_step_s: f64,
    pub duration_s: f64,
}

impl TryFrom<DiscreteTimeSpec> for DiscreteTime {
    type Error = ConfigError;

    fn try_from(spec: DiscreteTimeSpec) -> Result<Self, ConfigError> {
        Ok(DiscreteTime::from_seconds(spec.time_step_s, spec.duration_s)?)
    }
}

/// Tagged spec for a [`MotionProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionProfileSpec {
    Null,
    Trapezoid {
        max_velocity_m_s: f64,
        acceleration_m_s2: f64,
        travel_m: f64,
    },
    Impulse {
        velocity_m_s: f64,
        position_m: f64,
        on_step_count: u32,
    },
}

impl TryFrom<MotionProfileSpec> for MotionProfile {
    type Error = ConfigError;

    fn try_from(spec: MotionProfileSpec) -> Result<Self, ConfigError> {
        Ok(match spec {
            MotionProfileSpec::Null => MotionProfile::Null,
            MotionProfileSpec::Trapezoid {
                max_velocity_m_s,
                acceleration_m_s2,
                travel_m,
            } => MotionProfile::Trapezoid(TrapezoidProfile::from_si(
                max_velocity_m_s,
                acceleration_m_s2,
                travel_m,
            )?),
            MotionProfileSpec::Impulse {
                velocity_m_s,
                position_m,
                on_step_count,
            } => MotionProfile::Impulse(ImpulseProfile::from_si(
                velocity_m_s,
                position_m,
                on_step_count,
            )),
        })
    }
}

/// Tagged spec for a [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerSpec {
    Null,
    Pid {
        kvp: f64,
        kvi: f64,
        kvd: f64,
        kpp: f64,
        kpi: f64,
        kpd: f64,
    },
    Impulse {
        force_n: f64,
        on_step_count: u32,
        delay_s: f64,
    },
    Step {
        force_n: f64,
        delay_s: f64,
    },
    Sinusoid {
        amplitude_n: f64,
        frequency_hz: f64,
    },
}

impl From<ControllerSpec> for Controller {
    fn from(spec: ControllerSpec) -> Self {
        match spec {
            ControllerSpec::Null => Controller::Null,
            ControllerSpec::Pid {
                kvp,
                kvi,
                kvd,
                kpp,
                kpi,
                kpd,
            } => Controller::Pid(PidController::new(PidGains::from_si(
                kvp, kvi, kvd, kpp, kpi, kpd,
            ))),
            ControllerSpec::Impulse {
                force_n,
                on_step_count,
                delay_s,
            } => Controller::Impulse(ImpulseController::from_si(force_n, on_step_count, delay_s)),
            ControllerSpec::Step { force_n, delay_s } => {
                Controller::Step(StepController::from_si(force_n, delay_s))
            }
            ControllerSpec::Sinusoid {
                amplitude_n,
                frequency_hz,
            } => Controller::Sinusoid(SinusoidController::from_si(amplitude_n, frequency_hz)),
        }
    }
}

/// Tagged spec for a [`PhysicalObject`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhysicalObjectSpec {
    SingleMass {
        mass_kg: f64,
    },
    MassDamperSpring {
        mass_kg: f64,
        damper_n_s_m: f64,
        spring_n_m: f64,
        #[serde(default)]
        spring_balance_pos_m: f64,
    },
}

impl TryFrom<PhysicalObjectSpec> for PhysicalObject {
    type Error = ConfigError;

    fn try_from(spec: PhysicalObjectSpec) -> Result<Self, ConfigError> {
        Ok(match spec {
            PhysicalObjectSpec::SingleMass { mass_kg } => {
                PhysicalObject::SingleMass(SingleMass::from_si(mass_kg)?)
            }
            PhysicalObjectSpec::MassDamperSpring {
                mass_kg,
                damper_n_s_m,
                spring_n_m,
                spring_balance_pos_m,
            } => PhysicalObject::MassDamperSpring(MassDamperSpring::from_si(
                mass_kg,
                damper_n_s_m,
                spring_n_m,
                spring_balance_pos_m,
            )?),
        })
    }
}

/// Spec for a fully configured [`MotionFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MotionFlowSpec {
    pub discrete_time: DiscreteTimeSpec,
    pub motion_profile: MotionProfileSpec,
    pub controller: ControllerSpec,
    pub plant: PhysicalObjectSpec,
}

impl MotionFlowSpec {
    /// Validates every component and assembles a ready-to-run flow.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised by component validation.
    pub fn into_flow(self) -> Result<MotionFlow, ConfigError> {
        let mut flow = MotionFlow::new();
        flow.set_discrete_time(self.discrete_time.try_into()?);
        flow.set_motion_profile(self.motion_profile.try_into()?);
        flow.set_controller(self.controller.into());
        flow.set_plant(self.plant.try_into()?);
        Ok(flow)
    }
}

impl TryFrom<MotionFlowSpec> for MotionFlow {
    type Error = ConfigError;

    fn try_from(spec: MotionFlowSpec) -> Result<Self, ConfigError> {
        spec.into_flow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn profile_specs_dispatch_on_the_type_tag() {
        let spec: MotionProfileSpec = serde_json::from_value(json!({
            "type": "trapezoid",
            "max_velocity_m_s": 1.0,
            "acceleration_m_s2": 2.0,
            "travel_m": 1.0,
        }))
        .unwrap();

        let profile = MotionProfile::try_from(spec).unwrap();
        assert!(matches!(profile, MotionProfile::Trapezoid(_)));

        let spec: MotionProfileSpec = serde_json::from_value(json!({ "type": "null" })).unwrap();
        assert!(matches!(
            MotionProfile::try_from(spec).unwrap(),
            MotionProfile::Null
        ));
    }

    #[test]
    fn spring_balance_position_defaults_to_zero() {
        let spec: PhysicalObjectSpec = serde_json::from_value(json!({
            "type": "mass_damper_spring",
            "mass_kg": 1.0,
            "damper_n_s_m": 0.5,
            "spring_n_m": 10.0,
        }))
        .unwrap();

        match PhysicalObject::try_from(spec).unwrap() {
            PhysicalObject::MassDamperSpring(plant) => {
                assert_eq!(plant.balance_position(), uom::si::f64::Length::default());
            }
            PhysicalObject::SingleMass(_) => panic!("expected a mass-damper-spring plant"),
        }
    }

    #[test]
    fn invalid_component_values_surface_as_config_errors() {
        let spec: PhysicalObjectSpec = serde_json::from_value(json!({
            "type": "single_mass",
            "mass_kg": 0.0,
        }))
        .unwrap();
        assert_eq!(
            PhysicalObject::try_from(spec),
            Err(ConfigError::Plant(PlantError::MassNotPositive(0.0)))
        );

        let spec: MotionProfileSpec = serde_json::from_value(json!({
            "type": "trapezoid",
            "max_velocity_m_s": 0.0,
            "acceleration_m_s2": 1.0,
            "travel_m": 1.0,
        }))
        .unwrap();
        assert!(matches!(
            MotionProfile::try_from(spec),
            Err(ConfigError::MotionProfile(_))
        ));
    }

    #[test]
    fn a_full_flow_spec_assembles_and_runs() {
        let spec: MotionFlowSpec = serde_json::from_value(json!({
            "discrete_time": { "time_step_s": 0.01, "duration_s": 1.0 },
            "motion_profile": {
                "type": "trapezoid",
                "max_velocity_m_s": 1.0,
                "acceleration_m_s2": 2.0,
                "travel_m": 1.0,
            },
            "controller": {
                "type": "pid",
                "kvp": 1.0, "kvi": 0.0, "kvd": 0.0,
                "kpp": 10.0, "kpi": 0.0, "kpd": 0.0,
            },
            "plant": { "type": "single_mass", "mass_kg": 1.0 },
        }))
        .unwrap();

        let mut flow = spec.into_flow().unwrap();
        let record = flow.execute().unwrap();
        assert_eq!(record.len(), 101);
    }

    #[test]
    fn unknown_type_tags_are_rejected() {
        let result: Result<ControllerSpec, _> =
            serde_json::from_value(json!({ "type": "bang_bang" }));
        assert!(result.is_err());
    }
}
