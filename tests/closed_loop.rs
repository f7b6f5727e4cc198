//! End-to-end closed-loop scenarios through the public API.

use approx::assert_relative_eq;
use axisim::{
    controller::{Controller, PidController, PidGains},
    flow::MotionFlow,
    plant::{PhysicalObject, SingleMass},
    profile::{MotionProfile, TrapezoidProfile},
    time::DiscreteTime,
    MotionFlowSpec,
};
use serde_json::json;
use uom::si::{length::meter, velocity::meter_per_second};

#[test]
fn velocity_loop_tracks_a_trapezoid_move() {
    // V = 1 m/s, A = 2 m/s², L = 1 m: the profile finishes at T = 1.5 s. A
    // velocity-only proportional loop on a 1 kg mass has time constant
    // m/kvp = 0.1 s, so by 3 s the plant has delivered the commanded travel.
    let mut flow = MotionFlow::new();
    flow.set_discrete_time(DiscreteTime::from_seconds(0.01, 3.0).unwrap());
    flow.set_motion_profile(MotionProfile::Trapezoid(
        TrapezoidProfile::from_si(1.0, 2.0, 1.0).unwrap(),
    ));
    flow.set_controller(Controller::Pid(PidController::new(PidGains::from_si(
        10.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ))));
    flow.set_plant(PhysicalObject::SingleMass(SingleMass::from_si(1.0).unwrap()));

    let record = flow.execute().unwrap();

    assert_eq!(record.len(), 301);
    assert_eq!(record.profile.cmd_position.len(), record.len());
    assert_eq!(record.controller.force.len(), record.len());
    assert_eq!(record.plant.position.len(), record.len());

    // The command has settled at the travel target.
    let last = record.len() - 1;
    assert_relative_eq!(record.profile.cmd_position[last].get::<meter>(), 1.0);
    assert_relative_eq!(
        record.profile.cmd_velocity[last].get::<meter_per_second>(),
        0.0
    );

    // The plant followed it: at rest, at the target, to within the lag the
    // proportional loop leaves behind.
    assert_relative_eq!(
        record.plant.velocity[last].get::<meter_per_second>(),
        0.0,
        epsilon = 1e-4
    );
    assert_relative_eq!(
        record.plant.position[last].get::<meter>(),
        1.0,
        epsilon = 0.02
    );

    // The plant can never lead the command under pure velocity tracking.
    for (commanded, actual) in record
        .profile
        .cmd_position
        .iter()
        .zip(&record.plant.position)
    {
        assert!(actual <= commanded);
    }
}

#[test]
fn a_config_document_reproduces_the_hand_built_flow() {
    let spec: MotionFlowSpec = serde_json::from_value(json!({
        "discrete_time": { "time_step_s": 0.01, "duration_s": 3.0 },
        "motion_profile": {
            "type": "trapezoid",
            "max_velocity_m_s": 1.0,
            "acceleration_m_s2": 2.0,
            "travel_m": 1.0,
        },
        "controller": {
            "type": "pid",
            "kvp": 10.0, "kvi": 0.0, "kvd": 0.0,
            "kpp": 0.0, "kpi": 0.0, "kpd": 0.0,
        },
        "plant": { "type": "single_mass", "mass_kg": 1.0 },
    }))
    .unwrap();
    let from_config = spec.into_flow().unwrap().execute().unwrap();

    let mut by_hand = MotionFlow::new();
    by_hand.set_discrete_time(DiscreteTime::from_seconds(0.01, 3.0).unwrap());
    by_hand.set_motion_profile(MotionProfile::Trapezoid(
        TrapezoidProfile::from_si(1.0, 2.0, 1.0).unwrap(),
    ));
    by_hand.set_controller(Controller::Pid(PidController::new(PidGains::from_si(
        10.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    ))));
    by_hand.set_plant(PhysicalObject::SingleMass(SingleMass::from_si(1.0).unwrap()));

    assert_eq!(from_config, by_hand.execute().unwrap());
}

#[test]
fn sinusoid_excitation_of_a_mass_damper_spring_records_internal_forces() {
    let spec: MotionFlowSpec = serde_json::from_value(json!({
        "discrete_time": { "time_step_s": 0.001, "duration_s": 2.0 },
        "motion_profile": { "type": "null" },
        "controller": { "type": "sinusoid", "amplitude_n": 1.0, "frequency_hz": 2.0 },
        "plant": {
            "type": "mass_damper_spring",
            "mass_kg": 1.0,
            "damper_n_s_m": 0.5,
            "spring_n_m": 20.0,
        },
    }))
    .unwrap();

    let record = spec.into_flow().unwrap().execute().unwrap();

    assert_eq!(record.len(), 2001);
    let forces = record.plant.forces.as_ref().unwrap();
    assert_eq!(forces.net_force.len(), record.len());

    // The command stays zero while the excitation moves the plant.
    assert!(record
        .profile
        .cmd_position
        .iter()
        .all(|p| *p == uom::si::f64::Length::default()));
    assert!(record
        .plant
        .position
        .iter()
        .any(|p| p.get::<meter>().abs() > 1e-4));

    // Driven well off resonance, the response stays within the static
    // deflection scale amplitude/spring = 0.05 m.
    assert!(record
        .plant
        .position
        .iter()
        .all(|p| p.get::<meter>().abs() < 0.5));
}
