//! Closed-loop discrete-time simulation of a single-axis motion-control system.
//!
//! A reference trajectory generator ([`MotionProfile`]) drives a
//! [`Controller`], which drives a physical plant ([`PhysicalObject`]), over a
//! finite sequence of instants produced by [`DiscreteTime`]. The
//! [`MotionFlow`] orchestrator wires the four together and records a
//! per-step time series of commanded and observed signals, for evaluating
//! controller tuning against a plant model before running on real hardware.
//!
//! All physical signals are unit-safe [`uom`] quantities; configuration
//! crosses the crate boundary as already-parsed, serde-deserialized specs in
//! the [`config`] module. The crate performs no I/O of its own.
//!
//! # Example
//!
//! ```
//! use axisim::{
//!     controller::Controller,
//!     flow::MotionFlow,
//!     plant::{PhysicalObject, SingleMass},
//!     profile::{MotionProfile, TrapezoidProfile},
//!     time::DiscreteTime,
//! };
//!
//! let mut flow = MotionFlow::new();
//! flow.set_discrete_time(DiscreteTime::from_seconds(0.01, 1.0)?);
//! flow.set_motion_profile(MotionProfile::Trapezoid(
//!     TrapezoidProfile::from_si(1.0, 2.0, 1.0)?,
//! ));
//! flow.set_controller(Controller::Null);
//! flow.set_plant(PhysicalObject::SingleMass(SingleMass::from_si(1.0)?));
//!
//! let record = flow.execute()?;
//! assert_eq!(record.len(), 101);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod controller;
pub mod flow;
pub mod observe;
pub mod plant;
pub mod profile;
pub mod time;
pub mod units;

pub use config::{ConfigError, MotionFlowSpec};
pub use controller::Controller;
pub use flow::{FlowError, MotionFlow, MotionRecord};
pub use plant::PhysicalObject;
pub use profile::{Command, MotionProfile};
pub use time::DiscreteTime;
