//! Motion profile generators: the reference trajectories a controller tracks.

mod impulse;
mod trapezoid;

use uom::si::f64::{Length, Time, Velocity};

pub use impulse::ImpulseProfile;
pub use trapezoid::{ProfileError, TrapezoidProfile};

/// The reference command at one instant: velocity and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    pub velocity: Velocity,
    pub position: Length,
}

impl Command {
    /// Creates a command from a velocity and a position.
    #[must_use]
    pub fn new(velocity: Velocity, position: Length) -> Self {
        Self { velocity, position }
    }

    /// The zero command.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            velocity: Velocity::default(),
            position: Length::default(),
        }
    }
}

/// The closed family of motion profile generators.
///
/// `Null` commands zero at every instant, [`TrapezoidProfile`] is a pure
/// function of elapsed time, and [`ImpulseProfile`] depends on call order
/// instead: it counts invocations. Callers must therefore invoke
/// [`command`](Self::command) exactly once per simulated step, in order.
#[derive(Debug, Clone)]
pub enum MotionProfile {
    /// Always commands zero velocity and position.
    Null,
    /// Accelerate, cruise, decelerate, then hold at the travel target.
    Trapezoid(TrapezoidProfile),
    /// A fixed command for the first N steps, zero afterwards.
    Impulse(ImpulseProfile),
}

impl MotionProfile {
    /// Returns the command velocity and position for elapsed time `t`.
    pub fn command(&mut self, t: Time) -> Command {
        match self {
            Self::Null => Command::zero(),
            Self::Trapezoid(profile) => profile.command(t),
            Self::Impulse(profile) => profile.command(),
        }
    }

    /// Returns the profile to its post-construction state.
    pub fn reset(&mut self) {
        match self {
            Self::Null | Self::Trapezoid(_) => {}
            Self::Impulse(profile) => profile.reset(),
        }
    }
}
