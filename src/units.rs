//! Quantity aliases for dimensions that `uom` does not name.

use uom::{
    si::{
        f64::{Force, Length, Velocity},
        force::newton,
        length::meter,
        velocity::meter_per_second,
        Quantity, ISQ, SI,
    },
    typenum::{N1, N2, P1, Z0},
};

/// Damping: force per unit velocity (N·s/m or kg/s).
///
/// Also the dimension of a velocity-loop PID gain.
pub type Damping = Quantity<ISQ<Z0, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Stiffness: force per unit length (N/m or kg/s²).
///
/// Also the dimension of a position-loop PID gain.
pub type Stiffness = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`Damping`] from a raw SI value (N·s/m).
#[must_use]
pub fn damping_si(value: f64) -> Damping {
    Force::new::<newton>(value) / Velocity::new::<meter_per_second>(1.0)
}

/// Creates a [`Stiffness`] from a raw SI value (N/m).
#[must_use]
pub fn stiffness_si(value: f64) -> Stiffness {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}
