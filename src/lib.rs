//! Fixed-grid integrators for first-order systems of ordinary differential equations.
//!
//! Given a derivative function `y' = f(t, y, args)`, an initial state and a
//! sequence of time points, the integrators produce the approximate state at
//! every requested time. Four stepping schemes are available, see [`Method`].
//!
//! ```
//! use odeint::prelude::*;
//!
//! let decay = |_t: f64, y: &[f64], _args: &()| vec![-y[0]];
//! let t: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
//! let options = Options::builder().method(Method::RungeKutta4).build();
//! let sol = odeint(&decay, &[1.0], &t, &(), options).unwrap();
//! assert_eq!(sol.y.nrows(), t.len());
//! assert_eq!(sol.y[0], [1.0]);
//! ```

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use crate::core::{ode::ODE, solution::Solution, trajectory::Trajectory};
pub use error::Error;
pub use solve::{Method, Options, odeint, odeint_named};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 via the crate features.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
