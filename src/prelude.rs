//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odeint::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Trajectory`, `Solution`, `Error`.
//! - Stepping schemes: the `Scheme` trait and its four implementations.
//! - High-level API: `odeint`, `odeint_named`, `Options`, and `Method`.
//!

pub use crate::core::{ode::ODE, solution::Solution, trajectory::Trajectory};
pub use crate::error::Error;
pub use crate::methods::{AdamsBashforth2, ExplicitEuler, ImplicitEuler, RungeKutta4, Scheme};
pub use crate::solve::{Method, Options, odeint, odeint_named};
