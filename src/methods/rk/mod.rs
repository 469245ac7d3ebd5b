//! Explicit Runge-Kutta integrators (RK4)

mod rk4;

pub use rk4::{RungeKutta4, rk4};
