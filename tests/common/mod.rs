#![allow(dead_code)]

use odeint::prelude::*;

/// y' = -y
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _t: f64, y: &[f64], _args: &()) -> Vec<f64> {
        y.iter().map(|v| -v).collect()
    }
}

/// y' = c for every component, c taken from the extra arguments.
pub struct ConstantSlope;

impl ODE<f64> for ConstantSlope {
    fn ode(&self, _t: f64, y: &[f64], c: &f64) -> Vec<f64> {
        vec![*c; y.len()]
    }
}

/// Simple harmonic oscillator x'' = -omega^2 x.
pub struct SHO;

impl ODE<f64> for SHO {
    fn ode(&self, _t: f64, y: &[f64], omega: &f64) -> Vec<f64> {
        vec![y[1], -omega * omega * y[0]]
    }
}

/// y' = cos(t), non-autonomous with solution y0 + sin(t).
pub struct Forced;

impl ODE for Forced {
    fn ode(&self, t: f64, _y: &[f64], _args: &()) -> Vec<f64> {
        vec![t.cos()]
    }
}

/// Always returns three components regardless of the state length.
pub struct WrongLength;

impl ODE for WrongLength {
    fn ode(&self, _t: f64, _y: &[f64], _args: &()) -> Vec<f64> {
        vec![0.0; 3]
    }
}

/// `n + 1` evenly spaced points on [t0, t1].
pub fn uniform_grid(t0: f64, t1: f64, n: usize) -> Vec<f64> {
    let h = (t1 - t0) / n as f64;
    (0..=n).map(|i| t0 + i as f64 * h).collect()
}

/// |y_N - e^{-1}| for y' = -y, y(0) = 1 on [0, 1] with `n` steps.
pub fn decay_error(method: Method, n: usize) -> f64 {
    let t = uniform_grid(0.0, 1.0, n);
    let sol = odeint(&Decay, &[1.0], &t, &(), method.into()).unwrap();
    (sol.y.last().unwrap()[0] - (-1.0f64).exp()).abs()
}
