//! Example: harmonic oscillator on a non-uniform grid with the
//! predictor-corrector implicit Euler scheme.

use odeint::prelude::*;
use std::f64::consts::PI;

struct HarmonicOscillator;

impl ODE for HarmonicOscillator {
    fn ode(&self, _t: f64, y: &[f64], _args: &()) -> Vec<f64> {
        vec![y[1], -y[0]]
    }
}

fn main() {
    let y0 = [1.0, 0.0];
    // Denser sampling near the turning points at 0, pi and 2 pi
    let t: Vec<f64> = (0..=400)
        .map(|i| {
            let s = i as f64 / 400.0;
            2.0 * PI * (s - (2.0 * PI * s).sin() / (4.0 * PI))
        })
        .collect();

    let options = Options::builder().method(Method::ImplicitEuler).build();

    match odeint(&HarmonicOscillator, &y0, &t, &(), options) {
        Ok(sol) => {
            let energy = |y: &[f64]| 0.5 * (y[0] * y[0] + y[1] * y[1]);
            let e0 = energy(&sol.y[0]);
            for (ti, yi) in sol.iter().step_by(40) {
                println!(
                    "t = {:.4}, x = {:+.6}, v = {:+.6}, energy drift = {:+.3e}",
                    ti,
                    yi[0],
                    yi[1],
                    energy(yi) - e0
                );
            }
            println!("Number of function evaluations: {}", sol.nfev);
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
