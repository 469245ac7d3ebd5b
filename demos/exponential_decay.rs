//! # Example: Exponential Decay
//!
//! Solve the exponential decay equation as a first-order system.
//!
//! Equations:
//! dy/dt = -k y
//!
//! Initial condition: y(0) = 1.0, rate k passed as an extra argument.
//!

use odeint::prelude::*;

struct SimpleODE;

impl ODE<f64> for SimpleODE {
    fn ode(&self, _t: f64, y: &[f64], k: &f64) -> Vec<f64> {
        // Example: dy/dt = -k y (exponential decay)
        y.iter().map(|yi| -k * yi).collect()
    }
}

fn main() {
    let f = SimpleODE;
    let k = 0.5;
    let y0 = [1.0];
    let t: Vec<f64> = (0..=50).map(|i| i as f64 * 0.1).collect();

    let options = Options::builder()
        // Default method is RK4
        .build();

    match odeint(&f, &y0, &t, &k, options) {
        Ok(sol) => {
            if let Some((t_last, y_last)) = sol.last() {
                println!("Final state: t = {:.5}, y = {:?}", t_last, y_last);
                println!("Exact:       t = {:.5}, y = {:.8}", t_last, (-k * t_last).exp());
            }
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of steps taken: {}", sol.nstep);

            // Print sampled values
            for (ti, yi) in sol.iter() {
                println!("t = {:.4}, y = {:?}", ti, yi);
            }
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
