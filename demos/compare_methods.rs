//! Example: compare the four schemes on dy/dt = -y at several step sizes,
//! selecting each method by name.

use odeint::prelude::*;

fn main() {
    let decay = |_t: f64, y: &[f64], _args: &()| vec![-y[0]];
    let exact = (-1.0f64).exp();

    println!("{:>18} {:>8} {:>14}", "method", "h", "error at t=1");
    for name in ["ee", "ie", "rk", "ab"] {
        let method: Method = match name.parse() {
            Ok(method) => method,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        for n in [10, 20, 40] {
            let t: Vec<f64> = (0..=n).map(|i| i as f64 / n as f64).collect();
            match odeint(&decay, &[1.0], &t, &(), method.into()) {
                Ok(sol) => {
                    let err = (sol.y[n][0] - exact).abs();
                    println!("{:>18} {:>8.4} {:>14.3e}", method, 1.0 / n as f64, err);
                }
                Err(e) => eprintln!("{}: {}", method, e),
            }
        }
    }

    // An unknown name is rejected rather than silently replaced.
    if let Err(e) = odeint_named("xyz", &decay, &[1.0], &[0.0, 1.0], &()) {
        println!("{}", e);
    }
}
