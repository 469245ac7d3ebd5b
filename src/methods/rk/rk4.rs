//! Classic explicit Runge-Kutta 4 (RK4) fixed-grid integrator.

use crate::{
    Float,
    core::{
        ode::ODE,
        rhs::{Rhs, StepError},
        solution::Solution,
        trajectory::Trajectory,
    },
    error::Error,
    methods::{Scheme, integrate},
    solve::Method,
};

/// Classical explicit Runge-Kutta 4 (RK4).
///
/// Four evaluations per step, at the left end, twice at the midpoint and at
/// the right end of the interval. Fourth order, no error estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RungeKutta4;

impl Scheme for RungeKutta4 {
    fn name(&self) -> &'static str {
        Method::RungeKutta4.name()
    }

    fn step<F, A>(
        &mut self,
        rhs: &mut Rhs<'_, F, A>,
        t: &[Float],
        i: usize,
        y: &Trajectory,
    ) -> Result<Vec<Float>, StepError>
    where
        F: ODE<A> + ?Sized,
        A: ?Sized,
    {
        let x = t[i];
        let h = t[i + 1] - x;
        let y = y.row(i);
        let n = y.len();
        let mut yt = vec![0.0; n];

        // Stage computations
        let k1 = rhs.eval(x, y)?;

        for j in 0..n {
            yt[j] = y[j] + h * A21 * k1[j];
        }
        let k2 = rhs.eval(x + C2 * h, &yt)?;

        for j in 0..n {
            yt[j] = y[j] + h * A32 * k2[j];
        }
        let k3 = rhs.eval(x + C3 * h, &yt)?;

        for j in 0..n {
            yt[j] = y[j] + h * A43 * k3[j];
        }
        let k4 = rhs.eval(x + C4 * h, &yt)?;

        // Update state
        for j in 0..n {
            yt[j] = y[j] + h / 6.0 * (k1[j] + 2.0 * k2[j] + 2.0 * k3[j] + k4[j]);
        }

        Ok(yt)
    }
}

/// RK4 over the whole grid.
pub fn rk4<F, A>(f: &F, y0: &[Float], t: &[Float], args: &A) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    integrate(RungeKutta4, f, y0, t, args, false)
}

// Classical RK4 nodes and stage coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
