//! Euler schemes: explicit, and implicit in predictor-corrector form.

use crate::{
    Float,
    core::{
        ode::ODE,
        rhs::{Rhs, StepError},
        solution::Solution,
        trajectory::Trajectory,
    },
    error::Error,
    solve::Method,
};

use super::{Scheme, integrate};

/// Explicit (forward) Euler: `y_{i+1} = y_i + h_i * f(t_i, y_i)`.
///
/// First order; one evaluation per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Scheme for ExplicitEuler {
    fn name(&self) -> &'static str {
        Method::ExplicitEuler.name()
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
        let h = t[i + 1] - t[i];
        let yi = y.row(i);
        let k = rhs.eval(t[i], yi)?;
        Ok(euler_update(yi, h, &k))
    }
}

/// Implicit (backward) Euler approximated by a single predictor-corrector pass.
///
/// The implicit relation `y_{i+1} = y_i + h * f(t_{i+1}, y_{i+1})` is not
/// solved. Instead an explicit Euler predictor
/// `y_p = y_i + h * f(t_i, y_i)` is corrected exactly once:
/// `y_{i+1} = y_i + h * f(t_{i+1}, y_p)`.
///
/// There is no fixed-point iteration and no Newton solve, so the stability
/// of a true backward Euler method is not obtained. Two evaluations per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitEuler;

impl Scheme for ImplicitEuler {
    fn name(&self) -> &'static str {
        Method::ImplicitEuler.name()
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
        let h = t[i + 1] - t[i];
        let yi = y.row(i);

        // Predict
        let k = rhs.eval(t[i], yi)?;
        let yp = euler_update(yi, h, &k);

        // Correct
        let kp = rhs.eval(t[i + 1], &yp)?;
        Ok(euler_update(yi, h, &kp))
    }
}

/// `y + h * k`, componentwise.
pub(crate) fn euler_update(y: &[Float], h: Float, k: &[Float]) -> Vec<Float> {
    y.iter().zip(k).map(|(yj, kj)| yj + h * kj).collect()
}

/// Explicit Euler over the whole grid.
pub fn euler<F, A>(f: &F, y0: &[Float], t: &[Float], args: &A) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    integrate(ExplicitEuler, f, y0, t, args, false)
}

/// Predictor-corrector implicit Euler over the whole grid.
pub fn implicit_euler<F, A>(f: &F, y0: &[Float], t: &[Float], args: &A) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    integrate(ImplicitEuler, f, y0, t, args, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth(_t: Float, y: &[Float], rate: &Float) -> Vec<Float> {
        y.iter().map(|v| rate * v).collect()
    }

    #[test]
    fn explicit_step_by_hand() {
        // y' = 2y, y(0) = 1, h = 0.1 -> 1.2, then 1.2 + 0.05 * 2.4 = 1.32
        let sol = euler(&growth, &[1.0], &[0.0, 0.1, 0.15], &2.0).unwrap();
        assert!((sol.y[1][0] - 1.2).abs() < 1e-12);
        assert!((sol.y[2][0] - 1.32).abs() < 1e-12);
        assert_eq!(sol.nfev, 2);
    }

    #[test]
    fn implicit_single_correction_by_hand() {
        // y' = -y, h = 0.5: y_p = 0.5, y_1 = 1 - 0.5 * 0.5 = 0.75
        let sol = implicit_euler(&growth, &[1.0], &[0.0, 0.5], &-1.0).unwrap();
        assert!((sol.y[1][0] - 0.75).abs() < 1e-12);
        assert_eq!(sol.nfev, 2);
    }

    #[test]
    fn implicit_corrector_uses_end_time() {
        // y' = t: predictor sees t_i, corrector sees t_{i+1}
        let f = |t: Float, _y: &[Float], _: &()| vec![t];
        let sol = implicit_euler(&f, &[0.0], &[1.0, 3.0], &()).unwrap();
        assert!((sol.y[1][0] - 6.0).abs() < 1e-12);
    }
}
