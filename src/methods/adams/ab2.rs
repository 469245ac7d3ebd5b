//! Two-step Adams-Bashforth (AB2) with an Euler bootstrap.

use crate::{
    Float,
    core::{
        ode::ODE,
        rhs::{Rhs, StepError},
        solution::Solution,
        trajectory::Trajectory,
    },
    error::Error,
    methods::{Scheme, euler::euler_update, integrate},
    solve::Method,
};

/// Where the AB2 recurrence is in its startup sequence.
///
/// `Bootstrap0 -> Bootstrap1 -> SteadyState`, never backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No history: row 1 comes from one explicit Euler step.
    Bootstrap0,
    /// One derivative of history: row 2 uses the variable-step AB2 formula
    /// built from the first two interval widths.
    Bootstrap1,
    /// Rows 3 onward use the fixed coefficients (3/2, -1/2).
    SteadyState,
}

/// Two-step Adams-Bashforth.
///
/// The steady-state recurrence
/// `y_{i+1} = y_i + 1.5*h*f(t_i, y_i) - 0.5*h*f(t_{i-1}, y_{i-1})`
/// with `h = t_{i+1} - t_i` assumes the previous interval had the same
/// width. On a non-uniform grid this drops to first-order accuracy from
/// row 3 onward; only the row-2 bootstrap accounts for differing widths.
///
/// `f(t_{i-1}, y_{i-1})` is kept from the previous step rather than
/// re-evaluated, so each interval costs one evaluation.
#[derive(Debug, Clone)]
pub struct AdamsBashforth2 {
    phase: Phase,
    f_prev: Vec<Float>,
}

impl AdamsBashforth2 {
    pub fn new() -> Self {
        Self {
            phase: Phase::Bootstrap0,
            f_prev: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Steady-state update from `y_i`, `f_i = f(t_i, y_i)` and
    /// `f_prev = f(t_{i-1}, y_{i-1})` with step `h`.
    pub fn steady_update(y: &[Float], h: Float, f_i: &[Float], f_prev: &[Float]) -> Vec<Float> {
        y.iter()
            .zip(f_i.iter().zip(f_prev))
            .map(|(yj, (fj, pj))| yj + (1.5 * h * fj - 0.5 * h * pj))
            .collect()
    }

    /// Row-2 update with interval widths `h1 = t_1 - t_0`, `h2 = t_2 - t_1`.
    pub fn bootstrap_update(
        y1: &[Float],
        h1: Float,
        h2: Float,
        f1: &[Float],
        f0: &[Float],
    ) -> Vec<Float> {
        let scale = 0.5 * h2 / h1;
        y1.iter()
            .zip(f1.iter().zip(f0))
            .map(|(yj, (f1j, f0j))| yj + scale * ((2.0 * h1 + h2) * f1j - h2 * f0j))
            .collect()
    }
}

impl Default for AdamsBashforth2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheme for AdamsBashforth2 {
    fn name(&self) -> &'static str {
        Method::AdamsBashforth2.name()
    }

    fn min_points(&self) -> usize {
        3
    }

    fn reset(&mut self) {
        self.phase = Phase::Bootstrap0;
        self.f_prev.clear();
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
        let yi = y.row(i);
        let f_i = rhs.eval(t[i], yi)?;

        let next = match self.phase {
            Phase::Bootstrap0 => {
                let h = t[i + 1] - t[i];
                self.phase = Phase::Bootstrap1;
                euler_update(yi, h, &f_i)
            }
            Phase::Bootstrap1 => {
                let h1 = t[i] - t[i - 1];
                let h2 = t[i + 1] - t[i];
                self.phase = Phase::SteadyState;
                Self::bootstrap_update(yi, h1, h2, &f_i, &self.f_prev)
            }
            Phase::SteadyState => {
                let h = t[i + 1] - t[i];
                Self::steady_update(yi, h, &f_i, &self.f_prev)
            }
        };

        self.f_prev = f_i;
        Ok(next)
    }
}

/// AB2 over the whole grid; needs at least three time points.
pub fn ab2<F, A>(f: &F, y0: &[Float], t: &[Float], args: &A) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    integrate(AdamsBashforth2::new(), f, y0, t, args, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(_t: Float, y: &[Float], _: &()) -> Vec<Float> {
        vec![y[0]]
    }

    #[test]
    fn phases_advance_once_and_stay_steady() {
        let t = [0.0, 0.1, 0.2, 0.3, 0.4];
        let mut y = Trajectory::with_initial(&[1.0], t.len());
        let mut rhs = Rhs::new(&linear, &(), 1, false);
        let mut scheme = AdamsBashforth2::new();

        let mut seen = Vec::new();
        for i in 0..t.len() - 1 {
            seen.push(scheme.phase());
            let next = scheme.step(&mut rhs, &t, i, &y).unwrap();
            y.set_row(i + 1, &next);
        }
        assert_eq!(
            seen,
            [Phase::Bootstrap0, Phase::Bootstrap1, Phase::SteadyState, Phase::SteadyState]
        );
        assert_eq!(rhs.nfev(), 4);

        scheme.reset();
        assert_eq!(scheme.phase(), Phase::Bootstrap0);
    }

    #[test]
    fn bootstrap_reduces_to_steady_formula_on_uniform_grid() {
        let (y1, f1, f0) = ([2.0], [0.7], [-0.3]);
        let h = 0.25;
        let a = AdamsBashforth2::bootstrap_update(&y1, h, h, &f1, &f0);
        let b = AdamsBashforth2::steady_update(&y1, h, &f1, &f0);
        assert!((a[0] - b[0]).abs() < 1e-12);
    }

    #[test]
    fn bootstrap_by_hand_on_uneven_widths() {
        // y' = y from y0 = 1: row 1 = 1.1, f0 = 1, f1 = 1.1
        // row 2 = 1.1 + 0.5 * (0.2 / 0.1) * ((0.2 + 0.2) * 1.1 - 0.2 * 1.0) = 1.34
        let sol = ab2(&linear, &[1.0], &[0.0, 0.1, 0.3], &()).unwrap();
        assert!((sol.y[1][0] - 1.1).abs() < 1e-12);
        assert!((sol.y[2][0] - 1.34).abs() < 1e-12);
    }

    #[test]
    fn steady_state_ignores_previous_width() {
        // The steady step only looks at the current interval width.
        let sol = ab2(&linear, &[1.0], &[0.0, 0.1, 0.2, 0.6], &()).unwrap();
        let (y2, y1) = (sol.y[2][0], sol.y[1][0]);
        let h = 0.4;
        let expected = y2 + (1.5 * h * y2 - 0.5 * h * y1);
        assert!((sol.y[3][0] - expected).abs() < 1e-12);
    }
}
