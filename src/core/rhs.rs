//! Checked evaluation of the user's right-hand side.

use crate::{Float, core::ode::ODE};

/// Failure of a single derivative evaluation. The driver turns it into a
/// [`crate::Error`] carrying the partial trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    DimensionMismatch { t: Float, got: usize },
    NonFinite { t: Float },
}

/// Wraps the derivative function, its extra arguments and the expected
/// state dimension. Every scheme evaluates `f` through [`Rhs::eval`], which
/// counts evaluations and validates the result length.
pub struct Rhs<'a, F: ?Sized, A: ?Sized> {
    f: &'a F,
    args: &'a A,
    dim: usize,
    strict: bool,
    nfev: usize,
    saw_non_finite: bool,
}

impl<'a, F, A> Rhs<'a, F, A>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    pub fn new(f: &'a F, args: &'a A, dim: usize, strict: bool) -> Self {
        Self {
            f,
            args,
            dim,
            strict,
            nfev: 0,
            saw_non_finite: false,
        }
    }

    /// Evaluate f(t, y, args).
    ///
    /// Non-finite components are returned unchanged unless strict mode is on.
    pub fn eval(&mut self, t: Float, y: &[Float]) -> Result<Vec<Float>, StepError> {
        let dydt = self.f.ode(t, y, self.args);
        self.nfev += 1;

        if dydt.len() != self.dim {
            return Err(StepError::DimensionMismatch { t, got: dydt.len() });
        }

        if dydt.iter().any(|v| !v.is_finite()) {
            if self.strict {
                return Err(StepError::NonFinite { t });
            }
            if !self.saw_non_finite {
                self.saw_non_finite = true;
                log::debug!("derivative produced a non-finite value at t = {}", t);
            }
        }

        Ok(dydt)
    }

    pub fn nfev(&self) -> usize {
        self.nfev
    }
}
