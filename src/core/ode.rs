//! User-supplied ODE system.

use crate::Float;

/// User-supplied ODE system.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(t, y, args). The integrators call `ode` with the current
/// time `t`, the state `y` and the caller's extra arguments, and expect the
/// derivative back with the same length as `y`.
///
/// `ode` may be called several times per step (RK4 calls it four times) and
/// must not depend on hidden mutable state. A wrong-length result aborts the
/// integration with [`crate::Error::DimensionMismatch`].
///
/// The extra arguments `A` are owned by the caller and passed by shared
/// reference on every call; use `()` when there are none.
///
/// # Example
///
/// ```ignore
/// struct Damped { gamma: f64 }
/// impl ODE<f64> for Damped {
///     fn ode(&self, t: f64, y: &[f64], omega: &f64) -> Vec<f64> {
///         vec![y[1], -omega * omega * y[0] - self.gamma * y[1] + t.sin()]
///     }
/// }
/// ```
pub trait ODE<A: ?Sized = ()> {
    fn ode(&self, t: Float, y: &[Float], args: &A) -> Vec<Float>;
}

impl<A, F> ODE<A> for F
where
    A: ?Sized,
    F: Fn(Float, &[Float], &A) -> Vec<Float>,
{
    fn ode(&self, t: Float, y: &[Float], args: &A) -> Vec<Float> {
        self(t, y, args)
    }
}
