//! Stepping schemes and the trajectory driver shared by all of them.

mod driver;

pub mod adams;
pub mod euler;
pub mod rk;

use crate::{
    Float,
    core::{
        ode::ODE,
        rhs::{Rhs, StepError},
        trajectory::Trajectory,
    },
};

pub use adams::{AdamsBashforth2, Phase, ab2};
pub use driver::integrate;
pub use euler::{ExplicitEuler, ImplicitEuler, euler, implicit_euler};
pub use rk::{RungeKutta4, rk4};

/// A fixed-grid stepping scheme.
///
/// The driver seeds row 0 of the trajectory and then calls [`Scheme::step`]
/// once per interval, in order, with `i` running from 0 to `t.len() - 2`.
/// `step` returns the state at `t[i + 1]`; rows `0..=i` of `y` are already
/// filled. Schemes that carry history between calls must clear it in
/// [`Scheme::reset`], which the driver calls before the first step.
pub trait Scheme {
    /// Canonical identifier used in messages.
    fn name(&self) -> &'static str;

    /// Fewest time points this scheme can integrate over.
    fn min_points(&self) -> usize {
        2
    }

    fn reset(&mut self) {}

    fn step<F, A>(
        &mut self,
        rhs: &mut Rhs<'_, F, A>,
        t: &[Float],
        i: usize,
        y: &Trajectory,
    ) -> Result<Vec<Float>, StepError>
    where
        F: ODE<A> + ?Sized,
        A: ?Sized;
}
