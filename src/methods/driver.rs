//! Walks the time grid and assembles the trajectory.

use crate::{
    Float,
    core::{ode::ODE, rhs::Rhs, solution::Solution, trajectory::Trajectory},
    error::Error,
};

use super::Scheme;

/// Integrate `f` over the grid `t` starting from `y0` with the given scheme.
///
/// The step size is taken per interval as `t[i+1] - t[i]`, so non-uniform
/// grids are fine. In strict mode the grid must be strictly increasing and
/// any non-finite derivative or state aborts the call; otherwise NaN and
/// infinity are written into the trajectory as computed.
pub fn integrate<S, F, A>(
    mut scheme: S,
    f: &F,
    y0: &[Float],
    t: &[Float],
    args: &A,
    strict: bool,
) -> Result<Solution, Error>
where
    S: Scheme,
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    // --- Input Validation ---
    let required = scheme.min_points();
    if t.len() < required {
        return Err(Error::InsufficientGrid {
            method: scheme.name(),
            points: t.len(),
            required,
        });
    }

    if strict {
        if let Some(index) = t.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(Error::NonIncreasingGrid { index: index + 1 });
        }
    }

    // --- Declarations ---
    let n = t.len();
    let dim = y0.len();
    let mut y = Trajectory::with_initial(y0, n);
    let mut rhs = Rhs::new(f, args, dim, strict);
    scheme.reset();

    log::debug!(
        "{}: integrating {} states over {} points [{}, {}]",
        scheme.name(),
        dim,
        n,
        t[0],
        t[n - 1]
    );

    // --- Main integration loop ---
    for i in 0..n - 1 {
        log::trace!("{}: step {} at t = {}", scheme.name(), i, t[i]);

        let next = match scheme.step(&mut rhs, t, i, &y) {
            Ok(next) => next,
            Err(err) => {
                y.truncate(i + 1);
                return Err(Error::from_step(err, dim, y));
            }
        };

        if strict && next.iter().any(|v| !v.is_finite()) {
            y.truncate(i + 1);
            return Err(Error::NonFinite { t: t[i + 1], partial: y });
        }

        y.set_row(i + 1, &next);
    }

    log::debug!("{}: done after {} evaluations", scheme.name(), rhs.nfev());

    Ok(Solution {
        t: t.to_vec(),
        y,
        nfev: rhs.nfev(),
        nstep: n - 1,
    })
}
