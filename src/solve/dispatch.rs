//! odeint entry point: maps a method to its stepping scheme.

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{AdamsBashforth2, ExplicitEuler, ImplicitEuler, RungeKutta4, integrate},
};

use super::options::{Method, Options};

/// Integrate `y' = f(t, y, args)` from `y0` over the time grid `t`.
///
/// Row `i` of the returned trajectory approximates `y(t[i])`; row 0 is `y0`
/// unchanged. `args` is handed to every call of `f` as is.
///
/// # Errors
/// - [`Error::InsufficientGrid`] if `t` has fewer points than the method needs.
/// - [`Error::DimensionMismatch`] if `f` returns the wrong number of
///   components; the rows computed before that point are in the error.
/// - [`Error::NonFinite`] and [`Error::NonIncreasingGrid`] in strict mode only.
pub fn odeint<F, A>(
    f: &F,
    y0: &[Float],
    t: &[Float],
    args: &A,
    options: Options,
) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    let strict = options.strict;

    // Dispatch by method
    match options.method {
        Method::ExplicitEuler => integrate(ExplicitEuler, f, y0, t, args, strict),
        Method::ImplicitEuler => integrate(ImplicitEuler, f, y0, t, args, strict),
        Method::RungeKutta4 => integrate(RungeKutta4, f, y0, t, args, strict),
        Method::AdamsBashforth2 => integrate(AdamsBashforth2::new(), f, y0, t, args, strict),
    }
}

/// Like [`odeint`] with the method given by name, e.g. `"runge-kutta-4"` or
/// `"rk"`. Unrecognised names fail with [`Error::UnknownMethod`] before `f`
/// is ever called.
pub fn odeint_named<F, A>(
    method: &str,
    f: &F,
    y0: &[Float],
    t: &[Float],
    args: &A,
) -> Result<Solution, Error>
where
    F: ODE<A> + ?Sized,
    A: ?Sized,
{
    let method: Method = method.parse()?;
    odeint(f, y0, t, args, method.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decay(_t: Float, y: &[Float], _: &()) -> Vec<Float> {
        vec![-y[0]]
    }

    #[test]
    fn short_grid_error_names_the_selected_method() {
        for method in Method::ALL {
            let err = odeint(&decay, &[1.0], &[0.0], &(), method.into()).unwrap_err();
            match err {
                Error::InsufficientGrid { method: name, points, .. } => {
                    assert_eq!(name, method.name());
                    assert_eq!(points, 1);
                }
                other => panic!("{}: unexpected {:?}", method, other),
            }
        }
    }

    #[test]
    fn named_dispatch_rejects_unknown_before_evaluating() {
        let f = |_t: Float, _y: &[Float], _: &()| -> Vec<Float> { panic!("must not be called") };
        let err = odeint_named("xyz", &f, &[1.0], &[0.0, 1.0, 2.0], &()).unwrap_err();
        assert_eq!(err, Error::UnknownMethod("xyz".to_string()));
    }
}
