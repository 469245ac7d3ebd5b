//! Options and method selection for odeint

use std::{fmt, str::FromStr};

use bon::Builder;

use crate::error::Error;

/// Stepping scheme selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order
    ExplicitEuler,
    /// Backward Euler approximated by one predictor-corrector pass
    ImplicitEuler,
    /// Classic fixed-step RK4
    RungeKutta4,
    /// Two-step Adams-Bashforth with an Euler bootstrap, needs 3+ points
    AdamsBashforth2,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::ExplicitEuler,
        Method::ImplicitEuler,
        Method::RungeKutta4,
        Method::AdamsBashforth2,
    ];

    /// Canonical identifier, as accepted by [`Method::from_str`]. The
    /// built-in schemes report the same string from [`crate::methods::Scheme::name`].
    pub fn name(self) -> &'static str {
        match self {
            Method::ExplicitEuler => "explicit-euler",
            Method::ImplicitEuler => "implicit-euler",
            Method::RungeKutta4 => "runge-kutta-4",
            Method::AdamsBashforth2 => "adams-bashforth-2",
        }
    }

    /// Short tag: `ee`, `ie`, `rk` or `ab`.
    pub fn short_name(self) -> &'static str {
        match self {
            Method::ExplicitEuler => "ee",
            Method::ImplicitEuler => "ie",
            Method::RungeKutta4 => "rk",
            Method::AdamsBashforth2 => "ab",
        }
    }

}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Accepts canonical and short identifiers, ignoring case and
    /// surrounding whitespace. Never falls back to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| key == m.name() || key == m.short_name())
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

impl TryFrom<&str> for Method {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Builder, Clone, Debug)]
/// Options for odeint
pub struct Options {
    /// Method to use. Default: RK4.
    #[builder(default = Method::RungeKutta4)]
    pub method: Method,
    /// Turn non-finite derivatives or states into [`Error::NonFinite`] and
    /// reject grids that are not strictly increasing. Default: false, in
    /// which case NaN and infinity flow into the trajectory unchanged.
    #[builder(default = false)]
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options::builder().build()
    }
}

impl From<Method> for Options {
    fn from(method: Method) -> Self {
        Options::builder().method(method).build()
    }
}
