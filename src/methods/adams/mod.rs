//! Explicit linear multistep integrators (Adams-Bashforth)

mod ab2;

pub use ab2::{AdamsBashforth2, Phase, ab2};
