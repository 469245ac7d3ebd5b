//! High-level solve module: method selection and the dispatching entry points.

pub mod dispatch;
pub mod options;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use dispatch::{odeint, odeint_named};
pub use options::{Method, Options};
