//! Result of an integration: the sampled trajectory plus basic stats.

use crate::{Float, core::trajectory::Trajectory};

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The time grid the trajectory was computed on.
    pub t: Vec<Float>,
    /// States at each point of `t`, row 0 is the initial condition.
    pub y: Trajectory,
    /// The number of derivative evaluations
    pub nfev: usize,
    /// The number of intervals advanced
    pub nstep: usize,
}

impl Solution {
    /// Iterate over (t_i, y_i) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &[Float])> + '_ {
        self.t.iter().copied().zip(self.y.rows())
    }

    /// Final time and state.
    pub fn last(&self) -> Option<(Float, &[Float])> {
        Some((*self.t.last()?, self.y.last()?))
    }
}
