//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{DT, HIDDEN_Z};

/// 3-vector used for positions, velocities, forces, fields and moments.
pub type Vector3 = glam::DVec3;

/// Sentinel position for display slots with nothing to show.
pub const HIDDEN_POSITION: Vector3 = Vector3::new(0.0, 0.0, HIDDEN_Z);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in time-units.
    pub elapsed: f64,
}

impl SimTime {
    /// Time-units per tick.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed += self.dt();
    }
}
