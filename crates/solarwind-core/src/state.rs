//! Simulation snapshot: the visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SimPhase;
use crate::events::SimEvent;
use crate::types::{SimTime, Vector3};

/// Complete state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    /// Ticks a freshly staggered ion lives.
    pub ion_life: i64,
    /// Pool capacity (live + dormant slots).
    pub capacity: usize,
    /// Live ions only; dormant and respawn-pending slots are omitted.
    pub ions: Vec<IonView>,
    pub dipole: DipoleView,
    pub events: Vec<SimEvent>,
}

/// A live ion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IonView {
    /// Pool slot index; stable across respawns.
    pub slot: usize,
    pub position: Vector3,
    pub velocity: Vector3,
    pub remaining_life: i64,
}

/// Field source for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DipoleView {
    pub source: Vector3,
    pub moment: Vector3,
}
