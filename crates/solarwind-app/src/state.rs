//! Host state shared between callers and the simulation loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use solarwind_core::commands::SimCommand;
use solarwind_core::state::SimulationSnapshot;

/// Messages from the host to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Forward to the particle system.
    Sim(SimCommand),
    /// Stop the loop thread.
    Shutdown,
}

/// Everything the host keeps about one running simulation.
///
/// Each handle sits behind its own lock so `stop_simulation` can take the
/// sender and the join handle out while callers keep polling snapshots.
/// Only `latest_snapshot` is shared with the loop thread.
#[derive(Default)]
pub struct AppState {
    /// `None` until started and again after stop.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Replaced by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Held across start and stop so they cannot interleave.
    pub running: Mutex<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|r| *r).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.loop_handle.lock().unwrap().is_none());
    }

    #[test]
    fn test_snapshot_slot_shared_with_loop_side() {
        let state = AppState::new();
        let loop_side = Arc::clone(&state.latest_snapshot);
        *loop_side.lock().unwrap() = Some(SimulationSnapshot {
            capacity: 7,
            ..Default::default()
        });

        let seen = state.latest_snapshot.lock().unwrap().clone();
        assert_eq!(seen.map(|s| s.capacity), Some(7));
    }
}
