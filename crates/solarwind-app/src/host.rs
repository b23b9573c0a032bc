//! Host entry points.
//!
//! The calls a presentation layer makes: start the loop, push commands,
//! poll the latest snapshot, stop.

use solarwind_core::commands::SimCommand;
use solarwind_core::config::SimulationConfig;
use solarwind_core::state::SimulationSnapshot;
use solarwind_sim::ParticleSystem;

use crate::sim_loop;
use crate::state::{AppState, LoopCommand};

/// Start the simulation with `config`. Fails if already running or if the
/// config is rejected.
pub fn start_simulation(state: &AppState, config: SimulationConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let system = ParticleSystem::new(config).map_err(|e| format!("Invalid config: {e}"))?;
    let (cmd_tx, handle) = sim_loop::spawn_sim_loop(system, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a command to the simulation; applied on its next tick.
pub fn send_command(state: &AppState, command: SimCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(LoopCommand::Sim(command))
            .map_err(|e| format!("Failed to send command: {e}")),
        None => Err("Simulation not started".into()),
    }
}

/// Latest snapshot, if a tick has completed.
pub fn get_snapshot(state: &AppState) -> Result<Option<SimulationSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Err("Simulation not started".into());
    }

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A closed channel means the loop already exited.
        let _ = tx.send(LoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(|e| e.to_string())?.take() {
        handle
            .join()
            .map_err(|_| "Simulation loop thread panicked".to_string())?;
    }
    *running = false;

    Ok(())
}
