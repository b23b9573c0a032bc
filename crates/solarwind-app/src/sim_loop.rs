//! Simulation loop thread. Runs the particle system at 60Hz.
//!
//! Commands arrive via `mpsc` channel. Each tick's snapshot replaces the one
//! in shared state for polling. Ticks are paced against a deadline, never
//! against measured frame time, so simulated time stays fixed-step.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use solarwind_core::constants::TICK_RATE;
use solarwind_core::state::SimulationSnapshot;
use solarwind_sim::ParticleSystem;

use crate::state::LoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the loop on a new thread, taking ownership of `system`.
///
/// Returns the command sender and the thread handle.
pub fn spawn_sim_loop(
    system: ParticleSystem,
    latest_snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("solarwind-sim-loop".into())
        .spawn(move || {
            run_sim_loop(system, cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn simulation loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The loop. Runs until Shutdown or channel disconnect.
fn run_sim_loop(
    mut system: ParticleSystem,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimulationSnapshot>>,
) {
    log::info!(
        "simulation loop started: {} slots, ion life {}",
        system.capacity(),
        system.ion_life()
    );
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Sim(cmd)) => system.queue_command(cmd),
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("simulation loop stopped at tick {}", system.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (pause is handled inside the system)
        let snapshot = system.tick();

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next deadline
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset instead of catching up
            log::debug!("simulation loop fell behind, resetting deadline");
            next_tick_time = now;
        }
    }
}
