//! Snapshot system: reads the pool and builds what the host displays.
//!
//! Read-only with respect to the pool.

use solarwind_core::config::DipoleConfig;
use solarwind_core::enums::SimPhase;
use solarwind_core::events::SimEvent;
use solarwind_core::state::{DipoleView, IonView, SimulationSnapshot};
use solarwind_core::types::{SimTime, Vector3, HIDDEN_POSITION};

use crate::particle::ParticlePool;

/// Build a complete snapshot from the current pool.
pub fn build_snapshot(
    pool: &ParticlePool,
    time: &SimTime,
    phase: SimPhase,
    ion_life: i64,
    dipole: &DipoleConfig,
    events: Vec<SimEvent>,
) -> SimulationSnapshot {
    SimulationSnapshot {
        time: *time,
        phase,
        ion_life,
        capacity: pool.capacity(),
        ions: build_ions(pool),
        dipole: DipoleView {
            source: dipole.source_point(),
            moment: dipole.moment(),
        },
        events,
    }
}

fn build_ions(pool: &ParticlePool) -> Vec<IonView> {
    pool.iter_live()
        .map(|(slot, p)| IonView {
            slot,
            position: p.position,
            velocity: p.velocity,
            remaining_life: p.remaining_life,
        })
        .collect()
}

/// Copy live positions into a per-slot display buffer.
///
/// Non-live slots keep whatever they showed last frame. The buffer is
/// resized to the pool capacity; slots it gains start hidden.
pub fn sync_positions(pool: &ParticlePool, buffer: &mut Vec<Vector3>) {
    buffer.resize(pool.capacity(), HIDDEN_POSITION);
    for (slot, particle) in pool.iter_live() {
        buffer[slot] = particle.position;
    }
}
