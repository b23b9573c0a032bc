//! Ion records and the fixed-capacity pool that holds them.
//!
//! Slots are never allocated or freed while the simulation runs: an expired
//! ion is overwritten in place by its respawn. Only a pool reset changes the
//! slot count.

use serde::{Deserialize, Serialize};

use solarwind_core::config::SimulationConfig;
use solarwind_core::enums::IonState;
use solarwind_core::types::Vector3;

use crate::source::SpawnSource;
use crate::systems::spawner;

/// One solar-wind ion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector3,
    /// Distance per tick.
    pub velocity: Vector3,
    pub charge: f64,
    /// `>= 0` alive for that many more ticks, `-1` respawns next tick,
    /// below that counts up toward `-1`.
    pub remaining_life: i64,
}

impl Particle {
    pub fn state(&self) -> IonState {
        IonState::from_life(self.remaining_life)
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_life >= 0
    }
}

/// Ordered arena of ion slots.
#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    slots: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy every slot and allocate `capacity` fresh ones, staggering
    /// their lives across `[-ion_life, 0]` so emission is continuous.
    pub fn reset<S: SpawnSource + ?Sized>(
        &mut self,
        capacity: usize,
        ion_life: i64,
        config: &SimulationConfig,
        source: &mut S,
    ) {
        self.slots.clear();
        self.slots.reserve_exact(capacity);
        for i in 0..capacity {
            let life = stagger_life(i, capacity, ion_life);
            self.slots.push(spawner::spawn_ion(config, life, source));
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Particle> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }

    /// Live slots with their indices.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, &Particle)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_alive()).count()
    }
}

/// Initial life of slot `i`: `-floor((i / capacity) * ion_life)`.
pub fn stagger_life(slot: usize, capacity: usize, ion_life: i64) -> i64 {
    -((slot as f64 / capacity as f64) * ion_life as f64).floor() as i64
}
