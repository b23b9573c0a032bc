//! Slot state machine, run once per tick over the whole pool.

use solarwind_core::config::SimulationConfig;
use solarwind_core::constants::RESPAWN_LIFE_OFFSET;

use crate::field::FieldModel;
use crate::particle::ParticlePool;
use crate::source::SpawnSource;
use crate::systems::{lorentz, spawner};

/// What happened to the pool during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounts {
    /// Slots integrated (includes respawned ones).
    pub integrated: usize,
    pub respawned: usize,
    /// Slots that only counted their cooldown.
    pub dormant: usize,
}

/// Advance every slot by one tick.
///
/// A slot at `-1` is respawned with `ion_life - 2` and then integrated in
/// the same tick. A slot below `-1` only counts up. The `== -1` test comes
/// before the count-up so a slot can never skip its respawn.
pub fn run<F, S>(
    pool: &mut ParticlePool,
    field: &F,
    config: &SimulationConfig,
    ion_life: i64,
    source: &mut S,
) -> TickCounts
where
    F: FieldModel + ?Sized,
    S: SpawnSource + ?Sized,
{
    let mut counts = TickCounts::default();

    for particle in pool.slots_mut() {
        if particle.remaining_life <= -1 {
            if particle.remaining_life == -1 {
                *particle =
                    spawner::spawn_ion(config, ion_life - RESPAWN_LIFE_OFFSET, source);
                counts.respawned += 1;
            } else {
                particle.remaining_life += 1;
                counts.dormant += 1;
                continue;
            }
        }
        lorentz::integrate(particle, field, config.mass);
        counts.integrated += 1;
    }

    counts
}
