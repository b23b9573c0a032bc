//! The particle system engine.
//!
//! `ParticleSystem` owns the ion pool and the configuration, applies host
//! commands, steps the pool through the dipole field, and produces
//! `SimulationSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use solarwind_core::commands::SimCommand;
use solarwind_core::config::{DipoleConfig, SimulationConfig};
use solarwind_core::constants::MAX_ION_COUNT;
use solarwind_core::enums::{ConfigField, SimPhase};
use solarwind_core::error::ConfigError;
use solarwind_core::events::SimEvent;
use solarwind_core::state::SimulationSnapshot;
use solarwind_core::types::{SimTime, Vector3};

use crate::field::{DipoleField, FieldModel};
use crate::particle::ParticlePool;
use crate::source::{DefaultSource, SpawnSource};
use crate::systems;

/// The simulation engine. Owns the pool and all sim state.
pub struct ParticleSystem<S = DefaultSource> {
    config: SimulationConfig,
    /// Life used for staggering and, minus two, for respawns.
    ion_life: i64,
    pool: ParticlePool,
    source: S,
    time: SimTime,
    phase: SimPhase,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
}

impl ParticleSystem<DefaultSource> {
    /// Create an engine seeded from `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, DefaultSource::seeded(config.seed))
    }
}

impl<S: SpawnSource> ParticleSystem<S> {
    /// Create an engine drawing spawn randomness from `source`.
    pub fn with_source(config: SimulationConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let ion_life = config.ion_life()?;

        let mut system = Self {
            config,
            ion_life,
            pool: ParticlePool::new(),
            source,
            time: SimTime::default(),
            phase: SimPhase::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        system.rebuild_pool();
        Ok(system)
    }

    // --- Queries ---

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn ion_life(&self) -> i64 {
        self.ion_life
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn dipole(&self) -> DipoleConfig {
        self.config.dipole()
    }

    /// Position of every slot, `None` for dormant and respawn-pending ones.
    pub fn positions(&self) -> impl Iterator<Item = Option<Vector3>> + '_ {
        self.pool
            .slots()
            .iter()
            .map(|p| p.is_alive().then_some(p.position))
    }

    // --- Setters ---

    pub fn set_mass(&mut self, mass: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::Mass, mass)
    }

    /// Rebuilds the pool.
    pub fn set_ion_count(&mut self, count: usize) -> Result<(), ConfigError> {
        self.apply(ConfigField::IonCount, count as f64)
    }

    /// Rebuilds the pool.
    pub fn set_flow_rate(&mut self, rate: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::FlowRate, rate)
    }

    pub fn set_delta_angle(&mut self, degrees: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::DeltaAngle, degrees)
    }

    pub fn set_charge_amount(&mut self, charge: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::ChargeAmount, charge)
    }

    pub fn set_launch_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::LaunchSpeed, speed)
    }

    pub fn set_aperture_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::ApertureRadius, radius)
    }

    pub fn set_moment_factor(&mut self, factor: f64) -> Result<(), ConfigError> {
        self.apply(ConfigField::MomentFactor, factor)
    }

    /// Destroy the pool and rebuild it with `capacity` slots staggered over
    /// `ion_life`. The pair becomes the engine's current ion count and life;
    /// later respawns use this `ion_life`.
    pub fn reset_pool(&mut self, capacity: usize, ion_life: i64) -> Result<(), ConfigError> {
        if capacity == 0 || capacity > MAX_ION_COUNT {
            return Err(ConfigError::IonCountOutOfRange { count: capacity });
        }
        if ion_life < 1 {
            return Err(ConfigError::IonLifeTooShort { ion_life });
        }
        self.config.ion_count = capacity;
        self.ion_life = ion_life;
        self.rebuild_pool();
        Ok(())
    }

    // --- Commands ---

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    // --- Stepping ---

    /// Apply queued commands, step unless paused, and return the snapshot.
    pub fn tick(&mut self) -> SimulationSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.step();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.pool,
            &self.time,
            self.phase,
            self.ion_life,
            &self.config.dipole(),
            events,
        )
    }

    /// Advance time by one tick and update every slot through the dipole
    /// field of the current config.
    pub fn step(&mut self) {
        let field = DipoleField::new(self.config.dipole());
        self.step_with(&field);
    }

    /// `step` through an arbitrary field model.
    pub fn step_with<F: FieldModel + ?Sized>(&mut self, field: &F) {
        self.time.advance();
        let counts = systems::lifecycle::run(
            &mut self.pool,
            field,
            &self.config,
            self.ion_life,
            &mut self.source,
        );
        log::trace!(
            "tick {}: {} integrated, {} respawned, {} dormant",
            self.time.tick,
            counts.integrated,
            counts.respawned,
            counts.dormant
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Pause => self.phase = SimPhase::Paused,
            SimCommand::Resume => self.phase = SimPhase::Running,
            SimCommand::ResetPool => self.rebuild_pool(),
            _ => {
                if let Some((field, value)) = command.field() {
                    if let Err(error) = self.apply(field, value) {
                        log::warn!("rejected {command:?}: {error}");
                        self.events.push(SimEvent::CommandRejected { error });
                    }
                }
            }
        }
    }

    /// Validate and store one scalar, rebuilding the pool when it changes
    /// ion count or ion life.
    fn apply(&mut self, field: ConfigField, value: f64) -> Result<(), ConfigError> {
        self.config.set(field, value)?;
        if field.triggers_reset() {
            self.ion_life = self.config.ion_life()?;
            self.rebuild_pool();
        }
        Ok(())
    }

    fn rebuild_pool(&mut self) {
        self.pool.reset(
            self.config.ion_count,
            self.ion_life,
            &self.config,
            &mut self.source,
        );
        log::debug!(
            "pool reset: {} slots, ion life {}",
            self.config.ion_count,
            self.ion_life
        );
        self.events.push(SimEvent::PoolReset {
            capacity: self.config.ion_count,
            ion_life: self.ion_life,
        });
    }
}
