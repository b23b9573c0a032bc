//! Physics engine for SOLARWIND.
//!
//! Owns the ion pool, advances it at a fixed tick through a dipole
//! magnetic field, and produces `SimulationSnapshot`s for the host.

pub mod engine;
pub mod field;
pub mod particle;
pub mod source;
pub mod systems;

pub use engine::ParticleSystem;
pub use field::{dipole_field, DipoleField, FieldModel, UniformField};
pub use particle::{Particle, ParticlePool};
pub use solarwind_core as core;
pub use source::{DefaultSource, RngSource, SpawnSource};
