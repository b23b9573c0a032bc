//! Lorentz-force integration.
//!
//! One step is: drift with the current velocity, sample the field at the
//! new position, kick the velocity. Position always lags the kick by a step.

use solarwind_core::types::Vector3;

use crate::field::FieldModel;
use crate::particle::Particle;

/// `a = q (v × B) / m`, with `B` sampled at the particle's position.
pub fn lorentz_acceleration<F: FieldModel + ?Sized>(
    particle: &Particle,
    field: &F,
    mass: f64,
) -> Vector3 {
    let b = field.field_at(particle.position);
    let force = particle.velocity.cross(b) * particle.charge;
    force * (1.0 / mass)
}

/// Advance one live particle by a tick and consume one tick of life.
pub fn integrate<F: FieldModel + ?Sized>(particle: &mut Particle, field: &F, mass: f64) {
    particle.position += particle.velocity;
    let acceleration = lorentz_acceleration(particle, field, mass);
    particle.velocity += acceleration;
    particle.remaining_life -= 1;
}
