//! Spawn policy: launches new ions from the aperture plane.

use std::f64::consts::PI;

use solarwind_core::config::SimulationConfig;
use solarwind_core::constants::{LAUNCH_OFFSET, LAUNCH_TILT_SPREAD_DEG};
use solarwind_core::types::Vector3;

use crate::particle::Particle;
use crate::source::SpawnSource;

/// Build a fresh ion with the given initial life.
///
/// Position lies on the plane `x = -LAUNCH_OFFSET` inside the aperture
/// square; velocity fans out by a whole-degree launch angle in the x–y plane
/// and a whole-degree tilt out of it. Draw order is fixed: y, z, angle, tilt.
pub fn spawn_ion<S: SpawnSource + ?Sized>(
    config: &SimulationConfig,
    initial_life: i64,
    source: &mut S,
) -> Particle {
    let radius = config.aperture_radius;
    let pos_y = 2.0 * radius * (source.unit() - 0.5);
    let pos_z = 2.0 * radius * (source.unit() - 0.5);

    let spread = config.delta_angle as i32;
    let angle = degrees_to_radians(source.int_inclusive(-spread, spread));
    let tilt = degrees_to_radians(
        source.int_inclusive(-LAUNCH_TILT_SPREAD_DEG, LAUNCH_TILT_SPREAD_DEG),
    );

    Particle {
        position: Vector3::new(-LAUNCH_OFFSET, pos_y, pos_z),
        velocity: launch_velocity(angle, tilt, config.launch_speed),
        charge: config.charge_amount,
        remaining_life: initial_life,
    }
}

/// Launch velocity for angle `a` and tilt `b` (radians).
pub fn launch_velocity(a: f64, b: f64, speed: f64) -> Vector3 {
    let y = a.sin() * speed;
    Vector3::new(a.cos() * speed, b.cos() * y, b.sin() * y)
}

fn degrees_to_radians(degrees: i32) -> f64 {
    degrees as f64 * PI / 180.0
}
