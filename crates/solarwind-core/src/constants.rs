//! Simulation constants and the fixed coordinate frame.
//!
//! The frame is heliocentric-ish: x runs along the sun–earth axis (sun on
//! the negative side), y is "up" through the magnetic poles, z completes a
//! right-handed frame. Distances are simulation units, not meters.

use std::f64::consts::PI;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Time-units per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Field model ---

/// Vacuum permeability (4π × 10⁻⁷).
pub const MAGNETIC_CONST: f64 = 4e-7 * PI;

/// Dipole moment magnitude at `moment_factor == 1.0`.
/// Earth's physical moment is ~6.48e22; scaled by 1e-12 for the sim frame.
pub const DIPOLE_MOMENT_SCALE: f64 = 6.48e10;

/// Magnetic axis tilt (radians). Axial tilt of 23.44° less ~11° pole offset.
pub const DIPOLE_TILT: f64 = 0.192;

/// Dipole source point offset along +x.
pub const EARTH_POSITION: f64 = 100.0;

// --- Spawn geometry ---

/// Aperture plane sits at x = -LAUNCH_OFFSET.
pub const LAUNCH_OFFSET: f64 = 600.0;

/// Out-of-plane launch tilt spread (integer degrees, symmetric).
pub const LAUNCH_TILT_SPREAD_DEG: i32 = 10;

/// Runtime respawns start with `ion_life - RESPAWN_LIFE_OFFSET`.
pub const RESPAWN_LIFE_OFFSET: i64 = 2;

// --- Pool sizing ---

/// Numerator of the flow-rate → life relation: `ion_life = LIFE_FLOW_SCALE / flow_rate / ion_count`.
pub const LIFE_FLOW_SCALE: f64 = 10_000.0 * 1000.0;

/// Maximum pool capacity (display slots available to a host).
pub const MAX_ION_COUNT: usize = 5000;

// --- Display ---

/// Position reported for display slots that have never held a live ion.
pub const HIDDEN_Z: f64 = -100_000.0;

/// Simulation units per astronomical unit.
pub const AU: f64 = 1_000_000.0;

/// Sun center on the x axis.
pub const SUN_POSITION: f64 = -AU + 100.0;
