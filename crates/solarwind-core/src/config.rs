//! Simulation configuration.
//!
//! `SimulationConfig` replaces the slider-backed globals of an interactive
//! host: one explicit value, validated as a whole at construction and
//! field by field through setters. `DipoleConfig` is the per-tick slice of
//! it the field model needs.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ConfigField;
use crate::error::ConfigError;
use crate::types::Vector3;

/// Every tunable scalar of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ion mass (divisor in the acceleration).
    pub mass: f64,
    /// Pool capacity.
    pub ion_count: usize,
    /// User-facing flow rate; inversely sets ion life.
    pub flow_rate: f64,
    /// Launch angle spread in whole degrees (fraction is truncated).
    pub delta_angle: f64,
    /// Charge given to every spawned ion.
    pub charge_amount: f64,
    /// Launch speed magnitude (distance per tick).
    pub launch_speed: f64,
    /// Half-width of the square spawn aperture.
    pub aperture_radius: f64,
    /// Dipole strength multiplier.
    pub moment_factor: f64,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            ion_count: 1000,
            flow_rate: 25.0,
            delta_angle: 5.0,
            charge_amount: 1.0,
            launch_speed: 2.0,
            aperture_radius: 100.0,
            moment_factor: 1.0,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Check every field and the derived ion life.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in ConfigField::ALL {
            self.check_field(field)?;
        }
        self.ion_life().map(|_| ())
    }

    /// Ticks each ion lives: `floor(10000 * 1000 / flow_rate / ion_count)`.
    ///
    /// Scaling by the count keeps total emitted flow constant as the pool
    /// grows or shrinks.
    pub fn ion_life(&self) -> Result<i64, ConfigError> {
        check_ion_count(self.ion_count)?;
        check_positive(ConfigField::FlowRate, self.flow_rate)?;
        let ion_life = ion_life(self.flow_rate, self.ion_count);
        if ion_life < 1 {
            return Err(ConfigError::IonLifeTooShort { ion_life });
        }
        Ok(ion_life)
    }

    /// The field-model slice of this config.
    pub fn dipole(&self) -> DipoleConfig {
        DipoleConfig::new(self.moment_factor)
    }

    /// Apply one scalar by name, validating it first. Ion count is taken
    /// from `value` truncated toward zero.
    ///
    /// Only the touched field is checked. The derived ion life is checked
    /// only for fields that rebuild the pool, so a pool sized explicitly
    /// (out of step with `flow_rate`) does not lock the other setters.
    pub fn set(&mut self, field: ConfigField, value: f64) -> Result<(), ConfigError> {
        let mut next = *self;
        match field {
            ConfigField::Mass => next.mass = value,
            ConfigField::IonCount => {
                check_finite(field, value)?;
                if value < 1.0 {
                    return Err(ConfigError::IonCountOutOfRange { count: 0 });
                }
                next.ion_count = value as usize;
            }
            ConfigField::FlowRate => next.flow_rate = value,
            ConfigField::DeltaAngle => next.delta_angle = value,
            ConfigField::ChargeAmount => next.charge_amount = value,
            ConfigField::LaunchSpeed => next.launch_speed = value,
            ConfigField::ApertureRadius => next.aperture_radius = value,
            ConfigField::MomentFactor => next.moment_factor = value,
        }
        next.check_field(field)?;
        if field.triggers_reset() {
            next.ion_life()?;
        }
        *self = next;
        Ok(())
    }

    fn check_field(&self, field: ConfigField) -> Result<(), ConfigError> {
        match field {
            ConfigField::Mass => check_positive(field, self.mass),
            ConfigField::IonCount => check_ion_count(self.ion_count),
            ConfigField::FlowRate => check_positive(field, self.flow_rate),
            ConfigField::DeltaAngle => check_non_negative(field, self.delta_angle),
            ConfigField::ChargeAmount => check_finite(field, self.charge_amount),
            ConfigField::LaunchSpeed => check_finite(field, self.launch_speed),
            ConfigField::ApertureRadius => check_non_negative(field, self.aperture_radius),
            ConfigField::MomentFactor => check_finite(field, self.moment_factor),
        }
    }
}

/// Unchecked ion-life formula.
pub fn ion_life(flow_rate: f64, ion_count: usize) -> i64 {
    (LIFE_FLOW_SCALE / flow_rate / ion_count as f64).floor() as i64
}

fn check_finite(field: ConfigField, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn check_positive(field: ConfigField, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn check_non_negative(field: ConfigField, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn check_ion_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 || count > MAX_ION_COUNT {
        return Err(ConfigError::IonCountOutOfRange { count });
    }
    Ok(())
}

/// Dipole parameters for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DipoleConfig {
    pub moment_factor: f64,
    /// Magnetic axis tilt from +y toward +x (radians).
    pub tilt: f64,
    /// Source point offset along +x.
    pub earth_position: f64,
}

impl Default for DipoleConfig {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DipoleConfig {
    pub fn new(moment_factor: f64) -> Self {
        Self {
            moment_factor,
            tilt: DIPOLE_TILT,
            earth_position: EARTH_POSITION,
        }
    }

    /// Dipole center.
    pub fn source_point(&self) -> Vector3 {
        Vector3::new(self.earth_position, 0.0, 0.0)
    }

    /// Moment vector `m_ * (sin tilt, cos tilt, 0)`.
    pub fn moment(&self) -> Vector3 {
        let m_ = self.moment_factor * DIPOLE_MOMENT_SCALE;
        Vector3::new(m_ * self.tilt.sin(), m_ * self.tilt.cos(), 0.0)
    }
}
