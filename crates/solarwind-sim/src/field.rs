//! Magnetic field models.
//!
//! A field model maps a point to a field vector and holds no state that
//! changes during a tick, so every particle in a tick sees the same field.

use std::f64::consts::PI;

use solarwind_core::config::DipoleConfig;
use solarwind_core::constants::MAGNETIC_CONST;
use solarwind_core::types::Vector3;

/// Anything that can be sampled for a magnetic field vector.
pub trait FieldModel {
    fn field_at(&self, position: Vector3) -> Vector3;
}

/// Point dipole centered on the earth position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DipoleField {
    pub config: DipoleConfig,
}

impl DipoleField {
    pub fn new(config: DipoleConfig) -> Self {
        Self { config }
    }
}

impl From<DipoleConfig> for DipoleField {
    fn from(config: DipoleConfig) -> Self {
        Self::new(config)
    }
}

impl FieldModel for DipoleField {
    fn field_at(&self, position: Vector3) -> Vector3 {
        dipole_field(position, &self.config)
    }
}

/// Closed-form point-dipole field:
///
/// `B = μ0/4π * [ r * (3 (m·r) / |r|^5) - m * (1 / |r|^3) ]`
///
/// with `r` pointing from `position` to the source. Undefined when
/// `position` is the source point itself.
///
/// The operation order is fixed, but `powf` comes from the platform libm,
/// whose rounding is not specified. At distances that are not exact powers
/// the result can differ by an ulp between platforms.
pub fn dipole_field(position: Vector3, config: &DipoleConfig) -> Vector3 {
    let r = config.source_point() - position;
    let m = config.moment();

    let r_ = r.dot(r).sqrt();
    let radial = r * (3.0 * m.dot(r) / r_.powf(5.0));
    let axial = m * (1.0 / r_.powf(3.0));
    (radial - axial) * (MAGNETIC_CONST / (4.0 * PI))
}

/// Same field everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UniformField(pub Vector3);

impl FieldModel for UniformField {
    fn field_at(&self, _position: Vector3) -> Vector3 {
        self.0
    }
}
