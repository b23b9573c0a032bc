//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Whether the engine advances on `tick()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

/// Lifecycle state of a particle slot, derived from its remaining life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IonState {
    /// `remaining_life >= 0`: integrated every tick.
    Alive,
    /// `remaining_life == -1`: reinitialized on the next tick.
    RespawnPending,
    /// `remaining_life < -1`: counting up toward -1, no physics.
    Dormant,
}

impl IonState {
    pub fn from_life(remaining_life: i64) -> Self {
        match remaining_life {
            l if l >= 0 => IonState::Alive,
            -1 => IonState::RespawnPending,
            _ => IonState::Dormant,
        }
    }
}

/// Configuration scalar names, used in errors and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigField {
    Mass,
    IonCount,
    FlowRate,
    DeltaAngle,
    ChargeAmount,
    LaunchSpeed,
    ApertureRadius,
    MomentFactor,
}

impl ConfigField {
    pub const ALL: [ConfigField; 8] = [
        ConfigField::Mass,
        ConfigField::IonCount,
        ConfigField::FlowRate,
        ConfigField::DeltaAngle,
        ConfigField::ChargeAmount,
        ConfigField::LaunchSpeed,
        ConfigField::ApertureRadius,
        ConfigField::MomentFactor,
    ];

    /// Whether changing this field rebuilds the particle pool.
    pub fn triggers_reset(self) -> bool {
        matches!(self, ConfigField::IonCount | ConfigField::FlowRate)
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigField::Mass => "mass",
            ConfigField::IonCount => "ion_count",
            ConfigField::FlowRate => "flow_rate",
            ConfigField::DeltaAngle => "delta_angle",
            ConfigField::ChargeAmount => "charge_amount",
            ConfigField::LaunchSpeed => "launch_speed",
            ConfigField::ApertureRadius => "aperture_radius",
            ConfigField::MomentFactor => "moment_factor",
        }
    }
}
