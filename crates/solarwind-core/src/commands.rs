//! Host commands sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before the
//! particles are stepped.

use serde::{Deserialize, Serialize};

use crate::enums::ConfigField;

/// All host-side actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Parameters that take effect on the next step ---
    SetMass { mass: f64 },
    SetDeltaAngle { degrees: f64 },
    SetChargeAmount { charge: f64 },
    SetLaunchSpeed { speed: f64 },
    SetApertureRadius { radius: f64 },
    SetMomentFactor { factor: f64 },

    // --- Parameters that rebuild the pool ---
    SetIonCount { count: usize },
    SetFlowRate { rate: f64 },
    /// Rebuild the pool with the current parameters.
    ResetPool,

    // --- Simulation control ---
    Pause,
    Resume,
}

impl SimCommand {
    /// The configuration scalar this command sets, if any.
    pub fn field(&self) -> Option<(ConfigField, f64)> {
        match *self {
            SimCommand::SetMass { mass } => Some((ConfigField::Mass, mass)),
            SimCommand::SetDeltaAngle { degrees } => Some((ConfigField::DeltaAngle, degrees)),
            SimCommand::SetChargeAmount { charge } => Some((ConfigField::ChargeAmount, charge)),
            SimCommand::SetLaunchSpeed { speed } => Some((ConfigField::LaunchSpeed, speed)),
            SimCommand::SetApertureRadius { radius } => {
                Some((ConfigField::ApertureRadius, radius))
            }
            SimCommand::SetMomentFactor { factor } => Some((ConfigField::MomentFactor, factor)),
            SimCommand::SetIonCount { count } => Some((ConfigField::IonCount, count as f64)),
            SimCommand::SetFlowRate { rate } => Some((ConfigField::FlowRate, rate)),
            SimCommand::ResetPool | SimCommand::Pause | SimCommand::Resume => None,
        }
    }
}
