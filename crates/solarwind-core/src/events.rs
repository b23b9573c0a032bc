//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Something the host may want to react to, reported once in the snapshot
/// of the tick it happened on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The pool was destroyed and rebuilt.
    PoolReset { capacity: usize, ion_life: i64 },
    /// A queued command failed validation and was dropped.
    CommandRejected { error: ConfigError },
}
