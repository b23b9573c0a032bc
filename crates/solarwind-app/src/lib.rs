//! SOLARWIND headless host.
//!
//! Stands where a renderer would: runs the particle system on its own
//! thread at the fixed tick rate, forwards commands to it, and keeps the
//! latest snapshot for polling.

pub mod host;
pub mod sim_loop;
pub mod state;

pub use solarwind_core as core;
