//! Per-tick systems that operate on the ion pool.
//!
//! Systems are free functions over the pool and the config. They do not own
//! state; everything persistent lives in the engine.

pub mod lifecycle;
pub mod lorentz;
pub mod snapshot;
pub mod spawner;
