//! Core types and definitions for the SOLARWIND simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! configuration, commands, snapshots, events, errors, and the constants
//! that pin down the coordinate frame. It has no dependency on any
//! runtime or presentation layer.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
