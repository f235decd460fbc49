//! Contested logistics scenario tool for agent runtimes.
//!
//! The resolver answers every call; the registry exposes it as a
//! named tool with a declared schema, seeded randomness and
//! start/complete/error telemetry.

pub mod catalog;
pub mod config;
pub mod contested_logistics_tool;
pub mod error;
pub mod event;
pub mod monitor;
pub mod registry;
pub mod resolver;
pub mod rng;
pub mod sector;
pub mod tool;
pub mod types;
