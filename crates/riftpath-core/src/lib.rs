//! riftpath-core: Shared types and configuration for the Riftpath engine.
//!
//! This crate provides the foundational pieces used across the Riftpath
//! components:
//! - `ChampionRecord`: a decoded dataset entry (id plus ordered tag list)
//! - `EngineConfig`: dataset location and defaults

pub mod config;
pub mod types;

pub use config::EngineConfig;
pub use types::ChampionRecord;
