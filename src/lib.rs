//! Air Balloon - a side-scrolling hot air balloon arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (buoyancy, scrolling, entity pools, collisions)
//! - `renderer`: Opaque drawing capability the simulation blits onto
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{PoolTuning, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Gravitational acceleration used by the stylized buoyancy model
    pub const GRAVITY: f32 = 9.8;
    /// Balloon mass
    pub const BALLOON_MASS: f32 = 10.0;
    /// Buoyant envelope volume
    pub const BALLOON_VOLUME: f32 = 50.0;
    /// Acceleration is divided by this before it becomes an altitude delta
    pub const ALTITUDE_DAMPING: f32 = 10.0;

    /// Temperature bounds (inclusive)
    pub const MIN_TEMPERATURE: f32 = 0.0;
    pub const MAX_TEMPERATURE: f32 = 10.0;
    /// Constant per-tick cooling rate
    pub const COOLING_RATE: f32 = 0.02;
    /// Per-tick decay of the heating rate toward zero
    pub const HEATING_DECAY: f32 = 0.001;
    /// Heating added by one burner pulse
    pub const BURNER_HEAT: f32 = 0.05;
    /// Upper cap on the heating rate
    pub const MAX_HEATING: f32 = 0.2;

    pub const START_LIVES: u8 = 3;
    pub const START_ALTITUDE: f32 = 100.0;
    pub const START_TEMPERATURE: f32 = 2.0;

    /// Ticks between entity spawns in a pool
    pub const SPAWN_PERIOD: u32 = 500;

    /// Scroll speed is viewport width divided by this
    pub const SCROLL_DIVISOR: f32 = 1000.0;
}
