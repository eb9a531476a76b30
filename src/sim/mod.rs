//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only
//! - Seeded RNG only
//! - Stable iteration order (pool slots keep their index within a tick)
//! - Drawing only through the `Surface` trait

pub mod background;
pub mod balloon;
pub mod collision;
pub mod pool;
pub mod sprite;
pub mod state;
pub mod tick;

pub use background::Background;
pub use balloon::{Balloon, Buoyancy};
pub use collision::{CollisionCircle, circles_overlap};
pub use pool::{BombPool, Bombs, CoinPool, Coins, EntityPool, PoolKind};
pub use sprite::{Entity, SpriteAnimator, SpriteSheet};
pub use state::{GameImages, GamePhase, GameState, Snapshot, TickState, Viewport};
pub use tick::{TickInput, tick};
