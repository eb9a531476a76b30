//! Game state and core simulation types
//!
//! [`GameState`] is the session: it owns every simulated object for the whole
//! run. [`TickState`] is the short-lived context lent to each component while
//! a single tick runs.

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::balloon::Balloon;
use super::pool::{BombPool, CoinPool};
use crate::renderer::{ImageHandle, Surface};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balloon is alive
    Playing,
    /// Out of lives; the scene is frozen
    GameOver,
}

/// Screen size in pixels, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport matching an image's natural size
    pub fn from_image(image: &ImageHandle) -> Self {
        Self::new(image.width, image.height)
    }
}

/// Per-tick context shared by every component update.
///
/// Built at the top of a tick and dropped at the end of it.
pub struct TickState<'a> {
    /// Whether the world scrolls this tick
    pub moving: bool,
    /// Scroll distance per tick in pixels
    pub speed: f32,
    pub balloon: &'a mut Balloon,
    /// Coins picked up this session (only ever grows)
    pub collected: &'a mut u32,
}

/// Loaded images the session draws with
#[derive(Debug, Clone, Copy)]
pub struct GameImages {
    pub background: ImageHandle,
    pub balloon: ImageHandle,
    /// Horizontal strip of coin frames
    pub coin: ImageHandle,
    /// Horizontal strip of bomb frames
    pub bomb: ImageHandle,
}

/// A complete game session
pub struct GameState {
    pub seed: u64,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub collected: u32,
    pub balloon: Balloon,
    pub background: Background,
    pub coins: CoinPool,
    pub bombs: BombPool,
}

impl GameState {
    /// New session whose viewport is the background image's natural size
    pub fn new(seed: u64, images: GameImages, tuning: Tuning) -> Self {
        Self::with_viewport(seed, Viewport::from_image(&images.background), images, tuning)
    }

    pub fn with_viewport(seed: u64, viewport: Viewport, images: GameImages, tuning: Tuning) -> Self {
        log::info!(
            "New session: seed={} viewport={}x{}",
            seed,
            viewport.width,
            viewport.height
        );
        Self {
            seed,
            viewport,
            phase: GamePhase::Playing,
            time_ticks: 0,
            collected: 0,
            balloon: Balloon::new(images.balloon, viewport, &tuning),
            background: Background::new(images.background, viewport),
            // Separate streams so coin and bomb spawns don't shadow each other
            coins: CoinPool::new(images.coin, viewport, &tuning.coins, seed, 1),
            bombs: BombPool::new(images.bomb, viewport, &tuning.bombs, seed, 2),
            tuning,
        }
    }

    /// Scroll distance per tick
    pub fn speed(&self) -> f32 {
        self.viewport.width / self.tuning.scroll_divisor
    }

    /// Draw the whole scene back to front
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.background.draw(surface);
        self.balloon.draw(surface);
        self.coins.draw(surface);
        self.bombs.draw(surface);

        if self.tuning.debug_collision {
            surface.stroke_circle(&self.balloon.collision_circle());
            self.coins.draw_collision_circles(surface);
            self.bombs.draw_collision_circles(surface);
        }
    }

    /// Serializable summary of the session
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            phase: self.phase,
            altitude: self.balloon.altitude,
            temperature: self.balloon.temperature,
            lives: self.balloon.lives,
            collected: self.collected,
            live_coins: self.coins.live_count(),
            live_bombs: self.bombs.live_count(),
        }
    }
}

/// Point-in-time summary of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub altitude: f32,
    pub temperature: f32,
    pub lives: u8,
    pub collected: u32,
    pub live_coins: usize,
    pub live_bombs: usize,
}
