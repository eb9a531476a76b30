//! Pools of scrolling pickups and hazards
//!
//! Coins and bombs behave identically apart from what a collision does and
//! whether the exit check runs before or after it. Both are an
//! [`EntityPool`] parameterized by a [`PoolKind`].
//!
//! Slots are `Option`s. A retired slot becomes `None` in place so indices stay
//! stable while a tick scans the pool; the leading run of `None`s is dropped at
//! the start of the next tick.

use std::marker::PhantomData;

use rand::Rng;
use rand_pcg::Pcg32;

use super::sprite::{Entity, SpriteAnimator, SpriteSheet};
use super::state::{TickState, Viewport};
use crate::renderer::{ImageHandle, Surface};
use crate::tuning::PoolTuning;

/// What distinguishes one pool from another
pub trait PoolKind {
    /// Used in log messages
    const NAME: &'static str;
    /// Run the off-screen check before the collision check
    const EXIT_BEFORE_COLLISION: bool;

    /// Side effect of touching the balloon
    fn on_collision(state: &mut TickState);
}

/// Collectibles: touching one adds to the collected count
#[derive(Debug)]
pub struct Coins;

impl PoolKind for Coins {
    const NAME: &'static str = "coin";
    const EXIT_BEFORE_COLLISION: bool = true;

    fn on_collision(state: &mut TickState) {
        *state.collected += 1;
    }
}

/// Hazards: touching one costs a life
#[derive(Debug)]
pub struct Bombs;

impl PoolKind for Bombs {
    const NAME: &'static str = "bomb";
    const EXIT_BEFORE_COLLISION: bool = false;

    fn on_collision(state: &mut TickState) {
        state.balloon.hit();
    }
}

pub type CoinPool = EntityPool<Coins>;
pub type BombPool = EntityPool<Bombs>;

/// Sparse, index-stable list of live sprites plus a periodic spawner
#[derive(Debug)]
pub struct EntityPool<K: PoolKind> {
    slots: Vec<Option<SpriteAnimator>>,
    /// Ticks since the last spawn, in [0, spawn_period)
    iteration: u32,
    sheet: SpriteSheet,
    viewport: Viewport,
    spawn_period: u32,
    band: (f32, f32),
    max_lead: f32,
    rng: Pcg32,
    _kind: PhantomData<K>,
}

impl<K: PoolKind> EntityPool<K> {
    pub fn new(
        image: ImageHandle,
        viewport: Viewport,
        tuning: &PoolTuning,
        seed: u64,
        stream: u64,
    ) -> Self {
        let top = tuning.band_top * viewport.height;
        let bottom = tuning.band_bottom * viewport.height;
        Self {
            slots: Vec::new(),
            iteration: 0,
            sheet: SpriteSheet::new(image, tuning.frames, tuning.ticks_per_frame, tuning.scale),
            viewport,
            spawn_period: tuning.spawn_period.max(1),
            band: (top.min(bottom), top.max(bottom)),
            max_lead: tuning.max_lead.max(0.0),
            rng: Pcg32::new(seed, stream),
            _kind: PhantomData,
        }
    }

    /// Number of slots, retired ones included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a live sprite
    pub fn live_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Live sprites in slot order
    pub fn iter(&self) -> impl Iterator<Item = &SpriteAnimator> {
        self.slots.iter().flatten()
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    /// Append a sprite at a given placement
    pub fn spawn_at(&mut self, elevation: f32, offset: f32) {
        log::debug!(
            "Spawn {} #{} at elevation {:.1}, offset {:.1}",
            K::NAME,
            self.slots.len(),
            elevation,
            offset
        );
        self.slots
            .push(Some(SpriteAnimator::new(self.sheet, self.viewport, elevation, offset)));
    }

    /// Append a sprite at a random height, somewhere off the right edge
    pub fn spawn(&mut self) {
        let (top, bottom) = self.band;
        let elevation = self.rng.random_range(top..=bottom);
        let offset = -self.rng.random_range(0.0..=self.max_lead);
        self.spawn_at(elevation, offset);
    }

    /// Drop the leading run of retired slots
    fn compact(&mut self) {
        let retired = self.slots.iter().take_while(|s| s.is_none()).count();
        if retired > 0 {
            self.slots.drain(..retired);
        }
    }

    /// One tick: compact, maybe spawn, then update and check every live slot
    pub fn update(&mut self, state: &mut TickState) {
        self.compact();

        if state.moving {
            self.iteration += 1;
            if self.iteration >= self.spawn_period {
                self.iteration = 0;
                self.spawn();
            }
        }

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(sprite) = slot.as_mut() else {
                continue;
            };
            sprite.update(state);

            if K::EXIT_BEFORE_COLLISION && sprite.has_exited() {
                *slot = None;
                continue;
            }

            if sprite.collides(&*state.balloon) {
                log::debug!("{} #{} hit the balloon", K::NAME, index);
                K::on_collision(state);
                *slot = None;
                continue;
            }

            if !K::EXIT_BEFORE_COLLISION && sprite.has_exited() {
                *slot = None;
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for sprite in self.iter() {
            sprite.render(surface);
        }
    }

    pub fn draw_collision_circles(&self, surface: &mut dyn Surface) {
        for sprite in self.iter() {
            surface.stroke_circle(&sprite.collision_circle());
        }
    }
}
