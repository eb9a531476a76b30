//! The player's balloon and its buoyancy model
//!
//! The model is deliberately stylized. Gravity is `mass * g²` rather than
//! `mass * g`, and buoyancy grows with both envelope temperature and the
//! remaining headroom below the top of the screen. The balloon therefore
//! settles at an altitude that depends on how hot it is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionCircle;
use super::state::Viewport;
use crate::consts::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::renderer::{ImageHandle, Rect, Surface};
use crate::tuning::Tuning;

/// Physical constants for the buoyancy step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buoyancy {
    pub gravity: f32,
    pub mass: f32,
    pub volume: f32,
    /// Acceleration is divided by this to get the per-tick altitude delta
    pub damping: f32,
    pub heating_decay: f32,
    pub burner_heat: f32,
    pub max_heating: f32,
}

impl From<&Tuning> for Buoyancy {
    fn from(t: &Tuning) -> Self {
        Self {
            gravity: t.gravity,
            mass: t.mass,
            volume: t.volume,
            damping: t.damping,
            heating_decay: t.heating_decay,
            burner_heat: t.burner_heat,
            max_heating: t.max_heating,
        }
    }
}

/// The balloon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balloon {
    /// Height above the ground baseline (never below 0)
    pub altitude: f32,
    /// Envelope temperature heuristic, kept in [0, 10]
    pub temperature: f32,
    /// Heating rate, decays toward 0
    pub heating: f32,
    /// Constant cooling rate
    pub cooling: f32,
    pub lives: u8,
    /// Left edge in screen pixels
    pub x: f32,
    pub physics: Buoyancy,
    image: ImageHandle,
    scale: f32,
    viewport: Viewport,
}

impl Balloon {
    pub fn new(image: ImageHandle, viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            altitude: tuning.start_altitude,
            temperature: tuning.start_temperature,
            heating: 0.0,
            cooling: tuning.cooling,
            lives: tuning.start_lives,
            x: viewport.width * tuning.balloon_x,
            physics: Buoyancy::from(tuning),
            image,
            scale: tuning.balloon_scale,
            viewport,
        }
    }

    #[inline]
    pub fn scaled_width(&self) -> f32 {
        self.image.width / self.scale
    }

    #[inline]
    pub fn scaled_height(&self) -> f32 {
        self.image.height / self.scale
    }

    /// Screen y of the top edge (the basket rests on the bottom edge at altitude 0)
    #[inline]
    pub fn top(&self) -> f32 {
        self.viewport.height - self.scaled_height() - self.altitude
    }

    pub fn alive(&self) -> bool {
        self.lives > 0
    }

    /// Sitting on the floor
    pub fn grounded(&self) -> bool {
        self.altitude <= 0.0
    }

    /// Fire the burner once
    pub fn heat(&mut self) {
        self.heating = (self.heating + self.physics.burner_heat)
            .min(self.physics.max_heating)
            .max(0.0);
    }

    /// Lose one life (saturates at 0)
    pub fn hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            log::info!("Balloon destroyed at altitude {:.1}", self.altitude);
        } else {
            log::info!("Balloon hit, {} lives left", self.lives);
        }
    }

    /// Altitude change the buoyancy model produces for the current state
    pub fn altitude_delta(&self) -> f32 {
        let p = &self.physics;
        let gravity_force = p.mass * p.gravity * p.gravity;
        let clearance = (self.viewport.height - self.altitude).max(0.0) - self.scaled_height() / 2.0;
        let density = 1.0 + clearance * self.temperature / 1000.0;
        let buoyant_force = p.volume * density * p.gravity;
        let acceleration = (buoyant_force - gravity_force) / p.mass;
        acceleration / p.damping
    }

    /// Advance one tick
    pub fn update(&mut self) {
        let delta = self.altitude_delta();
        if delta > 0.0 {
            self.altitude += delta;
        } else {
            self.altitude = (self.altitude + delta).max(0.0);
        }

        // Only drift if the result stays inside the bounds; never clamp
        let drift = self.heating - self.cooling;
        let lowest = self.temperature + drift < MIN_TEMPERATURE;
        let highest = self.temperature + drift > MAX_TEMPERATURE;
        if !(lowest || highest) {
            self.temperature += drift;
        }

        self.heating = (self.heating - self.physics.heating_decay).max(0.0);
    }

    /// Bounding circle around the envelope (the round upper part of the sprite)
    pub fn collision_circle(&self) -> CollisionCircle {
        let radius = self.scaled_width() / 2.0;
        CollisionCircle::new(Vec2::new(self.x + radius, self.top() + radius), radius)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let dst = Rect::new(self.x, self.top(), self.scaled_width(), self.scaled_height());
        surface.blit(&self.image, self.image.bounds(), dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use proptest::prelude::*;

    fn balloon() -> Balloon {
        // 400 / 4 = 100px tall when drawn
        let image = ImageHandle::new(2, 400.0, 400.0);
        Balloon::new(image, Viewport::new(1200.0, 720.0), &Tuning::default())
    }

    #[test]
    fn test_golden_step() {
        let mut b = balloon();
        b.altitude = 100.0;
        b.temperature = 2.0;
        b.heating = 0.01;
        b.cooling = 0.02;

        b.update();

        // clearance = (720 - 100) - 50 = 570
        // density   = 1 + 570 * 2 / 1000 = 2.14
        // buoyancy  = 50 * 2.14 * 9.8 = 1048.6
        // gravity   = 10 * 9.8² = 960.4
        // delta     = (1048.6 - 960.4) / 10 / 10 = 0.882
        assert!((b.altitude - 100.882).abs() < 1e-3, "altitude {}", b.altitude);
        assert!((b.temperature - 1.99).abs() < 1e-5, "temperature {}", b.temperature);
        assert!((b.heating - 0.009).abs() < 1e-6, "heating {}", b.heating);
    }

    #[test]
    fn test_cold_balloon_sinks_to_floor_and_stays() {
        let mut b = balloon();
        b.temperature = 0.0;
        b.altitude = 3.0;
        assert!(b.altitude_delta() < 0.0);

        b.update();
        assert_eq!(b.altitude, 0.0);
        assert!(b.grounded());

        for _ in 0..50 {
            b.update();
            assert_eq!(b.altitude, 0.0);
        }
    }

    #[test]
    fn test_hot_balloon_lifts_off_floor() {
        let mut b = balloon();
        b.altitude = 0.0;
        b.temperature = 5.0;
        b.update();
        assert!(b.altitude > 0.0);
    }

    #[test]
    fn test_temperature_does_not_drift_out_of_bounds() {
        let mut b = balloon();
        b.temperature = 0.01;
        b.heating = 0.0;
        b.cooling = 0.02;
        b.update();
        // 0.01 - 0.02 would go negative: unchanged
        assert_eq!(b.temperature, 0.01);

        b.temperature = 9.99;
        b.heating = 0.05;
        b.cooling = 0.0;
        b.update();
        assert_eq!(b.temperature, 9.99);
    }

    #[test]
    fn test_temperature_may_reach_bound_exactly() {
        let mut b = balloon();
        b.temperature = 0.5;
        b.heating = 0.0;
        b.cooling = 0.5;
        b.update();
        assert_eq!(b.temperature, 0.0);
    }

    #[test]
    fn test_heating_decays_to_zero() {
        let mut b = balloon();
        b.heating = 0.0025;
        for _ in 0..5 {
            b.update();
            assert!(b.heating >= 0.0);
        }
        assert_eq!(b.heating, 0.0);
    }

    #[test]
    fn test_burner_is_capped() {
        let mut b = balloon();
        for _ in 0..100 {
            b.heat();
        }
        assert_eq!(b.heating, b.physics.max_heating);
    }

    #[test]
    fn test_burner_never_cools() {
        let mut b = balloon();
        b.physics.max_heating = -1.0;
        b.heat();
        assert_eq!(b.heating, 0.0);
    }

    #[test]
    fn test_lives() {
        let mut b = balloon();
        assert_eq!(b.lives, 3);
        assert!(b.alive());
        b.hit();
        b.hit();
        b.hit();
        assert!(!b.alive());
        b.hit();
        assert_eq!(b.lives, 0);
    }

    #[test]
    fn test_draw_and_circle_follow_altitude() {
        let mut b = balloon();
        b.altitude = 0.0;
        let mut surface = RecordingSurface::new();
        b.draw(&mut surface);
        let (_, dst) = surface.blits_of(2)[0];
        assert_eq!(dst.y + dst.h, 720.0);
        assert_eq!(dst.x, 240.0);

        let low = b.collision_circle();
        b.altitude = 200.0;
        let high = b.collision_circle();
        assert_eq!(low.center.y - high.center.y, 200.0);
        assert_eq!(high.radius, 50.0);
    }

    proptest! {
        #[test]
        fn floor_holds_when_sinking(temperature in 0.0f32..=10.0, heating in 0.0f32..0.2) {
            let mut b = balloon();
            b.altitude = 0.0;
            b.temperature = temperature;
            b.heating = heating;
            let delta = b.altitude_delta();
            b.update();
            if delta <= 0.0 {
                prop_assert_eq!(b.altitude, 0.0);
            } else {
                prop_assert!(b.altitude > 0.0);
            }
        }

        #[test]
        fn temperature_stays_bounded(
            temperature in 0.0f32..=10.0,
            heating in 0.0f32..1.0,
            cooling in 0.0f32..1.0,
            ticks in 1usize..200,
        ) {
            let mut b = balloon();
            b.temperature = temperature;
            b.heating = heating;
            b.cooling = cooling;
            for _ in 0..ticks {
                b.update();
                prop_assert!((MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&b.temperature));
            }
        }

        #[test]
        fn altitude_never_negative(altitude in 0.0f32..720.0, temperature in 0.0f32..=10.0) {
            let mut b = balloon();
            b.altitude = altitude;
            b.temperature = temperature;
            for _ in 0..100 {
                b.update();
                prop_assert!(b.altitude >= 0.0);
            }
        }
    }
}
