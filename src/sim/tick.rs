//! Fixed-step simulation tick
//!
//! One call advances the whole scene by one frame. Integration is per tick,
//! not per elapsed second, so the host should call this at a steady rate.

use super::state::{GamePhase, GameState, TickState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire the burner (click/tap/space)
    pub burner: bool,
}

/// Advance the game state by one tick.
///
/// Order: background, balloon, coins, bombs. The world only scrolls while the
/// balloon is alive and off the ground.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if input.burner {
        state.balloon.heat();
    }

    let moving = state.balloon.alive() && !state.balloon.grounded();
    let speed = state.speed();

    let GameState {
        balloon,
        background,
        coins,
        bombs,
        collected,
        ..
    } = state;
    let mut shared = TickState {
        moving,
        speed,
        balloon,
        collected,
    };

    background.update(&shared);
    shared.balloon.update();
    coins.update(&mut shared);
    bombs.update(&mut shared);

    if !state.balloon.alive() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: {} coins collected",
            state.time_ticks,
            state.collected
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::state::Viewport;
    use crate::sim::state::tests::images;
    use crate::tuning::Tuning;

    fn session(seed: u64) -> GameState {
        GameState::with_viewport(seed, Viewport::new(1200.0, 720.0), images(), Tuning::default())
    }

    #[test]
    fn test_scrolls_while_airborne() {
        let mut state = session(1);
        state.balloon.temperature = 5.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
        assert!((state.background.offset - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_frozen_on_the_ground() {
        let mut state = session(1);
        state.balloon.altitude = 0.0;
        state.balloon.temperature = 0.0;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.background.offset, 0.0);
        assert_eq!(state.balloon.altitude, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_burner_lifts_off() {
        let mut state = session(1);
        state.balloon.altitude = 0.0;
        state.balloon.temperature = 0.0;
        let burn = TickInput { burner: true };
        for _ in 0..30 {
            tick(&mut state, &burn);
        }
        assert!(state.balloon.temperature > 0.0);
        assert!(state.balloon.altitude > 0.0);
        assert!(state.background.offset > 0.0);
    }

    #[test]
    fn test_bomb_hit_through_tick() {
        let mut state = session(1);
        state.balloon.temperature = 3.0;
        // Land a bomb right on the balloon after it moves this tick
        let mut preview = state.balloon.clone();
        preview.update();
        let target = preview.collision_circle().center;
        let inset = state.bombs.sheet().height() / 4.0 * (2.0 / 3.0);
        let speed = state.speed();
        state
            .bombs
            .spawn_at(target.y - inset, 1200.0 - (target.x - inset) - speed);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.balloon.lives, 2);
        assert_eq!(state.bombs.live_count(), 0);

        let mut surface = RecordingSurface::new();
        state.draw(&mut surface);
        assert!(surface.blits_of(4).is_empty());
    }

    #[test]
    fn test_game_over_freezes_session() {
        let mut state = session(1);
        state.balloon.lives = 1;
        state.balloon.hit();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        let ticks = state.time_ticks;
        let altitude = state.balloon.altitude;
        tick(&mut state, &TickInput { burner: true });
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.balloon.altitude, altitude);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = session(99999);
        let mut state2 = session(99999);

        for i in 0..3000 {
            let input = TickInput {
                burner: i % 40 == 0,
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        let a: Vec<_> = state1.coins.iter().map(|s| (s.elevation(), s.offset)).collect();
        let b: Vec<_> = state2.coins.iter().map(|s| (s.elevation(), s.offset)).collect();
        assert_eq!(a, b);
    }
}
