//! Invariants that must hold for any input sequence

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use space_invaders::consts::{PLAY_WIDTH, PLAYER_WIDTH};
use space_invaders::sim::{GamePhase, GameState, Player, TickInput, tick, wave_dimensions};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(move_left, move_right, fire, restart)| TickInput {
            move_left,
            move_right,
            fire,
            restart,
        },
    )
}

proptest! {
    #[test]
    fn player_stays_in_bounds(moves in prop::collection::vec(-1i8..=1, 0..600)) {
        let mut player = Player::default();
        for direction in moves {
            player.move_by(f32::from(direction));
            prop_assert!(player.pos.x >= 0.0);
            prop_assert!(player.pos.x <= PLAY_WIDTH - PLAYER_WIDTH);
        }
    }

    #[test]
    fn shots_are_rate_limited(fire_pattern in prop::collection::vec(any::<bool>(), 1..200)) {
        let mut player = Player::default();
        let mut last_shot: Option<usize> = None;
        for (i, fire) in fire_pattern.into_iter().enumerate() {
            if fire {
                let before = player.bullets.len();
                if player.shoot() {
                    prop_assert_eq!(player.bullets.len(), before + 1);
                    if let Some(prev) = last_shot {
                        prop_assert!(i - prev >= 15);
                    }
                    last_shot = Some(i);
                }
            }
            player.tick();
        }
    }

    #[test]
    fn score_and_lives_are_monotonic(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);
        for input in &inputs {
            let (score, lives, level) = (state.score, state.lives, state.level);
            let was_over = state.phase == GamePhase::GameOver;
            tick(&mut state, input, &mut rng);
            if was_over && input.restart {
                // A restart replaces the game wholesale
                prop_assert_eq!(state.score, 0);
                continue;
            }
            prop_assert!(state.score >= score);
            prop_assert!(state.lives <= lives);
            prop_assert!(state.level >= level);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= PLAY_WIDTH - PLAYER_WIDTH);
            prop_assert!(state.particles.iter().all(|p| p.life > 0));
        }
    }

    #[test]
    fn game_over_freezes_world(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..50),
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);
        state.phase = GamePhase::GameOver;
        let snapshot = serde_json::to_string(&state).unwrap();
        for input in inputs.iter().map(|i| TickInput { restart: false, ..*i }) {
            let events = tick(&mut state, &input, &mut rng);
            prop_assert!(events.is_empty());
        }
        prop_assert_eq!(serde_json::to_string(&state).unwrap(), snapshot);
    }

    #[test]
    fn cleared_wave_respawns_for_next_level(seed in any::<u64>(), level in 1u32..20) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);
        state.tuning.enemy_fire_chance = 0.0;
        state.level = level;
        state.enemies.clear();
        tick(&mut state, &TickInput::default(), &mut rng);

        let (rows, cols) = wave_dimensions(level + 1);
        prop_assert_eq!(state.level, level + 1);
        prop_assert_eq!(rows, (3 + (level + 1) / 2).min(5));
        prop_assert_eq!(cols, 8);
        prop_assert_eq!(state.enemies.len() as u32, rows * cols);
        for (i, enemy) in state.enemies.iter().enumerate() {
            prop_assert_eq!(enemy.kind.index() as u32, (i as u32 / cols) % 3);
        }
    }
}
