use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seastrike::{AttackResult, Game, GameConfig};

fn random_game(seed: u64, size: usize) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::default().with_board_size(size);
    Game::new(&config, &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_in_bounds_and_disjoint(seed in any::<u64>(), size in 8usize..16) {
        let game = random_game(seed, size);
        let mut seen = HashSet::new();
        for piece in game.pieces() {
            for (r, c) in piece.cells() {
                prop_assert!(r < size && c < size);
                prop_assert!(seen.insert((r, c)), "cell ({}, {}) shared", r, c);
            }
        }
        prop_assert_eq!(seen.len(), 17);
    }

    #[test]
    fn shot_log_is_monotonic(seed in any::<u64>(), shots in prop::collection::vec((0isize..10, 0isize..10), 1..60)) {
        let mut game = random_game(seed, 10);
        let mut fired: Vec<(usize, usize)> = Vec::new();
        for (r, c) in shots {
            game.attack(r, c);
            fired.push((r as usize, c as usize));
            for &(fr, fc) in &fired {
                prop_assert!(game.has_shot(fr, fc));
            }
        }
    }

    #[test]
    fn second_attack_is_rejected(seed in any::<u64>(), row in 0isize..10, col in 0isize..10) {
        let mut game = random_game(seed, 10);
        let first = game.attack(row, col);
        prop_assert!(first.counted());
        let summary = game.summary();
        let board = game.board().clone();
        prop_assert_eq!(game.attack(row, col), AttackResult::AlreadyAttacked);
        prop_assert_eq!(game.summary(), summary);
        prop_assert_eq!(game.board(), &board);
    }

    #[test]
    fn over_iff_every_piece_sunk(
        seed in any::<u64>(),
        shots in prop::collection::vec((-1isize..11, -1isize..11), 0..150)
    ) {
        let mut game = random_game(seed, 10);
        for (r, c) in shots {
            game.attack(r, c);
            let all_sunk = game.pieces().iter().all(|p| p.hits() == p.length());
            prop_assert_eq!(game.is_over(), all_sunk);
        }
    }
}
