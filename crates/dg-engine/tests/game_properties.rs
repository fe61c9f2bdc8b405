//! Property tests over whole games driven by seeded dice.

use std::time::Duration;

use dg_engine::{Game, GameStatus, SeededDice, create_players};
use proptest::prelude::*;

const ROUND_CAP: u32 = 10_000;

fn new_game(players: i64, dice: i64) -> Game {
    Game::new(create_players(players, dice).unwrap(), Duration::ZERO).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn round_invariants_hold(players in 1i64..7, dice in 0i64..7, seed in any::<u64>()) {
        let mut game = new_game(players, dice);
        let mut source = SeededDice::from_seed(seed);

        while let Some(report) = game.tick(&mut source) {
            prop_assert!(report.turn <= ROUND_CAP, "game did not end within {ROUND_CAP} rounds");

            for p in game.players() {
                if p.eliminated {
                    prop_assert_eq!(p.dice_count(), 0);
                }
            }
            prop_assert_eq!(
                game.remaining(),
                game.players().iter().filter(|p| p.is_active()).count()
            );

            let eval = &report.evaluation;
            prop_assert_eq!(eval.total_ones(), eval.total_awarded() + eval.total_withheld());
            for tally in &eval.tallies {
                if tally.withheld > 0 {
                    let recipient = tally.passed_to.and_then(|id| game.player(id)).unwrap();
                    prop_assert!(recipient.eliminated);
                }
            }

            if report.ended {
                prop_assert_eq!(game.status(), GameStatus::Ended);
                prop_assert!(game.remaining() <= 1);
            } else {
                prop_assert!(game.remaining() > 1);
            }
        }
        prop_assert!(game.is_over());
    }

    #[test]
    fn scores_and_remaining_are_monotonic(players in 2i64..6, dice in 1i64..6, seed in any::<u64>()) {
        let mut game = new_game(players, dice);
        let mut source = SeededDice::from_seed(seed);
        let mut last_scores: Vec<u32> = game.players().iter().map(|p| p.score).collect();
        let mut last_remaining = game.remaining();
        let mut out: Vec<bool> = vec![false; game.players().len()];

        while game.tick(&mut source).is_some() {
            prop_assert!(game.turn() <= ROUND_CAP);
            prop_assert!(game.remaining() <= last_remaining);
            for (i, p) in game.players().iter().enumerate() {
                prop_assert!(p.score >= last_scores[i]);
                prop_assert!(!out[i] || p.eliminated, "player {} came back", p.id);
                out[i] = p.eliminated;
                last_scores[i] = p.score;
            }
            last_remaining = game.remaining();
        }
    }

    #[test]
    fn winner_set_is_well_formed(players in 1i64..7, dice in 0i64..6, seed in any::<u64>()) {
        let mut game = new_game(players, dice);
        let mut source = SeededDice::from_seed(seed);
        while game.tick(&mut source).is_some() {
            prop_assert!(game.turn() <= ROUND_CAP);
        }

        let best = game.players().iter().map(|p| p.score).max().unwrap();
        let winners = game.winners();
        prop_assert!(!winners.is_empty());
        prop_assert!(winners.iter().all(|w| w.score == best));

        let winner_ids: Vec<_> = winners.iter().map(|w| w.id).collect();
        let expected: Vec<_> = game
            .players()
            .iter()
            .filter(|p| p.score == best)
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(&winner_ids, &expected);

        let outcome = game.outcome().unwrap();
        prop_assert_eq!(outcome.score(), best);
        prop_assert_eq!(outcome.players(), expected);
    }
}
