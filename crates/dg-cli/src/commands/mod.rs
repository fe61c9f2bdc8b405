pub mod play;
pub mod simulate;

use dg_engine::{Game, GameConfig, SeededDice};
use tracing::debug;

/// Build a fresh game and its dice from a configuration.
fn new_game(config: &GameConfig) -> Result<(Game, SeededDice), String> {
    let roster = config.roster().map_err(|e| e.to_string())?;
    let game = Game::new(roster, config.delay)
        .map_err(|e| e.to_string())?
        .with_event_limit(config.max_events);
    debug!(
        players = config.players,
        dice = config.dice,
        seed = ?config.seed,
        "new game"
    );
    let dice = match config.seed {
        Some(seed) => SeededDice::from_seed(seed),
        None => SeededDice::from_entropy(),
    };
    Ok((game, dice))
}

/// `"Player #1"`, `"Player #1 and Player #2"`, `"Player #1, Player #2 and Player #3"`.
fn join_players(ids: &[dg_engine::PlayerId]) -> String {
    let names: Vec<String> = ids.iter().map(|id| format!("Player {id}")).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dg_engine::PlayerId;

    #[test]
    fn join_player_names() {
        assert_eq!(join_players(&[]), "");
        assert_eq!(join_players(&[PlayerId(2)]), "Player #2");
        assert_eq!(
            join_players(&[PlayerId(1), PlayerId(3)]),
            "Player #1 and Player #3"
        );
        assert_eq!(
            join_players(&[PlayerId(1), PlayerId(2), PlayerId(4)]),
            "Player #1, Player #2 and Player #4"
        );
    }

    #[test]
    fn new_game_rejects_empty_roster() {
        let config = GameConfig::default().with_players(0);
        assert!(new_game(&config).is_err());
    }
}
