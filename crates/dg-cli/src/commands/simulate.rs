use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dg_engine::{GameConfig, Outcome, Silent};

/// Per-player results across a batch of games.
#[derive(Debug, Default, Clone)]
struct Record {
    wins: u32,
    ties: u32,
    total_score: u64,
}

pub fn run(config: &GameConfig, games: u32) -> Result<(), String> {
    if games == 0 {
        return Err("need at least one game to simulate".into());
    }
    let base_seed = config.seed.unwrap_or_default();

    let mut records: Vec<Record> = Vec::new();
    let mut total_turns: u64 = 0;
    let mut longest: u32 = 0;
    let mut tied_games: u32 = 0;

    for n in 0..games {
        let game_config = config.clone().with_seed(base_seed.wrapping_add(u64::from(n)));
        let (mut game, mut dice) = super::new_game(&game_config)?;
        let outcome = game
            .play(&mut dice, &mut Silent)
            .cloned()
            .ok_or("game ended without a result")?;

        if records.is_empty() {
            records = vec![Record::default(); game.players().len()];
        }
        for (record, player) in records.iter_mut().zip(game.players()) {
            record.total_score += u64::from(player.score);
        }
        match &outcome {
            Outcome::Winner { player, .. } => records[index_of(player.0)].wins += 1,
            Outcome::Tie { players, .. } => {
                tied_games += 1;
                for player in players {
                    records[index_of(player.0)].ties += 1;
                }
            }
        }
        total_turns += u64::from(game.turn());
        longest = longest.max(game.turn());
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({games} games, {} players, {} dice, seed={base_seed})",
            config.players, config.dice
        )
        .dimmed()
    );
    println!(
        "  average {:.1} turns, longest {longest}, {tied_games} ended in a tie",
        total_turns as f64 / f64::from(games)
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Wins", "Ties", "Avg score"]);
    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            format!("#{}", i + 1),
            record.wins.to_string(),
            record.ties.to_string(),
            format!("{:.1}", record.total_score as f64 / f64::from(games)),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Roster index of a player id (ids start at 1).
fn index_of(id: u32) -> usize {
    id.saturating_sub(1) as usize
}
