use std::thread;
use std::time::Duration;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dg_engine::{EvaluationReport, Game, GameConfig, Narrator, Outcome, Player, Setting, Silent};

const RULE: &str = "====================";

pub fn run(config: &GameConfig, quiet: bool, json: bool) -> Result<(), String> {
    let (mut game, mut dice) = super::new_game(config)?;

    if json {
        game.play(&mut dice, &mut Silent);
        let summary = serde_json::to_string_pretty(&game.summary())
            .map_err(|e| format!("failed to serialize game: {e}"))?;
        println!("{summary}");
        return Ok(());
    }

    if quiet {
        game.play(&mut dice, &mut Silent);
        print_result(&game);
        return Ok(());
    }

    let mut narrator = TerminalNarrator::new(game.setting().delay);
    game.play(&mut dice, &mut narrator);
    Ok(())
}

/// Prints each round to stdout, pausing between rounds.
struct TerminalNarrator {
    delay: Duration,
}

impl TerminalNarrator {
    fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl Narrator for TerminalNarrator {
    fn on_start(&mut self, setting: &Setting) {
        println!("{RULE}");
        println!(
            "{} = {}, {} = {}",
            "Players".bold(),
            setting.total_players,
            "Dice".bold(),
            setting.total_dice
        );
        println!("{RULE}");
        self.pause();
    }

    fn on_rolled(&mut self, turn: u32, players: &[Player]) {
        println!("{}", format!("Turn {turn} roll:").bold());
        print_hands(players);
    }

    fn on_evaluated(&mut self, _turn: u32, players: &[Player], report: &EvaluationReport) {
        println!("{}", "After evaluation:".bold());
        print_hands(players);
        for id in &report.eliminated {
            println!("    {} Player {id}", "OUT".red().bold());
        }
        println!("{RULE}");
        self.pause();
    }

    fn on_finished(&mut self, game: &Game) {
        print_result(game);
    }
}

fn print_hands(players: &[Player]) {
    for p in players {
        let line = format!("    Player {} ({}): {}", p.id, p.score, p.hand_label());
        if p.eliminated {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
}

fn print_result(game: &Game) {
    let Some(outcome) = game.outcome() else {
        return;
    };

    println!("{}", announcement(outcome, game.players().len()).bold());
    println!("The game ended after {} turns.", game.turn());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Player", "Score", "Status"]);
    let winners = outcome.players();
    for p in game.players() {
        let status = if winners.contains(&p.id) {
            "winner".green().bold().to_string()
        } else if p.eliminated {
            "eliminated".red().to_string()
        } else {
            "standing".to_string()
        };
        table.add_row(vec![p.id.to_string(), p.score.to_string(), status]);
    }
    println!("{table}");
}

/// The closing line: an outright win, an N-way tie, or a draw among everyone.
fn announcement(outcome: &Outcome, roster_size: usize) -> String {
    match outcome {
        Outcome::Winner { player, score } => {
            format!("Congratulations! Player {player} wins with {score} points.")
        }
        Outcome::Tie { score, .. } if outcome.everyone_tied(roster_size) => {
            format!("Draw! Every player finished with {score} points.")
        }
        Outcome::Tie { players, score } => format!(
            "Draw! {}-way tie: {} each finished with {score} points.",
            players.len(),
            super::join_players(players)
        ),
    }
}
