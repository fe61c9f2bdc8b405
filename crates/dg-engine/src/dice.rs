//! Six-sided dice and the sources that roll them.
//!
//! Every roll goes through a [`DieSource`], so a game can be driven by a
//! seeded RNG in normal play or by a fixed face sequence in tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Highest face on a die.
pub const FACES: u8 = 6;

/// A single die in a player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Die {
    /// A die that has not been rolled yet (starting hand or redistributed).
    #[default]
    Unrolled,
    /// A die showing a face in `1..=6`.
    Rolled(u8),
}

impl Die {
    /// The face value, if the die has been rolled.
    pub fn face(self) -> Option<u8> {
        match self {
            Self::Unrolled => None,
            Self::Rolled(face) => Some(face),
        }
    }

    /// Returns true if the die shows the given face.
    pub fn shows(self, face: u8) -> bool {
        self.face() == Some(face)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrolled => write!(f, "?"),
            Self::Rolled(face) => write!(f, "{face}"),
        }
    }
}

/// Anything that can produce six-sided die faces.
pub trait DieSource {
    /// Produce the next face, in `1..=6`.
    fn roll_face(&mut self) -> u8;
}

/// Uniform dice backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Deterministic dice from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DieSource for SeededDice {
    fn roll_face(&mut self) -> u8 {
        self.rng.random_range(1..=FACES)
    }
}

/// Replays a fixed sequence of faces, cycling when it runs out.
///
/// Faces outside `1..=6` are clamped into range. An empty script rolls 2,
/// which neither scores nor passes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: Vec<u8>,
    pending: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a source that rolls `faces` in order, then starts over.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let script: Vec<u8> = faces
            .into_iter()
            .map(|face| face.clamp(1, FACES))
            .collect();
        Self {
            pending: script.iter().copied().collect(),
            script,
        }
    }

    /// Number of faces left before the script cycles.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll_face(&mut self) -> u8 {
        if self.script.is_empty() {
            return 2;
        }
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_face_and_display() {
        assert_eq!(Die::Unrolled.face(), None);
        assert_eq!(Die::Rolled(4).face(), Some(4));
        assert!(Die::Rolled(6).shows(6));
        assert!(!Die::Unrolled.shows(1));
        assert_eq!(Die::Unrolled.to_string(), "?");
        assert_eq!(Die::Rolled(3).to_string(), "3");
    }

    #[test]
    fn seeded_dice_stay_in_range() {
        let mut dice = SeededDice::from_seed(7);
        for _ in 0..500 {
            let face = dice.roll_face();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn seeded_dice_are_deterministic() {
        let mut a = SeededDice::from_seed(99);
        let mut b = SeededDice::from_seed(99);
        let seq_a: Vec<u8> = (0..20).map(|_| a.roll_face()).collect();
        let seq_b: Vec<u8> = (0..20).map(|_| b.roll_face()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn scripted_dice_replay_and_cycle() {
        let mut dice = ScriptedDice::new([6, 1, 3]);
        assert_eq!(dice.remaining(), 3);
        let faces: Vec<u8> = (0..7).map(|_| dice.roll_face()).collect();
        assert_eq!(faces, vec![6, 1, 3, 6, 1, 3, 6]);
    }

    #[test]
    fn scripted_dice_clamp_faces() {
        let mut dice = ScriptedDice::new([0, 9]);
        assert_eq!(dice.roll_face(), 1);
        assert_eq!(dice.roll_face(), 6);
    }

    #[test]
    fn empty_script_rolls_neutral_face() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.roll_face(), 2);
    }
}
