//! left-turn: plain wall follower.
//!
//! Keeps a hand on the left wall: turn left when possible, else straight,
//! else right, else back. Pursuers are ignored entirely.

use crate::agents::MazeAgent;
use maze_core::{left_turn_action, Decision, Mode, Tick};

pub struct LeftTurnAgent;

impl LeftTurnAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LeftTurnAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeAgent for LeftTurnAgent {
    fn id(&self) -> &str {
        "left-turn"
    }
    fn description(&self) -> &'static str {
        "Left-hand wall follower that never looks at pursuers."
    }
    fn decide(&mut self, tick: &Tick) -> Decision {
        Decision {
            action: left_turn_action(&tick.legal, tick.agent.heading),
            mode: Mode::Exploring {
                heading: tick.agent.heading,
            },
        }
    }
}
