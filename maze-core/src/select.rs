//! Per-tick action selection: evade the first threatening pursuer, otherwise
//! follow the left-hand wall.

use crate::constants::{DEFAULT_THREAT_RADIUS, STARTUP_HEADING};
use crate::direction::Direction;
use crate::legal::LegalMoves;
use crate::snapshot::{AgentSnapshot, Position, Tick};
use crate::threat::scan_threats;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    Threatened {
        pursuer_index: usize,
        danger: Direction,
    },
    Exploring {
        heading: Direction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Direction,
    #[serde(flatten)]
    pub mode: Mode,
}

impl Decision {
    pub fn is_threatened(&self) -> bool {
        matches!(self.mode, Mode::Threatened { .. })
    }
}

/// Reverse, then left, then right of the danger, then toward it; `Stop` if none is legal.
pub fn evade(legal: &LegalMoves, danger: Direction) -> Direction {
    legal
        .first_legal([danger.reverse(), danger.left(), danger.right(), danger])
        .unwrap_or(Direction::Stop)
}

/// Left-hand wall following from the last committed heading.
pub fn left_turn_action(legal: &LegalMoves, heading: Direction) -> Direction {
    let heading = if heading == Direction::Stop {
        STARTUP_HEADING
    } else {
        heading
    };
    legal
        .first_legal([heading.left(), heading, heading.right(), heading.reverse()])
        .unwrap_or(Direction::Stop)
}

pub fn decide(tick: &Tick, radius: f64) -> Decision {
    match scan_threats(&tick.agent, &tick.pursuers, radius) {
        Some((pursuer_index, danger)) => Decision {
            action: evade(&tick.legal, danger),
            mode: Mode::Threatened {
                pursuer_index,
                danger,
            },
        },
        None => Decision {
            action: left_turn_action(&tick.legal, tick.agent.heading),
            mode: Mode::Exploring {
                heading: tick.agent.heading,
            },
        },
    }
}

pub fn select_action(
    legal: &LegalMoves,
    pursuers: &[AgentSnapshot],
    position: Position,
    heading: Direction,
) -> Direction {
    let agent = AgentSnapshot::new(position, heading);
    match scan_threats(&agent, pursuers, DEFAULT_THREAT_RADIUS) {
        Some((_, danger)) => evade(legal, danger),
        None => left_turn_action(legal, heading),
    }
}
