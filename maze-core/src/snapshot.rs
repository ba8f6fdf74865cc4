use crate::direction::Direction;
use crate::error::{AgentRole, MazeError};
use crate::legal::LegalMoves;
use serde::{Deserialize, Serialize};

/// Grid coordinate. Pursuers between cells report fractional positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: f64::from(x),
            y: f64::from(y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub position: Position,
    /// Last committed move. `Stop` before the first move.
    #[serde(default = "default_heading")]
    pub heading: Direction,
    /// Frightened countdown; zero means not scared.
    #[serde(default)]
    pub scared_timer: u32,
}

fn default_heading() -> Direction {
    Direction::Stop
}

impl AgentSnapshot {
    pub fn new(position: impl Into<Position>, heading: Direction) -> Self {
        Self {
            position: position.into(),
            heading,
            scared_timer: 0,
        }
    }

    pub fn pursuer(position: impl Into<Position>) -> Self {
        Self::new(position, Direction::Stop)
    }

    pub fn scared(mut self, timer: u32) -> Self {
        self.scared_timer = timer;
        self
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Everything the environment hands over for one decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    #[serde(default)]
    pub tick: u32,
    pub legal: LegalMoves,
    pub agent: AgentSnapshot,
    /// Environment enumeration order; evaluation order depends on it.
    #[serde(default)]
    pub pursuers: Vec<AgentSnapshot>,
}

impl Tick {
    pub fn new(legal: LegalMoves, agent: AgentSnapshot, pursuers: Vec<AgentSnapshot>) -> Self {
        Self {
            tick: 0,
            legal,
            agent,
            pursuers,
        }
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if !self.agent.position.is_finite() {
            return Err(non_finite(AgentRole::Controlled, self.agent.position));
        }
        for (index, pursuer) in self.pursuers.iter().enumerate() {
            if !pursuer.position.is_finite() {
                return Err(non_finite(AgentRole::Pursuer(index), pursuer.position));
            }
        }
        Ok(())
    }
}

fn non_finite(agent: AgentRole, position: Position) -> MazeError {
    MazeError::NonFiniteCoordinate {
        agent,
        x: position.x,
        y: position.y,
    }
}

pub fn validate_radius(radius: f64) -> Result<f64, MazeError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(MazeError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_defaults_missing_fields() {
        let tick: Tick = serde_json::from_str(
            r#"{"legal":["North"],"agent":{"position":{"x":1.0,"y":2.0}}}"#,
        )
        .expect("decode tick");
        assert_eq!(tick.tick, 0);
        assert_eq!(tick.agent.heading, Direction::Stop);
        assert_eq!(tick.agent.scared_timer, 0);
        assert!(tick.pursuers.is_empty());
    }

    #[test]
    fn validate_reports_offending_pursuer() {
        let tick = Tick::new(
            LegalMoves::empty(),
            AgentSnapshot::new((1, 1), Direction::North),
            vec![
                AgentSnapshot::pursuer((2, 2)),
                AgentSnapshot::pursuer(Position::new(f64::NAN, 1.0)),
            ],
        );
        match tick.validate() {
            Err(MazeError::NonFiniteCoordinate { agent, .. }) => {
                assert_eq!(agent, AgentRole::Pursuer(1));
            }
            other => panic!("expected non-finite error, got {other:?}"),
        }
    }

    #[test]
    fn radius_must_be_non_negative_and_finite() {
        assert_eq!(validate_radius(0.0), Ok(0.0));
        assert_eq!(validate_radius(3.0), Ok(3.0));
        assert!(validate_radius(-1.0).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
        assert!(validate_radius(f64::NAN).is_err());
    }
}
