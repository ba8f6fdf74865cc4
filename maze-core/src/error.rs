use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MazeError {
    UnknownDirection { name: String },
    NonFiniteCoordinate { agent: AgentRole, x: f64, y: f64 },
    InvalidRadius { radius: f64 },
}

/// Which snapshot in a tick a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentRole {
    Controlled,
    Pursuer(usize),
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled => write!(f, "controlled agent"),
            Self::Pursuer(index) => write!(f, "pursuer #{index}"),
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection { name } => write!(f, "unknown direction: {name:?}"),
            Self::NonFiniteCoordinate { agent, x, y } => {
                write!(f, "non-finite position for {agent}: ({x}, {y})")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "threat radius must be a non-negative number, got {radius}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
