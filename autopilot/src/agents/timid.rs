//! timid: wall follower that flees from aligned pursuers.
//!
//! Each tick scans pursuers in the order the environment lists them. The
//! first unscared one sharing a row or column within the threat radius
//! decides the move (back away, then sidestep left, then right, then push
//! through). With nobody in reach it behaves exactly like `left-turn`.

use crate::agents::MazeAgent;
use maze_core::constants::DEFAULT_THREAT_RADIUS;
use maze_core::{decide, validate_radius, Decision, MazeError, Mode, Tick};

pub struct TimidAgent {
    id: String,
    radius: f64,
}

impl TimidAgent {
    pub fn new() -> Self {
        Self {
            id: "timid".to_string(),
            radius: DEFAULT_THREAT_RADIUS,
        }
    }

    pub fn with_radius(radius: f64) -> Result<Self, MazeError> {
        let radius = validate_radius(radius)?;
        if radius == DEFAULT_THREAT_RADIUS {
            return Ok(Self::new());
        }
        Ok(Self {
            id: format!("timid:{radius}"),
            radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for TimidAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeAgent for TimidAgent {
    fn id(&self) -> &str {
        &self.id
    }
    fn description(&self) -> &'static str {
        "Flees the first aligned, unscared pursuer; otherwise follows the left wall."
    }
    fn decide(&mut self, tick: &Tick) -> Decision {
        let decision = decide(tick, self.radius);
        if let Mode::Threatened {
            pursuer_index,
            danger,
        } = decision.mode
        {
            tracing::debug!(
                tick = tick.tick,
                pursuer = pursuer_index,
                %danger,
                action = %decision.action,
                "pursuer in reach"
            );
        }
        decision
    }
}
