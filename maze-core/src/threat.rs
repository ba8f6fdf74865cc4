//! Single-pursuer threat test.
//!
//! A pursuer is a threat when it is not scared, sits in exactly the same
//! column or row as the agent, and is within `radius` along that line. The
//! returned direction points from the agent toward the pursuer; `Stop` means
//! no threat.

use crate::constants::DEFAULT_THREAT_RADIUS;
use crate::direction::Direction;
use crate::snapshot::AgentSnapshot;

pub fn is_threat(agent: &AgentSnapshot, pursuer: &AgentSnapshot, radius: f64) -> Direction {
    if pursuer.is_scared() {
        return Direction::Stop;
    }

    let (me, them) = (agent.position, pursuer.position);

    // Equal coordinates fall to the else arm: North for a column, West for a row.
    if me.x == them.x && (them.y - me.y).abs() <= radius {
        if them.y > me.y {
            Direction::South
        } else {
            Direction::North
        }
    } else if me.y == them.y && (them.x - me.x).abs() <= radius {
        if them.x > me.x {
            Direction::East
        } else {
            Direction::West
        }
    } else {
        Direction::Stop
    }
}

pub fn is_threat_default(agent: &AgentSnapshot, pursuer: &AgentSnapshot) -> Direction {
    is_threat(agent, pursuer, DEFAULT_THREAT_RADIUS)
}

/// First threatening pursuer in enumeration order, with its index.
pub fn scan_threats(
    agent: &AgentSnapshot,
    pursuers: &[AgentSnapshot],
    radius: f64,
) -> Option<(usize, Direction)> {
    pursuers
        .iter()
        .enumerate()
        .map(|(index, pursuer)| (index, is_threat(agent, pursuer, radius)))
        .find(|(_, danger)| *danger != Direction::Stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacman_at(x: i32, y: i32) -> AgentSnapshot {
        AgentSnapshot::new((x, y), Direction::East)
    }

    fn ghost_at(x: i32, y: i32) -> AgentSnapshot {
        AgentSnapshot::pursuer((x, y))
    }

    #[test]
    fn column_alignment_reports_vertical_direction() {
        let me = pacman_at(5, 5);
        assert_eq!(is_threat_default(&me, &ghost_at(5, 7)), Direction::South);
        assert_eq!(is_threat_default(&me, &ghost_at(5, 3)), Direction::North);
    }

    #[test]
    fn row_alignment_reports_horizontal_direction() {
        let me = pacman_at(5, 5);
        assert_eq!(is_threat_default(&me, &ghost_at(8, 5)), Direction::East);
        assert_eq!(is_threat_default(&me, &ghost_at(2, 5)), Direction::West);
    }

    #[test]
    fn shared_cell_breaks_tie_toward_north() {
        let me = pacman_at(4, 4);
        assert_eq!(is_threat_default(&me, &ghost_at(4, 4)), Direction::North);
    }

    #[test]
    fn zero_radius_only_catches_shared_cell() {
        let me = pacman_at(4, 4);
        assert_eq!(is_threat(&me, &ghost_at(4, 4), 0.0), Direction::North);
        assert_eq!(is_threat(&me, &ghost_at(4, 5), 0.0), Direction::Stop);
        assert_eq!(is_threat(&me, &ghost_at(5, 4), 0.0), Direction::Stop);
    }

    #[test]
    fn fractional_pursuer_is_not_aligned() {
        let me = pacman_at(4, 4);
        let between = AgentSnapshot::pursuer((4.5, 4.0));
        assert_eq!(is_threat_default(&me, &between), Direction::Stop);
        let half_step = AgentSnapshot::pursuer((4.0, 5.5));
        assert_eq!(is_threat_default(&me, &half_step), Direction::South);
    }

    #[test]
    fn scan_stops_at_first_threat() {
        let me = pacman_at(5, 5);
        let pursuers = [ghost_at(0, 0), ghost_at(7, 5), ghost_at(5, 3)];
        assert_eq!(
            scan_threats(&me, &pursuers, DEFAULT_THREAT_RADIUS),
            Some((1, Direction::East))
        );
        assert_eq!(scan_threats(&me, &pursuers[..1], DEFAULT_THREAT_RADIUS), None);
    }
}
