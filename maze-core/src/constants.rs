/// Row/column distance at or under which an unscared pursuer counts as a threat.
pub const DEFAULT_THREAT_RADIUS: f64 = 3.0;

/// Heading assumed on the startup tick, when the agent has not committed to a move yet.
pub const STARTUP_HEADING: crate::Direction = crate::Direction::North;
