use super::left_turn::LeftTurnAgent;
use super::timid::TimidAgent;
use super::{AgentManifestEntry, MazeAgent};
use maze_core::constants::{DEFAULT_THREAT_RADIUS, STARTUP_HEADING};

pub fn agent_ids() -> Vec<&'static str> {
    vec!["timid", "left-turn"]
}

pub fn describe_agents() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "timid",
            "Flees the first aligned, unscared pursuer; otherwise follows the left wall.",
        ),
        ("left-turn", "Left-hand wall follower that never looks at pursuers."),
    ]
}

pub fn create_agent(id: &str) -> Option<Box<dyn MazeAgent>> {
    create_agent_with_radius(id, DEFAULT_THREAT_RADIUS)
}

/// `radius` applies to a bare `timid` id; `timid:<radius>` always wins.
pub fn create_agent_with_radius(id: &str, radius: f64) -> Option<Box<dyn MazeAgent>> {
    match id {
        "timid" => TimidAgent::with_radius(radius)
            .ok()
            .map(|agent| Box::new(agent) as Box<dyn MazeAgent>),
        "left-turn" => Some(Box::new(LeftTurnAgent::new())),
        _ => try_parse_timid_radius(id),
    }
}

fn try_parse_timid_radius(id: &str) -> Option<Box<dyn MazeAgent>> {
    let raw = id.strip_prefix("timid:")?;
    let radius = raw.trim().parse::<f64>().ok()?;
    TimidAgent::with_radius(radius)
        .ok()
        .map(|agent| Box::new(agent) as Box<dyn MazeAgent>)
}

pub fn agent_manifest_entries() -> Vec<AgentManifestEntry> {
    let timid = TimidAgent::new();
    let left_turn = LeftTurnAgent::new();
    vec![
        AgentManifestEntry {
            id: timid.id().to_string(),
            family: "threat_aware".to_string(),
            description: timid.description().to_string(),
            fingerprint: fingerprint("threat_aware", timid.id()),
            config: serde_json::json!({
                "threat_radius": timid.radius(),
                "startup_heading": STARTUP_HEADING,
                "evasion_order": ["reverse", "left", "right", "toward"],
                "fallback_order": ["left", "straight", "right", "reverse"],
            }),
        },
        AgentManifestEntry {
            id: left_turn.id().to_string(),
            family: "wall_follower".to_string(),
            description: left_turn.description().to_string(),
            fingerprint: fingerprint("wall_follower", left_turn.id()),
            config: serde_json::json!({
                "startup_heading": STARTUP_HEADING,
                "fallback_order": ["left", "straight", "right", "reverse"],
            }),
        },
    ]
}

/// Fingerprints also cover `timid:<radius>` ids that are not in the manifest.
pub fn agent_fingerprint(id: &str) -> Option<String> {
    let agent = create_agent(id)?;
    let family = if agent.id().starts_with("timid") {
        "threat_aware"
    } else {
        "wall_follower"
    };
    Some(fingerprint(family, agent.id()))
}

fn fingerprint(family: &str, id: &str) -> String {
    format!("{family}:{id}")
}
