pub mod left_turn;
pub mod roster;
pub mod timid;

use maze_core::{Decision, Direction, Tick};
use serde::Serialize;

pub use roster::{
    agent_fingerprint, agent_ids, agent_manifest_entries, create_agent, create_agent_with_radius,
    describe_agents,
};

pub trait MazeAgent: Send {
    fn id(&self) -> &str;
    fn description(&self) -> &'static str;
    fn decide(&mut self, tick: &Tick) -> Decision;
    fn next_action(&mut self, tick: &Tick) -> Direction {
        self.decide(tick).action
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AgentManifestEntry {
    pub id: String,
    pub family: String,
    pub description: String,
    pub fingerprint: String,
    pub config: serde_json::Value,
}
