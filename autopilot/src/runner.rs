use crate::agents::{agent_fingerprint, create_agent_with_radius, MazeAgent};
use anyhow::{anyhow, Context, Result};
use maze_core::constants::DEFAULT_THREAT_RADIUS;
use maze_core::{Decision, Direction, Tick};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunMetrics {
    pub agent_id: String,
    pub agent_fingerprint: String,
    pub trace: String,
    pub tick_count: u32,
    pub threatened_ticks: u32,
    pub exploring_ticks: u32,
    pub north_ticks: u32,
    pub south_ticks: u32,
    pub east_ticks: u32,
    pub west_ticks: u32,
    pub stop_ticks: u32,
    /// Stop chosen because nothing the policy would take was legal.
    pub deadlock_ticks: u32,
    pub illegal_actions: u32,
}

impl RunMetrics {
    fn record(&mut self, tick: &Tick, decision: &Decision) {
        self.tick_count += 1;
        if decision.is_threatened() {
            self.threatened_ticks += 1;
        } else {
            self.exploring_ticks += 1;
        }
        match decision.action {
            Direction::North => self.north_ticks += 1,
            Direction::South => self.south_ticks += 1,
            Direction::East => self.east_ticks += 1,
            Direction::West => self.west_ticks += 1,
            Direction::Stop => self.stop_ticks += 1,
        }
        if decision.action == Direction::Stop {
            if !Direction::CARDINALS.iter().any(|dir| tick.legal.contains(*dir)) {
                self.deadlock_ticks += 1;
            }
        } else if !tick.legal.contains(decision.action) {
            self.illegal_actions += 1;
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TickRecord {
    pub tick: u32,
    #[serde(flatten)]
    pub decision: Decision,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunArtifact {
    pub metrics: RunMetrics,
    pub decisions: Vec<TickRecord>,
}

pub fn run_trace(agent_id: &str, trace: &str, ticks: &[Tick]) -> Result<RunArtifact> {
    run_trace_with_radius(agent_id, DEFAULT_THREAT_RADIUS, trace, ticks)
}

pub fn run_trace_with_radius(
    agent_id: &str,
    radius: f64,
    trace: &str,
    ticks: &[Tick],
) -> Result<RunArtifact> {
    let mut agent = create_agent_with_radius(agent_id, radius)
        .ok_or_else(|| anyhow!("unknown agent '{agent_id}'"))?;
    run_agent(agent.as_mut(), trace, ticks)
}

pub fn run_agent(agent: &mut dyn MazeAgent, trace: &str, ticks: &[Tick]) -> Result<RunArtifact> {
    if ticks.is_empty() {
        return Err(anyhow!("trace '{trace}' has no ticks"));
    }

    let mut metrics = RunMetrics {
        agent_id: agent.id().to_string(),
        agent_fingerprint: agent_fingerprint(agent.id()).unwrap_or_else(|| "unknown".to_string()),
        trace: trace.to_string(),
        ..RunMetrics::default()
    };
    let mut decisions = Vec::with_capacity(ticks.len());

    for (idx, tick) in ticks.iter().enumerate() {
        tick.validate()
            .with_context(|| format!("tick #{idx} (tick={}) in '{trace}' is malformed", tick.tick))?;
        let decision = agent.decide(tick);
        metrics.record(tick, &decision);
        decisions.push(TickRecord {
            tick: tick.tick,
            decision,
        });
    }

    tracing::info!(
        agent = %metrics.agent_id,
        trace = %metrics.trace,
        ticks = metrics.tick_count,
        threatened = metrics.threatened_ticks,
        deadlocks = metrics.deadlock_ticks,
        "trace evaluated"
    );

    Ok(RunArtifact { metrics, decisions })
}

pub fn write_decisions(path: &Path, artifact: &RunArtifact) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }
    let encoded =
        serde_json::to_vec_pretty(artifact).context("failed to serialize run decisions")?;
    fs::write(path, encoded).with_context(|| format!("failed writing {}", path.display()))
}
