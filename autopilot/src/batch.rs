use crate::agents::agent_ids;
use crate::runner::{run_trace_with_radius, RunMetrics};
use crate::trace::load_trace;
use crate::util::{trace_label, unix_now};
use anyhow::{anyhow, Context, Result};
use maze_core::{validate_radius, Tick};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub agents: Vec<String>,
    pub traces: Vec<PathBuf>,
    pub threat_radius: f64,
    pub out_dir: PathBuf,
    pub jobs: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRecord {
    pub agent_id: String,
    pub agent_fingerprint: String,
    pub trace: String,
    pub tick_count: u32,
    pub threatened_ticks: u32,
    pub stop_ticks: u32,
    pub deadlock_ticks: u32,
    pub illegal_actions: u32,
}

impl From<&RunMetrics> for RunRecord {
    fn from(metrics: &RunMetrics) -> Self {
        Self {
            agent_id: metrics.agent_id.clone(),
            agent_fingerprint: metrics.agent_fingerprint.clone(),
            trace: metrics.trace.clone(),
            tick_count: metrics.tick_count,
            threatened_ticks: metrics.threatened_ticks,
            stop_ticks: metrics.stop_ticks,
            deadlock_ticks: metrics.deadlock_ticks,
            illegal_actions: metrics.illegal_actions,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentAggregate {
    pub agent_id: String,
    pub agent_fingerprint: String,
    pub runs: usize,
    pub total_ticks: u64,
    pub threatened_rate: f64,
    pub stop_rate: f64,
    pub deadlock_ticks: u64,
    pub illegal_actions: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_unix_s: u64,
    pub threat_radius: f64,
    pub jobs: Option<usize>,
    pub agents: Vec<String>,
    pub traces: Vec<String>,
    pub run_count: usize,
    pub agent_summaries: Vec<AgentAggregate>,
    pub runs: Vec<RunRecord>,
}

pub fn resolve_agents(input: Option<&str>) -> Result<Vec<String>> {
    match input {
        None => Ok(agent_ids().iter().map(|id| (*id).to_string()).collect()),
        Some(raw) => {
            let mut agents = Vec::new();
            for token in raw.split(',') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                agents.push(token.to_string());
            }
            if agents.is_empty() {
                return Err(anyhow!("--agents resolved to empty list"));
            }
            Ok(agents)
        }
    }
}

pub fn run_batch(config: BatchConfig) -> Result<BatchReport> {
    if config.traces.is_empty() {
        return Err(anyhow!("batch requires at least one trace"));
    }
    if config.agents.is_empty() {
        return Err(anyhow!("batch requires at least one agent"));
    }
    if let Some(jobs) = config.jobs {
        if jobs == 0 {
            return Err(anyhow!("batch --jobs must be >= 1 when provided"));
        }
    }
    let threat_radius = validate_radius(config.threat_radius)?;
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed creating {}", config.out_dir.display()))?;

    let traces: Vec<(String, Vec<Tick>)> = config
        .traces
        .iter()
        .map(|path| -> Result<(String, Vec<Tick>)> {
            Ok((trace_label(path), load_trace(path)?))
        })
        .collect::<Result<_>>()?;

    let run_jobs: Vec<(&str, usize)> = config
        .agents
        .iter()
        .flat_map(|agent| (0..traces.len()).map(move |idx| (agent.as_str(), idx)))
        .collect();

    let run_one = |(agent_id, trace_idx): &(&str, usize)| -> Result<RunMetrics> {
        let (label, ticks) = &traces[*trace_idx];
        let artifact = run_trace_with_radius(agent_id, threat_radius, label, ticks)
            .with_context(|| format!("batch run failed for agent={agent_id} trace={label}"))?;
        Ok(artifact.metrics)
    };

    let run_results: Vec<Result<RunMetrics>> = if let Some(jobs) = config.jobs {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("failed to build rayon threadpool")?;
        pool.install(|| run_jobs.par_iter().map(run_one).collect())
    } else {
        run_jobs.par_iter().map(run_one).collect()
    };

    let mut runs = Vec::with_capacity(run_results.len());
    for result in run_results {
        runs.push(result?);
    }

    let summaries = aggregate(&runs);
    let records: Vec<RunRecord> = runs.iter().map(RunRecord::from).collect();

    write_runs_csv(&config.out_dir.join("runs.csv"), &records)?;

    let report = BatchReport {
        generated_unix_s: unix_now(),
        threat_radius,
        jobs: config.jobs,
        agents: config.agents,
        traces: traces.into_iter().map(|(label, _)| label).collect(),
        run_count: records.len(),
        agent_summaries: summaries,
        runs: records,
    };

    let report_path = config.out_dir.join("summary.json");
    fs::write(
        &report_path,
        serde_json::to_vec_pretty(&report).context("failed to serialize summary json")?,
    )
    .with_context(|| format!("failed writing {}", report_path.display()))?;

    tracing::info!(
        runs = report.run_count,
        out_dir = %config.out_dir.display(),
        "batch complete"
    );

    Ok(report)
}

fn aggregate(runs: &[RunMetrics]) -> Vec<AgentAggregate> {
    let mut grouped: BTreeMap<&str, Vec<&RunMetrics>> = BTreeMap::new();
    for run in runs {
        grouped.entry(run.agent_id.as_str()).or_default().push(run);
    }

    grouped
        .into_iter()
        .map(|(agent_id, agent_runs)| {
            let total_ticks: u64 = agent_runs.iter().map(|r| r.tick_count as u64).sum();
            let threatened: u64 = agent_runs.iter().map(|r| r.threatened_ticks as u64).sum();
            let stops: u64 = agent_runs.iter().map(|r| r.stop_ticks as u64).sum();
            let denom = total_ticks.max(1) as f64;
            AgentAggregate {
                agent_id: agent_id.to_string(),
                agent_fingerprint: agent_runs
                    .first()
                    .map(|r| r.agent_fingerprint.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
                runs: agent_runs.len(),
                total_ticks,
                threatened_rate: threatened as f64 / denom,
                stop_rate: stops as f64 / denom,
                deadlock_ticks: agent_runs.iter().map(|r| r.deadlock_ticks as u64).sum(),
                illegal_actions: agent_runs.iter().map(|r| r.illegal_actions as u64).sum(),
            }
        })
        .collect()
}

fn write_runs_csv(path: &Path, rows: &[RunRecord]) -> Result<()> {
    let mut csv = String::from(
        "agent_id,agent_fingerprint,trace,tick_count,threatened_ticks,stop_ticks,deadlock_ticks,illegal_actions\n",
    );
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            row.agent_id,
            row.agent_fingerprint,
            row.trace,
            row.tick_count,
            row.threatened_ticks,
            row.stop_ticks,
            row.deadlock_ticks,
            row.illegal_actions
        ));
    }
    fs::write(path, csv).with_context(|| format!("failed writing {}", path.display()))
}
