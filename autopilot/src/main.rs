use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use maze_autopilot::agents::{
    agent_ids, agent_manifest_entries, create_agent_with_radius, describe_agents,
};
use maze_autopilot::batch::{resolve_agents, run_batch, BatchConfig};
use maze_autopilot::config::Settings;
use maze_autopilot::runner::{run_trace_with_radius, write_decisions};
use maze_autopilot::trace::{load_tick, load_trace};
use maze_autopilot::util::{parse_path_csv, trace_label, unix_now};
use maze_core::validate_radius;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "maze-autopilot")]
#[command(about = "Per-tick maze agents: threat-aware evasion and left-hand wall following")]
struct Cli {
    /// Threat radius for timid agents (overrides MAZE_THREAT_RADIUS)
    #[arg(long, global = true)]
    radius: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available agents
    ListAgents,
    /// Export the agent manifest (including config fingerprints)
    RosterManifest {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Choose one action for a single recorded tick
    Decide {
        #[arg(long, default_value = "timid")]
        agent: String,
        #[arg(long)]
        tick: PathBuf,
    },
    /// Evaluate an agent over a recorded trace (JSON array or JSON Lines)
    Run {
        #[arg(long, default_value = "timid")]
        agent: String,
        #[arg(long)]
        trace: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Evaluate several agents over several traces
    Batch {
        #[arg(long)]
        agents: Option<String>,
        #[arg(long)]
        traces: String,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        jobs: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { radius, command } = Cli::parse();
    let settings = Settings::from_env();
    let radius = match radius {
        Some(value) => validate_radius(value)?,
        None => settings.threat_radius,
    };

    match command {
        Commands::ListAgents => {
            for (id, description) in describe_agents() {
                println!("{id:12} {description}");
            }
        }
        Commands::RosterManifest { output } => {
            let manifest = agent_manifest_entries();
            let encoded = serde_json::to_vec_pretty(&manifest)?;
            if let Some(path) = output {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&path, encoded)?;
                println!("wrote={}", path.display());
                println!("agents={}", manifest.len());
            } else {
                println!("{}", String::from_utf8_lossy(&encoded));
            }
        }
        Commands::Decide { agent, tick } => {
            let mut instance = create_agent_with_radius(&agent, radius)
                .ok_or_else(|| unknown_agent(&agent))?;
            let snapshot = load_tick(&tick)?;
            snapshot.validate()?;
            let decision = instance.decide(&snapshot);

            println!("agent={}", instance.id());
            println!("tick={}", snapshot.tick);
            println!("action={}", decision.action);
            println!("{}", serde_json::to_string(&decision)?);
        }
        Commands::Run {
            agent,
            trace,
            output,
        } => {
            if create_agent_with_radius(&agent, radius).is_none() {
                return Err(unknown_agent(&agent));
            }
            let ticks = load_trace(&trace)?;
            let label = trace_label(&trace);
            let artifact = run_trace_with_radius(&agent, radius, &label, &ticks)?;
            let metrics = &artifact.metrics;

            println!("agent={}", metrics.agent_id);
            println!("agent_fingerprint={}", metrics.agent_fingerprint);
            println!("trace={}", metrics.trace);
            println!("ticks={}", metrics.tick_count);
            println!("threatened={}", metrics.threatened_ticks);
            println!("exploring={}", metrics.exploring_ticks);
            println!(
                "moves=north:{},south:{},east:{},west:{},stop:{}",
                metrics.north_ticks,
                metrics.south_ticks,
                metrics.east_ticks,
                metrics.west_ticks,
                metrics.stop_ticks
            );
            println!("deadlocks={}", metrics.deadlock_ticks);
            println!("illegal={}", metrics.illegal_actions);
            if let Some(path) = output {
                write_decisions(&path, &artifact)?;
                println!("output={}", path.display());
            }
        }
        Commands::Batch {
            agents,
            traces,
            out_dir,
            jobs,
        } => {
            let agents = resolve_agents(agents.as_deref())?;
            for agent in &agents {
                if create_agent_with_radius(agent, radius).is_none() {
                    return Err(unknown_agent(agent));
                }
            }
            let traces = parse_path_csv(&traces, "traces")?;
            let jobs = jobs.or(settings.batch_jobs);
            let out_dir =
                out_dir.unwrap_or_else(|| PathBuf::from(format!("batches/{}", unix_now())));

            let report = run_batch(BatchConfig {
                agents,
                traces,
                threat_radius: radius,
                out_dir: out_dir.clone(),
                jobs,
            })?;

            println!("runs={}", report.run_count);
            println!("radius={}", report.threat_radius);
            println!(
                "jobs={}",
                report
                    .jobs
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "auto".to_string())
            );
            println!("out_dir={}", out_dir.display());
            println!("agents:");
            for summary in &report.agent_summaries {
                println!(
                    "  {}  runs={} ticks={} threatened={:.1}% stop={:.1}% deadlocks={} illegal={}",
                    summary.agent_id,
                    summary.runs,
                    summary.total_ticks,
                    summary.threatened_rate * 100.0,
                    summary.stop_rate * 100.0,
                    summary.deadlock_ticks,
                    summary.illegal_actions,
                );
            }
        }
    }

    Ok(())
}

fn unknown_agent(agent: &str) -> anyhow::Error {
    let available = agent_ids().join(", ");
    anyhow!("unknown agent '{agent}'. available: {available} (or timid:<radius>)")
}
