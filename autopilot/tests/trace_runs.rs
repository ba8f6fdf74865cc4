use anyhow::Result;
use maze_autopilot::agents::{agent_ids, create_agent};
use maze_autopilot::runner::{run_agent, run_trace, write_decisions};
use maze_autopilot::trace::{load_tick, load_trace};
use maze_core::{AgentSnapshot, Direction, LegalMoves, Mode, Position, Tick};
use std::path::PathBuf;

fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn actions(ticks: &[Tick], agent: &str) -> Result<Vec<Direction>> {
    let artifact = run_trace(agent, "demo", ticks)?;
    Ok(artifact
        .decisions
        .iter()
        .map(|record| record.decision.action)
        .collect())
}

#[test]
fn timid_flees_along_the_corridor() -> Result<()> {
    use Direction::{East, South, Stop, West};

    let ticks = load_trace(&demo_path("corridor.jsonl"))?;
    assert_eq!(actions(&ticks, "timid")?, vec![East, West, South, South, East, Stop]);

    let artifact = run_trace("timid", "corridor", &ticks)?;
    let metrics = &artifact.metrics;
    assert_eq!(metrics.tick_count, 6);
    assert_eq!(metrics.threatened_ticks, 3);
    assert_eq!(metrics.exploring_ticks, 3);
    assert_eq!(metrics.stop_ticks, 1);
    assert_eq!(metrics.deadlock_ticks, 1);
    assert_eq!(metrics.illegal_actions, 0);
    assert_eq!(metrics.agent_fingerprint, "threat_aware:timid");
    Ok(())
}

#[test]
fn left_turn_ignores_the_same_pursuers() -> Result<()> {
    use Direction::{East, South, Stop};

    let ticks = load_trace(&demo_path("corridor.jsonl"))?;
    assert_eq!(actions(&ticks, "left-turn")?, vec![East, East, South, South, East, Stop]);
    let artifact = run_trace("left-turn", "corridor", &ticks)?;
    assert_eq!(artifact.metrics.threatened_ticks, 0);
    Ok(())
}

#[test]
fn single_tick_example_turns_south() -> Result<()> {
    let tick = load_tick(&demo_path("danger-east.json"))?;
    let mut agent = create_agent("timid").expect("timid agent");
    let decision = agent.decide(&tick);
    assert_eq!(decision.action, Direction::South);
    assert_eq!(
        decision.mode,
        Mode::Threatened {
            pursuer_index: 0,
            danger: Direction::East
        }
    );
    Ok(())
}

#[test]
fn every_agent_is_deterministic_over_replays() -> Result<()> {
    let ticks = load_trace(&demo_path("corridor.jsonl"))?;
    for id in agent_ids() {
        let first = actions(&ticks, id)?;
        let second = actions(&ticks, id)?;
        assert_eq!(first, second, "agent={id}");
    }
    Ok(())
}

#[test]
fn malformed_tick_is_rejected_with_context() {
    let ticks = vec![Tick::new(
        LegalMoves::from([Direction::North]),
        AgentSnapshot::new(Position::new(f64::INFINITY, 0.0), Direction::North),
        vec![],
    )];
    let err = run_trace("timid", "bad", &ticks).expect_err("non-finite position");
    let message = format!("{err:#}");
    assert!(message.contains("malformed"), "{message}");
    assert!(message.contains("controlled agent"), "{message}");
}

#[test]
fn empty_trace_and_unknown_agent_are_errors() {
    assert!(run_trace("timid", "empty", &[]).is_err());
    let ticks = vec![Tick::new(
        LegalMoves::empty(),
        AgentSnapshot::new((0, 0), Direction::Stop),
        vec![],
    )];
    assert!(run_trace("inky", "demo", &ticks).is_err());
}

#[test]
fn decisions_file_round_trips_through_json() -> Result<()> {
    let ticks = load_trace(&demo_path("corridor.jsonl"))?;
    let mut agent = create_agent("timid:1").expect("narrow timid");
    let artifact = run_agent(agent.as_mut(), "corridor", &ticks)?;

    let tmp = tempfile::tempdir()?;
    let path = tmp.path().join("out").join("decisions.json");
    write_decisions(&path, &artifact)?;

    let value: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
    assert_eq!(value["metrics"]["agent_id"], "timid:1");
    let decisions = value["decisions"].as_array().expect("decision list");
    assert_eq!(decisions.len(), 6);
    assert_eq!(decisions[0]["tick"], 1);
    assert_eq!(decisions[0]["mode"], "exploring");
    Ok(())
}
