//! Recorded tick traces.
//!
//! A trace file is either a JSON array of ticks or JSON Lines with one tick
//! per line. Blank lines and lines starting with `#` are skipped in the
//! line format.

use anyhow::{anyhow, Context, Result};
use maze_core::Tick;
use std::fs;
use std::path::Path;

pub fn parse_trace(input: &str) -> Result<Vec<Tick>> {
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid JSON trace array");
    }

    let mut ticks = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tick: Tick = serde_json::from_str(line)
            .with_context(|| format!("invalid tick on line {}", idx + 1))?;
        ticks.push(tick);
    }
    Ok(ticks)
}

pub fn load_trace(path: &Path) -> Result<Vec<Tick>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading trace {}", path.display()))?;
    let ticks =
        parse_trace(&data).with_context(|| format!("failed parsing trace {}", path.display()))?;
    if ticks.is_empty() {
        return Err(anyhow!("trace {} had no ticks", path.display()));
    }
    Ok(ticks)
}

pub fn load_tick(path: &Path) -> Result<Tick> {
    let data =
        fs::read(path).with_context(|| format!("failed reading tick {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("failed parsing tick {}", path.display()))
}
