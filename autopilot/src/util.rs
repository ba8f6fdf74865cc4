use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn parse_csv(input: &str, flag: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        out.push(token.to_string());
    }
    if out.is_empty() {
        return Err(anyhow!("no values parsed from --{flag}"));
    }
    Ok(out)
}

pub fn parse_path_csv(input: &str, flag: &str) -> Result<Vec<PathBuf>> {
    Ok(parse_csv(input, flag)?
        .into_iter()
        .map(PathBuf::from)
        .collect())
}

/// Short label for a trace path: file stem, or the full path if there is none.
pub fn trace_label(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
