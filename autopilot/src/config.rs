use maze_core::constants::DEFAULT_THREAT_RADIUS;
use maze_core::validate_radius;
use std::env;

pub const RADIUS_ENV: &str = "MAZE_THREAT_RADIUS";
pub const JOBS_ENV: &str = "MAZE_BATCH_JOBS";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub threat_radius: f64,
    pub batch_jobs: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threat_radius: DEFAULT_THREAT_RADIUS,
            batch_jobs: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Invalid values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let threat_radius = match lookup(RADIUS_ENV) {
            None => DEFAULT_THREAT_RADIUS,
            Some(raw) => match raw.trim().parse::<f64>().ok().map(validate_radius) {
                Some(Ok(radius)) => radius,
                _ => {
                    tracing::warn!(
                        "{RADIUS_ENV}={raw:?} is not a non-negative number. Falling back to {DEFAULT_THREAT_RADIUS}."
                    );
                    DEFAULT_THREAT_RADIUS
                }
            },
        };

        let batch_jobs = lookup(JOBS_ENV).and_then(|raw| {
            let parsed = raw.trim().parse::<usize>().ok().filter(|value| *value > 0);
            if parsed.is_none() {
                tracing::warn!("{JOBS_ENV}={raw:?} is not a positive integer. Ignoring.");
            }
            parsed
        });

        Self {
            threat_radius,
            batch_jobs,
        }
    }
}
