pub mod agents;
pub mod batch;
pub mod config;
pub mod runner;
pub mod trace;
pub mod util;
