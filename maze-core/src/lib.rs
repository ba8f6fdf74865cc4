pub mod constants;
pub mod direction;
pub mod error;
pub mod legal;
pub mod select;
pub mod snapshot;
pub mod threat;

pub use direction::Direction;
pub use error::MazeError;
pub use legal::LegalMoves;
pub use select::{decide, evade, left_turn_action, select_action, Decision, Mode};
pub use snapshot::{validate_radius, AgentSnapshot, Position, Tick};
pub use threat::{is_threat, is_threat_default, scan_threats};
