use crate::direction::Direction;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Moves the environment allows from the agent's current cell this tick.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct LegalMoves {
    bits: u8,
}

impl LegalMoves {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.bits & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.bits |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.bits &= !dir.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// First candidate that is legal, in the order given.
    pub fn first_legal<I>(&self, candidates: I) -> Option<Direction>
    where
        I: IntoIterator<Item = Direction>,
    {
        candidates.into_iter().find(|dir| self.contains(*dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.contains(*dir))
    }
}

impl FromIterator<Direction> for LegalMoves {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut moves = Self::empty();
        for dir in iter {
            moves.insert(dir);
        }
        moves
    }
}

impl<const N: usize> From<[Direction; N]> for LegalMoves {
    fn from(dirs: [Direction; N]) -> Self {
        dirs.into_iter().collect()
    }
}

impl From<Vec<Direction>> for LegalMoves {
    fn from(dirs: Vec<Direction>) -> Self {
        dirs.into_iter().collect()
    }
}

impl From<LegalMoves> for Vec<Direction> {
    fn from(moves: LegalMoves) -> Self {
        moves.iter().collect()
    }
}

impl fmt::Debug for LegalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_follows_inserts_and_removes() {
        let mut moves = LegalMoves::from([Direction::North, Direction::Stop]);
        assert!(moves.contains(Direction::North));
        assert!(moves.contains(Direction::Stop));
        assert!(!moves.contains(Direction::East));
        assert_eq!(moves.len(), 2);

        moves.remove(Direction::North);
        moves.insert(Direction::West);
        assert_eq!(moves.iter().collect::<Vec<_>>(), vec![Direction::West, Direction::Stop]);
    }

    #[test]
    fn first_legal_respects_candidate_order() {
        let moves = LegalMoves::from([Direction::South, Direction::West]);
        let picked = moves.first_legal([Direction::East, Direction::West, Direction::South]);
        assert_eq!(picked, Some(Direction::West));
        assert_eq!(LegalMoves::empty().first_legal(Direction::ALL), None);
    }

    #[test]
    fn serializes_as_direction_names() {
        let moves = LegalMoves::from([Direction::East, Direction::North]);
        let encoded = serde_json::to_string(&moves).expect("encode");
        assert_eq!(encoded, r#"["North","East"]"#);
        let decoded: LegalMoves = serde_json::from_str(r#"["East","Stop","East"]"#).expect("decode");
        assert_eq!(decoded, LegalMoves::from([Direction::East, Direction::Stop]));
    }
}
