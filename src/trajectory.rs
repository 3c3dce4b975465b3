use crate::error::{Result, WalkError};
use serde::{Deserialize, Serialize};

/// Cartesian position in micrometres.
pub type Position = [f64; 3];

/// Ordered history of the positions visited by one photon.
///
/// Never empty: the first entry is the position the photon was created at.
/// Positions are only appended, apart from a guarded removal of the most
/// recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Trajectory {
    positions: Vec<Position>,
}

impl Trajectory {
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
        }
    }

    pub fn push(&mut self, position: Position) {
        self.positions.push(position);
    }

    /// Remove and return the most recent position.
    ///
    /// Fails with `TrajectoryUnderflow` when only the initial position is left.
    pub fn pop_last(&mut self) -> Result<Position> {
        let len = self.positions.len();
        if len < 2 {
            return Err(WalkError::TrajectoryUnderflow { len });
        }
        self.positions
            .pop()
            .ok_or(WalkError::TrajectoryUnderflow { len })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn start(&self) -> Position {
        self.positions[0]
    }

    pub fn last(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Consecutive `(from, to)` pairs in walk order.
    pub fn segments(&self) -> impl Iterator<Item = (&Position, &Position)> + '_ {
        self.positions.iter().zip(self.positions.iter().skip(1))
    }
}

impl TryFrom<Vec<Position>> for Trajectory {
    type Error = WalkError;

    fn try_from(positions: Vec<Position>) -> Result<Self> {
        if positions.is_empty() {
            return Err(WalkError::EmptyTrajectory);
        }
        Ok(Self { positions })
    }
}

impl From<Trajectory> for Vec<Position> {
    fn from(trajectory: Trajectory) -> Self {
        trajectory.positions
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_start() {
        let t = Trajectory::new([1.0, 2.0, 3.0]);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.start(), [1.0, 2.0, 3.0]);
        assert_eq!(t.last(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_push_keeps_order() {
        let mut t = Trajectory::new([0.0, 0.0, 0.0]);
        t.push([1.0, 0.0, 0.0]);
        t.push([1.0, 1.0, 0.0]);
        assert_eq!(
            t.positions(),
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]
        );
        assert_eq!(t.last(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut t = Trajectory::new([0.0, 0.0, 0.0]);
        t.push([0.0, 0.0, 0.0]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_pop_last_then_push_restores() {
        let mut t = Trajectory::new([0.0, 0.0, 0.0]);
        t.push([1.0, 2.0, 3.0]);
        let before = t.clone();
        let popped = t.pop_last().unwrap();
        assert_eq!(popped, [1.0, 2.0, 3.0]);
        assert_eq!(t.len(), 1);
        t.push(popped);
        assert_eq!(t, before);
    }

    #[test]
    fn test_pop_last_underflow() {
        let mut t = Trajectory::new([5.0, 5.0, 5.0]);
        let err = t.pop_last().unwrap_err();
        assert!(matches!(err, WalkError::TrajectoryUnderflow { len: 1 }));
        // state untouched
        assert_eq!(t.len(), 1);
        assert_eq!(t.start(), [5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_json_is_position_list() {
        let mut t = Trajectory::new([0.0, 0.0, 0.0]);
        t.push([1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[[0.0,0.0,0.0],[1.0,2.0,3.0]]");
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_empty_json_is_rejected() {
        let err = serde_json::from_str::<Trajectory>("[]").unwrap_err();
        assert!(err.to_string().contains("trajectory must hold at least one position"));
    }

    #[test]
    fn test_try_from_empty_vec_fails() {
        let err = Trajectory::try_from(Vec::new()).unwrap_err();
        assert!(matches!(err, WalkError::EmptyTrajectory));
        let t = Trajectory::try_from(vec![[1.0, 1.0, 1.0]]).unwrap();
        assert_eq!(t.start(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_segments() {
        let mut t = Trajectory::new([0.0, 0.0, 0.0]);
        assert_eq!(t.segments().count(), 0);
        t.push([1.0, 0.0, 0.0]);
        t.push([2.0, 0.0, 0.0]);
        let segs: Vec<_> = t.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(*segs[1].0, [1.0, 0.0, 0.0]);
        assert_eq!(*segs[1].1, [2.0, 0.0, 0.0]);
    }
}
