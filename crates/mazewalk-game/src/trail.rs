//! Trail tracking for a walker moving through a maze.

use std::collections::{HashMap, HashSet};

use mazewalk_core::Position;

/// How a successful move changed the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveKind {
    /// The target was a fresh cell and was appended to the trail.
    Forward,
    /// The target had been backtracked earlier; it is un-marked and appended
    /// to the trail again.
    Reentered,
    /// The target was already on the trail. Every position after it was
    /// removed from the trail and marked as backtracked.
    Collapsed {
        /// Number of positions moved from the trail to the backtracked set.
        backtracked: usize,
    },
}

/// The route from the start to the live position, plus the cells abandoned
/// along the way.
///
/// The trail is an ordered sequence that always begins with the start
/// position and ends with the live position. Stepping onto a cell that is
/// already on the trail collapses the loop: everything visited since that
/// cell becomes *backtracked*.
///
/// The trail and the backtracked set are always disjoint, and the trail never
/// contains the same position twice.
///
/// # Examples
///
/// ```
/// use mazewalk_core::Position;
/// use mazewalk_game::{MoveKind, Trail};
///
/// let start = Position::new(1, 1);
/// let mut trail = Trail::new(start);
///
/// assert_eq!(trail.step_to(Position::new(1, 2)), MoveKind::Forward);
/// assert_eq!(trail.step_to(Position::new(2, 2)), MoveKind::Forward);
///
/// // Going back to the start abandons both cells.
/// assert_eq!(trail.step_to(start), MoveKind::Collapsed { backtracked: 2 });
/// assert_eq!(trail.path(), [start]);
/// assert!(trail.is_backtracked(Position::new(2, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    path: Vec<Position>,
    /// Index of every trail position in `path`.
    index: HashMap<Position, usize>,
    backtracked: HashSet<Position>,
}

impl Trail {
    /// Creates a trail that consists of the start position only.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            path: vec![start],
            index: HashMap::from([(start, 0)]),
            backtracked: HashSet::new(),
        }
    }

    /// Discards all progress and restarts the trail at `start`.
    pub fn reset(&mut self, start: Position) {
        self.path.clear();
        self.path.push(start);
        self.index.clear();
        self.index.insert(start, 0);
        self.backtracked.clear();
    }

    /// Returns `true` if `pos` is on the trail.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index.contains_key(&pos)
    }

    /// Returns `true` if `pos` was on the trail and has since been abandoned.
    #[must_use]
    pub fn is_backtracked(&self, pos: Position) -> bool {
        self.backtracked.contains(&pos)
    }

    /// Returns the trail from the start to the live position.
    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Returns the backtracked positions.
    #[must_use]
    pub fn backtracked(&self) -> &HashSet<Position> {
        &self.backtracked
    }

    /// Returns the last position on the trail.
    #[must_use]
    pub fn last(&self) -> Position {
        self.path[self.path.len() - 1]
    }

    /// Returns the position just before the last one, or `None` if the trail
    /// holds only the start.
    #[must_use]
    pub fn parent(&self) -> Option<Position> {
        let len = self.path.len();
        (len >= 2).then(|| self.path[len - 2])
    }

    /// Records a step onto `target` and reports how the trail changed.
    ///
    /// The caller is responsible for making sure the step is legal.
    pub fn step_to(&mut self, target: Position) -> MoveKind {
        if let Some(&idx) = self.index.get(&target) {
            let abandoned = self.path.split_off(idx + 1);
            for pos in &abandoned {
                self.index.remove(pos);
            }
            let backtracked = abandoned.len();
            self.backtracked.extend(abandoned);
            return MoveKind::Collapsed { backtracked };
        }

        let reentered = self.backtracked.remove(&target);
        self.index.insert(target, self.path.len());
        self.path.push(target);
        if reentered {
            MoveKind::Reentered
        } else {
            MoveKind::Forward
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn assert_consistent(trail: &Trail) {
        assert_eq!(trail.index.len(), trail.path.len());
        for (i, p) in trail.path.iter().enumerate() {
            assert_eq!(trail.index.get(p), Some(&i));
            assert!(!trail.backtracked.contains(p), "{p} is in both sets");
        }
    }

    #[test]
    fn test_new_trail_holds_only_start() {
        let trail = Trail::new(pos(1, 1));
        assert_eq!(trail.path(), [pos(1, 1)]);
        assert_eq!(trail.last(), pos(1, 1));
        assert_eq!(trail.parent(), None);
        assert!(trail.contains(pos(1, 1)));
        assert!(trail.backtracked().is_empty());
    }

    #[test]
    fn test_forward_step_appends() {
        let mut trail = Trail::new(pos(1, 1));
        assert!(trail.step_to(pos(2, 1)).is_forward());
        assert_eq!(trail.path(), [pos(1, 1), pos(2, 1)]);
        assert_eq!(trail.last(), pos(2, 1));
        assert_eq!(trail.parent(), Some(pos(1, 1)));
        assert!(trail.backtracked().is_empty());
        assert_consistent(&trail);
    }

    #[test]
    fn test_stepping_back_backtracks_one() {
        let mut trail = Trail::new(pos(1, 1));
        trail.step_to(pos(2, 1));
        assert_eq!(
            trail.step_to(pos(1, 1)),
            MoveKind::Collapsed { backtracked: 1 }
        );
        assert_eq!(trail.path(), [pos(1, 1)]);
        assert!(trail.is_backtracked(pos(2, 1)));
        assert!(!trail.contains(pos(2, 1)));
        assert_consistent(&trail);
    }

    #[test]
    fn test_loop_collapses_to_earlier_cell() {
        let mut trail = Trail::new(pos(2, 2));
        for p in [pos(2, 3), pos(3, 3), pos(3, 2), pos(3, 1), pos(2, 1)] {
            trail.step_to(p);
        }
        // Stepping right from (2, 1) lands on the start again.
        assert_eq!(
            trail.step_to(pos(2, 2)),
            MoveKind::Collapsed { backtracked: 5 }
        );
        assert_eq!(trail.path(), [pos(2, 2)]);
        assert_eq!(trail.backtracked().len(), 5);
        assert_consistent(&trail);
    }

    #[test]
    fn test_collapse_in_the_middle_keeps_prefix() {
        let mut trail = Trail::new(pos(1, 1));
        for p in [pos(1, 2), pos(1, 3), pos(2, 3), pos(2, 2)] {
            trail.step_to(p);
        }
        assert_eq!(
            trail.step_to(pos(1, 2)),
            MoveKind::Collapsed { backtracked: 3 }
        );
        assert_eq!(trail.path(), [pos(1, 1), pos(1, 2)]);
        for p in [pos(1, 3), pos(2, 3), pos(2, 2)] {
            assert!(trail.is_backtracked(p));
        }
        assert_consistent(&trail);
    }

    #[test]
    fn test_reentering_unmarks_backtracked() {
        let mut trail = Trail::new(pos(1, 1));
        trail.step_to(pos(1, 2));
        trail.step_to(pos(1, 1));
        assert!(trail.is_backtracked(pos(1, 2)));

        assert_eq!(trail.step_to(pos(1, 2)), MoveKind::Reentered);
        assert!(!trail.is_backtracked(pos(1, 2)));
        assert_eq!(trail.path(), [pos(1, 1), pos(1, 2)]);
        assert_consistent(&trail);
    }

    #[test]
    fn test_reset() {
        let mut trail = Trail::new(pos(1, 1));
        trail.step_to(pos(1, 2));
        trail.step_to(pos(1, 3));
        trail.step_to(pos(1, 2));
        trail.reset(pos(3, 3));
        assert_eq!(trail, Trail::new(pos(3, 3)));
    }

    fn arb_walk() -> impl Strategy<Value = Vec<(usize, usize)>> {
        prop::collection::vec((0usize..6, 0usize..6), 0..64)
    }

    proptest! {
        #[test]
        fn test_collapse_property(steps in arb_walk()) {
            let start = pos(0, 0);
            let mut trail = Trail::new(start);
            for (row, col) in steps {
                let target = pos(row, col);
                if target == trail.last() {
                    continue;
                }
                let before = trail.path().to_vec();
                let backtracked_before = trail.backtracked().len();
                let kind = trail.step_to(target);
                match before.iter().position(|&p| p == target) {
                    Some(idx) => {
                        let len = before.len();
                        prop_assert_eq!(kind, MoveKind::Collapsed { backtracked: len - idx - 1 });
                        prop_assert_eq!(trail.path(), &before[..=idx]);
                        for p in &before[idx + 1..] {
                            prop_assert!(trail.is_backtracked(*p));
                        }
                    }
                    None => {
                        prop_assert_eq!(trail.path().len(), before.len() + 1);
                        prop_assert_eq!(trail.last(), target);
                        let expected = if kind.is_reentered() {
                            backtracked_before - 1
                        } else {
                            backtracked_before
                        };
                        prop_assert_eq!(trail.backtracked().len(), expected);
                    }
                }
                prop_assert_eq!(trail.path()[0], start);
                assert_consistent(&trail);
            }
        }
    }
}
