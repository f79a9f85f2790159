//! The four axis-aligned movement directions and the turn relation.

use trundle_core::Point;

/// A cardinal movement direction.
///
/// After a straight run in some direction, the only legal continuations are
/// the two [`perpendiculars`](Direction::perpendiculars); the
/// [`opposite`](Direction::opposite) direction is never legal (no reversal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in slot order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit step vector for this direction.
    #[inline]
    pub const fn step(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
        }
    }

    /// The two legal turn directions after a run in this direction.
    #[inline]
    pub const fn perpendiculars(self) -> [Direction; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }

    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Stable index in `0..4`, used for per-direction table slots.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn steps_are_unit_axis_vectors() {
        for d in Direction::ALL {
            let s = d.step();
            assert_eq!(s.x.abs() + s.y.abs(), 1);
        }
    }

    #[test]
    fn perpendiculars_exclude_self_and_opposite() {
        for d in Direction::ALL {
            let [a, b] = d.perpendiculars();
            assert_ne!(a, d);
            assert_ne!(b, d);
            assert_ne!(a, d.opposite());
            assert_ne!(b, d.opposite());
            assert_ne!(a, b);
        }
    }

    #[test]
    fn opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.step() + d.opposite().step(), Point::ZERO);
        }
    }

    #[test]
    fn indices_are_distinct() {
        let idx: HashSet<_> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(idx.len(), 4);
        assert!(Direction::ALL.iter().all(|d| d.index() < 4));
    }
}
