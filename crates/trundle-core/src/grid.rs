//! An immutable grid of per-cell traversal costs.
//!
//! [`CostGrid`] is constructed once — from rows, a flat buffer, or a digit
//! text block — validated up front, and read-only afterwards. Every cell
//! holds a non-negative `i32` cost; all rows have the same width.

use crate::geom::{Point, Range};
use std::fmt;

/// A rectangular matrix of non-negative traversal costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<i32>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Create a grid from a flat row-major buffer.
    ///
    /// The buffer length must equal `width × height` and every cost must be
    /// non-negative.
    pub fn new(width: i32, height: i32, costs: Vec<i32>) -> Result<Self, GridError> {
        let expected = (width.max(0) as usize) * (height.max(0) as usize);
        if width < 0 || height < 0 || costs.len() != expected {
            return Err(GridError::InconsistentSize {
                expected,
                found: costs.len(),
            });
        }
        let grid = Self {
            costs,
            width,
            height,
        };
        grid.check_costs()?;
        Ok(grid)
    }

    /// Create a grid from rows of costs. All rows must have the same width.
    pub fn from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<i32>>,
    {
        let mut costs = Vec::new();
        let mut width: i32 = -1;
        let mut height: i32 = 0;

        for row in rows {
            let w = row.len() as i32;
            if width < 0 {
                width = w;
            } else if w != width {
                return Err(GridError::InconsistentSize {
                    expected: width as usize,
                    found: row.len(),
                });
            }
            costs.extend(row);
            height += 1;
        }

        let grid = Self {
            costs,
            width: width.max(0),
            height,
        };
        grid.check_costs()?;
        Ok(grid)
    }

    /// Parse a grid from a block of digit characters, one cell per digit.
    ///
    /// Lines are separated by `'\n'` and must all have the same width.
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self {
                costs: Vec::new(),
                width: 0,
                height: 0,
            });
        }

        let mut costs = Vec::new();
        let mut x: i32 = 0;
        let mut y: i32 = 0;
        let mut w: i32 = -1;

        for ch in s.chars() {
            if ch == '\n' {
                if w < 0 {
                    w = x;
                } else if x != w {
                    return Err(GridError::InconsistentSize {
                        expected: w as usize,
                        found: x as usize,
                    });
                }
                x = 0;
                y += 1;
                continue;
            }
            match ch.to_digit(10) {
                Some(d) => costs.push(d as i32),
                None => {
                    return Err(GridError::InvalidDigit {
                        ch,
                        pos: Point::new(x, y),
                    });
                }
            }
            x += 1;
        }

        // Last line has no trailing newline.
        if w < 0 {
            w = x;
        } else if x != w {
            return Err(GridError::InconsistentSize {
                expected: w as usize,
                found: x as usize,
            });
        }

        Ok(Self {
            costs,
            width: w,
            height: y + 1,
        })
    }

    fn check_costs(&self) -> Result<(), GridError> {
        for (i, &c) in self.costs.iter().enumerate() {
            if c < 0 {
                return Err(GridError::NegativeCost {
                    value: c,
                    pos: self.point(i),
                });
            }
        }
        Ok(())
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range `[0,width) × [0,height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Cost of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<i32> {
        if !self.contains(p) {
            return None;
        }
        Some(self.costs[(p.y * self.width + p.x) as usize])
    }

    /// Cost of the cell at `p`.
    ///
    /// Fails with [`GridError::OutOfBounds`] if `p` lies outside
    /// `[0,width) × [0,height)`.
    #[inline]
    pub fn cost(&self, p: Point) -> Result<i32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds(p))
    }

    /// Row-major iterator over `(position, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }
}

/// Errors raised when constructing or reading a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lookup outside the grid dimensions.
    OutOfBounds(Point),
    /// Rows have inconsistent widths, or a flat buffer does not match the
    /// declared dimensions.
    InconsistentSize { expected: usize, found: usize },
    /// A character that is not a decimal digit was found while parsing.
    InvalidDigit { ch: char, pos: Point },
    /// A negative cost value.
    NegativeCost { value: i32, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "grid: coordinate {p} out of bounds"),
            Self::InconsistentSize { expected, found } => {
                write!(f, "grid: inconsistent size: expected {expected}, found {found}")
            }
            Self::InvalidDigit { ch, pos } => {
                write!(f, "grid: invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NegativeCost { value, pos } => {
                write!(f, "grid: negative cost {value} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: &str = "\
241
321
325";

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse(DIGITS).unwrap();
        assert_eq!(g.size(), Point::new(3, 3));
        assert_eq!(g.get(Point::new(0, 0)), Some(2));
        assert_eq!(g.get(Point::new(2, 0)), Some(1));
        assert_eq!(g.get(Point::new(1, 2)), Some(2));
    }

    #[test]
    fn parse_trims_outer_whitespace() {
        let g = CostGrid::parse("\n12\n34\n").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.get(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = CostGrid::parse("123\n12").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_digit() {
        let err = CostGrid::parse("12\n1x").unwrap_err();
        match err {
            GridError::InvalidDigit { ch, pos } => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_empty_is_zero_size() {
        let g = CostGrid::parse("   \n ").unwrap();
        assert_eq!(g.size(), Point::ZERO);
        assert!(g.get(Point::ZERO).is_none());
    }

    #[test]
    fn new_checks_buffer_length() {
        assert!(CostGrid::new(2, 2, vec![1, 2, 3, 4]).is_ok());
        let err = CostGrid::new(2, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn new_rejects_negative_cost() {
        let err = CostGrid::new(2, 2, vec![1, 2, -3, 4]).unwrap_err();
        match err {
            GridError::NegativeCost { value, pos } => {
                assert_eq!(value, -3);
                assert_eq!(pos, Point::new(0, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = CostGrid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn cost_reports_out_of_bounds() {
        let g = CostGrid::parse(DIGITS).unwrap();
        assert_eq!(g.cost(Point::new(1, 1)), Ok(2));
        assert_eq!(
            g.cost(Point::new(3, 0)),
            Err(GridError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            g.cost(Point::new(0, -1)),
            Err(GridError::OutOfBounds(Point::new(0, -1)))
        );
    }

    #[test]
    fn iter_is_row_major() {
        let g = CostGrid::parse("12\n34").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 1),
                (Point::new(1, 0), 2),
                (Point::new(0, 1), 3),
                (Point::new(1, 1), 4),
            ]
        );
    }
}
