use trundle_core::{CostGrid, Point};

/// A source of per-cell entry costs for the route search.
///
/// The search prices a move by the cells it steps onto, so implementors
/// answer a single question: what does it cost to enter `p`? Returning
/// `None` marks `p` as impossible to enter; a straight run stops there.
/// Costs must be non-negative.
pub trait RunCost {
    /// Entry cost of stepping onto `p`, or `None` if `p` cannot be entered.
    fn cost(&self, p: Point) -> Option<i32>;
}

impl RunCost for CostGrid {
    #[inline]
    fn cost(&self, p: Point) -> Option<i32> {
        self.get(p)
    }
}
