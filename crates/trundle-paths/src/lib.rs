//! Run-constrained shortest paths on weighted grids.
//!
//! This crate finds minimum-cost routes between two cells of a
//! [`CostGrid`](trundle_core::CostGrid) under a movement-run constraint:
//! after turning, the route must continue straight for at least
//! `RunLimits::min` cells, may continue for at most `RunLimits::max`, and
//! never reverses.
//!
//! The search state is a `(cell, arrival direction)` pair — deliberately
//! *not* carrying a run-length counter. Each legal straight run between two
//! turn points becomes one pre-weighted edge, so the state space stays at
//! `rows × cols × 4` regardless of `RunLimits::max`, and an ordinary
//! priority-driven relaxation over those edges finds the optimum.
//!
//! All searches run through [`SearchRange`], which owns and reuses internal
//! tables so that repeated queries incur zero allocations after warm-up:
//!
//! ```
//! use trundle_core::{CostGrid, Point};
//! use trundle_paths::{RunLimits, SearchRange};
//!
//! let grid = CostGrid::parse("14999\n23111\n99991").unwrap();
//! let mut search = SearchRange::new(grid.bounds());
//! let cost = search
//!     .route_cost(
//!         &grid,
//!         Point::ZERO,
//!         Point::new(4, 2),
//!         RunLimits::new(0, 3).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(cost, 11);
//! ```

mod direction;
mod distance;
mod edges;
mod error;
mod limits;
mod runs;
mod searchrange;
mod traits;

pub use direction::Direction;
pub use distance::manhattan;
pub use edges::{RunEdge, push_run_edges};
pub use error::SearchError;
pub use limits::RunLimits;
pub use searchrange::{SearchRange, UNREACHABLE};
pub use traits::RunCost;
