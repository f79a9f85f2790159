//! **trundle-core** — core types for weighted-grid routing.
//!
//! This crate provides the foundational types used across the *trundle*
//! workspace: integer geometry primitives and the immutable cost grid that
//! the search engine routes over.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{CostGrid, GridError};
