//! Aggregate computation and transition rules.
//!
//! All functions here are pure. Aggregates scan the covered leaves each time
//! they are asked; grids are small enough that no caching is kept.

use crate::PermissionMatrix;
use accessgrid_types::{CellState, Column, Permission, PermissionCell};

/// Next value of a clicked leaf: `None → Allow → Deny → None`.
#[must_use]
pub const fn leaf_next(current: Permission) -> Permission {
    current.next()
}

/// Value broadcast when an aggregate control is clicked.
///
/// `Mixed | None → Allow`, `Allow → Deny`, `Deny → None`.
#[must_use]
pub const fn aggregate_next(current: CellState) -> Permission {
    current.next_broadcast()
}

/// `read` when both columns agree, `Mixed` otherwise.
#[must_use]
pub fn row_aggregate(cell: &PermissionCell) -> CellState {
    cell.aggregate()
}

/// Common value of `column` across every row, or `Mixed`.
#[must_use]
pub fn column_aggregate(matrix: &PermissionMatrix, column: Column) -> CellState {
    CellState::uniform(matrix.cells().iter().map(|cell| cell.get(column)))
}

/// Common value of every leaf in both columns, or `Mixed`.
#[must_use]
pub fn master_aggregate(matrix: &PermissionMatrix) -> CellState {
    CellState::uniform(matrix.cells().iter().flat_map(|cell| cell.leaves()))
}
