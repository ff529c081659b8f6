//! Tri-state permission matrix engine.
//!
//! A [`PermissionMatrix`] holds one `(read, write)` leaf pair per resource
//! row. Row, column and master values are never stored; they are recomputed
//! from the leaves on every query and read `Mixed` whenever the covered
//! leaves disagree.
//!
//! Mutations come from clicks on the grid:
//! - a leaf click cycles that leaf `None → Allow → Deny → None`
//! - a row, column or master click computes the aggregate's next value
//!   (`Mixed` cycles like `None`) and broadcasts it to every covered leaf
//!
//! Callers that need to react to edits register a [`MatrixObserver`].
//! [`RoleAccessEditor`] wraps a matrix in the open/commit/discard lifecycle
//! of a role-editing form, and [`MatrixPayload`] is the persisted shape.

mod aggregate;
mod editor;
mod error;
mod matrix;
mod observer;
mod payload;

pub use aggregate::{aggregate_next, column_aggregate, leaf_next, master_aggregate, row_aggregate};
pub use editor::RoleAccessEditor;
pub use error::{MatrixError, MatrixResult};
pub use matrix::PermissionMatrix;
pub use observer::{MatrixChange, MatrixObserver};
pub use payload::{MatrixPayload, ResourceEntry};

pub use accessgrid_types::{CellState, Column, Permission, PermissionCell};
