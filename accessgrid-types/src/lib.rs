//! Core type definitions for the access grid.
//!
//! This crate defines the value types shared by the matrix engine and its
//! callers:
//! - [`Permission`] — the state a single leaf cell stores (none, allow, deny)
//! - [`CellState`] — the superset shown for aggregates, adding `Mixed`
//! - [`Column`] — the two leaf columns of every resource row (read, write)
//! - [`PermissionCell`] — one resource row's `(read, write)` pair
//!
//! Keeping `Permission` and `CellState` apart means a leaf can never be
//! assigned `Mixed`; the compiler rejects it.

mod cell;
mod column;
mod state;

pub use cell::PermissionCell;
pub use column::Column;
pub use state::{CellState, Permission};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing or decoding grid types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid permission: {0}")]
    InvalidPermission(String),

    #[error("invalid column: {0}")]
    InvalidColumn(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
