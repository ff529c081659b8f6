//! Change notification for matrix owners.

use crate::PermissionMatrix;
use accessgrid_types::{Column, Permission};

/// What a successful mutation touched and the leaf value it wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixChange {
    /// A single leaf was cycled.
    Leaf {
        row: usize,
        column: Column,
        value: Permission,
    },
    /// A single leaf was assigned explicitly.
    Set {
        row: usize,
        column: Column,
        value: Permission,
    },
    /// Both leaves of one row received `value`.
    Row { row: usize, value: Permission },
    /// Every leaf in `column` received `value`.
    Column { column: Column, value: Permission },
    /// Every leaf in the matrix received `value`.
    Master { value: Permission },
    /// Leaves were restored from a saved baseline.
    Reset,
}

/// Receives the updated matrix after every successful mutation.
///
/// Observers run synchronously, in registration order, once the leaves have
/// been written. Failed mutations notify nobody.
pub trait MatrixObserver: Send + Sync {
    fn on_change(&self, matrix: &PermissionMatrix, change: &MatrixChange);
}

impl<F> MatrixObserver for F
where
    F: Fn(&PermissionMatrix, &MatrixChange) + Send + Sync,
{
    fn on_change(&self, matrix: &PermissionMatrix, change: &MatrixChange) {
        self(matrix, change);
    }
}
