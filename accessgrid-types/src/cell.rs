use crate::{CellState, Column, Permission};
use serde::{Deserialize, Serialize};

/// The `(read, write)` leaf pair stored for one resource row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PermissionCell {
    pub read: Permission,
    pub write: Permission,
}

impl PermissionCell {
    #[must_use]
    pub const fn new(read: Permission, write: Permission) -> Self {
        Self { read, write }
    }

    /// A cell with both columns set to `value`.
    #[must_use]
    pub const fn uniform(value: Permission) -> Self {
        Self {
            read: value,
            write: value,
        }
    }

    #[must_use]
    pub const fn get(&self, column: Column) -> Permission {
        match column {
            Column::Read => self.read,
            Column::Write => self.write,
        }
    }

    pub fn set(&mut self, column: Column, value: Permission) {
        match column {
            Column::Read => self.read = value,
            Column::Write => self.write = value,
        }
    }

    /// Row aggregate: the shared value if read and write agree, `Mixed` otherwise.
    #[must_use]
    pub fn aggregate(&self) -> CellState {
        if self.read == self.write {
            self.read.into()
        } else {
            CellState::Mixed
        }
    }

    /// Leaf values in column order (read, then write).
    pub fn leaves(&self) -> impl Iterator<Item = Permission> + '_ {
        Column::ALL.into_iter().map(move |c| self.get(c))
    }
}
