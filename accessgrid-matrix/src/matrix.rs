//! The permission matrix and its click-driven mutations.

use crate::aggregate::{aggregate_next, column_aggregate, leaf_next, master_aggregate};
use crate::error::{MatrixError, MatrixResult};
use crate::observer::{MatrixChange, MatrixObserver};
use accessgrid_types::{CellState, Column, Permission, PermissionCell};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// An ordered grid of resources × {read, write} leaf states.
///
/// Row count is fixed at construction. Only leaves are stored; aggregates are
/// recomputed on each query. Observers are attached to this instance only and
/// are not carried over by `clone`.
pub struct PermissionMatrix {
    resources: Vec<String>,
    cells: Vec<PermissionCell>,
    observers: Vec<Box<dyn MatrixObserver>>,
}

impl PermissionMatrix {
    /// Creates a matrix with every leaf set to `None`.
    pub fn new<I, S>(resources: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_cells(
            resources
                .into_iter()
                .map(|name| (name, PermissionCell::default())),
        )
    }

    /// Creates a matrix from resource names paired with initial leaf values.
    ///
    /// Names must be non-blank and unique.
    pub fn with_cells<I, S>(rows: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = (S, PermissionCell)>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut resources = Vec::new();
        let mut cells = Vec::new();

        for (name, cell) in rows {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(MatrixError::EmptyResourceName);
            }
            if !seen.insert(name.clone()) {
                return Err(MatrixError::DuplicateResource(name));
            }
            resources.push(name);
            cells.push(cell);
        }

        debug!(rows = resources.len(), "Permission matrix created");
        Ok(Self {
            resources,
            cells,
            observers: Vec::new(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Resource names in row order.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Leaf pairs in row order.
    #[must_use]
    pub fn cells(&self) -> &[PermissionCell] {
        &self.cells
    }

    /// `(resource, cell)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &PermissionCell)> {
        self.resources
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter())
    }

    /// Row index of the named resource.
    #[must_use]
    pub fn row_index(&self, resource: &str) -> Option<usize> {
        self.resources.iter().position(|r| r == resource)
    }

    pub fn cell(&self, row: usize) -> MatrixResult<&PermissionCell> {
        self.check_row(row)?;
        Ok(&self.cells[row])
    }

    pub fn cell_by_name(&self, resource: &str) -> MatrixResult<&PermissionCell> {
        let row = self.resolve(resource)?;
        Ok(&self.cells[row])
    }

    pub fn row_aggregate(&self, row: usize) -> MatrixResult<CellState> {
        Ok(self.cell(row)?.aggregate())
    }

    #[must_use]
    pub fn column_aggregate(&self, column: Column) -> CellState {
        column_aggregate(self, column)
    }

    #[must_use]
    pub fn master_aggregate(&self) -> CellState {
        master_aggregate(self)
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Cycles one leaf and returns its new value.
    pub fn toggle_leaf(&mut self, row: usize, column: Column) -> MatrixResult<Permission> {
        self.check_row(row)?;
        let cell = &mut self.cells[row];
        let value = leaf_next(cell.get(column));
        cell.set(column, value);

        debug!(row, column = %column, value = %value, "Leaf toggled");
        self.notify(&MatrixChange::Leaf { row, column, value });
        Ok(value)
    }

    pub fn toggle_leaf_by_name(
        &mut self,
        resource: &str,
        column: Column,
    ) -> MatrixResult<Permission> {
        let row = self.resolve(resource)?;
        self.toggle_leaf(row, column)
    }

    /// Broadcasts the row aggregate's next value to both leaves of `row`.
    pub fn toggle_row(&mut self, row: usize) -> MatrixResult<Permission> {
        self.check_row(row)?;
        let value = aggregate_next(self.cells[row].aggregate());
        self.cells[row] = PermissionCell::uniform(value);

        debug!(row, value = %value, "Row toggled");
        self.notify(&MatrixChange::Row { row, value });
        Ok(value)
    }

    pub fn toggle_row_by_name(&mut self, resource: &str) -> MatrixResult<Permission> {
        let row = self.resolve(resource)?;
        self.toggle_row(row)
    }

    /// Broadcasts the column aggregate's next value down `column`.
    ///
    /// The other column is left untouched.
    pub fn toggle_column(&mut self, column: Column) -> Permission {
        let value = aggregate_next(self.column_aggregate(column));
        for cell in &mut self.cells {
            cell.set(column, value);
        }

        debug!(column = %column, value = %value, "Column toggled");
        self.notify(&MatrixChange::Column { column, value });
        value
    }

    /// Collapses the whole matrix to the master aggregate's next value.
    pub fn toggle_master(&mut self) -> Permission {
        let value = aggregate_next(self.master_aggregate());
        self.cells.fill(PermissionCell::uniform(value));

        debug!(value = %value, rows = self.cells.len(), "Master toggled");
        self.notify(&MatrixChange::Master { value });
        value
    }

    /// Assigns one leaf directly, bypassing the click cycle.
    pub fn set_leaf(&mut self, row: usize, column: Column, value: Permission) -> MatrixResult<()> {
        self.check_row(row)?;
        self.cells[row].set(column, value);

        debug!(row, column = %column, value = %value, "Leaf set");
        self.notify(&MatrixChange::Set { row, column, value });
        Ok(())
    }

    /// Copies leaves from a matrix with the same resources.
    pub(crate) fn restore_from(&mut self, baseline: &PermissionMatrix) {
        debug_assert_eq!(self.resources, baseline.resources);
        self.cells.clone_from(&baseline.cells);
        debug!(rows = self.cells.len(), "Leaves restored");
        self.notify(&MatrixChange::Reset);
    }

    // ── Observers ────────────────────────────────────────────────

    /// Registers an observer called after every successful mutation.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: MatrixObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, change: &MatrixChange) {
        for observer in &self.observers {
            observer.on_change(self, change);
        }
    }

    fn check_row(&self, row: usize) -> MatrixResult<()> {
        if row < self.cells.len() {
            Ok(())
        } else {
            warn!(row, len = self.cells.len(), "Row index out of range");
            Err(MatrixError::RowOutOfRange {
                index: row,
                len: self.cells.len(),
            })
        }
    }

    fn resolve(&self, resource: &str) -> MatrixResult<usize> {
        self.row_index(resource).ok_or_else(|| {
            warn!(resource, "Unknown resource");
            MatrixError::UnknownResource(resource.to_string())
        })
    }
}

impl Clone for PermissionMatrix {
    fn clone(&self) -> Self {
        Self {
            resources: self.resources.clone(),
            cells: self.cells.clone(),
            observers: Vec::new(),
        }
    }
}

impl PartialEq for PermissionMatrix {
    fn eq(&self, other: &Self) -> bool {
        // Observers are not part of the matrix value
        self.resources == other.resources && self.cells == other.cells
    }
}

impl Eq for PermissionMatrix {}

impl fmt::Debug for PermissionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionMatrix")
            .field("resources", &self.resources)
            .field("cells", &self.cells)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_row_reports_length() {
        let m = PermissionMatrix::new(["A", "B"]).unwrap();
        match m.check_row(2) {
            Err(MatrixError::RowOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected RowOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn clone_drops_observers() {
        let mut m = PermissionMatrix::new(["A"]).unwrap();
        m.subscribe(|_: &PermissionMatrix, _: &MatrixChange| {});
        let copy = m.clone();
        assert_eq!(m.observer_count(), 1);
        assert_eq!(copy.observer_count(), 0);
        assert_eq!(m, copy);
    }
}
