//! Library half of the `accessgrid` command-line tool.
//!
//! Parses grid click commands, applies them to a [`PermissionMatrix`],
//! renders the grid as text, and moves payloads to and from disk.

use accessgrid_matrix::{CellState, Column, Permission, PermissionMatrix};
use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// A row addressed by position or by resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    Index(usize),
    Name(String),
}

impl RowRef {
    fn resolve(&self, matrix: &PermissionMatrix) -> Result<usize> {
        match self {
            Self::Index(i) => Ok(*i),
            Self::Name(name) => matrix
                .row_index(name)
                .with_context(|| format!("unknown resource: {name}")),
        }
    }
}

impl FromStr for RowRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("empty row reference");
        }
        Ok(match s.parse::<usize>() {
            Ok(i) => Self::Index(i),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// One click on the grid.
///
/// Text forms: `leaf:<row>:<read|write>`, `row:<row>`, `col:<read|write>`,
/// `master`. `<row>` is an index or a resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Leaf(RowRef, Column),
    Row(RowRef),
    Column(Column),
    Master,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, rest) = s.split_once(':').unwrap_or((s, ""));
        match kind.trim().to_ascii_lowercase().as_str() {
            "leaf" => {
                let Some((row, column)) = rest.rsplit_once(':') else {
                    bail!("expected leaf:<row>:<column>, got {s:?}");
                };
                Ok(Self::Leaf(row.parse()?, column.parse()?))
            }
            "row" => Ok(Self::Row(rest.parse()?)),
            "col" | "column" => Ok(Self::Column(rest.parse()?)),
            "master" if rest.is_empty() => Ok(Self::Master),
            _ => bail!("unrecognized command: {s:?}"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(row, column) => write!(f, "leaf:{row}:{column}"),
            Self::Row(row) => write!(f, "row:{row}"),
            Self::Column(column) => write!(f, "col:{column}"),
            Self::Master => f.write_str("master"),
        }
    }
}

/// Applies one command and returns the leaf value it wrote.
pub fn apply(matrix: &mut PermissionMatrix, command: &Command) -> Result<Permission> {
    let value = match command {
        Command::Leaf(row, column) => {
            let row = row.resolve(matrix)?;
            matrix.toggle_leaf(row, *column)?
        }
        Command::Row(row) => {
            let row = row.resolve(matrix)?;
            matrix.toggle_row(row)?
        }
        Command::Column(column) => matrix.toggle_column(*column),
        Command::Master => matrix.toggle_master(),
    };
    Ok(value)
}

/// Loads the matrix at `path`, or builds a fresh one from `resources` if the
/// file does not exist. Returns whether a new matrix was created.
pub fn load_or_create(path: &Path, resources: &[String]) -> Result<(PermissionMatrix, bool)> {
    if path.exists() {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let matrix = PermissionMatrix::from_json(&json)
            .with_context(|| format!("invalid payload in {}", path.display()))?;
        debug!(path = %path.display(), rows = matrix.len(), "Loaded matrix");
        return Ok((matrix, false));
    }

    if resources.is_empty() {
        bail!(
            "{} does not exist; pass --resources to create it",
            path.display()
        );
    }
    let matrix = PermissionMatrix::new(resources.iter().cloned())?;
    info!(path = %path.display(), rows = matrix.len(), "Created new matrix");
    Ok((matrix, true))
}

/// Writes the matrix payload to `path`.
pub fn save(path: &Path, matrix: &PermissionMatrix) -> Result<()> {
    let json = matrix.to_json()?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "Saved matrix");
    Ok(())
}

/// Renders the grid with its aggregate row and column as plain text.
pub fn render_grid(matrix: &PermissionMatrix) -> String {
    const ALL_LABEL: &str = "(all)";

    let width = matrix
        .resources()
        .iter()
        .map(|r| r.chars().count())
        .chain([ALL_LABEL.len(), "Resource".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  all  read  write\n", "Resource"));
    push_row(
        &mut out,
        ALL_LABEL,
        width,
        [
            matrix.master_aggregate(),
            matrix.column_aggregate(Column::Read),
            matrix.column_aggregate(Column::Write),
        ],
    );
    for (name, cell) in matrix.rows() {
        push_row(
            &mut out,
            name,
            width,
            [cell.aggregate(), cell.read.into(), cell.write.into()],
        );
    }
    out
}

fn push_row(out: &mut String, label: &str, width: usize, states: [CellState; 3]) {
    let pad = width - label.chars().count();
    out.push_str(label);
    out.push_str(&" ".repeat(pad));
    for (state, col_width) in states.into_iter().zip([5, 6, 7]) {
        let mark = format!("[{}]", glyph(state));
        out.push_str(&format!("{mark:>col_width$}"));
    }
    out.push('\n');
}

fn glyph(state: CellState) -> &'static str {
    match state.glyph() {
        "" => " ",
        g => g,
    }
}
