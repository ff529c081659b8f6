//! Leaf and aggregate permission states.
//!
//! A leaf cycles `None → Allow → Deny → None`. An aggregate is computed from
//! the leaves it covers and is `Mixed` whenever they disagree. Clicking an
//! aggregate broadcasts one leaf value to everything it covers, treating
//! `Mixed` like `None`.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value stored in a leaf cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    None,
    Allow,
    Deny,
}

impl Permission {
    /// All leaf values in cycle order.
    pub const ALL: [Permission; 3] = [Permission::None, Permission::Allow, Permission::Deny];

    /// Next value when a leaf cell is clicked.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Allow,
            Self::Allow => Self::Deny,
            Self::Deny => Self::None,
        }
    }

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            _ => Err(Error::InvalidPermission(s.to_string())),
        }
    }
}

/// A computed row, column or master value.
///
/// Never stored in a leaf. `Mixed` means the covered leaves disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    None,
    Allow,
    Deny,
    Mixed,
}

impl CellState {
    /// Folds a set of leaf values into a single aggregate.
    ///
    /// Returns the common value when every leaf agrees, `Mixed` otherwise.
    /// An empty set aggregates to `None`.
    pub fn uniform<I>(leaves: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        let mut iter = leaves.into_iter();
        let Some(first) = iter.next() else {
            return Self::None;
        };
        if iter.all(|p| p == first) {
            first.into()
        } else {
            Self::Mixed
        }
    }

    /// The leaf value written to every covered cell when this aggregate is clicked.
    ///
    /// `Mixed` cycles the same way as `None`.
    #[must_use]
    pub const fn next_broadcast(self) -> Permission {
        match self {
            Self::None | Self::Mixed => Permission::Allow,
            Self::Allow => Permission::Deny,
            Self::Deny => Permission::None,
        }
    }

    /// Returns the leaf value this state represents, or `None` for `Mixed`.
    #[must_use]
    pub const fn as_permission(self) -> Option<Permission> {
        match self {
            Self::None => Some(Permission::None),
            Self::Allow => Some(Permission::Allow),
            Self::Deny => Some(Permission::Deny),
            Self::Mixed => None,
        }
    }

    #[must_use]
    pub const fn is_mixed(self) -> bool {
        matches!(self, Self::Mixed)
    }

    /// Display glyph for a grid cell.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Allow => "✓",
            Self::Deny => "✕",
            Self::Mixed => "?",
        }
    }

    /// Style class attached to a rendered grid cell.
    #[must_use]
    pub const fn style_class(self) -> &'static str {
        match self {
            Self::None => "perm-none",
            Self::Allow => "perm-allow",
            Self::Deny => "perm-deny",
            Self::Mixed => "perm-mixed",
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Mixed => "mixed",
        }
    }
}

impl From<Permission> for CellState {
    fn from(p: Permission) -> Self {
        match p {
            Permission::None => Self::None,
            Permission::Allow => Self::Allow,
            Permission::Deny => Self::Deny,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
