//! Open/commit/discard lifecycle of a role-editing form.

use crate::error::MatrixResult;
use crate::payload::MatrixPayload;
use crate::PermissionMatrix;
use tracing::info;

/// Holds the working matrix for one role alongside its last saved state.
///
/// Edits go through [`matrix_mut`](Self::matrix_mut). [`commit`](Self::commit)
/// makes the working leaves the new baseline and returns the payload to
/// persist; [`discard`](Self::discard) throws edits away.
#[derive(Debug)]
pub struct RoleAccessEditor {
    role: String,
    baseline: PermissionMatrix,
    working: PermissionMatrix,
}

impl RoleAccessEditor {
    /// Opens an editor over a previously saved payload.
    pub fn open(role: impl Into<String>, payload: &MatrixPayload) -> MatrixResult<Self> {
        let working = PermissionMatrix::from_payload(payload)?;
        Ok(Self::from_matrix(role, working))
    }

    /// Opens an editor for a role with no saved access yet.
    pub fn new_role<I, S>(role: impl Into<String>, resources: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let working = PermissionMatrix::new(resources)?;
        Ok(Self::from_matrix(role, working))
    }

    fn from_matrix(role: impl Into<String>, working: PermissionMatrix) -> Self {
        let role = role.into();
        info!(role = %role, rows = working.len(), "Role access editor opened");
        Self {
            role,
            baseline: working.clone(),
            working,
        }
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn matrix(&self) -> &PermissionMatrix {
        &self.working
    }

    pub fn matrix_mut(&mut self) -> &mut PermissionMatrix {
        &mut self.working
    }

    /// True when the working leaves differ from the last commit.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.working.cells() != self.baseline.cells()
    }

    /// Accepts the working leaves as the new baseline.
    pub fn commit(&mut self) -> MatrixPayload {
        self.baseline = self.working.clone();
        info!(role = %self.role, "Role access committed");
        self.baseline.to_payload()
    }

    /// Restores the last committed leaves. Observers stay registered.
    pub fn discard(&mut self) {
        if !self.is_dirty() {
            return;
        }
        self.working.restore_from(&self.baseline);
        info!(role = %self.role, "Role access edits discarded");
    }
}
