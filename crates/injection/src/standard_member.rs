// Rust guideline compliant 2026-02-23

//! Production adapter for the `Member` port.

use domain::Member;
use uuid::Uuid;

/// The member every consumer falls back to when none is supplied.
///
/// `call` always returns `true`. Each instance carries a random id so logs
/// show which instance a consumer resolved.
#[derive(Debug)]
pub struct StandardMember {
    id: Uuid,
}

impl StandardMember {
    /// Create a new member with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(member_id = %id, "standard_member.created");
        Self { id }
    }

    /// Instance id assigned at construction.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for StandardMember {
    fn default() -> Self {
        Self::new()
    }
}

impl Member for StandardMember {
    fn call(&self) -> bool {
        tracing::trace!(member_id = %self.id, "standard_member.call");
        true
    }
}
