// Rust guideline compliant 2026-02-27

//! Stand-in adapter for the `Member` port.
//!
//! Returns a configured value from every `call` and logs each call via
//! `tracing::info!`.

use domain::Member;

/// `Member` adapter that always returns the value it was built with.
#[derive(Debug)]
pub struct FixedMember {
    result: bool,
}

impl FixedMember {
    /// Create a member whose `call` returns `result`.
    #[must_use]
    pub fn new(result: bool) -> Self {
        Self { result }
    }
}

impl Member for FixedMember {
    fn call(&self) -> bool {
        tracing::info!(result = self.result, "fixed_member.call");
        self.result
    }
}
