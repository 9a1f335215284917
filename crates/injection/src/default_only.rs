//! Eager default construction: the member is built in `new` and cannot be replaced.

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Consumer that always uses its own [`StandardMember`].
///
/// There is no injection point; tests can only observe the default.
#[derive(Debug)]
pub struct DefaultOnly {
    member: StandardMember,
}

impl DefaultOnly {
    /// Create the consumer together with its member.
    #[must_use]
    pub fn new() -> Self {
        Self { member: StandardMember::new() }
    }
}

impl Default for DefaultOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl Consumer for DefaultOnly {
    fn wiring(&self) -> Wiring {
        Wiring::EagerDefault
    }

    fn resolution(&self) -> Resolution {
        Resolution::Resolved
    }

    fn call_member(&self) -> bool {
        self.member.call()
    }
}
