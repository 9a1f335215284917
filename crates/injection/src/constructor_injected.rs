//! Constructor injection with an eager default fallback.

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Consumer that takes an optional member in its constructor.
///
/// When `None` is passed a [`StandardMember`] is built immediately.
#[derive(Debug)]
pub struct ConstructorInjected {
    member: Box<dyn Member>,
}

impl ConstructorInjected {
    /// Create the consumer, falling back to a [`StandardMember`] when `member` is `None`.
    #[must_use]
    pub fn new(member: Option<Box<dyn Member>>) -> Self {
        let member = member.unwrap_or_else(|| Box::new(StandardMember::new()));
        Self { member }
    }
}

impl Default for ConstructorInjected {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Consumer for ConstructorInjected {
    fn wiring(&self) -> Wiring {
        Wiring::ConstructorInjection
    }

    fn resolution(&self) -> Resolution {
        Resolution::Resolved
    }

    fn call_member(&self) -> bool {
        self.member.call()
    }
}
