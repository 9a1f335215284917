//! Setter injection over an eager default.

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Consumer that builds a [`StandardMember`] in `new` and lets callers replace it.
#[derive(Debug)]
pub struct SetterInjected {
    member: Box<dyn Member>,
}

impl SetterInjected {
    /// Create the consumer with a default member.
    #[must_use]
    pub fn new() -> Self {
        Self { member: Box::new(StandardMember::new()) }
    }

    /// Replace the current member.
    pub fn set_member(&mut self, member: Box<dyn Member>) {
        tracing::debug!(?member, "setter_injected.member.replaced");
        self.member = member;
    }
}

impl Default for SetterInjected {
    fn default() -> Self {
        Self::new()
    }
}

impl Consumer for SetterInjected {
    fn wiring(&self) -> Wiring {
        Wiring::SetterInjection
    }

    fn resolution(&self) -> Resolution {
        Resolution::Resolved
    }

    fn call_member(&self) -> bool {
        self.member.call()
    }
}
