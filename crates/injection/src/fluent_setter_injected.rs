//! Fluent setter injection over an eager default.

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Like [`SetterInjected`](crate::SetterInjected), but `set_member` returns
/// the consumer so the call can be chained.
#[derive(Debug)]
pub struct FluentSetterInjected {
    member: Box<dyn Member>,
}

impl FluentSetterInjected {
    /// Create the consumer with a default member.
    #[must_use]
    pub fn new() -> Self {
        Self { member: Box::new(StandardMember::new()) }
    }

    /// Replace the current member and return `self` for chaining.
    pub fn set_member(&mut self, member: Box<dyn Member>) -> &mut Self {
        tracing::debug!(?member, "fluent_setter_injected.member.replaced");
        self.member = member;
        self
    }
}

impl Default for FluentSetterInjected {
    fn default() -> Self {
        Self::new()
    }
}

impl Consumer for FluentSetterInjected {
    fn wiring(&self) -> Wiring {
        Wiring::FluentSetter
    }

    fn resolution(&self) -> Resolution {
        Resolution::Resolved
    }

    fn call_member(&self) -> bool {
        self.member.call()
    }
}
