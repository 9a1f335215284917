//! Fluent setter injection with a lazily built default.

use std::cell::OnceCell;

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Like [`LazySetterInjected`](crate::LazySetterInjected), but `set_member`
/// returns the consumer so `call_member` can follow in the same expression.
#[derive(Debug, Default)]
pub struct LazyFluentSetterInjected {
    member: OnceCell<Box<dyn Member>>,
}

impl LazyFluentSetterInjected {
    /// Create an unresolved consumer.
    #[must_use]
    pub fn new() -> Self {
        Self { member: OnceCell::new() }
    }

    /// Supply the member and return `self` for chaining.
    pub fn set_member(&mut self, member: Box<dyn Member>) -> &mut Self {
        tracing::debug!(?member, "lazy_fluent_setter_injected.member.replaced");
        self.member = OnceCell::from(member);
        self
    }

    fn member(&self) -> &dyn Member {
        self.member
            .get_or_init(|| {
                tracing::debug!("lazy_fluent_setter_injected.member.resolved");
                Box::new(StandardMember::new())
            })
            .as_ref()
    }
}

impl Consumer for LazyFluentSetterInjected {
    fn wiring(&self) -> Wiring {
        Wiring::FluentSetterInjectionLazy
    }

    fn resolution(&self) -> Resolution {
        if self.member.get().is_some() { Resolution::Resolved } else { Resolution::Unresolved }
    }

    fn call_member(&self) -> bool {
        self.member().call()
    }
}
