//! Setter injection with a lazily built default.

use std::cell::OnceCell;

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Consumer created without a member. A member can be supplied with
/// `set_member`; otherwise a [`StandardMember`] is built on the first
/// `call_member` and reused afterwards.
#[derive(Debug, Default)]
pub struct LazySetterInjected {
    member: OnceCell<Box<dyn Member>>,
}

impl LazySetterInjected {
    /// Create an unresolved consumer.
    #[must_use]
    pub fn new() -> Self {
        Self { member: OnceCell::new() }
    }

    /// Supply the member. Overwrites whatever is held, including a default
    /// that has already been built.
    pub fn set_member(&mut self, member: Box<dyn Member>) {
        tracing::debug!(?member, "lazy_setter_injected.member.replaced");
        self.member = OnceCell::from(member);
    }

    fn member(&self) -> &dyn Member {
        self.member
            .get_or_init(|| {
                tracing::debug!("lazy_setter_injected.member.resolved");
                Box::new(StandardMember::new())
            })
            .as_ref()
    }
}

impl Consumer for LazySetterInjected {
    fn wiring(&self) -> Wiring {
        Wiring::SetterInjectionLazy
    }

    fn resolution(&self) -> Resolution {
        if self.member.get().is_some() { Resolution::Resolved } else { Resolution::Unresolved }
    }

    fn call_member(&self) -> bool {
        self.member().call()
    }
}
