// Rust guideline compliant 2026-02-23

//! Constructor injection with a lazily built default.

use std::cell::OnceCell;

use domain::{Consumer, Member, Resolution, Wiring};

use crate::StandardMember;

/// Consumer that takes an optional member in its constructor and, when none
/// was given, builds a [`StandardMember`] on the first `call_member`.
///
/// The default is built at most once; later calls reuse it.
#[derive(Debug)]
pub struct LazyConstructorInjected {
    /// Empty until a member is supplied or first needed.
    member: OnceCell<Box<dyn Member>>,
}

impl LazyConstructorInjected {
    /// Create the consumer. `None` leaves it unresolved.
    #[must_use]
    pub fn new(member: Option<Box<dyn Member>>) -> Self {
        Self { member: member.map_or_else(OnceCell::new, OnceCell::from) }
    }

    /// Lazy accessor: resolve the member, building the default if needed.
    fn member(&self) -> &dyn Member {
        self.member
            .get_or_init(|| {
                tracing::debug!("lazy_constructor_injected.member.resolved");
                Box::new(StandardMember::new())
            })
            .as_ref()
    }
}

impl Default for LazyConstructorInjected {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Consumer for LazyConstructorInjected {
    fn wiring(&self) -> Wiring {
        Wiring::ConstructorInjectionLazy
    }

    fn resolution(&self) -> Resolution {
        if self.member.get().is_some() { Resolution::Resolved } else { Resolution::Unresolved }
    }

    fn call_member(&self) -> bool {
        self.member().call()
    }
}
