// Rust guideline compliant 2026-02-23

//! Consumer components -- seven ways of wiring a consumer to its `Member`.
//!
//! Every consumer implements the `domain::Consumer` port and delegates
//! `call_member` to exactly one `domain::Member`. They differ only in how that
//! member is acquired:
//!
//! | Type | Member supplied via | Default built |
//! |------|---------------------|---------------|
//! | [`DefaultOnly`] | nothing | in `new` |
//! | [`ConstructorInjected`] | `new(Some(..))` | in `new` |
//! | [`SetterInjected`] | `set_member` | in `new` |
//! | [`FluentSetterInjected`] | `set_member` (chained) | in `new` |
//! | [`LazyConstructorInjected`] | `new(Some(..))` | on first call |
//! | [`LazySetterInjected`] | `set_member` | on first call |
//! | [`LazyFluentSetterInjected`] | `set_member` (chained) | on first call |
//!
//! The production collaborator is [`StandardMember`].

mod constructor_injected;
mod default_only;
mod fluent_setter_injected;
mod lazy_constructor_injected;
mod lazy_fluent_setter_injected;
mod lazy_setter_injected;
mod setter_injected;
mod standard_member;

#[cfg(test)]
mod testing;

pub use constructor_injected::ConstructorInjected;
pub use default_only::DefaultOnly;
pub use fluent_setter_injected::FluentSetterInjected;
pub use lazy_constructor_injected::LazyConstructorInjected;
pub use lazy_fluent_setter_injected::LazyFluentSetterInjected;
pub use lazy_setter_injected::LazySetterInjected;
pub use setter_injected::SetterInjected;
pub use standard_member::StandardMember;

use domain::{Consumer, Member, Wiring};

/// Build a consumer of the given wiring with its default member.
///
/// Lazy wirings come back `Unresolved`; eager ones are already `Resolved`.
#[must_use]
pub fn with_default(wiring: Wiring) -> Box<dyn Consumer> {
    match wiring {
        Wiring::EagerDefault => Box::new(DefaultOnly::new()),
        Wiring::ConstructorInjection => Box::new(ConstructorInjected::new(None)),
        Wiring::SetterInjection => Box::new(SetterInjected::new()),
        Wiring::FluentSetter => Box::new(FluentSetterInjected::new()),
        Wiring::ConstructorInjectionLazy => Box::new(LazyConstructorInjected::new(None)),
        Wiring::SetterInjectionLazy => Box::new(LazySetterInjected::new()),
        Wiring::FluentSetterInjectionLazy => Box::new(LazyFluentSetterInjected::new()),
    }
}

/// Build a consumer of the given wiring with `member` injected the way that
/// wiring accepts it (constructor, setter, or chained setter).
///
/// Returns `None` for [`Wiring::EagerDefault`], which has no injection point.
#[must_use]
pub fn with_substitute(wiring: Wiring, member: Box<dyn Member>) -> Option<Box<dyn Consumer>> {
    let consumer: Box<dyn Consumer> = match wiring {
        Wiring::EagerDefault => return None,
        Wiring::ConstructorInjection => Box::new(ConstructorInjected::new(Some(member))),
        Wiring::SetterInjection => {
            let mut consumer = SetterInjected::new();
            consumer.set_member(member);
            Box::new(consumer)
        }
        Wiring::FluentSetter => {
            let mut consumer = FluentSetterInjected::new();
            consumer.set_member(member);
            Box::new(consumer)
        }
        Wiring::ConstructorInjectionLazy => Box::new(LazyConstructorInjected::new(Some(member))),
        Wiring::SetterInjectionLazy => {
            let mut consumer = LazySetterInjected::new();
            consumer.set_member(member);
            Box::new(consumer)
        }
        Wiring::FluentSetterInjectionLazy => {
            let mut consumer = LazyFluentSetterInjected::new();
            consumer.set_member(member);
            Box::new(consumer)
        }
    };
    Some(consumer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedMember;
    use domain::Resolution;

    #[test]
    fn with_default_builds_matching_wiring() {
        for wiring in Wiring::ALL {
            let consumer = with_default(wiring);
            assert_eq!(consumer.wiring(), wiring);
        }
    }

    #[test]
    fn with_default_returns_true_for_every_wiring() {
        for wiring in Wiring::ALL {
            assert!(with_default(wiring).call_member(), "{wiring} should default to true");
        }
    }

    #[test]
    fn with_default_leaves_lazy_wirings_unresolved() {
        for wiring in Wiring::ALL {
            let expected = if wiring.is_lazy() { Resolution::Unresolved } else { Resolution::Resolved };
            assert_eq!(with_default(wiring).resolution(), expected, "{wiring}");
        }
    }

    #[test]
    fn with_substitute_delegates_to_substitute() {
        for wiring in Wiring::ALL.into_iter().filter(|w| w.accepts_substitute()) {
            let consumer = with_substitute(wiring, Box::new(FixedMember::new(false))).unwrap();
            assert_eq!(consumer.wiring(), wiring);
            assert_eq!(consumer.resolution(), Resolution::Resolved, "{wiring}");
            assert!(!consumer.call_member(), "{wiring} should use the substitute");
        }
    }

    #[test]
    fn with_substitute_rejects_eager_default() {
        assert!(with_substitute(Wiring::EagerDefault, Box::new(FixedMember::new(false))).is_none());
    }
}
