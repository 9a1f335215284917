// Rust guideline compliant 2026-02-23

//! Shared domain types for the dependency-injection wiring set.
//!
//! Defines the two hexagonal ports, [`Member`] (the collaborator) and
//! [`Consumer`] (the object that delegates to it), plus the [`Wiring`] and
//! [`Resolution`] descriptors every consumer reports about itself.
//! All other crates depend on this one; no other crate is imported here.

use std::fmt;

/// Hexagonal port: the single collaborator a consumer delegates to.
///
/// Implemented by the production `StandardMember` and by test doubles.
/// Consumers depend exclusively on this trait -- never on a concrete adapter.
/// Object-safe so setters can swap in a collaborator of a different type.
pub trait Member: fmt::Debug {
    /// Perform the collaborator's only capability.
    fn call(&self) -> bool;
}

impl<M: Member + ?Sized> Member for Box<M> {
    fn call(&self) -> bool {
        (**self).call()
    }
}

/// Hexagonal port: an object holding exactly one [`Member`].
///
/// Every wiring variant implements this; they differ only in how the member
/// is acquired, never in what `call_member` returns.
pub trait Consumer: fmt::Debug {
    /// The wiring strategy this consumer demonstrates.
    fn wiring(&self) -> Wiring;

    /// Whether a member reference is currently held.
    fn resolution(&self) -> Resolution;

    /// Resolve the held member and return the result of its `call()` unchanged.
    fn call_member(&self) -> bool;
}

/// Whether a consumer currently holds a member reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No member yet; the next `call_member` constructs the default.
    Unresolved,
    /// A member is held, either supplied or constructed.
    Resolved,
}

impl Resolution {
    /// `true` when a member is held.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self == Self::Resolved
    }
}

/// The seven ways a consumer can acquire its member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wiring {
    /// Default member created unconditionally in the constructor.
    EagerDefault,
    /// Optional member in the constructor, default created eagerly otherwise.
    ConstructorInjection,
    /// Default created eagerly, replaceable through a setter.
    SetterInjection,
    /// As [`Wiring::SetterInjection`], with a setter returning the consumer.
    FluentSetter,
    /// Optional member in the constructor, default created on first use.
    ConstructorInjectionLazy,
    /// Member supplied through a setter, default created on first use.
    SetterInjectionLazy,
    /// As [`Wiring::SetterInjectionLazy`], with a setter returning the consumer.
    FluentSetterInjectionLazy,
}

impl Wiring {
    /// All wiring strategies in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::EagerDefault,
        Self::ConstructorInjection,
        Self::SetterInjection,
        Self::FluentSetter,
        Self::ConstructorInjectionLazy,
        Self::SetterInjectionLazy,
        Self::FluentSetterInjectionLazy,
    ];

    /// Position of this strategy in the set, `1..=7`.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::EagerDefault => 1,
            Self::ConstructorInjection => 2,
            Self::SetterInjection => 3,
            Self::FluentSetter => 4,
            Self::ConstructorInjectionLazy => 5,
            Self::SetterInjectionLazy => 6,
            Self::FluentSetterInjectionLazy => 7,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal). `None` outside `1..=7`.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.ordinal() == ordinal)
    }

    /// Kebab-case strategy name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EagerDefault => "eager-default",
            Self::ConstructorInjection => "constructor-injection",
            Self::SetterInjection => "setter-injection",
            Self::FluentSetter => "fluent-setter",
            Self::ConstructorInjectionLazy => "constructor-injection-with-lazy-loading-getter",
            Self::SetterInjectionLazy => "setter-injection-with-lazy-loading-getter",
            Self::FluentSetterInjectionLazy => "fluent-setter-injection-with-lazy-loading-getter",
        }
    }

    /// `true` when the default member is only built on first use.
    #[must_use]
    pub fn is_lazy(self) -> bool {
        matches!(
            self,
            Self::ConstructorInjectionLazy | Self::SetterInjectionLazy | Self::FluentSetterInjectionLazy
        )
    }

    /// `false` only for [`Wiring::EagerDefault`], which offers no way to substitute.
    #[must_use]
    pub fn accepts_substitute(self) -> bool {
        self != Self::EagerDefault
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.ordinal(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ------------------------------------------------------------------
    // Wiring
    // ------------------------------------------------------------------

    #[test]
    fn wiring_all_is_in_ordinal_order() {
        let ordinals: Vec<u8> = Wiring::ALL.iter().map(|w| w.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn wiring_from_ordinal() {
        for wiring in Wiring::ALL {
            assert_eq!(Wiring::from_ordinal(wiring.ordinal()), Some(wiring));
        }
        assert_eq!(Wiring::from_ordinal(0), None);
        assert_eq!(Wiring::from_ordinal(8), None);
    }

    #[test]
    fn wiring_names_are_distinct() {
        let mut names: Vec<&str> = Wiring::ALL.iter().map(|w| w.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Wiring::ALL.len());
    }

    #[test]
    fn wiring_display_pads_ordinal() {
        assert_eq!(Wiring::FluentSetter.to_string(), "04 fluent-setter");
        assert_eq!(
            Wiring::ConstructorInjectionLazy.to_string(),
            "05 constructor-injection-with-lazy-loading-getter"
        );
    }

    #[test]
    fn only_last_three_are_lazy() {
        let lazy: Vec<Wiring> = Wiring::ALL.into_iter().filter(|w| w.is_lazy()).collect();
        assert_eq!(
            lazy,
            vec![
                Wiring::ConstructorInjectionLazy,
                Wiring::SetterInjectionLazy,
                Wiring::FluentSetterInjectionLazy,
            ]
        );
    }

    #[test]
    fn eager_default_rejects_substitutes() {
        assert!(!Wiring::EagerDefault.accepts_substitute());
        assert!(Wiring::ALL[1..].iter().all(|w| w.accepts_substitute()));
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    #[test]
    fn resolution_variants() {
        assert!(Resolution::Resolved.is_resolved());
        assert!(!Resolution::Unresolved.is_resolved());
        assert_ne!(Resolution::Resolved, Resolution::Unresolved);
    }

    // ------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------

    #[derive(Debug)]
    struct CountingMember {
        result: bool,
        calls: Cell<u32>,
    }

    impl Member for CountingMember {
        fn call(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    /// A boxed member forwards to the boxed value.
    #[test]
    fn boxed_member_delegates() {
        let inner = CountingMember { result: false, calls: Cell::new(0) };
        let boxed: Box<CountingMember> = Box::new(inner);
        assert!(!boxed.call());
        assert!(!boxed.call());
        assert_eq!(boxed.calls.get(), 2);
    }

    /// Verify that a minimal `Consumer` implementation is usable as a trait object.
    #[test]
    fn consumer_trait_object_compiles_with_minimal_impl() {
        #[derive(Debug)]
        struct MinimalConsumer {
            member: Box<dyn Member>,
        }

        impl Consumer for MinimalConsumer {
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

        let consumer: Box<dyn Consumer> = Box::new(MinimalConsumer {
            member: Box::new(CountingMember { result: true, calls: Cell::new(0) }),
        });
        assert!(consumer.call_member());
        assert_eq!(consumer.wiring(), Wiring::EagerDefault);
        assert!(consumer.resolution().is_resolved());
    }
}
