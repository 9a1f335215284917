// Rust guideline compliant 2026-02-16

//! Adapters (secondary ports) for the demo binary.
//!
//! Each sub-module implements the `Member` port defined in the `domain` crate
//! and stands in for the production `StandardMember`.

pub mod fixed_member;
