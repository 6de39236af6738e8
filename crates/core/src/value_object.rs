//! Value object trait: equality by value, not identity.
//!
//! Aging rules and policies are value objects: two rules with the same
//! condition and effect are interchangeable, wherever they came from.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an `AgingRule` is just its condition and effect)
/// - **Entity**: continuity across state changes (an `Item` keeps its name while
///   its sell-in and quality move day by day)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold {
///     days: i32,
/// }
///
/// impl ValueObject for Threshold {}
///
/// assert_eq!(Threshold { days: 10 }, Threshold { days: 10 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
