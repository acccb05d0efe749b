//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one. `CurrencyAmount` is the canonical example in
/// this workspace: two amounts with the same value render identically.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
