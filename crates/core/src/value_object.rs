//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared field-by-field.
///
/// A rating of 4.9 over 120 reviews equals any other 4.9 over 120 reviews;
/// there is no identity to preserve across changes. To "modify" a value
/// object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
