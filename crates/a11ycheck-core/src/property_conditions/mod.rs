//! Shared condition vocabulary.
//!
//! Commonly used leaf and composite conditions, interned as statics so every
//! rule that needs "is a Button" references the same node.

pub mod bool_properties;
pub mod bounding_rectangle;
pub mod control_type;
pub mod element_groups;
pub mod framework;
pub mod int_properties;
pub mod landmarks;
pub mod patterns;
pub mod relationships;
pub mod string_properties;
