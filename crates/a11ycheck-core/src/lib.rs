//! a11ycheck core - accessibility evaluation kernel
//!
//! This crate provides the in-memory pieces the engine evaluates with:
//! - Element model with parent back references and sparse properties
//! - BoundedCounter admission governor
//! - Condition algebra and the shared condition vocabulary
//! - Rule contract and a representative rule library
//! - Error and logging facilities

pub use a11ycheck_core_types;

pub mod bounded_counter;
pub mod condition;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod property_conditions;
pub mod rules;

// Re-export commonly used types
pub use bounded_counter::{BoundedCounter, CounterState};
pub use condition::Condition;
pub use errors::{A11yError, ExError, ExErrorKind, Result};
pub use model::{Element, ElementBuilder, ElementId};
pub use rules::{EvaluationCode, Rule, RuleId, RuleInfo};
