//! Core types shared across a11ycheck facilities
//!
//! This crate provides foundational types used by the error handling,
//! logging, capture and evaluation layers:
//!
//! - **Correlation types**: ContextId, ScanId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{ContextId, ScanId};
