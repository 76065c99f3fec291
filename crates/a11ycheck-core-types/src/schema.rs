//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SCAN_ID: &str = "scan_id";

// Entity identifiers
pub const FIELD_CONTEXT_ID: &str = "context_id";
pub const FIELD_ELEMENT_ID: &str = "element_id";
pub const FIELD_RULE_ID: &str = "rule_id";

// Capture parameters
pub const FIELD_CAPTURE_MODE: &str = "capture_mode";
pub const FIELD_TREE_VIEW_MODE: &str = "tree_view_mode";

// Collection sizes
pub const FIELD_ELEMENT_COUNT: &str = "element_count";
pub const FIELD_RULE_COUNT: &str = "rule_count";
pub const FIELD_UPPER_BOUND: &str = "upper_bound";
pub const FIELD_ATTEMPTS: &str = "attempts";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_TRUNCATED: &str = "truncated";
pub const EVENT_RELEASED: &str = "released";
