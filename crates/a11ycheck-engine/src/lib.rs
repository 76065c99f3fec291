//! a11ycheck engine - capture and evaluation orchestration
//!
//! Coordinates tree walkers, element contexts and the rule library:
//! - Capture coordinator producing bounded element snapshots
//! - Element contexts, data manager and custom property registrar
//! - Loaded-tree fixtures and TOML scan configuration
//! - Rule-execution harness producing scan reports

pub mod capture;
pub mod config;
pub mod context;
pub mod loaded;
pub mod modes;
pub mod platform;
pub mod registrar;
pub mod scan;
pub mod walker;

pub use capture::{need_new_data_context, CaptureCoordinator, MAX_ELEMENTS};
pub use config::ScanConfig;
pub use context::{ActionContext, DataManager, ElementContext, ElementDataContext};
pub use modes::{DataContextMode, SelectType, TreeViewMode};
pub use scan::{evaluate_rule, run_rules, RuleOutcome, RuleStatus, ScanReport};
