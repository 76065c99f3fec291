//! Capture and view selectors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which view of the platform tree a walker exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeViewMode {
    Raw,
    #[default]
    Control,
    Content,
}

/// How an element data context was populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataContextMode {
    /// Interactive inspection through the live walker
    Live,
    /// Full bounded scan through the test walker
    Test,
    /// Built from an already materialized tree
    Load,
}

/// Whether an element context was selected on a live or a loaded element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectType {
    Live,
    Loaded,
}

impl fmt::Display for TreeViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TreeViewMode::Raw => "raw",
            TreeViewMode::Control => "control",
            TreeViewMode::Content => "content",
        })
    }
}

impl fmt::Display for DataContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataContextMode::Live => "live",
            DataContextMode::Test => "test",
            DataContextMode::Load => "load",
        })
    }
}
