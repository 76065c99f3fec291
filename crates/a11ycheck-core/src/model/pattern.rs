//! Interaction pattern identifiers

use serde::{Deserialize, Serialize};

/// Platform interaction pattern identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub i32);

impl PatternId {
    pub const INVOKE: PatternId = PatternId(10000);
    pub const SELECTION: PatternId = PatternId(10001);
    pub const VALUE: PatternId = PatternId(10002);
    pub const RANGE_VALUE: PatternId = PatternId(10003);
    pub const SCROLL: PatternId = PatternId(10004);
    pub const EXPAND_COLLAPSE: PatternId = PatternId(10005);
    pub const GRID: PatternId = PatternId(10006);
    pub const GRID_ITEM: PatternId = PatternId(10007);
    pub const WINDOW: PatternId = PatternId(10009);
    pub const SELECTION_ITEM: PatternId = PatternId(10010);
    pub const TABLE: PatternId = PatternId(10012);
    pub const TEXT: PatternId = PatternId(10014);
    pub const TOGGLE: PatternId = PatternId(10015);
    pub const SCROLL_ITEM: PatternId = PatternId(10017);
}
