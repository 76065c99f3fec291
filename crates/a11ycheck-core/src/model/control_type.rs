//! Control type identifiers

use serde::{Deserialize, Serialize};

/// Platform control type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlTypeId(pub i32);

impl ControlTypeId {
    pub const BUTTON: ControlTypeId = ControlTypeId(50000);
    pub const CALENDAR: ControlTypeId = ControlTypeId(50001);
    pub const CHECK_BOX: ControlTypeId = ControlTypeId(50002);
    pub const COMBO_BOX: ControlTypeId = ControlTypeId(50003);
    pub const EDIT: ControlTypeId = ControlTypeId(50004);
    pub const HYPERLINK: ControlTypeId = ControlTypeId(50005);
    pub const IMAGE: ControlTypeId = ControlTypeId(50006);
    pub const LIST_ITEM: ControlTypeId = ControlTypeId(50007);
    pub const LIST: ControlTypeId = ControlTypeId(50008);
    pub const MENU: ControlTypeId = ControlTypeId(50009);
    pub const MENU_BAR: ControlTypeId = ControlTypeId(50010);
    pub const MENU_ITEM: ControlTypeId = ControlTypeId(50011);
    pub const PROGRESS_BAR: ControlTypeId = ControlTypeId(50012);
    pub const RADIO_BUTTON: ControlTypeId = ControlTypeId(50013);
    pub const SCROLL_BAR: ControlTypeId = ControlTypeId(50014);
    pub const SLIDER: ControlTypeId = ControlTypeId(50015);
    pub const SPINNER: ControlTypeId = ControlTypeId(50016);
    pub const STATUS_BAR: ControlTypeId = ControlTypeId(50017);
    pub const TAB: ControlTypeId = ControlTypeId(50018);
    pub const TAB_ITEM: ControlTypeId = ControlTypeId(50019);
    pub const TEXT: ControlTypeId = ControlTypeId(50020);
    pub const TOOL_BAR: ControlTypeId = ControlTypeId(50021);
    pub const TOOL_TIP: ControlTypeId = ControlTypeId(50022);
    pub const TREE: ControlTypeId = ControlTypeId(50023);
    pub const TREE_ITEM: ControlTypeId = ControlTypeId(50024);
    pub const CUSTOM: ControlTypeId = ControlTypeId(50025);
    pub const GROUP: ControlTypeId = ControlTypeId(50026);
    pub const THUMB: ControlTypeId = ControlTypeId(50027);
    pub const DATA_GRID: ControlTypeId = ControlTypeId(50028);
    pub const DATA_ITEM: ControlTypeId = ControlTypeId(50029);
    pub const DOCUMENT: ControlTypeId = ControlTypeId(50030);
    pub const SPLIT_BUTTON: ControlTypeId = ControlTypeId(50031);
    pub const WINDOW: ControlTypeId = ControlTypeId(50032);
    pub const PANE: ControlTypeId = ControlTypeId(50033);
    pub const HEADER: ControlTypeId = ControlTypeId(50034);
    pub const HEADER_ITEM: ControlTypeId = ControlTypeId(50035);
    pub const TABLE: ControlTypeId = ControlTypeId(50036);
    pub const TITLE_BAR: ControlTypeId = ControlTypeId(50037);
    pub const SEPARATOR: ControlTypeId = ControlTypeId(50038);
    pub const SEMANTIC_ZOOM: ControlTypeId = ControlTypeId(50039);
    pub const APP_BAR: ControlTypeId = ControlTypeId(50040);
}

impl std::fmt::Display for ControlTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
