//! Conditions on the control type property

use std::sync::LazyLock;

use crate::condition::Condition;
use crate::model::ControlTypeId;

/// Matches elements whose control type is `id`
pub fn control_type(id: ControlTypeId, name: &str) -> Condition {
    Condition::create(
        move |e| e.control_type() == Some(id),
        format!("control type is {name}"),
    )
}

pub static APP_BAR: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::APP_BAR, "AppBar"));
pub static BUTTON: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::BUTTON, "Button"));
pub static CHECK_BOX: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::CHECK_BOX, "CheckBox"));
pub static COMBO_BOX: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::COMBO_BOX, "ComboBox"));
pub static CUSTOM: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::CUSTOM, "Custom"));
pub static DOCUMENT: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::DOCUMENT, "Document"));
pub static EDIT: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::EDIT, "Edit"));
pub static GROUP: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::GROUP, "Group"));
pub static HYPERLINK: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::HYPERLINK, "Hyperlink"));
pub static IMAGE: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::IMAGE, "Image"));
pub static LIST: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::LIST, "List"));
pub static LIST_ITEM: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::LIST_ITEM, "ListItem"));
pub static MENU_ITEM: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::MENU_ITEM, "MenuItem"));
pub static PANE: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::PANE, "Pane"));
pub static PROGRESS_BAR: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::PROGRESS_BAR, "ProgressBar"));
pub static SCROLL_BAR: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::SCROLL_BAR, "ScrollBar"));
pub static SEPARATOR: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::SEPARATOR, "Separator"));
pub static SPLIT_BUTTON: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::SPLIT_BUTTON, "SplitButton"));
pub static TEXT: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::TEXT, "Text"));
pub static TREE_ITEM: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::TREE_ITEM, "TreeItem"));
pub static WINDOW: LazyLock<Condition> =
    LazyLock::new(|| control_type(ControlTypeId::WINDOW, "Window"));

/// Matches the desktop root window (a pane with no parent)
pub static DESKTOP: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.control_type() == Some(ControlTypeId::PANE) && e.parent().is_none(),
        "element is the desktop",
    )
});

pub static IS_NOT_DESKTOP: LazyLock<Condition> = LazyLock::new(|| !&*DESKTOP);
