//! Groups of control types that share naming expectations

use std::sync::LazyLock;

use crate::condition::Condition;

use super::control_type::{
    BUTTON, CHECK_BOX, COMBO_BOX, CUSTOM, DOCUMENT, EDIT, GROUP, HYPERLINK, IMAGE, LIST,
    LIST_ITEM, MENU_ITEM, PANE, PROGRESS_BAR, SPLIT_BUTTON, TREE_ITEM, WINDOW,
};

fn any_of(conditions: &[&Condition]) -> Condition {
    conditions
        .iter()
        .skip(1)
        .fold(conditions[0].clone(), |acc, c| acc | *c)
}

/// Interactive or informative controls that must expose a name
pub static NAME_REQUIRED: LazyLock<Condition> = LazyLock::new(|| {
    any_of(&[
        &*BUTTON,
        &*CHECK_BOX,
        &*COMBO_BOX,
        &*EDIT,
        &*HYPERLINK,
        &*IMAGE,
        &*LIST_ITEM,
        &*MENU_ITEM,
        &*PROGRESS_BAR,
        &*SPLIT_BUTTON,
        &*TREE_ITEM,
        &*WINDOW,
    ])
});

/// Structural controls where a name helps but is not mandatory
pub static NAME_OPTIONAL: LazyLock<Condition> =
    LazyLock::new(|| any_of(&[&*CUSTOM, &*DOCUMENT, &*GROUP, &*LIST, &*PANE]));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ControlTypeId, ElementBuilder};

    #[test]
    fn test_groups_are_disjoint_for_common_types() {
        let button = ElementBuilder::new(1)
            .control_type(ControlTypeId::BUTTON)
            .build();
        let pane = ElementBuilder::new(2)
            .control_type(ControlTypeId::PANE)
            .build();

        assert!(NAME_REQUIRED.matches(&button));
        assert!(!NAME_OPTIONAL.matches(&button));
        assert!(NAME_OPTIONAL.matches(&pane));
        assert!(!NAME_REQUIRED.matches(&pane));
    }
}
