//! Rule catalogue

mod bounding_rectangle_contained_in_parent;
mod bounding_rectangle_size_reasonable;
mod control_should_support_expand_collapse_pattern;
mod control_view_button_structure;
mod landmark_banner_is_top_level;
mod localized_control_type_is_not_empty;
mod name_is_null_but_element_is_not_keyboard_focusable;
mod name_on_optional_type;

pub use bounding_rectangle_contained_in_parent::BoundingRectangleContainedInParent;
pub use bounding_rectangle_size_reasonable::BoundingRectangleSizeReasonable;
pub use control_should_support_expand_collapse_pattern::ControlShouldSupportExpandCollapsePattern;
pub use control_view_button_structure::ControlViewButtonStructure;
pub use landmark_banner_is_top_level::LandmarkBannerIsTopLevel;
pub use localized_control_type_is_not_empty::LocalizedControlTypeIsNotEmpty;
pub use name_is_null_but_element_is_not_keyboard_focusable::NameIsNullButElementIsNotKeyboardFocusable;
pub use name_on_optional_type::NameOnOptionalType;

use super::Rule;

/// Every rule in the catalogue, in a stable order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(BoundingRectangleSizeReasonable::new()),
        Box::new(BoundingRectangleContainedInParent::new()),
        Box::new(NameIsNullButElementIsNotKeyboardFocusable::new()),
        Box::new(NameOnOptionalType::new()),
        Box::new(LocalizedControlTypeIsNotEmpty::new()),
        Box::new(LandmarkBannerIsTopLevel::new()),
        Box::new(ControlShouldSupportExpandCollapsePattern::new()),
        Box::new(ControlViewButtonStructure::new()),
    ]
}
