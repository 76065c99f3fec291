use regex::Regex;

use crate::condition::Condition;
use crate::model::{Element, PropertyId};
use crate::property_conditions::bool_properties::IS_NOT_OFF_SCREEN;
use crate::property_conditions::bounding_rectangle::{
    self, COMPLETELY_OBSCURES_CONTAINER, OVERLAP_MARGIN,
};
use crate::property_conditions::control_type::{IS_NOT_DESKTOP, PANE, WINDOW};
use crate::property_conditions::int_properties::NATIVE_WINDOW_HANDLE;
use crate::property_conditions::patterns::{NOT_HORIZONTALLY_SCROLLABLE, NOT_VERTICALLY_SCROLLABLE};
use crate::property_conditions::relationships::{
    find_container_element, parent, HAS_CONTAINER, PARENT_EXISTS,
};
use crate::property_conditions::string_properties::CLASS_NAME;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

const CHROME_WIDGET_CLASS: &str = r"(?i)Chrome_WidgetWin_\d+$";

/// An element's bounds should sit inside its parent's, or failing that its
/// container's
pub struct BoundingRectangleContainedInParent {
    info: RuleInfo,
    condition: LazyCondition,
}

impl BoundingRectangleContainedInParent {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::BoundingRectangleContainedInParent,
                description: "An element's BoundingRectangle must be contained within its parent element.",
                how_to_fix: "Make sure the element's BoundingRectangle fits inside its parent or container.",
                standard: A11yCriteriaId::ObjectInformation,
                property_id: Some(PropertyId::BOUNDING_RECTANGLE),
                error_code: EvaluationCode::Warning,
            },
            condition: LazyCondition::new(),
        }
    }

    fn create_condition() -> Condition {
        // Windows may be any size; Chrome renders some panes as windows
        #[allow(clippy::expect_used)]
        let chrome_class = Regex::new(CHROME_WIDGET_CLASS).expect("valid chrome class regex");
        let chrome_pane = &*PANE
            & NATIVE_WINDOW_HANDLE.not_equals(0)
            & CLASS_NAME.matches_regex(chrome_class);

        !&*WINDOW
            & &*IS_NOT_OFF_SCREEN
            & &*bounding_rectangle::VALID
            & !chrome_pane
            & &*PARENT_EXISTS
            & parent(&IS_NOT_DESKTOP)
            & parent(&bounding_rectangle::VALID)
            & &*HAS_CONTAINER
            & !&*COMPLETELY_OBSCURES_CONTAINER
    }
}

impl Default for BoundingRectangleContainedInParent {
    fn default() -> Self {
        Self::new()
    }
}

/// Containment along each axis the container cannot scroll
fn is_contained(container: &Element, containee: &Element) -> bool {
    let outer = container.bounding_rectangle();
    let inner = containee.bounding_rectangle();

    if NOT_HORIZONTALLY_SCROLLABLE.matches(container)
        && (outer.left - OVERLAP_MARGIN > inner.left || outer.right() + OVERLAP_MARGIN < inner.right())
    {
        return false;
    }

    if NOT_VERTICALLY_SCROLLABLE.matches(container)
        && (outer.top - OVERLAP_MARGIN > inner.top || outer.bottom() + OVERLAP_MARGIN < inner.bottom())
    {
        return false;
    }

    true
}

impl Rule for BoundingRectangleContainedInParent {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(Self::create_condition)
    }

    /// # Panics
    ///
    /// Panics if `e` has no parent; the applicability condition requires one.
    fn passes_test(&self, e: &Element) -> bool {
        let Some(parent) = e.parent() else {
            panic!("element {} has no parent", e.id());
        };

        if is_contained(&parent, e) {
            return true;
        }

        find_container_element(e).is_some_and(|container| is_contained(&container, e))
    }
}
