use crate::condition::Condition;
use crate::model::{Element, PropertyId};
use crate::property_conditions::bool_properties::{IS_KEYBOARD_FOCUSABLE, IS_NOT_OFF_SCREEN};
use crate::property_conditions::control_type::{SEPARATOR, TEXT};
use crate::property_conditions::framework::WPF;
use crate::property_conditions::relationships::CHILDREN_EXIST;
use crate::property_conditions::string_properties::NAME;
use crate::property_conditions::bounding_rectangle;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

/// On-screen elements should have a usable area
pub struct BoundingRectangleSizeReasonable {
    info: RuleInfo,
    condition: LazyCondition,
}

impl BoundingRectangleSizeReasonable {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::BoundingRectangleSizeReasonable,
                description: "An on-screen element must not have a null or undersized BoundingRectangle.",
                how_to_fix: "Set the element's BoundingRectangle to a size that reflects its visible area.",
                standard: A11yCriteriaId::ObjectInformation,
                property_id: Some(PropertyId::BOUNDING_RECTANGLE),
                error_code: EvaluationCode::Error,
            },
            condition: LazyCondition::new(),
        }
    }

    fn create_condition() -> Condition {
        // Unnamed, unfocusable static text with nothing under it is decoration
        let ignorable_text = (&*TEXT | &*SEPARATOR)
            & !&*IS_KEYBOARD_FOCUSABLE
            & NAME.null_or_empty()
            & !&*CHILDREN_EXIST;

        &*IS_NOT_OFF_SCREEN
            & &*bounding_rectangle::NOT_NULL
            & &*bounding_rectangle::CORRECT_DATA_FORMAT
            & !ignorable_text
            & !(&*WPF & &*bounding_rectangle::TELERIK_SPARKLINE_ITEM_STATUS_CONTEXT)
    }
}

impl Default for BoundingRectangleSizeReasonable {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BoundingRectangleSizeReasonable {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(Self::create_condition)
    }

    fn passes_test(&self, e: &Element) -> bool {
        bounding_rectangle::VALID.matches(e)
    }
}
