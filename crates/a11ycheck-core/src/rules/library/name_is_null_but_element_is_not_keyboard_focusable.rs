use crate::condition::Condition;
use crate::model::{Element, PropertyId};
use crate::property_conditions::bool_properties::IS_NOT_KEYBOARD_FOCUSABLE;
use crate::property_conditions::bounding_rectangle::VALID;
use crate::property_conditions::control_type::PROGRESS_BAR;
use crate::property_conditions::element_groups::NAME_REQUIRED;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

/// Visible, unfocusable controls of a name-required type should still be named
pub struct NameIsNullButElementIsNotKeyboardFocusable {
    info: RuleInfo,
    condition: LazyCondition,
}

impl NameIsNullButElementIsNotKeyboardFocusable {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::NameNullButElementNotKeyboardFocusable,
                description: "The Name property is null on an element that is not keyboard focusable.",
                how_to_fix: "Provide a Name, or confirm the element is meant to be unreachable by keyboard.",
                standard: A11yCriteriaId::ObjectInformation,
                property_id: Some(PropertyId::NAME),
                error_code: EvaluationCode::NeedsReview,
            },
            condition: LazyCondition::new(),
        }
    }
}

impl Default for NameIsNullButElementIsNotKeyboardFocusable {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NameIsNullButElementIsNotKeyboardFocusable {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        // Progress bars are reported whether or not they take focus
        self.condition.get_or_build(|| {
            &*IS_NOT_KEYBOARD_FOCUSABLE & !&*PROGRESS_BAR & &*VALID & &*NAME_REQUIRED
        })
    }

    fn passes_test(&self, e: &Element) -> bool {
        e.name().is_some()
    }
}
