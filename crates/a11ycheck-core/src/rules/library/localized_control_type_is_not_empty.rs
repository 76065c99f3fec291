use crate::condition::Condition;
use crate::model::{Element, PropertyId};
use crate::property_conditions::bool_properties::IS_KEYBOARD_FOCUSABLE;
use crate::property_conditions::string_properties::LOCALIZED_CONTROL_TYPE;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

pub struct LocalizedControlTypeIsNotEmpty {
    info: RuleInfo,
    condition: LazyCondition,
}

impl LocalizedControlTypeIsNotEmpty {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::LocalizedControlTypeNotEmpty,
                description: "The LocalizedControlType property must not be empty.",
                how_to_fix: "Provide a LocalizedControlType that describes the element's role.",
                standard: A11yCriteriaId::ObjectInformation,
                property_id: Some(PropertyId::LOCALIZED_CONTROL_TYPE),
                error_code: EvaluationCode::Error,
            },
            condition: LazyCondition::new(),
        }
    }
}

impl Default for LocalizedControlTypeIsNotEmpty {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LocalizedControlTypeIsNotEmpty {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition
            .get_or_build(|| &*IS_KEYBOARD_FOCUSABLE & LOCALIZED_CONTROL_TYPE.not_null())
    }

    fn passes_test(&self, e: &Element) -> bool {
        LOCALIZED_CONTROL_TYPE.not_empty().matches(e)
    }
}
