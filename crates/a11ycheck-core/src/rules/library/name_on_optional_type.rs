use crate::condition::Condition;
use crate::model::{Element, PropertyId};
use crate::property_conditions::element_groups::NAME_OPTIONAL;
use crate::property_conditions::string_properties::NAME;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

pub struct NameOnOptionalType {
    info: RuleInfo,
    condition: LazyCondition,
}

impl NameOnOptionalType {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::NameOnOptionalType,
                description: "An element of a type where Name is optional should still have a meaningful Name.",
                how_to_fix: "Consider giving the element a Name that describes its purpose.",
                standard: A11yCriteriaId::ObjectInformation,
                property_id: Some(PropertyId::NAME),
                error_code: EvaluationCode::NeedsReview,
            },
            condition: LazyCondition::new(),
        }
    }
}

impl Default for NameOnOptionalType {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NameOnOptionalType {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(|| NAME_OPTIONAL.clone())
    }

    fn passes_test(&self, e: &Element) -> bool {
        NAME.not_null_or_empty().matches(e)
    }
}
