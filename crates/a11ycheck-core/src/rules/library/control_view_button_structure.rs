use std::sync::LazyLock;

use crate::condition::Condition;
use crate::model::Element;
use crate::property_conditions::control_type::{BUTTON, IMAGE, TEXT};
use crate::property_conditions::relationships::{all_children, NO_CHILDREN};
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

/// In the control view a button holds nothing, or only images and text
static BUTTON_STRUCTURE: LazyLock<Condition> =
    LazyLock::new(|| &*NO_CHILDREN | all_children(&(&*IMAGE | &*TEXT)));

pub struct ControlViewButtonStructure {
    info: RuleInfo,
    condition: LazyCondition,
}

impl ControlViewButtonStructure {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::ControlViewButtonStructure,
                description: "The element has an unexpected structure for a Button in the control view.",
                how_to_fix: "Make sure the button's children are limited to images and text.",
                standard: A11yCriteriaId::InfoAndRelationships,
                property_id: None,
                error_code: EvaluationCode::NeedsReview,
            },
            condition: LazyCondition::new(),
        }
    }
}

impl Default for ControlViewButtonStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ControlViewButtonStructure {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(|| BUTTON.clone())
    }

    fn passes_test(&self, e: &Element) -> bool {
        BUTTON_STRUCTURE.matches(e)
    }
}
