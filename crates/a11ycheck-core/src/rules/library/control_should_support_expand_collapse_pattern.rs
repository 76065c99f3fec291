use crate::condition::Condition;
use crate::model::Element;
use crate::property_conditions::control_type::{APP_BAR, COMBO_BOX, SPLIT_BUTTON, TREE_ITEM};
use crate::property_conditions::patterns::EXPAND_COLLAPSE;
use crate::property_conditions::relationships::{any_child, parent};
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

pub struct ControlShouldSupportExpandCollapsePattern {
    info: RuleInfo,
    condition: LazyCondition,
}

impl ControlShouldSupportExpandCollapsePattern {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::ControlShouldSupportExpandCollapsePattern,
                description: "The element is expected to support the ExpandCollapse pattern.",
                how_to_fix: "Implement the ExpandCollapse pattern on the element.",
                standard: A11yCriteriaId::AvailableActions,
                property_id: None,
                error_code: EvaluationCode::Error,
            },
            condition: LazyCondition::new(),
        }
    }

    fn create_condition() -> Condition {
        // Nested split buttons are the drop-down half of an outer one
        let eligible_split_button = &*SPLIT_BUTTON & !parent(&SPLIT_BUTTON);
        let parent_tree_item = &*TREE_ITEM & any_child(&TREE_ITEM);

        &*APP_BAR | &*COMBO_BOX | eligible_split_button | parent_tree_item
    }
}

impl Default for ControlShouldSupportExpandCollapsePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ControlShouldSupportExpandCollapsePattern {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(Self::create_condition)
    }

    fn passes_test(&self, e: &Element) -> bool {
        EXPAND_COLLAPSE.matches(e)
    }
}
