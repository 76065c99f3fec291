use crate::condition::{Condition, FALSE};
use crate::model::Element;
use crate::property_conditions::landmarks::{ANY, BANNER};
use crate::property_conditions::relationships::any_ancestor;
use crate::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};

/// A banner landmark must not be nested inside another landmark
pub struct LandmarkBannerIsTopLevel {
    info: RuleInfo,
    condition: LazyCondition,
    inside_landmark: Condition,
}

impl LandmarkBannerIsTopLevel {
    pub fn new() -> Self {
        Self {
            info: RuleInfo {
                id: RuleId::LandmarkBannerIsTopLevel,
                description: "A banner landmark must not be a descendant of any other landmark.",
                how_to_fix: "Move the banner landmark so that no ancestor is a landmark.",
                standard: A11yCriteriaId::InfoAndRelationships,
                property_id: None,
                error_code: EvaluationCode::Error,
            },
            condition: LazyCondition::new(),
            inside_landmark: any_ancestor(&ANY, &FALSE),
        }
    }
}

impl Default for LandmarkBannerIsTopLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for LandmarkBannerIsTopLevel {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition.get_or_build(|| BANNER.clone())
    }

    fn passes_test(&self, e: &Element) -> bool {
        !self.inside_landmark.matches(e)
    }
}
