//! Rule contract
//!
//! A rule is evaluated in two phases. Its applicability [`Condition`] decides
//! whether the rule means anything for an element; only then does the harness
//! ask [`Rule::passes_test`]. The condition is built on first use and cached
//! for the rule's lifetime.

pub mod library;

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use crate::condition::Condition;
use crate::model::{Element, PropertyId};

/// Stable rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RuleId {
    BoundingRectangleSizeReasonable,
    BoundingRectangleContainedInParent,
    NameNullButElementNotKeyboardFocusable,
    NameOnOptionalType,
    LocalizedControlTypeNotEmpty,
    LandmarkBannerIsTopLevel,
    ControlShouldSupportExpandCollapsePattern,
    ControlViewButtonStructure,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Accessibility success criteria a rule maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum A11yCriteriaId {
    InfoAndRelationships,
    Keyboard,
    ObjectInformation,
    AvailableActions,
}

impl A11yCriteriaId {
    /// Numbered success criterion
    pub fn criterion(&self) -> &'static str {
        match self {
            A11yCriteriaId::InfoAndRelationships => "1.3.1",
            A11yCriteriaId::Keyboard => "2.1.1",
            A11yCriteriaId::ObjectInformation | A11yCriteriaId::AvailableActions => "4.1.2",
        }
    }
}

/// Severity reported when a rule's test fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EvaluationCode {
    NeedsReview,
    Warning,
    Error,
}

/// Immutable rule metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleInfo {
    pub id: RuleId,
    pub description: &'static str,
    pub how_to_fix: &'static str,
    pub standard: A11yCriteriaId,
    pub property_id: Option<PropertyId>,
    pub error_code: EvaluationCode,
}

/// An accessibility check
pub trait Rule {
    fn info(&self) -> &RuleInfo;

    /// Applicability condition, built once and cached
    fn condition(&self) -> &Condition;

    /// Whether `e` satisfies the requirement
    ///
    /// Only meaningful for elements the applicability condition matched.
    fn passes_test(&self, e: &Element) -> bool;

    fn is_applicable(&self, e: &Element) -> bool {
        self.condition().matches(e)
    }
}

/// Lazily built, cached applicability condition
#[derive(Debug, Default)]
pub struct LazyCondition(OnceLock<Condition>);

impl LazyCondition {
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    pub fn get_or_build(&self, build: impl FnOnce() -> Condition) -> &Condition {
        self.0.get_or_init(build)
    }

    pub fn is_built(&self) -> bool {
        self.0.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_condition_builds_once() {
        let builds = AtomicUsize::new(0);
        let lazy = LazyCondition::new();
        assert!(!lazy.is_built());

        let first = lazy
            .get_or_build(|| {
                builds.fetch_add(1, Ordering::SeqCst);
                crate::condition::TRUE.clone()
            })
            .clone();
        let second = lazy.get_or_build(|| unreachable!("condition rebuilt"));

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(Condition::ptr_eq(&first, second));
    }

    #[test]
    fn test_criteria_numbers() {
        assert_eq!(A11yCriteriaId::InfoAndRelationships.criterion(), "1.3.1");
        assert_eq!(A11yCriteriaId::AvailableActions.criterion(), "4.1.2");
    }
}
