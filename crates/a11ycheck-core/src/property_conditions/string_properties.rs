//! Conditions on string properties

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::condition::Condition;
use crate::model::Element;

type Accessor = Arc<dyn for<'a> Fn(&'a Element) -> Option<&'a str> + Send + Sync>;

/// A string-valued property that conditions can test
///
/// A property that was never captured is `null`; a captured property may
/// still be `empty` (zero length or whitespace only).
#[derive(Clone)]
pub struct StringProperty {
    accessor: Accessor,
    name: &'static str,
}

impl StringProperty {
    pub fn new<F>(accessor: F, name: &'static str) -> Self
    where
        F: for<'a> Fn(&'a Element) -> Option<&'a str> + Send + Sync + 'static,
    {
        Self {
            accessor: Arc::new(accessor),
            name,
        }
    }

    fn test<F>(&self, check: F, description: String) -> Condition
    where
        F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
    {
        let accessor = Arc::clone(&self.accessor);
        Condition::create(move |e| check(accessor(e)), description)
    }

    pub fn null(&self) -> Condition {
        self.test(|v| v.is_none(), format!("{} is null", self.name))
    }

    pub fn not_null(&self) -> Condition {
        !self.null()
    }

    /// Present but blank; a missing value is not empty
    pub fn empty(&self) -> Condition {
        self.test(
            |v| v.is_some_and(|s| s.trim().is_empty()),
            format!("{} is empty", self.name),
        )
    }

    pub fn not_empty(&self) -> Condition {
        self.test(
            |v| v.is_some_and(|s| !s.trim().is_empty()),
            format!("{} is not empty", self.name),
        )
    }

    pub fn null_or_empty(&self) -> Condition {
        self.test(
            |v| v.map_or(true, |s| s.trim().is_empty()),
            format!("{} is null or empty", self.name),
        )
    }

    pub fn not_null_or_empty(&self) -> Condition {
        !self.null_or_empty()
    }

    /// Exact, case-sensitive equality
    pub fn is(&self, expected: impl Into<String>) -> Condition {
        let expected = expected.into();
        let description = format!("{} is \"{}\"", self.name, expected);
        self.test(move |v| v == Some(expected.as_str()), description)
    }

    pub fn is_ignore_case(&self, expected: impl Into<String>) -> Condition {
        let expected = expected.into();
        let description = format!("{} is \"{}\" (ignoring case)", self.name, expected);
        self.test(
            move |v| v.is_some_and(|s| s.eq_ignore_ascii_case(&expected)),
            description,
        )
    }

    pub fn matches_regex(&self, regex: Regex) -> Condition {
        let description = format!("{} matches /{}/", self.name, regex.as_str());
        self.test(move |v| v.is_some_and(|s| regex.is_match(s)), description)
    }
}

pub static AUTOMATION_ID: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::automation_id, "AutomationId"));
pub static CLASS_NAME: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::class_name, "ClassName"));
pub static FRAMEWORK: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::framework_id, "Framework"));
pub static HELP_TEXT: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::help_text, "HelpText"));
pub static ITEM_STATUS: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::item_status, "ItemStatus"));
pub static LOCALIZED_CONTROL_TYPE: LazyLock<StringProperty> = LazyLock::new(|| {
    StringProperty::new(Element::localized_control_type, "LocalizedControlType")
});
pub static LOCALIZED_LANDMARK_TYPE: LazyLock<StringProperty> = LazyLock::new(|| {
    StringProperty::new(Element::localized_landmark_type, "LocalizedLandmarkType")
});
pub static NAME: LazyLock<StringProperty> =
    LazyLock::new(|| StringProperty::new(Element::name, "Name"));
