//! Conditions on landmark roles

use std::sync::LazyLock;

use crate::condition::Condition;

use super::string_properties::LOCALIZED_LANDMARK_TYPE;

pub const CUSTOM_LANDMARK: i64 = 80000;
pub const FORM_LANDMARK: i64 = 80001;
pub const MAIN_LANDMARK: i64 = 80002;
pub const NAVIGATION_LANDMARK: i64 = 80003;
pub const SEARCH_LANDMARK: i64 = 80004;

/// Matches elements with the given landmark type
pub fn landmark_type(id: i64, name: &str) -> Condition {
    Condition::create(
        move |e| e.landmark_type() == Some(id),
        format!("landmark type is {name}"),
    )
}

pub static ANY: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.landmark_type().is_some_and(|t| t != 0),
        "element is a landmark",
    )
});

pub static CUSTOM: LazyLock<Condition> =
    LazyLock::new(|| landmark_type(CUSTOM_LANDMARK, "Custom"));
pub static MAIN: LazyLock<Condition> = LazyLock::new(|| landmark_type(MAIN_LANDMARK, "Main"));

/// A custom landmark localized as "banner"
pub static BANNER: LazyLock<Condition> =
    LazyLock::new(|| &*CUSTOM & LOCALIZED_LANDMARK_TYPE.is_ignore_case("banner"));
