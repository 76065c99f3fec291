//! Conditions on supported interaction patterns

use std::sync::LazyLock;

use crate::condition::Condition;
use crate::model::PatternId;

/// Matches elements that support `pattern`
pub fn supports(pattern: PatternId, name: &str) -> Condition {
    Condition::create(
        move |e| e.supports_pattern(pattern),
        format!("supports the {name} pattern"),
    )
}

pub static EXPAND_COLLAPSE: LazyLock<Condition> =
    LazyLock::new(|| supports(PatternId::EXPAND_COLLAPSE, "ExpandCollapse"));
pub static INVOKE: LazyLock<Condition> =
    LazyLock::new(|| supports(PatternId::INVOKE, "Invoke"));
pub static SCROLL: LazyLock<Condition> =
    LazyLock::new(|| supports(PatternId::SCROLL, "Scroll"));
pub static TOGGLE: LazyLock<Condition> =
    LazyLock::new(|| supports(PatternId::TOGGLE, "Toggle"));

/// Either no scroll pattern or one that cannot scroll horizontally
pub static NOT_HORIZONTALLY_SCROLLABLE: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| !(e.supports_pattern(PatternId::SCROLL) && e.horizontally_scrollable()),
        "not horizontally scrollable",
    )
});

/// Either no scroll pattern or one that cannot scroll vertically
pub static NOT_VERTICALLY_SCROLLABLE: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| !(e.supports_pattern(PatternId::SCROLL) && e.vertically_scrollable()),
        "not vertically scrollable",
    )
});
