//! Conditions on the bounding rectangle property
//!
//! `Empty`, `Valid` and `CompletelyObscuresContainer` read the rectangle
//! through [`Element::bounding_rectangle`], which falls back to an empty
//! rectangle. Guard them with `NOT_NULL` and `CORRECT_DATA_FORMAT` when the
//! distinction matters.

use std::sync::LazyLock;

use crate::condition::Condition;
use crate::model::Element;

use super::relationships::find_container_element;

/// Smallest area (in square pixels) a visible element may reasonably have
pub const MINIMUM_AREA: f64 = 25.0;

/// Slack allowed when comparing rectangles, to absorb DPI rounding
pub const OVERLAP_MARGIN: f64 = 35.0;

const TELERIK_SPARKLINE_CONTEXT: &str = "<Property Name=\"DataContext\" \
     Value=\"Telerik.Windows.Controls.Sparklines.SparklineColumnDataPoint\" />";

pub static NULL: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.bounding_rectangle_values().is_none(),
        "BoundingRectangle is null",
    )
});

pub static NOT_NULL: LazyLock<Condition> = LazyLock::new(|| !&*NULL);

pub static EMPTY: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.bounding_rectangle().is_empty(),
        "BoundingRectangle is empty",
    )
});

pub static NOT_EMPTY: LazyLock<Condition> = LazyLock::new(|| !&*EMPTY);

pub static VALID: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.bounding_rectangle().area() >= MINIMUM_AREA,
        format!("BoundingRectangle has an area of at least {MINIMUM_AREA}"),
    )
});

pub static NOT_VALID: LazyLock<Condition> = LazyLock::new(|| !&*VALID);

pub static CORRECT_DATA_FORMAT: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.bounding_rectangle_values().is_some_and(|v| v.len() == 4),
        "BoundingRectangle has four values",
    )
});

pub static NOT_CORRECT_DATA_FORMAT: LazyLock<Condition> =
    LazyLock::new(|| !&*CORRECT_DATA_FORMAT);

/// The element covers its container entirely
///
/// Never matches an element without a container ancestor. Rules that need
/// to tell the two apart guard it with `HAS_CONTAINER`.
pub static COMPLETELY_OBSCURES_CONTAINER: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        element_completely_obscures_container,
        "BoundingRectangle completely obscures its container",
    )
});

pub static TELERIK_SPARKLINE_ITEM_STATUS_CONTEXT: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| e.item_status().is_some_and(|s| s.contains(TELERIK_SPARKLINE_CONTEXT)),
        "ItemStatus carries a Telerik sparkline data context",
    )
});

fn element_completely_obscures_container(e: &Element) -> bool {
    find_container_element(e).is_some_and(|container| {
        e.bounding_rectangle()
            .completely_obscures(&container.bounding_rectangle())
    })
}
