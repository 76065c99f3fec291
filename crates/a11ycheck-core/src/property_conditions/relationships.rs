//! Conditions that look beyond the element itself, at its parent, ancestors
//! or children

use std::rc::Rc;
use std::sync::LazyLock;

use crate::condition::Condition;
use crate::model::{ControlTypeId, Element};

/// Control types that act as a visual container for their descendants
const CONTAINER_TYPES: [ControlTypeId; 9] = [
    ControlTypeId::WINDOW,
    ControlTypeId::PANE,
    ControlTypeId::GROUP,
    ControlTypeId::DOCUMENT,
    ControlTypeId::LIST,
    ControlTypeId::TREE,
    ControlTypeId::TABLE,
    ControlTypeId::DATA_GRID,
    ControlTypeId::TAB,
];

/// Matches when the element has a parent and `c` matches it
pub fn parent(c: &Condition) -> Condition {
    let c = c.clone();
    let description = format!("parent matches ({c})");
    Condition::create(
        move |e| e.parent().is_some_and(|p| c.matches(&p)),
        description,
    )
}

pub static PARENT_EXISTS: LazyLock<Condition> =
    LazyLock::new(|| Condition::create(|e| e.parent().is_some(), "parent exists"));

pub static CHILDREN_EXIST: LazyLock<Condition> =
    LazyLock::new(|| Condition::create(|e| e.child_count() > 0, "children exist"));

pub static NO_CHILDREN: LazyLock<Condition> = LazyLock::new(|| !&*CHILDREN_EXIST);

/// Some ancestor is a container (see [`find_container_element`])
pub static HAS_CONTAINER: LazyLock<Condition> = LazyLock::new(|| {
    Condition::create(
        |e| find_container_element(e).is_some(),
        "has a container ancestor",
    )
});

/// Matches when some ancestor matches `c`
///
/// Ancestors are visited nearest first. The climb ends without a match at the
/// first ancestor that matches `stop` (and does not match `c`).
pub fn any_ancestor(c: &Condition, stop: &Condition) -> Condition {
    let c = c.clone();
    let stop = stop.clone();
    let description = format!("any ancestor matches ({c})");
    Condition::create(
        move |e| {
            let mut current = e.parent();
            while let Some(ancestor) = current {
                if c.matches(&ancestor) {
                    return true;
                }
                if stop.matches(&ancestor) {
                    return false;
                }
                current = ancestor.parent();
            }
            false
        },
        description,
    )
}

/// Matches when at least one direct child matches `c`
pub fn any_child(c: &Condition) -> Condition {
    let c = c.clone();
    let description = format!("any child matches ({c})");
    Condition::create(
        move |e| e.children().iter().any(|child| c.matches(child)),
        description,
    )
}

/// Matches when every direct child matches `c` (vacuously true for leaves)
pub fn all_children(c: &Condition) -> Condition {
    let c = c.clone();
    let description = format!("all children match ({c})");
    Condition::create(
        move |e| e.children().iter().all(|child| c.matches(child)),
        description,
    )
}

/// Nearest ancestor whose control type makes it a container
pub fn find_container_element(e: &Element) -> Option<Rc<Element>> {
    let mut current = e.parent();
    while let Some(ancestor) = current {
        if ancestor
            .control_type()
            .is_some_and(|ct| CONTAINER_TYPES.contains(&ct))
        {
            return Some(ancestor);
        }
        current = ancestor.parent();
    }
    None
}
