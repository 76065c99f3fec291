use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use a11ycheck_core::model::{ControlTypeId, Element, ElementBuilder, Rect};
use a11ycheck_core::Condition;

/// A leaf condition that counts how often it is evaluated
#[allow(dead_code)]
pub fn counting_condition(result: bool, label: &str) -> (Condition, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let condition = Condition::create(
        move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            result
        },
        label.to_string(),
    );
    (condition, calls)
}

/// A visible element of the given control type
#[allow(dead_code)]
pub fn visible(id: i32, control_type: ControlTypeId) -> ElementBuilder {
    ElementBuilder::new(id)
        .control_type(control_type)
        .bounding_rectangle(Rect::new(10.0, 10.0, 100.0, 30.0))
}

/// Link `children` under `parent` in order and return the parent
#[allow(dead_code)]
pub fn with_children(parent: Rc<Element>, children: &[Rc<Element>]) -> Rc<Element> {
    for child in children {
        Element::append_child(&parent, Rc::clone(child));
    }
    parent
}
