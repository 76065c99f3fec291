use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use super::control_type::ControlTypeId;
use super::pattern::PatternId;
use super::property::{PropertyId, PropertyValue};
use super::rect::Rect;

/// Process-unique element identity assigned by the tree producer
pub type ElementId = i32;

/// A node in a captured accessibility tree
///
/// Elements are shared through `Rc`. A parent owns its children; each child
/// holds a non-owning `Weak` back reference, so dropping the root releases the
/// whole subtree deterministically.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    parent: RefCell<Weak<Element>>,
    children: RefCell<Vec<Rc<Element>>>,
    properties: HashMap<PropertyId, PropertyValue>,
    patterns: BTreeSet<PatternId>,
    process_name: Option<String>,
    live: bool,
}

impl Element {
    /// Link `child` under `parent`, replacing any previous parent link
    pub fn append_child(parent: &Rc<Element>, child: Rc<Element>) {
        *child.parent.borrow_mut() = Rc::downgrade(parent);
        parent.children.borrow_mut().push(child);
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The parent, if it is still alive
    pub fn parent(&self) -> Option<Rc<Element>> {
        self.parent.borrow().upgrade()
    }

    /// Snapshot of the ordered child list
    pub fn children(&self) -> Vec<Rc<Element>> {
        self.children.borrow().clone()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    /// Drop every child link, releasing subtrees no one else holds
    pub fn clear_children(&self) {
        self.children.borrow_mut().clear();
    }

    /// Climb parent links to the top of the tree
    pub fn origin_ancestor(self: &Rc<Self>) -> Rc<Element> {
        let mut current = Rc::clone(self);
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Bound to a platform object (as opposed to materialized from a file)
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    pub fn property(&self, id: PropertyId) -> Option<&PropertyValue> {
        self.properties.get(&id)
    }

    pub fn has_property(&self, id: PropertyId) -> bool {
        self.properties.contains_key(&id)
    }

    pub fn supports_pattern(&self, pattern: PatternId) -> bool {
        self.patterns.contains(&pattern)
    }

    pub fn patterns(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.patterns.iter().copied()
    }

    fn string_property(&self, id: PropertyId) -> Option<&str> {
        self.property(id).and_then(PropertyValue::as_str)
    }

    fn bool_property(&self, id: PropertyId) -> bool {
        self.property(id)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(false)
    }

    pub fn name(&self) -> Option<&str> {
        self.string_property(PropertyId::NAME)
    }

    pub fn control_type(&self) -> Option<ControlTypeId> {
        self.property(PropertyId::CONTROL_TYPE)
            .and_then(PropertyValue::as_int)
            .and_then(|v| i32::try_from(v).ok())
            .map(ControlTypeId)
    }

    pub fn localized_control_type(&self) -> Option<&str> {
        self.string_property(PropertyId::LOCALIZED_CONTROL_TYPE)
    }

    pub fn automation_id(&self) -> Option<&str> {
        self.string_property(PropertyId::AUTOMATION_ID)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.string_property(PropertyId::CLASS_NAME)
    }

    pub fn help_text(&self) -> Option<&str> {
        self.string_property(PropertyId::HELP_TEXT)
    }

    pub fn framework_id(&self) -> Option<&str> {
        self.string_property(PropertyId::FRAMEWORK_ID)
    }

    pub fn item_status(&self) -> Option<&str> {
        self.string_property(PropertyId::ITEM_STATUS)
    }

    pub fn landmark_type(&self) -> Option<i64> {
        self.property(PropertyId::LANDMARK_TYPE)
            .and_then(PropertyValue::as_int)
    }

    pub fn localized_landmark_type(&self) -> Option<&str> {
        self.string_property(PropertyId::LOCALIZED_LANDMARK_TYPE)
    }

    pub fn is_keyboard_focusable(&self) -> bool {
        self.bool_property(PropertyId::IS_KEYBOARD_FOCUSABLE)
    }

    pub fn is_off_screen(&self) -> bool {
        self.bool_property(PropertyId::IS_OFF_SCREEN)
    }

    pub fn native_window_handle(&self) -> i64 {
        self.property(PropertyId::NATIVE_WINDOW_HANDLE)
            .and_then(PropertyValue::as_int)
            .unwrap_or(0)
    }

    pub fn horizontally_scrollable(&self) -> bool {
        self.bool_property(PropertyId::SCROLL_HORIZONTALLY_SCROLLABLE)
    }

    pub fn vertically_scrollable(&self) -> bool {
        self.bool_property(PropertyId::SCROLL_VERTICALLY_SCROLLABLE)
    }

    /// Raw bounding rectangle values, if the property was captured
    pub fn bounding_rectangle_values(&self) -> Option<&[f64]> {
        self.property(PropertyId::BOUNDING_RECTANGLE)
            .and_then(PropertyValue::as_doubles)
    }

    /// Bounding rectangle, or [`Rect::EMPTY`] when absent or malformed
    pub fn bounding_rectangle(&self) -> Rect {
        self.bounding_rectangle_values()
            .and_then(Rect::from_doubles)
            .unwrap_or(Rect::EMPTY)
    }
}

/// Builder for [`Element`] values
#[derive(Debug, Default)]
pub struct ElementBuilder {
    id: ElementId,
    properties: HashMap<PropertyId, PropertyValue>,
    patterns: BTreeSet<PatternId>,
    process_name: Option<String>,
    live: bool,
}

impl ElementBuilder {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn property(mut self, id: PropertyId, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(id, value.into());
        self
    }

    pub fn control_type(self, control_type: ControlTypeId) -> Self {
        self.property(PropertyId::CONTROL_TYPE, control_type.0)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.property(PropertyId::NAME, name.into())
    }

    pub fn bounding_rectangle(self, rect: Rect) -> Self {
        self.property(
            PropertyId::BOUNDING_RECTANGLE,
            vec![rect.left, rect.top, rect.width, rect.height],
        )
    }

    pub fn keyboard_focusable(self, focusable: bool) -> Self {
        self.property(PropertyId::IS_KEYBOARD_FOCUSABLE, focusable)
    }

    pub fn off_screen(self, off_screen: bool) -> Self {
        self.property(PropertyId::IS_OFF_SCREEN, off_screen)
    }

    pub fn framework(self, framework: impl Into<String>) -> Self {
        self.property(PropertyId::FRAMEWORK_ID, framework.into())
    }

    pub fn pattern(mut self, pattern: PatternId) -> Self {
        self.patterns.insert(pattern);
        self
    }

    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = Some(name.into());
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    pub fn build(self) -> Rc<Element> {
        Rc::new(Element {
            id: self.id,
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            properties: self.properties,
            patterns: self.patterns,
            process_name: self.process_name,
            live: self.live,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_child_sets_back_reference() {
        let parent = ElementBuilder::new(1).build();
        let child = ElementBuilder::new(2).build();

        Element::append_child(&parent, Rc::clone(&child));

        assert_eq!(child.parent().map(|p| p.id()), Some(1));
        assert_eq!(parent.child_count(), 1);
        assert_eq!(parent.children()[0].id(), 2);
    }

    #[test]
    fn test_parent_link_does_not_keep_parent_alive() {
        let child = ElementBuilder::new(2).build();
        {
            let parent = ElementBuilder::new(1).build();
            Element::append_child(&parent, Rc::clone(&child));
        }
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_origin_ancestor_climbs_to_root() {
        let root = ElementBuilder::new(1).build();
        let mid = ElementBuilder::new(2).build();
        let leaf = ElementBuilder::new(3).build();
        Element::append_child(&root, Rc::clone(&mid));
        Element::append_child(&mid, Rc::clone(&leaf));

        assert_eq!(leaf.origin_ancestor().id(), 1);
        assert_eq!(root.origin_ancestor().id(), 1);
    }

    #[test]
    fn test_typed_accessors() {
        let e = ElementBuilder::new(9)
            .control_type(ControlTypeId::BUTTON)
            .name("OK")
            .keyboard_focusable(true)
            .bounding_rectangle(Rect::new(1.0, 2.0, 30.0, 40.0))
            .pattern(PatternId::INVOKE)
            .build();

        assert_eq!(e.control_type(), Some(ControlTypeId::BUTTON));
        assert_eq!(e.name(), Some("OK"));
        assert!(e.is_keyboard_focusable());
        assert!(!e.is_off_screen());
        assert_eq!(e.bounding_rectangle(), Rect::new(1.0, 2.0, 30.0, 40.0));
        assert!(e.supports_pattern(PatternId::INVOKE));
        assert!(!e.supports_pattern(PatternId::TOGGLE));
    }

    #[test]
    fn test_missing_bounding_rectangle_is_empty() {
        let e = ElementBuilder::new(1).build();
        assert!(e.bounding_rectangle_values().is_none());
        assert!(e.bounding_rectangle().is_empty());
    }
}
