//! Loaded-tree provider
//!
//! Builds a linked element tree from a nested JSON fixture:
//!
//! ```json
//! { "id": 1, "properties": { "30003": 50033 }, "patterns": [],
//!   "children": [ { "id": 2, "properties": { "30005": "OK" } } ] }
//! ```
//!
//! Property keys are numeric property ids. The provider enforces no bound;
//! the capture coordinator bounds the tree when it snapshots it.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::path::Path;
use std::rc::Rc;

use a11ycheck_core::model::{PatternId, PropertyId, PropertyValue};
use a11ycheck_core::{A11yError, Element, ElementBuilder, ElementId, ExError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementFixture {
    id: ElementId,
    #[serde(default)]
    properties: BTreeMap<i32, PropertyValue>,
    #[serde(default)]
    patterns: Vec<PatternId>,
    #[serde(default)]
    children: Vec<ElementFixture>,
    #[serde(default)]
    process_name: Option<String>,
}

impl ElementFixture {
    /// Build this node alone; children are returned for the caller to link
    fn into_element(self) -> (Rc<Element>, Vec<ElementFixture>) {
        let mut builder = ElementBuilder::new(self.id);
        for (id, value) in self.properties {
            builder = builder.property(PropertyId(id), value);
        }
        for pattern in self.patterns {
            builder = builder.pattern(pattern);
        }
        if let Some(name) = self.process_name {
            builder = builder.process_name(name);
        }
        (builder.build(), self.children)
    }
}

/// Parse a fixture and return its root, with parent links set
///
/// # Errors
///
/// `Serialization` when the JSON does not describe an element tree.
/// `MalformedTree` when two nodes share an element id.
pub fn load_tree_from_json_str(json: &str) -> Result<Rc<Element>> {
    let fixture: ElementFixture = serde_json::from_str(json).map_err(|e| {
        ExError::from(A11yError::Serialization {
            message: e.to_string(),
        })
        .with_op("load_tree")
    })?;

    let (root, children) = fixture.into_element();
    let mut seen = HashSet::from([root.id()]);
    let mut pending: VecDeque<(Rc<Element>, ElementFixture)> =
        children.into_iter().map(|c| (Rc::clone(&root), c)).collect();

    while let Some((parent, fixture)) = pending.pop_front() {
        if !seen.insert(fixture.id) {
            return Err(ExError::from(A11yError::MalformedTree {
                reason: format!("element id {} appears more than once", fixture.id),
            })
            .with_op("load_tree")
            .with_element_id(fixture.id));
        }
        let (element, children) = fixture.into_element();
        Element::append_child(&parent, Rc::clone(&element));
        pending.extend(children.into_iter().map(|c| (Rc::clone(&element), c)));
    }

    tracing::debug!(root_id = root.id(), "loaded element tree");
    Ok(root)
}

/// Read and parse a fixture file
///
/// # Errors
///
/// `Io` when the file cannot be read, otherwise as
/// [`load_tree_from_json_str`].
pub fn load_tree_from_path(path: &Path) -> Result<Rc<Element>> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        ExError::from(A11yError::Io {
            message: format!("{}: {}", path.display(), e),
        })
        .with_op("load_tree")
    })?;
    load_tree_from_json_str(&json)
}

/// First element with identity `id` in pre-order
pub fn find_by_id(root: &Rc<Element>, id: ElementId) -> Option<Rc<Element>> {
    let mut pending = vec![Rc::clone(root)];
    while let Some(e) = pending.pop() {
        if e.id() == id {
            return Some(e);
        }
        pending.extend(e.children().into_iter().rev());
    }
    None
}
