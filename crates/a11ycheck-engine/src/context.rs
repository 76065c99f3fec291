//! Element contexts and their captured snapshots

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use a11ycheck_core::a11ycheck_core_types::schema::EVENT_RELEASED;
use a11ycheck_core::a11ycheck_core_types::ContextId;
use a11ycheck_core::{A11yError, BoundedCounter, CounterState, Element, ElementId, Result};
use chrono::{DateTime, Utc};

use crate::modes::{DataContextMode, SelectType, TreeViewMode};
use crate::platform::{NullPlatformContext, PlatformContext};
use crate::registrar::Registrar;

const UNKNOWN_PROCESS: &str = "Unknown";

/// A bounded snapshot of the tree around an element
///
/// Owns every captured element. Releasing (or dropping) the snapshot drops
/// its references immediately so elements nobody else holds are freed before
/// a replacement is built.
#[derive(Debug)]
pub struct ElementDataContext {
    pub(crate) mode: DataContextMode,
    pub(crate) tree_mode: TreeViewMode,
    element: Rc<Element>,
    pub(crate) root_element: Option<Rc<Element>>,
    pub(crate) elements: HashMap<ElementId, Rc<Element>>,
    element_counter: Rc<RefCell<BoundedCounter>>,
    captured_at: DateTime<Utc>,
    released: bool,
}

impl ElementDataContext {
    /// Empty snapshot seeded on `element`
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `max_elements` is not a valid counter bound.
    pub fn new(
        element: Rc<Element>,
        max_elements: i32,
        mode: DataContextMode,
        tree_mode: TreeViewMode,
    ) -> Result<Self> {
        Ok(Self {
            mode,
            tree_mode,
            element,
            root_element: None,
            elements: HashMap::new(),
            element_counter: Rc::new(RefCell::new(BoundedCounter::new(max_elements)?)),
            captured_at: Utc::now(),
            released: false,
        })
    }

    pub fn mode(&self) -> DataContextMode {
        self.mode
    }

    pub fn tree_mode(&self) -> TreeViewMode {
        self.tree_mode
    }

    /// The seed element the snapshot was requested for
    pub fn element(&self) -> &Rc<Element> {
        &self.element
    }

    pub fn root_element(&self) -> Option<&Rc<Element>> {
        self.root_element.as_ref()
    }

    pub fn elements(&self) -> &HashMap<ElementId, Rc<Element>> {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Rc<Element>> {
        self.elements.get(&id)
    }

    /// Captured elements in ascending identity order
    pub fn sorted_elements(&self) -> Vec<&Rc<Element>> {
        let mut elements: Vec<_> = self.elements.values().collect();
        elements.sort_by_key(|e| e.id());
        elements
    }

    /// The counter shared with whichever walker populated this snapshot
    pub fn element_counter(&self) -> Rc<RefCell<BoundedCounter>> {
        Rc::clone(&self.element_counter)
    }

    pub fn counter_state(&self) -> CounterState {
        self.element_counter.borrow().state()
    }

    /// The tree was larger than the bound and the snapshot is partial
    pub fn is_truncated(&self) -> bool {
        self.element_counter.borrow().upper_bound_exceeded()
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Drop every captured element reference; idempotent
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let element_count = self.elements.len();
        self.elements.clear();
        self.root_element = None;

        tracing::debug!(
            event = EVENT_RELEASED,
            capture_mode = %self.mode,
            element_count,
            "released element data context"
        );
    }
}

impl Drop for ElementDataContext {
    fn drop(&mut self) {
        self.release();
    }
}

/// A user selection: one element plus its current snapshot
#[derive(Debug)]
pub struct ElementContext {
    id: ContextId,
    element: Rc<Element>,
    select_type: SelectType,
    process_name: String,
    data_context: Option<ElementDataContext>,
}

impl ElementContext {
    pub fn new(element: Rc<Element>) -> Self {
        let (select_type, process_name) = if element.is_live() {
            let name = element.process_name().unwrap_or(UNKNOWN_PROCESS);
            (SelectType::Live, name.to_string())
        } else {
            (SelectType::Loaded, UNKNOWN_PROCESS.to_string())
        };

        Self {
            id: ContextId::new(),
            element,
            select_type,
            process_name,
            data_context: None,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn element(&self) -> &Rc<Element> {
        &self.element
    }

    pub fn select_type(&self) -> SelectType {
        self.select_type
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn data_context(&self) -> Option<&ElementDataContext> {
        self.data_context.as_ref()
    }

    /// Replace the snapshot, releasing the previous one first
    pub fn set_data_context(&mut self, data_context: Option<ElementDataContext>) {
        if let Some(mut previous) = self.data_context.take() {
            previous.release();
        }
        self.data_context = data_context;
    }
}

/// Registry of live element contexts
#[derive(Debug, Default)]
pub struct DataManager {
    contexts: HashMap<ContextId, ElementContext>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a context and return its id
    pub fn add(&mut self, context: ElementContext) -> ContextId {
        let id = context.id();
        self.contexts.insert(id, context);
        id
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn get(&self, id: ContextId) -> Result<&ElementContext> {
        self.contexts
            .get(&id)
            .ok_or_else(|| A11yError::ContextNotFound { context_id: id }.into())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn get_mut(&mut self, id: ContextId) -> Result<&mut ElementContext> {
        self.contexts
            .get_mut(&id)
            .ok_or_else(|| A11yError::ContextNotFound { context_id: id }.into())
    }

    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn remove(&mut self, id: ContextId) -> Result<ElementContext> {
        self.contexts
            .remove(&id)
            .ok_or_else(|| A11yError::ContextNotFound { context_id: id }.into())
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

/// Everything a capture operation reads or mutates besides the walkers
pub struct ActionContext {
    pub data_manager: DataManager,
    pub registrar: Registrar,
    pub platform: Box<dyn PlatformContext>,
}

impl ActionContext {
    pub fn new(registrar: Registrar, platform: Box<dyn PlatformContext>) -> Self {
        Self {
            data_manager: DataManager::new(),
            registrar,
            platform,
        }
    }
}

impl Default for ActionContext {
    fn default() -> Self {
        Self::new(Registrar::default(), Box::new(NullPlatformContext))
    }
}
