//! Capture coordinator
//!
//! Turns a live or loaded hierarchy into an [`ElementDataContext`] and
//! installs it on an element context. Every path admits elements through the
//! snapshot's [`BoundedCounter`], so no snapshot ever holds more than
//! `max_elements` elements regardless of how it was built.
//!
//! ## Staleness
//!
//! An existing snapshot is reused unless its mode or tree view differs from
//! the request, or the caller forces a refresh. A load-mode snapshot is never
//! stale by that comparison.
//!
//! ## Oversized trees
//!
//! Exceeding the bound is not an error. Admission stops, the counter records
//! how far over the limit the tree was, and a `truncated` warning is logged.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use a11ycheck_core::a11ycheck_core_types::schema::EVENT_TRUNCATED;
use a11ycheck_core::a11ycheck_core_types::ContextId;
use a11ycheck_core::{
    log_op_end, log_op_error, log_op_start, A11yError, BoundedCounter, Element, ElementId,
    ExError, ExErrorKind, Result,
};

use crate::config::ScanConfig;
use crate::context::{ActionContext, ElementDataContext};
use crate::modes::{DataContextMode, TreeViewMode};
use crate::platform::PlatformContext;
use crate::walker::{LiveWalkerFactory, TestWalkerFactory};

/// Default cap on elements per snapshot, shared with the loaded-tree path so
/// anything captured under the limit can be loaded again
pub const MAX_ELEMENTS: i32 = 20_000;

/// True when `existing` cannot serve a request for `mode` / `tree_mode`
pub fn need_new_data_context(
    existing: Option<&ElementDataContext>,
    mode: DataContextMode,
    tree_mode: TreeViewMode,
) -> bool {
    match existing {
        None => true,
        Some(dc) => {
            dc.mode() != DataContextMode::Load
                && (dc.mode() != mode || dc.tree_mode() != tree_mode)
        }
    }
}

pub struct CaptureCoordinator {
    max_elements: i32,
    live_walker_factory: LiveWalkerFactory,
    test_walker_factory: TestWalkerFactory,
}

impl CaptureCoordinator {
    /// # Errors
    ///
    /// `InvalidConfiguration` if `max_elements` is not a valid counter bound.
    pub fn new(
        max_elements: i32,
        live_walker_factory: LiveWalkerFactory,
        test_walker_factory: TestWalkerFactory,
    ) -> Result<Self> {
        BoundedCounter::new(max_elements)?;

        Ok(Self {
            max_elements,
            live_walker_factory,
            test_walker_factory,
        })
    }

    /// # Errors
    ///
    /// `InvalidConfiguration` if the configured bound is invalid.
    pub fn from_config(
        config: &ScanConfig,
        live_walker_factory: LiveWalkerFactory,
        test_walker_factory: TestWalkerFactory,
    ) -> Result<Self> {
        config.validate()?;
        Self::new(config.max_elements, live_walker_factory, test_walker_factory)
    }

    pub fn max_elements(&self) -> i32 {
        self.max_elements
    }

    /// Make sure the context holds a live-mode snapshot for `tree_mode`
    ///
    /// Reuses the current snapshot when it is still valid and `force` is off.
    ///
    /// # Errors
    ///
    /// Unknown context id, walker failures, or duplicate element ids in the
    /// walker's output.
    pub fn set_live_mode_data_context(
        &self,
        action: &mut ActionContext,
        context_id: ContextId,
        tree_mode: TreeViewMode,
        force: bool,
    ) -> Result<()> {
        log_op_start!(
            "capture_live",
            context_id = %context_id,
            tree_view_mode = %tree_mode
        );
        let start = Instant::now();

        let result = self
            .set_live_mode_impl(action, context_id, tree_mode, force)
            .map_err(|e| {
                log_op_error!(
                    "capture_live",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    context_id = %context_id
                );
                e
            })?;

        log_op_end!(
            "capture_live",
            duration_ms = start.elapsed().as_millis() as u64,
            context_id = %context_id,
            element_count = result
        );

        Ok(())
    }

    fn set_live_mode_impl(
        &self,
        action: &mut ActionContext,
        context_id: ContextId,
        tree_mode: TreeViewMode,
        force: bool,
    ) -> Result<usize> {
        let ActionContext {
            data_manager,
            platform,
            ..
        } = action;
        let ec = data_manager.get_mut(context_id)?;

        if !force && !need_new_data_context(ec.data_context(), DataContextMode::Live, tree_mode) {
            return Ok(ec.data_context().map_or(0, |dc| dc.elements().len()));
        }

        let mut dc = ElementDataContext::new(
            Rc::clone(ec.element()),
            self.max_elements,
            DataContextMode::Live,
            tree_mode,
        )?;
        self.populate_live(&mut dc, tree_mode, &**platform)
            .map_err(|e| e.with_context_id(context_id))?;

        let count = dc.elements().len();
        ec.set_data_context(Some(dc));
        Ok(count)
    }

    fn populate_live(
        &self,
        dc: &mut ElementDataContext,
        tree_mode: TreeViewMode,
        platform: &dyn PlatformContext,
    ) -> Result<()> {
        let mut walker = (self.live_walker_factory)();
        walker.get_tree_hierarchy(dc.element(), tree_mode, platform)?;

        dc.root_element = walker.root_element();

        // Take ownership of the walker's list so it holds no references
        let captured = std::mem::take(walker.elements_mut());
        let counter = dc.element_counter();
        let mut elements = HashMap::with_capacity(captured.len().min(self.max_elements as usize));
        for element in captured {
            if !counter.borrow_mut().try_increment() {
                break;
            }
            insert_unique(&mut elements, element)?;
        }
        dc.elements = elements;

        warn_if_truncated(dc, "capture_live");
        Ok(())
    }

    /// Make sure the context holds a `mode` snapshot for `tree_mode`
    ///
    /// Leaving live mode first drops the live snapshot and replays custom
    /// property registrations, so the platform is back at its baseline before
    /// the scan walks it. Returns whether a new snapshot was built.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for [`DataContextMode::Live`] (use
    /// [`set_live_mode_data_context`](Self::set_live_mode_data_context)),
    /// unknown context id, walker failures, or duplicate element ids.
    pub fn set_test_mode_data_context(
        &self,
        action: &mut ActionContext,
        context_id: ContextId,
        mode: DataContextMode,
        tree_mode: TreeViewMode,
        force: bool,
    ) -> Result<bool> {
        let op = match mode {
            DataContextMode::Load => "capture_load",
            _ => "capture_test",
        };
        log_op_start!(
            op,
            context_id = %context_id,
            capture_mode = %mode,
            tree_view_mode = %tree_mode
        );
        let start = Instant::now();

        let rebuilt = self
            .set_test_mode_impl(action, context_id, mode, tree_mode, force)
            .map_err(|e| {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    context_id = %context_id
                );
                e
            })?;

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            context_id = %context_id,
            rebuilt = rebuilt
        );

        Ok(rebuilt)
    }

    fn set_test_mode_impl(
        &self,
        action: &mut ActionContext,
        context_id: ContextId,
        mode: DataContextMode,
        tree_mode: TreeViewMode,
        force: bool,
    ) -> Result<bool> {
        if mode == DataContextMode::Live {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("capture_test")
                .with_context_id(context_id)
                .with_message("live snapshots are built by set_live_mode_data_context"));
        }

        let ActionContext {
            data_manager,
            registrar,
            platform,
        } = action;
        let ec = data_manager.get_mut(context_id)?;

        if ec
            .data_context()
            .is_some_and(|dc| dc.mode() == DataContextMode::Live)
        {
            ec.set_data_context(None);
            registrar.restore_custom_property_registrations();
        }

        if !force && !need_new_data_context(ec.data_context(), mode, tree_mode) {
            return Ok(false);
        }

        // The old snapshot goes before the new one is populated
        ec.set_data_context(None);

        let mut dc =
            ElementDataContext::new(Rc::clone(ec.element()), self.max_elements, mode, tree_mode)?;
        let populated = match mode {
            DataContextMode::Test => self.populate_test(&mut dc, tree_mode, &**platform),
            _ => populate_loaded(&mut dc),
        };
        populated.map_err(|e| e.with_context_id(context_id))?;

        ec.set_data_context(Some(dc));
        Ok(true)
    }

    fn populate_test(
        &self,
        dc: &mut ElementDataContext,
        tree_mode: TreeViewMode,
        platform: &dyn PlatformContext,
    ) -> Result<()> {
        let mut walker =
            (self.test_walker_factory)(Rc::clone(dc.element()), dc.element_counter());
        walker.refresh_tree_data(tree_mode, platform)?;

        let walked = walker.elements();

        // Charge the counter for anything the walker produced without
        // admitting, so an over-long walk still reads as truncated
        let returned = i32::try_from(walked.len()).unwrap_or(i32::MAX);
        {
            let counter = dc.element_counter();
            let mut counter = counter.borrow_mut();
            let uncounted = returned.saturating_sub(counter.attempts());
            if uncounted > 0 {
                counter.try_add(uncounted);
            }
        }

        if walked.len() > self.max_elements as usize {
            tracing::warn!(
                op = "capture_test",
                returned = walked.len(),
                upper_bound = self.max_elements,
                "test walker ignored the element bound; dropping the excess"
            );
        }

        let mut elements = HashMap::with_capacity(walked.len().min(self.max_elements as usize));
        for element in walked.iter().take(self.max_elements as usize) {
            insert_unique(&mut elements, Rc::clone(element))?;
        }
        dc.elements = elements;
        dc.root_element = walker.top_most_element();

        warn_if_truncated(dc, "capture_test");
        Ok(())
    }
}

fn populate_loaded(dc: &mut ElementDataContext) -> Result<()> {
    let root = dc.element().origin_ancestor();
    let counter = dc.element_counter();
    let mut elements = HashMap::new();

    add_element_and_children(&root, &mut elements, &mut counter.borrow_mut())?;

    dc.root_element = Some(root);
    dc.elements = elements;

    warn_if_truncated(dc, "capture_load");
    Ok(())
}

fn warn_if_truncated(dc: &ElementDataContext, op: &str) {
    let state = dc.counter_state();
    if state.upper_bound_exceeded {
        tracing::warn!(
            op = op,
            event = EVENT_TRUNCATED,
            upper_bound = state.upper_bound,
            attempts = state.attempts,
            element_count = dc.elements().len(),
            "element tree exceeds the capture bound; snapshot is partial"
        );
    }
}

/// Pre-order admission of `root` and its subtree
///
/// A refused element ends the descent into its subtree without error;
/// elements admitted earlier stay in `elements`. Iterative, so depth is not
/// limited by the call stack.
pub fn add_element_and_children(
    root: &Rc<Element>,
    elements: &mut HashMap<ElementId, Rc<Element>>,
    counter: &mut BoundedCounter,
) -> Result<()> {
    let mut pending = vec![Rc::clone(root)];

    while let Some(e) = pending.pop() {
        if !counter.try_increment() {
            continue;
        }

        pending.extend(e.children().into_iter().rev());
        insert_unique(elements, e)?;
    }
    Ok(())
}

fn insert_unique(
    elements: &mut HashMap<ElementId, Rc<Element>>,
    element: Rc<Element>,
) -> Result<()> {
    let id = element.id();
    if elements.insert(id, element).is_some() {
        return Err(A11yError::DuplicateElementId { element_id: id }.into());
    }
    Ok(())
}
