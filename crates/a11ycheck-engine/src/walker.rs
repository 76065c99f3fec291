//! Tree walker collaborator contracts
//!
//! Walkers talk to the platform; the capture coordinator only sees the
//! elements they hand back. Both are built through factories injected into
//! the coordinator so tests can substitute stubs.

use std::cell::RefCell;
use std::rc::Rc;

use a11ycheck_core::{BoundedCounter, Element, Result};

use crate::modes::TreeViewMode;
use crate::platform::PlatformContext;

/// Walks the live tree around a seed element
pub trait LiveTreeWalker {
    /// Populate `root_element` and the flat element list
    ///
    /// # Errors
    ///
    /// Platform failures, reported as `ExternalService`.
    fn get_tree_hierarchy(
        &mut self,
        seed: &Rc<Element>,
        mode: TreeViewMode,
        platform: &dyn PlatformContext,
    ) -> Result<()>;

    fn root_element(&self) -> Option<Rc<Element>>;

    /// The walker's own element list; the coordinator drains it
    fn elements_mut(&mut self) -> &mut Vec<Rc<Element>>;
}

/// Walks the full tree for a scan, bounded by a shared counter
pub trait TestTreeWalker {
    /// Re-read the tree, admitting elements through the shared counter
    ///
    /// # Errors
    ///
    /// Platform failures, reported as `ExternalService`.
    fn refresh_tree_data(&mut self, mode: TreeViewMode, platform: &dyn PlatformContext)
        -> Result<()>;

    fn elements(&self) -> &[Rc<Element>];

    fn top_most_element(&self) -> Option<Rc<Element>>;
}

pub type LiveWalkerFactory = Box<dyn Fn() -> Box<dyn LiveTreeWalker>>;

pub type TestWalkerFactory =
    Box<dyn Fn(Rc<Element>, Rc<RefCell<BoundedCounter>>) -> Box<dyn TestTreeWalker>>;
