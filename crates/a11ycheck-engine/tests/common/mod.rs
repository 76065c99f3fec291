#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use a11ycheck_core::condition::Condition;
use a11ycheck_core::model::{ControlTypeId, Rect};
use a11ycheck_core::rules::{A11yCriteriaId, EvaluationCode, LazyCondition, Rule, RuleId, RuleInfo};
use a11ycheck_core::{A11yError, BoundedCounter, Element, ElementBuilder, Result};
use a11ycheck_engine::capture::CaptureCoordinator;
use a11ycheck_engine::platform::PlatformContext;
use a11ycheck_engine::walker::{
    LiveTreeWalker, LiveWalkerFactory, TestTreeWalker, TestWalkerFactory,
};
use a11ycheck_engine::TreeViewMode;

/// Root `0` with children `1..n`, all visible panes/buttons
pub fn wide_tree(n: i32) -> Rc<Element> {
    let root = ElementBuilder::new(0)
        .control_type(ControlTypeId::PANE)
        .bounding_rectangle(Rect::new(0.0, 0.0, 800.0, 600.0))
        .build();
    for id in 1..n {
        let child = ElementBuilder::new(id)
            .control_type(ControlTypeId::BUTTON)
            .bounding_rectangle(Rect::new(10.0, 10.0 * f64::from(id), 80.0, 20.0))
            .build();
        Element::append_child(&root, child);
    }
    root
}

/// Every element of a tree in pre-order
pub fn flatten(root: &Rc<Element>) -> Vec<Rc<Element>> {
    let mut out = Vec::new();
    let mut pending = vec![Rc::clone(root)];
    while let Some(e) = pending.pop() {
        pending.extend(e.children().into_iter().rev());
        out.push(e);
    }
    out
}

pub type TreeSource = Rc<dyn Fn() -> Result<Rc<Element>>>;

pub fn tree_source(n: i32) -> TreeSource {
    Rc::new(move || Ok(wide_tree(n)))
}

pub fn failing_source() -> TreeSource {
    Rc::new(|| {
        Err(A11yError::WalkerFailed {
            message: "platform unavailable".to_string(),
        }
        .into())
    })
}

/// Live walker stub that builds a fresh tree per call
pub struct StubLiveWalker {
    source: TreeSource,
    calls: Rc<Cell<usize>>,
    root: Option<Rc<Element>>,
    elements: Vec<Rc<Element>>,
}

impl LiveTreeWalker for StubLiveWalker {
    fn get_tree_hierarchy(
        &mut self,
        _seed: &Rc<Element>,
        _mode: TreeViewMode,
        _platform: &dyn PlatformContext,
    ) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        let root = (self.source)()?;
        self.elements = flatten(&root);
        self.root = Some(root);
        Ok(())
    }

    fn root_element(&self) -> Option<Rc<Element>> {
        self.root.clone()
    }

    fn elements_mut(&mut self) -> &mut Vec<Rc<Element>> {
        &mut self.elements
    }
}

pub fn live_factory(source: TreeSource, calls: Rc<Cell<usize>>) -> LiveWalkerFactory {
    Box::new(move || {
        Box::new(StubLiveWalker {
            source: Rc::clone(&source),
            calls: Rc::clone(&calls),
            root: None,
            elements: Vec::new(),
        })
    })
}

/// Test walker stub that admits elements through the shared counter
///
/// With `honor_bound` off it returns the whole tree, to exercise the
/// coordinator's own limit.
pub struct StubTestWalker {
    source: TreeSource,
    counter: Rc<RefCell<BoundedCounter>>,
    calls: Rc<Cell<usize>>,
    honor_bound: bool,
    root: Option<Rc<Element>>,
    elements: Vec<Rc<Element>>,
}

impl TestTreeWalker for StubTestWalker {
    fn refresh_tree_data(
        &mut self,
        _mode: TreeViewMode,
        _platform: &dyn PlatformContext,
    ) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        let root = (self.source)()?;

        let honor_bound = self.honor_bound;
        let mut counter = self.counter.borrow_mut();
        self.elements = flatten(&root)
            .into_iter()
            .filter(|_| counter.try_increment() || !honor_bound)
            .collect();
        self.root = Some(root);
        Ok(())
    }

    fn elements(&self) -> &[Rc<Element>] {
        &self.elements
    }

    fn top_most_element(&self) -> Option<Rc<Element>> {
        self.root.clone()
    }
}

/// Hook run when the coordinator constructs a test walker
pub type OnConstruct = Rc<dyn Fn(&Rc<Element>)>;

pub fn test_factory(
    source: TreeSource,
    calls: Rc<Cell<usize>>,
    honor_bound: bool,
    on_construct: Option<OnConstruct>,
) -> TestWalkerFactory {
    Box::new(move |seed, counter| {
        if let Some(hook) = &on_construct {
            hook(&seed);
        }
        Box::new(StubTestWalker {
            source: Rc::clone(&source),
            counter,
            calls: Rc::clone(&calls),
            honor_bound,
            root: None,
            elements: Vec::new(),
        })
    })
}

/// Test walker that returns the whole tree and never touches the counter
pub struct CounterBlindWalker {
    source: TreeSource,
    root: Option<Rc<Element>>,
    elements: Vec<Rc<Element>>,
}

impl TestTreeWalker for CounterBlindWalker {
    fn refresh_tree_data(
        &mut self,
        _mode: TreeViewMode,
        _platform: &dyn PlatformContext,
    ) -> Result<()> {
        let root = (self.source)()?;
        self.elements = flatten(&root);
        self.root = Some(root);
        Ok(())
    }

    fn elements(&self) -> &[Rc<Element>] {
        &self.elements
    }

    fn top_most_element(&self) -> Option<Rc<Element>> {
        self.root.clone()
    }
}

pub fn counter_blind_factory(source: TreeSource) -> TestWalkerFactory {
    Box::new(move |_seed, _counter| {
        Box::new(CounterBlindWalker {
            source: Rc::clone(&source),
            root: None,
            elements: Vec::new(),
        })
    })
}

/// Coordinator whose walkers both produce `wide_tree(n)`
pub fn coordinator(
    max_elements: i32,
    n: i32,
) -> (CaptureCoordinator, Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let live_calls = Rc::new(Cell::new(0));
    let test_calls = Rc::new(Cell::new(0));
    let coordinator = CaptureCoordinator::new(
        max_elements,
        live_factory(tree_source(n), Rc::clone(&live_calls)),
        test_factory(tree_source(n), Rc::clone(&test_calls), true, None),
    )
    .unwrap();
    (coordinator, live_calls, test_calls)
}

/// Rule stub: applies to even ids and panics if tested on anything else
pub struct EvenIdRule {
    info: RuleInfo,
    condition: LazyCondition,
    pub tested: Cell<usize>,
}

impl EvenIdRule {
    pub fn new() -> Self {
        Self {
            info: stub_info(RuleId::NameOnOptionalType, EvaluationCode::Warning),
            condition: LazyCondition::new(),
            tested: Cell::new(0),
        }
    }
}

impl Rule for EvenIdRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition
            .get_or_build(|| Condition::create(|e| e.id() % 2 == 0, "id is even"))
    }

    fn passes_test(&self, e: &Element) -> bool {
        assert!(
            e.id() % 2 == 0,
            "passes_test reached for non-applicable element {}",
            e.id()
        );
        self.tested.set(self.tested.get() + 1);
        e.id() % 4 == 0
    }
}

/// Rule stub that never applies
pub struct NeverRule {
    info: RuleInfo,
    condition: LazyCondition,
}

impl NeverRule {
    pub fn new() -> Self {
        Self {
            info: stub_info(RuleId::LandmarkBannerIsTopLevel, EvaluationCode::Error),
            condition: LazyCondition::new(),
        }
    }
}

impl Rule for NeverRule {
    fn info(&self) -> &RuleInfo {
        &self.info
    }

    fn condition(&self) -> &Condition {
        self.condition
            .get_or_build(|| a11ycheck_core::condition::FALSE.clone())
    }

    fn passes_test(&self, e: &Element) -> bool {
        panic!("never-applicable rule tested on element {}", e.id());
    }
}

fn stub_info(id: RuleId, error_code: EvaluationCode) -> RuleInfo {
    RuleInfo {
        id,
        description: "stub rule",
        how_to_fix: "nothing to fix",
        standard: A11yCriteriaId::ObjectInformation,
        property_id: None,
        error_code,
    }
}
