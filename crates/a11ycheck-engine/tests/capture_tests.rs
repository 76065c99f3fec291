#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use a11ycheck_core::a11ycheck_core_types::schema::{EVENT_END_ERROR, EVENT_TRUNCATED};
use a11ycheck_core::a11ycheck_core_types::ContextId;
use a11ycheck_core::logging_facility::test_capture::init_test_capture;
use a11ycheck_core::{Element, ElementBuilder, ExErrorKind};
use a11ycheck_engine::capture::CaptureCoordinator;
use a11ycheck_engine::platform::NullPlatformContext;
use a11ycheck_engine::registrar::{
    CustomProperty, CustomPropertyType, InMemoryRegistrationSink, Registrar,
};
use a11ycheck_engine::{ActionContext, DataContextMode, ElementContext, TreeViewMode};
use common::*;
use uuid::Uuid;

fn action_with_context(element: Rc<Element>) -> (ActionContext, ContextId) {
    let mut action = ActionContext::default();
    let id = action.data_manager.add(ElementContext::new(element));
    (action, id)
}

fn element_count(action: &ActionContext, id: ContextId) -> usize {
    action
        .data_manager
        .get(id)
        .unwrap()
        .data_context()
        .map_or(0, |dc| dc.elements().len())
}

// ---------- Live mode ----------

#[test]
fn test_live_capture_reuses_snapshot_for_identical_request() {
    let (coordinator, live_calls, _) = coordinator(100, 6);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).live(true).build());

    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap();
    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap();

    assert_eq!(live_calls.get(), 1);
    assert_eq!(element_count(&action, id), 6);
}

#[test]
fn test_live_capture_rebuilds_on_force_or_new_tree_mode() {
    let (coordinator, live_calls, _) = coordinator(100, 3);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap();
    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, true)
        .unwrap();
    assert_eq!(live_calls.get(), 2);

    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Raw, false)
        .unwrap();
    assert_eq!(live_calls.get(), 3);

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.mode(), DataContextMode::Live);
    assert_eq!(dc.tree_mode(), TreeViewMode::Raw);
}

#[test]
fn test_live_capture_is_bounded() {
    let capture = init_test_capture();
    let (coordinator, _, _) = coordinator(3, 10);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.elements().len(), 3);
    assert!(dc.is_truncated());
    assert!(
        capture.count_events(|e| {
            e.op.as_deref() == Some("capture_live")
                && e.event.as_deref() == Some(EVENT_TRUNCATED)
                && e.field("upper_bound") == Some("3")
        }) >= 1
    );
}

#[test]
fn test_live_capture_rejects_duplicate_ids() {
    let live_calls = Rc::new(Cell::new(0));
    let source: TreeSource = Rc::new(|| {
        let root = ElementBuilder::new(1).build();
        Element::append_child(&root, ElementBuilder::new(2).build());
        Element::append_child(&root, ElementBuilder::new(2).build());
        Ok(root)
    });
    let coordinator = CaptureCoordinator::new(
        100,
        live_factory(source, Rc::clone(&live_calls)),
        test_factory(tree_source(1), Rc::new(Cell::new(0)), true, None),
    )
    .unwrap();
    let (mut action, id) = action_with_context(ElementBuilder::new(1).build());

    let err = coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::DuplicateElement);
    assert_eq!(err.element_id(), Some(2));
    assert_eq!(err.context_id(), Some(id));
    assert!(action.data_manager.get(id).unwrap().data_context().is_none());
}

#[test]
fn test_walker_failure_is_reported_with_context() {
    let capture = init_test_capture();
    let coordinator = CaptureCoordinator::new(
        100,
        live_factory(failing_source(), Rc::new(Cell::new(0))),
        test_factory(failing_source(), Rc::new(Cell::new(0)), true, None),
    )
    .unwrap();
    let (mut action, id) = action_with_context(ElementBuilder::new(1).build());

    let err = coordinator
        .set_test_mode_data_context(
            &mut action,
            id,
            DataContextMode::Test,
            TreeViewMode::Control,
            false,
        )
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ExternalService);
    assert_eq!(err.context_id(), Some(id));

    let context_id = id.to_string();
    assert_eq!(
        capture.count_events(|e| {
            e.op.as_deref() == Some("capture_test")
                && e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.field("context_id") == Some(context_id.as_str())
        }),
        1
    );
}

// ---------- Test mode ----------

#[test]
fn test_test_mode_reuses_snapshot() {
    let (coordinator, _, test_calls) = coordinator(100, 4);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    let first = coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();
    let second = coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();

    assert!(first);
    assert!(!second);
    assert_eq!(test_calls.get(), 1);

    let forced = coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, true)
        .unwrap();
    assert!(forced);
    assert_eq!(test_calls.get(), 2);
}

#[test]
fn test_test_mode_walker_shares_the_snapshot_counter() {
    let (coordinator, _, _) = coordinator(5, 12);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.elements().len(), 5);
    let state = dc.counter_state();
    assert_eq!(state.count, 5);
    assert_eq!(state.attempts, 12);
    assert!(state.upper_bound_exceeded);
}

#[test]
fn test_test_mode_drops_excess_from_unbounded_walker() {
    let coordinator = CaptureCoordinator::new(
        4,
        live_factory(tree_source(1), Rc::new(Cell::new(0))),
        test_factory(tree_source(9), Rc::new(Cell::new(0)), false, None),
    )
    .unwrap();
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();

    assert_eq!(element_count(&action, id), 4);
}

#[test]
fn test_test_mode_flags_truncation_when_walker_skips_counter() {
    let coordinator = CaptureCoordinator::new(
        3,
        live_factory(tree_source(1), Rc::new(Cell::new(0))),
        counter_blind_factory(tree_source(10)),
    )
    .unwrap();
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.elements().len(), 3);
    assert!(dc.is_truncated());
    let state = dc.counter_state();
    assert_eq!(state.count, 3);
    assert_eq!(state.attempts, 10);
}

#[test]
fn test_test_mode_counts_short_walk_that_skips_counter() {
    let coordinator = CaptureCoordinator::new(
        20,
        live_factory(tree_source(1), Rc::new(Cell::new(0))),
        counter_blind_factory(tree_source(6)),
    )
    .unwrap();
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Raw, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.elements().len(), 6);
    assert!(!dc.is_truncated());
    assert_eq!(dc.counter_state().count, 6);
}

#[test]
fn test_set_test_mode_rejects_live_mode() {
    let (coordinator, live_calls, test_calls) = coordinator(10, 3);
    let (mut action, id) = action_with_context(ElementBuilder::new(0).build());

    let err = coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Live, TreeViewMode::Raw, false)
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(live_calls.get(), 0);
    assert_eq!(test_calls.get(), 0);
}

#[test]
fn test_unknown_context_is_not_found() {
    let (coordinator, _, _) = coordinator(10, 3);
    let mut action = ActionContext::default();
    let missing = ContextId::new();

    let err = coordinator
        .set_live_mode_data_context(&mut action, missing, TreeViewMode::Raw, false)
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = coordinator
        .set_test_mode_data_context(&mut action, missing, DataContextMode::Load, TreeViewMode::Raw, false)
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_leaving_live_mode_releases_before_rewalking() {
    let sink = InMemoryRegistrationSink::default();
    let mut registrar = Registrar::new(Box::new(sink.clone()));
    registrar
        .register_custom_property(CustomProperty {
            guid: Uuid::new_v4(),
            programmatic_name: "SparkValue".to_string(),
            property_type: CustomPropertyType::Int,
            values: None,
        })
        .unwrap();
    assert_eq!(sink.converter_log().len(), 1);

    let live_elements: Rc<RefCell<Vec<Weak<Element>>>> = Rc::new(RefCell::new(Vec::new()));
    let observed: Rc<Cell<Option<(bool, usize)>>> = Rc::new(Cell::new(None));

    let hook: OnConstruct = {
        let live_elements = Rc::clone(&live_elements);
        let observed = Rc::clone(&observed);
        let sink = sink.clone();
        Rc::new(move |_seed| {
            let all_released = live_elements
                .borrow()
                .iter()
                .all(|w| w.upgrade().is_none());
            observed.set(Some((all_released, sink.converter_log().len())));
        })
    };
    let coordinator = CaptureCoordinator::new(
        100,
        live_factory(tree_source(5), Rc::new(Cell::new(0))),
        test_factory(tree_source(5), Rc::new(Cell::new(0)), true, Some(hook)),
    )
    .unwrap();

    let mut action = ActionContext::new(registrar, Box::new(NullPlatformContext));
    let id = action
        .data_manager
        .add(ElementContext::new(ElementBuilder::new(0).live(true).build()));

    coordinator
        .set_live_mode_data_context(&mut action, id, TreeViewMode::Control, false)
        .unwrap();
    {
        let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
        live_elements
            .borrow_mut()
            .extend(dc.elements().values().map(Rc::downgrade));
    }
    assert_eq!(live_elements.borrow().len(), 5);

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Control, false)
        .unwrap();

    assert_eq!(observed.get(), Some((true, 2)));
}

// ---------- Load mode ----------

#[test]
fn test_load_mode_truncates_below_tree_size() {
    let capture = init_test_capture();
    let root = wide_tree(10);
    let (coordinator, _, _) = coordinator(7, 1);
    let (mut action, id) = action_with_context(Rc::clone(&root));

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Load, TreeViewMode::Raw, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.elements().len(), 7);
    assert!(dc.is_truncated());
    assert!(
        capture.count_events(|e| {
            e.op.as_deref() == Some("capture_load")
                && e.event.as_deref() == Some(EVENT_TRUNCATED)
                && e.field("upper_bound") == Some("7")
                && e.field("element_count") == Some("7")
        }) >= 1
    );
}

#[test]
fn test_load_mode_keeps_whole_tree_within_bound() {
    for bound in [10, 11, 500] {
        let root = wide_tree(10);
        let (coordinator, _, _) = coordinator(bound, 1);
        let (mut action, id) = action_with_context(root);

        coordinator
            .set_test_mode_data_context(&mut action, id, DataContextMode::Load, TreeViewMode::Raw, false)
            .unwrap();

        let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
        assert_eq!(dc.elements().len(), 10, "bound {bound}");
        assert!(!dc.is_truncated(), "bound {bound}");
    }
}

#[test]
fn test_load_mode_starts_from_origin_ancestor() {
    let root = wide_tree(4);
    let leaf = Rc::clone(&root.children()[2]);
    let (coordinator, _, _) = coordinator(100, 1);
    let (mut action, id) = action_with_context(leaf);

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Load, TreeViewMode::Raw, false)
        .unwrap();

    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.root_element().map(|r| r.id()), Some(0));
    assert_eq!(dc.elements().len(), 4);
    assert_eq!(dc.element().id(), 3);
}

#[test]
fn test_load_snapshot_is_never_stale() {
    let (coordinator, _, test_calls) = coordinator(100, 3);
    let (mut action, id) = action_with_context(wide_tree(3));

    coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Load, TreeViewMode::Raw, false)
        .unwrap();
    let rebuilt = coordinator
        .set_test_mode_data_context(&mut action, id, DataContextMode::Test, TreeViewMode::Content, false)
        .unwrap();

    assert!(!rebuilt);
    assert_eq!(test_calls.get(), 0);
    let dc = action.data_manager.get(id).unwrap().data_context().unwrap();
    assert_eq!(dc.mode(), DataContextMode::Load);
}

#[test]
fn test_coordinator_rejects_invalid_bound() {
    for bound in [0, -5, i32::MAX] {
        let result = CaptureCoordinator::new(
            bound,
            live_factory(tree_source(1), Rc::new(Cell::new(0))),
            test_factory(tree_source(1), Rc::new(Cell::new(0)), true, None),
        );
        assert_eq!(
            result.err().map(|e| e.kind()),
            Some(ExErrorKind::InvalidConfiguration)
        );
    }
}
