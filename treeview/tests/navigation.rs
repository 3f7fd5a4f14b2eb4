//! Tests for keyboard navigation.

mod common;

use common::{FocusCalls, down, id, ids, left, mounted_view, nested_forest, right, sample_forest, up};
use treeview::prelude::*;
use treeview::tree::{NavKey, Transition, transition};

// ============================================================================
// Transition function
// ============================================================================

#[test]
fn test_nav_key_from_combo() {
    assert_eq!(NavKey::from_combo(&down()), Some(NavKey::Down));
    assert_eq!(
        NavKey::from_combo(&KeyCombo::key(Key::Space)),
        Some(NavKey::Activate)
    );
    assert_eq!(
        NavKey::from_combo(&KeyCombo::key(Key::Char(' '))),
        Some(NavKey::Activate)
    );
    assert_eq!(
        NavKey::from_combo(&KeyCombo::key(Key::Enter)),
        Some(NavKey::Activate)
    );
    assert_eq!(NavKey::from_combo(&down().ctrl()), None);
    assert_eq!(NavKey::from_combo(&down().alt()), None);
    assert_eq!(NavKey::from_combo(&KeyCombo::key(Key::PageDown)), None);
}

#[test]
fn test_down_skips_disabled() {
    let forest = sample_forest();
    let items = forest.flatten(&ids(&["A"]));
    let next = transition(&items, Some(&id("A1")), NavKey::Down, ArrowKeyMode::Toggle);
    assert_eq!(next, Transition::Focus(id("B")));
}

#[test]
fn test_up_skips_disabled() {
    let forest = sample_forest();
    let items = forest.flatten(&ids(&["A"]));
    let next = transition(&items, Some(&id("B")), NavKey::Up, ArrowKeyMode::Toggle);
    assert_eq!(next, Transition::Focus(id("A1")));
}

#[test]
fn test_no_wrap_at_edges() {
    let forest = sample_forest();
    let items = forest.flatten(&ids(&["A"]));
    assert_eq!(
        transition(&items, Some(&id("B")), NavKey::Down, ArrowKeyMode::Toggle),
        Transition::None
    );
    assert_eq!(
        transition(&items, Some(&id("A")), NavKey::Up, ArrowKeyMode::Toggle),
        Transition::None
    );
}

#[test]
fn test_home_and_end_skip_disabled() {
    let forest = Forest::new(vec![
        Node::new("x", "X").disabled(true),
        Node::new("y", "Y"),
        Node::new("z", "Z"),
        Node::new("w", "W").disabled(true),
    ])
    .unwrap();
    let items = forest.flatten(&[]);

    assert_eq!(
        transition(&items, Some(&id("z")), NavKey::Home, ArrowKeyMode::Toggle),
        Transition::Focus(id("y"))
    );
    assert_eq!(
        transition(&items, Some(&id("y")), NavKey::End, ArrowKeyMode::Toggle),
        Transition::Focus(id("z"))
    );
}

#[test]
fn test_missing_focus_scans_down_from_start() {
    let forest = sample_forest();
    let items = forest.flatten(&[]);
    assert_eq!(
        transition(&items, Some(&id("gone")), NavKey::Down, ArrowKeyMode::Toggle),
        Transition::Focus(id("A"))
    );
    assert_eq!(
        transition(&items, Some(&id("gone")), NavKey::Up, ArrowKeyMode::Toggle),
        Transition::None
    );
}

#[test]
fn test_right_expands_collapsed_parent_only() {
    let forest = sample_forest();

    let collapsed = forest.flatten(&[]);
    assert_eq!(
        transition(&collapsed, Some(&id("A")), NavKey::Right, ArrowKeyMode::Toggle),
        Transition::Expand(id("A"))
    );
    assert_eq!(
        transition(&collapsed, Some(&id("B")), NavKey::Right, ArrowKeyMode::Toggle),
        Transition::None
    );

    let expanded = forest.flatten(&ids(&["A"]));
    assert_eq!(
        transition(&expanded, Some(&id("A")), NavKey::Right, ArrowKeyMode::Toggle),
        Transition::None
    );
}

#[test]
fn test_left_collapses_expanded_parent_only() {
    let forest = sample_forest();
    let items = forest.flatten(&ids(&["A"]));
    assert_eq!(
        transition(&items, Some(&id("A")), NavKey::Left, ArrowKeyMode::Toggle),
        Transition::Collapse(id("A"))
    );
    // A leaf does not move focus to its parent in toggle mode.
    assert_eq!(
        transition(&items, Some(&id("A1")), NavKey::Left, ArrowKeyMode::Toggle),
        Transition::None
    );
}

#[test]
fn test_full_mode_moves_into_and_out_of_children() {
    let forest = nested_forest();
    let items = forest.flatten(&ids(&["docs", "work"]));

    assert_eq!(
        transition(&items, Some(&id("docs")), NavKey::Right, ArrowKeyMode::Full),
        Transition::Focus(id("work"))
    );
    assert_eq!(
        transition(&items, Some(&id("report")), NavKey::Left, ArrowKeyMode::Full),
        Transition::Focus(id("work"))
    );
    assert_eq!(
        transition(&items, Some(&id("cv")), NavKey::Left, ArrowKeyMode::Full),
        Transition::Focus(id("docs"))
    );
    // Expanded nodes still collapse first.
    assert_eq!(
        transition(&items, Some(&id("work")), NavKey::Left, ArrowKeyMode::Full),
        Transition::Collapse(id("work"))
    );
    // Roots have no parent.
    assert_eq!(
        transition(&items, Some(&id("music")), NavKey::Left, ArrowKeyMode::Full),
        Transition::None
    );
}

#[test]
fn test_full_mode_skips_disabled_first_child() {
    let forest = Forest::new(vec![
        Node::new("p", "P")
            .child(Node::new("c1", "C1").disabled(true))
            .child(Node::new("c2", "C2")),
    ])
    .unwrap();
    let items = forest.flatten(&ids(&["p"]));
    assert_eq!(
        transition(&items, Some(&id("p")), NavKey::Right, ArrowKeyMode::Full),
        Transition::Focus(id("c2"))
    );
}

#[test]
fn test_activate_disabled_is_noop() {
    let forest = sample_forest();
    let items = forest.flatten(&ids(&["A"]));
    assert_eq!(
        transition(&items, Some(&id("A2")), NavKey::Activate, ArrowKeyMode::Toggle),
        Transition::None
    );
    assert_eq!(
        transition(&items, Some(&id("A1")), NavKey::Activate, ArrowKeyMode::Toggle),
        Transition::Activate(id("A1"))
    );
}

// ============================================================================
// TreeView keyboard handling
// ============================================================================

#[test]
fn test_sample_down_then_up() {
    let forest = sample_forest();
    let expanded = ids(&["A"]);
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    assert_eq!(view.focused(), Some(&id("A")));

    view.on_key(&props, &down(), &mut log);
    assert_eq!(view.focused(), Some(&id("A1")));

    view.on_key(&props, &down(), &mut log);
    assert_eq!(view.focused(), Some(&id("B")));

    view.on_key(&props, &up(), &mut log);
    assert_eq!(view.focused(), Some(&id("A1")));

    assert_eq!(calls.calls(), ids(&["A1", "B", "A1"]));
    assert!(log.is_empty());
}

#[test]
fn test_down_visits_every_focusable_item_once() {
    let forest = nested_forest();
    let expanded = ids(&["docs", "work", "music"]);
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    let mut visited = vec![view.focused().cloned().unwrap()];
    while view.on_key(&props, &down(), &mut log) == EventResult::Consumed {
        visited.push(view.focused().cloned().unwrap());
    }

    assert_eq!(
        visited,
        ids(&["docs", "work", "report", "cv", "music", "live", "readme"])
    );
    // Pressing again at the end changes nothing.
    assert_eq!(view.on_key(&props, &down(), &mut log), EventResult::Ignored);
    assert_eq!(view.focused(), Some(&id("readme")));
}

#[test]
fn test_home_end_focus_once() {
    let forest = nested_forest();
    let props = TreeProps::new(&forest, &[], None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    assert_eq!(
        view.on_key(&props, &KeyCombo::key(Key::End), &mut log),
        EventResult::Consumed
    );
    assert_eq!(view.focused(), Some(&id("readme")));

    // Already at the end.
    assert_eq!(
        view.on_key(&props, &KeyCombo::key(Key::End), &mut log),
        EventResult::Ignored
    );

    view.on_key(&props, &KeyCombo::key(Key::Home), &mut log);
    assert_eq!(view.focused(), Some(&id("docs")));
    assert_eq!(calls.calls(), ids(&["readme", "docs"]));
}

#[test]
fn test_right_requests_expansion_without_moving_focus() {
    let forest = sample_forest();
    let expanded: Vec<NodeId> = Vec::new();
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    assert_eq!(view.on_key(&props, &right(), &mut log), EventResult::Consumed);
    assert_eq!(log.take(), vec![TreeEvent::ExpandedChange(ids(&["A"]))]);
    assert_eq!(view.focused(), Some(&id("A")));
    assert!(calls.calls().is_empty());
}

#[test]
fn test_right_on_expanded_or_leaf_is_noop() {
    let forest = sample_forest();
    let expanded = ids(&["A"]);
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    assert_eq!(view.on_key(&props, &right(), &mut log), EventResult::Ignored);
    view.on_key(&props, &down(), &mut log);
    assert_eq!(view.on_key(&props, &right(), &mut log), EventResult::Ignored);
    assert!(log.is_empty());
}

#[test]
fn test_left_requests_collapse_without_moving_focus() {
    let forest = nested_forest();
    let expanded = ids(&["music", "docs"]);
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    assert_eq!(view.on_key(&props, &left(), &mut log), EventResult::Consumed);
    assert_eq!(log.take(), vec![TreeEvent::ExpandedChange(ids(&["music"]))]);
    assert_eq!(view.focused(), Some(&id("docs")));

    // A leaf under an expanded parent: nothing happens.
    view.on_key(&props, &down(), &mut log);
    view.on_key(&props, &down(), &mut log);
    assert_eq!(view.focused(), Some(&id("cv")));
    assert_eq!(view.on_key(&props, &left(), &mut log), EventResult::Ignored);
    assert!(log.is_empty());
}

#[test]
fn test_navigation_uses_latest_expanded_set() {
    let forest = sample_forest();
    let calls = FocusCalls::default();
    let collapsed: Vec<NodeId> = Vec::new();
    let props = TreeProps::new(&forest, &collapsed, None);
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    view.on_key(&props, &right(), &mut log);
    let expanded = log.last_expanded().unwrap().to_vec();

    // Caller commits the new set and re-renders; the next Down sees A1.
    let props = TreeProps::new(&forest, &expanded, None);
    view.render(&props);
    view.reconcile(&props.visible(), |item| calls.handle(item.id()));
    view.on_key(&props, &down(), &mut log);
    assert_eq!(view.focused(), Some(&id("A1")));
    assert_eq!(calls.calls(), ids(&["A1"]));
}

#[test]
fn test_full_arrow_mode_on_view() {
    let forest = sample_forest();
    let expanded = ids(&["A"]);
    let props = TreeProps::new(&forest, &expanded, None);
    let calls = FocusCalls::default();
    let config = TreeConfig::default().full_arrow_keys();
    let mut view = mounted_view(config, &props, &calls);
    let mut log = EventLog::new();

    view.on_key(&props, &right(), &mut log);
    assert_eq!(view.focused(), Some(&id("A1")));
    view.on_key(&props, &left(), &mut log);
    assert_eq!(view.focused(), Some(&id("A")));
    assert!(log.is_empty());
}

#[test]
fn test_unhandled_keys_are_ignored() {
    let forest = sample_forest();
    let props = TreeProps::new(&forest, &[], None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    for key in [
        KeyCombo::key(Key::Escape),
        KeyCombo::key(Key::Char('x')),
        KeyCombo::key(Key::Tab),
        down().ctrl(),
    ] {
        assert_eq!(view.on_key(&props, &key, &mut log), EventResult::Ignored);
    }
    assert_eq!(view.focused(), Some(&id("A")));
    assert!(log.is_empty());
}

#[test]
fn test_empty_forest_ignores_every_key() {
    let forest: Forest<Node<&str>> = Forest::empty();
    let props = TreeProps::new(&forest, &[], None);
    let calls = FocusCalls::default();
    let mut view = mounted_view(TreeConfig::default(), &props, &calls);
    let mut log = EventLog::new();

    for key in [
        Key::Up,
        Key::Down,
        Key::Home,
        Key::End,
        Key::Left,
        Key::Right,
        Key::Enter,
        Key::Space,
    ] {
        assert_eq!(
            view.on_key(&props, &KeyCombo::key(key), &mut log),
            EventResult::Ignored
        );
    }
    assert_eq!(view.focused(), None);
    assert!(log.is_empty());
    assert!(calls.calls().is_empty());
}
