//! Shared fixtures for tree view tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use treeview::prelude::*;

/// Focus handle that records which ids were focused, in order.
pub struct RecordingHandle {
    id: NodeId,
    calls: Rc<RefCell<Vec<NodeId>>>,
}

impl Focusable for RecordingHandle {
    fn focus(&mut self) {
        self.calls.borrow_mut().push(self.id.clone());
    }
}

/// Shared log of focus calls across all handles of one view.
#[derive(Clone, Default)]
pub struct FocusCalls(Rc<RefCell<Vec<NodeId>>>);

impl FocusCalls {
    pub fn handle(&self, id: &NodeId) -> RecordingHandle {
        RecordingHandle {
            id: id.clone(),
            calls: Rc::clone(&self.0),
        }
    }

    pub fn calls(&self) -> Vec<NodeId> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

pub fn ids(list: &[&str]) -> Vec<NodeId> {
    list.iter().map(|s| NodeId::from(*s)).collect()
}

/// `[A{children:[A1, A2(disabled)]}, B]`
pub fn sample_forest() -> Forest<Node<&'static str>> {
    Forest::new(vec![
        Node::new("A", "A")
            .child(Node::new("A1", "A1"))
            .child(Node::new("A2", "A2").disabled(true)),
        Node::new("B", "B"),
    ])
    .unwrap()
}

/// ```text
/// docs
///   work
///     report
///     slides (disabled)
///   cv
/// music
///   live
/// readme
/// ```
pub fn nested_forest() -> Forest<Node<&'static str>> {
    Forest::new(vec![
        Node::new("docs", "Documents")
            .child(
                Node::new("work", "Work")
                    .child(Node::new("report", "report.pdf"))
                    .child(Node::new("slides", "slides.key").disabled(true)),
            )
            .child(Node::new("cv", "cv.pdf")),
        Node::new("music", "Music").child(Node::new("live", "Live")),
        Node::new("readme", "README"),
    ])
    .unwrap()
}

/// Render once and mount a recording handle for every visible item.
pub fn mounted_view<T: TreeItem>(
    config: TreeConfig,
    props: &TreeProps<'_, T>,
    calls: &FocusCalls,
) -> TreeView<RecordingHandle> {
    let mut view = TreeView::new(config);
    view.render(props);
    let items = props.visible();
    view.reconcile(&items, |item| calls.handle(item.id()));
    view
}

pub fn down() -> KeyCombo {
    KeyCombo::key(Key::Down)
}

pub fn up() -> KeyCombo {
    KeyCombo::key(Key::Up)
}

pub fn left() -> KeyCombo {
    KeyCombo::key(Key::Left)
}

pub fn right() -> KeyCombo {
    KeyCombo::key(Key::Right)
}
