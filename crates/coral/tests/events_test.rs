use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use coral::{
    BaseGraph, Graph, GraphConfig, GraphEvent, GraphListener, IndexKind, ListenableGraph,
};

struct Recorder {
    events: Vec<GraphEvent<&'static str, u32>>,
}

impl GraphListener<&'static str, u32> for Recorder {
    fn on_graph_event(&mut self, event: &GraphEvent<&'static str, u32>) {
        self.events.push(event.clone());
    }
}

fn listenable() -> ListenableGraph<&'static str, u32, BaseGraph<&'static str, u32>> {
    let counter = AtomicU32::new(0);
    ListenableGraph::new(BaseGraph::with_parts(
        GraphConfig::directed_simple(),
        IndexKind::FastLookup,
        move |_, _| counter.fetch_add(1, Ordering::Relaxed),
    ))
}

fn subscribe(
    g: &ListenableGraph<&'static str, u32, BaseGraph<&'static str, u32>>,
) -> Rc<RefCell<Recorder>> {
    let recorder = Rc::new(RefCell::new(Recorder { events: Vec::new() }));
    let clone = Rc::clone(&recorder);
    let listener: Rc<RefCell<dyn GraphListener<&'static str, u32>>> = clone;
    g.add_listener(Rc::downgrade(&listener));
    recorder
}

#[test]
fn successful_mutations_are_published() {
    let mut g = listenable();
    let recorder = subscribe(&g);

    g.add_vertex("a").unwrap();
    g.add_vertex("b").unwrap();
    g.add_edge(&"a", &"b").unwrap();
    g.remove_edge(&0).unwrap();

    let events = &recorder.borrow().events;
    assert_eq!(
        *events,
        vec![
            GraphEvent::VertexAdded("a"),
            GraphEvent::VertexAdded("b"),
            GraphEvent::EdgeAdded {
                edge: 0,
                source: "a",
                target: "b"
            },
            GraphEvent::EdgeRemoved {
                edge: 0,
                source: "a",
                target: "b"
            },
        ]
    );
}

#[test]
fn no_op_mutations_publish_nothing() {
    let mut g = listenable();
    g.add_vertex("a").unwrap();
    g.add_vertex("b").unwrap();
    g.add_edge(&"a", &"b").unwrap();

    let recorder = subscribe(&g);
    g.add_vertex("a").unwrap();
    g.add_edge(&"a", &"b").unwrap();
    g.remove_edge(&42).unwrap();
    g.remove_vertex(&"ghost").unwrap();

    assert!(recorder.borrow().events.is_empty());
}

#[test]
fn vertex_removal_publishes_the_cascade_first() {
    let mut g = listenable();
    for v in ["hub", "a", "b"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&"a", &"hub").unwrap();
    g.add_edge(&"hub", &"b").unwrap();

    let recorder = subscribe(&g);
    g.remove_vertex(&"hub").unwrap();

    let events = recorder.borrow().events.clone();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], GraphEvent::EdgeRemoved { .. }));
    assert!(matches!(events[1], GraphEvent::EdgeRemoved { .. }));
    assert_eq!(events[2], GraphEvent::VertexRemoved("hub"));
}

#[test]
fn dropped_listeners_are_pruned() {
    let mut g = listenable();
    let kept = subscribe(&g);
    {
        let _dropped = subscribe(&g);
        assert_eq!(g.listener_count(), 2);
    }
    assert_eq!(g.listener_count(), 1);

    g.add_vertex("a").unwrap();
    assert_eq!(kept.borrow().events.len(), 1);
}

#[test]
fn failed_mutations_publish_nothing() {
    let mut g = listenable();
    g.add_vertex("a").unwrap();
    let recorder = subscribe(&g);

    assert!(g.add_edge(&"a", &"missing").is_err());
    assert!(g.add_edge(&"a", &"a").is_err());
    assert!(recorder.borrow().events.is_empty());
}
