use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use coral::{
    BaseGraph, Graph, GraphConfig, GraphError, IndexKind, ListenableGraph, MaskSubgraph, Subgraph,
    UnionGraph, UnmodifiableGraph, UnweightedView, WeightCombiner, WeightedView,
};

fn counter_graph(config: GraphConfig) -> BaseGraph<&'static str, u32> {
    let counter = AtomicU32::new(0);
    BaseGraph::with_parts(config, IndexKind::FastLookup, move |_, _| {
        counter.fetch_add(1, Ordering::Relaxed)
    })
}

fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

fn triangle(config: GraphConfig) -> BaseGraph<&'static str, u32> {
    let mut g = counter_graph(config);
    for v in ["a", "b", "c"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge(&"a", &"b").unwrap();
    g.add_edge(&"b", &"c").unwrap();
    g.add_edge(&"c", &"a").unwrap();
    g
}

#[test]
fn unmodifiable_wrapper_rejects_every_mutation() {
    let mut view = UnmodifiableGraph::new(triangle(GraphConfig::simple()));

    assert_eq!(view.vertex_count(), 3);
    assert_eq!(view.edge_count(), 3);
    assert!(!view.graph_type().is_modifiable());

    assert!(matches!(view.add_vertex("d"), Err(GraphError::Unmodifiable)));
    assert!(matches!(
        view.add_edge(&"a", &"b"),
        Err(GraphError::Unmodifiable)
    ));
    assert!(matches!(
        view.remove_vertex(&"a"),
        Err(GraphError::Unmodifiable)
    ));
    assert!(matches!(
        view.set_edge_weight(&0, 2.0),
        Err(GraphError::Unmodifiable)
    ));
    // The wrapped graph is untouched and can be taken back out.
    let g = view.into_inner();
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn weighted_view_overlays_weights_on_an_unweighted_graph() {
    let mut g = triangle(GraphConfig::simple());
    {
        let mut view: WeightedView<u32, _> = WeightedView::new(&mut g);
        assert!(view.graph_type().is_weighted());
        assert_eq!(view.edge_weight(&0).unwrap(), coral::DEFAULT_EDGE_WEIGHT);

        view.set_edge_weight(&0, 3.5).unwrap();
        assert_eq!(view.edge_weight(&0).unwrap(), 3.5);
        assert_eq!(view.edge_weight(&1).unwrap(), coral::DEFAULT_EDGE_WEIGHT);

        assert!(matches!(
            view.set_edge_weight(&99, 1.0),
            Err(GraphError::EdgeNotMember)
        ));

        // Structural writes reach the backing graph.
        view.add_vertex("d").unwrap();
        view.add_edge(&"c", &"d").unwrap();
    }
    // The unweighted backing never saw the weight.
    assert_eq!(g.edge_weight(&0).unwrap(), coral::DEFAULT_EDGE_WEIGHT);
    assert!(g.contains_vertex(&"d"));
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn weighted_view_writes_through_to_a_weighted_backing() {
    let mut g = triangle(GraphConfig::simple().weighted());
    let mut view: WeightedView<u32, _> = WeightedView::new(&mut g);
    view.set_edge_weight(&1, 7.0).unwrap();
    drop(view);

    assert_eq!(g.edge_weight(&1).unwrap(), 7.0);
}

#[test]
fn weighted_view_forgets_weights_of_removed_edges() {
    let mut g = triangle(GraphConfig::simple());
    let mut view: WeightedView<u32, _> = WeightedView::new(&mut g);
    view.set_edge_weight(&0, 9.0).unwrap();
    assert!(view.remove_edge(&0).unwrap());

    // Same token re-added: the old overlay entry must not resurface.
    view.add_edge_with(&"a", &"b", 0).unwrap();
    assert_eq!(view.edge_weight(&0).unwrap(), coral::DEFAULT_EDGE_WEIGHT);
}

#[test]
fn unweighted_view_flattens_weights() {
    let mut g = triangle(GraphConfig::simple().weighted());
    g.set_edge_weight(&0, 42.0).unwrap();

    let mut view = UnweightedView::new(&mut g);
    assert!(!view.graph_type().is_weighted());
    assert_eq!(view.edge_weight(&0).unwrap(), coral::DEFAULT_EDGE_WEIGHT);
    assert!(matches!(
        view.set_edge_weight(&0, 2.0),
        Err(GraphError::NotWeighted)
    ));
    assert!(matches!(view.edge_weight(&99), Err(GraphError::EdgeNotMember)));
    drop(view);

    // Flattening is presentation only; the backing weight is intact.
    assert_eq!(g.edge_weight(&0).unwrap(), 42.0);
}

#[test]
fn mask_hides_vertices_and_their_incident_edges() {
    let g = triangle(GraphConfig::simple());
    let view = MaskSubgraph::new(&g, |v: &&str| *v == "c", |_: &u32| false);

    assert_eq!(sorted(view.vertex_set()), vec!["a", "b"]);
    assert!(!view.contains_vertex(&"c"));
    // Edges 1 (b-c) and 2 (c-a) touch the masked vertex.
    assert_eq!(view.edge_set(), vec![0]);
    assert!(!view.contains_edge(&1));
    assert_eq!(view.degree_of(&"a").unwrap(), 1);
    assert!(matches!(
        view.degree_of(&"c"),
        Err(GraphError::VertexNotMember)
    ));
}

#[test]
fn mask_recomputes_against_the_live_backing() {
    let mut g = triangle(GraphConfig::simple());
    g.add_vertex("d").unwrap();
    {
        let view = MaskSubgraph::new(&g, |_: &&str| false, |e: &u32| *e == 0);
        assert_eq!(sorted(view.edge_set()), vec![1, 2]);
        assert_eq!(view.vertex_count(), 4);
        assert_eq!(view.get_edge(&"a", &"b"), None);
        assert_eq!(view.get_edge(&"b", &"c"), Some(1));
    }
    g.remove_edge(&1).unwrap();
    let view = MaskSubgraph::new(&g, |_: &&str| false, |e: &u32| *e == 0);
    assert_eq!(view.edge_set(), vec![2]);
}

#[test]
fn mask_counts_undirected_loops_twice() {
    let mut g = counter_graph(GraphConfig::pseudograph());
    g.add_vertex("a").unwrap();
    g.add_vertex("b").unwrap();
    g.add_edge(&"a", &"a").unwrap();
    g.add_edge(&"a", &"b").unwrap();

    let view = MaskSubgraph::new(&g, |v: &&str| *v == "b", |_: &u32| false);
    assert_eq!(view.degree_of(&"a").unwrap(), 2);
}

#[test]
fn union_merges_vertices_and_deduplicates_edge_tokens() {
    let mut g1 = counter_graph(GraphConfig::directed_simple());
    for v in ["a", "b"] {
        g1.add_vertex(v).unwrap();
    }
    g1.add_edge(&"a", &"b").unwrap();

    let mut g2 = counter_graph(GraphConfig::directed_simple());
    for v in ["a", "b", "c"] {
        g2.add_vertex(v).unwrap();
    }
    g2.add_edge_with(&"b", &"c", 1).unwrap();
    // Token 0 exists in both inputs with the same endpoints.
    g2.add_edge_with(&"a", &"b", 0).unwrap();

    let union = UnionGraph::new(&g1, &g2);
    assert_eq!(sorted(union.vertex_set()), vec!["a", "b", "c"]);
    assert_eq!(union.vertex_count(), 3);
    assert_eq!(union.edge_count(), 2);
    assert!(union.contains_edge(&0));
    assert!(union.contains_edge(&1));
    assert_eq!(union.out_degree_of(&"b").unwrap(), 1);
    assert_eq!(union.in_degree_of(&"b").unwrap(), 1);
}

#[test]
fn union_combines_weights_of_shared_edges() {
    let mut g1 = counter_graph(GraphConfig::directed_simple().weighted());
    for v in ["a", "b"] {
        g1.add_vertex(v).unwrap();
    }
    g1.add_edge(&"a", &"b").unwrap();
    g1.set_edge_weight(&0, 2.0).unwrap();

    let mut g2 = counter_graph(GraphConfig::directed_simple().weighted());
    for v in ["a", "b"] {
        g2.add_vertex(v).unwrap();
    }
    g2.add_edge_with(&"a", &"b", 0).unwrap();
    g2.set_edge_weight(&0, 5.0).unwrap();
    g2.add_vertex("c").unwrap();
    g2.add_edge_with(&"b", &"c", 1).unwrap();
    g2.set_edge_weight(&1, 3.0).unwrap();

    let sum = UnionGraph::new(&g1, &g2);
    assert_eq!(sum.edge_weight(&0).unwrap(), 7.0);
    // An edge present on one side only carries its own weight.
    assert_eq!(sum.edge_weight(&1).unwrap(), 3.0);

    let max = UnionGraph::with_combiner(&g1, &g2, WeightCombiner::max());
    assert_eq!(max.edge_weight(&0).unwrap(), 5.0);

    let first = UnionGraph::with_combiner(&g1, &g2, WeightCombiner::first());
    assert_eq!(first.edge_weight(&0).unwrap(), 2.0);
}

#[test]
fn mixed_direction_union_refuses_degree_and_any_mutation() {
    let mut directed = counter_graph(GraphConfig::directed_simple());
    directed.add_vertex("a").unwrap();
    let mut undirected = counter_graph(GraphConfig::simple());
    undirected.add_vertex("a").unwrap();

    let mut union = UnionGraph::new(&directed, &undirected);
    assert!(union.graph_type().is_mixed());
    assert!(matches!(
        union.degree_of(&"a"),
        Err(GraphError::UnsupportedForKind { .. })
    ));
    assert!(matches!(union.add_vertex("b"), Err(GraphError::Unmodifiable)));
    assert!(matches!(
        union.remove_vertex(&"a"),
        Err(GraphError::Unmodifiable)
    ));
}

#[test]
fn subgraph_none_edges_means_induced() {
    let backing = Rc::new(RefCell::new(triangle(GraphConfig::simple())));
    let sub = Subgraph::new(Rc::clone(&backing), Some(vec!["a", "b", "ghost"]), None);

    // "ghost" is not a backing member and is dropped; only a-b survives the
    // endpoint filter.
    assert_eq!(sorted(sub.vertex_set()), vec!["a", "b"]);
    assert_eq!(sub.edge_set(), vec![0]);
    assert_eq!(sub.degree_of(&"a").unwrap(), 1);
}

#[test]
fn subgraph_explicit_edges_are_endpoint_checked() {
    let backing = Rc::new(RefCell::new(triangle(GraphConfig::simple())));
    // Edge 1 is b-c but c is outside the vertex subset.
    let sub = Subgraph::new(Rc::clone(&backing), Some(vec!["a", "b"]), Some(vec![0, 1]));
    assert_eq!(sub.edge_set(), vec![0]);
}

#[test]
fn subgraph_add_only_widens_within_the_backing() {
    let backing = Rc::new(RefCell::new(triangle(GraphConfig::simple())));
    let mut sub = Subgraph::new(Rc::clone(&backing), Some(vec!["a"]), None);

    assert!(matches!(sub.add_vertex("d"), Err(GraphError::VertexNotMember)));
    assert!(sub.add_vertex("b").unwrap());
    assert!(!sub.add_vertex("b").unwrap());

    // Pulls the existing backing edge in; never creates a new one.
    assert_eq!(sub.add_edge(&"a", &"b").unwrap(), Some(0));
    assert_eq!(sub.add_edge(&"a", &"b").unwrap(), None);
    assert_eq!(backing.borrow().edge_count(), 3);

    sub.add_vertex("c").unwrap();
    assert!(matches!(
        // Token 1 is b-c, not a-c.
        sub.add_edge_with(&"a", &"c", 1),
        Err(GraphError::EdgeNotMember)
    ));
    assert!(sub.add_edge_with(&"c", &"b", 1).unwrap());
}

#[test]
fn subgraph_removal_never_touches_the_backing() {
    let backing = Rc::new(RefCell::new(triangle(GraphConfig::simple())));
    let mut sub = Subgraph::new(Rc::clone(&backing), None, None);

    assert!(sub.remove_vertex(&"a").unwrap());
    assert_eq!(sub.vertex_count(), 2);
    assert_eq!(sub.edge_set(), vec![1]);

    assert_eq!(backing.borrow().vertex_count(), 3);
    assert_eq!(backing.borrow().edge_count(), 3);
}

#[test]
fn listening_subgraph_follows_backing_removals() {
    let backing = Rc::new(RefCell::new(ListenableGraph::new(triangle(
        GraphConfig::simple(),
    ))));
    let sub = Subgraph::listening(Rc::clone(&backing), None, None);
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 3);

    backing.borrow_mut().remove_vertex(&"c").unwrap();

    assert_eq!(sorted(sub.vertex_set()), vec!["a", "b"]);
    assert_eq!(sub.edge_set(), vec![0]);
    assert!(!sub.contains_edge(&1));
}

#[test]
fn dropping_a_listening_subgraph_unregisters_it() {
    let backing = Rc::new(RefCell::new(ListenableGraph::new(triangle(
        GraphConfig::simple(),
    ))));
    {
        let _sub = Subgraph::listening(Rc::clone(&backing), None, None);
        assert_eq!(backing.borrow().listener_count(), 1);
    }
    assert_eq!(backing.borrow().listener_count(), 0);
    // Mutating afterwards must not trip over the dead subscription.
    backing.borrow_mut().remove_vertex(&"a").unwrap();
}

#[test]
fn subgraph_weight_writes_reach_the_backing() {
    let backing = Rc::new(RefCell::new(triangle(GraphConfig::simple().weighted())));
    let mut sub = Subgraph::new(Rc::clone(&backing), None, None);

    sub.set_edge_weight(&0, 6.0).unwrap();
    assert_eq!(backing.borrow().edge_weight(&0).unwrap(), 6.0);
    assert_eq!(sub.edge_weight(&0).unwrap(), 6.0);
}
