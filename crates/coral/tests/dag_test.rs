use coral::{Dag, Graph, GraphConfig, GraphError, IndexKind};

fn positions(dag: &Dag<&'static str, u32>) -> Vec<&'static str> {
    dag.topological_vertices()
}

fn assert_before(dag: &Dag<&'static str, u32>, earlier: &str, later: &str) {
    let order = positions(dag);
    let e = order.iter().position(|v| *v == earlier).unwrap();
    let l = order.iter().position(|v| *v == later).unwrap();
    assert!(e < l, "expected {earlier} before {later} in {order:?}");
}

fn diamond() -> Dag<&'static str, u32> {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["a", "b", "c", "d"] {
        dag.add_vertex(v).unwrap();
    }
    dag.add_edge_with(&"a", &"b", 0).unwrap();
    dag.add_edge_with(&"a", &"c", 1).unwrap();
    dag.add_edge_with(&"b", &"d", 2).unwrap();
    dag.add_edge_with(&"c", &"d", 3).unwrap();
    dag
}

#[test]
fn insertion_order_is_the_initial_topological_order() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["x", "y", "z"] {
        dag.add_vertex(v).unwrap();
    }
    assert_eq!(positions(&dag), vec!["x", "y", "z"]);
}

#[test]
fn forward_edges_do_not_reorder() {
    let dag = diamond();
    assert_eq!(positions(&dag), vec!["a", "b", "c", "d"]);
}

#[test]
fn back_edges_reorder_only_the_affected_region() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["a", "b", "c", "d", "e"] {
        dag.add_vertex(v).unwrap();
    }
    // "d" must move ahead of "b"; "a" and "e" are outside the window.
    dag.add_edge_with(&"d", &"b", 0).unwrap();

    assert_before(&dag, "d", "b");
    let order = positions(&dag);
    assert_eq!(order[0], "a");
    assert_eq!(order[4], "e");
}

#[test]
fn two_vertex_swap_keeps_both_vertices_in_the_order() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    dag.add_vertex("a").unwrap();
    dag.add_vertex("b").unwrap();
    dag.add_edge_with(&"b", &"a", 0).unwrap();

    // The moved vertices trade keys; neither may drop out of the order map.
    assert_eq!(positions(&dag), vec!["b", "a"]);
    assert_eq!(dag.topological_vertices().len(), dag.vertex_count());
}

#[test]
fn reorders_never_lose_vertices() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["a", "b", "c", "d", "e", "f"] {
        dag.add_vertex(v).unwrap();
    }
    for (i, (s, t)) in [("f", "a"), ("e", "b"), ("d", "c"), ("c", "f")]
        .into_iter()
        .enumerate()
    {
        dag.add_edge_with(&s, &t, i as u32).unwrap();
        assert_eq!(
            dag.topological_vertices().len(),
            dag.vertex_count(),
            "after inserting {s} -> {t}"
        );
    }
    for (s, t) in [("f", "a"), ("e", "b"), ("d", "c"), ("c", "f")] {
        assert_before(&dag, s, t);
    }
}

#[test]
fn order_stays_consistent_through_chained_reorders() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["a", "b", "c", "d", "e", "f"] {
        dag.add_vertex(v).unwrap();
    }
    dag.add_edge_with(&"e", &"b", 0).unwrap();
    dag.add_edge_with(&"f", &"e", 1).unwrap();
    dag.add_edge_with(&"b", &"c", 2).unwrap();
    dag.add_edge_with(&"d", &"a", 3).unwrap();

    for (s, t) in [("e", "b"), ("f", "e"), ("b", "c"), ("d", "a")] {
        assert_before(&dag, s, t);
    }
}

#[test]
fn cycle_closing_edges_are_rejected_without_side_effects() {
    let mut dag = diamond();
    let before = positions(&dag);

    let err = dag.add_edge_with(&"d", &"a", 9).unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected));
    assert_eq!(dag.edge_count(), 4);
    assert!(!dag.contains_edge(&9));
    assert_eq!(positions(&dag), before);

    // A two-vertex cycle through the short path.
    assert!(matches!(
        dag.add_edge_with(&"b", &"a", 9),
        Err(GraphError::CycleDetected)
    ));
}

#[test]
fn self_loops_are_never_allowed() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    dag.add_vertex("a").unwrap();
    assert!(matches!(
        dag.add_edge(&"a", &"a"),
        Err(GraphError::SelfLoopsNotAllowed)
    ));
}

#[test]
fn configs_are_validated() {
    let undirected = Dag::<&str, u32>::with_config(GraphConfig::simple());
    assert!(matches!(undirected, Err(GraphError::Configuration { .. })));

    let loops = Dag::<&str, u32>::with_config(GraphConfig::default().with_self_loops());
    assert!(matches!(loops, Err(GraphError::Configuration { .. })));

    assert!(Dag::<&str, u32>::with_config(GraphConfig::default().weighted()).is_ok());
}

#[test]
fn ancestors_and_descendants_exclude_the_vertex_itself() {
    let dag = diamond();

    let mut anc = dag.ancestors(&"d").unwrap();
    anc.sort();
    assert_eq!(anc, vec!["a", "b", "c"]);

    let mut desc = dag.descendants(&"a").unwrap();
    desc.sort();
    assert_eq!(desc, vec!["b", "c", "d"]);

    assert_eq!(dag.ancestors(&"a").unwrap(), Vec::<&str>::new());
    assert!(matches!(
        dag.ancestors(&"ghost"),
        Err(GraphError::VertexNotMember)
    ));
}

#[test]
fn ancestors_after_a_rejected_cycle_are_unchanged() {
    let mut dag: Dag<&'static str, u32> = Dag::new();
    for v in ["a", "b", "c"] {
        dag.add_vertex(v).unwrap();
    }
    dag.add_edge_with(&"a", &"b", 0).unwrap();
    dag.add_edge_with(&"b", &"c", 1).unwrap();

    assert!(matches!(
        dag.add_edge(&"c", &"a"),
        Err(GraphError::CycleDetected)
    ));
    let mut anc = dag.ancestors(&"c").unwrap();
    anc.sort();
    assert_eq!(anc, vec!["a", "b"]);
}

#[test]
fn removing_a_vertex_keeps_the_remaining_order() {
    let mut dag = diamond();
    assert!(dag.remove_vertex(&"b").unwrap());

    assert_eq!(positions(&dag), vec!["a", "c", "d"]);
    assert_eq!(dag.edge_count(), 2);
    assert_before(&dag, "a", "c");
    assert_before(&dag, "c", "d");
}

#[test]
fn cursor_walks_the_topological_order() {
    let dag = diamond();
    let mut cursor = dag.topological_cursor();

    let mut seen = Vec::new();
    while let Some(v) = cursor.next(&dag).unwrap() {
        seen.push(v);
    }
    assert_eq!(seen, positions(&dag));
    // Exhausted cursors stay exhausted.
    assert_eq!(cursor.next(&dag).unwrap(), None);
}

#[test]
fn cursor_fails_fast_after_outside_mutation() {
    let mut dag = diamond();
    let mut cursor = dag.topological_cursor();
    assert_eq!(cursor.next(&dag).unwrap(), Some("a"));

    dag.add_edge_with(&"b", &"c", 9).unwrap();

    assert!(matches!(
        cursor.next(&dag),
        Err(GraphError::ConcurrentModification)
    ));
    assert!(matches!(
        cursor.remove_current(&mut dag),
        Err(GraphError::ConcurrentModification)
    ));

    let mut cursor = dag.topological_cursor();
    assert_eq!(cursor.next(&dag).unwrap(), Some("a"));
    dag.remove_vertex(&"d").unwrap();
    assert!(matches!(
        cursor.next(&dag),
        Err(GraphError::ConcurrentModification)
    ));
}

#[test]
fn cursor_remove_current_keeps_iterating() {
    let mut dag = diamond();
    let mut cursor = dag.topological_cursor();

    // Drain the whole graph in topological order.
    let mut drained = Vec::new();
    while let Some(v) = cursor.next(&dag).unwrap() {
        drained.push(v);
        assert!(cursor.remove_current(&mut dag).unwrap());
    }
    assert_eq!(drained, vec!["a", "b", "c", "d"]);
    assert_eq!(dag.vertex_count(), 0);
    assert_eq!(dag.edge_count(), 0);

    // Nothing yielded yet, nothing to remove.
    let mut fresh = dag.topological_cursor();
    assert!(!fresh.remove_current(&mut dag).unwrap());
}

#[test]
fn colliding_factory_tokens_leave_the_order_and_cursors_alone() {
    // A factory that always hands out the same token: the second add_edge
    // is a no-op and must not reorder or invalidate anything.
    let mut dag: Dag<&'static str, u32> =
        Dag::with_parts(GraphConfig::default(), IndexKind::FastLookup, |_, _| 7).unwrap();
    for v in ["a", "b", "c"] {
        dag.add_vertex(v).unwrap();
    }
    assert_eq!(dag.add_edge(&"c", &"b").unwrap(), Some(7));

    let before = positions(&dag);
    let mut cursor = dag.topological_cursor();

    assert_eq!(dag.add_edge(&"b", &"a").unwrap(), None);
    assert_eq!(positions(&dag), before);
    assert_eq!(cursor.next(&dag).unwrap(), Some("a"));
}

#[test]
fn multi_edge_dag_accepts_parallel_edges() {
    let mut dag: Dag<&'static str, u32> =
        Dag::with_config(GraphConfig::directed_multigraph()).unwrap();
    dag.add_vertex("a").unwrap();
    dag.add_vertex("b").unwrap();

    assert!(dag.add_edge_with(&"a", &"b", 0).unwrap());
    assert!(dag.add_edge_with(&"a", &"b", 1).unwrap());
    assert_eq!(dag.edge_count(), 2);
    // The reverse orientation still closes a cycle.
    assert!(matches!(
        dag.add_edge_with(&"b", &"a", 2),
        Err(GraphError::CycleDetected)
    ));
}
