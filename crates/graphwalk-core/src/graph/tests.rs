use super::presets::{binary_tree, complete, cycle, grid, linear, star};
use super::*;
use crate::error::GraphwalkError;

fn s(id: &str) -> String {
    id.to_string()
}

fn names(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph: Graph = Graph::new();
    graph.add_node(s("A"));
    graph.add_node(s("A"));
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains(&s("A")));
    assert!(graph.neighbors(&s("A")).is_empty());
}

#[test]
fn test_add_edge_adds_missing_endpoints() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("A"), s("B"));
    assert_eq!(names(graph.nodes()), vec!["A", "B"]);
    assert_eq!(names(graph.neighbors(&s("A"))), vec!["B"]);
    assert_eq!(names(graph.neighbors(&s("B"))), vec!["A"]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_twice_matches_once() {
    let mut once: Graph = Graph::new();
    once.add_edge(s("A"), s("B"));

    let mut twice: Graph = Graph::new();
    twice.add_edge(s("A"), s("B"));
    twice.add_edge(s("A"), s("B"));
    twice.add_edge(s("B"), s("A"));

    assert_eq!(once, twice);
    assert_eq!(twice.edges(), &[(s("A"), s("B"))]);
}

#[test]
fn test_adjacency_keeps_insertion_order() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("A"), s("D"));
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("C"), s("A"));
    assert_eq!(names(graph.neighbors(&s("A"))), vec!["D", "B", "C"]);
}

#[test]
fn test_edge_keys_are_canonical() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("C"), s("A"));
    graph.add_edge(s("B"), s("A"));
    assert_eq!(graph.edges(), &[(s("A"), s("C")), (s("A"), s("B"))]);
}

#[test]
fn test_adjacency_is_symmetric() {
    let graph = grid(3, 4);
    for a in graph.nodes() {
        for b in graph.nodes() {
            assert_eq!(
                graph.neighbors(a).contains(b),
                graph.neighbors(b).contains(a),
                "asymmetric pair {a} {b}"
            );
        }
    }
}

#[test]
fn test_edges_match_adjacency() {
    let graph = complete(5);
    let adjacent_pairs: usize = graph.nodes().iter().map(|n| graph.degree(n)).sum();
    assert_eq!(adjacent_pairs, 2 * graph.edge_count());
    for (a, b) in graph.edges() {
        assert!(a < b);
        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
    }
}

#[test]
fn test_self_loop_is_rejected() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("A"), s("A"));
    assert!(graph.contains(&s("A")));
    assert_eq!(graph.degree(&s("A")), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge() {
    let mut graph = linear(3);
    graph.remove_edge(&s("B"), &s("A"));
    assert!(!graph.has_edge(&s("A"), &s("B")));
    assert_eq!(names(graph.neighbors(&s("B"))), vec!["C"]);
    assert_eq!(graph.edges(), &[(s("B"), s("C"))]);

    // Second removal and unknown nodes are no-ops
    graph.remove_edge(&s("A"), &s("B"));
    graph.remove_edge(&s("X"), &s("Y"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_remove_node_cascades_edges() {
    let mut graph = star(4);
    graph.remove_node(&s("A"));
    assert_eq!(names(graph.nodes()), vec!["B", "C", "D"]);
    assert_eq!(graph.edge_count(), 0);
    for leaf in graph.nodes() {
        assert_eq!(graph.degree(leaf), 0);
    }

    graph.remove_node(&s("A"));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_absent_node_reads_as_isolated() {
    let graph = linear(2);
    assert!(graph.neighbors(&s("Z")).is_empty());
    assert_eq!(graph.degree(&s("Z")), 0);
    assert!(!graph.has_edge(&s("Z"), &s("A")));
}

#[test]
fn test_is_connected() {
    let empty: Graph = Graph::new();
    assert!(empty.is_connected());
    assert!(linear(5).is_connected());
    assert!(grid(2, 3).is_connected());

    let mut split: Graph = Graph::new();
    split.add_node(s("A"));
    split.add_node(s("B"));
    assert!(!split.is_connected());
}

#[test]
fn test_clone_is_independent() {
    let graph = cycle(4);
    let mut copy = graph.clone();
    copy.remove_node(&s("A"));
    copy.add_edge(s("B"), s("D"));

    assert_eq!(graph.node_count(), 4);
    assert_eq!(names(graph.neighbors(&s("B"))), vec!["A", "C"]);
    assert!(!graph.has_edge(&s("B"), &s("D")));
}

#[test]
fn test_clone_preserves_adjacency_order() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("A"), s("C"));
    graph.add_edge(s("A"), s("B"));
    let copy = graph.clone();
    assert_eq!(names(copy.neighbors(&s("A"))), vec!["C", "B"]);
}

#[test]
fn test_clear() {
    let mut graph = complete(3);
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors(&s("A")).is_empty());
}

#[test]
fn test_data_round_trip_preserves_adjacency_order() {
    let mut graph: Graph = Graph::new();
    graph.add_edge(s("C"), s("A"));
    graph.add_edge(s("A"), s("B"));
    graph.add_edge(s("B"), s("C"));
    graph.add_node(s("D"));

    let data = graph.to_data();
    assert_eq!(names(&data.nodes), vec!["C", "A", "B", "D"]);
    assert_eq!(
        data.edges,
        vec![(s("A"), s("C")), (s("A"), s("B")), (s("B"), s("C"))]
    );

    let restored = Graph::from(data);
    for node in graph.nodes() {
        assert_eq!(restored.neighbors(node), graph.neighbors(node));
    }
    assert_eq!(restored, graph);
}

#[test]
fn test_load_data_clears_previous_contents() {
    let mut graph = linear(4);
    graph.load_data(GraphData {
        nodes: vec![s("X")],
        edges: vec![(s("Y"), s("X"))],
    });
    assert_eq!(names(graph.nodes()), vec!["X", "Y"]);
    assert_eq!(graph.edges(), &[(s("X"), s("Y"))]);
    assert!(!graph.contains(&s("A")));
}

#[test]
fn test_json_round_trip() {
    let json = r#"{"nodes":["A","B","C"],"edges":[["B","C"],["A","B"]]}"#;
    let graph: Graph = Graph::from_json_str(json).unwrap();
    assert_eq!(names(graph.neighbors(&s("B"))), vec!["C", "A"]);

    let text = graph.to_json_string().unwrap();
    let reparsed: Graph = Graph::from_json_str(&text).unwrap();
    assert_eq!(reparsed, graph);
}

#[test]
fn test_json_missing_fields_default_to_empty() {
    let graph: Graph = Graph::from_json_str(r#"{"edges":[["A","B"]]}"#).unwrap();
    assert_eq!(names(graph.nodes()), vec!["A", "B"]);

    let empty: Graph = Graph::from_json_str("{}").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_json_rejects_malformed_document() {
    let result: crate::error::Result<Graph> = Graph::from_json_str(r#"{"nodes": 3}"#);
    assert!(matches!(result, Err(GraphwalkError::Json(_))));
}

#[test]
fn test_integer_node_ids() {
    let mut graph: Graph<u32> = Graph::new();
    graph.add_edge(10, 2);
    graph.add_edge(2, 7);
    assert_eq!(graph.edges(), &[(2, 10), (2, 7)]);
    assert_eq!(graph.neighbors(&2), &[10, 7]);
}

#[test]
fn test_integer_ids_from_json_without_nodes() {
    let graph: Graph<u32> = Graph::from_json_str(r#"{"edges":[[4,1],[1,9]]}"#).unwrap();
    assert_eq!(graph.nodes(), &[4, 1, 9]);
    assert_eq!(graph.neighbors(&1), &[4, 9]);

    let data: GraphData<u32> = serde_json::from_str(r#"{"nodes":[3]}"#).unwrap();
    assert!(data.edges.is_empty());
}

#[test]
fn test_node_label() {
    assert_eq!(node_label(0), "A");
    assert_eq!(node_label(25), "Z");
    assert_eq!(node_label(26), "AA");
    assert_eq!(node_label(27), "AB");
    assert_eq!(node_label(701), "ZZ");
    assert_eq!(node_label(702), "AAA");
}

#[test]
fn test_preset_shapes() {
    let line = linear(5);
    assert_eq!(names(line.nodes()), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(line.edge_count(), 4);

    let tree = binary_tree(3);
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.edge_count(), 6);
    assert_eq!(names(tree.neighbors(&s("A"))), vec!["B", "C"]);
    assert_eq!(names(tree.neighbors(&s("B"))), vec!["A", "D", "E"]);

    assert_eq!(complete(4).edge_count(), 6);

    let ring = cycle(5);
    assert_eq!(ring.edge_count(), 5);
    assert_eq!(names(ring.neighbors(&s("A"))), vec!["B", "E"]);

    let hub = star(6);
    assert_eq!(hub.degree(&s("A")), 5);
    assert_eq!(names(hub.neighbors(&s("A"))), vec!["B", "C", "D", "E", "F"]);

    let cells = grid(3, 3);
    assert_eq!(cells.node_count(), 9);
    assert_eq!(cells.edge_count(), 12);
    assert_eq!(names(cells.neighbors(&s("0,0"))), vec!["0,1", "1,0"]);
    assert_eq!(
        names(cells.neighbors(&s("1,1"))),
        vec!["0,1", "1,0", "1,2", "2,1"]
    );
}

#[test]
fn test_degenerate_presets() {
    assert!(linear(0).is_empty());
    assert!(binary_tree(0).is_empty());
    assert_eq!(binary_tree(64).node_count(), (1 << MAX_TREE_DEPTH) - 1);
    assert_eq!(binary_tree(u32::MAX), binary_tree(MAX_TREE_DEPTH));

    let single = cycle(1);
    assert_eq!(single.node_count(), 1);
    assert_eq!(single.edge_count(), 0);

    let pair = cycle(2);
    assert_eq!(pair.edge_count(), 1);

    assert_eq!(names(star(0).nodes()), vec!["A"]);
}

#[test]
fn test_preset_parse_and_build() {
    assert_eq!("binary-tree".parse::<Preset>().unwrap(), Preset::BinaryTree);
    assert_eq!("GRID".parse::<Preset>().unwrap(), Preset::Grid);
    assert!(matches!(
        "wheel".parse::<Preset>(),
        Err(GraphwalkError::Unsupported { .. })
    ));

    let graph = Preset::Star.build(PresetParams::default()).unwrap();
    assert_eq!(graph.node_count(), 6);

    let graph = Preset::Grid
        .build(PresetParams {
            rows: Some(2),
            cols: Some(5),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(graph.node_count(), 10);

    let square = Preset::Grid
        .build(PresetParams {
            size: Some(4),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(square.node_count(), 16);
}

#[test]
fn test_preset_build_rejects_oversized_graphs() {
    let result = Preset::BinaryTree.build(PresetParams {
        size: Some(13),
        ..Default::default()
    });
    assert!(matches!(result, Err(GraphwalkError::InvalidValue { .. })));

    let result = Preset::Linear.build(PresetParams {
        size: Some(MAX_PRESET_NODES + 1),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_statistics() {
    let stats = star(6).statistics();
    assert_eq!(
        stats,
        GraphStatistics {
            node_count: 6,
            edge_count: 5,
            is_connected: true,
            max_degree: 5,
            min_degree: 1,
        }
    );

    let empty: Graph = Graph::new();
    let stats = empty.statistics();
    assert_eq!(stats.max_degree, 0);
    assert_eq!(stats.min_degree, 0);
    assert!(stats.is_connected);
}
