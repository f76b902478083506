use super::*;
use crate::traits::Codemap;

fn codemap(path: &str, deps: &[&str]) -> Codemap {
    Codemap {
        path: path.to_string(),
        dependencies: deps.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn build_import_graph_records_forward_and_reverse_edges() {
    let graph = build_import_graph(&[codemap("a.rs", &["b.rs"]), codemap("b.rs", &[])]);
    assert!(graph.forward["a.rs"].contains("b.rs"));
    assert!(graph.reverse["b.rs"].contains("a.rs"));
}

#[test]
fn bfs_respects_max_depth() {
    let graph = build_import_graph(&[codemap("a.rs", &["b.rs"]), codemap("b.rs", &["c.rs"]), codemap("c.rs", &[])]);
    let depths = bfs(&graph, &["a.rs".to_string()], 1);
    assert_eq!(depths.get("a.rs"), Some(&0));
    assert_eq!(depths.get("b.rs"), Some(&1));
    assert_eq!(depths.get("c.rs"), None);
}

#[test]
fn bfs_follows_reverse_edges_too() {
    let graph = build_import_graph(&[codemap("a.rs", &["b.rs"])]);
    let depths = bfs(&graph, &["b.rs".to_string()], 1);
    assert_eq!(depths.get("a.rs"), Some(&1));
}
