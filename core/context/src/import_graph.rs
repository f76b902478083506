//! `get_import_graph`/`bfs`: forward/reverse adjacency over a repo's
//! codemaps and breadth-first seed expansion, driving the `graph`
//! strategy.

use crate::traits::Codemap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Forward and reverse adjacency between repo-relative file paths. Each
/// [`Codemap::dependencies`] entry is assumed already resolved to a
/// repo-relative path -- resolving the raw specifier is the
/// [`crate::traits::ImportResolver`]'s job, upstream of this call.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    pub forward: HashMap<String, HashSet<String>>,
    pub reverse: HashMap<String, HashSet<String>>,
}

pub fn build_import_graph(codemaps: &[Codemap]) -> ImportGraph {
    let mut graph = ImportGraph::default();
    for codemap in codemaps {
        let entry = graph.forward.entry(codemap.path.clone()).or_default();
        for dependency in &codemap.dependencies {
            entry.insert(dependency.clone());
            graph.reverse.entry(dependency.clone()).or_default().insert(codemap.path.clone());
        }
    }
    graph
}

/// Breadth-first depth of every file reachable from `seeds` within
/// `max_depth` hops, following both forward and reverse edges (a file's
/// importers are as relevant as its imports).
pub fn bfs(graph: &ImportGraph, seeds: &[String], max_depth: usize) -> HashMap<String, usize> {
    let mut depths: HashMap<String, usize> = HashMap::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();

    for seed in seeds {
        if depths.insert(seed.clone(), 0).is_none() {
            queue.push_back((seed.clone(), 0));
        }
    }

    while let Some((node, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        let mut neighbors: Vec<&String> = Vec::new();
        if let Some(fwd) = graph.forward.get(&node) {
            neighbors.extend(fwd.iter());
        }
        if let Some(rev) = graph.reverse.get(&node) {
            neighbors.extend(rev.iter());
        }
        for neighbor in neighbors {
            if !depths.contains_key(neighbor) {
                depths.insert(neighbor.clone(), depth + 1);
                queue.push_back((neighbor.clone(), depth + 1));
            }
        }
    }

    depths
}

#[cfg(test)]
#[path = "import_graph.test.rs"]
mod tests;
