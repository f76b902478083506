//! `inventory`: a directory tree sidecar, depth-limited by intensity, so
//! the model has the repo's shape without spending budget on per-file
//! candidates (§4.6).

use async_trait::async_trait;
use ivo_context::list_repo_files;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use ivo_protocol::estimate_tokens;
use ivo_protocol::Intensity;
use ivo_protocol::Sidecar;
use std::collections::BTreeMap;

pub struct InventoryStrategy;

fn max_depth(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Lite => 2,
        Intensity::Standard => 3,
        Intensity::Deep => 4,
    }
}

#[derive(Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

fn insert(node: &mut TreeNode, parts: &[&str]) {
    let Some((head, rest)) = parts.split_first() else { return };
    insert(node.children.entry((*head).to_string()).or_default(), rest);
}

fn render(node: &TreeNode, depth: usize, max_depth: usize, out: &mut String) {
    if depth > max_depth {
        return;
    }
    for (name, child) in &node.children {
        out.push_str(&"  ".repeat(depth));
        out.push_str(name);
        out.push('\n');
        render(child, depth + 1, max_depth, out);
    }
}

fn build_tree(paths: &[String], max_depth: usize) -> String {
    let mut root = TreeNode::default();
    for path in paths {
        let parts: Vec<&str> = path.split('/').collect();
        insert(&mut root, &parts);
    }
    let mut out = String::new();
    render(&root, 0, max_depth, &mut out);
    out.trim_end().to_string()
}

#[async_trait]
impl Strategy for InventoryStrategy {
    fn name(&self) -> &str {
        "inventory"
    }

    fn default_weight(&self) -> f64 {
        0.0
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let paths = list_repo_files(&ctx.root);
        let tree = build_tree(&paths, max_depth(ctx.intensity));
        if tree.is_empty() {
            return StrategyOutput::default();
        }

        let sidecar = Sidecar { key: "tree".to_string(), tokens: estimate_tokens(&tree), content: tree };
        StrategyOutput { candidates: Vec::new(), warnings: Vec::new(), sidecar: Some(sidecar) }
    }
}

#[cfg(test)]
#[path = "inventory.test.rs"]
mod tests;
