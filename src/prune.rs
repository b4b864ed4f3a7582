use crate::tree::{Node, Node::*, Tree};
use log::trace;

/// Removes the nodes that the root of a tree doesn't depend on.
///
/// The surviving nodes keep their relative order, so a topologically sorted
/// buffer stays topologically sorted, and the root ends up as the last
/// node. The buffers are owned by this instance, so reusing the same pruner
/// avoids repeated allocations.
pub struct Pruner {
    keep: Vec<bool>,
    index_map: Vec<usize>,
}

impl Pruner {
    pub fn new() -> Pruner {
        Pruner {
            keep: Vec::new(),
            index_map: Vec::new(),
        }
    }

    /// Prune `nodes` in place so that only `root` and the nodes it depends on
    /// remain. `nodes` must be topologically sorted.
    pub(crate) fn run(&mut self, nodes: &mut Vec<Node>, root: usize) {
        let before = nodes.len();
        nodes.truncate(root + 1);
        self.keep.clear();
        self.keep.resize(nodes.len(), false);
        self.keep[root] = true;
        // Inputs always have smaller indices than their parents, so a single
        // reverse scan marks everything reachable.
        for i in (0..nodes.len()).rev() {
            if !self.keep[i] {
                continue;
            }
            if let Binary(_, lhs, rhs) = &nodes[i] {
                self.keep[*lhs] = true;
                self.keep[*rhs] = true;
            }
        }
        self.index_map.clear();
        self.index_map.reserve(nodes.len());
        let mut count = 0usize;
        for flag in &self.keep {
            self.index_map.push(count);
            if *flag {
                count += 1;
            }
        }
        {
            let mut i = 0usize;
            let keep = &self.keep;
            nodes.retain(|_| {
                let flag = keep[i];
                i += 1;
                flag
            });
        }
        for node in nodes.iter_mut() {
            match node {
                Constant(_) | Variable(_) => {} // Nothing.
                Binary(_, lhs, rhs) => {
                    *lhs = self.index_map[*lhs];
                    *rhs = self.index_map[*rhs];
                }
            }
        }
        trace!("Pruned {} nodes down to {}", before, nodes.len());
    }
}

impl Default for Pruner {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Remove the nodes that the root doesn't depend on.
    pub fn prune(self, pruner: &mut Pruner) -> Tree {
        let root = self.root_index();
        let mut nodes = self.take();
        pruner.run(&mut nodes, root);
        return Tree::from_sorted_nodes(nodes);
    }
}
