use crate::tree::{Node, Node::*, Tree};

/// Helper struct for traversing the tree depth first.
///
/// Doing a non-recursive depth first traversal requires
/// allocations. Those buffers are owned by this instance. So reusing
/// the same walker many times is recommended to avoid unnecessary
/// allocations.
pub struct DepthWalker {
    stack: Vec<(usize, Option<usize>)>,
    visited: Vec<bool>,
}

impl DepthWalker {
    pub fn new() -> DepthWalker {
        DepthWalker {
            stack: vec![],
            visited: vec![],
        }
    }

    pub fn init_from_root(&mut self, num_nodes: usize, root: usize) {
        self.stack.clear();
        self.stack.reserve(num_nodes);
        self.stack.push((root, None));
        self.visited.clear();
        self.visited.resize(num_nodes, false);
    }

    pub fn init_from_tree(&mut self, tree: &Tree) {
        self.init_from_root(tree.len(), tree.root_index());
    }

    /// Get an iterator that walks the given `nodes`, starting from the root
    /// this walker was initialized with. Left operands are visited before
    /// right operands. If `unique` is true, no node will be visited more than
    /// once, otherwise shared nodes are visited once per parent.
    pub fn walk<'a>(&'a mut self, nodes: &'a [Node], unique: bool) -> DepthIterator<'a> {
        DepthIterator {
            unique,
            walker: self,
            nodes,
        }
    }
}

impl Default for DepthWalker {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that walks the tree depth first.
///
/// The lifetime of this iterator is bound to the lifetime of the
/// nodes it's traversing. For that reason, this is a separate struct
/// from `DepthWalker`. That way, the `DepthWalker` instance won't get
/// tangled up in lifetimes and it can be used multiple traversals,
/// even on different trees.
pub struct DepthIterator<'a> {
    unique: bool,
    walker: &'a mut DepthWalker,
    nodes: &'a [Node],
}

impl<'a> Iterator for DepthIterator<'a> {
    type Item = (usize, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, parent) = {
            // Pop the stack until we find a node we didn't already visit.
            let (mut i, mut p) = self.walker.stack.pop()?;
            while self.unique && self.walker.visited[i] {
                (i, p) = self.walker.stack.pop()?;
            }
            (i, p)
        };
        match &self.nodes[index] {
            Constant(_) | Variable(_) => {}
            Binary(_op, lhs, rhs) => {
                // Pushing rhs first because last in first out.
                self.walker.stack.push((*rhs, Some(index)));
                self.walker.stack.push((*lhs, Some(index)));
            }
        }
        self.walker.visited[index] = true;
        return Some((index, parent));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{deftree, tree::BinaryOp::*};

    #[test]
    fn t_depth_traverse() {
        let mut walker = DepthWalker::new();
        {
            let tree = deftree!(+ (* x 2.) (* y 2.)).unwrap();
            // Make sure two successive traversal yield the same nodes.
            walker.init_from_tree(&tree);
            let a: Vec<_> = walker.walk(tree.nodes(), true).collect();
            walker.init_from_tree(&tree);
            let b: Vec<_> = walker.walk(tree.nodes(), true).collect();
            assert_eq!(a, b);
            assert_eq!(
                a,
                vec![
                    (6, None),
                    (2, Some(6)),
                    (0, Some(2)),
                    (1, Some(2)),
                    (5, Some(6)),
                    (3, Some(5)),
                    (4, Some(5))
                ]
            );
        }
        {
            // Make sure the same DepthWalker can be used on multiple trees.
            let tree = deftree!(+ (* x 3.) (* y 3.)).unwrap();
            walker.init_from_tree(&tree);
            let a: Vec<_> = walker.walk(tree.nodes(), true).collect();
            let tree2 = tree.clone();
            walker.init_from_tree(&tree2);
            let b: Vec<_> = walker.walk(tree2.nodes(), true).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn t_shared_nodes() {
        let tree = Tree::from_nodes(vec![Variable("x".into()), Binary(Multiply, 0, 0)]).unwrap();
        let mut walker = DepthWalker::new();
        walker.init_from_tree(&tree);
        let unique: Vec<_> = walker.walk(tree.nodes(), true).collect();
        assert_eq!(unique, vec![(1, None), (0, Some(1))]);
        walker.init_from_tree(&tree);
        let all: Vec<_> = walker.walk(tree.nodes(), false).collect();
        assert_eq!(all, vec![(1, None), (0, Some(1)), (0, Some(1))]);
    }
}
