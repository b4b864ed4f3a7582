use crate::{error::Error, walk::DepthWalker};

/// Represents an operation with two inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// The infix operator symbol.
    pub fn symbol(&self) -> &'static str {
        use BinaryOp::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
        }
    }
}

use BinaryOp::*;

/// Represents a node in an expression `Tree`.
#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Constant(f64),
    Variable(String),
    Binary(BinaryOp, usize, usize),
}

use Node::*;

pub(crate) fn is_topological_order(nodes: &[Node]) -> bool {
    nodes.iter().enumerate().all(|(i, node)| match node {
        Constant(_) | Variable(_) => true,
        Binary(_, l, r) => *l < i && *r < i,
    })
}

/// Represents an expression tree.
///
/// The nodes are stored in a flat buffer in topological order, i.e. every node
/// appears after its inputs, and the root is the last node. A node can be the
/// input of more than one parent. That is fine because nodes never change
/// after the tree is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

pub type MaybeTree = Result<Tree, Error>;

impl Tree {
    pub fn from_nodes(nodes: Vec<Node>) -> MaybeTree {
        let t = Tree { nodes };
        return t.validated();
    }

    /// Wrap `nodes` without checking them. Only for algorithms that produce
    /// topologically sorted, non-empty buffers by construction.
    pub(crate) fn from_sorted_nodes(nodes: Vec<Node>) -> Tree {
        debug_assert!(!nodes.is_empty() && is_topological_order(&nodes));
        Tree { nodes }
    }

    /// Create a tree representing a constant value.
    pub fn constant(val: f64) -> Tree {
        Tree {
            nodes: vec![Constant(val)],
        }
    }

    /// Create a tree representing a variable with the given `name`.
    pub fn variable(name: impl Into<String>) -> Tree {
        Tree {
            nodes: vec![Variable(name.into())],
        }
    }

    /// The number of nodes in this tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get a reference to root of the tree. This is the last node of
    /// the tree.
    pub fn root(&self) -> &Node {
        // A tree is never empty, see `validated`.
        &self.nodes[self.root_index()]
    }

    pub fn root_index(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Get a reference to the node at `index`.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Reference to the nodes of this tree.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The nodes of the tree. This drops the tree and gives the ownership of
    /// the data to the caller.
    ///
    /// This is meant to be used by algorithms that want to perform direct
    /// surgery on the nodes of the tree, rearrange them etc. Once constructed,
    /// the tree must remain immutable. Algorithms take ownership of the data,
    /// do what they want to do and construct a new tree from the modified
    /// data, which is checked again.
    pub fn take(self) -> Vec<Node> {
        self.nodes
    }

    /// Get a unique list of all variables reachable from the root. The names
    /// appear in the order they are first encountered in a left to right
    /// depth first traversal.
    pub fn variables(&self) -> Vec<&str> {
        let mut walker = DepthWalker::new();
        walker.init_from_tree(self);
        let mut names: Vec<&str> = Vec::new();
        for (index, _parent) in walker.walk(&self.nodes, true) {
            if let Variable(name) = &self.nodes[index] {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        return names;
    }

    /// Number of binary operations on the longest path from the root to a
    /// leaf. A tree with a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut depths: Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            depths.push(match node {
                Constant(_) | Variable(_) => 0,
                Binary(_, lhs, rhs) => 1 + usize::max(depths[*lhs], depths[*rhs]),
            });
        }
        return depths[self.root_index()];
    }

    /// Check the tree for errors and return a Result that contains the tree if
    /// no errors were found, or the first error encountered with the tree.
    fn validated(self) -> MaybeTree {
        /* We make sure the inputs of every node appear before that node
         * itself. This is important when evaluating the tree, but also ensures
         * there are no cycles in the tree.
         */
        if self.nodes.is_empty() {
            return Err(Error::EmptyTree);
        }
        if !is_topological_order(&self.nodes) {
            return Err(Error::WrongNodeOrder);
        }
        return Ok(self);
    }

    fn binary_op(mut self, other: Tree, op: BinaryOp) -> Tree {
        self.nodes.reserve(other.nodes.len() + 1);
        let lhs = self.root_index();
        let offset = self.push_nodes(other);
        let rhs = self.root_index();
        debug_assert!(lhs < offset && offset <= rhs);
        self.nodes.push(Binary(op, lhs, rhs));
        return self;
    }

    fn push_nodes(&mut self, other: Tree) -> usize {
        let offset: usize = self.nodes.len();
        self.nodes.extend(other.nodes.into_iter().map(|node| match node {
            Constant(_) | Variable(_) => node,
            Binary(op, lhs, rhs) => Binary(op, lhs + offset, rhs + offset),
        }));
        return offset;
    }
}

macro_rules! binary_func {
    ($name:ident, $op:ident) => {
        pub fn $name(lhs: MaybeTree, rhs: MaybeTree) -> MaybeTree {
            Ok(lhs?.binary_op(rhs?, $op))
        }
    };
}

binary_func!(add, Add);
binary_func!(sub, Subtract);
binary_func!(mul, Multiply);
binary_func!(div, Divide);

impl From<f64> for Tree {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl From<&str> for Tree {
    fn from(name: &str) -> Self {
        Self::variable(name)
    }
}

impl From<String> for Tree {
    fn from(name: String) -> Self {
        Self::variable(name)
    }
}
