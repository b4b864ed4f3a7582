use crate::{
    prune::Pruner,
    tree::{BinaryOp::*, MaybeTree, Node, Node::*, Tree},
};
use log::debug;

/// Compute the symbolic derivative of `tree` with respect to the variable
/// named `var`.
pub fn symbolic_deriv(tree: MaybeTree, var: &str) -> MaybeTree {
    Ok(tree?.symbolic_deriv(var))
}

impl Tree {
    /// Compute the symbolic derivative of this tree with respect to the
    /// variable named `var`. Variables with any other name are treated as
    /// constants. The result is not simplified in any way, so it is usually a
    /// lot bigger than the simplest equivalent expression.
    pub fn symbolic_deriv(&self, var: &str) -> Tree {
        let mut nodes = self.nodes().to_vec();
        let mut derivs = Vec::<Node>::new();
        let mut derivmap = Vec::<usize>::new();
        compute_symbolic_deriv(self.nodes(), nodes.len(), var, &mut derivs, &mut derivmap);
        nodes.extend(derivs.drain(..));
        let root = derivmap[self.root_index()];
        debug!(
            "Differentiated {} nodes with respect to '{}' into {} nodes",
            self.len(),
            var,
            nodes.len()
        );
        // The derivative of the root is not necessarily the last node, and
        // most of the original nodes are not inputs of the derivative.
        let mut pruner = Pruner::new();
        pruner.run(&mut nodes, root);
        debug!("Pruned the derivative down to {} nodes", nodes.len());
        return Tree::from_sorted_nodes(nodes);
    }
}

/// Push the nodes of the derivative of `nodes` into `dst`. The derivative
/// nodes are expected to be appended after `nodes`, i.e. the first node in
/// `dst` ends up at index `offset`. The derivative nodes refer to the
/// original nodes where the differentiation rules need them. After this
/// function returns, `derivmap[i]` is the index of the derivative of node `i`.
fn compute_symbolic_deriv(
    nodes: &[Node],
    offset: usize,
    var: &str,
    dst: &mut Vec<Node>,
    derivmap: &mut Vec<usize>,
) {
    dst.clear();
    derivmap.clear();
    derivmap.reserve(nodes.len());
    for node in nodes {
        let deriv = match node {
            Constant(_val) => Constant(0.),
            Variable(name) => Constant(if name == var { 1. } else { 0. }),
            Binary(op, lhs, rhs) => {
                // Inputs appear before their parents, so their derivatives
                // are already computed.
                let (lderiv, rderiv) = (derivmap[*lhs], derivmap[*rhs]);
                match op {
                    Add => Binary(Add, lderiv, rderiv),
                    Subtract => Binary(Subtract, lderiv, rderiv),
                    Multiply => {
                        // u'v + uv'
                        let lr = push_node(Binary(Multiply, lderiv, *rhs), dst) + offset;
                        let rl = push_node(Binary(Multiply, *lhs, rderiv), dst) + offset;
                        Binary(Add, lr, rl)
                    }
                    Divide => {
                        // (u'v - uv') / (v * v)
                        let lr = push_node(Binary(Multiply, lderiv, *rhs), dst) + offset;
                        let rl = push_node(Binary(Multiply, *lhs, rderiv), dst) + offset;
                        let sub = push_node(Binary(Subtract, lr, rl), dst) + offset;
                        let r2 = push_node(Binary(Multiply, *rhs, *rhs), dst) + offset;
                        Binary(Divide, sub, r2)
                    }
                }
            }
        };
        derivmap.push(offset + dst.len());
        dst.push(deriv);
    }
}

fn push_node(node: Node, dst: &mut Vec<Node>) -> usize {
    let idx = dst.len();
    dst.push(node);
    return idx;
}
