use crate::tree::{Node, Node::*, Tree};
use log::debug;

/*
Compile the tree into instructions. In theory one can just walk the nodes of the
tree and evaluate it without compiling it, but that requires allocating as many
registers as there are nodes in the tree. Here we compile the tree into
instructions that reuse registers using Matt Keeter's Solid State Register
Allocator: https://www.mattkeeter.com/blog/2022-10-04-ssra/
 */

pub struct Instructions {
    pub ops: Vec<(Node, usize)>,
    pub num_regs: usize,
    pub out_reg: usize,
}

/// We "compile" the tree into a set of ops that closely mirror the nodes of the
/// tree itself. The difference between the compiled ops and the tree nodes is
/// that the former reference register indices, where the registers are
/// reused. An 'instruction' is a tuple of a Node and a usize index pointing to
/// the register that the output of the instruction should be written into.
///
/// Nodes that the root doesn't depend on are not compiled, so they can never
/// be evaluated.
pub fn compile(tree: &Tree) -> Instructions {
    let root = tree.root_index();
    let mut valregs = vec![None; tree.len()];
    let mut alive: Vec<bool> = Vec::new();
    let mut ops = Vec::new();
    let out_reg = get_register(&mut valregs, &mut alive, root);
    // Iterate in reverse.
    for (index, node) in tree.nodes().iter().enumerate().rev() {
        // A node that was never asked for a register is not an input of
        // anything we compiled so far.
        let outreg = match valregs[index] {
            Some(reg) => reg,
            None => continue,
        };
        // We immediately mark the output register as not alive, i.e. not in
        // use, because we want this register to be re-used by one of the
        // inputs. For example, a long chain of ops that each use the previous
        // result as their left input can all be performed on the same
        // register.
        alive[outreg] = false;
        valregs[index] = None;
        let op = match node {
            Constant(val) => (Constant(*val), outreg),
            Variable(name) => (Variable(name.clone()), outreg),
            Binary(op, lhs, rhs) => {
                let lreg = get_register(&mut valregs, &mut alive, *lhs);
                let rreg = get_register(&mut valregs, &mut alive, *rhs);
                (Binary(*op, lreg, rreg), outreg)
            }
        };
        ops.push(op);
    }
    ops.reverse();
    debug!(
        "Compiled {} nodes into {} instructions using {} registers",
        tree.len(),
        ops.len(),
        alive.len()
    );
    Instructions {
        ops,
        num_regs: alive.len(),
        out_reg,
    }
}

/// Get the first register that isn't alive, i.e. is not in use. If all
/// registers are in use, i.e. alive, a new register is allocated.
fn get_register(valregs: &mut [Option<usize>], alive: &mut Vec<bool>, index: usize) -> usize {
    if let Some(val) = valregs[index] {
        return val;
    }
    let reg = match alive.iter().position(|flag| !*flag) {
        Some(reg) => {
            alive[reg] = true;
            reg
        }
        None => {
            let reg = alive.len();
            alive.push(true);
            reg
        }
    };
    valregs[index] = Some(reg);
    reg
}
