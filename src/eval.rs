use crate::{
    compile::{Instructions, compile},
    env::Environment,
    error::Error,
    tree::{
        BinaryOp::{self, *},
        Node::{self, *},
        Tree,
    },
};

impl BinaryOp {
    /// Compute the result of the operation on `lhs` and `rhs`. This is plain
    /// IEEE-754 arithmetic, so dividing by zero produces an infinity or NaN
    /// instead of an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
        }
    }
}

/// This can be used to compute the value of the tree.
///
/// The tree is compiled once when the evaluator is created. The evaluator can
/// then be run many times with different environments, reusing its registers.
pub struct Evaluator {
    ops: Vec<(Node, usize)>,
    regs: Vec<f64>,
    out_reg: usize,
}

impl Evaluator {
    /// Create a new evaluator for `tree`.
    pub fn new(tree: &Tree) -> Evaluator {
        let Instructions {
            ops,
            num_regs,
            out_reg,
        } = compile(tree);
        return Evaluator {
            ops,
            regs: vec![0.; num_regs],
            out_reg,
        };
    }

    /// Get the number of registers used by this evaluator. This is not the same
    /// as the number of nodes in the tree, because registers are allocated as
    /// needed, and reused where possible.
    pub fn num_regs(&self) -> usize {
        return self.regs.len();
    }

    /// Run the evaluator and return the result. The result may contain the
    /// output value, or an error. `UnboundVariable(name)` error means the
    /// variable `name` hasn't been assigned a value in `env`. The first such
    /// variable aborts the evaluation.
    pub fn run(&mut self, env: &Environment) -> Result<f64, Error> {
        for (node, out) in &self.ops {
            self.regs[*out] = match node {
                Constant(val) => *val,
                Variable(name) => env.get(name)?,
                Binary(op, lhs, rhs) => op.apply(self.regs[*lhs], self.regs[*rhs]),
            };
        }
        return Ok(self.regs[self.out_reg]);
    }
}

impl Tree {
    /// Compute the value of this tree, looking up variables in `env`.
    ///
    /// This compiles the tree every time it is called. Use an `Evaluator` to
    /// evaluate the same tree many times.
    pub fn eval(&self, env: &Environment) -> Result<f64, Error> {
        Evaluator::new(self).run(env)
    }
}

/// Compute the value of `tree` with the variables bound in `env`.
pub fn evaluate(tree: &Tree, env: &Environment) -> Result<f64, Error> {
    tree.eval(env)
}
