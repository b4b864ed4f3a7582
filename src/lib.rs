pub mod derivative;
pub mod env;
pub mod error;
pub mod eval;
pub mod prune;
pub mod tree;

mod compile;
mod io;
mod latex;
mod macros;
mod walk;

#[cfg(test)]
mod test_util;

pub use derivative::symbolic_deriv;
pub use env::Environment;
pub use error::Error;
pub use eval::{Evaluator, evaluate};
pub use prune::Pruner;
pub use tree::{BinaryOp, MaybeTree, Node, Tree, add, div, mul, sub};
pub use walk::{DepthIterator, DepthWalker};
