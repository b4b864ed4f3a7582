use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tree contains no nodes.
    #[error("tree contains no nodes")]
    EmptyTree,
    /// Nodes are not in a valid topological order. This also covers cycles
    /// and indices that point past the end of the tree.
    #[error("nodes are not in a valid topological order")]
    WrongNodeOrder,

    // Evaluation related errors
    /// A variable was not assigned a value before evaluating.
    #[error("variable `{0}` was not assigned a value")]
    UnboundVariable(String),
}
