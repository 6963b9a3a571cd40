//! Error type shared by the tree builder, the evaluators and the board constructors.

use crate::tree::NodeId;

/// Represents possible errors that can occur while building or evaluating a game tree.
///
/// Illegal moves and full boards are not errors: they are modeled as nodes without
/// children. The variants below only cover misuse of the API and broken invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AiError{
    /// An evaluation was requested before any tree was built.
    #[error("no game tree has been built yet")]
    TreeNotBuilt,
    /// A chance node reached the averaging step without any child.
    ///
    /// Chance nodes without empty cells are terminal, so this only happens
    /// when the tree invariants were broken.
    #[error("chance node {0} has no children to average")]
    EmptyChanceNode(NodeId),
    /// The handle does not belong to the tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
    /// A child label does not match the kind of its parent
    /// (a move under a chance node, or a spawn cell under a decision node).
    #[error("child label does not match the kind of node {0}")]
    LabelMismatch(NodeId),
    /// The rows do not describe a non-empty square matrix.
    #[error("invalid board: expected {expected} cells in row {row}, got {got}")]
    InvalidBoard { row: usize, expected: usize, got: usize },
    /// A cell holds a value that is neither zero nor a power of two.
    #[error("invalid tile {value} at ({row}, {col})")]
    InvalidTile { row: usize, col: usize, value: u64 },
    /// The value placed by chance nodes is not a power of two of at least 2.
    #[error("invalid spawn value {0}: expected a power of two of at least 2")]
    InvalidSpawnValue(u64),
}

/// Convenience alias for results carrying an [`AiError`].
pub type Result<T> = std::result::Result<T, AiError>;
