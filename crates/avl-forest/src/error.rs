use thiserror::Error;

/// Errors raised by tree operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The value to remove is not stored in the tree.
    #[error("value is not in the tree")]
    NotFound,
    /// A traversal order name that is not one of `pre_order`, `in_order`,
    /// `post_order` or `level_order`.
    #[error("invalid traversal order {0:?}")]
    InvalidTraversalOrder(String),
}

/// Errors raised by the command-line front end.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("invalid value {0:?}")]
    InvalidValue(String),
    #[error("unknown flag {0:?}")]
    UnknownFlag(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Tree(#[from] TreeError),
}
