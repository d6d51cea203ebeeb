use thiserror::Error;

/// Defines the result type used throughout this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that core operations may return
///
/// All errors are immediate and local: no operation produces a partial
/// result, and no retry policy exists anywhere in the kernel.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A late-bound dependency (material or nodes) has not been assigned yet
    #[error("missing dependency: {0}")]
    MissingDependency(&'static str),

    /// The number of named elastic parameters is not exactly two
    #[error("exactly two of (young, poisson, mu, lam) must be given, but {0} were supplied")]
    InvalidArgumentCount(usize),

    /// Array shapes are incompatible for the requested operation
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A connectivity or constraint index exceeds the number of nodes
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(String),
}
