//! Library-wide error type.
use std::fmt;
use std::fmt::{Display, Formatter};

/// Errors reported by tensor algebra and field differentiation.
///
/// Setup routines that can fail for many unrelated reasons (mesh construction, file loading)
/// report through [`eyre::Report`] instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The matrix to invert has a determinant of exactly zero.
    SingularMatrix,
    /// A derivative was requested from a field that does not carry derivatives.
    MissingDerivative,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularMatrix => write!(f, "Matrix is singular and cannot be inverted"),
            Self::MissingDerivative => write!(f, "Field does not carry the requested derivative"),
        }
    }
}

impl std::error::Error for Error {}
