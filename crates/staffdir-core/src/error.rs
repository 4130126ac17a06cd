//! Error vocabulary for `staffdir-core`.
//!
//! The display messages form a small closed set that the presentation layer
//! matches on directly. Underlying transport and parse failures are logged at
//! the point of failure, then collapsed into [`Error::Retrieval`] — callers
//! see one vocabulary regardless of which stage failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Transport failure, non-success status, or any unexpected error while
  /// fetching or parsing the collection.
  #[error("An error occurred while fetching employee data")]
  Retrieval,

  /// The response parsed, but the expected collection was missing or
  /// malformed.
  #[error("No employees found")]
  NoEmployees,

  /// The collection was valid but no entity matched the requested
  /// identifier.
  #[error("Employee not found")]
  EmployeeNotFound,

  /// A URL token that was not produced by the identifier codec.
  #[error("invalid identifier token: {0}")]
  InvalidToken(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
