use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::signal::Origin;

/// A recovered cause paired with the origin it was raised from.
///
/// # Display Format
///
/// Reports format as: `{file_name}:{line}: {cause}`
///
/// Example: `reader.rs:10: unexpected end of file`
///
/// The format is deterministic and has no side effects; it is what the
/// terminating recoveries hand to their sinks.
#[derive(Clone, PartialEq, Eq)]
pub struct Report<E> {
  cause: E,
  origin: Origin,
}

impl<E> Report<E> {
  /// Creates a new report from a cause and its origin.
  #[inline]
  pub const fn new(cause: E, origin: Origin) -> Self {
    Self { cause, origin }
  }

  /// Returns the wrapped cause.
  #[inline]
  pub const fn cause(&self) -> &E {
    &self.cause
  }

  /// Returns the origin of the raise.
  #[inline]
  pub const fn origin(&self) -> Origin {
    self.origin
  }

  /// Consumes the report, returning the wrapped cause.
  #[inline]
  pub fn into_cause(self) -> E {
    self.cause
  }

  /// Consumes the report, returning the cause and its origin.
  #[inline]
  pub fn into_parts(self) -> (E, Origin) {
    (self.cause, self.origin)
  }
}

impl<E> Debug for Report<E>
where
  E: Debug,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Report")
      .field("cause", &self.cause)
      .field("origin", &self.origin)
      .finish()
  }
}

impl<E> Display for Report<E>
where
  E: Display,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}: {}", self.origin, self.cause)
  }
}

impl<E> Error for Report<E>
where
  E: Error + 'static,
{
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(&self.cause)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
