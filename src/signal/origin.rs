use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::panic::Location;

/// The source location at which a failure was raised.
///
/// Origins are captured through `#[track_caller]` propagation, so they
/// always point at the call site the programmer wrote, never at the raise
/// plumbing in between.
///
/// # Display Format
///
/// Origins format as: `{file_name}:{line}`
///
/// Example: `parser.rs:42`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Origin {
  location: &'static Location<'static>,
}

impl Origin {
  /// Captures the origin of the caller.
  ///
  /// Only invoked on the failure branch of a raise; the success path
  /// never touches the caller location.
  #[inline]
  #[track_caller]
  pub(crate) fn caller() -> Self {
    Self {
      location: Location::caller(),
    }
  }

  /// Returns the full path of the source file, as reported by the compiler.
  #[inline]
  pub const fn file(&self) -> &'static str {
    self.location.file()
  }

  /// Returns the final segment of the source file path.
  ///
  /// Both `/` and `\` are treated as separators so the result does not
  /// depend on the host the crate was compiled on.
  #[inline]
  pub fn file_name(&self) -> &'static str {
    basename(self.location.file())
  }

  /// Returns the 1-based line number.
  #[inline]
  pub const fn line(&self) -> u32 {
    self.location.line()
  }

  /// Returns the 1-based column number.
  #[inline]
  pub const fn column(&self) -> u32 {
    self.location.column()
  }

  /// Returns the underlying compiler-provided location.
  #[inline]
  pub const fn location(&self) -> &'static Location<'static> {
    self.location
  }
}

impl Debug for Origin {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{}:{}", self.file(), self.line(), self.column())
  }
}

impl Display for Origin {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{}", self.file_name(), self.line())
  }
}

impl From<&'static Location<'static>> for Origin {
  #[inline]
  fn from(other: &'static Location<'static>) -> Self {
    Self { location: other }
  }
}

fn basename(path: &str) -> &str {
  match path.rfind(['/', '\\']) {
    Some(index) => &path[index + 1..],
    None => path,
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
