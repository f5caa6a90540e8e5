//! The raise function family.
//!
//! Every raise function is a pass-through: given an absent error it returns
//! its accompanying values unchanged, and given a present error it never
//! returns, raising a signal that unwinds to the nearest enclosing
//! recovery instead.
//!
//! The success path is a single branch. Origin capture, allocation, and the
//! unwind itself only happen on the failure path.
//!
//! Causes must convert into [`BoxError`], which every `Error + Send + Sync`
//! type does, as do `&str` and `String`. This lets a recovery expecting a
//! boxed error claim causes of any type.
//!
//! # Examples
//!
//! ```
//! use tryout::Raise;
//!
//! fn parse_pair(input: &str) -> Result<(u8, u8), std::num::ParseIntError> {
//!   tryout::recover(|| {
//!     let (lhs, rhs) = input.split_once(',').unwrap_or((input, ""));
//!     let lhs: u8 = lhs.parse().or_raise();
//!     let rhs: u8 = rhs.parse().or_raise();
//!     Ok((lhs, rhs))
//!   })
//! }
//!
//! assert_eq!(parse_pair("1,2"), Ok((1, 2)));
//! assert!(parse_pair("1,x").is_err());
//! ```

use crate::signal::BoxError;
use crate::signal::Signal;

// -----------------------------------------------------------------------------
// Raise - Result
// -----------------------------------------------------------------------------

/// Extension for raising the error of a [`Result`].
///
/// Multi-value successes are expressed as tuples:
///
/// ```
/// use tryout::Raise;
///
/// fn split(input: &str) -> Result<(&str, &str), &'static str> {
///   input.split_once('=').ok_or("missing '='")
/// }
///
/// let pair: Result<(&str, &str), &str> = tryout::recover(|| Ok(split("a=b").or_raise()));
///
/// assert_eq!(pair, Ok(("a", "b")));
/// ```
pub trait Raise<T> {
  /// Returns the success value, or raises the error.
  #[track_caller]
  fn or_raise(self) -> T;
}

impl<T, E> Raise<T> for Result<T, E>
where
  E: Into<BoxError> + Send + 'static,
{
  #[inline]
  #[track_caller]
  fn or_raise(self) -> T {
    match self {
      Ok(value) => value,
      Err(error) => Signal::raise(error),
    }
  }
}

// -----------------------------------------------------------------------------
// Raise - Arity Family
// -----------------------------------------------------------------------------

/// Raises `error` if present.
///
/// # Examples
///
/// ```
/// let result: Result<(), &str> = tryout::recover(|| {
///   tryout::raise0(None::<&str>);
///   tryout::raise0(Some("EOF"));
///   unreachable!()
/// });
///
/// assert_eq!(result, Err("EOF"));
/// ```
#[inline]
#[track_caller]
pub fn raise0<E>(error: Option<E>)
where
  E: Into<BoxError> + Send + 'static,
{
  if let Some(error) = error {
    Signal::raise(error)
  }
}

/// Returns `a` as is, or raises `error` if present.
#[inline]
#[track_caller]
pub fn raise1<A, E>(a: A, error: Option<E>) -> A
where
  E: Into<BoxError> + Send + 'static,
{
  raise0(error);
  a
}

/// Returns `a` and `b` as is, or raises `error` if present.
#[inline]
#[track_caller]
pub fn raise2<A, B, E>(a: A, b: B, error: Option<E>) -> (A, B)
where
  E: Into<BoxError> + Send + 'static,
{
  raise0(error);
  (a, b)
}

/// Returns `a`, `b`, and `c` as is, or raises `error` if present.
#[inline]
#[track_caller]
pub fn raise3<A, B, C, E>(a: A, b: B, c: C, error: Option<E>) -> (A, B, C)
where
  E: Into<BoxError> + Send + 'static,
{
  raise0(error);
  (a, b, c)
}

/// Returns `a`, `b`, `c`, and `d` as is, or raises `error` if present.
#[inline]
#[track_caller]
pub fn raise4<A, B, C, D, E>(a: A, b: B, c: C, d: D, error: Option<E>) -> (A, B, C, D)
where
  E: Into<BoxError> + Send + 'static,
{
  raise0(error);
  (a, b, c, d)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::any::Any;
  use std::panic;

  use crate::Raise;
  use crate::signal::Origin;
  use crate::signal::Signal;

  fn raised<E: 'static>(payload: Box<dyn Any + Send>) -> (E, Origin) {
    match Signal::claim(payload).map(Signal::into_cause::<E>) {
      Ok(Ok(parts)) => parts,
      Ok(Err(_)) => panic!("signal carries another cause type"),
      Err(_) => panic!("payload is not a signal"),
    }
  }

  #[test]
  fn test_success_passes_values_through() {
    let none: Option<&str> = None;

    crate::raise0(none);

    assert_eq!(crate::raise1(42, none), 42);
    assert_eq!(crate::raise2(1, "two", none), (1, "two"));
    assert_eq!(crate::raise3(1, "two", 3.0, none), (1, "two", 3.0));
    assert_eq!(crate::raise4(1, "two", 3.0, '4', none), (1, "two", 3.0, '4'));
    assert_eq!(Ok::<_, &str>(vec![1, 2]).or_raise(), vec![1, 2]);
  }

  #[test]
  fn test_failure_raises_cause() {
    let payload: Box<dyn Any + Send> =
      panic::catch_unwind(|| crate::raise3(1, 2, 3, Some("EOF"))).unwrap_err();

    assert_eq!(raised::<&str>(payload).0, "EOF");
  }

  #[test]
  fn test_origin_is_call_site_for_every_arity() {
    macro_rules! assert_origin {
      ($expr:expr) => {{
        let line: u32 = line!();
        let payload: Box<dyn Any + Send> = panic::catch_unwind(|| $expr).unwrap_err();
        let origin: Origin = raised::<&str>(payload).1;

        assert_eq!(origin.file(), file!());
        assert_eq!(origin.line(), line);
      }};
    }

    let error: Option<&str> = Some("EOF");

    assert_origin!(crate::raise0(error));
    assert_origin!(crate::raise1(1, error));
    assert_origin!(crate::raise2(1, 2, error));
    assert_origin!(crate::raise3(1, 2, 3, error));
    assert_origin!(crate::raise4(1, 2, 3, 4, error));
    assert_origin!(Err::<(), &str>("EOF").or_raise());
  }
}
