//! Scoped recovery of raised signals.
//!
//! A recovery runs a guarded region and intercepts any signal raised inside
//! it, turning the unwind back into an ordinary value. Recoveries nest: a
//! signal is claimed by the innermost recovery whose cause type matches,
//! and is claimed at most once.
//!
//! # Foreign Unwinds
//!
//! Recoveries only claim their own signal shape. Ordinary panics resume
//! unwinding verbatim and remain observable at an outer boundary; a
//! recovery never converts a genuine bug into a stored error.
//!
//! A signal is claimed when its cause is the recovery's `E`, or when `E` is
//! a boxed `dyn Error` such as [`BoxError`]. A signal with any other cause
//! type resumes toward an outer recovery.
//!
//! [`BoxError`]: crate::signal::BoxError
//!
//! # Unwind Safety
//!
//! Guarded regions are run as if [`AssertUnwindSafe`]. A raise leaves state
//! captured by the region exactly as an early `return` would; inspecting it
//! afterwards is the caller's concern.
//!
//! # Forms
//!
//! - [`recover`]: stores the cause in the `Err` arm of the region's result
//! - [`recover_with`]: as [`recover`], then adjusts the stored cause
//! - [`recover_or_else`]: as [`recover`], then maps the cause to a result
//! - [`recover_detailed`]: hands the cause and its [`Origin`] to a handler
//! - [`recover_report`]: stores a [`Report`] carrying the origin
//! - [`recover_future`]: per-task recovery for asynchronous code
//! - [`terminate`]: reports `file:line: cause` to a sink, then fails the thread
//! - [`terminate_process`]: reports `file:line: cause`, then exits the process

use std::fmt::Display;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::process;

use crate::consts::E_CODE_FAILURE_RAISE;
use crate::signal::Origin;
use crate::signal::Payload;
use crate::signal::Report;
use crate::signal::Signal;
use crate::utils::Recovered;
use crate::utils::write_stderr;

// -----------------------------------------------------------------------------
// Dispatch
// -----------------------------------------------------------------------------

/// Runs `body`, returning its value or the parts of a claimed signal.
#[inline]
fn catch<E, T>(body: impl FnOnce() -> T) -> Result<T, (E, Origin)>
where
  E: 'static,
{
  match panic::catch_unwind(AssertUnwindSafe(body)) {
    Ok(value) => Ok(value),
    Err(payload) => Err(claim(payload)),
  }
}

/// Claims an unwind payload as a signal carrying `E`.
///
/// Foreign payloads resume unwinding and never return here.
pub(crate) fn claim<E>(payload: Payload) -> (E, Origin)
where
  E: 'static,
{
  let signal: Box<Signal> = match Signal::claim(payload) {
    Ok(signal) => signal,
    Err(payload) => {
      tracing::trace!(result = "resumed", reason = "foreign payload");
      panic::resume_unwind(payload)
    }
  };

  match signal.into_cause::<E>() {
    Ok((cause, origin)) => {
      tracing::trace!(result = "recovered", origin = %origin);
      (cause, origin)
    }
    Err(signal) => {
      tracing::trace!(result = "resumed", reason = "cause type", cause = signal.cause_type());
      panic::resume_unwind(signal)
    }
  }
}

// -----------------------------------------------------------------------------
// Recovery - Slot
// -----------------------------------------------------------------------------

/// Runs a guarded region, recovering a raised cause into its `Err` arm.
///
/// A region that completes without raising returns its own result
/// untouched, including any error it returned the conventional way.
///
/// # Examples
///
/// ```
/// use std::io;
/// use tryout::Raise;
///
/// fn read_header(input: &[u8]) -> io::Result<u8> {
///   tryout::recover(|| -> io::Result<u8> {
///     let eof: io::Error = io::Error::from(io::ErrorKind::UnexpectedEof);
///     let first: &u8 = input.first().ok_or(eof).or_raise();
///     Ok(*first)
///   })
/// }
///
/// assert_eq!(read_header(b"\x07").unwrap(), 7);
/// assert_eq!(read_header(b"").unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
/// ```
#[inline]
pub fn recover<E, T>(body: impl FnOnce() -> Result<T, E>) -> Result<T, E>
where
  E: 'static,
{
  match catch(body) {
    Ok(result) => result,
    Err((cause, _)) => Err(cause),
  }
}

/// Runs a guarded region like [`recover`], then calls `on_recovered` with
/// the stored cause.
///
/// The callback only runs when a raise was recovered, after the cause has
/// been stored, and may rewrite it. Errors the region returned normally are
/// not passed to the callback.
///
/// # Examples
///
/// ```
/// use std::io;
/// use std::io::ErrorKind;
/// use tryout::Raise;
///
/// let result: io::Result<()> = tryout::recover_with(
///   || Ok(Err(io::Error::from(ErrorKind::Interrupted)).or_raise()),
///   |error: &mut io::Error| {
///     if error.kind() == ErrorKind::Interrupted {
///       *error = io::Error::from(ErrorKind::TimedOut);
///     }
///   },
/// );
///
/// assert_eq!(result.unwrap_err().kind(), ErrorKind::TimedOut);
/// ```
#[inline]
pub fn recover_with<E, T>(
  body: impl FnOnce() -> Result<T, E>,
  on_recovered: impl FnOnce(&mut E),
) -> Result<T, E>
where
  E: 'static,
{
  match catch(body) {
    Ok(result) => result,
    Err((mut cause, _)) => {
      on_recovered(&mut cause);
      Err(cause)
    }
  }
}

/// Runs a guarded region like [`recover`], then hands a raised cause to
/// `handler`, whose result the region returns.
///
/// The handler may clear the cause by returning `Ok`, or replace it. Like
/// [`recover_with`], it only sees raised causes; errors the region returned
/// normally pass through untouched.
///
/// # Examples
///
/// ```
/// use std::io;
/// use std::io::ErrorKind;
/// use tryout::Raise;
///
/// let result: io::Result<usize> = tryout::recover_or_else(
///   || Ok(Err(io::Error::from(ErrorKind::UnexpectedEof)).or_raise()),
///   |error: io::Error| match error.kind() {
///     ErrorKind::UnexpectedEof => Ok(0),
///     _ => Err(error),
///   },
/// );
///
/// assert_eq!(result.unwrap(), 0);
/// ```
#[inline]
pub fn recover_or_else<E, T>(
  body: impl FnOnce() -> Result<T, E>,
  handler: impl FnOnce(E) -> Result<T, E>,
) -> Result<T, E>
where
  E: 'static,
{
  match catch(body) {
    Ok(result) => result,
    Err((cause, _)) => handler(cause),
  }
}

// -----------------------------------------------------------------------------
// Recovery - Detailed
// -----------------------------------------------------------------------------

/// Runs a guarded region, handing a raised cause and its origin to `handler`.
///
/// Returns `None` if a raise was recovered.
///
/// # Examples
///
/// ```
/// use std::io;
/// use std::io::ErrorKind;
/// use tryout::Origin;
///
/// let value: Option<u8> = tryout::recover_detailed(
///   || tryout::raise1(1, Some(io::Error::from(ErrorKind::UnexpectedEof))),
///   |error: io::Error, origin: Origin| {
///     assert_eq!(error.kind(), ErrorKind::UnexpectedEof);
///     eprintln!("raised at {origin}");
///   },
/// );
///
/// assert_eq!(value, None);
/// ```
#[inline]
pub fn recover_detailed<E, T>(
  body: impl FnOnce() -> T,
  handler: impl FnOnce(E, Origin),
) -> Option<T>
where
  E: 'static,
{
  match catch(body) {
    Ok(value) => Some(value),
    Err((cause, origin)) => {
      handler(cause, origin);
      None
    }
  }
}

/// Runs a guarded region, recovering a raised cause into a [`Report`].
///
/// Errors the region returned the conventional way have no raise origin;
/// they are reported at the call site of `recover_report` instead.
#[inline]
#[track_caller]
pub fn recover_report<E, T>(body: impl FnOnce() -> Result<T, E>) -> Result<T, Report<E>>
where
  E: 'static,
{
  let origin: Origin = Origin::caller();

  match catch(body) {
    Ok(result) => result.map_err(|cause| Report::new(cause, origin)),
    Err((cause, origin)) => Err(Report::new(cause, origin)),
  }
}

// -----------------------------------------------------------------------------
// Recovery - Async
// -----------------------------------------------------------------------------

/// Wraps a future so raises inside any of its polls are recovered into its
/// `Err` output.
///
/// Recovery is scoped to the wrapped future. Each concurrently running task
/// that raises needs its own recovery at its entry point; a raise never
/// crosses from one task into another.
///
/// # Examples
///
/// ```
/// # async fn run() {
/// use tryout::Raise;
///
/// let output: Result<u8, &str> = tryout::recover_future(async {
///   let value: u8 = Err("EOF").or_raise();
///   Ok(value)
/// })
/// .await;
///
/// assert_eq!(output, Err("EOF"));
/// # }
/// ```
#[inline]
pub fn recover_future<F, T, E>(future: F) -> Recovered<F, E>
where
  F: Future<Output = Result<T, E>>,
  E: 'static,
{
  Recovered::new(future)
}

// -----------------------------------------------------------------------------
// Recovery - Terminal
// -----------------------------------------------------------------------------

/// Runs a guarded region, reporting a raise to `sink` and failing the
/// current thread.
///
/// The sink receives `{file_name}:{line}: {cause}`. Control never returns
/// to the guarded region: once the sink returns, the thread panics with the
/// same message, which fails the enclosing test or thread.
///
/// # Examples
///
/// ```should_panic
/// tryout::terminate::<&str, _>(
///   || tryout::raise0(Some("EOF")),
///   |message| eprintln!("{message}"),
/// );
/// ```
#[inline]
#[track_caller]
pub fn terminate<E, T>(body: impl FnOnce() -> T, sink: impl FnOnce(String)) -> T
where
  E: Display + 'static,
{
  match catch::<E, T>(body) {
    Ok(value) => value,
    Err((cause, origin)) => {
      let message: String = Report::new(cause, origin).to_string();
      sink(message.clone());
      panic!("{message}")
    }
  }
}

/// Runs a guarded region, reporting a raise and exiting the process.
///
/// The report is written to standard error and emitted as an error event
/// before the process exits with [`E_CODE_FAILURE_RAISE`].
pub fn terminate_process<E, T>(body: impl FnOnce() -> T) -> T
where
  E: Display + 'static,
{
  match catch::<E, T>(body) {
    Ok(value) => value,
    Err((cause, origin)) => {
      let report: Report<E> = Report::new(cause, origin);

      tracing::error!(origin = %origin, "{report}");
      write_stderr(&report);

      process::exit(E_CODE_FAILURE_RAISE)
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
