use std::fmt::Display;
use std::io;
use std::io::Write;

/// Writes a diagnostic line to standard error.
///
/// A failed write is reported as a warning event; there is no other channel
/// left to surface it on.
pub(crate) fn write_stderr<T>(message: &T)
where
  T: Display + ?Sized,
{
  let mut stderr: io::StderrLock<'static> = io::stderr().lock();

  if let Err(error) = writeln!(stderr, "{message}") {
    tracing::warn!(%error, "failed to write diagnostic to stderr");
  }
}
