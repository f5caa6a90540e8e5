//! Tryout - Short-circuit error propagation over typed unwinding.
//!
//! Tryout collapses chains of "if error, return error" checks into single
//! expressions. A failing call raises its error as a typed unwind that skips
//! every intermediate frame, and the nearest enclosing recovery turns it
//! back into an ordinary value, together with the exact source location of
//! the raise.
//!
//! # Quick Start
//!
//! ```
//! use std::num::ParseIntError;
//! use tryout::Raise;
//!
//! fn sum(input: &str) -> Result<u32, ParseIntError> {
//!   tryout::recover(|| {
//!     let mut total: u32 = 0;
//!
//!     for token in input.split_whitespace() {
//!       total += token.parse::<u32>().or_raise();
//!     }
//!
//!     Ok(total)
//!   })
//! }
//!
//! assert_eq!(sum("1 2 3"), Ok(6));
//! assert!(sum("1 two 3").is_err());
//! ```
//!
//! # Core Modules
//!
//! - [`raise`]: The raise function family and the [`Raise`] extension
//! - [`recover`]: Scoped recovery forms
//! - [`signal`]: Raise origins and diagnostic reports
//! - [`consts`]: Exit codes used by the terminating recoveries
//!
//! # Missing Recovery
//!
//! A raise with no enclosing recovery of a matching cause type unwinds to
//! the thread boundary like any uncaught panic. When its signal is
//! discarded, `raise escaped every recovery: {file_name}:{line} ({cause})`
//! is written to standard error and emitted as an error event. Forgetting a
//! recovery is a bug, not a recoverable condition.
//!
//! # Scope
//!
//! Raises never cross threads or tasks. Each thread or task that raises
//! installs its own recovery at its entry point; see [`recover_future`] for
//! asynchronous code.
//!
//! [`raise`]: mod@crate::raise
//! [`recover`]: mod@crate::recover

mod utils;

pub mod consts;
pub mod raise;
pub mod recover;
pub mod signal;

pub use self::raise::Raise;
pub use self::raise::raise0;
pub use self::raise::raise1;
pub use self::raise::raise2;
pub use self::raise::raise3;
pub use self::raise::raise4;
pub use self::recover::recover;
pub use self::recover::recover_detailed;
pub use self::recover::recover_future;
pub use self::recover::recover_or_else;
pub use self::recover::recover_report;
pub use self::recover::recover_with;
pub use self::recover::terminate;
pub use self::recover::terminate_process;
pub use self::signal::BoxError;
pub use self::signal::Origin;
pub use self::signal::Report;
pub use self::utils::Recovered;
