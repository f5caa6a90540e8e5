//! Utility types used by the recovery forms.
//!
//! # Contents
//!
//! - [`Recovered`]: Future wrapper for recovering raised signals
//! - [`write_stderr`]: Diagnostic output shared by the loud failure paths

mod futures;
mod stderr;

pub use self::futures::Recovered;

pub(crate) use self::stderr::write_stderr;
