//! Signal envelopes, raise origins, and diagnostic reports.
//!
//! A raise travels as an unwind whose payload is a private signal envelope
//! holding the cause and the [`Origin`] of the raise. Envelopes are never
//! observable outside an in-flight unwind; recoveries take them apart and
//! hand out the cause, the origin, or a [`Report`] combining both.
//!
//! # Signal Shape
//!
//! Recoveries identify their own signals by payload type. A signal raised
//! with a cause of type `E` is claimed by a recovery expecting `E`, or by a
//! recovery expecting one of the boxed `dyn Error` types, into which every
//! cause converts. A recovery expecting some other concrete type resumes the
//! signal toward an outer recovery. Every other payload, including ordinary
//! panics, is foreign and resumes unwinding untouched.

mod envelope;
mod origin;
mod report;

pub(crate) use self::envelope::Payload;
pub(crate) use self::envelope::Signal;

pub use self::envelope::BoxError;
pub use self::origin::Origin;
pub use self::report::Report;
