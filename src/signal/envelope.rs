use std::any::Any;
use std::any::TypeId;
use std::error::Error;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::panic;

use crate::signal::Origin;
use crate::utils::write_stderr;

/// A type-erased unwind payload.
pub(crate) type Payload = Box<dyn Any + Send>;

/// A type-erased error, the common target for causes of any type.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Converts a type-erased cause into a [`BoxError`].
type Erase = fn(Payload) -> BoxError;

/// The payload of an in-flight raise.
///
/// A `Signal` wraps the raised cause together with the origin of the raise.
/// It is created by the raise functions, travels as the unwind payload, and
/// is consumed by exactly one recovery via [`Signal::into_cause`].
///
/// The cause is stored type-erased alongside a conversion into [`BoxError`],
/// so a recovery expecting a boxed error can claim causes of any type.
///
/// # Drop Behavior
///
/// A signal that still holds its cause when dropped was never recovered:
/// some boundary outside this crate (a thread exit, the runtime's `main`
/// shim, or a foreign `catch_unwind`) discarded it. This is written to
/// standard error and emitted as an error event.
pub(crate) struct Signal {
  cause: Option<Payload>,
  cause_type: &'static str,
  origin: Origin,
  erase: Erase,
}

impl Signal {
  /// Raises `cause` as a signal originating at the caller.
  #[cold]
  #[inline(never)]
  #[track_caller]
  pub(crate) fn raise<E>(cause: E) -> !
  where
    E: Into<BoxError> + Send + 'static,
  {
    let this: Self = Self {
      cause: Some(Box::new(cause)),
      cause_type: std::any::type_name::<E>(),
      origin: Origin::caller(),
      erase: erase::<E>,
    };

    panic::resume_unwind(Box::new(this))
  }

  /// Attempts to claim an unwind payload as a signal.
  ///
  /// Payloads of any other shape are handed back untouched.
  #[inline]
  pub(crate) fn claim(payload: Payload) -> Result<Box<Self>, Payload> {
    payload.downcast::<Self>()
  }

  /// Consumes the signal, returning the cause as `E` and its origin.
  ///
  /// The cause converts when `E` is its own type or one of the boxed
  /// `dyn Error` types. Otherwise the signal is handed back intact.
  pub(crate) fn into_cause<E>(mut self: Box<Self>) -> Result<(E, Origin), Box<Self>>
  where
    E: 'static,
  {
    let Some(cause) = self.cause.take() else {
      // `cause` is only ever taken here, and a taken signal is consumed.
      unreachable!()
    };

    let cause: Payload = match cause.downcast::<E>() {
      Ok(cause) => return Ok((*cause, self.origin)),
      Err(cause) => cause,
    };

    match convert::<E>(cause, self.erase) {
      Ok(cause) => Ok((cause, self.origin)),
      Err(cause) => {
        self.cause = Some(cause);
        Err(self)
      }
    }
  }

  /// Returns the type name of the raised cause.
  #[inline]
  pub(crate) const fn cause_type(&self) -> &'static str {
    self.cause_type
  }

  /// Returns the diagnostic for a signal that escaped every recovery.
  pub(crate) fn escaped(&self) -> String {
    format!(
      "raise escaped every recovery: {} ({})",
      self.origin, self.cause_type,
    )
  }
}

impl Debug for Signal {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Signal")
      .field("cause_type", &self.cause_type)
      .field("origin", &self.origin)
      .finish_non_exhaustive()
  }
}

impl Drop for Signal {
  fn drop(&mut self) {
    if self.cause.is_some() {
      let message: String = self.escaped();

      tracing::error!(origin = %self.origin, cause = self.cause_type, "{message}");
      write_stderr(&message);
    }
  }
}

// -----------------------------------------------------------------------------
// Cause Conversion
// -----------------------------------------------------------------------------

fn erase<E>(cause: Payload) -> BoxError
where
  E: Into<BoxError> + 'static,
{
  match cause.downcast::<E>() {
    Ok(cause) => (*cause).into(),
    // `erase::<E>` is only ever stored next to a cause of type `E`.
    Err(_) => unreachable!(),
  }
}

fn convert<E>(cause: Payload, erase: Erase) -> Result<E, Payload>
where
  E: 'static,
{
  let target: TypeId = TypeId::of::<E>();

  let boxed: Box<dyn Any> = if target == TypeId::of::<BoxError>() {
    Box::new(erase(cause))
  } else if target == TypeId::of::<Box<dyn Error + Send>>() {
    Box::new(erase(cause) as Box<dyn Error + Send>)
  } else if target == TypeId::of::<Box<dyn Error>>() {
    Box::new(erase(cause) as Box<dyn Error>)
  } else {
    return Err(cause);
  };

  match boxed.downcast::<E>() {
    Ok(cause) => Ok(*cause),
    // The branches above box exactly the type `E` names.
    Err(_) => unreachable!(),
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
