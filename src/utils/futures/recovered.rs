// Layout follows:
//
// https://docs.rs/futures/0.3.31/futures/future/struct.CatchUnwind.html

use pin_project_lite::pin_project;
use std::marker::PhantomData;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;

use crate::recover;

pin_project! {
  /// Future for [`recover_future`].
  ///
  /// Every poll of the inner future runs under recovery. A raised signal
  /// whose cause is `E` completes this future with `Err(cause)`; foreign
  /// unwinds resume through the caller of `poll`.
  ///
  /// [`recover_future`]: crate::recover_future
  #[derive(Debug)]
  #[must_use = "futures do nothing unless you `.await` or poll them"]
  pub struct Recovered<F, E> {
    #[pin]
    future: F,
    marker: PhantomData<fn() -> E>,
  }
}

impl<F, T, E> Recovered<F, E>
where
  F: Future<Output = Result<T, E>>,
  E: 'static,
{
  #[inline]
  pub(crate) const fn new(future: F) -> Self {
    Self {
      future,
      marker: PhantomData,
    }
  }
}

impl<F, T, E> Future for Recovered<F, E>
where
  F: Future<Output = Result<T, E>>,
  E: 'static,
{
  type Output = Result<T, E>;

  fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
    let future: Pin<&mut F> = self.project().future;
    let assert: AssertUnwindSafe<_> = AssertUnwindSafe(|| future.poll(context));

    match panic::catch_unwind(assert) {
      Ok(poll) => poll,
      Err(payload) => Poll::Ready(Err(recover::claim(payload).0)),
    }
  }
}
