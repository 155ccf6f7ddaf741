//! [`Context`]: deadlines and cancellation for requests.

use std::{
	future::pending,
	sync::Arc,
	time::{Duration, Instant},
};

use tokio::sync::watch;

use crate::error::TransportError;

/// Bounds the lifetime of a request.
///
/// # Examples
/// ```
/// # use exchangerate::Context;
/// # use std::time::Duration;
/// let (ctx, cancel) = Context::background().with_timeout(Duration::from_secs(5)).with_cancel();
/// // hand `cancel` to whoever may abort the request
/// # drop((ctx, cancel));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
	deadline: Option<Instant>,
	cancel: Option<Arc<watch::Sender<bool>>>,
}

/// Cancels the requests of a [`Context`].
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<watch::Sender<bool>>);

impl CancelHandle {
	/// Aborts every request using the context, including future ones.
	pub fn cancel(&self) {
		self.0.send_replace(true);
	}

	/// Whether [`cancel`](Self::cancel) was called.
	pub fn is_cancelled(&self) -> bool { *self.0.borrow() }
}

impl Context {
	/// A context that never expires and cannot be cancelled.
	#[inline] pub fn background() -> Self { Self::default() }

	/// Expires `timeout` from now, or earlier if the context already had an earlier deadline.
	///
	/// A timeout too large to represent as an [`Instant`] leaves the deadline unchanged.
	pub fn with_timeout(self, timeout: Duration) -> Self {
		match Instant::now().checked_add(timeout) {
			Some(deadline) => self.with_deadline(deadline),
			None => self,
		}
	}

	/// Expires at `deadline`, or earlier if the context already had an earlier deadline.
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
		self
	}

	/// Makes the context cancellable.
	///
	/// If the context is already cancellable the returned handle shares its signal.
	pub fn with_cancel(mut self) -> (Self, CancelHandle) {
		let sender = self.cancel.get_or_insert_with(|| Arc::new(watch::channel(false).0)).clone();
		(self, CancelHandle(sender))
	}

	/// The deadline, if any.
	#[inline] pub fn deadline(&self) -> Option<Instant> { self.deadline }

	/// Completes once the context expires or is cancelled, with the matching cause.
	///
	/// Cancellation wins if both already happened.
	pub(crate) async fn done(&self) -> TransportError {
		let cancelled = async {
			match &self.cancel {
				Some(sender) => {
					let mut receiver = sender.subscribe();
					// The context holds the sender, so the channel cannot close under us.
					let closed = receiver.wait_for(|&cancelled| cancelled).await.is_err();
					if closed { pending::<()>().await }
				}
				None => pending().await,
			}
		};
		let expired = async {
			match self.deadline {
				Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
				None => pending().await,
			}
		};
		tokio::select! {
			biased;
			_ = cancelled => TransportError::Cancelled,
			_ = expired => TransportError::TimedOut,
		}
	}
}
