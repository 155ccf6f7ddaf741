//! [`Error`] type.

/// An error from the API or from the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The request never completed.
	#[error("transport error: {0}")]
	Transport(#[from] TransportError),
	/// The server answered with a non-success status. The body is not read.
	#[error("http status error: {code} {reason}")]
	HttpStatus {
		/// The status code.
		code: u16,
		/// The canonical reason phrase of the status code, empty if unknown.
		///
		/// The phrase the server sent is not kept.
		reason: String,
	},
	/// The response body did not match the expected record.
	#[error("failed to decode the response: {source}")]
	Decode {
		/// The JSON error.
		#[source]
		source: serde_json::Error,
		/// The head of the offending body.
		snippet: String,
	},
}

/// Why a request did not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	/// The HTTP client failed (DNS, connection, body read, ...).
	#[error("http error: {0}")]
	Http(#[from] reqwest::Error),
	/// The [`Context`](crate::Context) deadline passed.
	#[error("the request deadline passed")]
	TimedOut,
	/// The [`Context`](crate::Context) was cancelled.
	#[error("the request was cancelled")]
	Cancelled,
}

impl TransportError {
	/// Whether the request timed out, either by the context deadline or the HTTP client's own timeout.
	pub fn is_timeout(&self) -> bool {
		match self {
			TransportError::Http(e) => e.is_timeout(),
			TransportError::TimedOut => true,
			TransportError::Cancelled => false,
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(error: reqwest::Error) -> Self { Self::Transport(error.into()) }
}

/// How many bytes of a malformed body are kept in [`Error::Decode`].
pub(crate) const SNIPPET_LEN: usize = 256;

impl Error {
	pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
		let head = &body[..body.len().min(SNIPPET_LEN)];
		Self::Decode { source, snippet: String::from_utf8_lossy(head).into_owned() }
	}
}
