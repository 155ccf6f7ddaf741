//! One-shot HTTP server for tests.

use std::time::Duration;

use tokio::{
	io::{AsyncReadExt, AsyncWriteExt},
	net::{TcpListener, TcpStream},
	task::JoinHandle,
};

/// Serves a single canned response on a local port.
pub struct TestServer {
	/// `http://127.0.0.1:<port>`, usable as a base URL.
	pub url: String,
	handle: JoinHandle<String>,
}

impl TestServer {
	/// Answers the first request with `status` and `body`.
	pub async fn respond(status: u16, reason: &'static str, body: &'static str) -> Self {
		Self::spawn(move |mut stream| async move {
			let response = format!(
				"HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len(),
			);
			stream.write_all(response.as_bytes()).await.unwrap();
			stream.shutdown().await.unwrap();
		}).await
	}

	/// Accepts the first request and never answers.
	pub async fn stall() -> Self {
		Self::spawn(|stream| async move {
			tokio::time::sleep(Duration::from_secs(60)).await;
			drop(stream);
		}).await
	}

	async fn spawn<F, Fut>(reply: F) -> Self
	where
		F: FnOnce(TcpStream) -> Fut + Send + 'static,
		Fut: std::future::Future<Output = ()> + Send + 'static,
	{
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let url = format!("http://{}", listener.local_addr().unwrap());
		let handle = tokio::spawn(async move {
			let (mut stream, _) = listener.accept().await.unwrap();
			let head = read_head(&mut stream).await;
			let request_line = head.lines().next().unwrap_or_default().to_owned();
			tokio::spawn(reply(stream));
			request_line
		});
		Self { url, handle }
	}

	/// The request target of the served request, e.g. `/latest?base=EUR`.
	pub async fn target(self) -> String {
		let request_line = self.handle.await.unwrap();
		request_line.split(' ').nth(1).unwrap_or_default().to_owned()
	}
}

async fn read_head(stream: &mut TcpStream) -> String {
	let mut head = Vec::new();
	let mut buf = [0u8; 1024];
	while !head.windows(4).any(|w| w == b"\r\n\r\n") {
		let n = stream.read(&mut buf).await.unwrap();
		if n == 0 { break }
		head.extend_from_slice(&buf[..n]);
	}
	String::from_utf8_lossy(&head).into_owned()
}

/// A base URL nothing listens on.
pub async fn refused_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let url = format!("http://{}", listener.local_addr().unwrap());
	drop(listener);
	url
}
