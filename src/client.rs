//! The API [`Client`].

use chrono::NaiveDate;
use log::{debug, trace};
use serde::de::DeserializeOwned;

use crate::{
	argument::{Amount, Argument},
	context::Context,
	error::{Error, TransportError},
	response::{ConvertResponse, HistoricalResponse, LatestResponse, SymbolsResponse, TimeSeriesResponse},
	url::{Endpoint, BASE_URL},
};

/// Endpoints without an amount parameter.
type Plain<'a> = Endpoint<'a, f64>;

/// [exchangerate.host](https://exchangerate.host) API client.
///
/// Each operation comes in two flavors: `op` runs unbounded, `op_ctx` runs under a [`Context`].
/// Cloning is cheap and clones share the HTTP client.
///
/// # Examples
/// ```no_run
/// # async fn run() -> Result<(), exchangerate::Error> {
/// use exchangerate::{Argument, Client};
///
/// let client = Client::new();
/// let latest = client.latest(&[Argument::base("EUR"), Argument::symbols(["USD", "GBP"])]).await?;
/// println!("{:?}", latest.rates);
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::Client,
	base_url: String,
}

impl Default for Client {
	fn default() -> Self { Self::new() }
}

impl Client {
	/// Creates a client for [`BASE_URL`] with a default HTTP client.
	pub fn new() -> Self { Self::builder().build() }

	/// Creates a client for [`BASE_URL`] around the given HTTP client.
	pub fn with_http_client(http: reqwest::Client) -> Self {
		Self::builder().http_client(http).build()
	}

	/// A [`ClientBuilder`] to configure a client.
	pub fn builder() -> ClientBuilder { ClientBuilder::default() }

	/// Replaces the HTTP client.
	///
	/// Requests already in flight keep the client they started with.
	pub fn set_http_client(&mut self, http: reqwest::Client) { self.http = http; }

	/// The HTTP client.
	#[inline] pub fn http_client(&self) -> &reqwest::Client { &self.http }

	/// The API base URL, without a trailing `/`.
	#[inline] pub fn base_url(&self) -> &str { &self.base_url }

	/// Converts `amount` of `from` to `to`.
	pub async fn convert(&self, from: impl AsRef<str>, to: impl AsRef<str>, amount: impl Amount, args: &[Argument]) -> Result<ConvertResponse, Error> {
		self.convert_ctx(&Context::background(), from, to, amount, args).await
	}

	/// [`convert`](Self::convert) under `ctx`.
	pub async fn convert_ctx(&self, ctx: &Context, from: impl AsRef<str>, to: impl AsRef<str>, amount: impl Amount, args: &[Argument]) -> Result<ConvertResponse, Error> {
		let endpoint = Endpoint::Convert { from: from.as_ref(), to: to.as_ref(), amount };
		self.fetch(ctx, endpoint.url(&self.base_url, args)).await
	}

	/// Rates on `date`.
	pub async fn historical(&self, date: NaiveDate, args: &[Argument]) -> Result<HistoricalResponse, Error> {
		self.historical_ctx(&Context::background(), date, args).await
	}

	/// [`historical`](Self::historical) under `ctx`.
	pub async fn historical_ctx(&self, ctx: &Context, date: NaiveDate, args: &[Argument]) -> Result<HistoricalResponse, Error> {
		self.fetch(ctx, Plain::Historical(date).url(&self.base_url, args)).await
	}

	/// Daily rates from `start` to `end`, inclusive.
	pub async fn time_series(&self, start: NaiveDate, end: NaiveDate, args: &[Argument]) -> Result<TimeSeriesResponse, Error> {
		self.time_series_ctx(&Context::background(), start, end, args).await
	}

	/// [`time_series`](Self::time_series) under `ctx`.
	pub async fn time_series_ctx(&self, ctx: &Context, start: NaiveDate, end: NaiveDate, args: &[Argument]) -> Result<TimeSeriesResponse, Error> {
		self.fetch(ctx, Plain::TimeSeries { start, end }.url(&self.base_url, args)).await
	}

	/// All supported currencies.
	pub async fn symbols(&self) -> Result<SymbolsResponse, Error> {
		self.symbols_ctx(&Context::background()).await
	}

	/// [`symbols`](Self::symbols) under `ctx`.
	pub async fn symbols_ctx(&self, ctx: &Context) -> Result<SymbolsResponse, Error> {
		self.fetch(ctx, Plain::Symbols.url(&self.base_url, &[])).await
	}

	/// The latest rates.
	pub async fn latest(&self, args: &[Argument]) -> Result<LatestResponse, Error> {
		self.latest_ctx(&Context::background(), args).await
	}

	/// [`latest`](Self::latest) under `ctx`.
	pub async fn latest_ctx(&self, ctx: &Context, args: &[Argument]) -> Result<LatestResponse, Error> {
		self.fetch(ctx, Plain::Latest.url(&self.base_url, args)).await
	}

	/// Sends a GET to `url` and decodes the body, aborting when `ctx` is done.
	async fn fetch<T: DeserializeOwned>(&self, ctx: &Context, url: String) -> Result<T, Error> {
		debug!("GET {url}");
		let request = async {
			let response = self.http.get(&url).send().await.map_err(TransportError::Http)?;
			let status = response.status();
			debug!("GET {url}: {status}");
			if !status.is_success() {
				return Err(Error::HttpStatus {
					code: status.as_u16(),
					reason: status.canonical_reason().unwrap_or_default().to_owned(),
				});
			}
			let body = response.bytes().await.map_err(TransportError::Http)?;
			Ok::<_, Error>(body)
		};
		let body = tokio::select! {
			biased;
			cause = ctx.done() => return Err(cause.into()),
			body = request => body?,
		};
		trace!("GET {url}: {} bytes", body.len());
		serde_json::from_slice(&body).map_err(|source| Error::decode(source, &body))
	}
}

/// [`Client`] configuration.
#[derive(Debug, Default, Clone)]
pub struct ClientBuilder {
	http: Option<reqwest::Client>,
	base_url: Option<String>,
}

impl ClientBuilder {
	/// Sets the HTTP client. Defaults to [`reqwest::Client::new`].
	pub fn http_client(mut self, http: reqwest::Client) -> Self {
		self.http = Some(http);
		self
	}

	/// Sets the API base URL. Defaults to [`BASE_URL`].
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Builds the [`Client`].
	pub fn build(self) -> Client {
		let mut base_url = self.base_url.unwrap_or_else(|| BASE_URL.to_owned());
		while base_url.ends_with('/') { base_url.pop(); }
		Client {
			http: self.http.unwrap_or_default(),
			base_url,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::test_server::{refused_url, TestServer};

	fn client(server: &TestServer) -> Client {
		Client::builder().base_url(&server.url).build()
	}

	fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

	const CONVERT_BODY: &str = r#"{
		"motd": {"msg": "hi", "url": "https://exchangerate.host/#/donate"},
		"success": true,
		"query": {"from": "USD", "to": "EUR", "amount": 10},
		"info": {"rate": 0.85},
		"historical": false,
		"date": "2023-03-01",
		"result": 8.5
	}"#;

	#[test]
	fn test_builder() {
		let client = Client::builder().base_url("http://localhost:8080//").build();
		assert_eq!(client.base_url(), "http://localhost:8080");
		assert_eq!(Client::new().base_url(), BASE_URL);
	}

	#[tokio::test]
	async fn test_convert() {
		let server = TestServer::respond(200, "OK", CONVERT_BODY).await;
		let response = client(&server).convert("USD", "EUR", 10.0, &[]).await.unwrap();
		assert_eq!(response.result, Some(8.5));
		assert!(response.success);
		assert_eq!(response.query.from, "USD");
		assert_eq!(response.info.rate, Some(0.85));
		assert_eq!(response.date, Some(date(2023, 3, 1)));
		assert_eq!(server.target().await, "/convert?from=USD&to=EUR&amount=10");
	}

	#[tokio::test]
	async fn test_convert_with_args() {
		use crate::currency::list::{EUR, USD};
		let server = TestServer::respond(200, "OK", CONVERT_BODY).await;
		client(&server).convert(USD, EUR, 10.25, &[Argument::places(2)]).await.unwrap();
		assert_eq!(server.target().await, "/convert?from=USD&to=EUR&amount=10.25&places=2");
	}

	#[tokio::test]
	async fn test_historical_path() {
		let server = TestServer::respond(200, "OK", r#"{
			"success": true, "historical": true, "base": "EUR", "date": "2023-03-01", "rates": {"USD": 1.06}
		}"#).await;
		let response = client(&server).historical(date(2023, 3, 1), &[]).await.unwrap();
		assert_eq!(response.rates["USD"], 1.06);
		assert_eq!(server.target().await, "/2023-03-01");
	}

	#[tokio::test]
	async fn test_time_series() {
		let server = TestServer::respond(200, "OK", r#"{
			"success": true, "timeseries": true, "base": "USD",
			"start_date": "2020-01-01", "end_date": "2020-01-02",
			"rates": {"2020-01-01": {"EUR": 0.89}, "2020-01-02": {"EUR": 0.9}}
		}"#).await;
		let response = client(&server)
			.time_series(date(2020, 1, 1), date(2020, 1, 2), &[Argument::base("USD"), Argument::symbols(["EUR"])])
			.await
			.unwrap();
		assert_eq!(response.rates[&date(2020, 1, 2)]["EUR"], 0.9);
		assert_eq!(server.target().await, "/timeseries?start_date=2020-01-01&end_date=2020-01-02&base=USD&symbols=EUR");
	}

	#[tokio::test]
	async fn test_symbols() {
		let server = TestServer::respond(200, "OK", r#"{
			"success": true, "symbols": {"USD": {"description": "United States Dollar", "code": "USD"}}
		}"#).await;
		let response = client(&server).symbols().await.unwrap();
		assert_eq!(response.symbols["USD"].code, "USD");
		assert_eq!(server.target().await, "/symbols");
	}

	#[tokio::test]
	async fn test_latest() {
		let server = TestServer::respond(200, "OK", r#"{
			"success": true, "base": "EUR", "date": "2023-03-01", "rates": {"USD": 1.06, "GBP": 0.88}
		}"#).await;
		let response = client(&server).latest(&[]).await.unwrap();
		assert_eq!(response.base, "EUR");
		assert_eq!(response.rates.len(), 2);
		assert_eq!(server.target().await, "/latest");
	}

	#[tokio::test]
	async fn test_status_error_skips_body() {
		let server = TestServer::respond(500, "Internal Server Error", "<html>oops</html>").await;
		let error = client(&server).latest(&[Argument::base("EUR")]).await.unwrap_err();
		match error {
			Error::HttpStatus { code, reason } => {
				assert_eq!(code, 500);
				assert_eq!(reason, "Internal Server Error");
			}
			other => panic!("unexpected {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_status_error_uses_canonical_reason() {
		let server = TestServer::respond(503, "Busy", "not json").await;
		let error = client(&server).historical(date(2023, 3, 1), &[]).await.unwrap_err();
		match error {
			Error::HttpStatus { code, reason } => {
				assert_eq!(code, 503);
				assert_eq!(reason, "Service Unavailable");
			}
			other => panic!("unexpected {other:?}"),
		}
		assert_eq!(server.target().await, "/2023-03-01");
	}

	#[tokio::test]
	async fn test_malformed_body() {
		let server = TestServer::respond(200, "OK", r#"{"success": true, "result": "#).await;
		let error = client(&server).convert("USD", "EUR", 1.0, &[]).await.unwrap_err();
		match error {
			Error::Decode { snippet, .. } => assert_eq!(snippet, r#"{"success": true, "result": "#),
			other => panic!("unexpected {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_connection_refused() {
		let client = Client::builder().base_url(refused_url().await).build();
		let error = client.symbols().await.unwrap_err();
		assert!(matches!(error, Error::Transport(TransportError::Http(_))));
	}

	#[tokio::test]
	async fn test_context_timeout() {
		let server = TestServer::stall().await;
		let ctx = Context::background().with_timeout(Duration::from_millis(50));
		let error = client(&server).latest_ctx(&ctx, &[]).await.unwrap_err();
		assert!(matches!(error, Error::Transport(TransportError::TimedOut)));
	}

	#[tokio::test]
	async fn test_context_cancel() {
		let server = TestServer::stall().await;
		let (ctx, cancel) = Context::background().with_cancel();
		tokio::spawn(async move {
			tokio::time::sleep(Duration::from_millis(20)).await;
			cancel.cancel();
		});
		let error = client(&server).symbols_ctx(&ctx).await.unwrap_err();
		assert!(matches!(error, Error::Transport(TransportError::Cancelled)));
	}

	#[tokio::test]
	async fn test_cancelled_context_fails_immediately() {
		let (ctx, cancel) = Context::background().with_cancel();
		cancel.cancel();
		let client = Client::builder().base_url(refused_url().await).build();
		let error = client.historical_ctx(&ctx, date(2023, 3, 1), &[]).await.unwrap_err();
		assert!(matches!(error, Error::Transport(TransportError::Cancelled)));
	}

	#[tokio::test]
	async fn test_set_http_client() {
		let server = TestServer::respond(200, "OK", CONVERT_BODY).await;
		let mut client = client(&server);
		client.set_http_client(reqwest::Client::builder().timeout(Duration::from_secs(5)).build().unwrap());
		let response = client.convert("USD", "EUR", 10.0, &[]).await.unwrap();
		assert_eq!(response.result, Some(8.5));
	}
}
