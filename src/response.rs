//! Response records.
//!
//! These are only produced by decoding response bodies.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Currency code → rate.
pub type Rates = BTreeMap<String, f64>;

/// Message of the day, attached to every response.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Motd {
	/// The message.
	#[serde(default)]
	pub msg: String,
	/// A link for the message.
	#[serde(default)]
	pub url: String,
}

/// A currency symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Symbol {
	/// Human readable name, e.g. `United States Dollar`.
	pub description: String,
	/// The currency code, e.g. `USD`.
	pub code: String,
}

/// Response of [`symbols`](crate::Client::symbols).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymbolsResponse {
	/// Message of the day.
	#[serde(default, alias = "Motd")]
	pub motd: Motd,
	/// Whether the request succeeded.
	pub success: bool,
	/// Currency code → symbol.
	pub symbols: BTreeMap<String, Symbol>,
}

/// The query echoed by [`ConvertResponse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvertQuery {
	/// Source currency.
	pub from: String,
	/// Target currency.
	pub to: String,
	/// Amount to convert.
	pub amount: f64,
}

/// The rate used by [`ConvertResponse`].
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ConvertInfo {
	/// `to` units per `from` unit. Missing if the conversion failed.
	#[serde(default)]
	pub rate: Option<f64>,
}

/// Response of [`convert`](crate::Client::convert).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvertResponse {
	/// Message of the day.
	#[serde(default, alias = "Motd")]
	pub motd: Motd,
	/// Whether the request succeeded.
	pub success: bool,
	/// The request parameters.
	pub query: ConvertQuery,
	/// The conversion rate.
	#[serde(default)]
	pub info: ConvertInfo,
	/// Whether historical rates were used.
	#[serde(default)]
	pub historical: bool,
	/// The date of the rates.
	#[serde(default)]
	pub date: Option<NaiveDate>,
	/// The converted amount. Missing if the conversion failed.
	pub result: Option<f64>,
}

/// Response of [`time_series`](crate::Client::time_series).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeSeriesResponse {
	/// Message of the day.
	#[serde(default, alias = "Motd")]
	pub motd: Motd,
	/// Whether the request succeeded.
	pub success: bool,
	/// Always `true` for this endpoint.
	#[serde(default)]
	pub timeseries: bool,
	/// The base currency.
	pub base: String,
	/// First day of the range.
	pub start_date: NaiveDate,
	/// Last day of the range.
	pub end_date: NaiveDate,
	/// Date → currency code → rate.
	pub rates: BTreeMap<NaiveDate, Rates>,
}

/// Response of [`historical`](crate::Client::historical).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalResponse {
	/// Message of the day.
	#[serde(default, alias = "Motd")]
	pub motd: Motd,
	/// Whether the request succeeded.
	pub success: bool,
	/// Always `true` for this endpoint.
	#[serde(default)]
	pub historical: bool,
	/// The base currency.
	pub base: String,
	/// The date of the rates.
	pub date: NaiveDate,
	/// Currency code → rate.
	pub rates: Rates,
}

/// Response of [`latest`](crate::Client::latest).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatestResponse {
	/// Message of the day.
	#[serde(default, alias = "Motd")]
	pub motd: Motd,
	/// Whether the request succeeded.
	pub success: bool,
	/// The base currency.
	pub base: String,
	/// The date of the rates.
	pub date: NaiveDate,
	/// Currency code → rate.
	pub rates: Rates,
}
