//! URL building

use std::fmt::Write;

use chrono::NaiveDate;

use crate::argument::{write_args, Amount, Argument};

/// The production API host.
pub const BASE_URL: &str = "https://api.exchangerate.host";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// An endpoint with its required parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Endpoint<'a, A> {
	Convert { from: &'a str, to: &'a str, amount: A },
	Historical(NaiveDate),
	TimeSeries { start: NaiveDate, end: NaiveDate },
	Symbols,
	Latest,
}

impl<'a, A: Amount> Endpoint<'a, A> {
	/// Writes the full URL under `base`.
	///
	/// Optional `args` follow the required parameters. `?` is written only if a query follows.
	pub(crate) fn url(&self, base: &str, args: &[Argument]) -> String {
		let mut url = String::from(base);
		let has_query = match self {
			Endpoint::Convert { from, to, amount } => {
				url.push_str("/convert?from=");
				url.push_str(from);
				url.push_str("&to=");
				url.push_str(to);
				url.push_str("&amount=");
				amount.write_amount(&mut url);
				true
			}
			Endpoint::Historical(date) => {
				let _ = write!(url, "/{}", date.format(DATE_FORMAT));
				false
			}
			Endpoint::TimeSeries { start, end } => {
				let _ = write!(url, "/timeseries?start_date={}&end_date={}", start.format(DATE_FORMAT), end.format(DATE_FORMAT));
				true
			}
			Endpoint::Symbols => {
				url.push_str("/symbols");
				return url;
			}
			Endpoint::Latest => {
				url.push_str("/latest");
				false
			}
		};
		write_args(&mut url, args, if has_query { "&" } else { "?" });
		url
	}
}
