//! Optional query [`Argument`]s and their [encoding](encode).
//!
//! Arguments are written raw: `key=value` pairs in the order given, joined by `&`, without
//! percent-encoding.

use std::fmt::{self, Display, Formatter, Write};

/// The name of an optional query parameter.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Key {
	/// `base`: the base currency.
	Base,
	/// `places`: rounding decimal places.
	Places,
	/// `amount`: the amount to convert.
	Amount,
	/// `symbols`: restricts the returned currencies.
	Symbols,
}

impl Key {
	/// The query parameter name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Key::Base => "base",
			Key::Places => "places",
			Key::Amount => "amount",
			Key::Symbols => "symbols",
		}
	}
}

impl Display for Key {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

/// An optional query parameter.
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
pub struct Argument {
	key: Key,
	value: String,
}

impl Argument {
	/// The [`base`](Key::Base) currency, as given.
	pub fn base(code: impl AsRef<str>) -> Self {
		Self { key: Key::Base, value: code.as_ref().to_owned() }
	}

	/// The number of decimal [`places`](Key::Places).
	pub fn places(places: u32) -> Self {
		Self { key: Key::Places, value: places.to_string() }
	}

	/// The [`amount`](Key::Amount), see [`Amount`] for the formatting.
	pub fn amount(amount: impl Amount) -> Self {
		let mut value = String::new();
		amount.write_amount(&mut value);
		Self { key: Key::Amount, value }
	}

	/// The [`symbols`](Key::Symbols) to restrict the response to, comma-joined in order.
	pub fn symbols<T: AsRef<str>>(symbols: impl IntoIterator<Item = T>) -> Self {
		let mut value = String::new();
		let mut symbols = symbols.into_iter();
		if let Some(head) = symbols.next() {
			value.push_str(head.as_ref());
			for symbol in symbols {
				value.push(',');
				value.push_str(symbol.as_ref());
			}
		}
		Self { key: Key::Symbols, value }
	}

	/// The parameter name.
	#[inline] pub fn key(&self) -> Key { self.key }
	/// The formatted value.
	#[inline] pub fn value(&self) -> &str { &self.value }

	pub(crate) fn write_to(&self, out: &mut String) {
		out.push_str(self.key.as_str());
		out.push('=');
		out.push_str(&self.value);
	}
}

/// Formats as `key=value`.
impl Display for Argument {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}={}", self.key, self.value)
	}
}

/// Encodes the arguments as a query string fragment, without a leading `?` or `&`.
///
/// An empty slice encodes to an empty string.
pub fn encode(args: &[Argument]) -> String {
	let mut out = String::new();
	write_args(&mut out, args, "");
	out
}

/// Appends the arguments to `out`, writing `prefix` before the first one and `&` between them.
///
/// Returns whether anything was written.
pub(crate) fn write_args(out: &mut String, args: &[Argument], prefix: &str) -> bool {
	let mut args = args.iter();
	match args.next() {
		Some(head) => {
			out.push_str(prefix);
			head.write_to(out);
			for arg in args {
				out.push('&');
				arg.write_to(out);
			}
			true
		}
		None => false,
	}
}

/// A number that can be sent as an amount.
///
/// Amounts are written in their shortest exact decimal form: no trailing zeros and no scientific
/// notation, e.g. `10.0` is written `10` and `1e21` is written `1000000000000000000000`.
/// Negative zero is written `0`.
///
/// Floats must be finite: `NaN` and infinities have no decimal form and are written as `NaN`,
/// `inf` and `-inf`, which the API rejects.
pub trait Amount {
	/// Appends the decimal representation to `out`.
	fn write_amount(&self, out: &mut String);
}

macro_rules! amount_display {
	($($t:ty),*) => {
		$(
			impl Amount for $t {
				fn write_amount(&self, out: &mut String) {
					// Display for primitives is infallible and never scientific.
					let _ = write!(out, "{self}");
				}
			}
		)*
	};
}

amount_display!(u32, u64);

macro_rules! amount_float {
	($($t:ty),*) => {
		$(
			impl Amount for $t {
				fn write_amount(&self, out: &mut String) {
					// -0.0 == 0.0
					let value = if *self == 0.0 { 0.0 } else { *self };
					let _ = write!(out, "{value}");
				}
			}
		)*
	};
}

amount_float!(f64, f32);

#[cfg(feature = "rust_decimal")]
impl Amount for rust_decimal::Decimal {
	fn write_amount(&self, out: &mut String) {
		let _ = write!(out, "{}", self.normalize());
	}
}

impl<T: Amount + ?Sized> Amount for &T {
	#[inline] fn write_amount(&self, out: &mut String) { (**self).write_amount(out) }
}
