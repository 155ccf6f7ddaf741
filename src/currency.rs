//! [Currency codes](CurrencyCode).

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
///
/// Every operation taking a currency accepts `impl AsRef<str>`, so this type is optional: it only adds
/// validation. See the constants in [`list`].
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [u8; 3],
}

/// The default currency code is [`USD`](list::USD).
///
/// It is chosen for being the most traded currency.
impl Default for CurrencyCode {
	#[inline] fn default() -> Self { list::USD }
}

impl CurrencyCode {
	/// Creates a new [`CurrencyCode`].
	///
	/// # Safety
	/// Ensure the code is uppercase alpha ASCII.
	pub const unsafe fn from_bytes_unchecked(code: [u8; 3]) -> Self {
		Self { code }
	}
}

impl TryFrom<[u8; 3]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
		if value.iter().all(u8::is_ascii_uppercase) {
			Ok(Self { code: value })
		} else {
			Err(InvalidCurrencyCodeError)
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		let value: [u8; 3] = value.try_into().map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(value)
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		Self::try_from(value.as_bytes())
	}
}

impl FromStr for CurrencyCode {
	type Err = InvalidCurrencyCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> { s.try_into() }
}

impl AsRef<[u8]> for CurrencyCode {
	fn as_ref(&self) -> &[u8] { &self.code }
}

impl AsRef<str> for CurrencyCode {
	fn as_ref(&self) -> &str {
		unsafe {
			// SAFETY: the code is always ASCII per the invariant documented in CurrencyCode::code,
			// therefore valid UTF-8.
			std::str::from_utf8_unchecked(&self.code)
		}
	}
}

impl Display for CurrencyCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let code: &str = self.as_ref();
		code.fmt(f)
	}
}

impl Serialize for CurrencyCode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_ref())
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let code = String::deserialize(deserializer)?;
		code.parse().map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&code), &"a three letter uppercase currency code"))
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three uppercase alpha ASCII characters.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, thiserror::Error)]
#[error("invalid currency code")]
pub struct InvalidCurrencyCodeError;

/// Common currency codes.
pub mod list {
	use super::CurrencyCode;

	macro_rules! defcurrency {
		($($id:ident),* $(,)?) => {
			$(
				#[doc = concat!("`", stringify!($id), "`")]
				pub const $id: CurrencyCode = code(stringify!($id));
			)*

			/// All the codes in this module.
			pub const ARRAY: &[CurrencyCode] = &[$($id),*];
		};
	}

	const fn code(id: &str) -> CurrencyCode {
		let bytes = id.as_bytes();
		assert!(bytes.len() == 3, "currency codes are three letters");
		// SAFETY: only called with the uppercase identifiers below.
		unsafe { CurrencyCode::from_bytes_unchecked([bytes[0], bytes[1], bytes[2]]) }
	}

	defcurrency!(
		AUD, BRL, CAD, CHF, CNY, CZK, DKK, EUR, GBP, HKD, HUF, ILS, INR, JPY, KRW,
		MXN, NOK, NZD, PLN, RUB, SEK, SGD, THB, TRY, UAH, USD, ZAR,
	);
}
