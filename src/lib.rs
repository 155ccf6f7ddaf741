//! [exchangerate.host](https://exchangerate.host) API library.
//!
//! ```no_run
//! # async fn run() -> Result<(), exchangerate::Error> {
//! use exchangerate::{Argument, Client};
//!
//! let client = Client::new();
//! let response = client.convert("USD", "EUR", 10.0, &[Argument::places(2)]).await?;
//! println!("10 USD = {:?} EUR", response.result);
//! # Ok(()) }
//! ```

#![deny(missing_docs)]

pub mod argument;
mod client;
mod context;
pub mod currency;
mod error;
pub mod response;
mod url;

#[cfg(test)]
mod test_server;

pub use argument::{encode, Amount, Argument, Key};
pub use client::{Client, ClientBuilder};
pub use context::{CancelHandle, Context};
pub use currency::{CurrencyCode, InvalidCurrencyCodeError};
pub use error::{Error, TransportError};
pub use response::*;
pub use url::BASE_URL;
