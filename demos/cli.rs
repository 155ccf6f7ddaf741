use std::time::Duration;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use exchangerate::{Argument, Client, Context, CurrencyCode};

#[derive(Parser, Debug)]
pub struct Cli {
	/// Overrides the API host.
	#[clap(long)]
	base_url: Option<String>,
	/// Gives up after this many seconds.
	#[clap(long, default_value_t = 10)]
	timeout: u64,
	#[clap(subcommand)]
	command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
	Latest {
		#[clap(long)]
		base: Option<CurrencyCode>,
		currencies: Vec<CurrencyCode>,
	},
	Convert {
		from: CurrencyCode,
		to: CurrencyCode,
		amount: f64,
		#[clap(long)]
		places: Option<u32>,
	},
	Historical {
		date: NaiveDate,
		#[clap(long)]
		base: Option<CurrencyCode>,
	},
	Timeseries {
		start: NaiveDate,
		end: NaiveDate,
		currencies: Vec<CurrencyCode>,
	},
	Symbols,
}

fn currency_args(base: Option<CurrencyCode>, currencies: Vec<CurrencyCode>) -> Vec<Argument> {
	let mut args = Vec::new();
	if let Some(base) = base { args.push(Argument::base(base)); }
	if !currencies.is_empty() { args.push(Argument::symbols(currencies)); }
	args
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let cli = Cli::parse();

	let mut client = Client::builder();
	if let Some(base_url) = cli.base_url { client = client.base_url(base_url); }
	let client = client.build();
	let ctx = Context::background().with_timeout(Duration::from_secs(cli.timeout));

	match cli.command {
		CliCommand::Latest { base, currencies } => {
			let response = client.latest_ctx(&ctx, &currency_args(base, currencies)).await?;
			println!("Rates for {} as of {}", response.base, response.date);
			for (currency, rate) in &response.rates { println!("{currency} {rate}"); }
		}
		CliCommand::Convert { from, to, amount, places } => {
			let args: Vec<_> = places.map(Argument::places).into_iter().collect();
			let response = client.convert_ctx(&ctx, from, to, amount, &args).await?;
			match response.result {
				Some(result) => println!("{amount} {from} = {result} {to}"),
				None => println!("cannot convert {from} to {to}"),
			}
		}
		CliCommand::Historical { date, base } => {
			let response = client.historical_ctx(&ctx, date, &currency_args(base, Vec::new())).await?;
			for (currency, rate) in &response.rates { println!("{} {currency} {rate}", response.date); }
		}
		CliCommand::Timeseries { start, end, currencies } => {
			let response = client.time_series_ctx(&ctx, start, end, &currency_args(None, currencies)).await?;
			for (date, rates) in &response.rates {
				for (currency, rate) in rates { println!("{date} {currency} {rate}"); }
			}
		}
		CliCommand::Symbols => {
			let response = client.symbols_ctx(&ctx).await?;
			for symbol in response.symbols.values() { println!("{} {}", symbol.code, symbol.description); }
		}
	}
	Ok(())
}
