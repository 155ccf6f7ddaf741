use exchangerate::{Argument, Client};

#[tokio::main]
async fn main() {
	env_logger::init();
	let base = std::env::args().nth(1).unwrap_or_else(|| "EUR".to_owned());
	let response = Client::with_http_client(reqwest::Client::new())
		.latest(&[Argument::base(&base)])
		.await
		.unwrap();
	for (currency, value) in response.rates.iter() {
		println!("{currency}, {value}");
	}
}
