use osekurs::cli;
use osekurs::config::Config;
use osekurs::scrapers::base::HttpFetcher;
use osekurs::util;
use osekurs::QuoteService;

use clap::{App, Arg};
use log::info;
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let matches = App::new("osekurs")
        .version("0.1.0")
        .about("End-of-day quote retrieval for Oslo Børs")
        .arg(
            Arg::with_name("ticker")
                .value_name("TICKER")
                .help("OSE ticker of the instrument")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("mode")
                .value_name("MODE")
                .help("Output mode: csv, plot or current")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("from")
                .value_name("FROM")
                .help("From-date (YYYYMMDD); omit for full history")
                .index(3),
        )
        .arg(
            Arg::with_name("to")
                .value_name("TO")
                .help("To-date (YYYYMMDD); omit for today")
                .index(4),
        )
        .arg(
            Arg::with_name("inclusive")
                .long("inclusive")
                .help("Keep rows dated exactly on the range bounds (the default drops them)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("out-dir")
                .long("out-dir")
                .value_name("DIR")
                .help("Directory for CSV and chart files")
                .takes_value(true)
                .default_value("."),
        )
        .get_matches();

    let mut date_args = Vec::new();
    if let Some(from) = matches.value_of("from") {
        date_args.push(from.to_string());
    }
    if let Some(to) = matches.value_of("to") {
        date_args.push(to.to_string());
    }

    // All argument problems are reported together before any retrieval.
    let options = cli::build_options(
        matches.value_of("ticker").unwrap(),
        matches.value_of("mode").unwrap(),
        &date_args,
        matches.is_present("inclusive"),
        util::today(),
    )?;

    let config = Config::new().with_output_dir(matches.value_of("out-dir").unwrap());
    let service = QuoteService::new(config, Arc::new(HttpFetcher::new()?));

    if let Some(path) = service.run(&options).await? {
        info!("Output written to {}", path.display());
        println!("{}", path.display());
    }

    Ok(())
}
