use std::io::stdin;

use clap::Parser;
use ui::repl;

use crate::service::data_manager::DataManager;

mod model;
mod service;
mod ui;

const DEFAULT_API_URL: &str = "http://35.208.176.209:3000";

/// Terminal client for pre-computed League champion statistics
#[derive(Parser, Debug)]
#[command(name = "riftstats")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the stats service
    #[arg(long = "api-url", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Load data from local JSON files instead of fetching from the service
    #[arg(short = 'l', long = "load-local")]
    load_local_json_files: bool,

    /// Store API responses to JSON files for debugging/testing
    #[arg(short = 's', long = "store-responses")]
    store_responses: bool,
}

fn main() {
    let args = Args::parse();

    match DataManager::new(&args.api_url, args.load_local_json_files, args.store_responses) {
        Ok(manager) => match repl::run(manager) {
            Ok(_) => return,
            Err(error) => println!("Error occured while running REPL:\n{}\n", error),
        },
        Err(error) => println!("Error occured while initializing:\n{}\n", error),
    };

    let mut s = String::new();
    println!("Press Enter to exit");
    let _ = stdin().read_line(&mut s);
}
