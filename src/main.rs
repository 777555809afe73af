use clap::Parser;
use std::process;

use ml_advisor::cli::AdvisorArgs;

fn main() {
    let args = AdvisorArgs::parse();
    ml_advisor::init_tracing(args.log_level());

    if let Err(e) = ml_advisor::run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
