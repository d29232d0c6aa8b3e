// School Calendar
// Command-line entry point

use clap::Parser;

use school_calendar::cli::{run, Cli};

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Starting school-calendar with {:?}", cli);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}
