use clap::Parser;

use azure_infra_creator::app;
use azure_infra_creator::cli::Cli;

fn main() {
    env_logger::init();
    let _cli = Cli::parse();

    if let Err(err) = app::bootstrap::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
