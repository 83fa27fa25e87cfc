// Module declarations
mod cli;
mod collections;
mod config;
mod front_matter;
mod markdown;
mod structured;
mod utils;

fn main() {
    // Run the CLI
    std::process::exit(cli::run());
}
