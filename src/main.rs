use std::process;

mod cli;
mod config;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run() {
        log::error!("{err:#}");
        eprintln!("{err:#}");
        process::exit(1);
    }
}
