mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod qa;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // Enable debug early so config loading is traced too
    set_debug(cli.debug);
    let config = Config::load();
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
