use clap::Parser;
use rebrand_core::ConfigError;
use std::process;

mod cli;
mod rebrand;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let config = rebrand::config_from_cli(cli).unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        process::exit(2);
    });

    if let Err(e) = rebrand::handle_rebrand(&config) {
        eprintln!("Error: {e:#}");
        let code = if e.downcast_ref::<ConfigError>().is_some() {
            2
        } else {
            1
        };
        process::exit(code);
    }
}
