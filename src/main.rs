#![allow(clippy::uninlined_format_args)]

mod args;
mod byteable;
mod commands;
mod constants;
mod error;
mod hashing;
mod object;
mod store;
mod utils;

use clap::Parser;
pub use constants::Constants;
pub use error::{Error, Result};

fn main() {
    env_logger::init();

    let args = args::Args::parse();

    match commands::execute_command(&args.command) {
        Ok(message) => {
            if !message.is_empty() {
                println!("{}", message)
            }
        }
        Err(error) => eprintln!("{:?}", error),
    }
}
