#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use core::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cmd: commands::normalize::NormalizeCmd = argh::from_env();
    util::logging::init_logging(cmd.verbose);
    commands::normalize::handle_normalize_command(cmd)?;
    Ok(())
}
