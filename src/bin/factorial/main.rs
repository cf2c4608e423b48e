#[macro_use]
extern crate log;

use anyhow::{Context, Error};
use std::io::{stdin, stdout};
use structopt::StructOpt;

mod config;
use crate::config::{config_file, get_args_from_config_file, merge_args, Config};
use factorial::repl::Outcome;

fn run() -> Result<(), Error> {
    let args = merge_args(get_args_from_config_file(), std::env::args_os());
    let config: Config = Config::from_iter(args);

    if config.config_file {
        println!("{}", config_file().to_string_lossy());
        return Ok(());
    }

    let repl = config.get_repl();
    let stdout = stdout();

    let outcome = if let Some(number) = &config.number {
        repl.eval(number, stdout.lock())
    } else {
        let stdin = stdin();
        repl.run(stdin.lock(), stdout.lock())
    }
    .context("Failed to talk to the terminal")?;

    if let Outcome::Computed { n, .. } = outcome {
        debug!("done with {}!", n);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("[error] {:#}", e);
    }
}
