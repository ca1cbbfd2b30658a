use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use env_logger::Env;

use typo3_rst_hook::{Config, run_hook};

/// Advisory only: every outcome exits successfully.
fn main() {
    let config = Config::from_args_and_env();

    // Logs go to stderr; stdout carries only the advisory block
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    match run(&config) {
        Ok(Some(block)) => {
            if let Err(e) = writeln!(io::stdout(), "{block}") {
                log::debug!("Failed to write advisory: {e}");
            }
        }
        Ok(None) => {}
        Err(e) => log::debug!("Skipping validation: {e:#}"),
    }
}

fn run(config: &Config) -> Result<Option<String>> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    run_hook(&input, config)
}
