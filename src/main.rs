use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use make_dataset::{Cli, Error, Options};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let options = match Options::resolve(&cli) {
        Ok(options) => options,
        // Not a failure: report it and leave without writing anything.
        Err(e @ Error::MissingSource) => {
            log::error!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let summary = make_dataset::run(&options).with_context(|| {
        format!(
            "converting {} to {}",
            options.source.display(),
            options.output.display()
        )
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
