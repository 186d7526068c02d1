use std::io;

use anyhow::{Context, Result};
use list_tidy_engine::process_list;

use crate::{
    cli::{self, Args},
    input, output,
    output::OutputFormat,
};

pub fn run(args: &Args) -> Result<()> {
    let config = cli::build_config(args)?;
    let text = input::read_input(args.input.as_deref(), config.max_input_bytes)?;

    let result = process_list(&text, &config).context("failed to process list")?;

    let format: OutputFormat = args.format.into();
    output::emit(&mut io::stdout().lock(), &result, format).context("failed to emit output")?;

    if args.stats && format == OutputFormat::Text {
        eprintln!("{}", result.summary());
    }
    Ok(())
}
