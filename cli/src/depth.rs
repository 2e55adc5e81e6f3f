use std::path::PathBuf;

use anyhow::Error;

use clap::Parser;

use crate::{runner::Runner, shared::InputArgs, write};

/// Calculate per-site depth summaries from alignment.
#[derive(Debug, Parser)]
pub struct Depth {
    #[command(flatten)]
    args: InputArgs,

    /// Output file.
    ///
    /// If no file is provided, output will be written to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Depth {
    pub fn run(self) -> Result<(), Error> {
        let mut runner = Runner::try_from(&self.args)?;
        let tally = runner.run()?;

        let mut writer = write::writer(self.output.as_deref())?;
        write::write_depths(&mut writer, tally.sites().map(|site| site.depth()))?;

        Ok(())
    }
}
