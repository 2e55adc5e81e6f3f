use std::path::PathBuf;

use anyhow::Error;

use clap::Parser;

use crate::{runner::Runner, shared::InputArgs, write};

/// Summarize per-sequence base compositions from alignment.
#[derive(Debug, Parser)]
pub struct Seqs {
    #[command(flatten)]
    args: InputArgs,

    /// Output file.
    ///
    /// If no file is provided, output will be written to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Seqs {
    pub fn run(self) -> Result<(), Error> {
        let mut runner = Runner::try_from(&self.args)?;
        let tally = runner.run()?;

        let names = runner.alignment().names();
        let counts = runner.compositions(&tally);

        let mut writer = write::writer(self.output.as_deref())?;
        write::write_seqs(&mut writer, names.iter().map(String::as_str).zip(counts))?;

        Ok(())
    }
}
