use std::{fs, path::PathBuf};

use anyhow::Error;

use clap::Parser;

use crate::{runner::Runner, shared::InputArgs, write};

/// Tally alignment and write all tables to a directory.
///
/// Writes depth.tsv, alleles.tsv, private.tsv, and sequences.tsv to the output directory,
/// creating the directory if it does not exist.
#[derive(Debug, Parser)]
pub struct Scan {
    #[command(flatten)]
    args: InputArgs,

    /// Output directory.
    #[arg(short = 'o', long, value_name = "DIR")]
    output: PathBuf,
}

impl Scan {
    pub fn run(self) -> Result<(), Error> {
        let mut runner = Runner::try_from(&self.args)?;
        let tally = runner.run()?;

        fs::create_dir_all(&self.output)?;

        let mut writer = write::writer(Some(&self.output.join("depth.tsv")))?;
        write::write_depths(&mut writer, tally.sites().map(|site| site.depth()))?;

        let mut writer = write::writer(Some(&self.output.join("alleles.tsv")))?;
        write::write_alleles(&mut writer, tally.alleles())?;

        let mut writer = write::writer(Some(&self.output.join("private.tsv")))?;
        write::write_privates(&mut writer, tally.private_alleles())?;

        let names = runner.alignment().names();
        let counts = runner.compositions(&tally);

        let mut writer = write::writer(Some(&self.output.join("sequences.tsv")))?;
        write::write_seqs(&mut writer, names.iter().map(String::as_str).zip(counts))?;

        Ok(())
    }
}
