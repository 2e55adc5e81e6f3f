use std::path::PathBuf;

use anyhow::Error;

use clap::Parser;

use crate::{runner::Runner, shared::InputArgs, write};

/// List alleles observed by exactly one sequence in alignment.
#[derive(Debug, Parser)]
pub struct Private {
    #[command(flatten)]
    args: InputArgs,

    /// Output file.
    ///
    /// If no file is provided, output will be written to stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Private {
    pub fn run(self) -> Result<(), Error> {
        let mut runner = Runner::try_from(&self.args)?;
        let tally = runner.run()?;

        let mut writer = write::writer(self.output.as_deref())?;
        write::write_privates(&mut writer, tally.private_alleles())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tests::parse_subcmd;

    #[test]
    fn test_parse_output() {
        let args = parse_subcmd::<Private>("alnsites private -o out.tsv input.fa");

        assert_eq!(args.output, Some(PathBuf::from("out.tsv")));
    }

    #[test]
    fn test_parse_stdin_input() {
        let args = parse_subcmd::<Private>("alnsites private");

        assert_eq!(args.args.input, None);
        assert_eq!(args.output, None);
    }
}
