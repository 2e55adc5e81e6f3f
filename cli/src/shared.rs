use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, ValueEnum};

use alnsites_core::input;

/// Arguments shared by the subcommands reading an alignment.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input alignment file.
    ///
    /// If no file is provided, stdin will be used.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format.
    ///
    /// If unset, the format will automatically be detected from the input.
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// File uid to stamp output records with.
    #[arg(long, default_value_t = 1, value_name = "INT")]
    pub file_uid: u64,

    /// Number of alignment sites.
    ///
    /// If provided, every site is reported whether observed or not, and any observation outside
    /// the given range is an error. If unset, only observed sites are reported.
    #[arg(short = 's', long, value_name = "INT")]
    pub sites: Option<NonZeroUsize>,

    /// Number of threads to use.
    #[arg(short = 't', long, default_value_t = NonZeroUsize::new(4).unwrap(), value_name = "INT")]
    pub threads: NonZeroUsize,
}

/// Supported input formats.
#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// FASTA records.
    Fasta,
    /// Tab-separated uid and sequence rows.
    Rows,
}

impl From<Format> for input::Format {
    fn from(format: Format) -> Self {
        match format {
            Format::Fasta => input::Format::Fasta,
            Format::Rows => input::Format::Rows,
        }
    }
}
