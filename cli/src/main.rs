use std::io::Write;

use anyhow::Error;

use clap::{ArgAction, Parser, Subcommand};

mod alleles;
use alleles::Alleles;

mod depth;
use depth::Depth;

mod private;
use private::Private;

mod runner;

mod scan;
use scan::Scan;

mod seqs;
use seqs::Seqs;

mod shared;

mod write;

const NAME: &str = env!("CARGO_BIN_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tools for tallying alleles in sequence alignments.
#[derive(Debug, Parser)]
#[clap(name = NAME, version = VERSION, about)]
#[clap(subcommand_required = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress warnings.
    ///
    /// By default, only warnings are printed. By setting this flag, warnings will be disabled.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiply times to increase verbosity, or left unset for quiet mode.
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print CLI arguments for debugging.
    #[clap(long, hide = true, global = true)]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        if self.debug {
            eprintln!("{self:#?}");
        }

        let level = if self.quiet {
            log::LevelFilter::Off
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        match env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let level = record.level().as_str().to_lowercase();
                let args = record.args();
                writeln!(buf, "[alnsites {level:>5}] {args}")
            })
            .try_init()
        {
            Ok(()) => (),
            Err(e) => eprintln!("failed to setup logger: {e}"),
        }

        self.command.run()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Alleles(Alleles),
    Depth(Depth),
    Private(Private),
    Scan(Scan),
    Seqs(Seqs),
}

impl Command {
    fn run(self) -> Result<(), Error> {
        match self {
            Command::Alleles(alleles) => alleles.run(),
            Command::Depth(depth) => depth.run(),
            Command::Private(private) => private.run(),
            Command::Scan(scan) => scan.run(),
            Command::Seqs(seqs) => seqs.run(),
        }
    }
}

impl TryFrom<Command> for Alleles {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Alleles(alleles) => Ok(alleles),
            other => Err(other),
        }
    }
}

impl TryFrom<Command> for Depth {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Depth(depth) => Ok(depth),
            other => Err(other),
        }
    }
}

impl TryFrom<Command> for Private {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Private(private) => Ok(private),
            other => Err(other),
        }
    }
}

impl TryFrom<Command> for Scan {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Scan(scan) => Ok(scan),
            other => Err(other),
        }
    }
}

impl TryFrom<Command> for Seqs {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Seqs(seqs) => Ok(seqs),
            other => Err(other),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
