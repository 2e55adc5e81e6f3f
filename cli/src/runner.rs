use std::{collections::HashMap, num::NonZeroUsize};

use anyhow::{Context, Error};

use rayon::prelude::*;

use alnsites_core::{
    input::{Alignment, Builder},
    FileId, Input, SeqCount, SeqRow, Tally,
};

use crate::shared::InputArgs;

pub struct Runner {
    alignment: Alignment,
    sites: Option<NonZeroUsize>,
    threads: NonZeroUsize,
    warnings: Warnings,
}

impl Runner {
    pub fn new(alignment: Alignment, sites: Option<NonZeroUsize>, threads: NonZeroUsize) -> Self {
        Self {
            alignment,
            sites,
            threads,
            warnings: Warnings::default(),
        }
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Per-sequence base compositions, with private allele counts taken from the tally.
    pub fn compositions(&self, tally: &Tally) -> Vec<SeqCount> {
        let mut private = HashMap::new();
        for allele in tally.private_alleles() {
            *private.entry(allele.owner).or_insert(0) += 1;
        }

        self.alignment
            .rows()
            .iter()
            .map(|row| {
                let mut count = row.composition();
                count.private = private.get(&row.seq()).copied().unwrap_or(0);
                count
            })
            .collect()
    }

    pub fn run(&mut self) -> Result<Tally, Error> {
        let file = self.alignment.file();
        let rows = self.alignment.rows();
        let sites = self.sites;
        let threads = self.threads.get();

        let tally = if threads > 1 && rows.len() > 1 {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

            let chunk_size = (rows.len() + threads - 1) / threads;

            pool.install(|| {
                rows.par_chunks(chunk_size)
                    .map(|chunk| Tally::from_rows(file, sites, chunk))
                    .try_reduce_with(|mut tally, other| {
                        tally.merge(other);

                        Ok(tally)
                    })
                    .expect("no rows to tally")
            })?
        } else {
            Tally::from_rows(file, sites, rows)?
        };

        for row in rows {
            self.warnings.add(row);
        }
        self.warnings.summarize();

        Ok(tally)
    }
}

impl TryFrom<&InputArgs> for Runner {
    type Error = Error;

    fn try_from(args: &InputArgs) -> Result<Self, Self::Error> {
        let input = Input::new(args.input.clone())?;

        let mut builder = Builder::default().set_file(FileId(args.file_uid));
        if let Some(format) = args.format {
            builder = builder.set_format(format.into());
        }

        let alignment = builder
            .read_from_input(&input)
            .with_context(|| match input.as_path() {
                Some(path) => {
                    format!("Failed to read alignment from provided path '{}'", path.display())
                }
                None => String::from("Failed to read alignment from stdin"),
            })?;

        Ok(Self::new(alignment, args.sites, args.threads))
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Warnings {
    skipped: u64,
}

impl Warnings {
    pub fn add(&mut self, row: &SeqRow) {
        self.skipped += row.len() as u64 - row.composition().total;
    }

    pub fn summarize(&self) {
        if self.skipped > 0 {
            let count = self.skipped;

            log::warn!("Skipped {count} non-canonical characters in input.");
        }
    }
}
