//! Decomposition of aligned sequences into per-site observations.

use std::{
    iter::{Enumerate, FusedIterator},
    slice,
};

use crate::{
    base::Base,
    row::{FileId, SeqId, SeqRow},
};

/// A single canonical base observed at one alignment site by one sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Observation {
    seq: SeqId,
    file: FileId,
    site: usize,
    base: Base,
}

impl Observation {
    /// Creates a new observation.
    ///
    /// Site indices are 1-based alignment coordinates.
    pub fn new(seq: SeqId, file: FileId, site: usize, base: Base) -> Self {
        Self {
            seq,
            file,
            site,
            base,
        }
    }

    /// Returns the observed base.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the file the observation belongs to.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Returns the observing sequence.
    pub fn seq(&self) -> SeqId {
        self.seq
    }

    /// Returns the 1-based site index.
    pub fn site(&self) -> usize {
        self.site
    }
}

/// An iterator of the canonical-base observations in a sequence row.
///
/// Sites are numbered from 1 in raw order. Non-canonical characters consume a site index, so that
/// site numbering matches the raw alignment coordinate system, but yield no observation.
#[derive(Debug)]
pub struct Observations<'a> {
    seq: SeqId,
    file: FileId,
    inner: Enumerate<slice::Iter<'a, u8>>,
}

impl<'a> Observations<'a> {
    pub(crate) fn new(row: &'a SeqRow) -> Self {
        Self {
            seq: row.seq(),
            file: row.file(),
            inner: row.data().iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Observations<'a> {
    type Item = Observation;

    fn next(&mut self) -> Option<Self::Item> {
        let (seq, file) = (self.seq, self.file);

        self.inner.find_map(|(i, symbol)| {
            Base::try_from_symbol(*symbol).map(|base| Observation::new(seq, file, i + 1, base))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();

        (0, upper)
    }
}

impl<'a> FusedIterator for Observations<'a> {}
