//! Aligned sequence rows and their identifiers.

use std::fmt;

use crate::{base::Base, record::SeqCount, scan::Observations};

/// An identifier for an alignment file.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FileId(pub u64);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An identifier for a single aligned sequence.
///
/// Zero is a valid identifier like any other; "no sequence" is represented by `Option::None`
/// wherever it can occur, never by a sentinel value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SeqId(pub u64);

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single aligned sequence belonging to an alignment file.
///
/// The raw data is kept as received: aligned bases, gaps, and ambiguity codes alike, one byte per
/// alignment site.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SeqRow {
    seq: SeqId,
    file: FileId,
    data: Vec<u8>,
}

impl SeqRow {
    /// Creates a new row from raw aligned sequence data.
    pub fn new<D>(seq: SeqId, file: FileId, data: D) -> Self
    where
        D: Into<Vec<u8>>,
    {
        Self {
            seq,
            file,
            data: data.into(),
        }
    }

    /// Returns the base composition of the row.
    ///
    /// Only canonical bases are counted; gaps and ambiguity codes contribute to neither the
    /// per-base counts nor the total.
    pub fn composition(&self) -> SeqCount {
        let mut counts = [0; 4];

        for symbol in self.data.iter() {
            if let Some(base) = Base::try_from_symbol(*symbol) {
                counts[base as usize] += 1;
            }
        }

        SeqCount::new(self.seq, self.file, counts)
    }

    /// Returns the raw aligned sequence data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the file the row belongs to.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Returns `true` if the row contains no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of alignment sites spanned by the row, gaps included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator of the canonical-base observations in the row.
    ///
    /// See [`Observations`] for the site numbering rules.
    pub fn observations(&self) -> Observations<'_> {
        Observations::new(self)
    }

    /// Returns the sequence identifier.
    pub fn seq(&self) -> SeqId {
        self.seq
    }
}
