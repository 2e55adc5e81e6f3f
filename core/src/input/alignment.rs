//! Alignments of sequence rows.

use std::{collections::HashSet, fmt, io};

use bio::io::fasta;

use crate::row::{FileId, SeqId, SeqRow};

/// An alignment of sequence rows from a single file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alignment {
    file: FileId,
    names: Vec<String>,
    rows: Vec<SeqRow>,
}

impl Alignment {
    /// Returns the file the alignment belongs to.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Reads an alignment from FASTA.
    ///
    /// Sequences are numbered from 1 in file order, keeping the record identifiers as names.
    ///
    /// # Errors
    ///
    /// Errors if a record cannot be read.
    pub fn from_fasta<R>(file: FileId, reader: R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let mut names = Vec::new();
        let mut rows = Vec::new();

        for (i, result) in fasta::Reader::new(reader).records().enumerate() {
            let record = result?;

            names.push(record.id().to_string());
            rows.push(SeqRow::new(SeqId((i + 1) as u64), file, record.seq()));
        }

        Ok(Self::new(file, names, rows))
    }

    /// Reads an alignment from tab-separated rows.
    ///
    /// Each non-empty line holds a sequence uid and its raw bases, separated by a single tab.
    /// The uid doubles as the sequence name.
    ///
    /// # Errors
    ///
    /// Errors if a line is missing its tab separator, if a uid is not a valid integer, or if the
    /// same uid occurs on more than one line.
    pub fn from_rows(file: FileId, s: &str) -> Result<Self, ParseRowsError> {
        let mut names = Vec::new();
        let mut rows = Vec::new();
        let mut uids = HashSet::new();

        for (i, line) in s.lines().enumerate() {
            let number = i + 1;

            if line.is_empty() {
                continue;
            }

            let (uid, seq) = line
                .split_once('\t')
                .ok_or(ParseRowsError::MissingSequence { line: number })?;

            let uid = uid
                .parse::<u64>()
                .map_err(|_| ParseRowsError::InvalidUid {
                    line: number,
                    value: uid.to_string(),
                })?;

            if !uids.insert(uid) {
                return Err(ParseRowsError::DuplicateUid { line: number, uid });
            }

            names.push(uid.to_string());
            rows.push(SeqRow::new(SeqId(uid), file, seq));
        }

        Ok(Self::new(file, names, rows))
    }

    /// Returns `true` if the alignment has no rows, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in the alignment.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the sequence names, in row order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Creates a new alignment from names and rows of equal length.
    pub fn new(file: FileId, names: Vec<String>, rows: Vec<SeqRow>) -> Self {
        debug_assert_eq!(names.len(), rows.len());

        Self { file, names, rows }
    }

    /// Returns the sequence rows.
    pub fn rows(&self) -> &[SeqRow] {
        &self.rows
    }
}

/// An error associated with parsing tab-separated sequence rows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseRowsError {
    /// The same uid occurred on more than one line.
    DuplicateUid {
        /// The 1-based line number.
        line: usize,
        /// The repeated uid.
        uid: u64,
    },
    /// A uid could not be parsed as an integer.
    InvalidUid {
        /// The 1-based line number.
        line: usize,
        /// The unparseable uid.
        value: String,
    },
    /// A line had no tab-separated sequence.
    MissingSequence {
        /// The 1-based line number.
        line: usize,
    },
}

impl fmt::Display for ParseRowsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseRowsError::DuplicateUid { line, uid } => {
                write!(f, "duplicate sequence uid {uid} on line {line}")
            }
            ParseRowsError::InvalidUid { line, value } => {
                write!(f, "invalid sequence uid '{value}' on line {line}")
            }
            ParseRowsError::MissingSequence { line } => {
                write!(f, "missing tab-separated sequence on line {line}")
            }
        }
    }
}

impl std::error::Error for ParseRowsError {}
