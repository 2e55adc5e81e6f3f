#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Tools for tallying alleles in sequence alignments.
//!
//! This serves as the core library implementation for the `alnsites` CLI, but can also be used as
//! a free-standing library for working with alignment site tallies.
//!
//! # Overview
//!
//! The core struct is a [`Tally`], which counts the A, C, G, and T alleles observed at each site
//! of an alignment. A tally is either *dense*, covering a fixed number of sites known up front,
//! or *sparse*, covering only the observed sites. Tallies over disjoint subsets of the same
//! alignment merge into the tally of the full alignment.
//!
//! # Example
//!
//! As a very brief introduction to the API, let's tally a small alignment of two sequences and
//! summarize its third site.
//!
//! ```
//! use alnsites_core::{FileId, SeqId, SeqRow, Tally};
//!
//! use std::num::NonZeroUsize;
//!
//! // Tally a pair of aligned sequences over three sites
//! let rows = [
//!     SeqRow::new(SeqId(1), FileId(1), "AAC"),
//!     SeqRow::new(SeqId(2), FileId(1), "AAG"),
//! ];
//! let tally = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows)?;
//!
//! // The third site holds a C/G polymorphism, each allele private to its sequence
//! let depth = tally.site(3).expect("site out of range").depth();
//!
//! assert_eq!(depth.snp, "CG");
//! assert_eq!(depth.private, 2);
//! # Ok::<(), alnsites_core::tally::SiteRangeError>(())
//! ```

pub mod base;
pub use base::Base;

pub mod row;
pub use row::{FileId, SeqId, SeqRow};

pub mod scan;
pub use scan::Observation;

pub mod allele;
pub use allele::AlleleCount;

pub mod site;
pub use site::SiteCounts;

pub mod tally;
pub use tally::{SiteRangeError, Tally};

pub mod record;
pub use record::{PrivateAllele, SeqCount, SiteAllele, SiteDepth};

pub mod input;
pub use input::Input;
