//! Flat records summarizing tallied alignments.

use crate::{
    base::Base,
    row::{FileId, SeqId},
};

/// The base composition of a single sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SeqCount {
    /// The file the sequence belongs to.
    pub file: FileId,
    /// The sequence.
    pub seq: SeqId,
    /// The total number of canonical bases in the sequence.
    pub total: u64,
    /// The number of A bases.
    pub a: u64,
    /// The number of C bases.
    pub c: u64,
    /// The number of G bases.
    pub g: u64,
    /// The number of T bases.
    pub t: u64,
    /// The number of private alleles held by the sequence.
    pub private: u64,
}

impl SeqCount {
    /// Creates a new record from per-base counts in A, C, G, T order.
    ///
    /// The private allele count is initialized to zero, since it cannot be known from the
    /// sequence alone.
    pub fn new(seq: SeqId, file: FileId, counts: [u64; 4]) -> Self {
        let [a, c, g, t] = counts;

        Self {
            file,
            seq,
            total: a + c + g + t,
            a,
            c,
            g,
            t,
            private: 0,
        }
    }
}

/// The depth summary of a single alignment site.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SiteDepth {
    /// The file the site belongs to.
    pub file: FileId,
    /// The 1-based site index.
    pub site: usize,
    /// The present alleles in descending count order, ties broken by A, C, G, T order.
    pub snp: String,
    /// The number of distinct present alleles.
    pub alleles: usize,
    /// The total number of observations across all alleles.
    pub total: u64,
    /// The number of A observations.
    pub a: u64,
    /// The number of C observations.
    pub c: u64,
    /// The number of G observations.
    pub g: u64,
    /// The number of T observations.
    pub t: u64,
    /// The number of private alleles at the site.
    pub private: usize,
}

/// A single present allele at a single alignment site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SiteAllele {
    /// The file the site belongs to.
    pub file: FileId,
    /// The 1-based site index.
    pub site: usize,
    /// The allele.
    pub base: Base,
    /// The sole observing sequence, where the allele is private.
    pub owner: Option<SeqId>,
    /// The number of observations of the allele.
    pub count: u64,
}

impl SiteAllele {
    /// Returns `true` if the allele was observed by exactly one sequence, `false` otherwise.
    pub fn is_private(&self) -> bool {
        self.count == 1
    }

    /// Converts the allele into a private allele record, where it is private.
    pub fn private(&self) -> Option<PrivateAllele> {
        self.owner
            .filter(|_| self.is_private())
            .map(|owner| PrivateAllele {
                file: self.file,
                site: self.site,
                base: self.base,
                owner,
            })
    }
}

/// An allele observed by exactly one sequence at a single alignment site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PrivateAllele {
    /// The file the site belongs to.
    pub file: FileId,
    /// The 1-based site index.
    pub site: usize,
    /// The allele.
    pub base: Base,
    /// The sole observing sequence.
    pub owner: SeqId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_count_new() {
        let count = SeqCount::new(SeqId(2), FileId(1), [4, 0, 1, 3]);

        assert_eq!(count.total, 8);
        assert_eq!(count.a, 4);
        assert_eq!(count.c, 0);
        assert_eq!(count.g, 1);
        assert_eq!(count.t, 3);
        assert_eq!(count.private, 0);
    }

    #[test]
    fn test_site_allele_private() {
        let allele = SiteAllele {
            file: FileId(1),
            site: 9,
            base: Base::G,
            owner: Some(SeqId(5)),
            count: 1,
        };

        let expected = PrivateAllele {
            file: FileId(1),
            site: 9,
            base: Base::G,
            owner: SeqId(5),
        };

        assert_eq!(allele.private(), Some(expected));
    }

    #[test]
    fn test_site_allele_private_requires_single_observation() {
        let allele = SiteAllele {
            file: FileId(1),
            site: 9,
            base: Base::G,
            owner: None,
            count: 2,
        };

        assert_eq!(allele.private(), None);
    }
}
