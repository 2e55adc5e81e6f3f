//! Tallying of all alleles at a single alignment site.

use std::{cmp, iter::FusedIterator, slice};

use crate::{
    allele::AlleleCount,
    base::Base,
    record::{SiteAllele, SiteDepth},
    row::{FileId, SeqId},
};

/// The tally of all four alleles at a single alignment site.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SiteCounts {
    file: FileId,
    site: usize,
    counts: [AlleleCount; 4],
}

impl SiteCounts {
    /// Adds a single observation of the provided base by the provided sequence.
    pub fn add(&mut self, base: Base, seq: SeqId) {
        self.counts[base as usize].add(seq);
    }

    /// Returns an iterator of the present alleles at the site as flat records.
    pub fn alleles(&self) -> Alleles<'_> {
        Alleles {
            site: self,
            inner: self.counts.iter(),
        }
    }

    /// Returns the allele counts in A, C, G, T order.
    pub fn counts(&self) -> [u64; 4] {
        [
            self.counts[0].count(),
            self.counts[1].count(),
            self.counts[2].count(),
            self.counts[3].count(),
        ]
    }

    /// Summarizes the site as a depth record.
    ///
    /// The summary ranks present alleles by descending count, breaking ties by A, C, G, T order.
    pub fn depth(&self) -> SiteDepth {
        let mut present = self.present().collect::<Vec<_>>();
        present.sort_by_key(|count| cmp::Reverse(count.count()));

        let snp = present
            .iter()
            .map(|count| count.base().symbol())
            .collect::<String>();
        let private = present.iter().filter(|count| count.is_private()).count();

        let [a, c, g, t] = self.counts();

        SiteDepth {
            file: self.file,
            site: self.site,
            snp,
            alleles: present.len(),
            total: a + c + g + t,
            a,
            c,
            g,
            t,
            private,
        }
    }

    /// Returns the file the site belongs to.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Returns `true` if no allele has been observed at the site, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| count.is_empty())
    }

    /// Adds all observations from another tally of the same site.
    pub fn merge(&mut self, other: SiteCounts) {
        self.counts
            .iter_mut()
            .zip(other.counts)
            .for_each(|(count, other)| count.merge(other));
    }

    /// Creates a new, empty tally of the provided site.
    pub fn new(file: FileId, site: usize) -> Self {
        Self {
            file,
            site,
            counts: Base::ALL.map(AlleleCount::new),
        }
    }

    /// Returns an iterator of the present allele counts in A, C, G, T order.
    pub fn present(&self) -> impl Iterator<Item = &AlleleCount> {
        self.counts.iter().filter(|count| !count.is_empty())
    }

    /// Returns the 1-based site index.
    pub fn site(&self) -> usize {
        self.site
    }
}

/// An iterator of the present alleles at a single alignment site.
#[derive(Debug)]
pub struct Alleles<'a> {
    site: &'a SiteCounts,
    inner: slice::Iter<'a, AlleleCount>,
}

impl<'a> Iterator for Alleles<'a> {
    type Item = SiteAllele;

    fn next(&mut self) -> Option<Self::Item> {
        let site = self.site;

        self.inner
            .find(|count| !count.is_empty())
            .map(|count| SiteAllele {
                file: site.file,
                site: site.site,
                base: count.base(),
                owner: count.owner(),
                count: count.count(),
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();

        (0, upper)
    }
}

impl<'a> FusedIterator for Alleles<'a> {}
