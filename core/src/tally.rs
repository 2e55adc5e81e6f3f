//! Tallying of alleles across the sites of an alignment.

use std::{fmt, iter::FusedIterator, num::NonZeroUsize, slice, vec};

use crate::{
    record::{PrivateAllele, SiteAllele},
    row::{FileId, SeqRow},
    scan::Observation,
    site::{self, SiteCounts},
};

mod dense;
pub use dense::Dense;

mod sparse;
pub use sparse::Sparse;

/// The tally of alleles across the sites of an alignment.
///
/// A tally that knows the number of alignment sites in advance should be dense, so that every
/// site is represented whether observed or not. A tally over an alignment of unknown length
/// should be sparse, representing only the observed sites.
///
/// Both variants support the same operations, and tallies built over disjoint subsets of the same
/// alignment can be merged into the tally of the full alignment in any order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Tally {
    /// A tally with a fixed number of sites.
    Dense(Dense),
    /// A tally of only the observed sites.
    Sparse(Sparse),
}

impl Tally {
    /// Adds a single observation to the tally.
    ///
    /// # Errors
    ///
    /// Where the tally is dense, errors if the observed site falls outside the alignment.
    pub fn add(&mut self, observation: Observation) -> Result<(), SiteRangeError> {
        match self {
            Tally::Dense(dense) => dense.add(observation),
            Tally::Sparse(sparse) => {
                sparse.add(observation);

                Ok(())
            }
        }
    }

    /// Adds all the provided observations to the tally.
    ///
    /// # Errors
    ///
    /// Where the tally is dense, errors if any observed site falls outside the alignment.
    pub fn add_many<I>(&mut self, observations: I) -> Result<(), SiteRangeError>
    where
        I: IntoIterator<Item = Observation>,
    {
        observations
            .into_iter()
            .try_for_each(|observation| self.add(observation))
    }

    /// Returns an iterator of the present alleles across all sites.
    ///
    /// Sites are visited in ascending order, and the present alleles within each site in
    /// A, C, G, T order.
    pub fn alleles(&self) -> Alleles<'_> {
        Alleles {
            sites: self.sites(),
            site: None,
        }
    }

    /// Creates a new, empty dense tally covering sites `1..=sites`.
    pub fn dense(file: FileId, sites: NonZeroUsize) -> Self {
        Tally::Dense(Dense::new(file, sites))
    }

    /// Returns the file the tally belongs to, where known.
    ///
    /// A sparse tally does not know its file until its first observation arrives.
    pub fn file(&self) -> Option<FileId> {
        match self {
            Tally::Dense(dense) => Some(dense.file()),
            Tally::Sparse(sparse) => sparse.file(),
        }
    }

    /// Creates a tally of all observations in the provided rows.
    ///
    /// Where the number of sites is provided, the resulting tally is dense, stamped with the
    /// provided file. Otherwise, it is sparse, deriving its file from the first observation; with
    /// no rows, the result is the empty sparse tally.
    ///
    /// # Errors
    ///
    /// Where the number of sites is provided, errors if any observed site falls outside it.
    pub fn from_rows<'a, I>(
        file: FileId,
        sites: Option<NonZeroUsize>,
        rows: I,
    ) -> Result<Self, SiteRangeError>
    where
        I: IntoIterator<Item = &'a SeqRow>,
    {
        let mut tally = match sites {
            Some(sites) => Self::dense(file, sites),
            None => Self::sparse(),
        };

        for row in rows {
            tally.add_many(row.observations())?;
        }

        Ok(tally)
    }

    /// Returns `true` if no site in the tally has observations, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.sites().all(|site| site.is_empty())
    }

    /// Adds all observations from another tally.
    ///
    /// The receiver keeps its own variant: merging a sparse tally into a dense one folds its
    /// entries into their positional slots, while merging a dense tally into a sparse one adopts
    /// its observed sites only.
    ///
    /// # Panics
    ///
    /// Panics if the tallies belong to different files, if both are dense with different numbers
    /// of sites, or if a sparse entry falls outside the receiving dense tally.
    pub fn merge(&mut self, other: Tally) {
        match (self, other) {
            (Tally::Dense(dense), Tally::Dense(other)) => dense.merge(other),
            (Tally::Dense(dense), Tally::Sparse(other)) => dense.merge_sparse(other),
            (Tally::Sparse(sparse), Tally::Dense(other)) => sparse.merge_dense(other),
            (Tally::Sparse(sparse), Tally::Sparse(other)) => sparse.merge(other),
        }
    }

    /// Returns an iterator of the private alleles across all sites.
    pub fn private_alleles(&self) -> PrivateAlleles<'_> {
        PrivateAlleles {
            inner: self.alleles(),
        }
    }

    /// Returns the tally of the provided site, where one exists.
    pub fn site(&self, site: usize) -> Option<&SiteCounts> {
        match self {
            Tally::Dense(dense) => dense.site(site),
            Tally::Sparse(sparse) => sparse.site(site),
        }
    }

    /// Returns an iterator of the sites in the tally, in ascending site order.
    ///
    /// A dense tally yields all its sites, observed or not, while a sparse tally yields only the
    /// observed sites.
    pub fn sites(&self) -> Sites<'_> {
        let inner = match self {
            Tally::Dense(dense) => SitesInner::Dense(dense.iter()),
            Tally::Sparse(sparse) => SitesInner::Sparse(sparse.sorted()),
        };

        Sites { inner }
    }

    /// Creates a new, empty sparse tally.
    pub fn sparse() -> Self {
        Tally::Sparse(Sparse::new())
    }
}

impl From<Dense> for Tally {
    fn from(dense: Dense) -> Self {
        Tally::Dense(dense)
    }
}

impl From<Sparse> for Tally {
    fn from(sparse: Sparse) -> Self {
        Tally::Sparse(sparse)
    }
}

/// An iterator of the sites in a tally, in ascending site order.
#[derive(Debug)]
pub struct Sites<'a> {
    inner: SitesInner<'a>,
}

#[derive(Debug)]
enum SitesInner<'a> {
    Dense(slice::Iter<'a, SiteCounts>),
    Sparse(vec::IntoIter<&'a SiteCounts>),
}

impl<'a> Iterator for Sites<'a> {
    type Item = &'a SiteCounts;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SitesInner::Dense(iter) => iter.next(),
            SitesInner::Sparse(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            SitesInner::Dense(iter) => iter.size_hint(),
            SitesInner::Sparse(iter) => iter.size_hint(),
        }
    }
}

impl<'a> ExactSizeIterator for Sites<'a> {}

impl<'a> FusedIterator for Sites<'a> {}

/// An iterator of the present alleles across all sites of a tally.
#[derive(Debug)]
pub struct Alleles<'a> {
    sites: Sites<'a>,
    site: Option<site::Alleles<'a>>,
}

impl<'a> Iterator for Alleles<'a> {
    type Item = SiteAllele;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(allele) = self.site.as_mut().and_then(|alleles| alleles.next()) {
                return Some(allele);
            }

            self.site = Some(self.sites.next()?.alleles());
        }
    }
}

impl<'a> FusedIterator for Alleles<'a> {}

/// An iterator of the private alleles across all sites of a tally.
#[derive(Debug)]
pub struct PrivateAlleles<'a> {
    inner: Alleles<'a>,
}

impl<'a> Iterator for PrivateAlleles<'a> {
    type Item = PrivateAllele;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|allele| allele.private())
    }
}

impl<'a> FusedIterator for PrivateAlleles<'a> {}

/// An error associated with an observation outside the sites of a dense tally.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteRangeError {
    site: usize,
    sites: usize,
}

impl SiteRangeError {
    pub(crate) fn new(site: usize, sites: usize) -> Self {
        Self { site, sites }
    }
}

impl fmt::Display for SiteRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "site {} out of range for alignment with {} sites",
            self.site, self.sites
        )
    }
}

impl std::error::Error for SiteRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{base::Base, row::SeqId};

    fn rows() -> Vec<SeqRow> {
        vec![
            SeqRow::new(SeqId(1), FileId(1), "AAC"),
            SeqRow::new(SeqId(2), FileId(1), "AAG"),
        ]
    }

    #[test]
    fn test_dense_from_rows() -> Result<(), SiteRangeError> {
        let tally = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows())?;

        assert_eq!(tally.file(), Some(FileId(1)));
        assert_eq!(tally.sites().len(), 3);

        let counts = tally
            .sites()
            .map(|site| (site.site(), site.counts()))
            .collect::<Vec<_>>();
        let expected = vec![(1, [2, 0, 0, 0]), (2, [2, 0, 0, 0]), (3, [0, 1, 1, 0])];
        assert_eq!(counts, expected);

        let depth = tally.site(3).expect("missing site").depth();
        assert_eq!(depth.snp, "CG");
        assert_eq!(depth.alleles, 2);
        assert_eq!(depth.private, 2);

        let depth = tally.site(1).expect("missing site").depth();
        assert_eq!(depth.snp, "A");
        assert_eq!(depth.private, 0);

        Ok(())
    }

    #[test]
    fn test_dense_out_of_range() {
        let rows = vec![SeqRow::new(SeqId(1), FileId(1), "ACGT")];

        let result = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows);

        assert_eq!(result, Err(SiteRangeError::new(4, 3)));
    }

    #[test]
    fn test_sparse_from_rows() -> Result<(), SiteRangeError> {
        let tally = Tally::from_rows(FileId(1), None, &rows())?;

        assert_eq!(tally.file(), Some(FileId(1)));
        assert_eq!(tally.sites().len(), 3);
        assert_eq!(tally.site(3).map(SiteCounts::counts), Some([0, 1, 1, 0]));

        Ok(())
    }

    #[test]
    fn test_sparse_from_no_rows_is_empty() -> Result<(), SiteRangeError> {
        let rows: Vec<SeqRow> = Vec::new();
        let tally = Tally::from_rows(FileId(1), None, &rows)?;

        assert_eq!(tally.file(), None);
        assert!(tally.is_empty());
        assert_eq!(tally.sites().len(), 0);

        Ok(())
    }

    #[test]
    fn test_dense_from_no_rows_has_empty_sites() -> Result<(), SiteRangeError> {
        let rows: Vec<SeqRow> = Vec::new();
        let tally = Tally::from_rows(FileId(1), NonZeroUsize::new(2), &rows)?;

        assert_eq!(tally.file(), Some(FileId(1)));
        assert!(tally.is_empty());
        assert_eq!(tally.sites().len(), 2);
        assert!(tally.sites().all(|site| site.is_empty()));

        Ok(())
    }

    #[test]
    fn test_sparse_sites_sorted() {
        let mut tally = Tally::sparse();

        for site in [5, 2] {
            tally
                .add(Observation::new(SeqId(1), FileId(1), site, Base::A))
                .expect("failed to add observation");
        }

        let sites = tally.sites().map(SiteCounts::site).collect::<Vec<_>>();
        assert_eq!(sites, vec![2, 5]);
    }

    #[test]
    fn test_merge_matches_joint_tally() -> Result<(), SiteRangeError> {
        let rows = rows();
        let sites = NonZeroUsize::new(3);

        let joint = Tally::from_rows(FileId(1), sites, &rows)?;

        let mut merged = Tally::from_rows(FileId(1), sites, &rows[..1])?;
        let second = Tally::from_rows(FileId(1), sites, &rows[1..])?;
        merged.merge(second);

        assert_eq!(merged, joint);

        Ok(())
    }

    #[test]
    fn test_merge_commutes() -> Result<(), SiteRangeError> {
        let rows = rows();

        let first = Tally::from_rows(FileId(1), None, &rows[..1])?;
        let second = Tally::from_rows(FileId(1), None, &rows[1..])?;

        let mut forward = first.clone();
        forward.merge(second.clone());

        let mut backward = second;
        backward.merge(first);

        assert_eq!(forward, backward);

        Ok(())
    }

    #[test]
    fn test_merge_associates() -> Result<(), SiteRangeError> {
        let rows = vec![
            SeqRow::new(SeqId(1), FileId(1), "AAC"),
            SeqRow::new(SeqId(2), FileId(1), "AAG"),
            SeqRow::new(SeqId(3), FileId(1), "ATG"),
        ];

        let tallies = rows
            .iter()
            .map(|row| Tally::from_rows(FileId(1), None, [row]))
            .collect::<Result<Vec<_>, _>>()?;
        let [a, b, c] = <[Tally; 3]>::try_from(tallies).expect("wrong number of tallies");

        let mut left = a.clone();
        left.merge(b.clone());
        left.merge(c.clone());

        let mut right = b;
        right.merge(c);
        let mut outer = a;
        outer.merge(right);

        assert_eq!(left, outer);

        Ok(())
    }

    #[test]
    fn test_merge_empty_is_identity() -> Result<(), SiteRangeError> {
        for sites in [NonZeroUsize::new(3), None] {
            let tally = Tally::from_rows(FileId(1), sites, &rows())?;

            let mut merged = tally.clone();
            merged.merge(Tally::sparse());
            assert_eq!(merged, tally);

            let mut empty = Tally::sparse();
            empty.merge(tally.clone());
            assert_eq!(empty.file(), tally.file());
            assert_eq!(
                empty.sites().collect::<Vec<_>>(),
                tally
                    .sites()
                    .filter(|site| !site.is_empty())
                    .collect::<Vec<_>>()
            );
        }

        Ok(())
    }

    #[test]
    fn test_merge_sparse_into_dense() -> Result<(), SiteRangeError> {
        let rows = rows();
        let sites = NonZeroUsize::new(3);

        let mut dense = Tally::from_rows(FileId(1), sites, &rows[..1])?;
        let sparse = Tally::from_rows(FileId(1), None, &rows[1..])?;
        dense.merge(sparse);

        let expected = Tally::from_rows(FileId(1), sites, &rows)?;
        assert_eq!(dense, expected);

        Ok(())
    }

    #[test]
    fn test_merge_dense_into_sparse() -> Result<(), SiteRangeError> {
        let rows = rows();

        let mut sparse = Tally::from_rows(FileId(1), None, &rows[..1])?;
        let dense = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows[1..])?;
        sparse.merge(dense);

        let expected = Tally::from_rows(FileId(1), None, &rows)?;
        assert_eq!(sparse, expected);

        Ok(())
    }

    #[test]
    fn test_merge_keeps_all_sparse_sites() -> Result<(), SiteRangeError> {
        let mut tally = Tally::sparse();
        for site in [2, 5] {
            tally.add(Observation::new(SeqId(1), FileId(1), site, Base::A))?;
        }

        let mut other = Tally::sparse();
        for site in [2, 5, 9] {
            other.add(Observation::new(SeqId(2), FileId(1), site, Base::C))?;
        }

        tally.merge(other);

        let sites = tally.sites().map(SiteCounts::site).collect::<Vec<_>>();
        assert_eq!(sites, vec![2, 5, 9]);
        assert_eq!(tally.site(2).map(SiteCounts::counts), Some([1, 1, 0, 0]));
        assert_eq!(tally.site(9).map(SiteCounts::counts), Some([0, 1, 0, 0]));

        Ok(())
    }

    #[test]
    fn test_alleles() -> Result<(), SiteRangeError> {
        let tally = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows())?;

        let alleles = tally
            .alleles()
            .map(|allele| (allele.site, allele.base, allele.count))
            .collect::<Vec<_>>();
        let expected = vec![
            (1, Base::A, 2),
            (2, Base::A, 2),
            (3, Base::C, 1),
            (3, Base::G, 1),
        ];

        assert_eq!(alleles, expected);

        Ok(())
    }

    #[test]
    fn test_private_alleles() -> Result<(), SiteRangeError> {
        let tally = Tally::from_rows(FileId(1), NonZeroUsize::new(3), &rows())?;

        let private = tally
            .private_alleles()
            .map(|allele| (allele.site, allele.base, allele.owner))
            .collect::<Vec<_>>();
        let expected = vec![(3, Base::C, SeqId(1)), (3, Base::G, SeqId(2))];

        assert_eq!(private, expected);

        Ok(())
    }

    #[test]
    #[should_panic(expected = "cannot merge tallies from different files")]
    fn test_merge_panics_on_file_mismatch() {
        let mut tally = Tally::dense(FileId(1), NonZeroUsize::new(2).unwrap());
        let other = Tally::dense(FileId(2), NonZeroUsize::new(2).unwrap());

        tally.merge(other);
    }

    #[test]
    #[should_panic(expected = "cannot merge dense tallies with different site counts")]
    fn test_merge_panics_on_site_count_mismatch() {
        let mut tally = Tally::dense(FileId(1), NonZeroUsize::new(2).unwrap());
        let other = Tally::dense(FileId(1), NonZeroUsize::new(3).unwrap());

        tally.merge(other);
    }
}
