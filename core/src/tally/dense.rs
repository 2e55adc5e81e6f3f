use std::{num::NonZeroUsize, slice, vec};

use crate::{
    row::FileId,
    scan::Observation,
    site::SiteCounts,
    tally::{Sparse, SiteRangeError},
};

/// The tally of alleles across a fixed number of alignment sites.
///
/// All sites `1..=sites` are represented from construction, observed or not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dense {
    file: FileId,
    sites: Vec<SiteCounts>,
}

impl Dense {
    /// Adds a single observation to the tally.
    ///
    /// # Errors
    ///
    /// Errors if the observed site falls outside the alignment.
    pub fn add(&mut self, observation: Observation) -> Result<(), SiteRangeError> {
        let sites = self.sites.len();

        self.sites
            .get_mut(observation.site().wrapping_sub(1))
            .map(|site| site.add(observation.base(), observation.seq()))
            .ok_or(SiteRangeError::new(observation.site(), sites))
    }

    /// Returns the file the tally belongs to.
    pub fn file(&self) -> FileId {
        self.file
    }

    pub(super) fn into_sites(self) -> vec::IntoIter<SiteCounts> {
        self.sites.into_iter()
    }

    pub(super) fn iter(&self) -> slice::Iter<'_, SiteCounts> {
        self.sites.iter()
    }

    /// Adds all observations from another dense tally.
    ///
    /// # Panics
    ///
    /// Panics if the tallies belong to different files or have different numbers of sites.
    pub fn merge(&mut self, other: Dense) {
        assert_eq!(
            self.file, other.file,
            "cannot merge tallies from different files"
        );
        assert_eq!(
            self.sites.len(),
            other.sites.len(),
            "cannot merge dense tallies with different site counts"
        );

        self.sites
            .iter_mut()
            .zip(other.sites)
            .for_each(|(site, other)| site.merge(other));
    }

    /// Adds all observations from a sparse tally.
    ///
    /// # Panics
    ///
    /// Panics if the tallies belong to different files, or if any sparse entry falls outside the
    /// sites of the alignment.
    pub fn merge_sparse(&mut self, other: Sparse) {
        if let Some(file) = other.file() {
            assert_eq!(self.file, file, "cannot merge tallies from different files");
        }

        for counts in other.into_sites() {
            self.sites
                .get_mut(counts.site().wrapping_sub(1))
                .expect("site out of range for dense tally")
                .merge(counts);
        }
    }

    /// Creates a new, empty tally of the provided file covering sites `1..=sites`.
    pub fn new(file: FileId, sites: NonZeroUsize) -> Self {
        Self {
            file,
            sites: (1..=sites.get())
                .map(|site| SiteCounts::new(file, site))
                .collect(),
        }
    }

    /// Returns the tally of the provided site, where it falls inside the alignment.
    pub fn site(&self, site: usize) -> Option<&SiteCounts> {
        self.sites.get(site.wrapping_sub(1))
    }
}
