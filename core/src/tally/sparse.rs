use std::vec;

use indexmap::{map::Entry, IndexMap};

use crate::{row::FileId, scan::Observation, site::SiteCounts, tally::Dense};

/// The tally of alleles across the observed sites of an alignment.
///
/// Site entries are created on first observation, so any positive site index is valid. The file
/// is likewise established by the first observation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sparse {
    file: Option<FileId>,
    sites: IndexMap<usize, SiteCounts>,
}

impl Sparse {
    /// Adds a single observation to the tally.
    pub fn add(&mut self, observation: Observation) {
        self.file.get_or_insert(observation.file());

        self.sites
            .entry(observation.site())
            .or_insert_with(|| SiteCounts::new(observation.file(), observation.site()))
            .add(observation.base(), observation.seq());
    }

    /// Returns the file the tally belongs to, where known.
    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    pub(super) fn into_sites(self) -> indexmap::map::IntoValues<usize, SiteCounts> {
        self.sites.into_values()
    }

    /// Adds all observations from another sparse tally.
    ///
    /// # Panics
    ///
    /// Panics if the tallies belong to different files.
    pub fn merge(&mut self, other: Sparse) {
        if let (Some(file), Some(other_file)) = (self.file, other.file) {
            assert_eq!(file, other_file, "cannot merge tallies from different files");
        }
        self.file = self.file.or(other.file);

        for counts in other.sites.into_values() {
            self.merge_site(counts);
        }
    }

    /// Adds all observations from a dense tally.
    ///
    /// Only the dense tally's observed sites are adopted, so that the result continues to
    /// represent observed sites only.
    ///
    /// # Panics
    ///
    /// Panics if the tallies belong to different files.
    pub fn merge_dense(&mut self, other: Dense) {
        if let Some(file) = self.file {
            assert_eq!(file, other.file(), "cannot merge tallies from different files");
        }
        self.file = Some(other.file());

        for counts in other.into_sites().filter(|counts| !counts.is_empty()) {
            self.merge_site(counts);
        }
    }

    fn merge_site(&mut self, counts: SiteCounts) {
        match self.sites.entry(counts.site()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(counts),
            Entry::Vacant(entry) => {
                entry.insert(counts);
            }
        }
    }

    /// Creates a new, empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tally of the provided site, where it has been observed.
    pub fn site(&self, site: usize) -> Option<&SiteCounts> {
        self.sites.get(&site)
    }

    pub(super) fn sorted(&self) -> vec::IntoIter<&SiteCounts> {
        let mut sites = self.sites.values().collect::<Vec<_>>();
        sites.sort_by_key(|counts| counts.site());

        sites.into_iter()
    }
}
