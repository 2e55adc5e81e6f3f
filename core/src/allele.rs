//! Per-allele tallying at a single alignment site.

use crate::{base::Base, row::SeqId};

/// The tally of a single allele at a single alignment site.
///
/// Tracks the total number of observations alongside the owning sequence. The owner is set when
/// the first observation arrives and cleared as soon as a second arrives, so that the owner is
/// known exactly when the allele is private.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AlleleCount {
    base: Base,
    count: u64,
    owner: Option<SeqId>,
}

impl AlleleCount {
    /// Adds a single observation of the allele by the provided sequence.
    pub fn add(&mut self, seq: SeqId) {
        self.owner = if self.count == 0 { Some(seq) } else { None };
        self.count += 1;
    }

    /// Returns the tallied base.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the number of times the allele has been observed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns `true` if the allele has never been observed, `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the allele has been observed by exactly one sequence, `false` otherwise.
    pub fn is_private(&self) -> bool {
        self.count == 1
    }

    /// Adds all observations from another tally of the same allele.
    pub fn merge(&mut self, other: AlleleCount) {
        debug_assert_eq!(self.base, other.base);

        if other.count == 0 {
            return;
        }

        self.owner = if self.count == 0 { other.owner } else { None };
        self.count += other.count;
    }

    /// Creates a new, empty tally of the provided base.
    pub fn new(base: Base) -> Self {
        Self {
            base,
            count: 0,
            owner: None,
        }
    }

    /// Returns the sole observing sequence, where one exists.
    pub fn owner(&self) -> Option<SeqId> {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sets_and_clears_owner() {
        let mut count = AlleleCount::new(Base::A);
        assert!(count.is_empty());
        assert_eq!(count.owner(), None);

        count.add(SeqId(7));
        assert_eq!(count.count(), 1);
        assert!(count.is_private());
        assert_eq!(count.owner(), Some(SeqId(7)));

        count.add(SeqId(8));
        assert_eq!(count.count(), 2);
        assert!(!count.is_private());
        assert_eq!(count.owner(), None);
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let mut count = AlleleCount::new(Base::C);
        count.add(SeqId(1));
        let expected = count;

        count.merge(AlleleCount::new(Base::C));
        assert_eq!(count, expected);

        let mut empty = AlleleCount::new(Base::C);
        empty.merge(expected);
        assert_eq!(empty, expected);
    }

    #[test]
    fn test_merge_adopts_owner_into_empty() {
        let mut other = AlleleCount::new(Base::G);
        other.add(SeqId(4));

        let mut count = AlleleCount::new(Base::G);
        count.merge(other);

        assert_eq!(count.count(), 1);
        assert_eq!(count.owner(), Some(SeqId(4)));
    }

    #[test]
    fn test_merge_clears_owner_when_both_observed() {
        let mut first = AlleleCount::new(Base::T);
        first.add(SeqId(1));

        let mut second = AlleleCount::new(Base::T);
        second.add(SeqId(2));

        first.merge(second);

        assert_eq!(first.count(), 2);
        assert!(!first.is_private());
        assert_eq!(first.owner(), None);
    }
}
