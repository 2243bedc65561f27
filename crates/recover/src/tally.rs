// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use std::collections::HashMap;

/// Occurrence counts of recovered secrets, remembering the order they were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<(BigInt, usize)>,
    index: HashMap<BigInt, usize>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one vote for `secret` and returns its new count.
    pub fn record(&mut self, secret: BigInt) -> usize {
        self.add_votes(secret, 1)
    }

    fn add_votes(&mut self, secret: BigInt, votes: usize) -> usize {
        match self.index.get(&secret) {
            Some(&slot) => {
                self.entries[slot].1 += votes;
                self.entries[slot].1
            }
            None => {
                self.index.insert(secret.clone(), self.entries.len());
                self.entries.push((secret, votes));
                votes
            }
        }
    }

    /// Count for `secret`, zero if it never appeared.
    pub fn count(&self, secret: &BigInt) -> usize {
        self.index
            .get(secret)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_votes(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Candidates and their counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&BigInt, usize)> {
        self.entries.iter().map(|(secret, count)| (secret, *count))
    }

    /// Adds the counts of `other` key by key.
    ///
    /// Candidates new to `self` are appended in `other`'s order, so merging partial tallies
    /// of consecutive chunks in chunk order reproduces a single sequential tally.
    pub fn merge(&mut self, other: VoteTally) {
        for (secret, count) in other.entries {
            self.add_votes(secret, count);
        }
    }

    /// The candidate with the strictly highest count.
    ///
    /// Ties go to the candidate seen first.
    pub fn winner(&self) -> Option<(&BigInt, usize)> {
        self.iter().fold(None, |best, (secret, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((secret, count)),
        })
    }
}

impl FromIterator<BigInt> for VoteTally {
    fn from_iter<I: IntoIterator<Item = BigInt>>(iter: I) -> Self {
        let mut tally = VoteTally::new();
        for secret in iter {
            tally.record(secret);
        }
        tally
    }
}
