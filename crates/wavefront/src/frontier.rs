use std::collections::{HashMap, HashSet, hash_map};
use std::hash::Hash;

use crate::path::{Path, Step};

/// One in-progress path: the states visited after the start, the
/// accumulated cost, and the remaining delay until the entry is due for
/// expansion. An entry with accumulated cost `c` becomes due exactly at
/// round `c`, which is what makes the goal check correct: due entries
/// appear in non-decreasing cost order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<S> {
    pub(crate) states: Vec<S>,
    pub(crate) cost: i32,
    pub(crate) delay: i32,
}

impl<S: Clone> Entry<S> {
    /// The last state on the path, or `start` for the seed entry.
    pub(crate) fn last<'a>(&'a self, start: &'a S) -> &'a S {
        self.states.last().unwrap_or(start)
    }

    /// Extend the path by one step. The new entry is due again after
    /// `step.cost` rounds.
    pub(crate) fn extend(&self, step: Step<S>) -> Self {
        let mut states = self.states.clone();
        states.push(step.state);
        Self {
            states,
            cost: self.cost + step.cost,
            delay: step.cost,
        }
    }

    pub(crate) fn into_path(self) -> Path<S> {
        Path {
            states: self.states,
            cost: self.cost,
        }
    }
}

/// Bucket-queue frontier: in-progress paths keyed by the number of
/// rounds remaining until they are due. Exclusively owned by one search
/// invocation.
#[derive(Debug)]
pub(crate) struct Frontier<S> {
    entries: Vec<Entry<S>>,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    /// A frontier holding only the seed entry: empty path, due now.
    pub(crate) fn seed() -> Self {
        Self {
            entries: vec![Entry {
                states: Vec::new(),
                cost: 0,
                delay: 0,
            }],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return all due entries (delay 0). Pending entries stay.
    pub(crate) fn take_due(&mut self) -> Vec<Entry<S>> {
        let (due, pending) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.delay == 0);
        self.entries = pending;
        due
    }

    /// Merge this round's surviving candidates with the pending entries,
    /// keeping only the cheapest entry per collapse key. Candidates are
    /// considered before pending entries, so on a cost tie the first seen
    /// (a candidate, if any) survives.
    pub(crate) fn absorb<K, C>(&mut self, candidates: Vec<Entry<S>>, collapse: &C)
    where
        K: Eq + Hash,
        C: Fn(&[S]) -> K,
    {
        let pending = std::mem::take(&mut self.entries);
        let mut kept: Vec<Entry<S>> = Vec::with_capacity(candidates.len() + pending.len());
        let mut by_key: HashMap<K, usize> = HashMap::new();

        for e in candidates.into_iter().chain(pending) {
            match by_key.entry(collapse(&e.states)) {
                hash_map::Entry::Occupied(slot) => {
                    let i = *slot.get();
                    if e.cost < kept[i].cost {
                        kept[i] = e;
                    }
                }
                hash_map::Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(e);
                }
            }
        }

        self.entries = kept;
    }

    /// Advance the wavefront one cost unit: decrement every delay and
    /// mark the final state of each entry that just became due as
    /// visited.
    pub(crate) fn tick(&mut self, visited: &mut HashSet<S>) {
        for e in &mut self.entries {
            e.delay -= 1;
            if e.delay == 0 {
                if let Some(s) = e.states.last() {
                    visited.insert(s.clone());
                }
            }
        }
    }
}
