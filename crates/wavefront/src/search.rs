use std::collections::HashSet;
use std::hash::Hash;

use crate::error::SearchError;
use crate::frontier::{Entry, Frontier};
use crate::path::{Path, Step};
use crate::traits::Stepper;

/// Shortest-path search engine.
///
/// `Wavefront` holds only call-independent configuration; every call to
/// [`search`](Wavefront::search) or one of its convenience wrappers is a
/// self-contained computation on the calling thread, with no state kept
/// between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wavefront {
    log_every: u64,
}

impl Wavefront {
    /// Create an engine with default configuration (no progress logging).
    pub const fn new() -> Self {
        Self { log_every: 0 }
    }

    /// Emit a `log::debug!` progress line every `n` rounds (0 disables).
    /// Diagnostic only; the output format is not part of the contract.
    pub const fn log_every(mut self, n: u64) -> Self {
        self.log_every = n;
        self
    }

    /// Find all minimum-cost paths from `start` to any state accepted by
    /// `is_goal`, with no filtering and no collapsing.
    ///
    /// Returns an empty `Vec` when no goal is reachable. Every returned
    /// path has the same, minimal total cost.
    ///
    /// # Errors
    ///
    /// [`SearchError::NonPositiveCost`] if `stepper` produces a step with
    /// `cost <= 0`.
    pub fn find<S, P, G>(
        &self,
        start: S,
        stepper: &P,
        is_goal: G,
    ) -> Result<Vec<Path<S>>, SearchError>
    where
        S: Clone + Eq + Hash,
        P: Stepper<S>,
        G: Fn(&S) -> bool,
    {
        self.search(start, stepper, is_goal, |_: &[S]| false, |p: &[S]| {
            p.to_vec()
        })
    }

    /// Find all minimum-cost paths from `start` to one specific target
    /// state. Shorthand for [`find`](Wavefront::find) with an equality
    /// predicate.
    ///
    /// # Errors
    ///
    /// [`SearchError::NonPositiveCost`] if `stepper` produces a step with
    /// `cost <= 0`.
    pub fn find_to<S, P>(
        &self,
        start: S,
        stepper: &P,
        target: &S,
    ) -> Result<Vec<Path<S>>, SearchError>
    where
        S: Clone + Eq + Hash,
        P: Stepper<S>,
    {
        self.find(start, stepper, |s: &S| s == target)
    }

    /// Full-control search with all four strategies supplied.
    ///
    /// - `is_goal`: termination predicate over states.
    /// - `filter`: returning `true` discards the candidate path. Applied
    ///   to freshly generated candidates only, before that round's
    ///   collapse merge; pending entries are never re-filtered.
    /// - `collapse`: projection of a path to a key; among entries sharing
    ///   a key only the cheapest survives. A lossy, caller-opted
    ///   optimization: equal-cost goal paths merged by the key are lost.
    ///
    /// Passing an accept-all filter and the whole path as key recovers
    /// exact multi-path shortest-search semantics.
    ///
    /// # Errors
    ///
    /// [`SearchError::NonPositiveCost`] if `stepper` produces a step with
    /// `cost <= 0`.
    pub fn search<S, K, P, G, F, C>(
        &self,
        start: S,
        stepper: &P,
        is_goal: G,
        filter: F,
        collapse: C,
    ) -> Result<Vec<Path<S>>, SearchError>
    where
        S: Clone + Eq + Hash,
        K: Eq + Hash,
        P: Stepper<S>,
        G: Fn(&S) -> bool,
        F: Fn(&[S]) -> bool,
        C: Fn(&[S]) -> K,
    {
        let mut frontier = Frontier::seed();
        let mut visited: HashSet<S> = HashSet::new();
        visited.insert(start.clone());

        let mut sbuf: Vec<Step<S>> = Vec::new();
        let mut round: u64 = 0;

        loop {
            // Entries become due in non-decreasing cost order, so the
            // first round with a due goal holds every optimal path.
            let (goals, due): (Vec<_>, Vec<_>) = frontier
                .take_due()
                .into_iter()
                .partition(|e| is_goal(e.last(&start)));
            if !goals.is_empty() {
                return Ok(goals.into_iter().map(Entry::into_path).collect());
            }
            if due.is_empty() && frontier.is_empty() {
                return Ok(Vec::new());
            }

            let mut candidates: Vec<Entry<S>> = Vec::new();
            for entry in &due {
                sbuf.clear();
                stepper.steps(entry.last(&start), &mut sbuf);
                for step in sbuf.drain(..) {
                    if step.cost <= 0 {
                        return Err(SearchError::NonPositiveCost { cost: step.cost });
                    }
                    if visited.contains(&step.state) {
                        continue;
                    }
                    let candidate = entry.extend(step);
                    if filter(&candidate.states) {
                        continue;
                    }
                    candidates.push(candidate);
                }
            }

            frontier.absorb(candidates, &collapse);
            frontier.tick(&mut visited);

            round += 1;
            if self.log_every > 0 && round % self.log_every == 0 {
                log::debug!(
                    "round {round}: {} entries pending, {} states visited",
                    frontier.len(),
                    visited.len()
                );
            }
        }
    }
}
