// src/simulation/counts.rs

use std::collections::HashMap;
use std::fmt;

/// Histogram of measurement outcomes over repeated shots.
///
/// Keys are bit-strings read from the classical register in index
/// order: character `i` of a key is classical bit `i`. With the demo
/// circuits, which measure qubit `i` into bit `i`, a key therefore
/// reads in qubit order, so Grover's dominant key equals the marked
/// string as written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Counts {
    histogram: HashMap<String, u64>,
}

impl Counts {
    /// Creates an empty histogram. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Tallies one observation of `outcome`. (Internal visibility)
    pub(crate) fn record(&mut self, outcome: &str) {
        *self.histogram.entry(outcome.to_string()).or_insert(0) += 1;
    }

    /// Observed frequency of an outcome, zero if never seen.
    pub fn get(&self, outcome: &str) -> u64 {
        self.histogram.get(outcome).copied().unwrap_or(0)
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// `true` if no shots were recorded.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.histogram.values().sum()
    }

    /// The most frequently observed outcome, ties broken by key order.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.histogram
            .iter()
            .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Iterates over `(outcome, frequency)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.histogram.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counts ({} shots):", self.total())?;
        if self.histogram.is_empty() {
            return writeln!(f, "  (no outcomes recorded)");
        }
        // Highest frequency first for readable demo output.
        let mut sorted: Vec<_> = self.histogram.iter().collect();
        sorted.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        for (outcome, freq) in sorted {
            writeln!(f, "  {outcome}: {freq}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_total() {
        let mut counts = Counts::new();
        counts.record("01");
        counts.record("01");
        counts.record("10");
        assert_eq!(counts.get("01"), 2);
        assert_eq!(counts.get("10"), 1);
        assert_eq!(counts.get("00"), 0);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn most_frequent_picks_the_mode() {
        let mut counts = Counts::new();
        for _ in 0..5 {
            counts.record("11");
        }
        counts.record("00");
        assert_eq!(counts.most_frequent(), Some(("11", 5)));
    }
}
