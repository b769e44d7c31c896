//! Neighbor color histograms

use std::collections::BTreeMap;
use std::fmt;

/// Count of occupied neighbor slots per color
///
/// Colors iterate in lexical order so rendered histograms are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<String, usize>,
}

impl Histogram {
    /// Create an empty histogram
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one more neighbor of `color`
    pub fn add(&mut self, color: &str) {
        if let Some(count) = self.counts.get_mut(color) {
            *count += 1;
        } else {
            self.counts.insert(color.to_string(), 1);
        }
    }

    /// Number of neighbors with `color`, zero when absent
    pub fn count(&self, color: &str) -> usize {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no neighbor was recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of neighbors across all colors
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(color, count)` pairs in color order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(color, &count)| (color.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Histogram {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for color in iter {
            histogram.add(color.as_ref());
        }
        histogram
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (color, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{count} {color}")?;
            first = false;
        }
        Ok(())
    }
}
