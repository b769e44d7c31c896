//! Ordered color-transition rules with usage counters
//!
//! Rules are tried in order and the first one whose requirements all hold
//! decides the new color. Looser rules placed later act as fallbacks.

use crate::spatial::Histogram;
use std::fmt;

/// Minimum number of neighbors of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Neighbor color to count
    pub color: String,
    /// Smallest acceptable count
    pub minimum: usize,
}

impl Requirement {
    /// Create a requirement of at least `minimum` neighbors of `color`
    pub fn new(color: impl Into<String>, minimum: usize) -> Self {
        Self {
            color: color.into(),
            minimum,
        }
    }

    /// Whether `histogram` meets this requirement
    pub fn is_met(&self, histogram: &Histogram) -> bool {
        histogram.count(&self.color) >= self.minimum
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.minimum, self.color)
    }
}

/// Requirements, a result color and the number of times the rule fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    requirements: Vec<Requirement>,
    result: String,
    hits: u64,
}

impl Rule {
    /// Create a rule with no recorded hits
    pub fn new(requirements: Vec<Requirement>, result: impl Into<String>) -> Self {
        Self {
            requirements,
            result: result.into(),
            hits: 0,
        }
    }

    /// Requirements in declaration order
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Color a matching position becomes
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Times this rule was the first applicable one during propagation
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// True when every requirement holds for `histogram`
    pub fn is_applicable(&self, histogram: &Histogram) -> bool {
        self.requirements
            .iter()
            .all(|requirement| requirement.is_met(histogram))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.result)?;
        for requirement in &self.requirements {
            write!(f, " {requirement}")?;
        }
        Ok(())
    }
}

/// Priority-ordered rule list
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule at the lowest priority, resetting its hit count
    ///
    /// Returns the index the rule was stored at.
    pub fn add(&mut self, mut rule: Rule) -> usize {
        rule.hits = 0;
        self.rules.push(rule);
        self.rules.len() - 1
    }

    /// Rules in current priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule at `index` in current priority order
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule has been added
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index and rule of the first applicable rule for `histogram`
    pub fn first_applicable(&self, histogram: &Histogram) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.is_applicable(histogram))
    }

    /// Resolve `histogram` and count the hit on the matching rule
    ///
    /// Returns the result color of the first applicable rule, or `None` when
    /// nothing applies. Exactly one counter is incremented per match.
    pub fn apply(&mut self, histogram: &Histogram) -> Option<String> {
        let index = self.first_applicable(histogram).map(|(index, _)| index)?;
        let rule = self.rules.get_mut(index)?;
        rule.hits += 1;
        Some(rule.result.clone())
    }

    /// Stable sort by ascending hit count
    ///
    /// Least-used rules move to the front; equal counts keep their order.
    pub fn reorder_by_usage(&mut self) {
        self.rules.sort_by_key(Rule::hits);
    }
}
