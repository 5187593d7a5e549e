//! The capability every solver shares: a label and a declared cost.
//!
//! Each problem has its own trait (`PairSum`, `AnagramCheck`,
//! `ContainsDuplicate`, `GroupAnagrams`, `TopK`); all of them require
//! [`Strategy`] so that the [`harness`](crate::harness) can report on any
//! strategy without knowing its concrete type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An asymptotic cost class, in terms of the input length `n`
/// (and the selection size `k` where relevant).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cost {
    /// O(1)
    Constant,
    /// O(k), bounded by the number of distinct keys.
    Distinct,
    /// O(n)
    Linear,
    /// O(n log k)
    LinearLogK,
    /// O(n log n)
    Linearithmic,
    /// O(n²)
    Quadratic,
}

impl Cost {
    /// The exponent `e` such that the cost grows like `n^e` on inputs where
    /// the distinct count and `k` grow at most logarithmically.
    /// Logarithmic factors are rounded up to a small slack.
    pub fn exponent(self) -> f64 {
        match self {
            Cost::Constant => 0.0,
            Cost::Distinct | Cost::Linear => 1.0,
            Cost::LinearLogK => 1.1,
            Cost::Linearithmic => 1.2,
            Cost::Quadratic => 2.0,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cost::Constant => "O(1)",
            Cost::Distinct => "O(k)",
            Cost::Linear => "O(n)",
            Cost::LinearLogK => "O(n log k)",
            Cost::Linearithmic => "O(n log n)",
            Cost::Quadratic => "O(n²)",
        };
        f.write_str(s)
    }
}

/// Declared time and space cost of a strategy. Metadata only; the harness
/// is the one place where it is checked against measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complexity {
    pub time: Cost,
    pub space: Cost,
}

impl Complexity {
    pub const fn new(time: Cost, space: Cost) -> Self {
        Self { time, space }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time {}, space {}", self.time, self.space)
    }
}

/// A named algorithm solving one problem contract.
pub trait Strategy {
    /// Short label, e.g. `"hash-map"` or `"bucket-sort"`.
    fn name(&self) -> &'static str;

    fn complexity(&self) -> Complexity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_ordered_by_growth() {
        let mut costs = vec![
            Cost::Quadratic,
            Cost::Linear,
            Cost::Distinct,
            Cost::Constant,
            Cost::Linearithmic,
            Cost::LinearLogK,
        ];
        costs.sort();
        assert_eq!(
            costs,
            vec![
                Cost::Constant,
                Cost::Distinct,
                Cost::Linear,
                Cost::LinearLogK,
                Cost::Linearithmic,
                Cost::Quadratic
            ]
        );
        assert!(costs.windows(2).all(|w| w[0].exponent() <= w[1].exponent()));
        // Distinct keys never outnumber the input.
        assert_eq!(Cost::Distinct.exponent(), Cost::Linear.exponent());
        assert_eq!(Cost::Distinct.to_string(), "O(k)");
    }

    #[test]
    fn display() {
        let c = Complexity::new(Cost::Linearithmic, Cost::Linear);
        assert_eq!(c.to_string(), "time O(n log n), space O(n)");
    }
}
