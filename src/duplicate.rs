//! Contains duplicate: does any value occur more than once?
//!
//! All strategies answer `true` iff the number of distinct values is smaller
//! than the length of the input. None of them reorders the caller's slice.

use std::collections::HashSet;
use std::hash::Hash;

use crate::strategy::{Complexity, Cost, Strategy};
use crate::utils::tick;

pub trait ContainsDuplicate<T>: Strategy {
    fn contains_duplicate(&self, nums: &[T]) -> bool;
}

/// Compares every pair. Θ(n²) time, Θ(1) space.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestedScan;

/// Sorts a private copy and compares neighbours. Θ(n log n) time, Θ(n) space.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortAdjacent;

/// Stops at the first value already in a hash set. Θ(n) time and space.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashSetSeen;

impl Strategy for NestedScan {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Quadratic, Cost::Constant)
    }
}

impl Strategy for SortAdjacent {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linearithmic, Cost::Linear)
    }
}

impl Strategy for HashSetSeen {
    fn name(&self) -> &'static str {
        "hash-set"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Linear)
    }
}

impl<T: Eq> ContainsDuplicate<T> for NestedScan {
    fn contains_duplicate(&self, nums: &[T]) -> bool {
        nums.iter().enumerate().any(|(i, a)| {
            nums[i + 1..].iter().any(|b| {
                tick(1);
                a == b
            })
        })
    }
}

impl<T: Ord> ContainsDuplicate<T> for SortAdjacent {
    fn contains_duplicate(&self, nums: &[T]) -> bool {
        let mut sorted: Vec<&T> = nums.iter().collect();
        sorted.sort_unstable_by(|a, b| {
            tick(1);
            a.cmp(b)
        });
        sorted.windows(2).any(|w| {
            tick(1);
            w[0] == w[1]
        })
    }
}

impl<T: Eq + Hash> ContainsDuplicate<T> for HashSetSeen {
    fn contains_duplicate(&self, nums: &[T]) -> bool {
        let mut seen = HashSet::with_capacity(nums.len());
        nums.iter().any(|x| {
            tick(1);
            !seen.insert(x)
        })
    }
}

/// Duplicate detection with the linear-time [`HashSetSeen`] strategy.
///
/// # Examples
/// ```
/// use hashkit::duplicate::contains_duplicate;
///
/// assert!(contains_duplicate(&[1, 2, 3, 3]));
/// assert!(!contains_duplicate(&[1, 2, 3, 4]));
/// assert!(contains_duplicate(&[5, 5, 5, 5]));
/// assert!(!contains_duplicate::<i32>(&[]));
/// ```
pub fn contains_duplicate<T: Eq + Hash>(nums: &[T]) -> bool {
    HashSetSeen.contains_duplicate(nums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_sequences::gen_queries;

    fn strategies() -> Vec<Box<dyn ContainsDuplicate<usize>>> {
        vec![
            Box::new(NestedScan),
            Box::new(SortAdjacent),
            Box::new(HashSetSeen),
        ]
    }

    #[test]
    fn known_cases() {
        let cases: [(&[usize], bool); 5] = [
            (&[1, 2, 3, 3], true),
            (&[1, 2, 3, 4], false),
            (&[1], false),
            (&[5, 5, 5, 5], true),
            (&[], false),
        ];
        for s in strategies() {
            for (nums, expected) in cases {
                assert_eq!(s.contains_duplicate(nums), expected, "{} on {nums:?}", s.name());
            }
        }
    }

    #[test]
    fn input_is_not_reordered() {
        let nums = vec![3usize, 1, 2, 1];
        assert!(SortAdjacent.contains_duplicate(&nums));
        assert_eq!(nums, vec![3, 1, 2, 1]);
    }

    #[test]
    fn works_on_strings() {
        let words = ["x", "y", "x"];
        assert!(NestedScan.contains_duplicate(&words));
        assert!(SortAdjacent.contains_duplicate(&words));
        assert!(HashSetSeen.contains_duplicate(&words));
    }

    #[test]
    fn matches_set_size() {
        for n in [0, 1, 2, 10, 50, 200] {
            for range in [n.max(1), 4 * n + 1] {
                let nums = gen_queries(n, range);
                let mut distinct = nums.clone();
                distinct.sort_unstable();
                distinct.dedup();
                let expected = distinct.len() < nums.len();
                for s in strategies() {
                    assert_eq!(s.contains_duplicate(&nums), expected, "{}", s.name());
                }
            }
        }
    }
}
