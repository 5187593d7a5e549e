//! Pair-sum search: find two distinct positions whose values add up to a
//! target.
//!
//! Every strategy returns the pair with the **smaller index first**, or
//! `None` if no such pair exists. Callers usually guarantee exactly one
//! qualifying pair; strategies may stop at the first match but never assume
//! the input is sorted.
//!
//! | Strategy             | Time        | Space |
//! |----------------------|-------------|-------|
//! | [`NestedScan`]       | O(n²)       | O(1)  |
//! | [`SortTwoPointers`]  | O(n log n)  | O(n)  |
//! | [`ComplementLookup`] | O(n)        | O(n)  |
//!
//! Sums are computed with checked arithmetic, so values near the bounds of
//! `T` never wrap into false matches.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use num::PrimInt;

use crate::strategy::{Complexity, Cost, Strategy};
use crate::utils::tick;

pub trait PairSum<T>: Strategy {
    /// Returns `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
    fn find_pair(&self, nums: &[T], target: T) -> Option<(usize, usize)>;
}

/// Checks every pair `i < j`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestedScan;

/// Sorts `(value, index)` copies and closes in from both ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortTwoPointers;

/// Single pass with a map from seen value to its index.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplementLookup;

impl Strategy for NestedScan {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Quadratic, Cost::Constant)
    }
}

impl Strategy for SortTwoPointers {
    fn name(&self) -> &'static str {
        "sort-two-pointers"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linearithmic, Cost::Linear)
    }
}

impl Strategy for ComplementLookup {
    fn name(&self) -> &'static str {
        "hash-map"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Linear)
    }
}

impl<T: PrimInt> PairSum<T> for NestedScan {
    fn find_pair(&self, nums: &[T], target: T) -> Option<(usize, usize)> {
        for (i, &a) in nums.iter().enumerate() {
            for (j, &b) in nums.iter().enumerate().skip(i + 1) {
                tick(1);
                if a.checked_add(&b) == Some(target) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

impl<T: PrimInt> PairSum<T> for SortTwoPointers {
    fn find_pair(&self, nums: &[T], target: T) -> Option<(usize, usize)> {
        let mut pairs: Vec<(T, usize)> = nums.iter().copied().zip(0..).collect();
        pairs.sort_unstable_by(|a, b| {
            tick(1);
            a.cmp(b)
        });

        let mut lo = 0;
        let mut hi = pairs.len().checked_sub(1)?;
        while lo < hi {
            tick(1);
            match cmp_sum(pairs[lo].0, pairs[hi].0, target) {
                Ordering::Equal => {
                    let (a, b) = (pairs[lo].1, pairs[hi].1);
                    return Some((a.min(b), a.max(b)));
                }
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
            }
        }
        None
    }
}

impl<T: PrimInt + Hash> PairSum<T> for ComplementLookup {
    fn find_pair(&self, nums: &[T], target: T) -> Option<(usize, usize)> {
        let mut seen: HashMap<T, usize> = HashMap::with_capacity(nums.len());

        for (i, &x) in nums.iter().enumerate() {
            tick(1);
            // The stored index was inserted on an earlier step, so it is the
            // smaller one.
            if let Some(&j) = target.checked_sub(&x).and_then(|c| seen.get(&c)) {
                return Some((j, i));
            }
            seen.entry(x).or_insert(i);
        }
        None
    }
}

/// Compares `a + b` with `target` without overflowing.
fn cmp_sum<T: PrimInt>(a: T, b: T, target: T) -> Ordering {
    match a.checked_add(&b) {
        Some(s) => s.cmp(&target),
        // Overflow past the maximum is larger than any target, past the
        // minimum smaller.
        None if b > T::zero() => Ordering::Greater,
        None => Ordering::Less,
    }
}

/// Pair-sum search with the linear-time [`ComplementLookup`] strategy.
///
/// # Examples
/// ```
/// use hashkit::pair_sum::find_pair;
///
/// assert_eq!(find_pair(&[3, 4, 5, 6], 7), Some((0, 1)));
/// assert_eq!(find_pair(&[4, 5, 6], 10), Some((0, 2)));
/// assert_eq!(find_pair(&[1, 2], 10), None);
/// ```
pub fn find_pair<T: PrimInt + Hash>(nums: &[T], target: T) -> Option<(usize, usize)> {
    ComplementLookup.find_pair(nums, target)
}
