//! Frequency-ranked selection: the `k` most frequent elements of a sequence.
//!
//! The result holds exactly `k` distinct elements, each at least as frequent
//! as every element left out. The order of the result is unspecified, and
//! so is the choice among elements tied at the cutoff frequency: for
//! `[1, 2, 3]` and `k = 2` any two of the three values are a valid answer.
//! Strategies may therefore return different sets, but always with the same
//! multiset of frequencies.
//!
//! `k` must lie in `[1, distinct]`, otherwise [`Error::InvalidArgument`] is
//! returned.
//!
//! | Strategy       | Time        | Space |
//! |----------------|-------------|-------|
//! | [`FullSort`]   | O(n log n)  | O(n)  |
//! | [`MinHeap`]    | O(n log k)  | O(n)  |
//! | [`BucketScan`] | O(n)        | O(n)  |

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use log::trace;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::strategy::{Complexity, Cost, Strategy};
use crate::utils::tick;

pub trait TopK<T>: Strategy {
    fn top_k(&self, nums: &[T], k: usize) -> Result<Vec<T>>;
}

/// Sorts all `(element, count)` pairs by count and keeps the first `k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullSort;

/// Keeps the `k` best entries in a min-heap, evicting the least frequent
/// whenever it grows past `k`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinHeap;

/// Places each element in the bucket indexed by its count, then walks the
/// buckets from the highest possible count (`n`) down, stopping as soon as
/// `k` elements are collected.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketScan;

/// Checks `1 <= k <= distinct`.
pub(crate) fn check_k(k: usize, distinct: usize) -> Result<()> {
    if k == 0 || k > distinct {
        return Err(Error::invalid(format!(
            "k = {k} is outside [1, {distinct}], the number of distinct elements"
        )));
    }
    Ok(())
}

/// Counts `nums` and checks `k` against the number of distinct elements.
fn checked_table<T>(nums: &[T], k: usize) -> Result<FrequencyTable<T>>
where
    T: Eq + Hash + Clone,
{
    let table = FrequencyTable::build(nums);
    check_k(k, table.distinct())?;
    Ok(table)
}

impl Strategy for FullSort {
    fn name(&self) -> &'static str {
        "full-sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linearithmic, Cost::Linear)
    }
}

impl Strategy for MinHeap {
    fn name(&self) -> &'static str {
        "min-heap"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::LinearLogK, Cost::Linear)
    }
}

impl Strategy for BucketScan {
    fn name(&self) -> &'static str {
        "bucket-sort"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Linear)
    }
}

impl<T> TopK<T> for FullSort
where
    T: Eq + Hash + Clone,
{
    fn top_k(&self, nums: &[T], k: usize) -> Result<Vec<T>> {
        let mut entries = checked_table(nums, k)?.into_vec();
        entries.sort_unstable_by(|a, b| {
            tick(1);
            b.1.cmp(&a.1)
        });
        entries.truncate(k);
        Ok(entries.into_iter().map(|(x, _)| x).collect())
    }
}

/// Heap entry ordered by count; `idx` points back into the entry vector.
#[derive(Debug)]
struct ByCount {
    count: usize,
    idx: usize,
}

impl PartialEq for ByCount {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByCount {}

impl PartialOrd for ByCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByCount {
    fn cmp(&self, other: &Self) -> Ordering {
        tick(1);
        self.count
            .cmp(&other.count)
            .then(self.idx.cmp(&other.idx))
    }
}

impl<T> TopK<T> for MinHeap
where
    T: Eq + Hash + Clone,
{
    fn top_k(&self, nums: &[T], k: usize) -> Result<Vec<T>> {
        let entries = checked_table(nums, k)?.into_vec();

        let mut heap: BinaryHeap<Reverse<ByCount>> = BinaryHeap::with_capacity(k + 1);
        for (idx, &(_, count)) in entries.iter().enumerate() {
            heap.push(Reverse(ByCount { count, idx }));
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut keep = vec![false; entries.len()];
        for Reverse(e) in heap {
            keep[e.idx] = true;
        }
        Ok(entries
            .into_iter()
            .zip(keep)
            .filter_map(|((x, _), kept)| kept.then_some(x))
            .collect())
    }
}

impl<T> TopK<T> for BucketScan
where
    T: Eq + Hash + Clone,
{
    fn top_k(&self, nums: &[T], k: usize) -> Result<Vec<T>> {
        let table = checked_table(nums, k)?;

        // No element can occur more than n times.
        let mut buckets: Vec<Vec<T>> = (0..=nums.len()).map(|_| Vec::new()).collect();
        for (x, count) in table {
            tick(1);
            buckets[count].push(x);
        }

        let mut result = Vec::with_capacity(k);
        for (count, bucket) in buckets.into_iter().enumerate().skip(1).rev() {
            tick(1);
            for x in bucket {
                tick(1);
                result.push(x);
                if result.len() == k {
                    trace!("bucket scan stopped at count {count}");
                    return Ok(result);
                }
            }
        }
        // Unreachable while k <= distinct.
        Ok(result)
    }
}

/// Top-`k` selection with the linear-time [`BucketScan`] strategy.
///
/// # Examples
/// ```
/// use hashkit::top_k::top_k_frequent;
///
/// let mut top = top_k_frequent(&[1, 2, 2, 3, 3, 3], 2).unwrap();
/// top.sort();
/// assert_eq!(top, vec![2, 3]);
///
/// assert!(top_k_frequent(&[1, 2, 2], 3).is_err());
/// ```
pub fn top_k_frequent<T: Eq + Hash + Clone>(nums: &[T], k: usize) -> Result<Vec<T>> {
    BucketScan.top_k(nums, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_sequences::{gen_queries, gen_skewed_sequence};

    fn strategies() -> Vec<Box<dyn TopK<i32>>> {
        vec![Box::new(FullSort), Box::new(MinHeap), Box::new(BucketScan)]
    }

    fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
        v.sort();
        v
    }

    /// Checks the selection contract: `k` distinct elements, none less
    /// frequent than an element left out.
    fn assert_valid<T: Eq + Hash + Clone + std::fmt::Debug>(nums: &[T], k: usize, top: &[T]) {
        let table = FrequencyTable::build(nums);
        assert_eq!(top.len(), k);
        assert_eq!(FrequencyTable::build(top).distinct(), k, "duplicates in {top:?}");
        let min_in = top.iter().map(|x| table.get(x)).min().unwrap();
        let max_out = table
            .iter()
            .filter(|(x, _)| !top.contains(*x))
            .map(|(_, &c)| c)
            .max()
            .unwrap_or(0);
        assert!(min_in >= max_out, "{top:?} misses a more frequent element");
    }

    #[test]
    fn known_cases() {
        let cases: [(&[i32], usize, Vec<i32>); 4] = [
            (&[1, 2, 2, 3, 3, 3], 2, vec![2, 3]),
            (&[7, 7], 1, vec![7]),
            (&[1], 1, vec![1]),
            (&[4, 1, -1, 2, -1, 2, 3], 2, vec![-1, 2]),
        ];
        for s in strategies() {
            for (nums, k, expected) in cases.iter() {
                let top = s.top_k(nums, *k).unwrap();
                assert_eq!(sorted(top), *expected, "{} on {nums:?}", s.name());
            }
        }
    }

    #[test]
    fn k_out_of_range() {
        for s in strategies() {
            assert!(matches!(s.top_k(&[1, 2, 2], 0), Err(Error::InvalidArgument(_))));
            assert!(matches!(s.top_k(&[1, 2, 2], 3), Err(Error::InvalidArgument(_))));
            assert!(matches!(s.top_k(&[], 1), Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn check_k_bounds() {
        assert!(check_k(1, 1).is_ok());
        assert!(check_k(4, 4).is_ok());
        assert!(matches!(check_k(0, 4), Err(Error::InvalidArgument(_))));
        let Err(Error::InvalidArgument(msg)) = check_k(5, 4) else {
            panic!("k above distinct must be rejected");
        };
        assert!(msg.contains("[1, 4]"), "{msg}");
    }

    #[test]
    fn k_equals_distinct_returns_everything() {
        for s in strategies() {
            let top = s.top_k(&[5, 1, 5, 9], 3).unwrap();
            assert_eq!(sorted(top), vec![1, 5, 9], "{}", s.name());
        }
    }

    #[test]
    fn ties_accept_any_valid_answer() {
        let nums = [1, 2, 3, 4, 4];
        for s in strategies() {
            let top = s.top_k(&nums, 2).unwrap();
            assert_valid(&nums, 2, &top);
            assert!(top.contains(&4), "{}", s.name());
        }
    }

    #[test]
    fn works_on_strings() {
        let words = ["a", "b", "a", "c", "a", "b"];
        let top = BucketScan.top_k(&words, 2).unwrap();
        assert_eq!(sorted(top), vec!["a", "b"]);
        let top = MinHeap.top_k(&words, 1).unwrap();
        assert_eq!(top, vec!["a"]);
    }

    #[test]
    fn random_strategies_satisfy_contract() {
        for n in [1, 5, 50, 500] {
            let nums: Vec<i32> = gen_queries(n, n / 3 + 1).into_iter().map(|x| x as i32).collect();
            let distinct = FrequencyTable::build(&nums).distinct();
            for k in 1..=distinct.min(8) {
                let table = FrequencyTable::build(&nums);
                let mut profiles = Vec::new();
                for s in strategies() {
                    let top = s.top_k(&nums, k).unwrap();
                    assert_valid(&nums, k, &top);
                    profiles.push(sorted(top.iter().map(|x| table.get(x)).collect::<Vec<_>>()));
                }
                assert!(profiles.windows(2).all(|w| w[0] == w[1]));
            }
        }
    }

    #[test]
    fn skewed_sequence_is_unique() {
        let nums = gen_skewed_sequence(1000, 30);
        for s in [&FullSort as &dyn TopK<u32>, &MinHeap, &BucketScan] {
            let top = s.top_k(&nums, 3).unwrap();
            assert_eq!(sorted(top), vec![0, 1, 2], "{}", s.name());
        }
    }
}
