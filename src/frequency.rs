use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

use serde::Serialize;

use crate::utils::tick;

/// Occurrence counts of the distinct elements of a sequence.
///
/// The table has one entry per distinct element and never stores a zero
/// count, so the sum of all counts equals the length of the sequence it was
/// built from.
///
/// # Examples
/// ```
/// use hashkit::FrequencyTable;
///
/// let table = FrequencyTable::build(&[1, 2, 2, 3, 3, 3]);
/// assert_eq!(table.get(&3), 3);
/// assert_eq!(table.get(&7), 0);
/// assert_eq!(table.distinct(), 3);
/// assert_eq!(table.total(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrequencyTable<T>
where
    T: Eq + Hash,
{
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T> FrequencyTable<T>
where
    T: Eq + Hash + Clone,
{
    /// Counts every element of `seq` in Θ(n) expected time.
    pub fn build(seq: &[T]) -> Self {
        seq.iter().cloned().collect()
    }
}

impl<T> FrequencyTable<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Records one more occurrence of `x`.
    #[inline]
    pub fn insert(&mut self, x: T) {
        tick(1);
        *self.counts.entry(x).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of occurrences of `x`, zero if it was never seen.
    pub fn get(&self, x: &T) -> usize {
        self.counts.get(x).copied().unwrap_or(0)
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of occurrences, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Largest count in the table, zero when empty.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Iterates over `(element, count)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, T, usize> {
        self.counts.iter()
    }

    /// Consumes the table into a vector of `(element, count)` pairs in
    /// arbitrary order.
    pub fn into_vec(self) -> Vec<(T, usize)> {
        self.counts.into_iter().collect()
    }
}

impl<T> Default for FrequencyTable<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FrequencyTable<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for x in iter {
            table.insert(x);
        }
        table
    }
}

impl<T> IntoIterator for FrequencyTable<T>
where
    T: Eq + Hash,
{
    type Item = (T, usize);
    type IntoIter = hash_map::IntoIter<T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FrequencyTable<T>
where
    T: Eq + Hash,
{
    type Item = (&'a T, &'a usize);
    type IntoIter = hash_map::Iter<'a, T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
