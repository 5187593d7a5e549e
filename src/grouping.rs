//! Equivalence grouping: partition strings into anagram classes.
//!
//! Every strategy returns the groups in order of first appearance, and the
//! members of each group in input order. Duplicate inputs land in the same
//! group, and empty strings form a group of their own.
//!
//! With `m` inputs of length at most `n`:
//!
//! | Strategy              | Time            |
//! |-----------------------|-----------------|
//! | [`PairwiseGrouping`]  | O(m² n log n)   |
//! | [`SortedKeyGrouping`] | O(m n log n)    |
//! | [`CountKeyGrouping`]  | O(m n)          |

use std::collections::HashMap;

use crate::signature::{Signature, SignatureEngine};
use crate::strategy::{Complexity, Cost, Strategy};
use crate::utils::tick;

pub trait GroupAnagrams: Strategy {
    fn group<'a>(&self, inputs: &[&'a str]) -> Vec<Vec<&'a str>>;
}

/// Compares each ungrouped input with all the remaining ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairwiseGrouping;

/// Keys a hash map by the sorted characters of each input.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortedKeyGrouping;

/// Keys a hash map by the [`Signature`] of each input, i.e. letter counts
/// over the engine's alphabet when possible.
#[derive(Clone, Debug, Default)]
pub struct CountKeyGrouping {
    engine: SignatureEngine,
}

impl CountKeyGrouping {
    pub fn new(engine: SignatureEngine) -> Self {
        Self { engine }
    }
}

/// Appends each input to the group of its key, creating groups on first
/// sight.
fn group_by_key<'a, F>(inputs: &[&'a str], key: F) -> Vec<Vec<&'a str>>
where
    F: Fn(&str) -> Signature,
{
    let mut index: HashMap<Signature, usize> = HashMap::with_capacity(inputs.len());
    let mut groups: Vec<Vec<&'a str>> = Vec::new();

    for &s in inputs {
        tick(1);
        let slot = *index.entry(key(s)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(s);
    }
    groups
}

impl Strategy for PairwiseGrouping {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Quadratic, Cost::Linear)
    }
}

impl Strategy for SortedKeyGrouping {
    fn name(&self) -> &'static str {
        "sorted-key"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linearithmic, Cost::Linear)
    }
}

impl Strategy for CountKeyGrouping {
    fn name(&self) -> &'static str {
        "count-key"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Linear)
    }
}

impl GroupAnagrams for PairwiseGrouping {
    fn group<'a>(&self, inputs: &[&'a str]) -> Vec<Vec<&'a str>> {
        let mut visited = vec![false; inputs.len()];
        let mut groups = Vec::new();

        for i in 0..inputs.len() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            let key = Signature::sorted(inputs[i]);
            let mut group = vec![inputs[i]];

            for j in i + 1..inputs.len() {
                tick(1);
                if !visited[j] && Signature::sorted(inputs[j]) == key {
                    visited[j] = true;
                    group.push(inputs[j]);
                }
            }
            groups.push(group);
        }
        groups
    }
}

impl GroupAnagrams for SortedKeyGrouping {
    fn group<'a>(&self, inputs: &[&'a str]) -> Vec<Vec<&'a str>> {
        group_by_key(inputs, Signature::sorted)
    }
}

impl GroupAnagrams for CountKeyGrouping {
    fn group<'a>(&self, inputs: &[&'a str]) -> Vec<Vec<&'a str>> {
        group_by_key(inputs, |s| self.engine.signature(s))
    }
}

/// Groups anagrams with [`CountKeyGrouping`] over lowercase ASCII.
///
/// # Examples
/// ```
/// use hashkit::grouping::group_anagrams;
///
/// let groups = group_anagrams(&["act", "pots", "tops", "cat", "stop", "hat"]);
/// assert_eq!(
///     groups,
///     vec![vec!["act", "cat"], vec!["pots", "tops", "stop"], vec!["hat"]]
/// );
/// ```
pub fn group_anagrams<'a>(inputs: &[&'a str]) -> Vec<Vec<&'a str>> {
    CountKeyGrouping::default().group(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_sequences::{gen_anagram_words, gen_words};

    fn strategies() -> Vec<Box<dyn GroupAnagrams>> {
        vec![
            Box::new(PairwiseGrouping),
            Box::new(SortedKeyGrouping),
            Box::new(CountKeyGrouping::default()),
        ]
    }

    #[test]
    fn example_group_sizes() {
        let input = ["act", "pots", "tops", "cat", "stop", "hat"];
        for s in strategies() {
            let groups = s.group(&input);
            let mut sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
            sizes.sort_unstable();
            assert_eq!(sizes, vec![1, 2, 3], "{}", s.name());
            assert_eq!(groups[1], vec!["pots", "tops", "stop"], "{}", s.name());
        }
    }

    #[test]
    fn singletons_and_empty() {
        for s in strategies() {
            assert_eq!(s.group(&["x"]), vec![vec!["x"]]);
            assert_eq!(s.group(&[""]), vec![vec![""]]);
            assert_eq!(s.group(&["", "a", ""]), vec![vec!["", ""], vec!["a"]]);
            assert!(s.group(&[]).is_empty());
        }
    }

    #[test]
    fn one_class() {
        let input = ["abc", "bca", "cab", "acb", "bac", "cba"];
        for s in strategies() {
            assert_eq!(s.group(&input), vec![input.to_vec()], "{}", s.name());
        }
    }

    #[test]
    fn duplicates_share_a_group() {
        for s in strategies() {
            assert_eq!(
                s.group(&["ab", "ba", "ab", "c"]),
                vec![vec!["ab", "ba", "ab"], vec!["c"]],
                "{}",
                s.name()
            );
        }
    }

    #[test]
    fn partition_properties() {
        let engine = SignatureEngine::default();
        let mut words = gen_anagram_words(300, 12, 5);
        words.extend(gen_words(30, 3, &['x', 'y', 'É']));
        let input: Vec<&str> = words.iter().map(String::as_str).collect();

        let reference = SortedKeyGrouping.group(&input);
        for s in strategies() {
            let groups = s.group(&input);
            assert_eq!(groups, reference, "{}", s.name());

            // Members of a group share a signature, different groups differ.
            let keys: Vec<Signature> = groups
                .iter()
                .map(|g| {
                    let k = engine.signature(g[0]);
                    assert!(g.iter().all(|w| engine.signature(w) == k));
                    k
                })
                .collect();
            let mut dedup = keys.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), keys.len());

            // The union of the groups is the input multiset.
            let mut flat: Vec<&str> = groups.concat();
            let mut all = input.clone();
            flat.sort_unstable();
            all.sort_unstable();
            assert_eq!(flat, all);
        }
    }
}
