//! Valid anagram: do two strings contain the same characters with the same
//! multiplicities?
//!
//! Strings whose lengths differ are rejected before any counting. Equal
//! multisets of characters always have equal UTF-8 byte lengths, so the
//! check on [`str::len`] is exact.

use std::collections::HashMap;

use crate::signature::{Alphabet, Signature};
use crate::strategy::{Complexity, Cost, Strategy};
use crate::utils::tick;

pub trait AnagramCheck: Strategy {
    fn is_anagram(&self, s: &str, t: &str) -> bool;
}

/// Compares sorted characters. Θ(n log n) time, Θ(n) space.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortingCheck;

/// Counts `s` in a hash map and consumes the counts with `t`.
/// Θ(n) time, space proportional to the distinct characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashMapCheck;

/// One signed counter per alphabet letter: increment over `s`, decrement
/// over `t`. Θ(n) time, Θ(|alphabet|) space. Strings with characters outside
/// the alphabet are compared with [`SortingCheck`].
#[derive(Clone, Debug, Default)]
pub struct AlphabetCheck {
    alphabet: Alphabet,
}

impl AlphabetCheck {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// `None` if a character falls outside the alphabet.
    fn balance(&self, s: &str, t: &str) -> Option<bool> {
        let mut counter = vec![0i64; self.alphabet.len()];
        for c in s.chars() {
            tick(1);
            counter[self.alphabet.index_of(c)?] += 1;
        }
        for c in t.chars() {
            tick(1);
            counter[self.alphabet.index_of(c)?] -= 1;
        }
        Some(counter.iter().all(|&c| c == 0))
    }
}

impl Strategy for SortingCheck {
    fn name(&self) -> &'static str {
        "sorting"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linearithmic, Cost::Linear)
    }
}

impl Strategy for HashMapCheck {
    fn name(&self) -> &'static str {
        "hash-map"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Distinct)
    }
}

impl Strategy for AlphabetCheck {
    fn name(&self) -> &'static str {
        "fixed-array"
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Cost::Linear, Cost::Constant)
    }
}

impl AnagramCheck for SortingCheck {
    fn is_anagram(&self, s: &str, t: &str) -> bool {
        s.len() == t.len() && Signature::sorted(s) == Signature::sorted(t)
    }
}

impl AnagramCheck for HashMapCheck {
    fn is_anagram(&self, s: &str, t: &str) -> bool {
        if s.len() != t.len() {
            return false;
        }

        let mut count: HashMap<char, usize> = HashMap::new();
        for c in s.chars() {
            tick(1);
            *count.entry(c).or_insert(0) += 1;
        }
        for c in t.chars() {
            tick(1);
            match count.get_mut(&c) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }
        // Equal byte lengths but fewer chars in t would leave counts over.
        count.values().all(|&n| n == 0)
    }
}

impl AnagramCheck for AlphabetCheck {
    fn is_anagram(&self, s: &str, t: &str) -> bool {
        if s.len() != t.len() {
            return false;
        }
        self.balance(s, t)
            .unwrap_or_else(|| SortingCheck.is_anagram(s, t))
    }
}

/// Anagram check over lowercase ASCII with sorted fallback.
///
/// # Examples
/// ```
/// use hashkit::anagram::is_anagram;
///
/// assert!(is_anagram("racecar", "carrace"));
/// assert!(!is_anagram("jar", "jam"));
/// assert!(!is_anagram("abc", "abcd"));
/// assert!(is_anagram("", ""));
/// ```
pub fn is_anagram(s: &str, t: &str) -> bool {
    AlphabetCheck::default().is_anagram(s, t)
}
