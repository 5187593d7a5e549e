//! Order-independent signatures of strings.
//!
//! A [`Signature`] is a canonical key for the multiset of characters of a
//! string: two strings have equal signatures **iff** one is a permutation of
//! the other.
//!
//! Two encodings exist:
//!
//! - [`Signature::Counts`]: one counter per letter of a configured
//!   [`Alphabet`], computed in Θ(len).
//! - [`Signature::Sorted`]: the characters in sorted order, computed in
//!   Θ(len log len). Used for any string containing a character outside the
//!   alphabet.
//!
//! The encoding chosen for a string depends only on its multiset of
//! characters, so the "iff" above holds across both encodings as long as one
//! [`SignatureEngine`] (one alphabet) is used.

use std::collections::HashMap;

use mem_dbg::{MemDbg, MemSize};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::tick;

/// An ordered set of distinct characters with constant-time index lookup.
///
/// Contiguous ranges (such as `'a'..='z'`) are indexed by subtraction;
/// anything else goes through a hash map.
///
/// # Examples
/// ```
/// use hashkit::signature::Alphabet;
///
/// let lower = Alphabet::lowercase();
/// assert_eq!(lower.len(), 26);
/// assert_eq!(lower.index_of('c'), Some(2));
/// assert_eq!(lower.index_of('C'), None);
///
/// let dna = Alphabet::new("ACGT".chars()).unwrap();
/// assert_eq!(dna.index_of('G'), Some(2));
///
/// assert!(Alphabet::new("abca".chars()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    chars: Box<[char]>,
    lookup: Lookup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Lookup {
    Range { first: u32 },
    Map(HashMap<char, usize>),
}

impl Alphabet {
    /// Builds an alphabet from distinct characters, in the given order.
    ///
    /// Fails with [`Error::InvalidArgument`] if `chars` is empty or repeats a
    /// character.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
        let chars: Box<[char]> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(Error::invalid("alphabet must contain at least one character"));
        }

        let mut map = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if map.insert(c, i).is_some() {
                return Err(Error::invalid(format!("alphabet repeats character {c:?}")));
            }
        }

        let first = chars[0] as u32;
        let contiguous = chars
            .iter()
            .enumerate()
            .all(|(i, &c)| c as u32 == first + i as u32);

        let lookup = if contiguous {
            Lookup::Range { first }
        } else {
            Lookup::Map(map)
        };
        Ok(Self { chars, lookup })
    }

    /// The 26 lowercase ASCII letters.
    pub fn lowercase() -> Self {
        Self {
            chars: ('a'..='z').collect(),
            lookup: Lookup::Range { first: 'a' as u32 },
        }
    }

    /// Position of `c` in the alphabet, or `None` if it is not a member.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        match &self.lookup {
            Lookup::Range { first } => {
                let i = (c as u32).checked_sub(*first)? as usize;
                (i < self.chars.len()).then_some(i)
            }
            Lookup::Map(map) => map.get(&c).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; an alphabet has at least one character.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = Error;

    fn try_from(chars: Vec<char>) -> Result<Self> {
        Self::new(chars)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.into_vec()
    }
}

/// Canonical key of the multiset of characters of a string.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, MemSize, MemDbg,
)]
pub enum Signature {
    /// Per-letter counts over an alphabet.
    Counts(Box<[u32]>),
    /// Sorted characters.
    Sorted(Box<[char]>),
}

impl Signature {
    /// Sorted-character signature of `s`, valid for any alphabet.
    ///
    /// # Examples
    /// ```
    /// use hashkit::signature::Signature;
    ///
    /// assert_eq!(Signature::sorted("bca"), Signature::sorted("abc"));
    /// assert_ne!(Signature::sorted("abc"), Signature::sorted("abd"));
    /// ```
    pub fn sorted(s: &str) -> Self {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable_by(|a, b| {
            tick(1);
            a.cmp(b)
        });
        Signature::Sorted(chars.into_boxed_slice())
    }

    /// Builds a count signature from an explicit count vector.
    ///
    /// Fails with [`Error::InvalidArgument`] if `counts` does not have one
    /// entry per letter of `alphabet`.
    pub fn from_counts(alphabet: &Alphabet, counts: &[u32]) -> Result<Self> {
        if counts.len() != alphabet.len() {
            return Err(Error::invalid(format!(
                "count vector has {} entries, alphabet has {} letters",
                counts.len(),
                alphabet.len()
            )));
        }
        Ok(Signature::Counts(counts.into()))
    }

    /// Number of characters of the strings with this signature.
    pub fn char_count(&self) -> usize {
        match self {
            Signature::Counts(c) => c.iter().map(|&x| x as usize).sum(),
            Signature::Sorted(c) => c.len(),
        }
    }
}

/// Computes [`Signature`]s over a fixed [`Alphabet`].
///
/// # Examples
/// ```
/// use hashkit::signature::{Signature, SignatureEngine};
///
/// let engine = SignatureEngine::default();
/// assert_eq!(engine.signature("listen"), engine.signature("silent"));
/// assert!(matches!(engine.signature("abc"), Signature::Counts(_)));
/// // Characters outside the alphabet fall back to the sorted encoding.
/// assert!(matches!(engine.signature("Abc"), Signature::Sorted(_)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEngine {
    alphabet: Alphabet,
}

impl SignatureEngine {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Signature of `s`: counts if every character is in the alphabet,
    /// sorted characters otherwise.
    pub fn signature(&self, s: &str) -> Signature {
        self.counts(s)
            .map(|c| Signature::Counts(c.into_boxed_slice()))
            .unwrap_or_else(|| Signature::sorted(s))
    }

    /// Per-letter counts of `s`, or `None` at the first character outside
    /// the alphabet.
    pub fn counts(&self, s: &str) -> Option<Vec<u32>> {
        let mut counts = vec![0u32; self.alphabet.len()];
        for c in s.chars() {
            tick(1);
            counts[self.alphabet.index_of(c)?] += 1;
        }
        Some(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_sequences::gen_words;

    fn is_permutation(a: &str, b: &str) -> bool {
        let mut x: Vec<char> = a.chars().collect();
        let mut y: Vec<char> = b.chars().collect();
        x.sort_unstable();
        y.sort_unstable();
        x == y
    }

    #[test]
    fn empty_string_is_all_zero_counts() {
        let e = SignatureEngine::default();
        assert_eq!(e.signature(""), Signature::Counts(vec![0; 26].into()));
        assert_eq!(e.signature("").char_count(), 0);
    }

    #[test]
    fn counts_per_letter() {
        let e = SignatureEngine::default();
        let mut expected = vec![0u32; 26];
        expected[0] = 2;
        expected[1] = 1;
        assert_eq!(e.signature("aba"), Signature::Counts(expected.into()));
    }

    #[test]
    fn equal_iff_permutation() {
        let e = SignatureEngine::default();
        let words = gen_words(300, 3, &['a', 'b', 'c']);
        for a in words.iter().take(60) {
            for b in words.iter() {
                assert_eq!(
                    e.signature(a) == e.signature(b),
                    is_permutation(a, b),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn fallback_keeps_iff() {
        let e = SignatureEngine::default();
        assert_eq!(e.signature("héllo"), e.signature("olléh"));
        assert_ne!(e.signature("héllo"), e.signature("hello"));
        assert_eq!(e.signature("Tea"), e.signature("eaT"));
        assert_ne!(e.signature("Tea"), e.signature("tea"));
    }

    #[test]
    fn custom_alphabet() {
        let dna = Alphabet::new("ACGT".chars()).unwrap();
        let e = SignatureEngine::new(dna);
        let sig = e.signature("GATTACA");
        assert_eq!(sig, Signature::Counts(vec![3, 1, 1, 2].into()));
        assert_eq!(sig, e.signature("AAACGTT"));
        assert_eq!(sig.char_count(), 7);
    }

    #[test]
    fn non_contiguous_alphabet_uses_map() {
        let a = Alphabet::new("zyx".chars()).unwrap();
        assert_eq!(a.index_of('z'), Some(0));
        assert_eq!(a.index_of('x'), Some(2));
        assert_eq!(a.index_of('a'), None);
    }

    #[test]
    fn range_lookup_rejects_below_first() {
        let a = Alphabet::new('k'..='m').unwrap();
        assert_eq!(a.index_of('j'), None);
        assert_eq!(a.index_of('n'), None);
        assert_eq!(a.index_of('l'), Some(1));
    }

    #[test]
    fn invalid_alphabets() {
        assert!(matches!(
            Alphabet::new(std::iter::empty()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Alphabet::new("aa".chars()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn engine_config_round_trip() {
        let engine = SignatureEngine::new(Alphabet::new("xyz".chars()).unwrap());
        let json = serde_json::to_string(&engine).unwrap();
        assert_eq!(json, r#"{"alphabet":["x","y","z"]}"#);

        let back: SignatureEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, engine);
        assert_eq!(back.alphabet().chars(), &['x', 'y', 'z']);
        assert_eq!(back.signature("zyx"), engine.signature("xyz"));

        let dna: Alphabet = serde_json::from_str(r#"["T","G","C","A"]"#).unwrap();
        assert_eq!(dna.index_of('C'), Some(2));
    }

    #[test]
    fn deserialize_rejects_invalid_alphabets() {
        assert!(serde_json::from_str::<Alphabet>(r#"["a","a"]"#).is_err());
        assert!(serde_json::from_str::<Alphabet>("[]").is_err());
        let err = serde_json::from_str::<SignatureEngine>(r#"{"alphabet":["q","r","q"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("repeats character"), "{err}");
    }

    #[test]
    fn from_counts_checks_length() {
        let a = Alphabet::lowercase();
        assert!(Signature::from_counts(&a, &[0; 26]).is_ok());
        assert!(matches!(
            Signature::from_counts(&a, &[0; 25]),
            Err(Error::InvalidArgument(_))
        ));
        let e = SignatureEngine::default();
        let counts = e.counts("cab").unwrap();
        assert_eq!(
            Signature::from_counts(&a, &counts).unwrap(),
            e.signature("abc")
        );
    }
}
