//! Arrays and hashing problems, each solved by several interchangeable
//! strategies with declared asymptotic costs, plus a harness that runs the
//! strategies side by side and checks that they agree.
//!
//! | Problem            | Trait                                   | Linear-time strategy                  |
//! |--------------------|-----------------------------------------|---------------------------------------|
//! | pair sum           | [`PairSum`]                             | [`pair_sum::ComplementLookup`]        |
//! | valid anagram      | [`AnagramCheck`]                        | [`anagram::AlphabetCheck`]            |
//! | contains duplicate | [`ContainsDuplicate`]                   | [`duplicate::HashSetSeen`]            |
//! | group anagrams     | [`GroupAnagrams`]                       | [`grouping::CountKeyGrouping`]        |
//! | top-k frequent     | [`TopK`]                                | [`top_k::BucketScan`]                 |
//!
//! All strategies are pure functions of their input: they never modify the
//! caller's data and keep no state between calls.

pub mod error;
pub use error::{Error, Result};

pub mod strategy;
pub use strategy::{Complexity, Cost, Strategy};

pub mod frequency;
pub use frequency::FrequencyTable;

pub mod signature;
pub use signature::{Alphabet, Signature, SignatureEngine};

pub mod pair_sum;
pub use pair_sum::{PairSum, find_pair};

pub mod anagram;
pub use anagram::{AnagramCheck, is_anagram};

pub mod duplicate;
pub use duplicate::{ContainsDuplicate, contains_duplicate};

pub mod grouping;
pub use grouping::{GroupAnagrams, group_anagrams};

pub mod top_k;
pub use top_k::{TopK, top_k_frequent};

pub mod harness;

pub mod gen_sequences;

pub mod algorithms;

pub mod utils;
