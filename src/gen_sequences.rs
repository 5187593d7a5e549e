//! Random problem instances for tests and the `perf_*` binaries.
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates a random vector of `n` values in [0, `range_size`).
///
/// ## Examples
/// ```
/// use hashkit::gen_sequences;
///
/// let queries = gen_sequences::gen_queries(5, 10);
/// assert_eq!(queries.len(), 5);
/// assert!(queries.iter().all(|&q| q < 10));
/// ```
pub fn gen_queries(n: usize, range_size: usize) -> Vec<usize> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(0..range_size)).collect()
}

/// Generates a pair-sum instance of length `n >= 2` with exactly one
/// qualifying pair. Returns the values, the target and the expected pair.
///
/// All values but one are even and distinct; the odd value `1` and the
/// largest even value are the only two that reach the odd target.
///
/// ## Examples
/// ```
/// use hashkit::gen_sequences::gen_pair_sum_instance;
///
/// let (nums, target, (i, j)) = gen_pair_sum_instance(8);
/// assert!(i < j);
/// assert_eq!(nums[i] + nums[j], target);
/// ```
pub fn gen_pair_sum_instance(n: usize) -> (Vec<i64>, i64, (usize, usize)) {
    assert!(n >= 2, "a pair needs at least two values");
    let mut rng = rand::rng();

    let u = 4 * n as i64;
    let mut halves: Vec<i64> = (0..u).collect();
    halves.shuffle(&mut rng);
    halves.truncate(n - 2);

    let mut nums: Vec<i64> = halves.iter().map(|h| 2 * h).collect();
    let big = 2 * u;
    let target = big + 1;

    let i = rng.random_range(0..n - 1);
    let j = rng.random_range(i + 1..n);
    let (a, b) = if rng.random_bool(0.5) { (1, big) } else { (big, 1) };
    nums.insert(i, a);
    nums.insert(j, b);

    (nums, target, (i, j))
}

/// Generates a random permutation of `0..n`: distinct values in no
/// particular order.
pub fn gen_permutation(n: usize) -> Vec<usize> {
    let mut v: Vec<usize> = (0..n).collect();
    v.shuffle(&mut rand::rng());
    v
}

/// Generates `n` random words of length `len` over `alphabet`.
pub fn gen_words(n: usize, len: usize, alphabet: &[char]) -> Vec<String> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect()
        })
        .collect()
}

/// Generates `n` words drawn from `n_classes` anagram classes: every word is
/// a random permutation of one of `n_classes` random base words.
///
/// ## Examples
/// ```
/// use hashkit::gen_sequences::gen_anagram_words;
///
/// let words = gen_anagram_words(20, 3, 5);
/// assert_eq!(words.len(), 20);
/// assert!(words.iter().all(|w| w.len() == 5));
/// ```
pub fn gen_anagram_words(n: usize, n_classes: usize, len: usize) -> Vec<String> {
    let alphabet: Vec<char> = ('a'..='z').collect();
    let bases = gen_words(n_classes.max(1), len, &alphabet);
    let mut rng = rand::rng();

    (0..n)
        .map(|_| {
            let mut chars: Vec<char> = bases[rng.random_range(0..bases.len())].chars().collect();
            chars.shuffle(&mut rng);
            chars.into_iter().collect()
        })
        .collect()
}

/// Generates a shuffled sequence of length at least `n` over `distinct`
/// values where value `v` occurs roughly `n / (v + 1)` times, so frequencies
/// are skewed and mostly unique at the top.
pub fn gen_skewed_sequence(n: usize, distinct: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    let mut v: Vec<u32> = Vec::with_capacity(n + distinct);
    for value in 0..distinct {
        let reps = (n / (value + 1)).max(1);
        v.extend(std::iter::repeat_n(value as u32, reps));
    }
    v.shuffle(&mut rng);
    v
}
