//! Strategy comparator and operation-count benchmark harness.
//!
//! The `compare_*` functions run every given strategy on the same input,
//! count the elementary operations each one performs (see
//! [`tick`](crate::utils::tick)), and check that all outputs agree under the
//! problem's equivalence:
//!
//! | Problem            | Outputs must be                                   |
//! |--------------------|---------------------------------------------------|
//! | pair sum           | identical                                         |
//! | valid anagram      | identical                                         |
//! | contains duplicate | identical                                         |
//! | group anagrams     | equal as sets of sets                             |
//! | top-k frequent     | `k` distinct elements with the true top-k counts  |
//!
//! The reference output is the one returned by a strict majority of the
//! strategies (the first strategy's when there is none), except for top-k,
//! whose expected frequency profile is computed from the
//! [`FrequencyTable`]. Any strategy that disagrees turns the whole
//! comparison into an [`Error::StrategyDisagreement`] carrying a
//! [`Mismatch`].
//!
//! [`scaling`] and [`growth_exponent`] measure how operation counts grow
//! with the input size, to check each strategy against its declared
//! [`Cost`].
//!
//! # Examples
//! ```
//! use hashkit::harness::compare_pair_sum;
//! use hashkit::pair_sum::{ComplementLookup, NestedScan, PairSum, SortTwoPointers};
//!
//! let strategies: [&dyn PairSum<i32>; 3] = [&NestedScan, &SortTwoPointers, &ComplementLookup];
//! let report = compare_pair_sum(&strategies, &[3, 4, 5, 6], 7).unwrap();
//! assert_eq!(report.runs.len(), 3);
//! assert!(report.runs.iter().all(|r| r.output == Some((0, 1))));
//! ```

use std::fmt::{self, Debug};
use std::hash::Hash;

use log::{debug, warn};
use num::PrimInt;
use serde::{Deserialize, Serialize};

use crate::algorithms::majority;
use crate::anagram::AnagramCheck;
use crate::duplicate::ContainsDuplicate;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::grouping::GroupAnagrams;
use crate::pair_sum::PairSum;
use crate::strategy::{Complexity, Cost, Strategy};
use crate::top_k::{TopK, check_k};
use crate::utils::count_ops;

/// Maximum number of input items reproduced in a [`Mismatch`].
const MAX_SHOWN_ITEMS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    PairSum,
    ValidAnagram,
    ContainsDuplicate,
    GroupAnagrams,
    TopKFrequent,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Problem::PairSum => "pair sum",
            Problem::ValidAnagram => "valid anagram",
            Problem::ContainsDuplicate => "contains duplicate",
            Problem::GroupAnagrams => "group anagrams",
            Problem::TopKFrequent => "top-k frequent",
        };
        f.write_str(s)
    }
}

/// One strategy's execution: its output and the operations it took.
#[derive(Clone, Debug, Serialize)]
pub struct Run<O> {
    pub strategy: &'static str,
    pub complexity: Complexity,
    pub ops: u64,
    pub output: O,
}

impl<O> Run<O> {
    fn map_output<P>(self, f: impl FnOnce(O) -> P) -> Run<P> {
        Run {
            strategy: self.strategy,
            complexity: self.complexity,
            ops: self.ops,
            output: f(self.output),
        }
    }
}

/// Result of a successful comparison: every strategy agreed.
#[derive(Clone, Debug, Serialize)]
pub struct Report<O> {
    pub problem: Problem,
    pub input_len: usize,
    pub runs: Vec<Run<O>>,
}

impl<O> Report<O> {
    /// Operation count of the named strategy.
    pub fn ops(&self, strategy: &str) -> Option<u64> {
        self.runs
            .iter()
            .find(|r| r.strategy == strategy)
            .map(|r| r.ops)
    }

    /// The run with the fewest operations.
    pub fn cheapest(&self) -> Option<&Run<O>> {
        self.runs.iter().min_by_key(|r| r.ops)
    }
}

/// What one strategy returned in a failed comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub strategy: &'static str,
    pub actual: String,
    pub agrees: bool,
}

/// Detailed report of strategies that disagree on the same input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub problem: Problem,
    pub input: String,
    pub expected: String,
    pub outcomes: Vec<Outcome>,
}

impl Mismatch {
    /// Names of the strategies whose output differs from the expected one.
    pub fn dissenters(&self) -> Vec<&'static str> {
        self.outcomes
            .iter()
            .filter(|o| !o.agrees)
            .map(|o| o.strategy)
            .collect()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: expected {}",
            self.problem, self.input, self.expected
        )?;
        for o in self.outcomes.iter().filter(|o| !o.agrees) {
            write!(f, "; {} returned {}", o.strategy, o.actual)?;
        }
        Ok(())
    }
}

/// Debug rendering of an input slice, cut after [`MAX_SHOWN_ITEMS`] items.
fn summarize<T: Debug>(input: &[T]) -> String {
    if input.len() <= MAX_SHOWN_ITEMS {
        format!("{input:?}")
    } else {
        format!(
            "{:?} ... ({} items)",
            &input[..MAX_SHOWN_ITEMS],
            input.len()
        )
    }
}

fn run<S, O>(problem: Problem, strategy: &S, f: impl FnOnce() -> O) -> Run<O>
where
    S: Strategy + ?Sized,
{
    let (output, ops) = count_ops(f);
    debug!("{problem}: {} took {ops} ops", strategy.name());
    Run {
        strategy: strategy.name(),
        complexity: strategy.complexity(),
        ops,
        output,
    }
}

/// Checks that every run normalises to the expected value. With no
/// explicit `expected`, the majority of the normalised outputs (or the first
/// one) is taken.
fn agree<O, N>(
    problem: Problem,
    input: impl FnOnce() -> String,
    input_len: usize,
    runs: Vec<Run<O>>,
    expected: Option<N>,
    normalize: impl Fn(&O) -> N,
) -> Result<Report<O>>
where
    N: Eq + Debug,
{
    let normalized: Vec<N> = runs.iter().map(|r| normalize(&r.output)).collect();
    let reference = expected
        .as_ref()
        .or_else(|| majority(&normalized).or(normalized.first()));

    let Some(reference) = reference else {
        return Ok(Report {
            problem,
            input_len,
            runs,
        });
    };

    if normalized.iter().all(|n| n == reference) {
        return Ok(Report {
            problem,
            input_len,
            runs,
        });
    }

    let mismatch = Mismatch {
        problem,
        input: input(),
        expected: format!("{reference:?}"),
        outcomes: runs
            .iter()
            .zip(normalized.iter())
            .map(|(r, n)| Outcome {
                strategy: r.strategy,
                actual: format!("{n:?}"),
                agrees: n == reference,
            })
            .collect(),
    };
    warn!("{mismatch}");
    Err(Error::StrategyDisagreement(Box::new(mismatch)))
}

/// Runs pair-sum strategies; outputs must be identical.
pub fn compare_pair_sum<T>(
    strategies: &[&dyn PairSum<T>],
    nums: &[T],
    target: T,
) -> Result<Report<Option<(usize, usize)>>>
where
    T: PrimInt + Debug,
{
    let runs = strategies
        .iter()
        .map(|s| run(Problem::PairSum, *s, || s.find_pair(nums, target)))
        .collect();
    agree(
        Problem::PairSum,
        || format!("{} with target {target:?}", summarize(nums)),
        nums.len(),
        runs,
        None,
        |o| *o,
    )
}

/// Runs anagram checks; outputs must be identical.
pub fn compare_anagram(
    strategies: &[&dyn AnagramCheck],
    s: &str,
    t: &str,
) -> Result<Report<bool>> {
    let runs = strategies
        .iter()
        .map(|st| run(Problem::ValidAnagram, *st, || st.is_anagram(s, t)))
        .collect();
    agree(
        Problem::ValidAnagram,
        || format!("{s:?} and {t:?}"),
        s.len() + t.len(),
        runs,
        None,
        |o| *o,
    )
}

/// Runs duplicate detectors; outputs must be identical.
pub fn compare_duplicate<T: Debug>(
    strategies: &[&dyn ContainsDuplicate<T>],
    nums: &[T],
) -> Result<Report<bool>> {
    let runs = strategies
        .iter()
        .map(|s| run(Problem::ContainsDuplicate, *s, || s.contains_duplicate(nums)))
        .collect();
    agree(
        Problem::ContainsDuplicate,
        || summarize(nums),
        nums.len(),
        runs,
        None,
        |o| *o,
    )
}

/// Runs grouping strategies; outputs must be equal as sets of sets
/// (multisets within a group, since duplicates are kept).
pub fn compare_grouping<'a>(
    strategies: &[&dyn GroupAnagrams],
    inputs: &[&'a str],
) -> Result<Report<Vec<Vec<&'a str>>>> {
    let runs = strategies
        .iter()
        .map(|s| run(Problem::GroupAnagrams, *s, || s.group(inputs)))
        .collect();
    agree(
        Problem::GroupAnagrams,
        || summarize(inputs),
        inputs.len(),
        runs,
        None,
        |groups: &Vec<Vec<&'a str>>| {
            let mut g: Vec<Vec<&str>> = groups
                .iter()
                .map(|group| {
                    let mut group = group.clone();
                    group.sort_unstable();
                    group
                })
                .collect();
            g.sort_unstable();
            g
        },
    )
}

/// Runs top-k strategies. Each output must hold `k` distinct elements of the
/// input whose counts, sorted, equal the `k` largest counts of the input.
/// Which of several tied elements is chosen is not compared.
///
/// Fails with [`Error::InvalidArgument`] before running anything if `k` is
/// outside `[1, distinct]`.
pub fn compare_top_k<T>(
    strategies: &[&dyn TopK<T>],
    nums: &[T],
    k: usize,
) -> Result<Report<Vec<T>>>
where
    T: Eq + Hash + Clone + Debug,
{
    let table = FrequencyTable::build(nums);
    check_k(k, table.distinct())?;

    let mut counts: Vec<usize> = table.iter().map(|(_, &c)| c).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.truncate(k);

    let runs: Vec<Run<std::result::Result<Vec<T>, String>>> = strategies
        .iter()
        .map(|s| {
            run(Problem::TopKFrequent, *s, || {
                s.top_k(nums, k).map_err(|e| e.to_string())
            })
        })
        .collect();

    let profile = |out: &std::result::Result<Vec<T>, String>| -> std::result::Result<Vec<usize>, String> {
        let top = out.as_ref().map_err(Clone::clone)?;
        let chosen = FrequencyTable::build(top);
        if top.len() != k || chosen.distinct() != k {
            return Err(format!("{} items, {} distinct", top.len(), chosen.distinct()));
        }
        let mut p: Vec<usize> = top.iter().map(|x| table.get(x)).collect();
        p.sort_unstable_by(|a, b| b.cmp(a));
        Ok(p)
    };

    let report = agree(
        Problem::TopKFrequent,
        || format!("{} with k = {k}", summarize(nums)),
        nums.len(),
        runs,
        Some(Ok(counts)),
        profile,
    )?;

    Ok(Report {
        problem: report.problem,
        input_len: report.input_len,
        runs: report
            .runs
            .into_iter()
            .map(|r| r.map_output(|o| o.unwrap_or_default()))
            .collect(),
    })
}

/// Operation counts of one strategy over growing input sizes.
#[derive(Clone, Debug, Serialize)]
pub struct ScalingReport {
    pub strategy: &'static str,
    pub declared: Cost,
    /// `(input size, operations)` pairs.
    pub samples: Vec<(usize, u64)>,
    /// Fitted exponent `e` of `ops ≈ c · n^e`.
    pub exponent: f64,
}

impl ScalingReport {
    /// `true` if the measured exponent does not exceed the declared one by
    /// more than `tolerance`.
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.exponent <= self.declared.exponent() + tolerance
    }
}

/// Measures the operations of `run` on each `(size, instance)` pair.
/// Instances are built by the caller so that generating them is not counted.
pub fn scaling<S, I>(strategy: &S, instances: &[(usize, I)], mut run: impl FnMut(&I)) -> ScalingReport
where
    S: Strategy + ?Sized,
{
    let samples: Vec<(usize, u64)> = instances
        .iter()
        .map(|(n, instance)| (*n, count_ops(|| run(instance)).1))
        .collect();
    let exponent = growth_exponent(&samples);
    debug!("{}: fitted exponent {exponent:.2}", strategy.name());
    ScalingReport {
        strategy: strategy.name(),
        declared: strategy.complexity().time,
        samples,
        exponent,
    }
}

/// Least-squares slope of `ln ops` against `ln n`. Samples with a zero size
/// or zero operations are ignored; fewer than two usable samples give `0.0`.
///
/// # Examples
/// ```
/// use hashkit::harness::growth_exponent;
///
/// let quadratic = [(10, 100), (100, 10_000), (1000, 1_000_000)];
/// assert!((growth_exponent(&quadratic) - 2.0).abs() < 1e-9);
/// ```
pub fn growth_exponent(samples: &[(usize, u64)]) -> f64 {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .filter(|&&(n, ops)| n > 0 && ops > 0)
        .map(|&(n, ops)| ((n as f64).ln(), (ops as f64).ln()))
        .collect();
    if points.len() < 2 {
        return 0.0;
    }

    let m = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / m;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / m;
    let cov: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let var: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    if var == 0.0 { 0.0 } else { cov / var }
}

/// Pairs `(cheaper, costlier)` of strategies whose measured exponents
/// contradict their declared costs. Only pairs whose declared exponents
/// differ by at least half a unit are compared, since logarithmic factors
/// are not separable from constants on small inputs.
pub fn ordering_violations(reports: &[ScalingReport]) -> Vec<(&'static str, &'static str)> {
    let mut violations = Vec::new();
    for a in reports {
        for b in reports {
            let gap = b.declared.exponent() - a.declared.exponent();
            if gap >= 0.5 && a.exponent >= b.exponent {
                violations.push((a.strategy, b.strategy));
            }
        }
    }
    violations
}
