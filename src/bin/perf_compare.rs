use hashkit::anagram::{AlphabetCheck, HashMapCheck, SortingCheck};
use hashkit::duplicate::{self, HashSetSeen, SortAdjacent};
use hashkit::gen_sequences::{
    gen_anagram_words, gen_pair_sum_instance, gen_permutation, gen_queries,
};
use hashkit::grouping::{CountKeyGrouping, PairwiseGrouping, SortedKeyGrouping};
use hashkit::harness::{
    Report, ScalingReport, compare_anagram, compare_duplicate, compare_grouping,
    compare_pair_sum, compare_top_k, ordering_violations, scaling,
};
use hashkit::pair_sum::{ComplementLookup, NestedScan, SortTwoPointers};
use hashkit::top_k::{BucketScan, FullSort, MinHeap};
use hashkit::{AnagramCheck, ContainsDuplicate, FrequencyTable, GroupAnagrams, PairSum, TopK};

use clap::Parser;
use log::error;

const DEFAULT_MIN_LOGN: u32 = 8;
const DEFAULT_MAX_LOGN: u32 = 12;
const TOLERANCE: f64 = 0.25;
const K: usize = 10;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_MIN_LOGN, value_parser = clap::value_parser!(u32).range(2..=30))]
    min_logn: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_LOGN, value_parser = clap::value_parser!(u32).range(2..=30))]
    max_logn: u32,
    #[arg(short, long)]
    verbose: bool,
}

fn print_report<O>(report: &Report<O>) {
    for r in &report.runs {
        println!(
            "COMPARE: [problem: {}, strategy: {}, n: {}, declared: {}, ops: {}]",
            report.problem, r.strategy, report.input_len, r.complexity, r.ops
        );
    }
    if let Some(best) = report.cheapest() {
        println!(
            "CHEAPEST: [problem: {}, n: {}, strategy: {}, ops: {:?}]",
            report.problem,
            report.input_len,
            best.strategy,
            report.ops(best.strategy)
        );
    }
}

fn print_scaling(reports: &[ScalingReport]) -> bool {
    for r in reports {
        println!(
            "SCALING: [strategy: {}, declared: {}, exponent: {:.2}, within: {}, samples: {:?}]",
            r.strategy,
            r.declared,
            r.exponent,
            r.is_within(TOLERANCE),
            r.samples
        );
    }
    let violations = ordering_violations(reports);
    for (a, b) in &violations {
        error!("{a} is declared cheaper than {b} but grew at least as fast");
    }
    violations.is_empty() && reports.iter().all(|r| r.is_within(TOLERANCE))
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let sizes: Vec<usize> = (args.min_logn..=args.max_logn).map(|l| 1 << l).collect();
    let mut ok = true;

    println!("=== pair sum ===");
    let pair: [&dyn PairSum<i64>; 3] = [&NestedScan, &SortTwoPointers, &ComplementLookup];
    let instances: Vec<(usize, (Vec<i64>, i64))> = sizes
        .iter()
        .map(|&n| {
            let (nums, target, _) = gen_pair_sum_instance(n);
            (n, (nums, target))
        })
        .collect();
    for (_, (nums, target)) in &instances {
        match compare_pair_sum(&pair, nums, *target) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!("{e}");
                ok = false;
            }
        }
    }
    // No pair below zero: every strategy does its full amount of work.
    let reports: Vec<ScalingReport> = pair
        .iter()
        .map(|s| {
            scaling(*s, &instances, |(nums, _)| {
                s.find_pair(nums, -1);
            })
        })
        .collect();
    ok &= print_scaling(&reports);

    println!("\n=== valid anagram ===");
    let checks: [&dyn AnagramCheck; 3] =
        [&SortingCheck, &HashMapCheck, &AlphabetCheck::default()];
    let instances: Vec<(usize, (String, String))> = sizes
        .iter()
        .map(|&n| {
            let w = gen_anagram_words(2, 1, n);
            (n, (w[0].clone(), w[1].clone()))
        })
        .collect();
    for (_, (s, t)) in &instances {
        match compare_anagram(&checks, s, t) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!("{e}");
                ok = false;
            }
        }
    }
    let reports: Vec<ScalingReport> = checks
        .iter()
        .map(|c| {
            scaling(*c, &instances, |(s, t)| {
                c.is_anagram(s, t);
            })
        })
        .collect();
    ok &= print_scaling(&reports);

    println!("\n=== contains duplicate ===");
    let dups: [&dyn ContainsDuplicate<usize>; 3] =
        [&duplicate::NestedScan, &SortAdjacent, &HashSetSeen];
    // Values are distinct, so no strategy stops early.
    let instances: Vec<(usize, Vec<usize>)> =
        sizes.iter().map(|&n| (n, gen_permutation(n))).collect();
    for (_, nums) in &instances {
        match compare_duplicate(&dups, nums) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!("{e}");
                ok = false;
            }
        }
    }
    let reports: Vec<ScalingReport> = dups
        .iter()
        .map(|d| {
            scaling(*d, &instances, |nums| {
                d.contains_duplicate(nums);
            })
        })
        .collect();
    ok &= print_scaling(&reports);

    println!("\n=== group anagrams ===");
    let groupers: [&dyn GroupAnagrams; 3] =
        [&PairwiseGrouping, &SortedKeyGrouping, &CountKeyGrouping::default()];
    let instances: Vec<(usize, Vec<String>)> = sizes
        .iter()
        .map(|&n| (n, gen_anagram_words(n, n / 8 + 1, 6)))
        .collect();
    for (_, words) in &instances {
        let input: Vec<&str> = words.iter().map(String::as_str).collect();
        match compare_grouping(&groupers, &input) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!("{e}");
                ok = false;
            }
        }
    }
    let reports: Vec<ScalingReport> = groupers
        .iter()
        .map(|g| {
            scaling(*g, &instances, |words| {
                let input: Vec<&str> = words.iter().map(String::as_str).collect();
                g.group(&input);
            })
        })
        .collect();
    ok &= print_scaling(&reports);

    println!("\n=== top-k frequent ===");
    let selectors: [&dyn TopK<usize>; 3] = [&FullSort, &MinHeap, &BucketScan];
    // Small inputs may hold fewer than K distinct values.
    let instances: Vec<(usize, (Vec<usize>, usize))> = sizes
        .iter()
        .map(|&n| {
            let nums = gen_queries(n, (n / 4).max(1));
            let k = K.min(FrequencyTable::build(&nums).distinct());
            (n, (nums, k))
        })
        .collect();
    for (_, (nums, k)) in &instances {
        match compare_top_k(&selectors, nums, *k) {
            Ok(report) => print_report(&report),
            Err(e) => {
                error!("{e}");
                ok = false;
            }
        }
    }
    let reports: Vec<ScalingReport> = selectors
        .iter()
        .map(|s| {
            scaling(*s, &instances, |(nums, k)| {
                let _ = s.top_k(nums, *k);
            })
        })
        .collect();
    ok &= print_scaling(&reports);

    if !ok {
        std::process::exit(1);
    }
}
