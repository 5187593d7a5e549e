use hashkit::gen_sequences::{gen_anagram_words, gen_queries};
use hashkit::top_k::{BucketScan, FullSort, MinHeap};
use hashkit::utils::{TimingQueries, type_of};
use hashkit::{SignatureEngine, Strategy, TopK};

use clap::Parser;
use log::info;
use mem_dbg::*;

const N_RUNS: usize = 5;
const DEFAULT_K: usize = 10;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    n: usize,
    /// Number of distinct values; defaults to n / 4.
    #[arg(short, long)]
    distinct: Option<usize>,
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,
    #[arg(short, long)]
    verbose: bool,
}

fn test_top_k<S>(s: &S, nums: &[u64], k: usize)
where
    S: TopK<u64>,
{
    let mut t = TimingQueries::new(N_RUNS, nums.len());
    let mut r = 0u64;

    for _ in 0..N_RUNS {
        t.start();
        match s.top_k(nums, k) {
            Ok(top) => r += top.iter().sum::<u64>(),
            Err(e) => {
                eprintln!("{}: {e}", s.name());
                return;
            }
        }
        t.stop();
    }

    let (t_min, t_max, t_avg) = t.get();
    println!("TOP_K: [ds_name: {}, strategy: {}, n: {}, k: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, num_runs: {}]", type_of(s), s.name(), nums.len(), k, t_min, t_max, t_avg, N_RUNS);

    println!("IGNORE: {r}");
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let n = args.n;
    let distinct = args.distinct.unwrap_or(n / 4).max(1);
    let nums: Vec<u64> = gen_queries(n, distinct).into_iter().map(|x| x as u64).collect();
    info!("generated {n} values over {distinct} distinct");
    println!("n = {}, distinct = {}, k = {}", n, distinct, args.k);

    test_top_k(&FullSort, &nums, args.k);
    test_top_k(&MinHeap, &nums, args.k);
    test_top_k(&BucketScan, &nums, args.k);

    println!();
    let engine = SignatureEngine::default();
    info!("signature alphabet: {:?}", engine.alphabet().chars());
    for word in gen_anagram_words(2, 1, 16) {
        let sig = engine.signature(&word);
        println!("signature of {word}:");
        let _ = sig.mem_dbg(DbgFlags::empty());
    }
}
