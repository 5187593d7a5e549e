use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static OPS: Cell<u64> = const { Cell::new(0) };
}

/// Records `n` elementary operations (a comparison, a hash probe, a bucket
/// visit) on the calling thread's counter.
///
/// Strategies call this from their inner loops so that the
/// [`harness`](crate::harness) can compare them by work done rather than by
/// wall-clock time.
#[inline(always)]
pub fn tick(n: u64) {
    OPS.with(|c| c.set(c.get().wrapping_add(n)));
}

#[inline(always)]
fn ops_now() -> u64 {
    OPS.with(Cell::get)
}

/// Counts the operations ticked by `f` on the current thread.
///
/// # Examples
/// ```
/// use hashkit::utils::{count_ops, tick};
///
/// let (value, ops) = count_ops(|| {
///     tick(3);
///     42
/// });
/// assert_eq!(value, 42);
/// assert_eq!(ops, 3);
/// ```
pub fn count_ops<R>(f: impl FnOnce() -> R) -> (R, u64) {
    let start = ops_now();
    let r = f();
    (r, ops_now().wrapping_sub(start))
}

/// Operation-count analogue of [`TimingQueries`]: collects the number of
/// ticked operations over several runs.
pub struct OpCounter {
    counts: Vec<u64>,
    base: u64,
}

impl OpCounter {
    pub fn new(n_runs: usize) -> Self {
        Self {
            counts: Vec::with_capacity(n_runs),
            base: ops_now(),
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.base = ops_now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.counts.push(ops_now().wrapping_sub(self.base));
    }

    /// Returns minimum, maximum, average operation count per run.
    /// All zero if nothing was recorded.
    pub fn get(&self) -> (u64, u64, u64) {
        if self.counts.is_empty() {
            return (0, 0, 0);
        }
        let min = *self.counts.iter().min().unwrap_or(&0);
        let max = *self.counts.iter().max().unwrap_or(&0);
        let avg = self.counts.iter().sum::<u64>() / self.counts.len() as u64;
        (min, max, avg)
    }
}

pub struct TimingQueries {
    timings: Vec<u128>,
    time: Instant,
    n_queries: usize,
}

impl TimingQueries {
    pub fn new(n_runs: usize, n_queries: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_queries: n_queries.max(1),
        }
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.time = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.timings.push(self.time.elapsed().as_nanos());
    }

    /// Returns minimum, maximum, average query time per query in nanosecs.
    pub fn get(&self) -> (u128, u128, u128) {
        if self.timings.is_empty() {
            return (0, 0, 0);
        }
        let min = *self.timings.iter().min().unwrap_or(&0) / (self.n_queries as u128);
        let max = *self.timings.iter().max().unwrap_or(&0) / (self.n_queries as u128);
        let avg =
            self.timings.iter().sum::<u128>() / ((self.timings.len() * self.n_queries) as u128);
        (min, max, avg)
    }
}

/// Returns the type name of its argument.
pub fn type_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_per_closure() {
        tick(100);
        let (_, ops) = count_ops(|| tick(7));
        assert_eq!(ops, 7);
    }

    #[test]
    fn op_counter_min_max_avg() {
        let mut c = OpCounter::new(3);
        for n in [2, 4, 6] {
            c.start();
            tick(n);
            c.stop();
        }
        assert_eq!(c.get(), (2, 6, 4));
    }

    #[test]
    fn empty_counters_report_zero() {
        assert_eq!(OpCounter::new(1).get(), (0, 0, 0));
        assert_eq!(TimingQueries::new(1, 1).get(), (0, 0, 0));
    }

    #[test]
    fn counts_are_thread_local() {
        let (_, ops) = count_ops(|| {
            std::thread::spawn(|| tick(1000)).join().unwrap();
            tick(1);
        });
        assert_eq!(ops, 1);
    }
}
