use std::time::Instant;

/// Collects the wall-clock time of repeated runs over `n_elements` elements.
pub struct TimingQueries {
    timings: Vec<u128>,
    time: Instant,
    n_elements: usize,
}

impl TimingQueries {
    pub fn new(n_runs: usize, n_elements: usize) -> Self {
        Self {
            timings: Vec::with_capacity(n_runs),
            time: Instant::now(),
            n_elements: n_elements.max(1),
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

    /// Returns minimum, maximum, average time per element in nanosecs.
    /// All zeros if no run has been recorded.
    pub fn get(&self) -> (u128, u128, u128) {
        if self.timings.is_empty() {
            return (0, 0, 0);
        }
        let n = self.n_elements as u128;
        let min = self.timings.iter().min().copied().unwrap_or_default() / n;
        let max = self.timings.iter().max().copied().unwrap_or_default() / n;
        let avg = self.timings.iter().sum::<u128>() / (self.timings.len() as u128 * n);
        (min, max, avg)
    }

    /// Returns minimum, maximum, average time per element in nanosecs.
    pub fn get_float(&self) -> (f64, f64, f64) {
        if self.timings.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let n = self.n_elements as f64;
        let min = self.timings.iter().min().copied().unwrap_or_default() as f64 / n;
        let max = self.timings.iter().max().copied().unwrap_or_default() as f64 / n;
        let avg = self.timings.iter().sum::<u128>() as f64 / (self.timings.len() as f64 * n);
        (min, max, avg)
    }
}

/// Returns the type name of its argument.
pub fn type_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Initializes a `tracing` subscriber writing to stderr.
///
/// Respects the `RUST_LOG` environment variable for filtering.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_without_runs() {
        let t = TimingQueries::new(3, 10);
        assert_eq!(t.get(), (0, 0, 0));
        assert_eq!(t.get_float(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_timing_orders_min_max() {
        let mut t = TimingQueries::new(3, 1);
        for _ in 0..3 {
            t.start();
            std::hint::black_box((0..1000).sum::<u64>());
            t.stop();
        }
        let (min, max, avg) = t.get();
        assert!(min <= avg && avg <= max);
    }

    #[test]
    fn test_type_of() {
        assert!(type_of(&crate::MajorityFinder).ends_with("MajorityFinder"));
    }
}
