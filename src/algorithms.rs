//! Majority element identification over slices whose elements only support equality.
//!
//! The **majority element** of a slice of length `n` is a value whose equivalence
//! class occupies strictly more than `n / 2` positions. Elements are required to
//! implement [`PartialEq`] only: no ordering and no hashing is assumed, so the usual
//! sort-based or hash-based shortcuts are not available.
//!
//! Two finders are provided:
//! - [`MajorityFinder`] keeps a completion marker per position and never starts
//!   a scan from a position already proven useless. It performs fewer than `5n`
//!   comparisons, `3n` marker writes and `13n` additions.
//! - [`MajorityFinderNaive`] runs the same scans without the marker. It makes
//!   the same decisions but degrades to Θ(n²) comparisons on inputs such as
//!   [`gen_adversarial_sequence`](crate::gen_sequences::gen_adversarial_sequence).
//!   It exists only as a baseline for benchmarks and tests.
//!
//! Both report an [`OpCounts`] alongside the result. Additions follow the
//! accounting of the scan loops: every counter increment, every circular cursor
//! advance (the wrap-around modulus counts as one addition) and every outer
//! loop step.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::MajorityError;
use crate::FindMajority;

/// Operations performed by a single call to a finder.
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug, Serialize)]
pub struct OpCounts {
    /// Element comparisons, including the final wrap-around check.
    pub comparisons: u64,
    /// Additions, counting each modulus on the circular cursor as one.
    pub additions: u64,
    /// Writes to the completion marker. Always zero for [`MajorityFinderNaive`].
    pub marker_writes: u64,
}

/// The result of a finder: the majority element, if any, and the work done.
#[derive(PartialEq, Debug, Serialize)]
pub struct Outcome<'a, T> {
    majority: Option<&'a T>,
    counts: OpCounts,
}

impl<T> Clone for Outcome<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Outcome<'_, T> {}

impl<'a, T> Outcome<'a, T> {
    fn new(majority: Option<&'a T>, counts: OpCounts) -> Self {
        Self { majority, counts }
    }

    /// Returns the majority element, or [`None`] if no equivalence class
    /// takes more than half of the sequence.
    #[inline]
    pub fn majority(&self) -> Option<&'a T> {
        self.majority
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.majority.is_some()
    }

    #[inline]
    pub fn counts(&self) -> OpCounts {
        self.counts
    }

    /// Returns `(majority, comparisons, additions)`.
    ///
    /// # Examples
    /// ```
    /// use majority::{FindMajority, MajorityFinder};
    ///
    /// let (m, comparisons, additions) = MajorityFinder.find(&[1, 2, 1]).unwrap().into_triple();
    /// assert_eq!(m, Some(&1));
    /// assert_eq!((comparisons, additions), (5, 20));
    /// ```
    pub fn into_triple(self) -> (Option<&'a T>, u64, u64) {
        (self.majority, self.counts.comparisons, self.counts.additions)
    }
}

/// Linear-time majority finder.
///
/// Every position starts a circular scan unless it has been marked complete.
/// A position is marked when it starts a scan and whenever it matches the
/// element a scan started from. A scan ends either by wrapping around to its
/// start, in which case the start element is the majority, or as soon as the
/// non-matching elements seen are at least as many as the matching ones.
///
/// # Examples
/// ```
/// use majority::{FindMajority, MajorityFinder};
///
/// let nums = [3, 3, 4, 2, 3, 3, 5];
/// let outcome = MajorityFinder.find(&nums).unwrap();
/// assert_eq!(outcome.majority(), Some(&3));
/// assert!(outcome.counts().comparisons < 5 * nums.len() as u64);
///
/// let nums = [1, 2, 3, 4];
/// assert_eq!(MajorityFinder.find(&nums).unwrap().majority(), None);
/// ```
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug)]
pub struct MajorityFinder;

/// Majority finder without completion marker.
///
/// Starts a scan from every position regardless of what earlier scans have
/// already established. Θ(n²) comparisons in the worst case: do not use outside
/// of benchmarks.
///
/// # Examples
/// ```
/// use majority::{FindMajority, MajorityFinderNaive};
///
/// let nums = [3, 3, 4, 2, 3, 3, 5];
/// assert_eq!(MajorityFinderNaive.find(&nums).unwrap().majority(), Some(&3));
/// ```
#[derive(Default, Clone, Copy, Eq, PartialEq, Debug)]
pub struct MajorityFinderNaive;

impl FindMajority for MajorityFinder {
    fn find<'a, T: PartialEq>(&self, seq: &'a [T]) -> Result<Outcome<'a, T>, MajorityError> {
        let outcome = identify::<T, true>(seq)?;
        debug!(
            finder = self.name(),
            n = seq.len(),
            found = outcome.is_found(),
            comparisons = outcome.counts.comparisons,
            additions = outcome.counts.additions,
            marker_writes = outcome.counts.marker_writes,
            "majority search finished"
        );
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "MajorityFinder"
    }
}

impl FindMajority for MajorityFinderNaive {
    fn find<'a, T: PartialEq>(&self, seq: &'a [T]) -> Result<Outcome<'a, T>, MajorityError> {
        let outcome = identify::<T, false>(seq)?;
        debug!(
            finder = self.name(),
            n = seq.len(),
            found = outcome.is_found(),
            comparisons = outcome.counts.comparisons,
            additions = outcome.counts.additions,
            "majority search finished"
        );
        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "MajorityFinderNaive"
    }
}

/// Returns the majority element of `a`, if it exists, using [`MajorityFinder`].
///
/// # Errors
/// Returns [`MajorityError::InvalidArgument`] if `a` is empty.
///
/// # Examples
/// ```
/// use majority::algorithms::majority;
///
/// let nums = [3, 3, 4, 2, 3, 3, 5];
/// assert_eq!(majority(&nums), Ok(Some(&3)));
///
/// let nums = [1, 1, 2, 2];
/// assert_eq!(majority(&nums), Ok(None));
///
/// let empty: [u32; 0] = [];
/// assert!(majority(&empty).is_err());
/// ```
pub fn majority<T: PartialEq>(a: &[T]) -> Result<Option<&T>, MajorityError> {
    MajorityFinder.find(a).map(|outcome| outcome.majority())
}

/// State of one circular scan started from `primary`.
struct Scan {
    primary: usize,
    secondary: usize,
    matches: u64,
    non_matches: u64,
}

impl Scan {
    #[inline(always)]
    fn start(primary: usize, n: usize, counts: &mut OpCounts) -> Self {
        counts.additions += 2;
        Self {
            primary,
            secondary: (primary + 1) % n,
            matches: 1,
            non_matches: 0,
        }
    }

    /// Runs the scan to its end. Returns `true` iff it wrapped around to
    /// `primary`, i.e., the element at `primary` is the majority.
    ///
    /// With `RETIRE`, every position matching `primary` is marked in `completed`.
    #[inline(always)]
    fn wraps_around<T: PartialEq, const RETIRE: bool>(
        &mut self,
        seq: &[T],
        completed: &mut [bool],
        counts: &mut OpCounts,
    ) -> bool {
        let n = seq.len();
        while self.matches > self.non_matches {
            counts.comparisons += 1;
            if self.secondary == self.primary {
                return true;
            }
            if seq[self.primary] == seq[self.secondary] {
                self.matches += 1;
                if RETIRE {
                    completed[self.secondary] = true;
                    counts.marker_writes += 1;
                }
            } else {
                self.non_matches += 1;
            }
            counts.additions += 3;
            self.secondary = (self.secondary + 1) % n;
        }
        false
    }
}

/// Shared scan loop. `RETIRE` selects whether the completion marker is kept.
fn identify<T: PartialEq, const RETIRE: bool>(
    seq: &[T],
) -> Result<Outcome<'_, T>, MajorityError> {
    let n = seq.len();
    let mut counts = OpCounts::default();

    match seq {
        [] => return Err(MajorityError::empty_sequence()),
        [x] => return Ok(Outcome::new(Some(x), counts)),
        _ => {}
    }

    let mut completed = if RETIRE { vec![false; n] } else { Vec::new() };

    for primary in 0..n {
        if !RETIRE || !completed[primary] {
            if RETIRE {
                completed[primary] = true;
                counts.marker_writes += 1;
            }
            let mut scan = Scan::start(primary, n, &mut counts);
            if scan.wraps_around::<T, RETIRE>(seq, &mut completed, &mut counts) {
                return Ok(Outcome::new(Some(&seq[primary]), counts));
            }
            trace!(
                primary,
                matches = scan.matches,
                non_matches = scan.non_matches,
                "scan abandoned"
            );
        }
        counts.additions += 1;
    }

    Ok(Outcome::new(None, counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_sequences::{
        gen_adversarial_sequence, gen_random_sequence, gen_shuffled_majority_sequence,
        gen_simple_sequence, gen_tied_sequence,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Quadratic reference: first element whose class is larger than half.
    fn brute_force<T: PartialEq>(a: &[T]) -> Option<&T> {
        a.iter()
            .find(|&x| a.iter().filter(|&y| y == x).count() > a.len() / 2)
    }

    fn assert_within_bounds<T: PartialEq>(a: &[T]) {
        let n = a.len() as u64;
        let counts = MajorityFinder.find(a).unwrap().counts();
        assert!(counts.comparisons < 5 * n, "comparisons: {counts:?}, n: {n}");
        assert!(counts.marker_writes < 3 * n, "marker writes: {counts:?}, n: {n}");
        assert!(counts.additions < 13 * n, "additions: {counts:?}, n: {n}");
    }

    // Only equality is available on this type.
    #[derive(Debug, PartialEq)]
    struct Color(&'static str);

    #[test]
    fn empty_is_rejected() {
        let a: [u32; 0] = [];
        assert_eq!(
            MajorityFinder.find(&a).unwrap_err(),
            MajorityError::empty_sequence()
        );
        assert_eq!(
            MajorityFinderNaive.find(&a).unwrap_err(),
            MajorityError::empty_sequence()
        );
        assert!(majority(&a).is_err());
    }

    #[test]
    fn single_element_is_majority() {
        let a = [42u32];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (Some(&42), 0, 0));
        assert_eq!(
            MajorityFinderNaive.find(&a).unwrap().into_triple(),
            (Some(&42), 0, 0)
        );
        assert_eq!(MajorityFinder.find(&a).unwrap().counts(), OpCounts::default());
    }

    #[test]
    fn typical_majority_exists() {
        let a = [3, 3, 4, 2, 3, 3, 5];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (Some(&3), 12, 45));
        assert_eq!(
            MajorityFinderNaive.find(&a).unwrap().into_triple(),
            (Some(&3), 13, 50)
        );
    }

    #[test]
    fn no_majority() {
        let a = [1, 2, 3, 4];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (None, 4, 24));
        assert_eq!(MajorityFinderNaive.find(&a).unwrap().into_triple(), (None, 4, 24));
    }

    #[test]
    fn even_length_no_majority() {
        let a = [1, 1, 2, 2];
        let outcome = MajorityFinder.find(&a).unwrap();
        assert_eq!(outcome.into_triple(), (None, 6, 26));
        assert_eq!(outcome.counts().marker_writes, 4);
        assert_eq!(MajorityFinderNaive.find(&a).unwrap().into_triple(), (None, 8, 36));
    }

    #[test]
    fn two_distinct_elements() {
        let a = [1, 2];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (None, 2, 12));
        let a = [1, 1];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (Some(&1), 2, 5));
    }

    #[test]
    fn borrowed_strings_majority() {
        let a = ["a", "b", "b", "c", "b", "b"];
        assert_eq!(MajorityFinder.find(&a).unwrap().into_triple(), (Some(&"b"), 7, 23));
        assert_eq!(majority(&a), Ok(Some(&"b")));
    }

    #[test]
    fn owned_strings_majority() {
        let a = vec![
            String::from("x"),
            String::from("y"),
            String::from("x"),
            String::from("x"),
        ];
        let res = majority(&a).unwrap();
        assert!(res.is_some());
        assert_eq!(res.unwrap().as_str(), "x");
    }

    #[test]
    fn equality_only_elements() {
        let a = [
            Color("red"),
            Color("blue"),
            Color("red"),
            Color("green"),
            Color("red"),
        ];
        assert_eq!(majority(&a), Ok(Some(&Color("red"))));
        assert_eq!(MajorityFinderNaive.find(&a).unwrap().majority(), Some(&Color("red")));

        let a = [Color("red"), Color("blue"), Color("red"), Color("blue")];
        assert_eq!(majority(&a), Ok(None));
    }

    #[test]
    fn returned_element_borrows_from_input() {
        let a = [7u8, 7, 9];
        let m = majority(&a).unwrap().unwrap();
        assert!(std::ptr::eq(m, &a[0]));
    }

    #[test]
    fn naive_never_writes_markers() {
        let a = [1, 2, 1, 2, 2, 3, 2];
        assert_eq!(MajorityFinderNaive.find(&a).unwrap().counts().marker_writes, 0);
        assert!(MajorityFinder.find(&a).unwrap().counts().marker_writes > 0);
    }

    #[test]
    fn large_input_majority() {
        // Build: 10_000 zeros, 10_001 ones => majority is 1
        let mut v = vec![0u8; 10_000];
        v.extend(std::iter::repeat(1u8).take(10_001));
        assert_eq!(majority(&v), Ok(Some(&1)));
        assert_within_bounds(&v);
    }

    #[test]
    fn adversarial_alternating_then_burst() {
        // Many alternations to cancel, then a burst that creates a majority.
        let mut v = Vec::new();
        for _ in 0..5000 {
            v.push(1u32);
            v.push(2u32);
        }
        v.extend(std::iter::repeat(2u32).take(5001)); // now 2 is majority
        assert_eq!(majority(&v), Ok(Some(&2)));
        assert_eq!(MajorityFinderNaive.find(&v).unwrap().majority(), Some(&2));
        assert_within_bounds(&v);
    }

    #[test]
    fn demo_cases() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 5_000;

        let v = gen_simple_sequence(n);
        assert_eq!(majority(&v), Ok(Some(&1)));
        assert_within_bounds(&v);

        let v = gen_shuffled_majority_sequence(n, &mut rng);
        assert_eq!(majority(&v), Ok(Some(&1)));
        assert_within_bounds(&v);

        let v = gen_tied_sequence(n, &mut rng);
        assert_eq!(majority(&v), Ok(None));
        assert_within_bounds(&v);

        let v = gen_random_sequence(2 * n, 100_000, &mut rng);
        assert_eq!(majority(&v).unwrap(), brute_force(&v));
        assert_within_bounds(&v);
    }

    #[test]
    fn exact_ties_have_no_majority() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..40 {
            for _ in 0..10 {
                let v = gen_tied_sequence(n, &mut rng);
                assert_eq!(MajorityFinder.find(&v).unwrap().majority(), None);
                assert_eq!(MajorityFinderNaive.find(&v).unwrap().majority(), None);
                assert_within_bounds(&v);
            }
        }
    }

    #[test]
    fn agrees_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(1234);
        for len in 1..60 {
            for max_value in [0, 1, 2, 4, len] {
                let v = gen_random_sequence(len, max_value, &mut rng);
                let expected = brute_force(&v);
                assert_eq!(MajorityFinder.find(&v).unwrap().majority(), expected, "{v:?}");
                assert_eq!(
                    MajorityFinderNaive.find(&v).unwrap().majority(),
                    expected,
                    "{v:?}"
                );
                assert_within_bounds(&v);
            }
        }
    }

    #[test]
    fn deterministic_counts() {
        let mut rng = StdRng::seed_from_u64(99);
        let v = gen_shuffled_majority_sequence(1_000, &mut rng);
        let first = MajorityFinder.find(&v).unwrap();
        for _ in 0..5 {
            assert_eq!(MajorityFinder.find(&v).unwrap(), first);
        }
        let first = MajorityFinderNaive.find(&v).unwrap();
        assert_eq!(MajorityFinderNaive.find(&v).unwrap(), first);
    }

    #[test]
    fn adversarial_separates_naive_from_linear() {
        let small = gen_adversarial_sequence(256);
        let large = gen_adversarial_sequence(512);

        let fast_small = MajorityFinder.find(&small).unwrap();
        let fast_large = MajorityFinder.find(&large).unwrap();
        assert_eq!(fast_small.majority(), Some(&0));
        assert_eq!(fast_large.majority(), Some(&0));
        assert_eq!(fast_small.counts().comparisons, 5 * 256 - 4);
        assert_eq!(fast_large.counts().comparisons, 5 * 512 - 4);
        assert_within_bounds(&large);

        let slow_small = MajorityFinderNaive.find(&small).unwrap();
        let slow_large = MajorityFinderNaive.find(&large).unwrap();
        assert_eq!(slow_small.majority(), Some(&0));
        assert_eq!(slow_large.majority(), Some(&0));
        assert_eq!(slow_small.counts().comparisons, 256 * 257);
        assert_eq!(slow_large.counts().comparisons, 512 * 513);

        let fast_ratio =
            fast_large.counts().comparisons as f64 / fast_small.counts().comparisons as f64;
        let slow_ratio =
            slow_large.counts().comparisons as f64 / slow_small.counts().comparisons as f64;
        assert!((1.9..2.1).contains(&fast_ratio), "{fast_ratio}");
        assert!((3.9..4.1).contains(&slow_ratio), "{slow_ratio}");
    }
}
