//! Generators of test and benchmark sequences for the majority finders.
//!
//! Randomized generators take the random generator as an argument, so that
//! a seeded [`rand::rngs::StdRng`] gives reproducible sequences.
use rand::seq::SliceRandom;
use rand::Rng;

/// Generates `n - 1` zeros followed by `n + 1` ones. The majority is `1`.
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_simple_sequence;
///
/// let v = gen_simple_sequence(3);
/// assert_eq!(v, vec![0, 0, 1, 1, 1, 1]);
/// ```
pub fn gen_simple_sequence(n: usize) -> Vec<usize> {
    assert!(n > 0, "n must be positive");
    let mut v = vec![0; n - 1];
    v.extend(std::iter::repeat(1).take(n + 1));
    v
}

/// Generates a random permutation of [`gen_simple_sequence`]. The majority is `1`.
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_shuffled_majority_sequence;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let v = gen_shuffled_majority_sequence(5, &mut rng);
/// assert_eq!(v.len(), 10);
/// assert_eq!(v.iter().filter(|&&x| x == 1).count(), 6);
/// ```
pub fn gen_shuffled_majority_sequence<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut v = gen_simple_sequence(n);
    v.shuffle(rng);
    v
}

/// Generates a random permutation of `n` zeros and `n` ones. There is no majority.
pub fn gen_tied_sequence<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut v = vec![0; n];
    v.extend(std::iter::repeat(1).take(n));
    v.shuffle(rng);
    v
}

/// Generates a random vector of `len` values in [0, `max_value`].
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_random_sequence;
///
/// let v = gen_random_sequence(5, 10, &mut rand::rng());
/// assert_eq!(v.len(), 5);
/// assert!(v.iter().all(|&x| x <= 10));
/// ```
pub fn gen_random_sequence<R: Rng + ?Sized>(len: usize, max_value: usize, rng: &mut R) -> Vec<usize> {
    (0..len).map(|_x| rng.random_range(0..=max_value)).collect()
}

/// Generates a sequence of length `2n` on which [`MajorityFinderNaive`] performs
/// `n * (n + 1)` comparisons: `n - 1` zeros, the distinct values `1..n`, and two
/// more zeros. The majority is `0`, with `n + 1` copies.
///
/// [`MajorityFinderNaive`]: crate::MajorityFinderNaive
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_adversarial_sequence;
///
/// assert_eq!(gen_adversarial_sequence(4), vec![0, 0, 0, 1, 2, 3, 0, 0]);
/// ```
pub fn gen_adversarial_sequence(n: usize) -> Vec<usize> {
    assert!(n > 0, "n must be positive");
    let mut v = vec![0; n - 1];
    v.extend(1..n);
    v.extend([0, 0]);
    v
}
