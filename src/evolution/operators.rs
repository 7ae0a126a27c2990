//! Generic mutation operators.
//!
//! Every operator edits a genome in place, takes its randomness source
//! explicitly, and preserves genome length. The four families share a shape
//! across element types, while the edit itself is type-specific:
//!
//! | Operator | Elements | Edit |
//! |---|---|---|
//! | [`normal_mutation`] | [`NumericGene`] | probability-gated Gaussian perturbation per gene |
//! | [`uniform_mutation`] | any `Clone + PartialEq` | fixed count of distinct positions replaced from genome ∪ corpus |
//! | [`permute_mutation`] | any | `count` random transpositions |
//! | [`splice_mutation`] | any | exchange of two adjacent segments |
//!
//! Degenerate input is an error, never a silent no-op: an empty genome fails
//! every operator, and permutation-style operators need at least two genes.

use crate::error::OperatorError;
use rand::seq::index;
use rand::Rng;
use rand_distr::StandardNormal;

/// An ordered numeric gene that can be perturbed and blended.
///
/// Implemented for `f64`, `f32`, `i64`, and `i32`. Integer genes round the
/// perturbed or blended value to the nearest integer, saturating at the
/// type's bounds.
pub trait NumericGene: Copy + PartialOrd + Send + Sync {
    /// Returns `self + delta` in this gene's domain.
    fn perturb(self, delta: f64) -> Self;

    /// Returns the point `t` of the way from `self` to `other`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl NumericGene for f64 {
    fn perturb(self, delta: f64) -> Self {
        self + delta
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        self + t * (other - self)
    }
}

impl NumericGene for f32 {
    fn perturb(self, delta: f64) -> Self {
        (self as f64 + delta) as f32
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        NumericGene::lerp(self as f64, other as f64, t) as f32
    }
}

impl NumericGene for i64 {
    fn perturb(self, delta: f64) -> Self {
        self.saturating_add(delta.round() as i64)
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        NumericGene::lerp(self as f64, other as f64, t).round() as i64
    }
}

impl NumericGene for i32 {
    fn perturb(self, delta: f64) -> Self {
        self.saturating_add(delta.round() as i32)
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        NumericGene::lerp(self as f64, other as f64, t).round() as i32
    }
}

/// Normal mutation: each gene, with probability `rate`, receives an
/// additive `N(0, std²)` perturbation.
///
/// `rate = 0` leaves the genome untouched; `rate = 1` perturbs every gene.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if `genome` is empty
/// - [`OperatorError::RateOutOfRange`] if `rate` is outside `[0, 1]`
/// - [`OperatorError::InvalidStd`] if `std` is negative or not finite
///
/// # Complexity
/// O(n)
pub fn normal_mutation<T: NumericGene, R: Rng>(
    genome: &mut [T],
    rate: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), OperatorError> {
    check_normal_params(genome.len(), rate, std)?;

    for gene in genome.iter_mut() {
        if rng.random::<f64>() < rate {
            let z: f64 = rng.sample(StandardNormal);
            *gene = gene.perturb(z * std);
        }
    }
    Ok(())
}

pub(crate) fn check_normal_params(len: usize, rate: f64, std: f64) -> Result<(), OperatorError> {
    if len == 0 {
        return Err(OperatorError::EmptyGenome);
    }
    if !(0.0..=1.0).contains(&rate) {
        return Err(OperatorError::RateOutOfRange(rate));
    }
    if !std.is_finite() || std < 0.0 {
        return Err(OperatorError::InvalidStd(std));
    }
    Ok(())
}

/// Uniform replacement: `count` distinct positions are overwritten with
/// values drawn uniformly from the union of the genome's own values and
/// `corpus`.
///
/// The union is taken over distinct values, so a value repeated in the genome
/// is no likelier than one appearing once.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if `genome` is empty
/// - [`OperatorError::CountExceedsLength`] if `count > genome.len()`
///
/// # Complexity
/// O((n + c)²) to build the distinct value pool, where c is the corpus size
pub fn uniform_mutation<T: Clone + PartialEq, R: Rng>(
    genome: &mut [T],
    corpus: &[T],
    count: usize,
    rng: &mut R,
) -> Result<(), OperatorError> {
    let n = genome.len();
    if n == 0 {
        return Err(OperatorError::EmptyGenome);
    }
    if count > n {
        return Err(OperatorError::CountExceedsLength { count, len: n });
    }

    let mut pool: Vec<T> = Vec::with_capacity(n + corpus.len());
    for value in genome.iter().chain(corpus.iter()) {
        if !pool.contains(value) {
            pool.push(value.clone());
        }
    }

    for pos in index::sample(rng, n, count).iter() {
        genome[pos] = pool[rng.random_range(0..pool.len())].clone();
    }
    Ok(())
}

/// Permutation mutation: `count` independent transpositions, each swapping
/// two distinct random positions.
///
/// The multiset of values is preserved.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if `genome` is empty
/// - [`OperatorError::TooFewGenes`] if `genome` has fewer than 2 genes
///
/// # Complexity
/// O(count)
pub fn permute_mutation<T, R: Rng>(
    genome: &mut [T],
    count: usize,
    rng: &mut R,
) -> Result<(), OperatorError> {
    let n = require_pairable(genome.len())?;

    for _ in 0..count {
        let pair = index::sample(rng, n, 2);
        genome.swap(pair.index(0), pair.index(1));
    }
    Ok(())
}

/// Splice mutation: picks cut points `0 < a < b <= n` and exchanges the
/// adjacent segments `[0, a)` and `[a, b)`.
///
/// Equivalent to rotating the prefix `[0, b)` left by `a`. The first cut is
/// drawn from `1..n`, a strict subset of the wider `0 <= a` domain: the cut
/// `a = 0` would leave the genome unchanged, so it is excluded and the
/// exchange always reorders genes.
///
/// # Errors
/// - [`OperatorError::EmptyGenome`] if `genome` is empty
/// - [`OperatorError::TooFewGenes`] if `genome` has fewer than 2 genes
///
/// # Complexity
/// O(n)
pub fn splice_mutation<T, R: Rng>(genome: &mut [T], rng: &mut R) -> Result<(), OperatorError> {
    let n = require_pairable(genome.len())?;

    let a = rng.random_range(1..n);
    let b = rng.random_range(a + 1..=n);
    splice_segments(genome, a, b);
    Ok(())
}

/// Exchanges `[0, a)` with `[a, b)`.
fn splice_segments<T>(genome: &mut [T], a: usize, b: usize) {
    debug_assert!(a < b && b <= genome.len());
    genome[..b].rotate_left(a);
}

fn require_pairable(len: usize) -> Result<usize, OperatorError> {
    match len {
        0 => Err(OperatorError::EmptyGenome),
        1 => Err(OperatorError::TooFewGenes {
            required: 2,
            actual: 1,
        }),
        n => Ok(n),
    }
}
