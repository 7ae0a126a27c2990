//! Tournament survivor selection.
//!
//! Each tournament draws `k` contestants uniformly at random (with
//! replacement) from the pool and keeps the one with the lowest fitness.
//! Tournaments are repeated, independently, until enough survivors exist.
//!
//! Higher `k` = stronger selection pressure.
//! - k=1: uniform random survival
//! - k=2-5: moderate pressure
//! - k>5: strong pressure (risk of premature convergence)
//!
//! Ties keep the contestant drawn first.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::error::OperatorError;
use rand::Rng;

/// Runs one tournament and returns the winner's index into `pool`.
///
/// # Errors
/// - [`OperatorError::EmptyPool`] if `pool` is empty
/// - [`OperatorError::NoContestants`] if `contestants == 0`
///
/// # Complexity
/// O(k)
pub fn tournament_select<R: Rng>(
    pool: &[Individual],
    contestants: usize,
    rng: &mut R,
) -> Result<usize, OperatorError> {
    check_tournament(pool.len(), contestants)?;
    Ok(tournament(pool, contestants, rng))
}

/// Runs `survivors` independent tournaments over `pool` and returns a clone
/// of each winner, in the order they won.
///
/// The same individual may win several tournaments.
///
/// # Errors
/// - [`OperatorError::EmptyPool`] if `pool` is empty
/// - [`OperatorError::NoContestants`] if `contestants == 0`
///
/// # Complexity
/// O(survivors · k)
pub fn tournament_survivors<R: Rng>(
    pool: &[Individual],
    contestants: usize,
    survivors: usize,
    rng: &mut R,
) -> Result<Vec<Individual>, OperatorError> {
    check_tournament(pool.len(), contestants)?;
    Ok((0..survivors)
        .map(|_| pool[tournament(pool, contestants, rng)].clone())
        .collect())
}

fn check_tournament(pool_len: usize, contestants: usize) -> Result<(), OperatorError> {
    if pool_len == 0 {
        return Err(OperatorError::EmptyPool);
    }
    if contestants == 0 {
        return Err(OperatorError::NoContestants);
    }
    Ok(())
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<R: Rng>(pool: &[Individual], k: usize, rng: &mut R) -> usize {
    let n = pool.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if pool[idx].fitness < pool[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_pool(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual {
                genome: vec![i as f64],
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pool = make_pool(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = tournament_select(&pool, 4, &mut rng).unwrap();
            counts[idx] += 1;
        }
        // Index 2 (fitness=1.0) should dominate
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_single_contestant_is_uniform() {
        let pool = make_pool(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let idx = tournament_select(&pool, 1, &mut rng).unwrap();
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_survivors_count_and_membership() {
        let pool = make_pool(&[3.0, 1.0, 4.0, 1.5, 9.0, 2.6, 5.0]);
        let mut rng = create_rng(7);
        let survivors = tournament_survivors(&pool, 3, 4, &mut rng).unwrap();
        assert_eq!(survivors.len(), 4);
        for s in &survivors {
            assert!(pool.contains(s));
        }
    }

    #[test]
    fn test_survivors_never_include_worst_with_full_pressure() {
        // With many contestants the worst individual can only win when it is
        // drawn every time.
        let pool = make_pool(&[1.0, 2.0, 3.0, 100.0]);
        let mut rng = create_rng(3);
        let survivors = tournament_survivors(&pool, 16, 200, &mut rng).unwrap();
        assert!(survivors.iter().all(|s| s.fitness < 100.0));
    }

    #[test]
    fn test_ties_keep_first_drawn() {
        let pool = make_pool(&[5.0, 5.0, 5.0, 5.0]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament_select(&pool, 2, &mut rng).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform with equal fitness, got {counts:?}");
        }
    }

    #[test]
    fn test_single_individual() {
        let pool = make_pool(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament_select(&pool, 3, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_empty_pool_fails() {
        let pool: Vec<Individual> = vec![];
        let mut rng = create_rng(42);
        assert_eq!(
            tournament_select(&pool, 3, &mut rng),
            Err(OperatorError::EmptyPool)
        );
    }

    #[test]
    fn test_zero_contestants_fails() {
        let pool = make_pool(&[1.0]);
        let mut rng = create_rng(42);
        assert_eq!(
            tournament_survivors(&pool, 0, 1, &mut rng),
            Err(OperatorError::NoContestants)
        );
    }
}
