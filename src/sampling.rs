// 🎲 Sampling - draw without replacement by shrinking a candidate pool
//
// Each draw picks a uniform index and swap_removes it, so n draws cost O(n)
// no matter how close n is to the pool size.

use crate::error::{ReportError, Result};
use rand::Rng;

/// Remove and return one uniformly chosen element of `pool`.
///
/// Returns `None` once the pool is exhausted.
pub fn take_random<T, R>(pool: &mut Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Draw `n` distinct elements of `population` without replacement.
///
/// The population itself is never reordered; only a working copy shrinks.
pub fn sample_without_replacement<T, R>(population: &[T], n: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if n > population.len() {
        return Err(ReportError::InvalidArgument(format!(
            "cannot sample {} elements from a population of {}",
            n,
            population.len()
        )));
    }

    let mut pool = population.to_vec();
    let sample: Vec<T> = std::iter::from_fn(|| take_random(&mut pool, &mut *rng))
        .take(n)
        .collect();

    tracing::debug!(requested = n, population = population.len(), "sampled without replacement");
    Ok(sample)
}
