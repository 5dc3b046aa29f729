use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how volume operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small volumes, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool and process each z-slice as one task.
    ///
    /// A z-slice is a contiguous run of `nx * ny` voxels, so every task owns a
    /// disjoint region of the destination.
    #[default]
    ParallelSlices,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Apply a function to every interior z-slice of a destination buffer.
///
/// The buffer is split into `nz` consecutive slices of `slice_len` elements. Slices
/// `1..nz - 1` are handed to `f` together with their z index; the first and last
/// slices are never visited.
///
/// # Arguments
///
/// * `dst` - The destination buffer, at least `slice_len * nz` elements long.
/// * `slice_len` - The number of elements in one z-slice.
/// * `nz` - The number of z-slices.
/// * `strategy` - The execution strategy.
/// * `f` - The operation to run on each `(z, slice)` pair.
pub fn par_iter_interior_slices<T, F>(
    dst: &mut [T],
    slice_len: usize,
    nz: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if nz < 3 || slice_len == 0 {
        return Ok(());
    }

    let interior = &mut dst[slice_len..(nz - 1) * slice_len];

    match strategy {
        ExecutionStrategy::Serial => {
            interior
                .chunks_exact_mut(slice_len)
                .enumerate()
                .for_each(|(i, slice)| f(i + 1, slice));
        }
        ExecutionStrategy::ParallelSlices => {
            interior
                .par_chunks_exact_mut(slice_len)
                .enumerate()
                .for_each(|(i, slice)| f(i + 1, slice));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                interior
                    .par_chunks_exact_mut(slice_len)
                    .enumerate()
                    .for_each(|(i, slice)| f(i + 1, slice));
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_slices(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0usize; 4 * 5];
        par_iter_interior_slices(&mut dst, 4, 5, strategy, |z, slice| {
            slice.iter_mut().for_each(|d| *d = z);
        })?;
        Ok(dst)
    }

    #[test]
    fn test_serial() -> Result<(), ParallelError> {
        let dst = mark_slices(ExecutionStrategy::Serial)?;
        let expected = [0, 1, 2, 3, 0]
            .iter()
            .flat_map(|&z| std::iter::repeat(z).take(4))
            .collect::<Vec<_>>();
        assert_eq!(dst, expected);
        Ok(())
    }

    #[test]
    fn test_parallel_matches_serial() -> Result<(), ParallelError> {
        let serial = mark_slices(ExecutionStrategy::Serial)?;
        assert_eq!(mark_slices(ExecutionStrategy::ParallelSlices)?, serial);
        assert_eq!(mark_slices(ExecutionStrategy::Fixed(2))?, serial);
        Ok(())
    }

    #[test]
    fn test_too_few_slices() -> Result<(), ParallelError> {
        let mut dst = vec![7u8; 8];
        par_iter_interior_slices(&mut dst, 4, 2, ExecutionStrategy::Serial, |_, slice| {
            slice.iter_mut().for_each(|d| *d = 0);
        })?;
        assert_eq!(dst, vec![7u8; 8]);
        Ok(())
    }

    #[test]
    fn test_fixed_error() {
        let mut dst = vec![0u8; 12];
        let res = par_iter_interior_slices(&mut dst, 4, 3, ExecutionStrategy::Fixed(0), |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }
}
