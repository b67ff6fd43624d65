//! Injectable source of random numbers for fixture data.

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Produces uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `low..=high`.
    fn pick(&self, low: u32, high: u32) -> u32;
}

/// [`RandomSource`] backed by the thread-local generator of `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, low: u32, high: u32) -> u32 {
        use rand::Rng;

        if low >= high {
            return low;
        }
        rand::rng().random_range(low..=high)
    }
}
