//! Mock random source for isolating services in tests.

use mockall::mock;

use crate::random::RandomSource;

mock! {
    pub Random {}

    impl RandomSource for Random {
        fn pick(&self, low: u32, high: u32) -> u32;
    }
}
