//! RNG trait abstraction for the cell engine
//!
//! Every random choice the rules make is "pick one of these N candidates",
//! so that is the only operation the engine asks for. Allows it to run with:
//! - `rand::thread_rng()` for interactive use
//! - a seeded `Xoshiro256StarStar` for benchmarks and reproducible runs
//! - hand-written doubles that pin every choice in tests

/// Random number generator trait for the cell engine
pub trait WorldRng {
    /// Uniform index in `0..len`; `len` must be non-zero
    fn gen_index(&mut self, len: usize) -> usize;
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_gen_index_covers_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let index = rng.gen_index(3);
            assert!(index < 3);
            seen[index] = true;
        }

        // Every candidate should come up over enough draws
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_gen_index_single_candidate() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(rng.gen_index(1), 0);
        }
    }

    #[test]
    fn test_two_way_choice_is_roughly_even() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let left = (0..1000).filter(|_| rng.gen_index(2) == 0).count();
        assert!((400..600).contains(&left), "left chosen {left} times");
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(5), rng2.gen_index(5));
        }
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(9);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert!(dyn_rng.gen_index(4) < 4);
    }
}
