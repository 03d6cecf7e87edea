use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Tabletop-style dice roller backing every random decision in the
/// generation engine.
///
/// The source of randomness sits behind [`RngCore`] so tests can swap the
/// default ChaCha stream for a fixed sequence. Multi-die sums are
/// deliberately bell-shaped; the roll tables throughout the builders rely
/// on that bias toward the middle of the range.
pub struct Dice {
    rng: Box<dyn RngCore>,
}

impl Dice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Wrap an arbitrary RNG, e.g. `rand::rngs::mock::StepRng` in tests.
    pub fn from_rng(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Uniform integer in `[1, sides]`.
    pub fn roll(&mut self, sides: i32) -> i32 {
        assert!(sides > 0, "die must have at least one side");
        self.rng.gen_range(1..=sides)
    }

    /// Sum of `count` independent rolls of a `sides`-sided die.
    pub fn roll_sum(&mut self, sides: i32, count: i32) -> i32 {
        (0..count).map(|_| self.roll(sides)).sum()
    }

    /// Uniform integer in `[0, n)`.
    pub fn roll_zero(&mut self, n: i32) -> i32 {
        assert!(n > 0, "range must be non-empty");
        self.rng.gen_range(0..n)
    }

    pub fn d2(&mut self) -> i32 {
        self.roll(2)
    }

    pub fn d3(&mut self) -> i32 {
        self.roll(3)
    }

    pub fn d4(&mut self) -> i32 {
        self.roll(4)
    }

    pub fn d6(&mut self) -> i32 {
        self.roll(6)
    }

    pub fn d8(&mut self) -> i32 {
        self.roll(8)
    }

    pub fn d10(&mut self) -> i32 {
        self.roll(10)
    }

    pub fn d12(&mut self) -> i32 {
        self.roll(12)
    }

    pub fn d20(&mut self) -> i32 {
        self.roll(20)
    }

    pub fn d100(&mut self) -> i32 {
        self.roll(100)
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice").finish_non_exhaustive()
    }
}
