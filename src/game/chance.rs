//! Injected randomness for battles.
//!
//! Everything random in a session goes through [`Chance`]: the weighted coin
//! flip that decides an exchange, the trainer's type, and the boss order.
//! Production code wraps a `rand` RNG; tests use a seeded `StdRng` or the
//! scripted [`FixedChance`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use crate::game::types::BattleType;

pub trait Chance {
    /// Bernoulli trial: `true` with the given probability.
    fn draw(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// [`Chance`] backed by any `rand` RNG.
pub struct RngChance<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChance<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Chance for RngChance<R> {
    fn draw(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    fn below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Scripted [`Chance`] for deterministic playthroughs.
///
/// Draws and picks are consumed front to back. When a queue runs dry the
/// fallback values apply: draws lose, picks return 0.
#[derive(Debug, Default, Clone)]
pub struct FixedChance {
    draws: VecDeque<bool>,
    picks: VecDeque<usize>,
    draws_taken: usize,
}

impl FixedChance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draws(mut self, draws: impl IntoIterator<Item = bool>) -> Self {
        self.draws.extend(draws);
        self
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// How many Bernoulli draws have been consumed so far.
    pub fn draws_taken(&self) -> usize {
        self.draws_taken
    }
}

impl Chance for FixedChance {
    fn draw(&mut self, _probability: f64) -> bool {
        self.draws_taken += 1;
        self.draws.pop_front().unwrap_or(false)
    }

    fn below(&mut self, upper: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % upper
    }
}

/// Uniformly pick one of the three types.
pub fn random_type(chance: &mut dyn Chance) -> BattleType {
    BattleType::ALL[chance.below(BattleType::ALL.len())]
}

/// Fisher-Yates shuffle of the three types.
pub fn shuffled_types(chance: &mut dyn Chance) -> [BattleType; 3] {
    let mut order = BattleType::ALL;
    for i in (1..order.len()).rev() {
        let j = chance.below(i + 1);
        order.swap(i, j);
    }
    order
}
