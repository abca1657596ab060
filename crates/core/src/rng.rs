//! RNG module - seeded randomness and the lookahead piece generator
//!
//! Every slot of the lookahead queue is an independent uniform draw over the
//! seven kinds (no bag: repeats are possible). The queue is refilled to at
//! least [`QUEUE_MIN_LEN`] after every draw, so a preview of up to three pieces
//! never has to mutate anything.
//!
//! Randomness comes from a seeded Xoshiro256** stream, so equal seeds produce
//! equal games.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::types::{PieceKind, QUEUE_MIN_LEN};

/// Seeded RNG shared by the generator and garbage synthesis
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: Xoshiro256StarStar,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.rng.random_range(0..max)
    }

    /// Uniform draw over the seven kinds
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Lookahead queue of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    queue: VecDeque<PieceKind>,
    rng: GameRng,
    seed: u64,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        let mut generator = Self {
            queue: VecDeque::with_capacity(QUEUE_MIN_LEN + 1),
            rng: GameRng::new(seed),
            seed,
        };
        generator.refill();
        generator
    }

    /// Top the queue up to the minimum length
    fn refill(&mut self) {
        while self.queue.len() < QUEUE_MIN_LEN {
            let kind = self.rng.next_kind();
            self.queue.push_back(kind);
        }
    }

    /// Take the next piece and refill
    pub fn consume(&mut self) -> PieceKind {
        self.refill();
        let kind = self.queue.pop_front().unwrap_or_else(|| self.rng.next_kind());
        self.refill();
        kind
    }

    /// Next piece without consuming it
    pub fn peek(&self) -> PieceKind {
        self.queue[0]
    }

    /// Up to `n` upcoming pieces in draw order, without consuming them
    pub fn peek_queue(&self, n: usize) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied().take(n)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Always false: the queue is refilled on every draw
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Seed the generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_range(1000), rng2.next_range(1000));
        }
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            assert!(rng.next_range(10) < 10);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_generator_starts_with_minimum_queue() {
        let generator = PieceGenerator::new(1);
        assert_eq!(generator.len(), QUEUE_MIN_LEN);
        assert!(!generator.is_empty());
    }

    #[test]
    fn test_consume_keeps_minimum_queue() {
        let mut generator = PieceGenerator::new(99);
        for _ in 0..50 {
            let _ = generator.consume();
            assert!(generator.len() >= QUEUE_MIN_LEN);
        }
    }

    #[test]
    fn test_peek_matches_consume() {
        let mut generator = PieceGenerator::new(5);
        for _ in 0..20 {
            let upcoming: Vec<_> = generator.peek_queue(3).collect();
            assert_eq!(upcoming[0], generator.peek());
            assert_eq!(generator.consume(), upcoming[0]);
            // The rest of the preview shifts forward unchanged
            let after: Vec<_> = generator.peek_queue(2).collect();
            assert_eq!(after, upcoming[1..].to_vec());
        }
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let generator = PieceGenerator::new(42);
        let first: Vec<_> = generator.peek_queue(3).collect();
        let second: Vec<_> = generator.peek_queue(3).collect();
        assert_eq!(first, second);
        assert_eq!(generator.peek_queue(10).count(), QUEUE_MIN_LEN);
        assert_eq!(generator.peek_queue(1).count(), 1);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(2024);
        let mut b = PieceGenerator::new(2024);
        for _ in 0..100 {
            assert_eq!(a.consume(), b.consume());
        }
    }

    #[test]
    fn test_all_kinds_appear() {
        let mut generator = PieceGenerator::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(generator.consume());
        }
        assert_eq!(seen.len(), 7);
    }
}
