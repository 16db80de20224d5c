//! RNG module - injectable piece selection
//!
//! Pieces are drawn uniformly at random from the seven kinds. The source is
//! a trait so tests can script an exact sequence; the production impl is a
//! small LCG, which keeps games reproducible from a seed.

use crate::types::PieceKind;

/// Source of the next piece kind.
///
/// Injected into the game state so piece selection can be made
/// deterministic in tests.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform random piece picker backed by [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct UniformPicker {
    rng: SimpleRng,
}

impl UniformPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPicker {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

impl Default for UniformPicker {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Deterministic source that cycles a fixed list of kinds (for tests)
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl FixedSequence {
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "sequence must contain at least one kind");
        Self { kinds, next: 0 }
    }
}

impl PieceSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next += 1;
        kind
    }
}
