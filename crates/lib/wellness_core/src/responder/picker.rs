//! Index selection for canned response pools.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

/// Source of pool indices. `pick(len)` must return a value in `0..len`;
/// callers never pass `len == 0`.
pub trait IndexPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Deterministic picker that replays a fixed sequence (wrapping around),
/// reducing each value modulo the pool length. Counts every draw.
#[derive(Debug)]
pub struct SequencePicker {
    sequence: Vec<usize>,
    cursor: Mutex<usize>,
    draws: AtomicUsize,
}

impl SequencePicker {
    pub fn new(sequence: impl Into<Vec<usize>>) -> Self {
        let mut sequence = sequence.into();
        if sequence.is_empty() {
            sequence.push(0);
        }
        Self {
            sequence,
            cursor: Mutex::new(0),
            draws: AtomicUsize::new(0),
        }
    }

    /// Number of `pick` calls made so far.
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&self, len: usize) -> usize {
        self.draws.fetch_add(1, Ordering::SeqCst);
        let mut cursor = match self.cursor.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let value = self.sequence[*cursor % self.sequence.len()];
        *cursor += 1;
        value % len
    }
}
