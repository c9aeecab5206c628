//! String hashing and the xorshift stream that drives the seeded generator.

/// Polynomial rolling hash (`acc * 31 + unit`) over the lower-cased input's
/// UTF-16 code units, wrapping at 32 bits.
///
/// Same input, ignoring case, always yields the same seed.
pub fn derive_seed(input: &str) -> i32 {
    input
        .to_lowercase()
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Caller-owned xorshift32 stream.
///
/// Yields floats in `[0, 1]`; the upper bound is only reached when the state
/// is `0xFFFF_FFFF`, so callers indexing into a list should go through
/// [`SeededStream::pick`]. A zero seed is a fixed point and yields `0.0`
/// forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: i32,
}

impl SeededStream {
    pub fn new(seed: i32) -> Self {
        Self { state: seed }
    }

    pub fn from_input(input: &str) -> Self {
        Self::new(derive_seed(input))
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    /// One draw: advances the state and normalises it.
    pub fn next_f64(&mut self) -> f64 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= ((s as u32) >> 17) as i32;
        s ^= s << 5;
        self.state = s;

        f64::from(s as u32) / f64::from(u32::MAX)
    }

    /// `round(draw * span)`.
    pub fn scaled(&mut self, span: f64) -> i32 {
        (self.next_f64() * span).round() as i32
    }

    /// Picks `items[floor(draw * len)]`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[index_for(self.next_f64(), items.len())]
    }
}

fn index_for(draw: f64, len: usize) -> usize {
    ((draw * len as f64).floor() as usize).min(len.saturating_sub(1))
}

impl Iterator for SeededStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
