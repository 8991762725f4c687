// crates/ports/src/random.rs

/// Statistically uniform, non-cryptographic source of integers.
///
/// Implementations return values uniformly distributed over the inclusive
/// range `[low, high]`. Callers guarantee `low <= high`.
pub trait RandomSource {
    fn next_in(&mut self, low: i64, high: i64) -> i64;
}
