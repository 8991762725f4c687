// crates/domain/src/settings.rs
use std::collections::BTreeSet;

use draw_numbers_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Domain representation of the draw configuration.
///
/// No ordering invariant is enforced between `min` and `max` at this level;
/// feasibility of a concrete draw is checked by [`DrawSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    pub min: i64,
    pub max: i64,
    pub count: u32,
    pub exclusion_enabled: bool,
    pub excluded: BTreeSet<i64>,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            count: 10,
            exclusion_enabled: false,
            excluded: BTreeSet::new(),
        }
    }
}

impl DrawSettings {
    /// Whether `value` is barred from a draw under the current settings.
    pub fn is_excluded(&self, value: i64) -> bool {
        self.exclusion_enabled && self.excluded.contains(&value)
    }

    /// Number of excluded values that actually fall inside `[min, max]`.
    /// Exclusions outside the range never shrink the candidate pool.
    pub fn excluded_within_range(&self) -> u64 {
        if !self.exclusion_enabled || self.min > self.max {
            return 0;
        }
        self.excluded.range(self.min..=self.max).count() as u64
    }

    /// Validate feasibility and return the available candidate count.
    ///
    /// Checks run in a fixed order; the first failing check determines the
    /// error.
    pub fn validate(&self) -> DomainResult<u64> {
        if self.min >= self.max {
            return Err(DomainError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }

        // min < max holds here, so the span is at least 2.
        let span = (i128::from(self.max) - i128::from(self.min) + 1) as u128;
        let excluded = u128::from(self.excluded_within_range());
        if excluded >= span {
            return Err(DomainError::RangeFullyExcluded {
                min: self.min,
                max: self.max,
            });
        }

        let available = u64::try_from(span - excluded).unwrap_or(u64::MAX);
        if u64::from(self.count) > available {
            return Err(DomainError::InsufficientAvailable {
                requested: self.count,
                available,
            });
        }

        Ok(available)
    }

    /// Parse a comma-separated exclusion list.
    ///
    /// Tokens are trimmed of whitespace; tokens that fail integer parsing
    /// are silently discarded.
    pub fn parse_excluded(text: &str) -> BTreeSet<i64> {
        text.split(',')
            .filter_map(|token| token.trim().parse::<i64>().ok())
            .collect()
    }

    /// Serialize the exclusion set back to its comma-separated text form,
    /// in ascending order.
    pub fn excluded_text(&self) -> String {
        let tokens: Vec<String> = self.excluded.iter().map(ToString::to_string).collect();
        tokens.join(",")
    }
}
