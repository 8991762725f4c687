// crates/usecase/src/orchestrator.rs
use draw_numbers_domain::DrawSettings;
use draw_numbers_ports::random::RandomSource;
use draw_numbers_shared_kernel::Result;

use crate::dto::DrawOutput;

/// Draws a batch of distinct, non-excluded values from a random source.
pub struct DrawNumbers<'a> {
    random: &'a mut dyn RandomSource,
}

impl<'a> DrawNumbers<'a> {
    pub fn new(random: &'a mut dyn RandomSource) -> Self {
        Self { random }
    }

    /// Validate feasibility, then sample by rejection until exactly
    /// `settings.count` distinct values are accepted.
    ///
    /// Candidates already accepted or barred by the exclusion set are
    /// redrawn. Feasibility was checked up front, so the loop terminates
    /// with probability 1; result order is acceptance order.
    pub fn run(&mut self, settings: &DrawSettings) -> Result<DrawOutput> {
        settings.validate()?;

        let count = settings.count as usize;
        let mut values: Vec<i64> = Vec::with_capacity(count);
        while values.len() < count {
            let candidate = self.random.next_in(settings.min, settings.max);
            if settings.is_excluded(candidate) || values.contains(&candidate) {
                continue;
            }
            values.push(candidate);
        }

        Ok(DrawOutput { values })
    }
}
