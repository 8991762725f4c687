// crates/domain/src/format.rs
use std::fmt::Write;

use crate::settings::DrawSettings;

/// Shown in place of a result block when no draw has happened yet.
pub const NO_RESULT_PROMPT: &str = "no numbers drawn yet";

/// One-line summary of the current settings.
pub fn summary_line(settings: &DrawSettings) -> String {
    let excluded = if settings.exclusion_enabled && !settings.excluded.is_empty() {
        settings.excluded.len().to_string()
    } else {
        "none".to_string()
    };
    format!(
        "range: {}-{}, count: {}, excluded: {}",
        settings.min, settings.max, settings.count, excluded
    )
}

/// Render values comma-separated, in insertion order, with a line break
/// after every 10th value. The separator is written before the break, so
/// wrapped lines end with `", "`.
pub fn wrapped_values(values: &[i64]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        let _ = write!(out, "{value}");
        if i + 1 < values.len() {
            out.push_str(", ");
        }
        if i % 10 == 9 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn summary_reports_none_without_active_exclusions() {
        let settings = DrawSettings::default();
        assert_eq!(summary_line(&settings), "range: 1-100, count: 10, excluded: none");
    }

    #[test]
    fn summary_counts_active_exclusions() {
        let settings = DrawSettings {
            exclusion_enabled: true,
            excluded: BTreeSet::from([2, 4, 6]),
            ..DrawSettings::default()
        };
        assert_eq!(summary_line(&settings), "range: 1-100, count: 10, excluded: 3");
    }

    #[test]
    fn summary_ignores_exclusions_while_disabled() {
        let settings = DrawSettings {
            exclusion_enabled: false,
            excluded: BTreeSet::from([2, 4, 6]),
            ..DrawSettings::default()
        };
        assert_eq!(summary_line(&settings), "range: 1-100, count: 10, excluded: none");
    }

    #[test]
    fn short_runs_stay_on_one_line() {
        assert_eq!(wrapped_values(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(wrapped_values(&[]), "");
        assert_eq!(wrapped_values(&[42]), "42");
    }

    #[test]
    fn breaks_after_every_tenth_value() {
        let values: Vec<i64> = (1..=12).collect();
        assert_eq!(
            wrapped_values(&values),
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, \n11, 12"
        );
    }

    #[test]
    fn exactly_ten_values_end_with_a_break() {
        let values: Vec<i64> = (1..=10).collect();
        assert_eq!(wrapped_values(&values), "1, 2, 3, 4, 5, 6, 7, 8, 9, 10\n");
    }

    #[test]
    fn formatting_is_idempotent() {
        let values: Vec<i64> = (1..=25).collect();
        assert_eq!(wrapped_values(&values), wrapped_values(&values));
    }
}
