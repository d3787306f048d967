//! Text rendering of experiment results.
//!
//! Results print as a per-scheme table followed by two horizontal bar charts,
//! one for average collisions and one for average insertion time.

use alloc::string::String;

/// Renders `value` as a bar of at most `width` cells, scaled against `max`.
///
/// Bars use eighth-cell block characters, so small differences stay visible.
#[cfg_attr(not(any(feature = "experiment", feature = "stats")), allow(dead_code))]
pub(crate) fn bar(value: u128, max: u128, width: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let total_units = (width * 8) as u128;
    let units = value.min(max).saturating_mul(total_units).div_ceil(max).min(total_units) as usize;
    let full = units / 8;
    let rem = units % 8;

    let mut bar = "█".repeat(full);
    if rem > 0 {
        let ch = match rem {
            1 => '▏',
            2 => '▎',
            3 => '▍',
            4 => '▌',
            5 => '▋',
            6 => '▊',
            _ => '▉',
        };
        bar.push(ch);
    }
    bar
}

#[cfg(feature = "experiment")]
mod results {
    use core::fmt;

    use crate::experiment::ExperimentResults;
    use crate::experiment::SchemeSummary;

    const RULE: &str = "===================================================";
    const BAR_WIDTH: usize = 40;

    /// Fixed-point scale for bar lengths, in billionths.
    fn bar_units(value: f64) -> u128 {
        (value * 1e9) as u128
    }

    fn title(name: &str) -> impl fmt::Display + '_ {
        struct Title<'a>(&'a str);

        impl fmt::Display for Title<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut chars = self.0.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
                }
                Ok(())
            }
        }

        Title(name)
    }

    fn chart(
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        summaries: &[SchemeSummary],
        value: impl Fn(&SchemeSummary) -> Option<f64>,
        precision: usize,
    ) -> fmt::Result {
        writeln!(f, "{heading}")?;
        let max = summaries
            .iter()
            .filter_map(&value)
            .map(bar_units)
            .max()
            .unwrap_or(0);
        let label_width = summaries
            .iter()
            .map(|s| s.scheme().name().len())
            .max()
            .unwrap_or(0);

        for summary in summaries {
            let name = summary.scheme().name();
            match value(summary) {
                Some(v) => writeln!(
                    f,
                    "{name:>label_width$} | {} ({v:.precision$})",
                    super::bar(bar_units(v), max, BAR_WIDTH)
                )?,
                None => writeln!(f, "{name:>label_width$} | (no completed trials)")?,
            }
        }
        Ok(())
    }

    impl fmt::Display for ExperimentResults {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "{RULE}")?;
            writeln!(
                f,
                "Results: capacity {}, load factor {:.2} ({} keys), {} hashing, {} runs",
                self.capacity, self.load_factor, self.num_keys, self.hash_variant, self.runs
            )?;
            for summary in &self.summaries {
                writeln!(f, "{} probing:", title(summary.scheme().name()))?;
                match (summary.avg_collisions(), summary.avg_time()) {
                    (Some(collisions), Some(time)) => {
                        writeln!(f, "  Average collisions: {collisions:.2}")?;
                        writeln!(f, "  Average time: {:.4} s", time.as_secs_f64())?;
                    }
                    _ => writeln!(f, "  No completed trials")?,
                }
                if summary.skipped_trials() > 0 {
                    writeln!(
                        f,
                        "  Skipped trials (table full): {}",
                        summary.skipped_trials()
                    )?;
                }
            }
            writeln!(f, "{RULE}")?;
            writeln!(f)?;

            chart(f, "Average collisions", &self.summaries, SchemeSummary::avg_collisions, 2)?;
            writeln!(f)?;
            chart(
                f,
                "Average time (s)",
                &self.summaries,
                |s| s.avg_time().map(|t| t.as_secs_f64()),
                4,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(10, 10, 4), "████");
        assert_eq!(bar(5, 10, 4), "██");
        assert_eq!(bar(1, 16, 2), "▏");
        assert_eq!(bar(3, 8, 1), "▍");
    }

    #[test]
    fn partial_cells_round_up() {
        // A third of 16 eighths rounds up to 6.
        assert_eq!(bar(1, 3, 2), "▊");
        assert_eq!(bar(1, 1_000_000, 4), "▏");
        assert_eq!(bar(999_999, 1_000_000, 1), "█");
        assert_eq!(bar(20, 10, 2), "██");
    }

    #[test]
    fn empty_bars() {
        assert_eq!(bar(0, 10, 4), "");
        assert_eq!(bar(3, 0, 4), "");
    }

    #[test]
    #[cfg(feature = "experiment")]
    fn renders_every_scheme() {
        use crate::experiment::ExperimentConfig;
        use crate::experiment::run_experiment;

        let config = ExperimentConfig {
            capacity: 500,
            load_factor: 0.5,
            runs: 2,
            seed: Some(21),
            ..ExperimentConfig::default()
        };
        let results = run_experiment(&config).unwrap();
        let text = alloc::format!("{results}");

        assert!(text.contains("capacity 500, load factor 0.50 (250 keys), md5 hashing, 2 runs"));
        for heading in ["Linear probing:", "Quadratic probing:", "Cubic probing:"] {
            assert!(text.contains(heading), "{text}");
        }
        assert!(text.contains("Average collisions:"));
        assert!(text.contains("Average time (s)"));
        assert!(!text.contains("Skipped"));
    }
}
