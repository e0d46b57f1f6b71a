// Byte-count formatting with SI (powers of 1000) prefixes.

const UNIT: u64 = 1000;
const PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

/// Render a byte count as a short human readable string, e.g. `1.5 MB`.
///
/// Values below 1000 are printed as-is (`999 B`); larger values get one
/// decimal place and the largest prefix that keeps the integer part
/// below 1000.
pub fn human_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Same as [`human_size`] for sizes the API reports as signed integers.
/// Negative values are clamped to zero.
pub fn human_size_signed(bytes: i64) -> String {
    human_size(u64::try_from(bytes).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_are_plain_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1), "1 B");
        assert_eq!(human_size(999), "999 B");
    }

    #[test]
    fn thousand_switches_to_kilo() {
        assert_eq!(human_size(1000), "1.0 kB");
        assert_eq!(human_size(1500), "1.5 kB");
    }

    #[test]
    fn larger_prefixes() {
        assert_eq!(human_size(1_500_000), "1.5 MB");
        assert_eq!(human_size(2_000_000_000), "2.0 GB");
        assert_eq!(human_size(3_200_000_000_000), "3.2 TB");
        assert_eq!(human_size(1_000_000_000_000_000), "1.0 PB");
        assert_eq!(human_size(u64::MAX), "18.4 EB");
    }

    #[test]
    fn integer_quotient_picks_the_prefix() {
        // 999_999 / 1000 = 999, so this stays in kB even though it rounds up
        assert_eq!(human_size(999_999), "1000.0 kB");
    }

    #[test]
    fn negative_signed_sizes_clamp_to_zero() {
        assert_eq!(human_size_signed(-42), "0 B");
        assert_eq!(human_size_signed(1_500_000), "1.5 MB");
    }
}
