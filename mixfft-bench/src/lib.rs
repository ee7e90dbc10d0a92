//! Shared inputs for the mixfft benchmarks.

use mixfft::Complex64;

/// Default lengths: powers of two, products of small primes, and primes.
pub const DEFAULT_SIZES: &[usize] = &[64, 97, 360, 1000, 1009, 1024, 4096, 4913, 10007, 65536];

/// Parse a comma separated list such as `"60,128,1009"`. Unparsable entries
/// are skipped; an absent or empty list falls back to [`DEFAULT_SIZES`].
pub fn sizes_from(list: Option<&str>) -> Vec<usize> {
    let parsed: Vec<usize> = list
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if parsed.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        parsed
    }
}

/// Deterministic complex signal of length `n`.
pub fn signal(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Complex64::new((t * 0.37).sin() + 0.25, (t * 0.11).cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_size_lists() {
        assert_eq!(sizes_from(Some("60, 128,x,1009")), vec![60, 128, 1009]);
        assert_eq!(sizes_from(Some("")), DEFAULT_SIZES.to_vec());
        assert_eq!(sizes_from(None), DEFAULT_SIZES.to_vec());
    }

    #[test]
    fn signal_has_requested_length() {
        assert_eq!(signal(17).len(), 17);
    }
}
