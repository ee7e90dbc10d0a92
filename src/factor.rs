//! Length factorization.
//!
//! Splits a transform length into the ordered radix list driving the butterfly
//! cascade. Small radices come first; whatever cannot be split further by a
//! candidate no larger than its square root is appended as the final radix.

use alloc::vec::Vec;

/// Next divisor to try after `candidate`: 4, 2, 3, 5, 7, 9, ...
#[inline]
fn next_candidate(candidate: usize) -> usize {
    match candidate {
        4 => 2,
        2 => 3,
        c => c + 2,
    }
}

/// Factor `n` into an ordered list of radices whose product is `n`.
///
/// The scan starts at 4 and then walks 2, 3 and the odd numbers upward while
/// `candidate² ≤ remaining`. A candidate that divides the remainder is
/// appended and divided out, and is retried before moving on. The remainder
/// left when the scan stops becomes the last radix.
///
/// `0` factors to an empty list; `1` and primes factor to `[n]`.
pub fn factorize(n: usize) -> Vec<usize> {
    let mut radices = Vec::new();
    if n == 0 {
        return radices;
    }
    let mut rest = n;
    let mut candidate = 4usize;
    while candidate <= rest / candidate {
        if rest % candidate == 0 {
            radices.push(candidate);
            rest /= candidate;
        } else {
            candidate = next_candidate(candidate);
        }
    }
    radices.push(rest);
    radices
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_zero_is_empty() {
        assert!(factorize(0).is_empty());
    }

    #[test]
    fn test_one_and_primes_are_single_radix() {
        assert_eq!(factorize(1), vec![1]);
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(7), vec![7]);
        assert_eq!(factorize(97), vec![97]);
    }

    #[test]
    fn test_small_composites_stay_whole() {
        // 4² > 8, so the scan never starts.
        assert_eq!(factorize(4), vec![4]);
        assert_eq!(factorize(8), vec![8]);
        assert_eq!(factorize(9), vec![9]);
        assert_eq!(factorize(15), vec![15]);
    }

    #[test]
    fn test_discovery_order() {
        assert_eq!(factorize(16), vec![4, 4]);
        assert_eq!(factorize(60), vec![4, 15]);
        assert_eq!(factorize(64), vec![4, 4, 4]);
        assert_eq!(factorize(128), vec![4, 4, 8]);
        assert_eq!(factorize(360), vec![4, 2, 3, 3, 5]);
        assert_eq!(factorize(343), vec![7, 7, 7]);
        assert_eq!(factorize(1000), vec![4, 2, 5, 5, 5]);
    }

    #[test]
    fn test_product_matches_length() {
        for n in 1..2048usize {
            let radices = factorize(n);
            assert_eq!(radices.iter().product::<usize>(), n, "n = {n}");
            assert!(radices.iter().all(|&r| r > 1) || n == 1, "n = {n}");
        }
    }

    #[test]
    fn test_largest_lengths_do_not_overflow() {
        assert_eq!(
            factorize(usize::MAX),
            if cfg!(target_pointer_width = "64") {
                vec![3, 5, 17, 257, 641, 65537, 6700417]
            } else {
                vec![3, 5, 17, 257, 65537]
            }
        );
    }

    // Trial division runs up to 2^32 here; slow in debug builds.
    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_largest_prime_is_single_radix() {
        let p = 18_446_744_073_709_551_557usize;
        assert_eq!(factorize(p), vec![p]);
    }
}
