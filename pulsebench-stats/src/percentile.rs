//! Rank-Based Percentile Computation
//!
//! Deterministic integer rank statistic, not a strict nearest-rank
//! percentile: even-sized sets average the two elements straddling the rank
//! when the rank is not within the last two positions. Reproducible across
//! runs by construction (pure integer arithmetic).

/// Compute the `pcnt`-th percentile of an ascending-sorted slice.
///
/// Rank rule: `i = pcnt * n / 100`. For an even `n` with `i < n - 2` the
/// result is the integer average of the elements at `i` and `i + 1`;
/// otherwise it is the element at `i`. A single-element slice yields that
/// element; an empty slice yields 0.
///
/// The slice must already be sorted ascending.
pub fn percentile(sorted: &[i64], pcnt: usize) -> i64 {
    let n = sorted.len();
    match n {
        0 => 0,
        1 => sorted[0],
        _ => {
            let i = pcnt * n / 100;
            if n % 2 == 0 && i < n - 2 {
                (sorted[i] + sorted[i + 1]) / 2
            } else {
                sorted[i]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(percentile(&[], 50), 0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(percentile(&[42], 50), 42);
        assert_eq!(percentile(&[42], 99), 42);
    }

    #[test]
    fn test_even_size_averages_interior_rank() {
        // n = 10, p50: i = 5, interior -> average of elements 5 and 6
        let sorted = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert_eq!(percentile(&sorted, 50), (6 + 7) / 2);
    }

    #[test]
    fn test_even_size_tail_rank_not_averaged() {
        // n = 10, p90: i = 9 is within the last two positions
        let sorted = [1, 2, 3, 4, 5, 6, 7, 8, 9, 100];
        assert_eq!(percentile(&sorted, 90), 100);
    }

    #[test]
    fn test_odd_size_direct_rank() {
        let sorted = [10, 20, 30, 40, 50];
        assert_eq!(percentile(&sorted, 50), 30);
        assert_eq!(percentile(&sorted, 90), 50);
    }

    #[test]
    fn test_average_uses_integer_division() {
        // n = 6, p50: i = 3, interior -> (3 + 4) / 2 truncates to 3
        let sorted = [0, 1, 2, 3, 4, 5];
        assert_eq!(percentile(&sorted, 50), 3);
    }

    #[test]
    fn test_percentiles_ordered() {
        let sorted: Vec<i64> = (1..=100).collect();
        let p50 = percentile(&sorted, 50);
        let p90 = percentile(&sorted, 90);
        let p95 = percentile(&sorted, 95);
        let p99 = percentile(&sorted, 99);
        assert!(p50 <= p90 && p90 <= p95 && p95 <= p99);
    }
}
