/// `n` evenly spaced values over `[start, end]`, both endpoints included.
///
/// `n == 0` gives an empty vector and `n == 1` gives `[start]`. The last
/// sample is pinned to `end` so it is exact regardless of accumulated rounding.
/// A reversed or empty range is not rejected: `start > end` yields a
/// descending sequence and `start == end` a constant one.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let xs = linspace(80.0, 120.0, 10);
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 80.0);
        assert_eq!(xs[9], 120.0);

        let step = 40.0 / 9.0;
        for w in xs.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_linspace_degenerate_ranges_pass_through() {
        assert_eq!(linspace(5.0, 5.0, 3), vec![5.0, 5.0, 5.0]);

        let reversed = linspace(2.0, 1.0, 3);
        assert_eq!(reversed, vec![2.0, 1.5, 1.0]);
    }
}
