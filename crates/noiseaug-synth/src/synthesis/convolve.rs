//! Convolution and filtering primitives used by the noise generators.

/// Full linear convolution. Output length is `x.len() + h.len() - 1`,
/// or zero if either input is empty.
pub fn convolve_full(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0.0; x.len() + h.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &hj) in h.iter().enumerate() {
            out[i + j] += xi * hj;
        }
    }
    out
}

/// Same-mode convolution of `x` with a rectangular window of `window` ones.
///
/// Output has `x.len()` samples taken from the full convolution starting at
/// offset `(window - 1) / 2`. Computed from prefix sums in O(n) regardless
/// of the window length; the window may be longer than `x`.
pub fn moving_sum_same(x: &[f64], window: usize) -> Vec<f64> {
    let n = x.len();
    if n == 0 || window == 0 {
        return vec![0.0; n];
    }

    let mut prefix = Vec::with_capacity(n + 1);
    let mut running = 0.0;
    prefix.push(running);
    for &sample in x {
        running += sample;
        prefix.push(running);
    }

    let offset = (window - 1) / 2;
    (0..n)
        .map(|i| {
            // full[k] sums x[k + 1 - window ..= k], clipped to the signal.
            let k = i + offset;
            let hi = k.min(n - 1);
            let lo = (k + 1).saturating_sub(window);
            prefix[hi + 1] - prefix[lo]
        })
        .collect()
}

/// Applies a rational transfer function `B(z) / A(z)` to `x`.
///
/// Direct form I: `y[n] = (sum b[k]x[n-k] - sum_{k>=1} a[k]y[n-k]) / a[0]`.
/// `a` must be non-empty with a non-zero leading coefficient.
pub fn lfilter(b: &[f64], a: &[f64], x: &[f64]) -> Vec<f64> {
    let a0 = a[0];
    let mut y = vec![0.0; x.len()];

    for n in 0..x.len() {
        let mut acc = 0.0;
        for (k, &bk) in b.iter().enumerate() {
            if k > n {
                break;
            }
            acc += bk * x[n - k];
        }
        for (k, &ak) in a.iter().enumerate().skip(1) {
            if k > n {
                break;
            }
            acc -= ak * y[n - k];
        }
        y[n] = acc / a0;
    }

    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
        }
    }

    #[test]
    fn test_convolve_full() {
        let out = convolve_full(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
        assert_close(&out, &[0.0, 1.0, 2.5, 4.0, 1.5]);
    }

    #[test]
    fn test_convolve_full_empty() {
        assert!(convolve_full(&[], &[1.0]).is_empty());
        assert!(convolve_full(&[1.0], &[]).is_empty());
    }

    #[test]
    fn test_moving_sum_odd_window() {
        let out = moving_sum_same(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_close(&out, &[3.0, 6.0, 9.0, 12.0, 9.0]);
    }

    #[test]
    fn test_moving_sum_even_window() {
        let out = moving_sum_same(&[1.0, 2.0, 3.0, 4.0, 5.0], 4);
        assert_close(&out, &[3.0, 6.0, 10.0, 14.0, 12.0]);
    }

    #[test]
    fn test_moving_sum_matches_direct_convolution() {
        let x: Vec<f64> = (0..37).map(|i| ((i * 7919) % 23) as f64 - 11.0).collect();
        for window in [1, 2, 5, 16, 36, 37, 50, 120] {
            let full = convolve_full(&x, &vec![1.0; window]);
            let offset = (window - 1) / 2;
            let expected = &full[offset..offset + x.len()];
            assert_close(&moving_sum_same(&x, window), expected);
        }
    }

    #[test]
    fn test_moving_sum_window_much_longer_than_signal() {
        let x = [1.0, -2.0, 4.0];
        let out = moving_sum_same(&x, 1000);
        assert_close(&out, &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_lfilter_fir_matches_convolution() {
        let x = [1.0, 0.0, -1.0, 2.0, 0.5];
        let b = [0.5, 0.25];
        let y = lfilter(&b, &[1.0], &x);
        let full = convolve_full(&x, &b);
        assert_close(&y, &full[..x.len()]);
    }

    #[test]
    fn test_lfilter_one_pole() {
        // y[n] = x[n] + 0.5 y[n-1]; impulse response is 0.5^n.
        let y = lfilter(&[1.0], &[1.0, -0.5], &[1.0, 0.0, 0.0, 0.0]);
        assert_close(&y, &[1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_lfilter_normalizes_by_a0() {
        let y = lfilter(&[2.0], &[2.0], &[1.0, 3.0]);
        assert_close(&y, &[1.0, 3.0]);
    }
}
