//! Inverse-CDF transforms for shaping uniform samples.
//!
//! Both functions are defined on the open interval `(0, 1)` and silently
//! map everything else to `0.0`.  A caller therefore cannot distinguish a
//! genuine zero from a domain fallback; that ambiguity is inherited from
//! the sampling scheme and deliberately kept.

/// Logistic inverse CDF, `-ln(1/x - 1)`.
///
/// Symmetric around `x = 0.5` (which maps to exactly `0.0`) and divergent
/// toward both infinities at the interval ends.
#[inline]
#[must_use]
pub fn inverse_logistic(x: f64) -> f64 {
    if x > 0.0 && x < 1.0 {
        -(1.0 / x - 1.0).ln()
    } else {
        0.0
    }
}

/// Exponential inverse CDF, `-ln(x)`.  Nonnegative on its domain.
#[inline]
#[must_use]
pub fn inverse_exponential(x: f64) -> f64 {
    if x > 0.0 && x < 1.0 {
        -x.ln()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logistic_midpoint_is_zero() {
        assert_eq!(inverse_logistic(0.5), 0.0);
    }

    #[test]
    fn logistic_diverges_at_interval_ends() {
        assert!(inverse_logistic(1.0 - 1e-12) > 20.0);
        assert!(inverse_logistic(1e-12) < -20.0);
    }

    #[test]
    fn logistic_is_flat_outside_the_open_interval() {
        for x in [-1.0, 0.0, 1.0, 2.0, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(inverse_logistic(x), 0.0);
        }
        // NaN fails both domain comparisons and falls through too
        assert_eq!(inverse_logistic(f64::NAN), 0.0);
    }

    #[test]
    fn exponential_is_nonnegative_on_domain() {
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            assert!(inverse_exponential(x) >= 0.0);
        }
    }

    #[test]
    fn exponential_is_flat_outside_the_open_interval() {
        for x in [-0.5, 0.0, 1.0, 10.0, f64::NAN] {
            assert_eq!(inverse_exponential(x), 0.0);
        }
    }

    #[test]
    fn exponential_matches_closed_form() {
        assert!((inverse_exponential(0.25) - 4.0_f64.ln()).abs() < 1e-12);
    }
}
