use crate::SrError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Fail on the first non-finite entry, naming `what` and its index.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), SrError> {
    match values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => Err(SrError::Domain { what, index, value }),
        None => Ok(()),
    }
}

pub fn ensure_non_empty<T>(values: &[T], what: &'static str) -> Result<(), SrError> {
    if values.is_empty() {
        Err(SrError::Empty { what })
    } else {
        Ok(())
    }
}

/// Fail unless `values` has exactly `expected` entries. Never truncates.
pub fn ensure_len<T>(values: &[T], expected: usize, what: &'static str) -> Result<(), SrError> {
    if values.len() != expected {
        return Err(SrError::Shape {
            what,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

/// Arithmetic mean of a non-empty slice.
pub fn mean(values: &[Real], what: &'static str) -> Result<Real, SrError> {
    ensure_non_empty(values, what)?;
    Ok(values.iter().sum::<Real>() / values.len() as Real)
}

/// Trapezoidal integral of `y` over the abscissa `x`.
///
/// `x` and `y` must have equal length; a single point integrates to zero.
pub fn trapezoid(x: &[Real], y: &[Real]) -> Result<Real, SrError> {
    ensure_non_empty(x, "integration abscissa")?;
    ensure_len(y, x.len(), "integrand")?;

    Ok(x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_all_finite_reports_index() {
        assert!(ensure_all_finite(&[1.0, 2.0], "obs").is_ok());
        let err = ensure_all_finite(&[1.0, Real::INFINITY, Real::NAN], "obs").unwrap_err();
        assert_eq!(
            err,
            SrError::Domain {
                what: "obs",
                index: 1,
                value: Real::INFINITY
            }
        );
    }

    #[test]
    fn ensure_len_reports_both_lengths() {
        let err = ensure_len(&[1.0, 2.0], 3, "vs").unwrap_err();
        assert_eq!(
            err,
            SrError::Shape {
                what: "vs",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn mean_of_empty_is_error() {
        assert!(mean(&[], "obs").unwrap_err().is_shape());
        assert_eq!(mean(&[1.0, 2.0, 3.0], "obs").unwrap(), 2.0);
    }

    #[test]
    fn trapezoid_is_exact_for_linear() {
        // integral of y = 2x over [0, 3] is 9
        let x = [0.0, 1.0, 2.5, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
        let tol = Tolerances::default();
        assert!(nearly_equal(trapezoid(&x, &y).unwrap(), 9.0, tol));
    }

    #[test]
    fn trapezoid_single_point_is_zero() {
        assert_eq!(trapezoid(&[5.0], &[7.0]).unwrap(), 0.0);
    }

    #[test]
    fn trapezoid_rejects_mismatch() {
        assert!(trapezoid(&[0.0, 1.0], &[1.0]).unwrap_err().is_shape());
    }
}
