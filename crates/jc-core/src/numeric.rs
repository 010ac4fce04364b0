use crate::JcError;

pub type Real = f64;

/// Absolute and relative bounds for float comparison. `abs` handles values
/// near zero, `rel` everything else.
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
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, JcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(JcError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, JcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(JcError::NonPositive { what, value: v })
    }
}

/// Efficiencies and similar fractions live in (0, 1].
pub fn ensure_unit_fraction(v: Real, what: &'static str) -> Result<Real, JcError> {
    let v = ensure_positive(v, what)?;
    if v <= 1.0 {
        Ok(v)
    } else {
        Err(JcError::InvalidArg { what })
    }
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
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1e-9, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(JcError::NonPositive { .. })
        ));
        assert!(ensure_positive(-3.0, "x").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "x"),
            Err(JcError::NonFinite { .. })
        ));
    }

    #[test]
    fn unit_fraction_bounds() {
        assert!(ensure_unit_fraction(1.0, "eta").is_ok());
        assert!(ensure_unit_fraction(0.5, "eta").is_ok());
        assert!(ensure_unit_fraction(0.0, "eta").is_err());
        assert!(ensure_unit_fraction(1.0 + 1e-9, "eta").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
