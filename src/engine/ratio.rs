// ============================================================================
// Ratio Reducer
// Exact quantities -> smallest coprime integer ratio
// ============================================================================

use crate::domain::{MixError, MixResult, ReducedRatio};
use crate::numeric::{gcd, lcm, NumericError, Rational};
use smallvec::SmallVec;

/// Reduces non-negative rational quantities to a coprime integer ratio
///
/// # Example
/// ```text
/// Quantities: 92, 138
/// GCD:        46
/// Ratio:      2 : 3
///
/// Quantities: 25/2, 1/3
/// LCD:        6        -> 75, 2
/// Ratio:      75 : 2
/// ```
///
/// Zero terms stay in place, so `50, 0` reduces to `1 : 0`.
pub struct RatioReducer;

impl RatioReducer {
    /// Reduce `values` to a ratio.
    ///
    /// # Errors
    /// - `DegenerateRatio` if the sequence is empty or every term is zero
    /// - `InternalInvariant` if a term is negative
    /// - `Numeric(Overflow)` if the common denominator leaves u128
    pub fn reduce(values: &[Rational]) -> MixResult<ReducedRatio> {
        if let Some(negative) = values.iter().find(|v| v.is_negative()) {
            return Err(MixError::invariant(format!(
                "ratio term {} is negative",
                negative
            )));
        }

        // Scale every term to an integer over the least common denominator
        let common = values.iter().try_fold(1u128, |acc, v| {
            lcm(acc, v.denom().unsigned_abs()).ok_or(NumericError::Overflow)
        })?;

        let scaled = values
            .iter()
            .map(|v| {
                let factor = common / v.denom().unsigned_abs();
                v.numer()
                    .unsigned_abs()
                    .checked_mul(factor)
                    .ok_or(NumericError::Overflow)
            })
            .collect::<Result<SmallVec<[u128; 4]>, _>>()?;

        let divisor = scaled.iter().fold(0u128, |acc, t| gcd(acc, *t));
        if divisor == 0 {
            return Err(MixError::DegenerateRatio);
        }

        Ok(ReducedRatio::from_terms(
            scaled.into_iter().map(|t| t / divisor).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn int(v: i64) -> Rational {
        Rational::from_integer(v)
    }

    fn r(num: i128, den: i128) -> Rational {
        Rational::new(num, den).unwrap()
    }

    #[test]
    fn test_reduce_integers() {
        let ratio = RatioReducer::reduce(&[int(92), int(138)]).unwrap();
        assert_eq!(ratio.terms(), &[2, 3]);
        assert_eq!(ratio.to_string(), "2 : 3");
    }

    #[test]
    fn test_reduce_fractions() {
        // 62.5 : 37.5 -> 5 : 3
        let ratio = RatioReducer::reduce(&[r(125, 2), r(75, 2)]).unwrap();
        assert_eq!(ratio.to_string(), "5 : 3");

        // 25/2 : 1/3 -> 75 : 2
        let mixed = RatioReducer::reduce(&[r(25, 2), r(1, 3)]).unwrap();
        assert_eq!(mixed.terms(), &[75, 2]);
    }

    #[test]
    fn test_reduce_keeps_zero_terms() {
        let ratio = RatioReducer::reduce(&[int(50), int(0)]).unwrap();
        assert_eq!(ratio.to_string(), "1 : 0");

        let wide = RatioReducer::reduce(&[r(125, 2), int(0), r(75, 2)]).unwrap();
        assert_eq!(wide.to_string(), "5 : 0 : 3");
    }

    #[test]
    fn test_reduce_all_zero() {
        assert_eq!(
            RatioReducer::reduce(&[int(0), int(0)]),
            Err(MixError::DegenerateRatio)
        );
        assert_eq!(RatioReducer::reduce(&[]), Err(MixError::DegenerateRatio));
    }

    #[test]
    fn test_reduce_negative_is_invariant_violation() {
        let result = RatioReducer::reduce(&[int(3), int(-1)]);
        assert!(matches!(result, Err(MixError::InternalInvariant { .. })));
    }

    quickcheck! {
        fn prop_scaling_does_not_change_ratio(terms: Vec<u16>, factor: u8) -> TestResult {
            if factor == 0 || terms.iter().all(|t| *t == 0) {
                return TestResult::discard();
            }

            let base: Vec<Rational> = terms.iter().map(|t| int(i64::from(*t))).collect();
            let scaled: Vec<Rational> = terms
                .iter()
                .map(|t| r(i128::from(*t) * i128::from(factor), 7))
                .collect();

            let lhs = RatioReducer::reduce(&base).unwrap();
            let rhs = RatioReducer::reduce(&scaled).unwrap();
            TestResult::from_bool(lhs == rhs && lhs.is_coprime())
        }
    }
}
