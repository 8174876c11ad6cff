// ============================================================================
// Rational Value
// Exact fractions for feasibility and ratio decisions
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Exact rational number.
///
/// Always stored in lowest terms with a strictly positive denominator, so
/// structural equality and hashing agree with numeric equality.
///
/// Decimal input such as `"85.5"` becomes `855/10`, reduced to `171/2`.
/// Nothing in this type rounds; the only lossy step is
/// [`Rational::round_to_decimal`], which is meant for display.
///
/// # Example
/// ```
/// use mixture_solver::numeric::Rational;
///
/// let a: Rational = "0.1".parse().unwrap();
/// let b: Rational = "0.2".parse().unwrap();
/// let c: Rational = "0.3".parse().unwrap();
/// assert_eq!(a.checked_add(b).unwrap(), c);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

// ============================================================================
// Integer Helpers
// ============================================================================

/// Greatest common divisor (Euclidean algorithm). `gcd(0, 0) == 0`.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple, `None` on overflow. `lcm(0, x) == 0`.
pub fn lcm(a: u128, b: u128) -> Option<u128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Convert a magnitude and sign back into an i128.
fn signed(magnitude: u128, negative: bool) -> NumericResult<i128> {
    const MIN_MAGNITUDE: u128 = 1u128 << 127;

    if negative {
        if magnitude == MIN_MAGNITUDE {
            Ok(i128::MIN)
        } else {
            i128::try_from(magnitude)
                .map(|v| -v)
                .map_err(|_| NumericError::Overflow)
        }
    } else {
        i128::try_from(magnitude).map_err(|_| NumericError::Overflow)
    }
}

impl Rational {
    /// Zero (0/1)
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// One (1/1)
    pub const ONE: Self = Self { num: 1, den: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction, reduced to lowest terms.
    ///
    /// # Errors
    /// - `DivisionByZero` if `den` is zero
    /// - `Overflow` if the reduced denominator does not fit in i128
    pub fn new(num: i128, den: i128) -> NumericResult<Self> {
        if den == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        let n = num.unsigned_abs() / g;
        let d = den.unsigned_abs() / g;
        let negative = n != 0 && ((num < 0) != (den < 0));

        Ok(Self {
            num: signed(n, negative)?,
            den: signed(d, false)?,
        })
    }

    /// Create from an integer value.
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self {
            num: value as i128,
            den: 1,
        }
    }

    /// Convert from rust_decimal::Decimal without losing any digit.
    ///
    /// The mantissa is placed over `10^scale` and reduced.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let den = 10i128
            .checked_pow(d.scale())
            .ok_or(NumericError::Overflow)?;
        Self::new(d.mantissa(), den)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator (carries the sign).
    #[inline]
    pub const fn numer(self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn denom(self) -> i128 {
        self.den
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.num > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// True when the value is a whole number.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// Works over the least common denominator to keep intermediates small.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let g = gcd(self.den.unsigned_abs(), rhs.den.unsigned_abs()) as i128;
        let lhs_factor = rhs.den / g;
        let rhs_factor = self.den / g;

        let den = self
            .den
            .checked_mul(lhs_factor)
            .ok_or(NumericError::Overflow)?;
        let num = self
            .num
            .checked_mul(lhs_factor)
            .and_then(|a| rhs.num.checked_mul(rhs_factor).and_then(|b| a.checked_add(b)))
            .ok_or(NumericError::Overflow)?;

        Self::new(num, den)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(rhs.checked_neg()?)
    }

    /// Checked multiplication.
    ///
    /// Cross-reduces before multiplying so that `(a/b)·(b/a)` never overflows.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }

        let g1 = gcd(self.num.unsigned_abs(), rhs.den.unsigned_abs()) as i128;
        let g2 = gcd(rhs.num.unsigned_abs(), self.den.unsigned_abs()) as i128;

        let num = (self.num / g1)
            .checked_mul(rhs.num / g2)
            .ok_or(NumericError::Overflow)?;
        let den = (self.den / g2)
            .checked_mul(rhs.den / g1)
            .ok_or(NumericError::Overflow)?;

        Self::new(num, den)
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.checked_mul(rhs.recip()?)
    }

    /// Multiplicative inverse.
    pub fn recip(self) -> NumericResult<Self> {
        Self::new(self.den, self.num)
    }

    /// Checked negation (fails only for a numerator of i128::MIN).
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.num
            .checked_neg()
            .map(|num| Self { num, den: self.den })
            .ok_or(NumericError::Overflow)
    }

    /// Sum of a sequence of values.
    pub fn checked_sum<'a, I>(values: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = &'a Rational>,
    {
        values
            .into_iter()
            .try_fold(Self::ZERO, |acc, v| acc.checked_add(*v))
    }

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    // ========================================================================
    // Lossy Conversion (display only)
    // ========================================================================

    /// Round to `decimals` places, half away from zero.
    ///
    /// The resulting Decimal keeps exactly `decimals` places of scale, so
    /// `92` rounded to 2 places prints as `"92.00"`.
    pub fn round_to_decimal(self, decimals: u32) -> NumericResult<Decimal> {
        let scale = 10i128
            .checked_pow(decimals)
            .ok_or(NumericError::Overflow)?;
        let scaled = self.num.checked_mul(scale).ok_or(NumericError::Overflow)?;

        let mut quotient = scaled / self.den;
        let remainder = scaled % self.den;
        if remainder.unsigned_abs() * 2 >= self.den.unsigned_abs() {
            quotient += scaled.signum();
        }

        Decimal::try_from_i128_with_scale(quotient, decimals).map_err(|_| NumericError::Overflow)
    }

    /// Approximate floating-point value, for JSON output.
    pub fn to_f64(self) -> f64 {
        match self.round_to_decimal(12).ok().and_then(|d| d.to_f64()) {
            Some(v) => v,
            None => self.num as f64 / self.den as f64,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Exact ordering that cannot overflow.
    ///
    /// Cross-multiplies when that fits in i128, otherwise compares integer
    /// parts and then the fractional parts through their reciprocals.
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(l), Some(r)) = (
            self.num.checked_mul(other.den),
            other.num.checked_mul(self.den),
        ) {
            return l.cmp(&r);
        }

        let qa = self.num.div_euclid(self.den);
        let qb = other.num.div_euclid(other.den);
        if qa != qb {
            return qa.cmp(&qb);
        }

        // Both fractional parts lie in [0, 1)
        let mut a = (self.num.rem_euclid(self.den), self.den);
        let mut b = (other.num.rem_euclid(other.den), other.den);
        loop {
            if a.0 == 0 || b.0 == 0 {
                return (a.0 != 0).cmp(&(b.0 != 0));
            }
            let ia = a.1 / a.0;
            let ib = b.1 / b.0;
            if ia != ib {
                return ib.cmp(&ia);
            }
            (a, b) = ((b.1 % b.0, b.0), (a.1 % a.0, a.0));
        }
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl TryFrom<Decimal> for Rational {
    type Error = NumericError;

    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(d)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Rational {
    type Err = NumericError;

    /// Parse from a decimal string as typed by a user.
    ///
    /// # Examples
    /// - "85" -> 85
    /// - "85.5" -> 171/2
    /// - "85,5" -> 171/2 (comma as decimal separator)
    /// - "1e2" -> 100
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let normalized: Cow<'_, str> = if s.contains(',') && !s.contains('.') {
            Cow::Owned(s.replacen(',', ".", 1))
        } else {
            Cow::Borrowed(s)
        };

        let decimal = normalized
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&normalized))
            .map_err(|_| NumericError::InvalidInput)?;

        Self::from_decimal(decimal)
    }
}

// ============================================================================
// Tests
// ============================================================================
