//! Exact rationals for averaging run results.
//!
//! `Fraction` is either `Empty` (nothing accumulated yet) or a reduced `Ratio`.
//! Arithmetic returns new values and checks every integer operation, so an
//! accumulation either stays exact or reports `Overflow`.
//!
//! Invariants of `Ratio`
//! - `denom > 0`; the sign lives in the numerator.
//! - `gcd(numer, denom) == 1` (zero is stored as `0/1`).

use std::fmt;

use num_integer::Integer;

/// Errors from building or combining fractions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractionError {
    ZeroDenominator { numer: i64 },
    DivisionByZero,
    Overflow,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator { numer } => write!(f, "zero denominator for numerator {numer}"),
            Self::DivisionByZero => write!(f, "division by a zero fraction"),
            Self::Overflow => write!(f, "fraction arithmetic overflowed i64"),
        }
    }
}

impl std::error::Error for FractionError {}

/// Reduced rational `numer / denom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    numer: i64,
    denom: i64,
}

impl Ratio {
    /// Reduce and normalize the sign. Fails on a zero denominator.
    pub fn new(numer: i64, denom: i64) -> Result<Self, FractionError> {
        if denom == 0 {
            return Err(FractionError::ZeroDenominator { numer });
        }
        // A denominator of i64::MIN cannot be sign-normalized.
        if denom == i64::MIN {
            return Err(FractionError::Overflow);
        }
        let g = numer.gcd(&denom);
        let (mut n, mut d) = (numer / g, denom / g);
        if d < 0 {
            n = n.checked_neg().ok_or(FractionError::Overflow)?;
            d = d.checked_neg().ok_or(FractionError::Overflow)?;
        }
        Ok(Self { numer: n, denom: d })
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        self.numer
    }

    #[inline]
    pub fn denom(&self) -> i64 {
        self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Sum over the least common denominator.
    pub fn checked_add(&self, other: &Ratio) -> Result<Ratio, FractionError> {
        let lcm = (self.denom / self.denom.gcd(&other.denom))
            .checked_mul(other.denom)
            .ok_or(FractionError::Overflow)?;
        let lhs = self
            .numer
            .checked_mul(lcm / self.denom)
            .ok_or(FractionError::Overflow)?;
        let rhs = other
            .numer
            .checked_mul(lcm / other.denom)
            .ok_or(FractionError::Overflow)?;
        let numer = lhs.checked_add(rhs).ok_or(FractionError::Overflow)?;
        Ratio::new(numer, lcm)
    }

    /// Multiply by the reciprocal of `other`, cross-reducing first.
    pub fn checked_div(&self, other: &Ratio) -> Result<Ratio, FractionError> {
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(*self);
        }
        // gcd(MIN, MIN) is 2^63, which i64 cannot hold; the numerators cancel exactly.
        if self.numer == i64::MIN && other.numer == i64::MIN {
            return Ratio::new(other.denom, self.denom);
        }
        let gn = self.numer.gcd(&other.numer);
        let gd = self.denom.gcd(&other.denom);
        let numer = (self.numer / gn)
            .checked_mul(other.denom / gd)
            .ok_or(FractionError::Overflow)?;
        let denom = (self.denom / gd)
            .checked_mul(other.numer / gn)
            .ok_or(FractionError::Overflow)?;
        Ratio::new(numer, denom)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

/// Accumulator value: `Empty` before anything was added, else an exact ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Fraction {
    #[default]
    Empty,
    Value(Ratio),
}

impl Fraction {
    /// `(0, 0)` is the empty accumulator; any other zero denominator is an error.
    pub fn new(numer: i64, denom: i64) -> Result<Self, FractionError> {
        if numer == 0 && denom == 0 {
            return Ok(Fraction::Empty);
        }
        Ratio::new(numer, denom).map(Fraction::Value)
    }

    #[inline]
    pub fn empty() -> Self {
        Fraction::Empty
    }

    /// Whole number `n/1`.
    #[inline]
    pub fn whole(n: i64) -> Self {
        Fraction::Value(Ratio { numer: n, denom: 1 })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Fraction::Empty)
    }

    #[inline]
    pub fn ratio(&self) -> Option<Ratio> {
        match self {
            Fraction::Empty => None,
            Fraction::Value(r) => Some(*r),
        }
    }

    #[inline]
    pub fn numer(&self) -> Option<i64> {
        self.ratio().map(|r| r.numer)
    }

    #[inline]
    pub fn denom(&self) -> Option<i64> {
        self.ratio().map(|r| r.denom)
    }

    /// Decimal value; `None` for `Empty`.
    #[inline]
    pub fn to_f64(&self) -> Option<f64> {
        self.ratio().map(|r| r.to_f64())
    }

    /// `Empty` is the identity on both sides.
    pub fn add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        match (self, other) {
            (_, Fraction::Empty) => Ok(*self),
            (Fraction::Empty, _) => Ok(*other),
            (Fraction::Value(a), Fraction::Value(b)) => a.checked_add(b).map(Fraction::Value),
        }
    }

    /// Dividing `Empty` stays `Empty`; dividing by `Empty` or zero is an error.
    pub fn divide(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        match (self, other) {
            (_, Fraction::Empty) => Err(FractionError::DivisionByZero),
            (Fraction::Empty, _) => Ok(Fraction::Empty),
            (Fraction::Value(a), Fraction::Value(b)) => a.checked_div(b).map(Fraction::Value),
        }
    }
}

impl From<Ratio> for Fraction {
    fn from(r: Ratio) -> Self {
        Fraction::Value(r)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fraction::Empty => write!(f, "empty"),
            Fraction::Value(r) => r.fmt(f),
        }
    }
}

/// Sum the values and divide by how many there were. An empty input gives `Empty`.
pub fn average<'a, I>(values: I) -> Result<Fraction, FractionError>
where
    I: IntoIterator<Item = &'a Fraction>,
{
    let mut sum = Fraction::Empty;
    let mut count: i64 = 0;
    for v in values {
        sum = sum.add(v)?;
        count = count.checked_add(1).ok_or(FractionError::Overflow)?;
    }
    if count == 0 {
        return Ok(Fraction::Empty);
    }
    sum.divide(&Fraction::whole(count))
}
