//! Arbitrary-precision integers with an `i64` fast path.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

/// An integer of any size.
///
/// Values that fit in an `i64` are always stored as `Small`; the
/// constructors normalise, so two equal integers never differ in
/// representation when built through this API.
#[derive(Clone)]
pub enum Integer {
    Small(i64),
    Large(BigInt),
}

impl Integer {
    /// Build from a `BigInt`, using the small form when possible.
    pub fn from_bigint(n: BigInt) -> Self {
        match n.to_i64() {
            Some(small) => Integer::Small(small),
            None => Integer::Large(n),
        }
    }

    /// Parse unsigned `digits` in `radix`, negating if `negative`.
    ///
    /// Returns `None` if `digits` is empty or has a digit that is not
    /// valid in `radix`.
    pub fn from_digits(radix: u32, digits: &str, negative: bool) -> Option<Self> {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }

        // Fast path: accumulate in i64 and fall back on overflow.
        if let Ok(magnitude) = u64::from_str_radix(digits, radix) {
            let signed = if negative {
                0i64.checked_sub_unsigned(magnitude)
            } else {
                i64::try_from(magnitude).ok()
            };
            if let Some(n) = signed {
                return Some(Integer::Small(n));
            }
        }

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)?;
        Some(Self::from_bigint(if negative { -magnitude } else { magnitude }))
    }

    /// Parse an optionally negative decimal number.
    pub fn from_decimal(text: &str) -> Option<Self> {
        match text.strip_prefix('-') {
            Some(rest) => Self::from_digits(10, rest, true),
            None => Self::from_digits(10, text, false),
        }
    }

    pub fn is_small(&self) -> bool {
        matches!(self, Integer::Small(_))
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Small(n) => *n < 0,
            Integer::Large(n) => n.sign() == Sign::Minus,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Small(n) => *n == 0,
            Integer::Large(n) => n.is_zero(),
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Integer::Small(n) => Some(*n),
            Integer::Large(n) => n.to_i64(),
        }
    }

    pub fn to_bigint(&self) -> BigInt {
        match self {
            Integer::Small(n) => BigInt::from(*n),
            Integer::Large(n) => n.clone(),
        }
    }

    /// Render the magnitude in `radix` (lowercase digits), preceded by
    /// `-` if negative and by `prefix` after the sign.
    pub fn to_radix_string(&self, radix: u32, prefix: &str) -> String {
        let n = self.to_bigint();
        let magnitude = n.magnitude().to_str_radix(radix);
        if n.sign() == Sign::Minus {
            format!("-{}{}", prefix, magnitude)
        } else {
            format!("{}{}", prefix, magnitude)
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::Small(0)
    }
}

impl From<i64> for Integer {
    fn from(n: i64) -> Self {
        Integer::Small(n)
    }
}

impl From<i32> for Integer {
    fn from(n: i32) -> Self {
        Integer::Small(n.into())
    }
}

impl From<u32> for Integer {
    fn from(n: u32) -> Self {
        Integer::Small(n.into())
    }
}

impl From<u64> for Integer {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(small) => Integer::Small(small),
            Err(_) => Integer::Large(BigInt::from(n)),
        }
    }
}

impl From<usize> for Integer {
    fn from(n: usize) -> Self {
        Integer::from(n as u64)
    }
}

impl From<BigInt> for Integer {
    fn from(n: BigInt) -> Self {
        Integer::from_bigint(n)
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Small(a), Integer::Small(b)) => a.cmp(b),
            _ => self.to_bigint().cmp(&other.to_bigint()),
        }
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the normalised form so Eq and Hash agree.
        match self.to_i64() {
            Some(n) => n.hash(state),
            None => self.to_bigint().hash(state),
        }
    }
}

/// Decimal.
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Small(n) => write!(f, "{}", n),
            Integer::Large(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
