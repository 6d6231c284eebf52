//! Double-double extended precision.
//!
//! A [`DoubleDouble`] is the unevaluated sum `hi + lo` of two `f64` with
//! `|lo| <= ulp(hi) / 2`, which carries about 106 significant bits. All
//! arithmetic is built on the error-free transforms of Dekker and Knuth
//! (`two_sum`, `two_prod`), following the QD library algorithms.
//!
//! The type is the crate's "extended precision" tier: every polylogarithm
//! and Clausen function is generic over [`PolylogFloat`](crate::PolylogFloat),
//! which is implemented for `f64` and for `DoubleDouble`.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

mod elementary;
mod float;
mod fmt;

/// A floating-point number represented as the sum of two `f64`.
///
/// The layout is `#[repr(C)]` so the value can cross the C adapter as a
/// pair of doubles.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct DoubleDouble {
    /// Leading component, the value rounded to `f64`.
    pub hi: f64,
    /// Trailing component, the rounding error of `hi`.
    pub lo: f64,
}

/// `2^27 + 1`, splits an `f64` into two 26-bit halves.
#[cfg(not(feature = "std"))]
const SPLITTER: f64 = 134217729.0;
/// Above this magnitude `SPLITTER * a` would overflow.
#[cfg(not(feature = "std"))]
const SPLIT_THRESHOLD: f64 = 6.69692879491417e+299;

pub(crate) const PI: DoubleDouble = DoubleDouble::new(3.141592653589793, 1.2246467991473532e-16);
pub(crate) const FRAC_PI_2: DoubleDouble =
    DoubleDouble::new(1.5707963267948966, 6.123233995736766e-17);
pub(crate) const FRAC_PI_4: DoubleDouble =
    DoubleDouble::new(0.7853981633974483, 3.061616997868383e-17);
pub(crate) const FRAC_3PI_4: DoubleDouble =
    DoubleDouble::new(2.356194490192345, 9.184850993605148e-17);
pub(crate) const LN_2: DoubleDouble = DoubleDouble::new(0.6931471805599453, 2.3190468138462996e-17);
pub(crate) const LN_10: DoubleDouble =
    DoubleDouble::new(2.302585092994046, -2.1707562233822494e-16);

impl DoubleDouble {
    /// 0
    pub const ZERO: DoubleDouble = DoubleDouble::new(0.0, 0.0);
    /// 1
    pub const ONE: DoubleDouble = DoubleDouble::new(1.0, 0.0);
    /// `2^-104`, the spacing of double-double values around 1.
    pub const EPSILON: DoubleDouble = DoubleDouble::new(4.930380657631324e-32, 0.0);
    /// Largest finite value.
    pub const MAX: DoubleDouble = DoubleDouble::new(f64::MAX, 0.0);
    /// Smallest finite value.
    pub const MIN: DoubleDouble = DoubleDouble::new(f64::MIN, 0.0);
    /// Smallest positive normal value.
    pub const MIN_POSITIVE: DoubleDouble = DoubleDouble::new(f64::MIN_POSITIVE, 0.0);
    /// Not a number.
    pub const NAN: DoubleDouble = DoubleDouble::new(f64::NAN, f64::NAN);
    /// Positive infinity.
    pub const INFINITY: DoubleDouble = DoubleDouble::new(f64::INFINITY, 0.0);
    /// Negative infinity.
    pub const NEG_INFINITY: DoubleDouble = DoubleDouble::new(f64::NEG_INFINITY, 0.0);

    /// Builds a value from its two components.
    ///
    /// The caller is responsible for `|lo| <= ulp(hi) / 2`; use
    /// [`DoubleDouble::from_sum`] to normalize an arbitrary pair.
    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        DoubleDouble { hi, lo }
    }

    /// Exact conversion from `f64`.
    #[inline]
    pub const fn from_f64(x: f64) -> Self {
        DoubleDouble { hi: x, lo: 0.0 }
    }

    /// The exact sum `a + b`, normalized.
    #[inline]
    pub fn from_sum(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, b);
        DoubleDouble { hi, lo }
    }

    /// The exact product `a * b`, normalized.
    #[inline]
    pub fn from_product(a: f64, b: f64) -> Self {
        let (hi, lo) = two_prod(a, b);
        DoubleDouble { hi, lo }
    }

    /// Exact conversion from `i64`.
    pub fn from_i64(i: i64) -> Self {
        let hi = i as f64;
        let lo = (i as i128 - hi as i128) as f64;
        DoubleDouble { hi, lo }
    }

    /// Exact conversion from `u64`.
    pub fn from_u64(u: u64) -> Self {
        let hi = u as f64;
        let lo = (u as i128 - hi as i128) as f64;
        DoubleDouble { hi, lo }
    }

    /// Rounds to the nearest `f64`.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        self.hi
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite()
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    #[inline]
    pub fn is_sign_positive(self) -> bool {
        self.hi.is_sign_positive()
    }

    /// `self * self`, slightly cheaper than the general product.
    #[inline]
    pub fn sqr(self) -> Self {
        let (p1, p2) = two_prod(self.hi, self.hi);
        if p1 == 0.0 || !p1.is_finite() {
            return Self::from_f64(p1);
        }
        let p2 = p2 + 2.0 * self.hi * self.lo + self.lo * self.lo;
        let (hi, lo) = quick_two_sum(p1, p2);
        DoubleDouble { hi, lo }
    }

    /// `1 / self`.
    #[inline]
    pub fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Multiplies by a power of two `p`; exact unless the result leaves the
    /// normal range.
    #[inline]
    pub(crate) fn mul_pow2(self, p: f64) -> Self {
        DoubleDouble {
            hi: self.hi * p,
            lo: self.lo * p,
        }
    }

    /// `self * 2^e`.
    pub(crate) fn ldexp(self, e: i32) -> Self {
        let mut x = self;
        let mut e = e;
        while e > 1023 {
            x = x.mul_pow2(pow2(1023));
            e -= 1023;
        }
        while e < -1022 {
            x = x.mul_pow2(pow2(-1022));
            e += 1022;
        }
        x.mul_pow2(pow2(e))
    }

    #[inline]
    fn add_f64(self, b: f64) -> Self {
        let (s1, s2) = two_sum(self.hi, b);
        if !s1.is_finite() {
            return Self::from_f64(s1);
        }
        let (hi, lo) = quick_two_sum(s1, s2 + self.lo);
        if hi == 0.0 {
            return Self::from_f64(self.hi + b);
        }
        DoubleDouble { hi, lo }
    }

    #[inline]
    fn mul_f64(self, b: f64) -> Self {
        let (p1, p2) = two_prod(self.hi, b);
        if p1 == 0.0 || !p1.is_finite() {
            return Self::from_f64(p1);
        }
        let (hi, lo) = quick_two_sum(p1, p2 + self.lo * b);
        DoubleDouble { hi, lo }
    }
}

/// `2^e` for `-1022 <= e <= 1023`.
#[inline]
fn pow2(e: i32) -> f64 {
    f64::from_bits(((e + 1023) as u64) << 52)
}

/// `a + b = s + e` exactly, for any `a`, `b`.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// `a + b = s + e` exactly, requires `|a| >= |b|`.
#[inline]
pub(crate) fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// `a * b = p + e` exactly.
#[cfg(feature = "std")]
#[inline]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

/// `a * b = p + e` exactly, by Dekker's splitting.
#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
    (p, e)
}

/// Splits `a` into two non-overlapping 26-bit halves.
#[cfg(not(feature = "std"))]
#[inline]
fn split(a: f64) -> (f64, f64) {
    if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
        let a = a * 3.725290298461914e-09; // 2^-28
        let t = SPLITTER * a;
        let hi = t - (t - a);
        let lo = a - hi;
        (hi * 268435456.0, lo * 268435456.0) // 2^28
    } else {
        let t = SPLITTER * a;
        let hi = t - (t - a);
        (hi, a - hi)
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn neg(self) -> DoubleDouble {
        DoubleDouble {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        if !s1.is_finite() {
            return Self::from_f64(s1);
        }
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let (s1, s2) = quick_two_sum(s1, s2 + t1);
        let (hi, lo) = quick_two_sum(s1, s2 + t2);
        if hi == 0.0 {
            // exact cancellation keeps the IEEE sign of zero
            return Self::from_f64(self.hi + rhs.hi);
        }
        DoubleDouble { hi, lo }
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        let (p1, p2) = two_prod(self.hi, rhs.hi);
        if p1 == 0.0 || !p1.is_finite() {
            return Self::from_f64(p1);
        }
        let p2 = p2 + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = quick_two_sum(p1, p2);
        DoubleDouble { hi, lo }
    }
}

impl Div for DoubleDouble {
    type Output = DoubleDouble;

    /// Long division with three partial quotients.
    #[inline]
    fn div(self, rhs: DoubleDouble) -> DoubleDouble {
        let q1 = self.hi / rhs.hi;
        if q1 == 0.0 || !q1.is_finite() {
            return Self::from_f64(q1);
        }
        let r = self - rhs.mul_f64(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs.mul_f64(q2);
        let q3 = r.hi / rhs.hi;
        let (hi, lo) = quick_two_sum(q1, q2);
        DoubleDouble { hi, lo }.add_f64(q3)
    }
}

impl Rem for DoubleDouble {
    type Output = DoubleDouble;

    /// Truncated remainder; the result has the sign of `self`, like `f64 % f64`.
    #[inline]
    fn rem(self, rhs: DoubleDouble) -> DoubleDouble {
        self - rhs * (self / rhs).trunc()
    }
}

impl Add<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: f64) -> DoubleDouble {
        self.add_f64(rhs)
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: f64) -> DoubleDouble {
        self.add_f64(-rhs)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: f64) -> DoubleDouble {
        self.mul_f64(rhs)
    }
}

impl Div<f64> for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn div(self, rhs: f64) -> DoubleDouble {
        self / DoubleDouble::from_f64(rhs)
    }
}

macro_rules! forward_assign_ops {
    ($($trait:ident :: $method:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for DoubleDouble {
                #[inline]
                fn $method(&mut self, rhs: DoubleDouble) {
                    *self = *self $op rhs;
                }
            }

            impl $trait<f64> for DoubleDouble {
                #[inline]
                fn $method(&mut self, rhs: f64) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

forward_assign_ops! {
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /,
}

impl RemAssign for DoubleDouble {
    #[inline]
    fn rem_assign(&mut self, rhs: DoubleDouble) {
        *self = *self % rhs;
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(x: f64) -> Self {
        DoubleDouble::from_f64(x)
    }
}

impl From<f32> for DoubleDouble {
    #[inline]
    fn from(x: f32) -> Self {
        DoubleDouble::from_f64(f64::from(x))
    }
}

impl From<i32> for DoubleDouble {
    #[inline]
    fn from(x: i32) -> Self {
        DoubleDouble::from_f64(f64::from(x))
    }
}

impl From<u32> for DoubleDouble {
    #[inline]
    fn from(x: u32) -> Self {
        DoubleDouble::from_f64(f64::from(x))
    }
}

impl From<i64> for DoubleDouble {
    #[inline]
    fn from(x: i64) -> Self {
        DoubleDouble::from_i64(x)
    }
}

impl From<u64> for DoubleDouble {
    #[inline]
    fn from(x: u64) -> Self {
        DoubleDouble::from_u64(x)
    }
}

impl From<DoubleDouble> for f64 {
    #[inline]
    fn from(x: DoubleDouble) -> f64 {
        x.hi
    }
}
