//! `num-traits` integration, so `DoubleDouble` works as `T` in
//! `num_complex::Complex<T>` and in the generic polylogarithm routines.

use core::num::FpCategory;

use num_traits::{Float, FloatConst, FromPrimitive, Num, NumCast, One, ToPrimitive, Zero};

use super::{DoubleDouble, FRAC_PI_2, FRAC_PI_4, LN_10, LN_2, PI};
use crate::types::ParseError;

/// Largest magnitude for which a double-double still holds an exact `i64`/`u64`.
const INTEGER_RANGE: f64 = 1.9e19;

impl Zero for DoubleDouble {
    #[inline]
    fn zero() -> Self {
        DoubleDouble::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.hi == 0.0
    }
}

impl One for DoubleDouble {
    #[inline]
    fn one() -> Self {
        DoubleDouble::ONE
    }
}

impl Num for DoubleDouble {
    type FromStrRadixErr = ParseError;

    /// Only decimal input is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseError> {
        if radix != 10 {
            return Err(ParseError::UnsupportedRadix(radix));
        }
        s.parse()
    }
}

impl ToPrimitive for DoubleDouble {
    fn to_i64(&self) -> Option<i64> {
        let t = self.trunc();
        if !t.hi.is_finite() || t.hi.abs() > INTEGER_RANGE {
            return None;
        }
        i64::try_from(t.hi as i128 + t.lo as i128).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        let t = self.trunc();
        if !t.hi.is_finite() || t.hi.abs() > INTEGER_RANGE {
            return None;
        }
        u64::try_from(t.hi as i128 + t.lo as i128).ok()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.hi)
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(self.hi as f32)
    }
}

impl NumCast for DoubleDouble {
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        let f = n.to_f64()?;
        // integers beyond 2^53 would lose their low bits through f64
        if f.is_finite() && f.abs() >= 9007199254740992.0 && f == f.trunc() {
            if let Some(i) = n.to_i64() {
                return Some(DoubleDouble::from_i64(i));
            }
            if let Some(u) = n.to_u64() {
                return Some(DoubleDouble::from_u64(u));
            }
        }
        Some(DoubleDouble::from_f64(f))
    }
}

impl FromPrimitive for DoubleDouble {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(DoubleDouble::from_i64(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(DoubleDouble::from_u64(n))
    }

    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        Some(DoubleDouble::from_f64(n))
    }
}

impl Float for DoubleDouble {
    fn nan() -> Self {
        DoubleDouble::NAN
    }

    fn infinity() -> Self {
        DoubleDouble::INFINITY
    }

    fn neg_infinity() -> Self {
        DoubleDouble::NEG_INFINITY
    }

    fn neg_zero() -> Self {
        DoubleDouble::from_f64(-0.0)
    }

    fn min_value() -> Self {
        DoubleDouble::MIN
    }

    fn min_positive_value() -> Self {
        DoubleDouble::MIN_POSITIVE
    }

    fn epsilon() -> Self {
        DoubleDouble::EPSILON
    }

    fn max_value() -> Self {
        DoubleDouble::MAX
    }

    fn is_nan(self) -> bool {
        self.hi.is_nan()
    }

    fn is_infinite(self) -> bool {
        self.hi.is_infinite()
    }

    fn is_finite(self) -> bool {
        self.hi.is_finite()
    }

    fn is_normal(self) -> bool {
        self.hi.is_normal()
    }

    fn classify(self) -> FpCategory {
        self.hi.classify()
    }

    fn floor(self) -> Self {
        DoubleDouble::floor(self)
    }

    fn ceil(self) -> Self {
        DoubleDouble::ceil(self)
    }

    fn round(self) -> Self {
        DoubleDouble::round(self)
    }

    fn trunc(self) -> Self {
        DoubleDouble::trunc(self)
    }

    fn fract(self) -> Self {
        self - DoubleDouble::trunc(self)
    }

    fn abs(self) -> Self {
        DoubleDouble::abs(self)
    }

    fn signum(self) -> Self {
        if self.hi.is_nan() {
            DoubleDouble::NAN
        } else if self.hi.is_sign_negative() {
            -DoubleDouble::ONE
        } else {
            DoubleDouble::ONE
        }
    }

    fn is_sign_positive(self) -> bool {
        self.hi.is_sign_positive()
    }

    fn is_sign_negative(self) -> bool {
        self.hi.is_sign_negative()
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    fn recip(self) -> Self {
        DoubleDouble::recip(self)
    }

    fn powi(self, n: i32) -> Self {
        DoubleDouble::powi(self, n)
    }

    fn powf(self, n: Self) -> Self {
        DoubleDouble::powf(self, n)
    }

    fn sqrt(self) -> Self {
        DoubleDouble::sqrt(self)
    }

    fn exp(self) -> Self {
        DoubleDouble::exp(self)
    }

    fn exp2(self) -> Self {
        DoubleDouble::exp(self * LN_2)
    }

    fn ln(self) -> Self {
        DoubleDouble::ln(self)
    }

    fn log(self, base: Self) -> Self {
        DoubleDouble::ln(self) / DoubleDouble::ln(base)
    }

    fn log2(self) -> Self {
        DoubleDouble::log2(self)
    }

    fn log10(self) -> Self {
        DoubleDouble::log10(self)
    }

    fn max(self, other: Self) -> Self {
        if self.hi.is_nan() || self < other {
            other
        } else {
            self
        }
    }

    fn min(self, other: Self) -> Self {
        if self.hi.is_nan() || self > other {
            other
        } else {
            self
        }
    }

    fn abs_sub(self, other: Self) -> Self {
        if self <= other {
            DoubleDouble::ZERO
        } else {
            self - other
        }
    }

    fn cbrt(self) -> Self {
        DoubleDouble::cbrt(self)
    }

    fn hypot(self, other: Self) -> Self {
        DoubleDouble::hypot(self, other)
    }

    fn sin(self) -> Self {
        DoubleDouble::sin(self)
    }

    fn cos(self) -> Self {
        DoubleDouble::cos(self)
    }

    fn tan(self) -> Self {
        DoubleDouble::tan(self)
    }

    fn asin(self) -> Self {
        DoubleDouble::asin(self)
    }

    fn acos(self) -> Self {
        DoubleDouble::acos(self)
    }

    fn atan(self) -> Self {
        DoubleDouble::atan(self)
    }

    fn atan2(self, other: Self) -> Self {
        DoubleDouble::atan2(self, other)
    }

    fn sin_cos(self) -> (Self, Self) {
        DoubleDouble::sin_cos(self)
    }

    fn exp_m1(self) -> Self {
        DoubleDouble::exp_m1(self)
    }

    fn ln_1p(self) -> Self {
        DoubleDouble::ln_1p(self)
    }

    fn sinh(self) -> Self {
        DoubleDouble::sinh(self)
    }

    fn cosh(self) -> Self {
        DoubleDouble::cosh(self)
    }

    fn tanh(self) -> Self {
        DoubleDouble::tanh(self)
    }

    fn asinh(self) -> Self {
        DoubleDouble::asinh(self)
    }

    fn acosh(self) -> Self {
        DoubleDouble::acosh(self)
    }

    fn atanh(self) -> Self {
        DoubleDouble::atanh(self)
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        Float::integer_decode(self.hi)
    }

    fn to_degrees(self) -> Self {
        self * 180.0 / PI
    }

    fn to_radians(self) -> Self {
        self * PI / 180.0
    }

    fn copysign(self, sign: Self) -> Self {
        if self.hi.is_sign_negative() == sign.hi.is_sign_negative() {
            self
        } else {
            -self
        }
    }
}

impl FloatConst for DoubleDouble {
    fn E() -> Self {
        DoubleDouble::new(2.718281828459045, 1.4456468917292502e-16)
    }

    fn FRAC_1_PI() -> Self {
        DoubleDouble::new(0.3183098861837907, -1.9678676675182486e-17)
    }

    fn FRAC_1_SQRT_2() -> Self {
        DoubleDouble::new(0.7071067811865476, -4.833646656726457e-17)
    }

    fn FRAC_2_PI() -> Self {
        DoubleDouble::new(0.6366197723675814, -3.935735335036497e-17)
    }

    fn FRAC_2_SQRT_PI() -> Self {
        DoubleDouble::new(1.1283791670955126, 1.533545961316588e-17)
    }

    fn FRAC_PI_2() -> Self {
        FRAC_PI_2
    }

    fn FRAC_PI_3() -> Self {
        DoubleDouble::new(1.0471975511965979, -1.072081766451091e-16)
    }

    fn FRAC_PI_4() -> Self {
        FRAC_PI_4
    }

    fn FRAC_PI_6() -> Self {
        DoubleDouble::new(0.5235987755982989, -5.360408832255455e-17)
    }

    fn FRAC_PI_8() -> Self {
        DoubleDouble::new(0.39269908169872414, 1.5308084989341915e-17)
    }

    fn LN_10() -> Self {
        LN_10
    }

    fn LN_2() -> Self {
        LN_2
    }

    fn LOG10_E() -> Self {
        DoubleDouble::new(0.4342944819032518, 1.098319650216765e-17)
    }

    fn LOG2_E() -> Self {
        DoubleDouble::new(1.4426950408889634, 2.0355273740931033e-17)
    }

    fn PI() -> Self {
        PI
    }

    fn SQRT_2() -> Self {
        DoubleDouble::new(1.4142135623730951, -9.667293313452913e-17)
    }

    fn TAU() -> Self {
        DoubleDouble::new(6.283185307179586, 2.4492935982947064e-16)
    }

    fn LOG10_2() -> Self {
        DoubleDouble::new(0.3010299956639812, -2.8037281277851704e-18)
    }

    fn LOG2_10() -> Self {
        DoubleDouble::new(3.321928094887362, 1.661617516973592e-16)
    }
}
