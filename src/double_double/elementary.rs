//! Elementary functions in double-double precision.
//!
//! Each function takes an `f64` first approximation and refines it, either
//! by a Newton step (`sqrt`, `ln`, `atan2`, `cbrt`) or by a Taylor series on a
//! reduced argument (`exp`, `sin_cos`, `ln_1p`).

#[cfg_attr(feature = "std", allow(unused_imports))]
use num_traits::Float;

use super::{DoubleDouble, FRAC_3PI_4, FRAC_PI_2, FRAC_PI_4, LN_10, LN_2, PI};

/// Series terms below `SERIES_TOL * |sum|` are dropped.
const SERIES_TOL: f64 = 4.930380657631324e-35;
/// `ln(f64::MAX)`; larger arguments overflow `exp`.
const EXP_OVERFLOW: f64 = 709.782712893384;
/// Below this `exp` underflows past the smallest subnormal.
const EXP_UNDERFLOW: f64 = -745.2;

impl DoubleDouble {
    #[inline]
    pub fn abs(self) -> Self {
        if self.hi.is_sign_negative() {
            -self
        } else {
            self
        }
    }

    pub fn floor(self) -> Self {
        let hi = self.hi.floor();
        if !hi.is_finite() || hi != self.hi {
            return Self::from_f64(hi);
        }
        Self::from_sum(hi, self.lo.floor())
    }

    pub fn ceil(self) -> Self {
        let hi = self.hi.ceil();
        if !hi.is_finite() || hi != self.hi {
            return Self::from_f64(hi);
        }
        Self::from_sum(hi, self.lo.ceil())
    }

    pub fn trunc(self) -> Self {
        if self.hi >= 0.0 {
            self.floor()
        } else {
            self.ceil()
        }
    }

    /// Rounds half-way cases away from zero.
    pub fn round(self) -> Self {
        if self.hi >= 0.0 {
            (self + 0.5).floor()
        } else {
            (self - 0.5).ceil()
        }
    }

    pub fn sqrt(self) -> Self {
        if self.hi == 0.0 {
            return self;
        }
        if self.hi < 0.0 {
            return Self::NAN;
        }
        if !self.hi.is_finite() {
            return self;
        }
        let q = self.hi.sqrt();
        let x = Self::from_f64(q);
        x + (self - x.sqr()) * (0.5 / q)
    }

    pub fn cbrt(self) -> Self {
        if self.hi == 0.0 || !self.hi.is_finite() {
            return self;
        }
        let y = Self::from_f64(self.hi.cbrt());
        y - (y.powi(3) - self) / (y.sqr() * 3.0)
    }

    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    pub fn hypot(self, other: Self) -> Self {
        let a = self.abs();
        let b = other.abs();
        if a.hi.is_infinite() || b.hi.is_infinite() {
            return Self::INFINITY;
        }
        if a.hi.is_nan() || b.hi.is_nan() {
            return Self::NAN;
        }
        let (big, small) = if a > b { (a, b) } else { (b, a) };
        if big.hi == 0.0 {
            return Self::ZERO;
        }
        let q = small / big;
        big * (q.sqr() + 1.0).sqrt()
    }

    /// Integer power by binary exponentiation.
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mut base = self;
        let mut e = n.unsigned_abs();
        let mut acc = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            e >>= 1;
            if e > 0 {
                base = base.sqr();
            }
        }
        if n < 0 {
            acc.recip()
        } else {
            acc
        }
    }

    pub fn powf(self, y: Self) -> Self {
        if y.hi == 0.0 {
            return Self::ONE;
        }
        if y.trunc() == y && y.hi.abs() < 2147483648.0 {
            return self.powi(y.hi as i32);
        }
        (y * self.ln()).exp()
    }

    pub fn exp(self) -> Self {
        if self.hi.is_nan() {
            return self;
        }
        if self.hi > EXP_OVERFLOW {
            return Self::INFINITY;
        }
        if self.hi < EXP_UNDERFLOW {
            return Self::ZERO;
        }
        if self.hi == 0.0 {
            return Self::ONE;
        }
        let m = (self.hi / LN_2.hi).round();
        let r = self - LN_2 * m;
        (expm1_reduced(r) + 1.0).ldexp(m as i32)
    }

    /// `exp(self) - 1`, accurate near zero.
    pub fn exp_m1(self) -> Self {
        if self.hi.abs() < 0.5 * LN_2.hi {
            expm1_reduced(self)
        } else {
            self.exp() - 1.0
        }
    }

    pub fn ln(self) -> Self {
        if self.hi.is_nan() {
            return self;
        }
        if self.hi < 0.0 {
            return Self::NAN;
        }
        if self.hi == 0.0 {
            return Self::NEG_INFINITY;
        }
        if self.hi.is_infinite() {
            return self;
        }
        let d = self - 1.0;
        if d.hi.abs() < 0.25 {
            return ln1p_series(d);
        }
        // keep exp(-x) away from the subnormal range
        if self.hi > 1.0e300 || self.hi < 1.0e-300 {
            let e = self.hi.log2().floor() as i32;
            return self.ldexp(-e).ln() + LN_2 * f64::from(e);
        }
        let x = Self::from_f64(self.hi.ln());
        x + (self * (-x).exp() - 1.0)
    }

    /// `ln(1 + self)`, accurate near zero.
    pub fn ln_1p(self) -> Self {
        if self.hi.abs() < 0.25 {
            ln1p_series(self)
        } else {
            (self + 1.0).ln()
        }
    }

    pub fn log2(self) -> Self {
        self.ln() / LN_2
    }

    pub fn log10(self) -> Self {
        self.ln() / LN_10
    }

    /// Simultaneous sine and cosine.
    ///
    /// The argument is reduced by the nearest multiple of π/2, so accuracy
    /// degrades for `|self|` beyond about `1e16`.
    pub fn sin_cos(self) -> (Self, Self) {
        if self.hi == 0.0 {
            return (self, Self::ONE);
        }
        if !self.hi.is_finite() {
            return (Self::NAN, Self::NAN);
        }
        let k = (self.hi / FRAC_PI_2.hi).round();
        let r = self - FRAC_PI_2 * k;
        let s = sin_taylor(r);
        let c = cos_taylor(r);
        match (k as i64).rem_euclid(4) {
            0 => (s, c),
            1 => (c, -s),
            2 => (-s, -c),
            _ => (-c, s),
        }
    }

    pub fn sin(self) -> Self {
        self.sin_cos().0
    }

    pub fn cos(self) -> Self {
        self.sin_cos().1
    }

    pub fn tan(self) -> Self {
        let (s, c) = self.sin_cos();
        s / c
    }

    /// Four-quadrant arctangent of `self / x`, with the IEEE conventions for
    /// signed zeros and infinities.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if y.hi.is_nan() || x.hi.is_nan() {
            return Self::NAN;
        }
        if y.hi.is_infinite() {
            let angle = if x.hi == f64::INFINITY {
                FRAC_PI_4
            } else if x.hi == f64::NEG_INFINITY {
                FRAC_3PI_4
            } else {
                FRAC_PI_2
            };
            return with_sign_of(angle, y.hi);
        }
        if x.hi.is_infinite() {
            let angle = if x.hi > 0.0 { Self::ZERO } else { PI };
            return with_sign_of(angle, y.hi);
        }
        if y.hi == 0.0 {
            let angle = if x.hi.is_sign_negative() {
                PI
            } else {
                Self::ZERO
            };
            return with_sign_of(angle, y.hi);
        }
        if x.hi == 0.0 {
            return with_sign_of(FRAC_PI_2, y.hi);
        }
        if x == y {
            return if y.hi > 0.0 { FRAC_PI_4 } else { -FRAC_3PI_4 };
        }
        if x == -y {
            return if y.hi > 0.0 { FRAC_3PI_4 } else { -FRAC_PI_4 };
        }

        let r = x.hypot(y);
        let xx = x / r;
        let yy = y / r;
        let z = Self::from_f64(y.hi.atan2(x.hi));
        let (s, c) = z.sin_cos();
        // one Newton step on whichever of sin/cos is better conditioned
        if xx.hi.abs() > yy.hi.abs() {
            z + (yy - s) / c
        } else {
            z - (xx - c) / s
        }
    }

    pub fn atan(self) -> Self {
        self.atan2(Self::ONE)
    }

    pub fn asin(self) -> Self {
        let a = self.abs();
        if a.hi > 1.0 || (a.hi == 1.0 && a.lo > 0.0) {
            return Self::NAN;
        }
        self.atan2((Self::ONE - self.sqr()).sqrt())
    }

    pub fn acos(self) -> Self {
        let a = self.abs();
        if a.hi > 1.0 || (a.hi == 1.0 && a.lo > 0.0) {
            return Self::NAN;
        }
        (Self::ONE - self.sqr()).sqrt().atan2(self)
    }

    pub fn sinh(self) -> Self {
        if self.hi.abs() < 0.5 {
            let e = self.exp_m1();
            // (e^x - e^-x) / 2 with e^x = 1 + em1
            (e + e / (e + 1.0)).mul_pow2(0.5)
        } else {
            let e = self.exp();
            (e - e.recip()).mul_pow2(0.5)
        }
    }

    pub fn cosh(self) -> Self {
        let e = self.exp();
        (e + e.recip()).mul_pow2(0.5)
    }

    pub fn tanh(self) -> Self {
        if self.hi.abs() > 40.0 {
            return with_sign_of(Self::ONE, self.hi);
        }
        let e = self.mul_pow2(2.0).exp_m1();
        e / (e + 2.0)
    }

    pub fn asinh(self) -> Self {
        let a = self.abs();
        let s = if a.hi > 1.0e150 {
            a.ln() + LN_2
        } else {
            let a2 = a.sqr();
            (a + a2 / ((a2 + 1.0).sqrt() + 1.0)).ln_1p()
        };
        with_sign_of(s, self.hi)
    }

    pub fn acosh(self) -> Self {
        if self.hi < 1.0 {
            return Self::NAN;
        }
        if self.hi > 1.0e150 {
            return self.ln() + LN_2;
        }
        let t = self - 1.0;
        (t + (t.mul_pow2(2.0) + t.sqr()).sqrt()).ln_1p()
    }

    pub fn atanh(self) -> Self {
        let a = self.abs();
        if a.hi > 1.0 {
            return Self::NAN;
        }
        let t = (a.mul_pow2(2.0) / (Self::ONE - a)).ln_1p().mul_pow2(0.5);
        with_sign_of(t, self.hi)
    }
}

#[inline]
fn with_sign_of(v: DoubleDouble, sign: f64) -> DoubleDouble {
    if sign.is_sign_negative() {
        -v
    } else {
        v
    }
}

/// `exp(r) - 1` for `|r| <= ln(2) / 2`.
///
/// Sums the Taylor series at `r / 1024` and undoes the scaling with ten
/// doublings `e(2s) = 2 e(s) + e(s)^2`.
fn expm1_reduced(r: DoubleDouble) -> DoubleDouble {
    let s = r.mul_pow2(1.0 / 1024.0);
    let mut term = s;
    let mut sum = s;
    let mut k = 2.0;
    while k < 30.0 {
        term = term * s / k;
        sum += term;
        if term.hi.abs() <= SERIES_TOL * sum.hi.abs() {
            break;
        }
        k += 1.0;
    }
    for _ in 0..10 {
        sum = sum.mul_pow2(2.0) + sum.sqr();
    }
    sum
}

/// `ln(1 + x)` for `|x| < 1/4` from the series `2 atanh(x / (x + 2))`.
fn ln1p_series(x: DoubleDouble) -> DoubleDouble {
    let t = x / (x + 2.0);
    let t2 = t.sqr();
    let mut power = t;
    let mut sum = t;
    let mut k = 3.0;
    while k < 200.0 {
        power = power * t2;
        let term = power / k;
        sum += term;
        if term.hi.abs() <= SERIES_TOL * sum.hi.abs() {
            break;
        }
        k += 2.0;
    }
    sum.mul_pow2(2.0)
}

/// `sin(r)` for `|r| <= π/4`.
fn sin_taylor(r: DoubleDouble) -> DoubleDouble {
    let r2 = -r.sqr();
    let mut term = r;
    let mut sum = r;
    let mut k = 1.0;
    while k < 60.0 {
        term = term * r2 / ((k + 1.0) * (k + 2.0));
        k += 2.0;
        sum += term;
        if term.hi.abs() <= SERIES_TOL * sum.hi.abs() {
            break;
        }
    }
    sum
}

/// `cos(r)` for `|r| <= π/4`.
fn cos_taylor(r: DoubleDouble) -> DoubleDouble {
    let r2 = -r.sqr();
    let mut term = DoubleDouble::ONE;
    let mut sum = DoubleDouble::ONE;
    let mut k = 0.0;
    while k < 60.0 {
        term = term * r2 / ((k + 1.0) * (k + 2.0));
        k += 2.0;
        sum += term;
        if term.hi.abs() <= SERIES_TOL {
            break;
        }
    }
    sum
}
