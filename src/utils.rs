//! Complex arithmetic helpers shared by the polylogarithm engines.
//!
//! The logarithm helpers fix the branch choices the expansions rely on.

use num_complex::Complex;

use crate::machine::PolylogFloat;

/// Complex `s * a + b` through [`PolylogFloat::fma`].
///
/// `Complex::mul_add` would go through libm's software FMA under `no_std`.
#[inline]
pub(crate) fn mul_add<T: PolylogFloat>(s: Complex<T>, a: Complex<T>, b: Complex<T>) -> Complex<T> {
    Complex::new(
        PolylogFloat::fma(s.re, a.re, b.re) - s.im * a.im,
        PolylogFloat::fma(s.re, a.im, PolylogFloat::fma(s.im, a.re, b.im)),
    )
}

/// Complex times real plus complex, used to fold the ζ(n) heads.
#[inline]
pub(crate) fn mul_add_scalar<T: PolylogFloat>(s: Complex<T>, a: T, b: Complex<T>) -> Complex<T> {
    Complex::new(s.re.fma(a, b.re), s.im.fma(a, b.im))
}

/// Evaluates `c[0] + c[1] x + c[2] x² + ...` by Horner's rule.
#[inline]
pub(crate) fn horner<T: PolylogFloat>(x: Complex<T>, coeffs: &[T]) -> Complex<T> {
    let zero = T::zero();
    coeffs.iter().rev().fold(Complex::new(zero, zero), |acc, &c| {
        mul_add(acc, x, Complex::new(c, zero))
    })
}

/// `|z|` scaled by the larger component.
#[inline]
pub(crate) fn zabs<T: PolylogFloat>(z: Complex<T>) -> T {
    let (big, small) = if z.re.abs() > z.im.abs() {
        (z.re.abs(), z.im.abs())
    } else {
        (z.im.abs(), z.re.abs())
    };
    if big + small == T::zero() {
        return T::zero();
    }
    let q = small / big;
    big * (T::one() + q * q).sqrt()
}

/// `a / b`, with `b` normalized by `|b|` first.
#[inline]
pub(crate) fn zdiv<T: PolylogFloat>(a: Complex<T>, b: Complex<T>) -> Complex<T> {
    let r = T::one() / zabs(b);
    let (c, d) = (b.re * r, b.im * r);
    Complex::new((a.re * c + a.im * d) * r, (a.im * c - a.re * d) * r)
}

/// `1 / z` without intermediate overflow.
#[inline]
pub(crate) fn zinv<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    zdiv(Complex::new(T::one(), T::zero()), z)
}

/// `ln(1 - z)` on the principal branch.
///
/// For `|z| < 1/2` the real part is `ln_1p(|1 - z|² - 1) / 2`, which keeps
/// full relative accuracy as `z -> 0` where `(1 - z).ln()` cancels.
#[inline]
pub(crate) fn ln_one_minus<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let one = T::one();
    let half = T::from_f64(0.5);
    let (x, y) = (z.re, z.im);
    if zabs(z) < half {
        let re = half * (x * (x - T::from_f64(2.0)) + y * y).ln_1p();
        Complex::new(re, (-y).atan2(one - x))
    } else {
        (Complex::new(one, T::zero()) - z).ln()
    }
}

/// `ln(-z)` with the imaginary part taken as `arg(z) - π` for `arg(z) > 0`
/// and `arg(z) + π` otherwise.
///
/// For `z` on the positive real axis (`arg z = 0` including `-0`) this
/// gives `+π`, independent of the sign of a zero imaginary part, which is
/// what the inversion and unit-circle formulas assume.
#[inline]
pub(crate) fn ln_neg<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let pi = T::PI();
    let arg = z.im.atan2(z.re);
    let im = if arg > T::zero() { arg - pi } else { arg + pi };
    Complex::new(zabs(z).ln(), im)
}
