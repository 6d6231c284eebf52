//! Clausen functions Cl₁ … Cl₆.
//!
//! `Cl_n(θ)` is the real part of `Li_n(e^{iθ})` for odd `n` and the
//! imaginary part for even `n`. The angle is first reduced into `[0, 2π]`
//! by one floating-point remainder, so the cost does not depend on `|θ|`.

use num_complex::Complex;

use crate::li1::li1_complex;
use crate::li2::li2_complex;
use crate::li3::li3_complex;
use crate::li4::li4_complex;
use crate::li5::li5_complex;
use crate::li6::li6_complex;
use crate::machine::PolylogFloat;

/// Maps `x` into `[0, 2π]`.
///
/// A negative remainder of tiny magnitude can round up to exactly `2π`.
#[inline]
fn reduce_angle<T: PolylogFloat>(x: T) -> T {
    let two_pi = T::PI() + T::PI();
    let r = x % two_pi;
    if r < T::zero() {
        r + two_pi
    } else {
        r
    }
}

/// `e^{iθ}` for an already reduced angle.
#[inline]
fn unit<T: PolylogFloat>(theta: T) -> Complex<T> {
    let (s, c) = theta.sin_cos();
    Complex::new(c, s)
}

pub(crate) fn cl1<T: PolylogFloat>(x: T) -> T {
    li1_complex(unit(reduce_angle(x))).re
}

/// Cl₂(θ), exactly zero within machine epsilon of `0`, `π` and `2π`.
pub(crate) fn cl2<T: PolylogFloat>(x: T) -> T {
    let zero = T::zero();
    let pi = T::PI();
    let x = reduce_angle(x);
    let eps = T::MACH_EPSILON;
    if x.abs() < eps || (x - pi).abs() < eps || (x - (pi + pi)).abs() < eps {
        return zero;
    }
    li2_complex(unit(x)).im
}

pub(crate) fn cl3<T: PolylogFloat>(x: T) -> T {
    li3_complex(unit(reduce_angle(x))).re
}

pub(crate) fn cl4<T: PolylogFloat>(x: T) -> T {
    li4_complex(unit(reduce_angle(x))).im
}

pub(crate) fn cl5<T: PolylogFloat>(x: T) -> T {
    li5_complex(unit(reduce_angle(x))).re
}

pub(crate) fn cl6<T: PolylogFloat>(x: T) -> T {
    li6_complex(unit(reduce_angle(x))).im
}
