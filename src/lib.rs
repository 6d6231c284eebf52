//! Polylogarithms Li₀ … Li₆ and Clausen functions Cl₁ … Cl₆ in pure Rust.
//!
//! Every function is generic over [`PolylogFloat`], which is implemented for
//! `f64` and for the 106-bit [`DoubleDouble`]. Each precision carries its
//! own coefficient tables; the evaluation code is shared.
//!
//! ```
//! use num_complex::Complex;
//! use polylogarithm::{cl2, li2, li2_real, li4};
//!
//! let zeta2 = core::f64::consts::PI.powi(2) / 6.0;
//! assert!((li2_real(1.0_f64) - zeta2).abs() < 1e-15);
//!
//! let w = li4(Complex::new(-0.5_f64, 0.5));
//! assert!((w.re + 0.497705127984032).abs() < 1e-15);
//!
//! // Cl₂(π/3) is the maximum of the Clausen function
//! assert!((cl2(core::f64::consts::FRAC_PI_3) - 1.0149416064096537).abs() < 1e-15);
//!
//! // from below on the cut x > 1
//! let w = li2(Complex::new(3.0_f64, 0.0));
//! assert!((w.im + core::f64::consts::PI * 3.0_f64.ln()).abs() < 1e-15);
//! ```
//!
//! # Branch convention
//!
//! All functions use the principal branch with the cut along `(1, ∞)`. A
//! real argument `x > 1` with an imaginary part of `+0.0` or `-0.0` yields
//! the value from below the cut, `Im Li_n(x) = -π ln^{n-1}(x) / (n-1)!`.
//!
//! # Errors
//!
//! The numerical functions are total. Evaluating at a pole (`Li₀` and `Li₁`
//! at `z = 1`) gives IEEE infinities or NaN, and NaN inputs propagate.
//!
//! # Features
//!
//! - `std` (default): hardware FMA and the platform math library. Without
//!   it the crate is `no_std` and uses `libm`.
//! - `capi`: `extern "C"` entry points in [`ffi`].

#![cfg_attr(not(feature = "std"), no_std)]

mod clausen;
mod double_double;
mod li0;
mod li1;
mod li2;
mod li3;
mod li4;
mod li5;
mod li6;
pub mod machine;
pub mod types;
mod utils;

#[cfg(feature = "capi")]
pub mod ffi;

pub use double_double::DoubleDouble;
pub use machine::PolylogFloat;
pub use types::ParseError;

use num_complex::Complex;

// ── Complex polylogarithms ──

/// Li₀(z) = z / (1 - z).
#[inline]
pub fn li0<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li0::li0_complex(z)
}

/// Li₁(z) = -ln(1 - z).
#[inline]
pub fn li1<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li1::li1_complex(z)
}

/// Dilogarithm Li₂(z).
///
/// # Example
///
/// ```
/// use num_complex::Complex;
/// use polylogarithm::li2;
///
/// // Li₂(i) = -π²/48 + i G, G = Catalan's constant
/// let w = li2(Complex::new(0.0_f64, 1.0));
/// assert!((w.im - 0.915965594177219).abs() < 1e-15);
/// ```
#[inline]
pub fn li2<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li2::li2_complex(z)
}

/// Trilogarithm Li₃(z).
#[inline]
pub fn li3<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li3::li3_complex(z)
}

/// Li₄(z).
#[inline]
pub fn li4<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li4::li4_complex(z)
}

/// Li₅(z).
#[inline]
pub fn li5<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li5::li5_complex(z)
}

/// Li₆(z).
#[inline]
pub fn li6<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    li6::li6_complex(z)
}

// ── Real polylogarithms ──

/// Li₀(x) = x / (1 - x).
#[inline]
pub fn li0_real<T: PolylogFloat>(x: T) -> T {
    li0::li0_real(x)
}

/// Re Li₁(x) = -ln|1 - x|.
#[inline]
pub fn li1_real<T: PolylogFloat>(x: T) -> T {
    li1::li1_real(x)
}

/// Real dilogarithm; for `x > 1` the real part of [`li2`].
///
/// Accuracy is absolute near the origin: for `f64` the error there is
/// about `1e-17`, so results for `|x|` at that scale carry no relative
/// precision.
///
/// # Example
///
/// ```
/// use polylogarithm::{li2_real, DoubleDouble};
///
/// assert!((li2_real(-1.0_f64) + 0.8224670334241132).abs() < 1e-15);
///
/// let x = DoubleDouble::from_f64(0.5);
/// let ln2 = DoubleDouble::from_f64(2.0).ln();
/// let pi = DoubleDouble::from_f64(1.0).atan() * 4.0;
/// let exact = pi.sqr() / 12.0 - ln2.sqr() / 2.0;
/// assert!((li2_real(x) - exact).abs().to_f64() < 1e-29);
/// ```
#[inline]
pub fn li2_real<T: PolylogFloat>(x: T) -> T {
    li2::li2_real(x)
}

/// Re Li₃(x).
#[inline]
pub fn li3_real<T: PolylogFloat>(x: T) -> T {
    li3::li3_real(x)
}

/// Re Li₄(x).
#[inline]
pub fn li4_real<T: PolylogFloat>(x: T) -> T {
    li4::li4_real(x)
}

/// Re Li₅(x).
#[inline]
pub fn li5_real<T: PolylogFloat>(x: T) -> T {
    li5::li5_real(x)
}

/// Re Li₆(x).
#[inline]
pub fn li6_real<T: PolylogFloat>(x: T) -> T {
    li6::li6_real(x)
}

// ── Clausen functions ──

/// Cl₁(θ) = -ln|2 sin(θ/2)|.
#[inline]
pub fn cl1<T: PolylogFloat>(x: T) -> T {
    clausen::cl1(x)
}

/// Cl₂(θ) = Im Li₂(e^{iθ}).
///
/// Returns exactly zero when the reduced angle lies within machine epsilon
/// of `0`, `π` or `2π`.
#[inline]
pub fn cl2<T: PolylogFloat>(x: T) -> T {
    clausen::cl2(x)
}

/// Cl₃(θ) = Re Li₃(e^{iθ}).
#[inline]
pub fn cl3<T: PolylogFloat>(x: T) -> T {
    clausen::cl3(x)
}

/// Cl₄(θ) = Im Li₄(e^{iθ}).
#[inline]
pub fn cl4<T: PolylogFloat>(x: T) -> T {
    clausen::cl4(x)
}

/// Cl₅(θ) = Re Li₅(e^{iθ}).
#[inline]
pub fn cl5<T: PolylogFloat>(x: T) -> T {
    clausen::cl5(x)
}

/// Cl₆(θ) = Im Li₆(e^{iθ}).
#[inline]
pub fn cl6<T: PolylogFloat>(x: T) -> T {
    clausen::cl6(x)
}
