//! Machine constants and the `PolylogFloat` trait.
//!
//! Two precision tiers are provided: IEEE `f64` and the 106-bit
//! [`DoubleDouble`]. Every function in the crate is written once, generic
//! over this trait, and picks up its coefficient tables through the sealed
//! per-engine supertraits.

use num_traits::{Float, FloatConst};

use crate::double_double::DoubleDouble;
use crate::li2::Li2Coefficients;
use crate::li3::Li3Coefficients;
use crate::li4::Li4Coefficients;
use crate::li5::Li5Coefficients;
use crate::li6::Li6Coefficients;

/// Floating-point trait for polylogarithm computation.
///
/// Implemented for `f64` and [`DoubleDouble`]. Provides machine epsilon,
/// the zeta values the expansions need, and the coefficient tables of each
/// engine. The table supertraits are not nameable outside the crate, so the
/// trait cannot be implemented for other types.
pub trait PolylogFloat:
    Float
    + FloatConst
    + core::fmt::Debug
    + 'static
    + Li2Coefficients
    + Li3Coefficients
    + Li4Coefficients
    + Li5Coefficients
    + Li6Coefficients
{
    /// Machine epsilon: `2^-52` for `f64`, `2^-104` for `DoubleDouble`.
    const MACH_EPSILON: Self;
    /// ζ(2) = π²/6
    const ZETA2: Self;
    /// ζ(3), Apéry's constant.
    const ZETA3: Self;
    /// ζ(4) = π⁴/90
    const ZETA4: Self;
    /// ζ(5)
    const ZETA5: Self;
    /// ζ(6) = π⁶/945
    const ZETA6: Self;

    /// Infallible conversion from f64.
    ///
    /// Exact for both supported types. All algorithm constants that are not
    /// stored per precision originate as short f64 literals.
    fn from_f64(x: f64) -> Self;

    /// Fused multiply-add: `self * a + b`.
    ///
    /// With `std` enabled `f64` uses the C library `fma()`; without `std` it
    /// falls back to plain `self * a + b` to avoid the slow software FMA in
    /// libm. `DoubleDouble` always rounds twice.
    ///
    /// Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;
}

impl PolylogFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const ZETA2: f64 = 1.6449340668482264;
    const ZETA3: f64 = 1.2020569031595942;
    const ZETA4: f64 = 1.0823232337111381;
    const ZETA5: f64 = 1.03692775514337;
    const ZETA6: f64 = 1.0173430619844492;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    #[cfg(feature = "std")]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        Float::mul_add(self, a, b)
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    fn fma(self, a: f64, b: f64) -> f64 {
        self * a + b
    }
}

impl PolylogFloat for DoubleDouble {
    const MACH_EPSILON: DoubleDouble = DoubleDouble::EPSILON;
    const ZETA2: DoubleDouble = DoubleDouble::new(1.6449340668482264, 3.040672350398476e-17);
    const ZETA3: DoubleDouble = DoubleDouble::new(1.2020569031595942, 4.875891010379532e-17);
    const ZETA4: DoubleDouble = DoubleDouble::new(1.0823232337111381, 4.748512042855365e-17);
    const ZETA5: DoubleDouble = DoubleDouble::new(1.03692775514337, -6.276789020377768e-17);
    const ZETA6: DoubleDouble = DoubleDouble::new(1.0173430619844492, -9.758599166441531e-17);

    #[inline]
    fn from_f64(x: f64) -> DoubleDouble {
        DoubleDouble::from_f64(x)
    }

    #[inline]
    fn fma(self, a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        self * a + b
    }
}
