//! Dilogarithm Li₂(z).
//!
//! The real function follows CERNLIB C332 (DILOG): the argument is mapped
//! into `[0, 1]` by one of six reflection/inversion identities and the
//! remainder is a Chebyshev sum. The complex function follows the SPheno
//! algorithm: after mapping into `|z| <= 1`, `Re z <= 1/2` it sums the
//! Bernoulli series in `u = -ln(1 - z)`,
//!
//! ```text
//! Li₂(z) = Σ_{k>=0} B_k u^{k+1} / (k + 1)!
//! ```
//!
//! where only `B_1 = -1/2` and the even Bernoulli numbers contribute.

// Table literals are printed to full round-trip precision.
#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::double_double::DoubleDouble;
use crate::machine::PolylogFloat;
use crate::utils::{ln_neg, ln_one_minus, mul_add, zabs, zinv};

/// Per-precision coefficient tables of the dilogarithm.
pub trait Li2Coefficients: Sized + 'static {
    /// Chebyshev coefficients of the real dilogarithm on the reduced argument.
    const CHEBYSHEV: &'static [Self];
    /// Coefficients of the Bernoulli series in `-ln(1 - z)`.
    const BERNOULLI: &'static [Self];
}

/// Chebyshev coefficients from CERNLIB C332.
#[rustfmt::skip]
const CHEBYSHEV_F64: [f64; 20] = [
     0.42996693560813697,  0.40975987533077105,
    -0.01858843665014592,  0.00145751084062268,
    -0.00014304184442340,  0.00001588415541880,
    -0.00000190784959387,  0.00000024195180854,
    -0.00000003193341274,  0.00000000434545063,
    -0.00000000060578480,  0.00000000008612098,
    -0.00000000001244332,  0.00000000000182256,
    -0.00000000000027007,  0.00000000000004042,
    -0.00000000000000610,  0.00000000000000093,
    -0.00000000000000014,  0.00000000000000002,
];

/// `-1/4` followed by `B_{2k} / (2k + 1)!` for k = 1..19.
#[rustfmt::skip]
const BERNOULLI_F64: [f64; 20] = [
    -0.25,
    0.027777777777777776,
    -0.0002777777777777778,
    4.72411186696901e-06,
    -9.185773074661964e-08,
    1.8978869988971e-09,
    -4.0647616451442256e-11,
    8.921691020456452e-13,
    -1.9939295860721074e-14,
    4.518980029619918e-16,
    -1.0356517612181247e-17,
    2.395218621026187e-19,
    -5.581785874325009e-21,
    1.3091507554183213e-22,
    -3.0874198024267403e-24,
    7.315975652702203e-26,
    -1.740845657234001e-27,
    4.1576356446139e-29,
    -9.962148488284622e-31,
    2.3940344248961652e-32,
];

/// `-1/4` followed by `B_{2k} / (2k + 1)!` for k = 1..25.
#[rustfmt::skip]
const BERNOULLI_DD: [DoubleDouble; 26] = [
    DoubleDouble::new(-0.25, 0.0),
    DoubleDouble::new(0.027777777777777776, 1.5419764230904951e-18),
    DoubleDouble::new(-0.0002777777777777778, -2.4093381610788987e-22),
    DoubleDouble::new(4.72411186696901e-06, 4.443241612959066e-23),
    DoubleDouble::new(-9.185773074661964e-08, 5.312318260098344e-24),
    DoubleDouble::new(1.8978869988971e-09, -1.4735776048997944e-25),
    DoubleDouble::new(-4.0647616451442256e-11, 7.676496313461845e-28),
    DoubleDouble::new(8.921691020456452e-13, 2.5040882884938538e-29),
    DoubleDouble::new(-1.9939295860721074e-14, -1.2528126853960229e-30),
    DoubleDouble::new(4.518980029619918e-16, -5.9060162430969285e-33),
    DoubleDouble::new(-1.0356517612181247e-17, 1.628987536685813e-34),
    DoubleDouble::new(2.395218621026187e-19, -2.3678845648953903e-35),
    DoubleDouble::new(-5.581785874325009e-21, -3.538383091281489e-37),
    DoubleDouble::new(1.3091507554183213e-22, 3.5327246741717546e-39),
    DoubleDouble::new(-3.0874198024267403e-24, -7.538723230122527e-42),
    DoubleDouble::new(7.315975652702203e-26, 4.948176085990111e-42),
    DoubleDouble::new(-1.740845657234001e-27, 1.3548827817504965e-43),
    DoubleDouble::new(4.1576356446139e-29, -1.6037902044123133e-45),
    DoubleDouble::new(-9.962148488284622e-31, -4.1881323763611145e-47),
    DoubleDouble::new(2.3940344248961652e-32, 8.156850623272498e-49),
    DoubleDouble::new(-5.76834735536739e-34, -3.884454087479587e-50),
    DoubleDouble::new(1.393179479647008e-35, -5.540931044931126e-52),
    DoubleDouble::new(-3.3721219654850894e-37, -4.4980807537501217e-54),
    DoubleDouble::new(8.178208777562102e-39, 1.3226550059809744e-55),
    DoubleDouble::new(-1.987010831152386e-40, -2.0501899363486093e-57),
    DoubleDouble::new(4.8357785180405507e-42, 2.170644964684431e-58),
];

/// Chebyshev coefficients of `-Li₂(-y)` on `y ∈ [0, 1]` in the variable
/// `h = 2y - 1`, leading coefficient not halved.
#[rustfmt::skip]
const CHEBYSHEV_DD: [DoubleDouble; 40] = [
    DoubleDouble::new(0.429966935608137, -7.725827395350918e-18),
    DoubleDouble::new(0.4097598753307711, -1.4363928492424877e-17),
    DoubleDouble::new(-0.01858843665014592, -6.013486711771099e-20),
    DoubleDouble::new(0.0014575108406226786, -8.610353687612235e-20),
    DoubleDouble::new(-0.00014304184442340048, -6.6002046240935255e-21),
    DoubleDouble::new(1.5884155418795532e-05, 5.443812494364912e-22),
    DoubleDouble::new(-1.9078495938658273e-06, 9.091370219412888e-23),
    DoubleDouble::new(2.419518085416475e-07, -1.828211229192888e-23),
    DoubleDouble::new(-3.1933412742517834e-08, -3.6511206421254285e-25),
    DoubleDouble::new(4.345450626769123e-09, 5.3423791082416e-26),
    DoubleDouble::new(-6.057848011840744e-10, -3.912645060287814e-27),
    DoubleDouble::new(8.612097799359498e-11, 5.404044712144985e-27),
    DoubleDouble::new(-1.2443316599388679e-11, -7.099926137495468e-28),
    DoubleDouble::new(1.822556962357363e-12, 1.3190256581363378e-28),
    DoubleDouble::new(-2.7006766049114654e-13, 1.98344986150243e-29),
    DoubleDouble::new(4.0422092631526645e-14, 1.8502379420957846e-30),
    DoubleDouble::new(-6.1032514526918794e-15, -7.440849415831985e-32),
    DoubleDouble::new(9.286297533019577e-16, -9.620887577201155e-32),
    DoubleDouble::new(-1.4226020855112447e-16, 4.699103280838044e-33),
    DoubleDouble::new(2.1926317181539574e-17, -9.360190718050581e-35),
    DoubleDouble::new(-3.3979732421589787e-18, 2.5288483361563335e-35),
    DoubleDouble::new(5.291954244833147e-19, 1.9200390649785857e-35),
    DoubleDouble::new(-8.278580814278998e-20, 5.213976057111038e-36),
    DoubleDouble::new(1.3003717345455603e-20, 5.086357480823468e-37),
    DoubleDouble::new(-2.050222242552825e-21, -1.0256219097604373e-37),
    DoubleDouble::new(3.2435785491489305e-22, -1.5937844630612042e-38),
    DoubleDouble::new(-5.147799903343207e-23, 5.3052857355472905e-40),
    DoubleDouble::new(8.193877477171578e-24, -1.1070271029153148e-40),
    DoubleDouble::new(-1.3077835405712668e-24, 4.707255134667133e-41),
    DoubleDouble::new(2.092562930579891e-25, -1.7499502694683031e-41),
    DoubleDouble::new(-3.356166150543838e-26, 2.4024944397620052e-42),
    DoubleDouble::new(5.3946577714317515e-27, 3.1010739046445962e-43),
    DoubleDouble::new(-8.689193208690997e-28, -3.0589317392246677e-44),
    DoubleDouble::new(1.4022816869665882e-28, -5.629794272890964e-45),
    DoubleDouble::new(-2.2671557813182771e-29, -1.0288404510822172e-45),
    DoubleDouble::new(3.671741699136856e-30, -2.1538510571588703e-46),
    DoubleDouble::new(-5.956151695877594e-31, -2.7764706766030996e-47),
    DoubleDouble::new(9.676624325013042e-32, -1.015572838738432e-48),
    DoubleDouble::new(-1.574385950010115e-32, -1.0150526033493277e-48),
    DoubleDouble::new(2.5650460002467957e-33, -7.796455428619769e-51),
];

impl Li2Coefficients for f64 {
    const CHEBYSHEV: &'static [f64] = &CHEBYSHEV_F64;
    const BERNOULLI: &'static [f64] = &BERNOULLI_F64;
}

impl Li2Coefficients for DoubleDouble {
    const CHEBYSHEV: &'static [DoubleDouble] = &CHEBYSHEV_DD;
    const BERNOULLI: &'static [DoubleDouble] = &BERNOULLI_DD;
}

/// Real dilogarithm Li₂(x) for any real `x`.
///
/// For `x > 1` this is the real part of the complex function.
///
/// The Chebyshev sum is accurate in absolute rather than relative terms:
/// near `x = 0` the error is about `1e-17` for `f64`, so `|x|` much below
/// that is not resolved and the sign of a tiny result is not reliable.
///
/// Equivalent to CERNLIB DILOG (C332).
pub(crate) fn li2_real<T: PolylogFloat>(x: T) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let pi6 = T::ZETA2;
    let pi3 = pi6 + pi6;
    let pi12 = pi6 * half;

    if x == one {
        return pi6;
    }
    if x == -one {
        return -pi12;
    }

    // Map t = -x onto y in [0, 1]; result = -(s * f(y) + a)
    let t = -x;
    let (y, s, a) = if t <= T::from_f64(-2.0) {
        let b1 = (-t).ln();
        let b2 = (one / t).ln_1p();
        (-one / (one + t), one, -pi3 + half * (b1 * b1 - b2 * b2))
    } else if t < -one {
        let a = (-t).ln();
        (-one - t, -one, -pi6 + a * (a + (one / t).ln_1p()))
    } else if t <= -half {
        let a = (-t).ln();
        (-(one + t) / t, one, -pi6 + a * (-half * a + t.ln_1p()))
    } else if t < zero {
        let b1 = t.ln_1p();
        (-t / (one + t), -one, half * b1 * b1)
    } else if t <= one {
        (t, one, zero)
    } else {
        let b1 = t.ln();
        (one / t, -one, pi6 + half * b1 * b1)
    };

    // Clenshaw recurrence for Σ c_k T_k(h)
    let h = y + y - one;
    let alfa = h + h;
    let mut b0 = zero;
    let mut b1 = zero;
    let mut b2 = zero;
    for &c in T::CHEBYSHEV.iter().rev() {
        b0 = alfa.fma(b1, c) - b2;
        b2 = b1;
        b1 = b0;
    }
    -(s * (b0 - h * b2) + a)
}

/// Complex dilogarithm Li₂(z).
///
/// Real arguments are delegated to the real algorithm, and so inherit its
/// absolute error near zero; for `x > 1` the imaginary part is `-π ln x`. Arguments with `|z|` below machine epsilon
/// return `z` unchanged.
///
/// Equivalent to the SPheno dilogarithm.
pub(crate) fn li2_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let (rz, iz) = (z.re, z.im);

    if iz == zero {
        let re = li2_real(rz);
        if rz <= one {
            return Complex::new(re, zero);
        }
        return Complex::new(re, -T::PI() * rz.ln());
    }
    let az = zabs(z);
    if az < T::MACH_EPSILON {
        return z;
    }

    // Transformation to |z| <= 1, Re(z) <= 1/2:
    //   Li₂(z) = jsgn * S(cz) + cy + ipi12 * π²/12
    let (cy, cz, jsgn, ipi12) = if rz <= half {
        if az > one {
            let l = ln_neg(z);
            (l * l * (-half), -ln_one_minus(zinv(z)), -one, -2)
        } else {
            (Complex::new(zero, zero), -ln_one_minus(z), one, 0)
        }
    } else if az <= (rz + rz).sqrt() {
        let cz = -z.ln();
        (cz * ln_one_minus(z), cz, -one, 2)
    } else {
        let l = ln_neg(z);
        (l * l * (-half), -ln_one_minus(zinv(z)), -one, -2)
    };

    let bf = T::BERNOULLI;
    let cz2 = cz * cz;
    let mut sum = Complex::new(zero, zero);
    for &b in bf[2..].iter().rev() {
        sum = cz2 * (sum + b);
    }
    // lowest order terms w/ different powers
    let sum = mul_add(cz2, mul_add(cz, sum + bf[1], Complex::new(bf[0], zero)), cz);

    sum * jsgn + cy + T::ZETA2 * half * T::from_f64(f64::from(ipi12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn assert_rel(actual: f64, expected: f64, tol: f64) {
        let err = ((actual - expected) / expected).abs();
        assert!(err < tol, "actual = {actual:e}, expected = {expected:e}, rel = {err:e}");
    }

    fn assert_dd(actual: DoubleDouble, expected: DoubleDouble, tol: f64) {
        let err = ((actual - expected) / expected).hi.abs();
        assert!(err < tol, "actual = {actual}, expected = {expected}, rel = {err:e}");
    }

    #[test]
    fn real_special_values() {
        let pi = core::f64::consts::PI;
        assert_eq!(li2_real(1.0_f64), f64::ZETA2);
        assert_eq!(li2_real(-1.0_f64), -f64::ZETA2 / 2.0);
        assert!(li2_real(0.0_f64).abs() < 1e-16);
        assert_rel(li2_real(0.5_f64), pi * pi / 12.0 - 0.5 * 2.0_f64.ln().powi(2), 1e-15);
    }

    #[test]
    fn real_all_regions() {
        // one point per reduction branch
        let cases = [
            (-50.0, -9.276995185332622),
            (-3.5, -2.162096799077975),
            (-1.5, -1.1473806603755707),
            (-0.7, -0.6051584023377052),
            (-0.2, -0.19080013777753563),
            (0.3, 0.3261295100754761),
            (0.9, 1.2997147230049588),
            (1.5, 2.37439527027248),
            (3.0, 2.3201804233130985),
        ];
        for (x, expected) in cases {
            assert_rel(li2_real(x), expected, 2e-15);
        }
    }

    #[test]
    fn real_near_zero_error_is_absolute() {
        // Li₂(x) = x + x²/4 + ...; the Chebyshev sum carries ~1e-17 absolute error
        for &(x, expected) in &[(1.0e-8_f64, 1.0000000025e-08), (-1.0e-8, -0.9999999975e-08)] {
            assert!((li2_real(x) - expected).abs() < 1e-16, "x = {x}");
        }
        assert!(li2_real(1.0e-300_f64).abs() < 1e-16);
    }

    #[test]
    fn real_non_finite() {
        assert!(li2_real(f64::NAN).is_nan());
        assert_eq!(li2_real(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn complex_known_values() {
        let cases = [
            ((0.5, 0.5), (0.4539852691502956, 0.6437673328892688)),
            ((-2.0, 1.0), (-1.4890920430306578, 0.540931003198579)),
            ((1.5, -0.3), (1.8220250930709658, -1.4542740149413231)),
            ((0.1, 0.001), (0.10261750356970598, 0.0010536050158303073)),
            ((3.0, 4.0), (-0.6048070120612, 3.733619532294386)),
            // Li₂(i) = -π²/48 + i G
            ((0.0, 1.0), (-0.2056167583560283, 0.915965594177219)),
        ];
        for ((x, y), (re, im)) in cases {
            let w = li2_complex(Complex64::new(x, y));
            assert_rel(w.re, re, 1e-14);
            assert_rel(w.im, im, 1e-14);
        }
    }

    #[test]
    fn complex_real_axis_branch() {
        let w = li2_complex(Complex64::new(3.0, 0.0));
        assert_rel(w.re, 2.3201804233130985, 2e-15);
        assert_rel(w.im, -3.4513922952232026, 1e-15);
        let w = li2_complex(Complex64::new(0.5, 0.0));
        assert_eq!(w.im, 0.0);
    }

    #[test]
    fn complex_tiny_argument_is_identity() {
        let z = Complex64::new(1.0e-17, -2.0e-17);
        assert_eq!(li2_complex(z), z);
    }

    #[test]
    fn complex_conjugate_symmetry() {
        let z = Complex64::new(0.7, 0.4);
        let a = li2_complex(z);
        let b = li2_complex(z.conj());
        assert_eq!(a.re, b.re);
        assert_eq!(a.im, -b.im);
    }

    #[test]
    fn double_double_real() {
        let cases = [
            (-3.5, DoubleDouble::new(-2.162096799077975, -1.771632419645495e-16)),
            (-0.7, DoubleDouble::new(-0.6051584023377052, -1.3493117008883375e-17)),
            (0.3, DoubleDouble::new(0.3261295100754761, -2.4846348443207973e-17)),
            (0.9, DoubleDouble::new(1.2997147230049588, -4.5366373579739976e-17)),
            (1.5, DoubleDouble::new(2.37439527027248, -6.6189396397815e-18)),
            (3.0, DoubleDouble::new(2.3201804233130985, -8.695598790448374e-17)),
        ];
        for (x, expected) in cases {
            assert_dd(li2_real(DoubleDouble::from_f64(x)), expected, 1e-29);
        }
    }

    #[test]
    fn double_double_complex() {
        let cases = [
            (
                (0.5, 0.5),
                DoubleDouble::new(0.4539852691502956, 4.936690004383728e-18),
                DoubleDouble::new(0.6437673328892688, -4.642876110058135e-17),
            ),
            (
                (-2.0, 1.0),
                DoubleDouble::new(-1.4890920430306578, -3.689626385555858e-17),
                DoubleDouble::new(0.540931003198579, 5.0994579827196135e-17),
            ),
            (
                (1.5, -0.3),
                DoubleDouble::new(1.8220250930709658, -1.069566348998003e-17),
                DoubleDouble::new(-1.4542740149413231, 6.16925293703218e-17),
            ),
            (
                (0.1, 0.001),
                DoubleDouble::new(0.10261750356970598, 5.327917015346934e-18),
                DoubleDouble::new(0.0010536050158303073, 9.359475785353048e-20),
            ),
            (
                (3.0, 4.0),
                DoubleDouble::new(-0.6048070120612, 3.873186607086546e-17),
                DoubleDouble::new(3.733619532294386, -3.7584980640908534e-17),
            ),
        ];
        for ((x, y), re, im) in cases {
            let z = Complex::new(DoubleDouble::from_f64(x), DoubleDouble::from_f64(y));
            let w = li2_complex(z);
            assert_dd(w.re, re, 1e-29);
            assert_dd(w.im, im, 1e-29);
        }
    }
}
