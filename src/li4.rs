//! Tetralogarithm Li₄(z).
//!
//! Same region chain as the trilogarithm. Around `z = 1`,
//!
//! ```text
//! Li₄(e^u) = ζ(4) + ζ(3) u + ζ(2) u²/2 + u³/6 (11/6 - ln(-u)) - u⁴/48 + ...
//! ```
//!
//! and for `|z| > 1`
//!
//! ```text
//! Li₄(z) = -Li₄(1/z) - ln⁴(-z)/24 - ζ(2) ln²(-z)/2 - 7/4 ζ(4)
//! ```

#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::double_double::DoubleDouble;
use crate::machine::PolylogFloat;
use crate::utils::{horner, ln_neg, ln_one_minus, mul_add, mul_add_scalar, zabs, zinv};

/// Per-precision coefficient tables of the tetralogarithm.
pub trait Li4Coefficients: Sized + 'static {
    /// Coefficients of `Li₄(1 - e^{-u})` in powers of `u`, from `u¹` on.
    const LOG_SERIES: &'static [Self];
    /// Coefficients `c_j` of `u^{5+2j}` in the expansion around `z = 1`.
    const UNIT_SERIES: &'static [Self];
}

#[rustfmt::skip]
const LOG_SERIES_F64: [f64; 20] = [
    1.0,
    -0.4375,
    0.11651234567901235,
    -0.019820601851851853,
    0.001927932098765432,
    -3.1057098765432096e-05,
    -1.5624009114857836e-05,
    8.485123546773206e-07,
    2.290961660318971e-07,
    -2.1832614218526917e-08,
    -3.882824879172015e-09,
    5.446292103220332e-10,
    6.960805210682725e-11,
    -1.3375737686445216e-11,
    -1.2784852685266572e-12,
    3.260562858024892e-13,
    2.364757116861826e-14,
    -7.923135122031162e-15,
    -4.3452915709984186e-16,
    1.923627006253592e-16,
];

#[rustfmt::skip]
const UNIT_SERIES_F64: [f64; 7] = [
    -0.0006944444444444445,
    1.6534391534391535e-06,
    -1.0935444136502338e-08,
    1.0438378493934049e-10,
    -1.2165942300622436e-12,
    1.61300065283501e-14,
    -2.342881045287934e-16,
];

#[rustfmt::skip]
const LOG_SERIES_DD: [DoubleDouble; 40] = [
    DoubleDouble::new(1.0, 0.0),
    DoubleDouble::new(-0.4375, 0.0),
    DoubleDouble::new(0.11651234567901235, -3.9406064145645986e-18),
    DoubleDouble::new(-0.019820601851851853, 1.2849803525754126e-18),
    DoubleDouble::new(0.001927932098765432, 2.826528448881716e-20),
    DoubleDouble::new(-3.1057098765432096e-05, -2.699797261608966e-21),
    DoubleDouble::new(-1.5624009114857836e-05, 1.1956539460628455e-21),
    DoubleDouble::new(8.485123546773206e-07, 4.9954151444062195e-23),
    DoubleDouble::new(2.290961660318971e-07, 2.2094669639397506e-24),
    DoubleDouble::new(-2.1832614218526917e-08, 2.5346386771939476e-25),
    DoubleDouble::new(-3.882824879172015e-09, -3.4626959713927493e-25),
    DoubleDouble::new(5.446292103220332e-10, 5.304553483425569e-27),
    DoubleDouble::new(6.960805210682725e-11, 1.0176361799979191e-28),
    DoubleDouble::new(-1.3375737686445216e-11, 6.676693465884022e-28),
    DoubleDouble::new(-1.2784852685266572e-12, 6.858981013253107e-29),
    DoubleDouble::new(3.260562858024892e-13, 1.2819077100057201e-30),
    DoubleDouble::new(2.364757116861826e-14, -1.4744200801293584e-30),
    DoubleDouble::new(-7.923135122031162e-15, 2.0694891875622292e-31),
    DoubleDouble::new(-4.3452915709984186e-16, -1.1078618402260158e-32),
    DoubleDouble::new(1.923627006253592e-16, 7.377126046071947e-33),
    DoubleDouble::new(7.812414333195955e-18, -8.358099881625909e-35),
    DoubleDouble::new(-4.671803844803655e-18, -3.767765256082999e-34),
    DoubleDouble::new(-1.3435344329812849e-19, 6.743650545446616e-36),
    DoubleDouble::new(1.1356826851347343e-19, 1.2884025118382842e-36),
    DoubleDouble::new(2.1152756202432586e-21, 4.791710255356259e-38),
    DoubleDouble::new(-2.7642026334746516e-21, -1.7834607397264368e-37),
    DoubleDouble::new(-2.7068176608240067e-23, 2.540805518258321e-39),
    DoubleDouble::new(6.737204482862858e-23, -4.381727394323106e-39),
    DoubleDouble::new(1.3287265456683822e-25, 9.314173114354527e-42),
    DoubleDouble::new(-1.6443773056367827e-24, 8.850945359392298e-41),
    DoubleDouble::new(8.283605899933934e-27, 2.9723753640570256e-43),
    DoubleDouble::new(4.0190848495069353e-26, -2.5298275576572223e-42),
    DoubleDouble::new(-4.575713844484879e-28, -2.0853477079453378e-44),
    DoubleDouble::new(-9.836410909461513e-28, 4.008983530407925e-44),
    DoubleDouble::new(1.690033955603785e-29, 9.13563799098003e-46),
    DoubleDouble::new(2.4104805563059807e-29, 1.2713110536764022e-45),
    DoubleDouble::new(-5.426612705671418e-31, -2.579184215163576e-47),
    DoubleDouble::new(-5.9142429588741764e-31, -3.451637599460428e-47),
    DoubleDouble::new(1.6232110901087372e-32, -1.1425789498476998e-48),
    DoubleDouble::new(1.4527595437740276e-32, 4.111766147332459e-49),
];

#[rustfmt::skip]
const UNIT_SERIES_DD: [DoubleDouble; 16] = [
    DoubleDouble::new(-0.0006944444444444445, 2.6502719771867885e-20),
    DoubleDouble::new(1.6534391534391535e-06, -6.91519490800733e-23),
    DoubleDouble::new(-1.0935444136502338e-08, 6.32418840487898e-25),
    DoubleDouble::new(1.0438378493934049e-10, 1.7180929471183346e-27),
    DoubleDouble::new(-1.2165942300622436e-12, 2.0930175630514457e-29),
    DoubleDouble::new(1.61300065283501e-14, 5.16794199981647e-31),
    DoubleDouble::new(-2.342881045287934e-16, 1.9111835441824298e-32),
    DoubleDouble::new(3.643877167529437e-18, -3.5671322040649444e-34),
    DoubleDouble::new(-5.977486811666558e-20, -5.880562407755197e-36),
    DoubleDouble::new(1.0233713055515067e-21, -7.675779875909216e-38),
    DoubleDouble::new(-1.8145595613834747e-23, -1.0308966029643226e-39),
    DoubleDouble::new(3.313025803849127e-25, -3.4615027082689714e-42),
    DoubleDouble::new(-6.200979326536194e-27, -2.847803652158733e-43),
    DoubleDouble::new(1.185645085417335e-28, -6.068213615171608e-45),
    DoubleDouble::new(-2.3093357489590287e-30, -1.6114651243669477e-46),
    DoubleDouble::new(4.571548469627103e-32, -1.1568685235781338e-48),
];

impl Li4Coefficients for f64 {
    const LOG_SERIES: &'static [f64] = &LOG_SERIES_F64;
    const UNIT_SERIES: &'static [f64] = &UNIT_SERIES_F64;
}

impl Li4Coefficients for DoubleDouble {
    const LOG_SERIES: &'static [DoubleDouble] = &LOG_SERIES_DD;
    const UNIT_SERIES: &'static [DoubleDouble] = &UNIT_SERIES_DD;
}

/// Complex tetralogarithm Li₄(z).
pub(crate) fn li4_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();

    if z.im == zero {
        if z.re == zero {
            return Complex::new(zero, zero);
        }
        if z.re == one {
            return Complex::new(T::ZETA4, zero);
        }
        if z.re == -one {
            return Complex::new(T::from_f64(-0.875) * T::ZETA4, zero);
        }
    }

    let az = zabs(z);
    let lnz = az.ln();
    let pz = z.im.atan2(z.re);

    if lnz * lnz + pz * pz < one {
        let u = Complex::new(lnz, pz);
        let u2 = u * u;
        // ζ(4) + ζ(3) u + ζ(2) u²/2
        let head = mul_add(
            u,
            mul_add_scalar(u, T::ZETA2 * T::from_f64(0.5), Complex::new(T::ZETA3, zero)),
            Complex::new(T::ZETA4, zero),
        );
        let h3 = T::from_f64(11.0) / T::from_f64(6.0);
        let log_term = u2 * u / T::from_f64(6.0) * (-ln_neg(u) + h3);
        let a4 = Complex::new(-one / T::from_f64(48.0), zero);
        let tail = u2 * u2 * mul_add(u, horner(u2, <T as Li4Coefficients>::UNIT_SERIES), a4);
        return head + log_term + tail;
    }

    if az <= one {
        let u = -ln_one_minus(z);
        return u * horner(u, <T as Li4Coefficients>::LOG_SERIES);
    }

    let l = ln_neg(z);
    let l2 = l * l;
    let u = -ln_one_minus(zinv(z));
    let rest = -l2 * (l2 / T::from_f64(24.0) + T::ZETA2 * T::from_f64(0.5))
        - T::from_f64(1.75) * T::ZETA4;
    rest - u * horner(u, <T as Li4Coefficients>::LOG_SERIES)
}

/// Real part of Li₄(x + 0i).
pub(crate) fn li4_real<T: PolylogFloat>(x: T) -> T {
    li4_complex(Complex::new(x, T::zero())).re
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn assert_near(actual: Complex64, expected: Complex64, tol: f64) {
        let err = (actual - expected).norm() / expected.norm();
        assert!(err < tol, "actual = {actual}, expected = {expected}, rel = {err:e}");
    }

    #[test]
    fn special_values() {
        let pi4 = core::f64::consts::PI.powi(4);
        assert_eq!(li4_real(1.0_f64), f64::ZETA4);
        assert!((li4_real(1.0_f64) - pi4 / 90.0).abs() < 1e-15);
        assert!((li4_real(-1.0_f64) + 7.0 * pi4 / 720.0).abs() < 1e-15);
        assert_eq!(li4_complex(Complex64::new(0.0, 0.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn real_axis() {
        let cases = [
            (-10.0, -7.32657024802708),
            (-1.5, -1.388471171491003),
            (-0.5, -0.4857145378306064),
            (0.3, 0.30599453530775617),
            (0.9, 0.964005371204078),
            (1.5, 1.7347570807760622),
            (3.0, 3.7485098910701),
            (10.0, 9.614026386274297),
        ];
        for (x, expected) in cases {
            let v = li4_real(x);
            assert!(((v - expected) / expected).abs() < 1e-14, "x = {x}: {v}");
        }
    }

    #[test]
    fn imaginary_part_above_one() {
        // Im Li₄(x) = -π ln³(x) / 6 on the cut
        for x in [1.5_f64, 3.0, 10.0] {
            let w = li4_complex(Complex64::new(x, 0.0));
            let expected = -core::f64::consts::PI * x.ln().powi(3) / 6.0;
            assert!(((w.im - expected) / expected).abs() < 1e-14, "x = {x}");
        }
    }

    #[test]
    fn complex_plane() {
        let cases = [
            ((0.8, 0.3), (0.8377439844995181, 0.33986549509999553)),
            ((-0.5, 0.5), (-0.497705127984032, 0.47170940853503784)),
            ((-3.0, 2.0), (-2.7090923936079516, 1.55335480397641)),
            ((1.2, 0.5), (1.2746863110163924, 0.6166909590582108)),
            ((0.1, -0.7), (0.0691219841096492, -0.7045072627962198)),
            ((2.0, -3.0), (1.33310237553095, -3.3978773630472747)),
        ];
        for ((x, y), (re, im)) in cases {
            assert_near(li4_complex(Complex64::new(x, y)), Complex64::new(re, im), 1e-14);
        }
    }

    #[test]
    fn inversion_identity() {
        // Li₄(z) + Li₄(1/z) = -ln⁴(-z)/24 - ζ(2) ln²(-z)/2 - 7/4 ζ(4)
        let z = Complex64::new(-0.4, 0.3);
        let l = (-z).ln();
        let l2 = l * l;
        let expected = -l2 * l2 / 24.0 - l2 * (f64::ZETA2 / 2.0) - 1.75 * f64::ZETA4;
        let sum = li4_complex(z) + li4_complex(Complex64::new(1.0, 0.0) / z);
        assert_near(sum, expected, 1e-14);
    }

    #[test]
    fn double_double_complex() {
        let cases = [
            (
                (0.8, 0.3),
                DoubleDouble::new(0.8377439844995181, -4.3787785411882863e-17),
                DoubleDouble::new(0.33986549509999553, -1.0985196338582003e-17),
            ),
            (
                (-0.5, 0.5),
                DoubleDouble::new(-0.497705127984032, 1.7698778250186095e-17),
                DoubleDouble::new(0.47170940853503784, 1.2142788403375047e-17),
            ),
            (
                (-3.0, 2.0),
                DoubleDouble::new(-2.7090923936079516, -1.961436063189807e-16),
                DoubleDouble::new(1.55335480397641, 8.432986708874823e-17),
            ),
            (
                (1.2, 0.5),
                DoubleDouble::new(1.2746863110163924, 4.230764934020965e-17),
                DoubleDouble::new(0.6166909590582108, -1.3942118622875087e-18),
            ),
            (
                (0.1, -0.7),
                DoubleDouble::new(0.0691219841096492, -2.327907447895551e-18),
                DoubleDouble::new(-0.7045072627962198, -1.5253044304948414e-17),
            ),
        ];
        for ((x, y), re, im) in cases {
            let z = Complex::new(DoubleDouble::from_f64(x), DoubleDouble::from_f64(y));
            let w = li4_complex(z);
            assert!(((w.re - re) / re).hi.abs() < 1e-29, "re = {}", w.re);
            assert!(((w.im - im) / im).hi.abs() < 1e-29, "im = {}", w.im);
        }
    }
}
