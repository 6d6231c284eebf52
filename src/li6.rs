//! Hexalogarithm Li₆(z).
//!
//! The last order of the family; the structure matches [`li4`](crate::li4)
//! with one more term in each closed-form correction.

#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::double_double::DoubleDouble;
use crate::machine::PolylogFloat;
use crate::utils::{horner, ln_neg, ln_one_minus, mul_add, mul_add_scalar, zabs, zinv};

/// Per-precision coefficient tables of the hexalogarithm.
pub trait Li6Coefficients: Sized + 'static {
    /// Coefficients of `Li₆(1 - e^{-u})` in powers of `u`, from `u¹` on.
    const LOG_SERIES: &'static [Self];
    /// Coefficients `c_j` of `u^{7+2j}` in the expansion around `z = 1`.
    const UNIT_SERIES: &'static [Self];
}

#[rustfmt::skip]
const LOG_SERIES_F64: [f64; 20] = [
    1.0,
    -0.484375,
    0.15241340877914952,
    -0.03436555587705761,
    0.0057174797239369,
    -0.0006818045374657064,
    4.9960361948734496e-05,
    -4.916605119603905e-07,
    -3.0632975161302163e-07,
    1.4414599270849095e-08,
    3.72724382309241e-09,
    -3.7300867345487607e-10,
    -5.1246526816085835e-11,
    9.054193095663668e-12,
    6.738188261551252e-13,
    -2.1215831150303136e-13,
    -6.8408811719011696e-15,
    4.869117846200558e-15,
    -4.843987849987251e-18,
    -1.1027104849107491e-16,
];

#[rustfmt::skip]
const UNIT_SERIES_F64: [f64; 7] = [
    -1.6534391534391536e-05,
    2.296443268665491e-08,
    -9.941312851365762e-11,
    6.691268265342339e-13,
    -5.793305857439255e-15,
    5.930149458952243e-17,
    -6.850529372186941e-19,
];

#[rustfmt::skip]
const LOG_SERIES_DD: [DoubleDouble; 40] = [
    DoubleDouble::new(1.0, 0.0),
    DoubleDouble::new(-0.484375, 0.0),
    DoubleDouble::new(0.15241340877914952, -3.0078058623246696e-18),
    DoubleDouble::new(-0.03436555587705761, -1.1422047578448114e-19),
    DoubleDouble::new(0.0057174797239369, -2.8470374967786584e-19),
    DoubleDouble::new(-0.0006818045374657064, -1.934090557272128e-20),
    DoubleDouble::new(4.9960361948734496e-05, -2.91284219175197e-21),
    DoubleDouble::new(-4.916605119603905e-07, 3.9776054116253247e-23),
    DoubleDouble::new(-3.0632975161302163e-07, -4.1596099770421704e-24),
    DoubleDouble::new(1.4414599270849095e-08, 5.695758959999237e-25),
    DoubleDouble::new(3.72724382309241e-09, 3.8211058131337726e-25),
    DoubleDouble::new(-3.7300867345487607e-10, -2.5677238277974396e-27),
    DoubleDouble::new(-5.1246526816085835e-11, 2.3093976429884325e-27),
    DoubleDouble::new(9.054193095663668e-12, 2.9630813524927455e-28),
    DoubleDouble::new(6.738188261551252e-13, -1.9547949158019717e-29),
    DoubleDouble::new(-2.1215831150303136e-13, 1.1721668667397545e-29),
    DoubleDouble::new(-6.8408811719011696e-15, -1.6616708538796446e-31),
    DoubleDouble::new(4.869117846200558e-15, 6.965714481006567e-32),
    DoubleDouble::new(-4.843987849987251e-18, 3.4432978226633943e-34),
    DoubleDouble::new(-1.1027104849107491e-16, -1.603678141760933e-33),
    DoubleDouble::new(3.3353796916939383e-18, -1.8315249770925778e-34),
    DoubleDouble::new(2.4735307488641354e-18, -1.2311211639373851e-34),
    DoubleDouble::new(-1.4370616434232493e-19, 5.443131529840763e-36),
    DoubleDouble::new(-5.504711033509812e-20, -1.9458180258587047e-37),
    DoubleDouble::new(4.746771391732723e-21, -3.6697306489163383e-37),
    DoubleDouble::new(1.2158387178068106e-21, -7.027993450491778e-38),
    DoubleDouble::new(-1.410755240356185e-22, 1.9988532922152894e-40),
    DoubleDouble::new(-2.6638831253268345e-23, -1.5741023786959738e-39),
    DoubleDouble::new(3.966765742863101e-24, -1.4199327003768673e-40),
    DoubleDouble::new(5.7821697358543615e-25, -6.605441730061216e-43),
    DoubleDouble::new(-1.0787778063164258e-25, 7.560250427739928e-42),
    DoubleDouble::new(-1.240739708675691e-26, -3.5174736897839864e-43),
    DoubleDouble::new(2.87041179178936e-27, 2.558581071893383e-44),
    DoubleDouble::new(2.623555356302933e-28, 1.2076850693234103e-44),
    DoubleDouble::new(-7.522948546575413e-29, 4.3544959073828044e-45),
    DoubleDouble::new(-5.44017883796247e-30, 1.74753109830955e-46),
    DoubleDouble::new(1.9502579532510168e-30, -1.6404891668865524e-46),
    DoubleDouble::new(1.0978494282205188e-31, -2.5885492004978546e-48),
    DoubleDouble::new(-5.014958357416301e-32, -2.8253127512658014e-49),
    DoubleDouble::new(-2.1286737504392762e-33, 1.0058338963629755e-49),
];

#[rustfmt::skip]
const UNIT_SERIES_DD: [DoubleDouble; 16] = [
    DoubleDouble::new(-1.6534391534391536e-05, 1.1150359644278832e-21),
    DoubleDouble::new(2.296443268665491e-08, -1.328079565024586e-24),
    DoubleDouble::new(-9.941312851365762e-11, 5.7492621862536185e-27),
    DoubleDouble::new(6.691268265342339e-13, 1.8780662163703903e-29),
    DoubleDouble::new(-5.793305857439255e-15, 2.5743968404665213e-31),
    DoubleDouble::new(5.930149458952243e-17, 4.075146613593404e-33),
    DoubleDouble::new(-6.850529372186941e-19, -1.8451578433003554e-35),
    DoubleDouble::new(8.67589801792723e-21, -5.627204735292672e-37),
    DoubleDouble::new(-1.1813215042819285e-22, -8.369308926094851e-39),
    DoubleDouble::new(1.7056188425858442e-24, 1.5125024372180634e-40),
    DoubleDouble::new(-2.5848426800334399e-26, -4.464840302421883e-43),
    DoubleDouble::new(4.080081039223063e-28, -1.9283749435655393e-44),
    DoubleDouble::new(-6.667719705952897e-30, 5.225094517879313e-46),
    DoubleDouble::new(1.122769967251264e-31, 9.513938186139951e-48),
    DoubleDouble::new(-1.9406182764361586e-33, -1.5209169549951196e-49),
    DoubleDouble::new(3.432093445665993e-35, -1.3179938578369262e-51),
];

impl Li6Coefficients for f64 {
    const LOG_SERIES: &'static [f64] = &LOG_SERIES_F64;
    const UNIT_SERIES: &'static [f64] = &UNIT_SERIES_F64;
}

impl Li6Coefficients for DoubleDouble {
    const LOG_SERIES: &'static [DoubleDouble] = &LOG_SERIES_DD;
    const UNIT_SERIES: &'static [DoubleDouble] = &UNIT_SERIES_DD;
}

/// Complex hexalogarithm Li₆(z).
pub(crate) fn li6_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();

    if z.im == zero {
        if z.re == zero {
            return Complex::new(zero, zero);
        }
        if z.re == one {
            return Complex::new(T::ZETA6, zero);
        }
        if z.re == -one {
            return Complex::new(T::from_f64(-0.96875) * T::ZETA6, zero);
        }
    }

    let az = zabs(z);
    let lnz = az.ln();
    let pz = z.im.atan2(z.re);

    // around z = 1:
    //   Σ_{k<5} ζ(6-k) u^k/k! + u⁵/120 (137/60 - ln(-u)) - u⁶/1440 + u⁷ Σ c_j u^{2j}
    if lnz * lnz + pz * pz < one {
        let u = Complex::new(lnz, pz);
        let u2 = u * u;
        let c = |x: T| Complex::new(x, zero);
        let head = mul_add_scalar(u, T::ZETA2 / T::from_f64(24.0), c(T::ZETA3 / T::from_f64(6.0)));
        let head = mul_add(u, head, c(T::ZETA4 * T::from_f64(0.5)));
        let head = mul_add(u, mul_add(u, head, c(T::ZETA5)), c(T::ZETA6));
        let h5 = T::from_f64(137.0) / T::from_f64(60.0);
        let u5 = u2 * u2 * u;
        let log_term = u5 / T::from_f64(120.0) * (-ln_neg(u) + h5);
        let a6 = c(-one / T::from_f64(1440.0));
        let tail = u5 * u * mul_add(u, horner(u2, <T as Li6Coefficients>::UNIT_SERIES), a6);
        return head + log_term + tail;
    }

    if az <= one {
        let u = -ln_one_minus(z);
        return u * horner(u, <T as Li6Coefficients>::LOG_SERIES);
    }

    // Li₆(z) = -Li₆(1/z) - L⁶/720 - ζ(2) L⁴/24 - 7/8 ζ(4) L² - 31/16 ζ(6)
    let l = ln_neg(z);
    let l2 = l * l;
    let u = -ln_one_minus(zinv(z));
    let poly = l2 * (l2 / T::from_f64(720.0) + T::ZETA2 / T::from_f64(24.0))
        + T::from_f64(0.875) * T::ZETA4;
    let rest = -l2 * poly - T::from_f64(1.9375) * T::ZETA6;
    rest - u * horner(u, <T as Li6Coefficients>::LOG_SERIES)
}

/// Real part of Li₆(x + 0i).
pub(crate) fn li6_real<T: PolylogFloat>(x: T) -> T {
    li6_complex(Complex::new(x, T::zero())).re
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
        let pi6 = core::f64::consts::PI.powi(6);
        assert!((li6_real(1.0_f64) - pi6 / 945.0).abs() < 1e-15);
        assert!((li6_real(-1.0_f64) + 31.0 * pi6 / 30240.0).abs() < 1e-15);
        let w = li6_complex(Complex::new(DoubleDouble::ONE, DoubleDouble::ZERO));
        assert_eq!(w.re, <DoubleDouble as PolylogFloat>::ZETA6);
    }

    #[test]
    fn real_axis() {
        let cases = [
            (-10.0, -9.025961998033948, 0.0),
            (-1.5, -1.4685675014555621, 0.0),
            (-0.5, -0.4962516784926482, 0.0),
            (0.3, 0.301445437874462, 0.0),
            (0.9, 0.913872802102794, 0.0),
            (1.5, 1.5422441352380307, -0.00028690364349674864),
            (3.0, 3.2031143530570154, -0.041897768180726526),
            (10.0, 11.319175127027846, -1.694521447832582),
        ];
        for (x, re, im) in cases {
            assert_near(li6_complex(Complex64::new(x, 0.0)), Complex64::new(re, im), 1e-14);
            assert!(((li6_real(x) - re) / re).abs() < 1e-14);
        }
    }

    #[test]
    fn complex_plane() {
        let cases = [
            ((0.8, 0.3), (0.8090023207259969, 0.30841903613049465)),
            ((-0.5, 0.5), (-0.49971044622811117, 0.4925246189605264)),
            ((-3.0, 2.0), (-2.921471919504322, 1.8554699620394892)),
            ((1.2, 0.5), (1.2194586437963126, 0.5225113182311695)),
            ((0.1, -0.7), (0.09235633033714095, -0.7017230091922613)),
            ((2.0, -3.0), (1.8624526447347016, -3.160843585414516)),
        ];
        for ((x, y), (re, im)) in cases {
            assert_near(li6_complex(Complex64::new(x, y)), Complex64::new(re, im), 1e-14);
        }
    }

    #[test]
    fn continuous_across_near_one_boundary() {
        // |ln z| = 1 separates the expansion around z = 1 from the other regions
        for phi in [0.3_f64, 1.2, 2.0, -2.8] {
            let at = |r: f64| li6_complex(Complex64::from_polar(r, phi).exp());
            let (inner, outer) = (at(1.0 - 1e-12), at(1.0 + 1e-12));
            assert!((inner - outer).norm() < 1e-11, "phi = {phi}");
        }
    }

    #[test]
    fn double_double_complex() {
        let cases = [
            (
                (0.8, 0.3),
                DoubleDouble::new(0.8090023207259969, 3.73822518747214e-17),
                DoubleDouble::new(0.30841903613049465, 8.223418697138177e-18),
            ),
            (
                (-0.5, 0.5),
                DoubleDouble::new(-0.49971044622811117, 1.1207106809799678e-17),
                DoubleDouble::new(0.4925246189605264, -1.0279024845221822e-18),
            ),
            (
                (-3.0, 2.0),
                DoubleDouble::new(-2.921471919504322, -1.3040434057255262e-16),
                DoubleDouble::new(1.8554699620394892, -3.5779585708740543e-17),
            ),
            (
                (1.2, 0.5),
                DoubleDouble::new(1.2194586437963126, -8.630392162731021e-17),
                DoubleDouble::new(0.5225113182311695, 4.9569339043368643e-17),
            ),
            (
                (0.1, -0.7),
                DoubleDouble::new(0.09235633033714095, -6.253784941535183e-18),
                DoubleDouble::new(-0.7017230091922613, 4.7300004349518053e-17),
            ),
        ];
        for ((x, y), re, im) in cases {
            let z = Complex::new(DoubleDouble::from_f64(x), DoubleDouble::from_f64(y));
            let w = li6_complex(z);
            assert!(((w.re - re) / re).hi.abs() < 1e-29, "re = {}", w.re);
            assert!(((w.im - im) / im).hi.abs() < 1e-29, "im = {}", w.im);
        }
    }
}
