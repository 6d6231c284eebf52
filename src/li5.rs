//! Pentalogarithm Li₅(z).

#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::double_double::DoubleDouble;
use crate::machine::PolylogFloat;
use crate::utils::{horner, ln_neg, ln_one_minus, mul_add, mul_add_scalar, zabs, zinv};

/// Per-precision coefficient tables of the pentalogarithm.
pub trait Li5Coefficients: Sized + 'static {
    /// Coefficients of `Li₅(1 - e^{-u})` in powers of `u`, from `u¹` on.
    const LOG_SERIES: &'static [Self];
    /// Coefficients `c_j` of `u^{6+2j}` in the expansion around `z = 1`.
    const UNIT_SERIES: &'static [Self];
}

#[rustfmt::skip]
const LOG_SERIES_F64: [f64; 20] = [
    1.0,
    -0.46875,
    0.13953189300411523,
    -0.02863377700617284,
    0.004031741255144033,
    -0.0003398501800411523,
    4.544518462161767e-06,
    2.391680804856901e-06,
    -1.2762692600122746e-07,
    -3.162898430650593e-08,
    3.284811844533519e-09,
    4.761371399566057e-10,
    -8.084689817190984e-11,
    -7.238764858773721e-12,
    1.9439760115173968e-12,
    1.0256978405977236e-13,
    -4.618055100988483e-14,
    -1.153585719647058e-15,
    1.0903545401333394e-15,
    2.3148136317292527e-18,
];

#[rustfmt::skip]
const UNIT_SERIES_F64: [f64; 7] = [
    -0.00011574074074074075,
    2.066798941798942e-07,
    -1.0935444136502338e-09,
    8.698648744945041e-12,
    -8.689958786158883e-14,
    1.0081254080218813e-15,
    -1.3016005807155189e-17,
];

#[rustfmt::skip]
const LOG_SERIES_DD: [DoubleDouble; 40] = [
    DoubleDouble::new(1.0, 0.0),
    DoubleDouble::new(-0.46875, 0.0),
    DoubleDouble::new(0.13953189300411523, 2.2844095156896227e-19),
    DoubleDouble::new(-0.02863377700617284, -3.4266142735344336e-19),
    DoubleDouble::new(0.004031741255144033, 1.401119732353073e-19),
    DoubleDouble::new(-0.0003398501800411523, 1.8705744543629742e-20),
    DoubleDouble::new(4.544518462161767e-06, -2.5098407413298385e-22),
    DoubleDouble::new(2.391680804856901e-06, 1.5725235632753425e-22),
    DoubleDouble::new(-1.2762692600122746e-07, -4.466175600851598e-24),
    DoubleDouble::new(-3.162898430650593e-08, 6.22052734288122e-26),
    DoubleDouble::new(3.284811844533519e-09, 1.5821762026444948e-26),
    DoubleDouble::new(4.761371399566057e-10, 4.723079050053979e-26),
    DoubleDouble::new(-8.084689817190984e-11, 4.849017629082262e-27),
    DoubleDouble::new(-7.238764858773721e-12, 4.6223179056872554e-30),
    DoubleDouble::new(1.9439760115173968e-12, 9.15811286126895e-29),
    DoubleDouble::new(1.0256978405977236e-13, 3.225319164081737e-30),
    DoubleDouble::new(-4.618055100988483e-14, 1.2408095907187135e-30),
    DoubleDouble::new(-1.153585719647058e-15, -3.5479283388393206e-32),
    DoubleDouble::new(1.0903545401333394e-15, -1.34079532668573e-32),
    DoubleDouble::new(2.3148136317292527e-18, -2.4760903829635145e-35),
    DoubleDouble::new(-2.566991704326529e-17, -1.459454522328158e-33),
    DoubleDouble::new(4.570862060731497e-19, -2.7095038189243725e-36),
    DoubleDouble::new(6.03667796132057e-19, 2.608322290114085e-35),
    DoubleDouble::new(-2.1677624944062413e-20, -1.7869777480858191e-37),
    DoubleDouble::new(-1.4194096615600164e-20, -8.849388945804918e-37),
    DoubleDouble::new(7.5020009506413865e-22, -2.3255419468780055e-38),
    DoubleDouble::new(3.3387045395078397e-22, 8.318228916929222e-40),
    DoubleDouble::new(-2.3060040442620347e-23, -1.06317909201247e-39),
    DoubleDouble::new(-7.858173245689481e-24, -5.686768888351755e-40),
    DoubleDouble::new(6.668345304373881e-25, 1.2780275345387899e-42),
    DoubleDouble::new(1.8509156540925298e-25, -9.611514591820233e-42),
    DoubleDouble::new(-1.8591529445174087e-26, 1.3845330071032718e-42),
    DoubleDouble::new(-4.362974648034589e-27, -2.2830049298803257e-43),
    DoubleDouble::new(5.061107609952928e-28, 3.1018985397838783e-44),
    DoubleDouble::new(1.0291918249756878e-28, -1.6749525856481637e-45),
    DoubleDouble::new(-1.3551391221018316e-29, -5.703495183310532e-46),
    DoubleDouble::new(-2.4294059612957383e-30, 6.131977810707683e-47),
    DoubleDouble::new(3.5851973966503707e-31, -1.6817802771248982e-47),
    DoubleDouble::new(5.737965816103972e-32, 1.1416506765195368e-48),
    DoubleDouble::new(-9.400359362456874e-33, 5.204010914756454e-49),
];

#[rustfmt::skip]
const UNIT_SERIES_DD: [DoubleDouble; 16] = [
    DoubleDouble::new(-0.00011574074074074075, 4.4171199619779814e-21),
    DoubleDouble::new(2.066798941798942e-07, -8.643993635009163e-24),
    DoubleDouble::new(-1.0935444136502338e-09, 6.324188404878981e-26),
    DoubleDouble::new(8.698648744945041e-12, 1.4317441225986122e-28),
    DoubleDouble::new(-8.689958786158883e-14, 1.4950125450367468e-30),
    DoubleDouble::new(1.0081254080218813e-15, 3.229963749885294e-32),
    DoubleDouble::new(-1.3016005807155189e-17, 3.460599865037966e-35),
    DoubleDouble::new(1.821938583764718e-19, 6.238463284515725e-36),
    DoubleDouble::new(-2.7170394598484356e-21, -2.7924896185061315e-38),
    DoubleDouble::new(4.2640471064646107e-23, 2.679230139149264e-39),
    DoubleDouble::new(-6.979075236090288e-25, 3.09928200075193e-41),
    DoubleDouble::new(1.1832235013746882e-26, 6.963346904010297e-43),
    DoubleDouble::new(-2.066993108845398e-28, 2.0401688398400321e-44),
    DoubleDouble::new(3.705140891929172e-30, -1.8963167547411273e-46),
    DoubleDouble::new(-6.792163967526555e-32, -8.757288648895049e-49),
    DoubleDouble::new(1.2698745748964175e-33, -7.014789042070384e-50),
];

impl Li5Coefficients for f64 {
    const LOG_SERIES: &'static [f64] = &LOG_SERIES_F64;
    const UNIT_SERIES: &'static [f64] = &UNIT_SERIES_F64;
}

impl Li5Coefficients for DoubleDouble {
    const LOG_SERIES: &'static [DoubleDouble] = &LOG_SERIES_DD;
    const UNIT_SERIES: &'static [DoubleDouble] = &UNIT_SERIES_DD;
}

/// Complex pentalogarithm Li₅(z).
///
/// Near `z = 1` (`|ln z| < 1`):
///   `Li₅(e^u) = Σ_{k<4} ζ(5-k) u^k/k! + u⁴/24 (25/12 - ln(-u)) - u⁵/240 + ...`
///
/// Outside the unit disk:
///   `Li₅(z) = Li₅(1/z) - L⁵/120 - ζ(2) L³/6 - 7/4 ζ(4) L`, `L = ln(-z)`
pub(crate) fn li5_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();

    if z.im == zero {
        if z.re == zero {
            return Complex::new(zero, zero);
        }
        if z.re == one {
            return Complex::new(T::ZETA5, zero);
        }
        if z.re == -one {
            return Complex::new(T::from_f64(-0.9375) * T::ZETA5, zero);
        }
    }

    let az = zabs(z);
    let lnz = az.ln();
    let pz = z.im.atan2(z.re);

    if lnz * lnz + pz * pz < one {
        let u = Complex::new(lnz, pz);
        let u2 = u * u;
        let c = |x: T| Complex::new(x, zero);
        // ((ζ(2)/6 u + ζ(3)/2) u + ζ(4)) u + ζ(5)
        let head = mul_add_scalar(u, T::ZETA2 / T::from_f64(6.0), c(T::ZETA3 * T::from_f64(0.5)));
        let head = mul_add(u, mul_add(u, head, c(T::ZETA4)), c(T::ZETA5));
        let h4 = T::from_f64(25.0) / T::from_f64(12.0);
        let log_term = u2 * u2 / T::from_f64(24.0) * (-ln_neg(u) + h4);
        let a5 = c(-one / T::from_f64(240.0));
        let tail = u2 * u2 * u * mul_add(u, horner(u2, <T as Li5Coefficients>::UNIT_SERIES), a5);
        return head + log_term + tail;
    }

    if az <= one {
        let u = -ln_one_minus(z);
        return u * horner(u, <T as Li5Coefficients>::LOG_SERIES);
    }

    let l = ln_neg(z);
    let l2 = l * l;
    let u = -ln_one_minus(zinv(z));
    let rest = -l
        * (l2 * (l2 / T::from_f64(120.0) + T::ZETA2 / T::from_f64(6.0))
            + T::from_f64(1.75) * T::ZETA4);
    rest + u * horner(u, <T as Li5Coefficients>::LOG_SERIES)
}

/// Real part of Li₅(x + 0i).
pub(crate) fn li5_real<T: PolylogFloat>(x: T) -> T {
    li5_complex(Complex::new(x, T::zero())).re
}
