//! Trilogarithm Li₃(z).
//!
//! Three regions, tried in order:
//!
//! - `|ln z| < 1`: expansion around `z = 1` in `u = ln z`,
//!   ```text
//!   Li₃(e^u) = ζ(3) + ζ(2) u + u²/2 (3/2 - ln(-u)) - u³/12 + Σ_j c_j u^{4+2j}
//!   ```
//! - `|z| <= 1`: series in `u = -ln(1 - z)`, convergent for `|u| < 2π`.
//! - `|z| > 1`: inversion
//!   ```text
//!   Li₃(z) = Li₃(1/z) - ln³(-z)/6 - ζ(2) ln(-z)
//!   ```

#![allow(clippy::excessive_precision)]

use num_complex::Complex;

use crate::double_double::DoubleDouble;
use crate::machine::PolylogFloat;
use crate::utils::{horner, ln_neg, ln_one_minus, mul_add, mul_add_scalar, zabs, zinv};

/// Per-precision coefficient tables of the trilogarithm.
pub trait Li3Coefficients: Sized + 'static {
    /// Coefficients of `Li₃(1 - e^{-u})` in powers of `u`, from `u¹` on.
    const LOG_SERIES: &'static [Self];
    /// Coefficients `c_j` of `u^{4+2j}` in the expansion around `z = 1`.
    const UNIT_SERIES: &'static [Self];
}

#[rustfmt::skip]
const LOG_SERIES_F64: [f64; 20] = [
    1.0,
    -0.375,
    0.0787037037037037,
    -0.008680555555555556,
    0.00012962962962962963,
    8.101851851851852e-05,
    -3.4193571608537595e-06,
    -1.328656462585034e-06,
    8.660871756109851e-08,
    2.52608759553204e-08,
    -2.144694468364065e-09,
    -5.140110622012979e-10,
    5.24958211460083e-11,
    1.0887754406636318e-11,
    -1.2779396094493695e-12,
    -2.369824177308745e-13,
    3.104357887965462e-14,
    5.261758629912506e-15,
    -7.538479549949265e-16,
    -1.1862322577752286e-16,
];

#[rustfmt::skip]
const UNIT_SERIES_F64: [f64; 7] = [
    -0.003472222222222222,
    1.1574074074074073e-05,
    -9.841899722852104e-08,
    1.1482216343327454e-09,
    -1.5815724990809165e-11,
    2.4195009792525154e-13,
    -3.982897776989488e-15,
];

#[rustfmt::skip]
const LOG_SERIES_DD: [DoubleDouble; 40] = [
    DoubleDouble::new(1.0, 0.0),
    DoubleDouble::new(-0.375, 0.0),
    DoubleDouble::new(0.0787037037037037, -2.569960705150825e-18),
    DoubleDouble::new(-0.008680555555555556, 3.854941057726238e-19),
    DoubleDouble::new(0.00012962962962962963, -1.6945678399588254e-21),
    DoubleDouble::new(8.101851851851852e-05, 2.3290268890429353e-21),
    DoubleDouble::new(-3.4193571608537595e-06, 1.6241276739780114e-23),
    DoubleDouble::new(-1.328656462585034e-06, -9.190595584153803e-23),
    DoubleDouble::new(8.660871756109851e-08, 2.932176663844913e-24),
    DoubleDouble::new(2.52608759553204e-08, 8.552181936214329e-25),
    DoubleDouble::new(-2.144694468364065e-09, 1.0557426741407663e-25),
    DoubleDouble::new(-5.140110622012979e-10, 4.852585818013014e-26),
    DoubleDouble::new(5.24958211460083e-11, -2.8362249542663327e-27),
    DoubleDouble::new(1.0887754406636318e-11, 1.4057680600926463e-28),
    DoubleDouble::new(-1.2779396094493695e-12, -3.411615115198617e-29),
    DoubleDouble::new(-2.369824177308745e-13, -1.2962371758079893e-29),
    DoubleDouble::new(3.104357887965462e-14, -4.501468023130519e-33),
    DoubleDouble::new(5.261758629912506e-15, 2.4295213584383807e-31),
    DoubleDouble::new(-7.538479549949265e-16, -1.0778969487531185e-32),
    DoubleDouble::new(-1.1862322577752286e-16, 5.248114757036437e-33),
    DoubleDouble::new(1.8316979965491384e-17, -5.165960571428105e-34),
    DoubleDouble::new(2.706817103183735e-18, -6.008426465780863e-35),
    DoubleDouble::new(-4.455433897829639e-19, -1.624351595522728e-35),
    DoubleDouble::new(-6.237548492255695e-20, -3.537092781458759e-37),
    DoubleDouble::new(1.0851521534874535e-20, 8.804096533183173e-38),
    DoubleDouble::new(1.4491174866036082e-21, 3.399137759855682e-38),
    DoubleDouble::new(-2.646633975445899e-22, 1.9159151668661663e-38),
    DoubleDouble::new(-3.389765348851011e-23, 2.4438319349299207e-39),
    DoubleDouble::new(6.464047733603311e-24, 6.551058010480023e-41),
    DoubleDouble::new(7.975834489602412e-25, -1.1136797041513875e-42),
    DoubleDouble::new(-1.5809178790287483e-25, -1.2572965407854707e-42),
    DoubleDouble::new(-1.886149972962287e-26, 1.4147914043343233e-42),
    DoubleDouble::new(3.8715536638418474e-27, -4.2483226346501345e-44),
    DoubleDouble::new(4.480117500234561e-28, -8.490924025405926e-45),
    DoubleDouble::new(-9.493033871911836e-29, -1.4074707118008614e-47),
    DoubleDouble::new(-1.068281380907738e-29, -6.77813822507805e-46),
    DoubleDouble::new(2.3304478936103053e-30, -1.1075092237789065e-46),
    DoubleDouble::new(2.5560775726519755e-31, -4.235120906230218e-48),
    DoubleDouble::new(-5.72742160613726e-32, 2.7450898118513066e-48),
    DoubleDouble::new(-6.134713213796424e-33, 3.041515271163438e-49),
];

#[rustfmt::skip]
const UNIT_SERIES_DD: [DoubleDouble; 16] = [
    DoubleDouble::new(-0.003472222222222222, -1.927470528863119e-19),
    DoubleDouble::new(1.1574074074074073e-05, 5.747275405073623e-22),
    DoubleDouble::new(-9.841899722852104e-08, -9.256753360331388e-25),
    DoubleDouble::new(1.1482216343327454e-09, 5.767311363172485e-26),
    DoubleDouble::new(-1.5815724990809165e-11, -1.1415464589593653e-27),
    DoubleDouble::new(2.4195009792525154e-13, -2.3802523209115765e-29),
    DoubleDouble::new(-3.982897776989488e-15, 2.262935893583866e-31),
    DoubleDouble::new(6.92336661830593e-17, -5.236807232213606e-33),
    DoubleDouble::new(-1.2552722304499772e-18, -3.923237549591757e-35),
    DoubleDouble::new(2.3537540027684653e-20, -2.6079660240659186e-37),
    DoubleDouble::new(-4.536398903458687e-22, -4.6343566213498095e-38),
    DoubleDouble::new(8.945169670392643e-24, 2.2796366342970702e-40),
    DoubleDouble::new(-1.7982840046954963e-25, 3.220806428488576e-42),
    DoubleDouble::new(3.6754997647937386e-27, -1.2085229578272862e-43),
    DoubleDouble::new(-7.620807971564795e-29, -2.164913365680089e-45),
    DoubleDouble::new(1.600041964369486e-30, 1.97216450637223e-47),
];

impl Li3Coefficients for f64 {
    const LOG_SERIES: &'static [f64] = &LOG_SERIES_F64;
    const UNIT_SERIES: &'static [f64] = &UNIT_SERIES_F64;
}

impl Li3Coefficients for DoubleDouble {
    const LOG_SERIES: &'static [DoubleDouble] = &LOG_SERIES_DD;
    const UNIT_SERIES: &'static [DoubleDouble] = &UNIT_SERIES_DD;
}

/// Complex trilogarithm Li₃(z).
///
/// On the cut `x > 1` a zero imaginary part of either sign selects the
/// value from below, `Im Li₃(x) = -π ln²(x) / 2`.
pub(crate) fn li3_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();

    if z.im == zero {
        if z.re == zero {
            return Complex::new(zero, zero);
        }
        if z.re == one {
            return Complex::new(T::ZETA3, zero);
        }
        if z.re == -one {
            return Complex::new(T::from_f64(-0.75) * T::ZETA3, zero);
        }
    }

    let az = zabs(z);
    let lnz = az.ln();
    let pz = z.im.atan2(z.re);

    if lnz * lnz + pz * pz < one {
        let u = Complex::new(lnz, pz);
        let u2 = u * u;
        let head = mul_add_scalar(u, T::ZETA2, Complex::new(T::ZETA3, zero));
        let log_term = u2 * T::from_f64(0.5) * (-ln_neg(u) + T::from_f64(1.5));
        let a3 = Complex::new(-one / T::from_f64(12.0), zero);
        let tail = u2 * u * mul_add(u, horner(u2, <T as Li3Coefficients>::UNIT_SERIES), a3);
        return head + log_term + tail;
    }

    if az <= one {
        let u = -ln_one_minus(z);
        return u * horner(u, <T as Li3Coefficients>::LOG_SERIES);
    }

    let l = ln_neg(z);
    let u = -ln_one_minus(zinv(z));
    let rest = -l * (l * l / T::from_f64(6.0) + T::ZETA2);
    rest + u * horner(u, <T as Li3Coefficients>::LOG_SERIES)
}

/// Real part of Li₃(x + 0i).
pub(crate) fn li3_real<T: PolylogFloat>(x: T) -> T {
    li3_complex(Complex::new(x, T::zero())).re
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        a == b || ((a - b) / b).abs() < tol
    }

    #[test]
    fn special_values() {
        assert_eq!(li3_real(1.0_f64), f64::ZETA3);
        assert_eq!(li3_real(0.0_f64), 0.0);
        assert!((li3_real(-1.0_f64) + 0.75 * 1.2020569031595942).abs() < 1e-15);
    }

    #[test]
    fn real_axis() {
        let cases = [
            (-10.0, -5.921064803756973, 0.0),
            (-1.5, -1.2978374501562502, 0.0),
            (-0.5, -0.47259784465889687, 0.0),
            (0.3, 0.3124001778928926, 0.0),
            (0.9, 1.04965895018644, 0.0),
            (1.5, 2.060877507320281, -0.25824198529328823),
            (3.0, 3.7421225942407315, -1.8958709942733214),
            (10.0, 5.641811414751341, -8.32820207698027),
        ];
        for (x, re, im) in cases {
            let w = li3_complex(Complex64::new(x, 0.0));
            assert!(close(w.re, re, 1e-14), "x = {x}: {} vs {re}", w.re);
            assert!(close(w.im, im, 1e-14), "x = {x}: {} vs {im}", w.im);
            assert_eq!(li3_real(x), w.re);
        }
    }

    #[test]
    fn negative_zero_imaginary_part_takes_same_side() {
        let a = li3_complex(Complex64::new(3.0, 0.0));
        let b = li3_complex(Complex64::new(3.0, -0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn complex_plane() {
        let cases = [
            ((0.8, 0.3), (0.8771544778313602, 0.39395205868652944)),
            ((-0.5, 0.5), (-0.4937442871899012, 0.4461774186959056)),
            ((-3.0, 2.0), (-2.466410148606689, 1.2712148255191351)),
            ((1.2, 0.5), (1.321263054426346, 0.786683929941868)),
            ((0.1, -0.7), (0.03830189417710458, -0.7047715310407626)),
            ((2.0, -3.0), (0.676600146851506, -3.4098814160096014)),
        ];
        for ((x, y), (re, im)) in cases {
            let w = li3_complex(Complex64::new(x, y));
            assert!(close(w.re, re, 1e-14), "z = {x}+{y}i: {w}");
            assert!(close(w.im, im, 1e-14), "z = {x}+{y}i: {w}");
        }
    }

    #[test]
    fn double_double_complex() {
        let cases = [
            (
                (0.8, 0.3),
                DoubleDouble::new(0.8771544778313602, -1.2241865964597606e-17),
                DoubleDouble::new(0.39395205868652944, -1.6374634665632362e-17),
            ),
            (
                (-0.5, 0.5),
                DoubleDouble::new(-0.4937442871899012, -3.7135267521482485e-18),
                DoubleDouble::new(0.4461774186959056, -2.0184343566792062e-17),
            ),
            (
                (-3.0, 2.0),
                DoubleDouble::new(-2.466410148606689, -1.252641577524089e-16),
                DoubleDouble::new(1.2712148255191351, -2.8621873072911433e-17),
            ),
            (
                (1.2, 0.5),
                DoubleDouble::new(1.321263054426346, -5.576721462533299e-17),
                DoubleDouble::new(0.786683929941868, -1.996053837003305e-17),
            ),
            (
                (0.1, -0.7),
                DoubleDouble::new(0.03830189417710458, 1.506466705216121e-18),
                DoubleDouble::new(-0.7047715310407626, 1.0902865839161927e-17),
            ),
        ];
        for ((x, y), re, im) in cases {
            let z = Complex::new(DoubleDouble::from_f64(x), DoubleDouble::from_f64(y));
            let w = li3_complex(z);
            assert!(((w.re - re) / re).hi.abs() < 1e-29, "re = {}", w.re);
            assert!(((w.im - im) / im).hi.abs() < 1e-29, "im = {}", w.im);
        }
    }

    #[test]
    fn small_argument() {
        // Li₃(z) = z + z²/8 + ...
        let z = Complex64::new(1.0e-8, -3.0e-8);
        let w = li3_complex(z);
        let expected = z + z * z / 8.0;
        assert!((w - expected).norm() < 1e-22);
    }
}
