//! Li₁(z) = -ln(1 - z).

use num_complex::Complex;

use crate::machine::PolylogFloat;
use crate::utils::ln_one_minus;

/// Complex Li₁(z), principal branch. Infinite at `z = 1`.
pub(crate) fn li1_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    -ln_one_minus(z)
}

/// Real part of Li₁(x): `-ln|1 - x|`.
pub(crate) fn li1_real<T: PolylogFloat>(x: T) -> T {
    let one = T::one();
    if x < one {
        -(-x).ln_1p()
    } else {
        -(x - one).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn zero_and_pole() {
        assert_eq!(li1_real(0.0_f64), 0.0);
        assert_eq!(li1_real(1.0_f64), f64::INFINITY);
        assert_eq!(li1_complex(Complex64::new(0.0, 0.0)).re, 0.0);
        assert_eq!(li1_complex(Complex64::new(1.0, 0.0)).re, f64::INFINITY);
    }

    #[test]
    fn small_argument_keeps_relative_accuracy() {
        let x = 1.0e-12_f64;
        assert!(((li1_real(x) - (x + x * x / 2.0)) / x).abs() < 1e-15);
        let w = li1_complex(Complex64::new(0.0, 1.0e-12));
        assert!((w.im - 1.0e-12).abs() < 1e-27);
    }

    #[test]
    fn real_part_above_one() {
        // Li₁(3) = -ln 2 - iπ from below
        assert!((li1_real(3.0_f64) + core::f64::consts::LN_2).abs() < 1e-15);
        let w = li1_complex(Complex64::new(3.0, 0.0));
        assert!((w.re + core::f64::consts::LN_2).abs() < 1e-15);
        assert_eq!(w.im, -core::f64::consts::PI);
    }

    #[test]
    fn matches_series() {
        // Σ z^k / k at z = 0.2 - 0.1i
        let z = Complex64::new(0.2, -0.1);
        let mut term = Complex64::new(1.0, 0.0);
        let mut sum = Complex64::new(0.0, 0.0);
        for k in 1..60 {
            term *= z;
            sum += term / k as f64;
        }
        assert!((li1_complex(z) - sum).norm() < 1e-15);
    }
}
