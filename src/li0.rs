//! Li₀(z) = z / (1 - z).

use num_complex::Complex;

use crate::machine::PolylogFloat;
use crate::utils::zdiv;

/// Complex Li₀(z). Non-finite at the pole `z = 1`.
pub(crate) fn li0_complex<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    zdiv(z, Complex::new(T::one(), T::zero()) - z)
}

pub(crate) fn li0_real<T: PolylogFloat>(x: T) -> T {
    x / (T::one() - x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double_double::DoubleDouble;
    use num_complex::Complex64;

    #[test]
    fn zero_and_pole() {
        assert_eq!(li0_real(0.0_f64), 0.0);
        assert_eq!(li0_real(1.0_f64), f64::INFINITY);
        assert_eq!(li0_complex(Complex64::new(0.0, 0.0)), Complex64::new(0.0, 0.0));
        let w = li0_complex(Complex64::new(1.0, 0.0));
        assert!(!w.re.is_finite());
    }

    #[test]
    fn complex_value() {
        // i / (1 - i) = (-1 + i) / 2
        let w = li0_complex(Complex64::new(0.0, 1.0));
        assert!((w.re + 0.5).abs() < 1e-15);
        assert!((w.im - 0.5).abs() < 1e-15);
    }

    #[test]
    fn double_double_third() {
        // 1/3 / (2/3) = 1/2
        let third = DoubleDouble::ONE / DoubleDouble::from_f64(3.0);
        let v = li0_real(third);
        assert!((v - DoubleDouble::from_f64(0.5)).hi.abs() < 1e-31);
    }
}
