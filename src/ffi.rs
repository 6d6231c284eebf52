//! C-linkage entry points, compiled with the `capi` feature.
//!
//! Real functions take and return scalars. Complex functions take the real
//! and imaginary parts by value and write the result through two output
//! pointers; a null output pointer is skipped. The `l` variants operate on
//! [`DoubleDouble`], which is `#[repr(C)]` and lays out as
//! `struct { double hi; double lo; }`.
//!
//! ```c
//! double li2(double x);
//! void cli4_(double re, double im, double* res_re, double* res_im);
//! ```

use num_complex::Complex;

use crate::double_double::DoubleDouble;

/// Writes `w` through the output pointers, skipping null ones.
///
/// # Safety
///
/// Each non-null pointer must be valid for a write of `T`.
#[inline]
unsafe fn store<T: Copy>(w: Complex<T>, res_re: *mut T, res_im: *mut T) {
    if let Some(re) = res_re.as_mut() {
        *re = w.re;
    }
    if let Some(im) = res_im.as_mut() {
        *im = w.im;
    }
}

/// Real dilogarithm.
#[no_mangle]
pub extern "C" fn li2(x: f64) -> f64 {
    crate::li2_real(x)
}

/// Real dilogarithm in double-double precision.
#[no_mangle]
pub extern "C" fn li2l(x: DoubleDouble) -> DoubleDouble {
    crate::li2_real(x)
}

macro_rules! complex_entry {
    ($($name:ident, $name_l:ident => $func:path;)*) => {
        $(
            #[doc = concat!("`", stringify!($func), "` on `re + i im`.")]
            ///
            /// # Safety
            ///
            /// `res_re` and `res_im` must each be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn $name(re: f64, im: f64, res_re: *mut f64, res_im: *mut f64) {
                store($func(Complex::new(re, im)), res_re, res_im);
            }

            #[doc = concat!("`", stringify!($func), "` on `re + i im` in double-double precision.")]
            ///
            /// # Safety
            ///
            /// `res_re` and `res_im` must each be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn $name_l(
                re: DoubleDouble,
                im: DoubleDouble,
                res_re: *mut DoubleDouble,
                res_im: *mut DoubleDouble,
            ) {
                store($func(Complex::new(re, im)), res_re, res_im);
            }
        )*
    };
}

complex_entry! {
    cli2_, cli2l_ => crate::li2;
    cli3_, cli3l_ => crate::li3;
    cli4_, cli4l_ => crate::li4;
    cli5_, cli5l_ => crate::li5;
    cli6_, cli6l_ => crate::li6;
}
