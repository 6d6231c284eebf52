use num_complex::Complex;
use polylogarithm::*;

fn main() {
    let z = Complex::new(0.5_f64, 0.8);

    // -- Complex polylogarithms --
    println!("=== Li_n(z), f64 ===");
    println!("Li0({z}) = {}", li0(z));
    println!("Li1({z}) = {}", li1(z));
    println!("Li2({z}) = {}", li2(z));
    println!("Li3({z}) = {}", li3(z));
    println!("Li4({z}) = {}", li4(z));
    println!("Li5({z}) = {}", li5(z));
    println!("Li6({z}) = {}", li6(z));

    // -- Real axis --
    println!("\n=== Real arguments ===");
    for x in [-2.0_f64, 0.5, 1.0, 3.0] {
        println!("Li2({x}) = {:.16}   Li3({x}) = {:.16}", li2_real(x), li3_real(x));
    }
    // the cut is approached from below
    let w = li2(Complex::new(3.0_f64, 0.0));
    println!("Li2(3 + 0i) = {w}");

    // -- Clausen functions --
    println!("\n=== Clausen functions at pi/3 ===");
    let theta = core::f64::consts::FRAC_PI_3;
    println!("Cl1 = {}", cl1(theta));
    println!("Cl2 = {}", cl2(theta));
    println!("Cl3 = {}", cl3(theta));
    println!("Cl4 = {}", cl4(theta));

    // -- Extended precision --
    println!("\n=== Double-double ===");
    let x: DoubleDouble = match "0.5".parse() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("parse error: {e}");
            return;
        }
    };
    println!("Li2(0.5) = {}", li2_real(x));
    println!("          {:.16}", li2_real(0.5_f64));
    let zd = Complex::new(DoubleDouble::from_f64(z.re), DoubleDouble::from_f64(z.im));
    let wd = li4(zd);
    println!("Li4({z}) = {} + {}i", wd.re, wd.im);
    println!("Cl2(1) = {}", cl2(DoubleDouble::ONE));
}
