use super::close;
use crate::{make_parser, Complex, Error, NumericImpl};

fn close_c(a: Complex, b: Complex) -> bool {
    close(a.re, b.re) && close(a.im, b.im)
}

#[test]
pub fn real_functions_test() {
    let parser = make_parser::<f64>();
    let evaluate = |expression: &str| parser.parse(expression).unwrap().eval(&[]).unwrap();

    assert_eq!(evaluate("abs(-3)"), 3.0);
    assert_eq!(evaluate("fabs(-3)"), 3.0);
    assert_eq!(evaluate("sqrt(16)"), 4.0);
    assert_eq!(evaluate("cbrt(27)"), 3.0);
    assert_eq!(evaluate("floor(2.7)"), 2.0);
    assert_eq!(evaluate("ceil(2.2)"), 3.0);
    assert_eq!(evaluate("trunc(-2.7)"), -2.0);
    assert_eq!(evaluate("round(2.5)"), 3.0);
    assert_eq!(evaluate("rint(2.5)"), 2.0);
    assert_eq!(evaluate("copysign(3, -1)"), -3.0);
    assert_eq!(evaluate("fmax(2, 3)"), 3.0);
    assert_eq!(evaluate("fmin(2, 3)"), 2.0);
    assert_eq!(evaluate("fmod(7.5, 2)"), 1.5);
    assert_eq!(evaluate("fdim(5, 3)"), 2.0);
    assert_eq!(evaluate("fma(2, 3, 4)"), 10.0);
    assert_eq!(evaluate("inv(4)"), 0.25);
    assert_eq!(evaluate("logb(8)"), 3.0);
    assert_eq!(evaluate("exp(0)"), 1.0);
    assert_eq!(evaluate("log(1)"), 0.0);
    assert_eq!(evaluate("erf(0)"), 0.0);
    assert!(close(evaluate("tgamma(5)"), 24.0));
    assert!(close(evaluate("lgamma(1)"), 0.0));
    assert!(close(evaluate("exp(log(7))"), 7.0));
    assert!(close(evaluate("sin(0)"), 0.0));
    assert!(close(evaluate("cos(0)"), 1.0));
    assert!(close(evaluate("atan2(1, 1)"), std::f64::consts::FRAC_PI_4));
    assert!(close(evaluate("hypot(5, 12)"), 13.0));
    assert!(close(evaluate("remainder(7, 4)"), -1.0));
}

#[test]
pub fn power_and_factorial_test() {
    let parser = make_parser::<f64>();
    let evaluate = |expression: &str| parser.parse(expression).unwrap().eval(&[]).unwrap();

    // integral exponents take the binary exponentiation path
    assert_eq!(evaluate("2 ^ 10"), 1024.0);
    assert_eq!(evaluate("pow(2, 10)"), 1024.0);
    assert_eq!(evaluate("2 ^ 256"), 2f64.powf(256.0));
    assert!(close(evaluate("2 ^ 0.5"), std::f64::consts::SQRT_2));
    assert_eq!(evaluate("pow(2, 0)"), 1.0);

    assert_eq!(evaluate("0!"), 1.0);
    assert_eq!(evaluate("1!"), 1.0);
    assert_eq!(evaluate("5!"), 120.0);
    assert!(evaluate("300!").is_infinite());
}

#[test]
pub fn real_constants_test() {
    let parser = make_parser::<f64>();

    assert!(close(
        parser.parse("pi").unwrap().eval(&[]).unwrap(),
        std::f64::consts::PI
    ));
    assert!(close(
        parser.parse("e").unwrap().eval(&[]).unwrap(),
        std::f64::consts::E
    ));
    assert!(close(parser.parse("phi").unwrap().eval(&[]).unwrap(), 1.618033988749895));
    assert!(close(
        parser.parse("gamma").unwrap().eval(&[]).unwrap(),
        0.5772156649015329
    ));
}

#[test]
pub fn complex_literal_test() {
    let parser = make_parser::<Complex>();

    assert_eq!(parser.cast("42").unwrap(), Complex::new(42.0, 0.0));
    assert_eq!(parser.cast("2j").unwrap(), Complex::new(0.0, 2.0));
    assert_eq!(parser.cast("2i").unwrap(), Complex::new(0.0, 2.0));
    assert_eq!(parser.cast("1+2j").unwrap(), Complex::new(1.0, 2.0));
    assert_eq!(parser.cast("1-2j").unwrap(), Complex::new(1.0, -2.0));
    assert_eq!(
        parser.cast("-1.5e3-2i").unwrap(),
        Complex::new(-1500.0, -2.0)
    );
    // a pure imaginary with an exponent
    assert_eq!(parser.cast("1e-2j").unwrap(), Complex::new(0.0, 0.01));
    assert!(matches!(parser.cast("j"), Err(Error::BadCast(_))));

    assert_eq!(parser.to_string(&Complex::new(0.0, 0.0)), "0j");
    assert_eq!(parser.to_string(&Complex::new(3.0, 0.0)), "3");
    assert_eq!(parser.to_string(&Complex::new(0.0, 5.0)), "5j");
    assert_eq!(parser.to_string(&Complex::new(3.0, 2.0)), "3+2j");
    assert_eq!(parser.to_string(&Complex::new(3.0, -2.0)), "3-2j");
    assert_eq!(parser.to_string(&Complex::new(-1.5, 0.5)), "-1.5+0.5j");
}

#[test]
pub fn complex_arithmetic_test() {
    let parser = make_parser::<Complex>();
    let evaluate = |expression: &str| {
        parser
            .from_infix(expression, &[])
            .unwrap_or_else(|err| panic!("{}: {}", expression, err))
            .eval(&[])
            .unwrap()
    };

    assert_eq!(evaluate("i * i"), Complex::new(-1.0, 0.0));
    assert_eq!(evaluate("(1+2j) * (1-2j)"), Complex::new(5.0, 0.0));
    assert_eq!(evaluate("(1+2j) + (3-1j)"), Complex::new(4.0, 1.0));
    assert_eq!(evaluate("conj(1+2j)"), Complex::new(1.0, -2.0));
    assert_eq!(evaluate("real(3+4j)"), Complex::new(3.0, 0.0));
    assert_eq!(evaluate("imag(3+4j)"), Complex::new(4.0, 0.0));
    assert_eq!(evaluate("abs(3+4j)"), Complex::new(5.0, 0.0));
    assert_eq!(evaluate("norm(3+4j)"), Complex::new(25.0, 0.0));
    assert_eq!(evaluate("sqrt(-1)"), Complex::new(0.0, 1.0));
    assert_eq!(evaluate("polar(1, 0)"), Complex::new(1.0, 0.0));
    assert!(close_c(evaluate("exp(log(2+1j))"), Complex::new(2.0, 1.0)));
    assert!(close_c(
        evaluate("sin(1+1j)"),
        Complex::new(1.0f64.sin() * 1.0f64.cosh(), 1.0f64.cos() * 1.0f64.sinh())
    ));
    assert!(close_c(evaluate("(1+1j) / (1-1j)"), Complex::new(0.0, 1.0)));
    assert!(close_c(evaluate("pow(i, 2)"), Complex::new(-1.0, 0.0)));
}

#[test]
pub fn complex_variables_test() {
    let parser = make_parser::<Complex>();

    let node = parser.parse("z * conj(z)").unwrap();
    assert_eq!(node.variables().to_vec(), vec!["z"]);
    assert_eq!(
        node.eval(&[Complex::new(3.0, 4.0)]).unwrap(),
        Complex::new(25.0, 0.0)
    );

    // the suffix registry is empty on the complex domain
    assert!(matches!(
        parser.from_infix("3!", &[]),
        Err(Error::UndefinedSymbol(token)) if token == "!"
    ));
}

#[test]
pub fn complex_round_trip_test() {
    let parser = make_parser::<Complex>();

    for text in ["42", "2j", "1+2j", "1-2j", "-3", "-2.5+0.5j"] {
        let value = parser.cast(text).unwrap();
        assert_eq!(parser.cast(&parser.to_string(&value)).unwrap(), value);
    }
}

#[test]
pub fn backend_hash_test() {
    assert_eq!(0.0f64.hash_value(), (-0.0f64).hash_value());
    assert_eq!(
        Complex::new(0.0, -0.0).hash_value(),
        Complex::new(-0.0, 0.0).hash_value()
    );
    assert_ne!(1.0f64.hash_value(), 2.0f64.hash_value());
}
