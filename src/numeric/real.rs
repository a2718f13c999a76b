use super::{hash_real, read_real, write_real};
use crate::{precedence, Associativity, Error, Function, NumericImpl, Operator, Parser};

const REAL_PATTERN: &str =
    r"^[+\-]?(?:(?:NaN|Inf)|(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+\-]?\d+)?))$";

/// Power with fast binary exponentiation for integral exponents in `(0, 256]`.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent <= 0.0 || exponent > 256.0 || exponent.trunc() != exponent {
        return base.powf(exponent);
    }
    let mut exponent = exponent as u32;
    let mut base = base;
    let mut product = 1.0;
    while exponent != 0 {
        if exponent & 1 == 1 {
            product *= base;
        }
        exponent >>= 1;
        base *= base;
    }
    product
}

/// Iterated factorial, saturating to infinity past 256.
fn factorial(x: f64) -> f64 {
    if x > 256.0 {
        return f64::INFINITY;
    }
    let mut product = 1.0;
    let mut factor = 2.0;
    while factor <= x {
        product *= factor;
        factor += 1.0;
    }
    product
}

/// Unbiased binary exponent as a value, with the conventional edge cases.
fn logb(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    let exponent = ((x.to_bits() >> 52) & 0x7ff) as i64;
    if exponent == 0 {
        // subnormal: renormalize, then compensate the scaling
        return logb(x * 2f64.powi(64)) - 64.0;
    }
    (exponent - 1023) as f64
}

impl NumericImpl for f64 {
    fn literal_pattern() -> &'static str {
        REAL_PATTERN
    }

    fn read(token: &str) -> Option<Self> {
        read_real(token)
    }

    fn write(&self) -> String {
        write_real(*self)
    }

    fn hash_value(&self) -> u64 {
        hash_real(*self)
    }

    fn install(parser: &mut Parser<Self>) -> Result<(), Error> {
        parser.constants.insert("pi", std::f64::consts::PI)?;
        parser.constants.insert("e", std::f64::consts::E)?;
        parser.constants.insert("phi", 1.618033988749895)?;
        parser.constants.insert("gamma", 0.5772156649015329)?;

        let unary: &[(&str, fn(f64) -> f64)] = &[
            ("id", |x| x),
            ("neg", |x| -x),
            ("inv", |x| 1.0 / x),
            ("fabs", f64::abs),
            ("abs", f64::abs),
            ("ceil", f64::ceil),
            ("floor", f64::floor),
            ("trunc", f64::trunc),
            ("round", f64::round),
            ("rint", f64::round_ties_even),
            ("nearbyint", f64::round_ties_even),
            ("sqrt", f64::sqrt),
            ("cbrt", f64::cbrt),
            ("exp", f64::exp),
            ("expm1", f64::exp_m1),
            ("exp2", f64::exp2),
            ("log", f64::ln),
            ("log10", f64::log10),
            ("log1p", f64::ln_1p),
            ("log2", f64::log2),
            ("logb", logb),
            ("sin", f64::sin),
            ("cos", f64::cos),
            ("tan", f64::tan),
            ("asin", f64::asin),
            ("acos", f64::acos),
            ("atan", f64::atan),
            ("sinh", f64::sinh),
            ("cosh", f64::cosh),
            ("tanh", f64::tanh),
            ("asinh", f64::asinh),
            ("acosh", f64::acosh),
            ("atanh", f64::atanh),
            ("erf", libm::erf),
            ("erfc", libm::erfc),
            ("tgamma", libm::tgamma),
            ("lgamma", libm::lgamma),
            ("fact", factorial),
        ];
        for (name, body) in unary {
            parser.functions.insert(name, Function::unary(*body))?;
        }

        let binary: &[(&str, fn(f64, f64) -> f64)] = &[
            ("copysign", f64::copysign),
            ("nextafter", libm::nextafter),
            ("fdim", libm::fdim),
            ("fmax", f64::max),
            ("fmin", f64::min),
            ("fmod", |x, y| x % y),
            ("remainder", libm::remainder),
            ("pow", power),
            ("hypot", f64::hypot),
            ("atan2", f64::atan2),
        ];
        for (name, body) in binary {
            parser.functions.insert(name, Function::binary(*body))?;
        }
        parser.functions.insert("fma", Function::ternary(f64::mul_add))?;

        parser.operators.insert(
            "+",
            Operator::new(|x, y| x + y, precedence::LOW, Associativity::Full),
        )?;
        parser.operators.insert(
            "-",
            Operator::new(|x, y| x - y, precedence::LOW, Associativity::Left),
        )?;
        parser.operators.insert(
            "*",
            Operator::new(|x, y| x * y, precedence::NORMAL, Associativity::Full),
        )?;
        parser.operators.insert(
            "/",
            Operator::new(|x, y| x / y, precedence::NORMAL, Associativity::Left),
        )?;
        parser.operators.insert(
            "%",
            Operator::new(|x: f64, y| x % y, precedence::NORMAL, Associativity::Left),
        )?;
        parser.operators.insert(
            "^",
            Operator::new(power, precedence::HIGH, Associativity::Right),
        )?;
        parser.operators.insert(
            "**",
            Operator::new(power, precedence::HIGH, Associativity::Right),
        )?;

        parser.prefixes.insert("+", "id")?;
        parser.prefixes.insert("-", "neg")?;
        parser.suffixes.insert("!", "fact")?;
        Ok(())
    }
}
