use super::{hash_real, read_real, write_real};
use crate::util::hash_combine;
use crate::{precedence, Associativity, Complex, Error, Function, NumericImpl, Operator, Parser};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

const COMPLEX_PATTERN: &str = r"^(?:(?:(?:[+\-]?(?:(?:NaN|Inf)|(?:(?:\d+\.?\d*?|\.\d+?)(?:[eE][+\-]?\d+?)?)))(?:[+\-](?:(?:NaN|Inf)|(?:(?:\d+\.?\d*?|\.\d+?)(?:[eE][+\-]?\d+?)?)))[ij])|(?:(?:[+\-]?(?:(?:NaN|Inf)|(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+\-]?\d+)?)))[ij]?))$";

/// Split `a±b` at the sign which separates the components, skipping exponent signs.
fn split_components(body: &str) -> Option<(&str, &str)> {
    let bytes = body.as_bytes();
    for i in (1..bytes.len()).rev() {
        if (bytes[i] == b'+' || bytes[i] == b'-') && bytes[i - 1] != b'e' && bytes[i - 1] != b'E' {
            return Some((&body[..i], &body[i..]));
        }
    }
    None
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Squared magnitude.
    pub fn norm(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Projection onto the Riemann sphere: every infinity maps to the real one.
    pub fn proj(self) -> Self {
        if self.re.is_infinite() || self.im.is_infinite() {
            Self::new(f64::INFINITY, 0.0f64.copysign(self.im))
        } else {
            self
        }
    }

    pub fn exp(self) -> Self {
        let magnitude = self.re.exp();
        Self::new(magnitude * self.im.cos(), magnitude * self.im.sin())
    }

    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    pub fn log10(self) -> Self {
        let log = self.ln();
        Self::new(log.re / std::f64::consts::LN_10, log.im / std::f64::consts::LN_10)
    }

    pub fn sqrt(self) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return Self::new(0.0, 0.0);
        }
        let magnitude = self.abs();
        let re = ((magnitude + self.re) / 2.0).sqrt();
        let im = ((magnitude - self.re) / 2.0).sqrt();
        Self::new(re, if self.im < 0.0 { -im } else { im })
    }

    pub fn powc(self, exponent: Self) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            if exponent.re == 0.0 && exponent.im == 0.0 {
                return Self::new(1.0, 0.0);
            }
            return Self::new(0.0, 0.0);
        }
        (exponent * self.ln()).exp()
    }

    pub fn sin(self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    pub fn cos(self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    pub fn sinh(self) -> Self {
        Self::new(
            self.re.sinh() * self.im.cos(),
            self.re.cosh() * self.im.sin(),
        )
    }

    pub fn cosh(self) -> Self {
        Self::new(
            self.re.cosh() * self.im.cos(),
            self.re.sinh() * self.im.sin(),
        )
    }

    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    pub fn asin(self) -> Self {
        let one = Self::new(1.0, 0.0);
        -Self::i() * (Self::i() * self + (one - self * self).sqrt()).ln()
    }

    pub fn acos(self) -> Self {
        let one = Self::new(1.0, 0.0);
        -Self::i() * (self + Self::i() * (one - self * self).sqrt()).ln()
    }

    pub fn atan(self) -> Self {
        let i = Self::i();
        Self::new(0.0, 0.5) * ((i + self) / (i - self)).ln()
    }

    pub fn asinh(self) -> Self {
        let one = Self::new(1.0, 0.0);
        (self + (self * self + one).sqrt()).ln()
    }

    pub fn acosh(self) -> Self {
        let one = Self::new(1.0, 0.0);
        (self + (self * self - one).sqrt()).ln()
    }

    pub fn atanh(self) -> Self {
        let one = Self::new(1.0, 0.0);
        Self::new(0.5, 0.0) * ((one + self) / (one - self)).ln()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, other: Self) -> Self {
        let norm = other.norm();
        Self::new(
            (self.re * other.re + self.im * other.im) / norm,
            (self.im * other.re - self.re * other.im) / norm,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write())
    }
}

impl NumericImpl for Complex {
    fn literal_pattern() -> &'static str {
        COMPLEX_PATTERN
    }

    fn read(token: &str) -> Option<Self> {
        match token.strip_suffix(&['i', 'j'][..]) {
            Some(body) => {
                if let Some(imaginary) = read_real(body) {
                    return Some(Complex::new(0.0, imaginary));
                }
                let (re, im) = split_components(body)?;
                Some(Complex::new(read_real(re)?, read_real(im)?))
            }
            None => read_real(token).map(|re| Complex::new(re, 0.0)),
        }
    }

    fn write(&self) -> String {
        if self.re == 0.0 && self.im == 0.0 {
            return "0j".to_string();
        }
        let mut token = String::new();
        if self.re != 0.0 {
            token.push_str(&write_real(self.re));
            if self.im > 0.0 && self.im.is_finite() {
                token.push('+');
            }
        }
        if self.re == 0.0 || self.im != 0.0 {
            token.push_str(&write_real(self.im));
            token.push('j');
        }
        token
    }

    fn hash_value(&self) -> u64 {
        let mut seed = hash_real(self.re);
        hash_combine(&mut seed, hash_real(self.im));
        seed
    }

    fn install(parser: &mut Parser<Self>) -> Result<(), Error> {
        parser.constants.insert("i", Complex::i())?;
        parser
            .constants
            .insert("pi", Complex::new(std::f64::consts::PI, 0.0))?;
        parser
            .constants
            .insert("e", Complex::new(std::f64::consts::E, 0.0))?;
        parser
            .constants
            .insert("phi", Complex::new(1.618033988749895, 0.0))?;
        parser
            .constants
            .insert("gamma", Complex::new(0.5772156649015329, 0.0))?;

        let unary: &[(&str, fn(Complex) -> Complex)] = &[
            ("id", |z| z),
            ("neg", |z| -z),
            ("inv", |z| Complex::new(1.0, 0.0) / z),
            ("real", |z| Complex::new(z.re, 0.0)),
            ("imag", |z| Complex::new(z.im, 0.0)),
            ("abs", |z| Complex::new(z.abs(), 0.0)),
            ("arg", |z| Complex::new(z.arg(), 0.0)),
            ("norm", |z| Complex::new(z.norm(), 0.0)),
            ("conj", Complex::conj),
            ("proj", Complex::proj),
            ("exp", Complex::exp),
            ("log", Complex::ln),
            ("log10", Complex::log10),
            ("sqrt", Complex::sqrt),
            ("sin", Complex::sin),
            ("sinh", Complex::sinh),
            ("cos", Complex::cos),
            ("cosh", Complex::cosh),
            ("tan", Complex::tan),
            ("tanh", Complex::tanh),
            ("asin", Complex::asin),
            ("asinh", Complex::asinh),
            ("acos", Complex::acos),
            ("acosh", Complex::acosh),
            ("atan", Complex::atan),
            ("atanh", Complex::atanh),
        ];
        for (name, body) in unary {
            parser.functions.insert(name, Function::unary(*body))?;
        }

        parser
            .functions
            .insert("pow", Function::binary(Complex::powc))?;
        parser.functions.insert(
            "polar",
            Function::binary(|z1: Complex, z2| z1 * (Complex::i() * z2).exp()),
        )?;

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
            "^",
            Operator::new(Complex::powc, precedence::HIGH, Associativity::Right),
        )?;

        parser.prefixes.insert("+", "id")?;
        parser.prefixes.insert("-", "neg")?;
        Ok(())
    }
}
