use crate::Error;
use std::fmt::{Display, Formatter};

impl Error {
    /// The token the error reports about, when it carries one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::BadCast(token)
            | Error::UnsuitableName(token)
            | Error::UndefinedSymbol(token)
            | Error::RepeatedSymbol(token)
            | Error::UnusedSymbol(token) => Some(token),
            Error::ArgumentsMismatch { token, .. } => token.as_deref(),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lexer(what) => write!(f, "Lexer error: {}", what),
            Error::BadCast(token) => {
                write!(f, "Bad cast: cannot perform numeric conversion: '{}'", token)
            }
            Error::UnsuitableName(token) => {
                write!(f, "Unsuitable symbol name: '{}'", token)
            }
            Error::UndefinedSymbol(token) => write!(f, "Undefined symbol: '{}'", token),
            Error::RepeatedSymbol(token) => write!(f, "Repeated symbol: '{}'", token),
            Error::EmptyExpression => write!(f, "Empty expression"),
            Error::ParenthesisMismatch => write!(f, "Parenthesis mismatch"),
            Error::SyntaxError(detail) => {
                if detail.is_empty() {
                    write!(f, "Syntax error")
                } else {
                    write!(f, "Syntax error: {}", detail)
                }
            }
            Error::ArgumentsMismatch {
                needed,
                provided,
                token,
            } => {
                let plural = if *needed == 1 { "" } else { "s" };
                match token {
                    Some(token) => write!(
                        f,
                        "Arguments mismatch: '{}' {} needed argument{} vs {} provided",
                        token, needed, plural, provided
                    ),
                    None => write!(
                        f,
                        "Arguments mismatch: {} needed argument{} vs {} provided",
                        needed, plural, provided
                    ),
                }
            }
            Error::UnusedSymbol(token) => write!(f, "Unused symbol: '{}'", token),
        }
    }
}

impl std::error::Error for Error {}
