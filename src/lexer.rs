use crate::{Error, Lexer, NumericImpl, Token, TokenKind};
use regex::Regex;
use std::marker::PhantomData;

/// Characters of `left`, `right` and `separator` are taken literally and escaped before
/// they are embedded into the combined tokenizer alternation.
fn escape_marker(marker: &str) -> String {
    regex::escape(marker)
}

/// Ensure a category pattern is anchored on both ends and compiles.
fn adapt_regex(pattern: &str) -> Result<String, Error> {
    let mut adapted = String::with_capacity(pattern.len() + 2);
    if !pattern.starts_with('^') {
        adapted.push('^');
    }
    adapted.push_str(pattern);
    if !pattern.ends_with('$') {
        adapted.push('$');
    }
    match Regex::new(&adapted) {
        Ok(_) => Ok(adapted),
        Err(_) => Err(Error::Lexer(format!("bad regex '{}'", adapted))),
    }
}

/// Strip the anchors added by [adapt_regex] so the pattern can join an alternation.
fn strip_anchors(pattern: &str) -> &str {
    &pattern[1..pattern.len() - 1]
}

impl<T> Lexer<T> {
    /// Default pattern for variable, constant and function names.
    pub const NAME_PATTERN: &'static str = r"^[A-Za-z_][A-Za-z_0-9]*$";
    /// Default pattern for operator, prefix and suffix tokens.
    ///
    /// Under an anchored full match this accepts exactly the runs the classic
    /// "`.` not followed by a digit" rule accepts, since no digit can ever match the
    /// class; inside the tokenizer the digit adjacency of every `.` is checked in code.
    pub const SIGN_PATTERN: &'static str = r"^(?:[^A-Za-z0-9.(),_\s]|\.)+$";
    pub const LEFT: &'static str = "(";
    pub const RIGHT: &'static str = ")";
    pub const SEPARATOR: &'static str = ",";

    /// Create a lexer from the three category patterns and the three markers.
    ///
    /// Construction validates the configuration: the patterns must compile, the three
    /// markers must be pairwise distinct, and the combined tokenizer must not match a
    /// lone space, must not match an empty string, and must recognise each marker as its
    /// own category.
    pub fn new(
        number: &str,
        name: &str,
        sign: &str,
        left: &str,
        right: &str,
        separator: &str,
    ) -> Result<Self, Error> {
        if left == right || left == separator || right == separator {
            return Err(Error::Lexer("tokens must be different".to_string()));
        }

        let number = adapt_regex(number)?;
        let name = adapt_regex(name)?;
        let sign = adapt_regex(sign)?;

        let alternation = format!(
            "(?P<number>{})|(?P<name>{})|(?P<sign>{})|(?P<left>{})|(?P<right>{})|(?P<separator>{})",
            strip_anchors(&number),
            strip_anchors(&name),
            strip_anchors(&sign),
            escape_marker(left),
            escape_marker(right),
            escape_marker(separator),
        );
        let tokenizer_regex = Regex::new(&alternation)
            .map_err(|_| Error::Lexer(format!("bad regex '{}'", alternation)))?;
        let splitter_regex = Regex::new(strip_anchors(&sign))
            .map_err(|_| Error::Lexer(format!("bad regex '{}'", sign)))?;

        let lexer = Self {
            number_regex: Regex::new(&number).map_err(|_| Error::Lexer(number.clone()))?,
            name_regex: Regex::new(&name).map_err(|_| Error::Lexer(name.clone()))?,
            sign_regex: Regex::new(&sign).map_err(|_| Error::Lexer(sign.clone()))?,
            number,
            name,
            sign,
            left: left.to_string(),
            right: right.to_string(),
            separator: separator.to_string(),
            tokenizer_regex,
            splitter_regex,
            _numeric: PhantomData,
        };

        if lexer.tokenizer_regex.is_match("") {
            return Err(Error::Lexer("tokenizer matches an empty string".to_string()));
        }
        if let Some(m) = lexer.tokenizer_regex.find(" ") {
            if m.start() == 0 && m.end() == 1 {
                return Err(Error::Lexer("tokenizer matching space".to_string()));
            }
        }
        for (marker, group) in [
            (&lexer.left, "left"),
            (&lexer.right, "right"),
            (&lexer.separator, "separator"),
        ] {
            let matched = lexer
                .tokenizer_regex
                .captures(marker)
                .map_or(false, |caps| caps.name(group).is_some());
            if !matched {
                return Err(Error::Lexer(format!(
                    "tokenizer doesn't match {} symbol",
                    group
                )));
            }
        }
        Ok(lexer)
    }

    pub(crate) fn name_regex(&self) -> &Regex {
        &self.name_regex
    }

    pub(crate) fn sign_regex(&self) -> &Regex {
        &self.sign_regex
    }

    pub(crate) fn number_regex(&self) -> &Regex {
        &self.number_regex
    }

    /// Sign runs inside `token`, with every `.` glued to a digit excluded from the runs.
    fn sign_runs(&self, token: &str) -> Vec<(usize, usize)> {
        let bytes = token.as_bytes();
        let mut runs = Vec::new();
        for m in self.splitter_regex.find_iter(token) {
            let (start, mut end) = (m.start(), m.end());
            for i in start..end {
                if bytes[i] != b'.' {
                    continue;
                }
                let digit_after = bytes.get(i + 1).map_or(false, u8::is_ascii_digit);
                let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
                if digit_after || digit_before {
                    end = i;
                    break;
                }
            }
            if end > start {
                runs.push((start, end));
            }
        }
        runs
    }

    /// Alternating decomposition of `token`: the substrings around every sign run and
    /// the runs themselves. There is always one more field than runs; fields may be
    /// empty when runs touch the token boundaries or each other.
    fn split_fields<'t>(&self, token: &'t str) -> (Vec<&'t str>, Vec<&'t str>) {
        let runs = self.sign_runs(token);
        let mut fields = Vec::with_capacity(runs.len() + 1);
        let mut signs = Vec::with_capacity(runs.len());
        let mut previous = 0;
        for &(start, end) in &runs {
            fields.push(&token[previous..start]);
            signs.push(&token[start..end]);
            previous = end;
        }
        fields.push(&token[previous..]);
        (fields, signs)
    }

    /// Whether `token` opens on a sign run, like `-2` or `+Inf`.
    pub fn prefixed(&self, token: &str) -> bool {
        self.sign_runs(token).first().map_or(false, |run| run.0 == 0)
    }

    /// Decompose a prefixed token into its leading sign run and the remainder; a token
    /// without a leading run yields two empty strings.
    pub fn split(&self, token: &str) -> (String, String) {
        match self.sign_runs(token).first() {
            Some(&(0, end)) => (token[..end].to_string(), token[end..].to_string()),
            _ => (String::new(), String::new()),
        }
    }

    /// The next raw lexeme at or after `from`: anything the alternation cannot match is
    /// skipped, and a sign run is cut short at a `.` which opens a numeric literal.
    fn next_lexeme(&self, text: &str, from: usize) -> Option<(usize, usize, TokenKind)> {
        let caps = self.tokenizer_regex.captures(&text[from..])?;
        let (kind, m) = if let Some(m) = caps.name("number") {
            (TokenKind::Number, m)
        } else if let Some(m) = caps.name("name") {
            (TokenKind::Name, m)
        } else if let Some(m) = caps.name("sign") {
            (TokenKind::Sign, m)
        } else if let Some(m) = caps.name("left") {
            (TokenKind::Left, m)
        } else if let Some(m) = caps.name("right") {
            (TokenKind::Right, m)
        } else {
            (TokenKind::Separator, caps.name("separator")?)
        };
        let (start, end) = (from + m.start(), from + m.end());

        if kind != TokenKind::Sign {
            return Some((start, end, kind));
        }
        let bytes = text.as_bytes();
        let cut = (start..end).find(|&i| {
            bytes[i] == b'.' && bytes.get(i + 1).map_or(false, u8::is_ascii_digit)
        });
        match cut {
            None => Some((start, end, kind)),
            Some(cut) if cut > start => Some((start, cut, kind)),
            Some(cut) => {
                // The run opens on a '.' glued to a digit: hand the dot back to the
                // alternation, which yields a numeric literal when the grammar has one.
                let caps = self.tokenizer_regex.captures(&text[cut..])?;
                match caps.name("number") {
                    Some(m) if m.start() == 0 => Some((cut, cut + m.end(), TokenKind::Number)),
                    _ => Some((start, end, kind)),
                }
            }
        }
    }

    /// Shared walk behind the two tokenization modes. A numeric match may have absorbed
    /// adjacent sign runs; those are re-split here, where an embedded run stays glued
    /// only while the text before it is not yet a complete literal (`1e-2`), and a
    /// leading run is kept on the literal depending on mode and left context.
    fn tokenize(&self, text: &str, infix: bool) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut last = TokenKind::Left;
        let mut at = 0;

        while let Some((start, end, kind)) = self.next_lexeme(text, at) {
            if end == start {
                break;
            }
            at = end;

            if kind != TokenKind::Number {
                tokens.push(Token {
                    text: text[start..end].to_string(),
                    kind,
                });
                last = kind;
                continue;
            }

            let token = &text[start..end];
            let (fields, signs) = self.split_fields(token);
            let number = |text: String| Token {
                text,
                kind: TokenKind::Number,
            };
            let mut pairs = fields[1..].iter().zip(signs.iter());

            if fields[0].is_empty() && !signs.is_empty() {
                let glue = !infix
                    || last == TokenKind::Sign
                    || last == TokenKind::Left
                    || last == TokenKind::Separator;
                pairs.next();
                if glue {
                    tokens.push(number(format!("{}{}", signs[0], fields[1])));
                } else {
                    tokens.push(Token {
                        text: signs[0].to_string(),
                        kind: TokenKind::Sign,
                    });
                    tokens.push(number(fields[1].to_string()));
                }
            } else {
                tokens.push(number(fields[0].to_string()));
            }

            for (field, sign) in pairs {
                let complete = tokens
                    .last()
                    .map_or(false, |t| self.number_regex.is_match(&t.text));
                if complete {
                    tokens.push(Token {
                        text: sign.to_string(),
                        kind: TokenKind::Sign,
                    });
                    tokens.push(number(field.to_string()));
                } else if let Some(previous) = tokens.last_mut() {
                    previous.text.push_str(sign);
                    previous.text.push_str(field);
                }
            }
            last = TokenKind::Number;
        }
        tokens
    }

    /// Tokenize for infix notation: a leading sign run stays glued to its literal only
    /// after an opening context (start of stream, a left marker, a separator or another
    /// sign), so `1-2` lexes as `1 - 2` while `(-2)` keeps the signed literal.
    pub fn tokenize_infix(&self, text: &str) -> Vec<Token> {
        self.tokenize(text, true)
    }

    /// Tokenize for postfix notation: every standalone sign run is its own token and a
    /// literal carries its sign only when nothing precedes it inside the match.
    pub fn tokenize_postfix(&self, text: &str) -> Vec<Token> {
        self.tokenize(text, false)
    }
}

impl<T: NumericImpl> Lexer<T> {
    /// Convert a literal to a backend value; the token must fully match the number
    /// pattern and be readable by the backend.
    pub fn to_value(&self, token: &str) -> Result<T, Error> {
        if !self.number_regex.is_match(token) {
            return Err(Error::BadCast(token.to_string()));
        }
        T::read(token).ok_or_else(|| Error::BadCast(token.to_string()))
    }

    /// Format a backend value as a literal of this lexer's grammar.
    pub fn to_string(&self, value: &T) -> String {
        value.write()
    }
}

impl<T: NumericImpl> Default for Lexer<T> {
    fn default() -> Self {
        Lexer::new(
            T::literal_pattern(),
            Self::NAME_PATTERN,
            Self::SIGN_PATTERN,
            Self::LEFT,
            Self::RIGHT,
            Self::SEPARATOR,
        )
        .expect("the default lexer configuration is valid")
    }
}
