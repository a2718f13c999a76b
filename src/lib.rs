//! mathexpr is a library to compile textual mathematical expressions into evaluable and
//! inspectable expression trees ([Node]) and to execute them against caller supplied
//! variable values.
//!
//! # Overview
//! Expression evaluators are often written as ad hoc interpreters which couple the grammar,
//! the numeric type and the symbol set together.
//! This library instead keeps a single parsing pipeline and parameterises it over a numeric
//! backend ([NumericImpl]), so the same machinery serves plain floating point arithmetic,
//! complex arithmetic, or a caller defined numeric domain.
//! The pipeline is a regex driven [Lexer], an infix validator which inserts implicit
//! parentheses for prefix and suffix operators, a shunting-yard conversion with function
//! arity tracking, and a tree builder which performs constant folding while computing a
//! structural hash for every node.
//!
//! # Design
//!
//! A [Parser] owns a shared [Lexer] and five registries: constants, functions, operators,
//! and the prefix and suffix aliases which map a symbolic token like `-` or `!` onto a
//! unary function.
//! The registries are plain validated tables ([SymbolTable], [AliasTable]) and stay mutable
//! on the parser instance, so a caller can extend or replace the default symbol set at any
//! time.
//! Parsing produces a [Node]: an immutable tree whose leaves are constants or variables and
//! whose inner nodes carry the callable of the matched [Symbol].
//! Every tree co-owns a [VariableBinding] holding one value slot per declared variable;
//! evaluation writes the supplied values into the slots and walks the tree in post order.
//! Nodes are value like: they compare structurally, hash by their cached structural hash,
//! and cloning produces an independent tree rebound onto a fresh binding restricted to the
//! variables which actually occur in the clone.
//!
//! # Example
//!
//! ```
//! use mathexpr::make_parser;
//!
//! let parser = make_parser::<f64>();
//!
//! let expression = parser.from_infix("hypot(3, 4) + x", &["x"]).unwrap();
//! assert_eq!(expression.eval(&[2.0]).unwrap(), 7.0);
//! assert_eq!(expression.infix(), "hypot(3,4)+x");
//! assert_eq!(expression.postfix(), "3 4 hypot x +");
//!
//! // Variables can also be inferred instead of declared.
//! let inferred = parser.parse("x * y").unwrap();
//! assert_eq!(inferred.variables().to_vec(), vec!["x", "y"]);
//! assert_eq!(inferred.eval(&[3.0, 4.0]).unwrap(), 12.0);
//!
//! // Trees are inspectable and foldable.
//! let folded = parser.optimize(&parser.parse("2 ^ 10").unwrap());
//! assert_eq!(folded.infix(), "1024");
//! ```

mod binding;
mod error;
mod lexer;
mod node;
mod numeric;
mod parser;
mod registry;
mod symbol;
mod util;

#[cfg(test)]
mod __tests__;

use once_cell::unsync::OnceCell;
use regex::Regex;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::rc::Rc;

/// A trait implementation describing a numeric backend for the parsing pipeline.
///
/// The pipeline itself never inspects a value: the backend supplies the literal grammar,
/// the conversions between text and values, and a hash compatible with the backend's own
/// equality.
/// The library implements this trait for [f64] and for [Complex]; further backends only
/// need to provide the same surface.
pub trait NumericImpl: Copy + Debug + Default + PartialEq + 'static {
    /// Anchored regular expression accepted as a literal of this numeric domain.
    fn literal_pattern() -> &'static str;

    /// Read a literal which already matched [literal_pattern](NumericImpl::literal_pattern).
    fn read(token: &str) -> Option<Self>;

    /// Format a value so that it round-trips through [read](NumericImpl::read).
    fn write(&self) -> String;

    /// Hash agreeing with the backend equality: equal values must hash alike.
    fn hash_value(&self) -> u64;

    /// Populate the default constants, functions, operators and aliases of this domain;
    /// fails when a default symbol does not fit the parser's lexer patterns.
    fn install(parser: &mut Parser<Self>) -> Result<(), Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The lexical category assigned to a [Token] by the [Lexer].
pub enum TokenKind {
    Number,
    Name,
    Sign,
    Left,
    Right,
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element of the lexed input: a text slice paired with its [TokenKind].
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Grouping behaviour of an [Operator].
///
/// [Full](Associativity::Full) marks an operator which is both left and right associative,
/// like `+` or `*`; the distinction only matters when rendering a tree back to infix,
/// where it avoids redundant parentheses on either side.
pub enum Associativity {
    Left,
    Right,
    Full,
}

/// Precedence ladder used by the default operator registries.
pub mod precedence {
    pub const VERY_LOW: usize = 1111;
    pub const LOW: usize = 2222;
    pub const NORMAL: usize = 5555;
    pub const HIGH: usize = 8888;
    pub const VERY_HIGH: usize = 9999;
}

#[derive(Debug)]
/// An error raised while configuring the pipeline, parsing an expression or evaluating a
/// tree.
///
/// Errors surface through the pipeline to the caller; the only internal recovery is
/// [Parser::parse], which catches [UndefinedSymbol](Error::UndefinedSymbol) to drive
/// variable inference.
pub enum Error {
    /// Invalid lexer configuration: a bad pattern or inconsistent markers.
    Lexer(String),
    /// A token which cannot be converted into a value of the numeric backend.
    BadCast(String),
    /// A registry key or variable name rejected by the lexer patterns.
    UnsuitableName(String),
    /// A token which resolves to no constant, function, operator or variable.
    UndefinedSymbol(String),
    /// A variable declared more than once.
    RepeatedSymbol(String),
    EmptyExpression,
    ParenthesisMismatch,
    /// An ordering of symbols the infix grammar does not admit; the detail echoes the
    /// stream with the offending token quoted.
    SyntaxError(String),
    /// Wrong number of arguments for a function call or an evaluation.
    ArgumentsMismatch {
        needed: usize,
        provided: usize,
        token: Option<String>,
    },
    /// A symbol or declared variable which takes no part in the built tree.
    UnusedSymbol(String),
}

/// Splitter of expression text into [Token]s, configured by six regular expressions.
///
/// The `number`, `name` and `sign` patterns describe the token categories; `left`, `right`
/// and `separator` are literal markers.
/// The patterns are combined into a single alternation, so earlier categories win: a `.`
/// immediately followed by a digit always belongs to a numeric literal, while any other
/// `.` counts as a sign character.
/// A numeric literal may absorb an adjacent sign run (`1+2` lexes the `+2` as one match);
/// the lexer re-splits such matches using the context rules described on
/// [tokenize_infix](Lexer::tokenize_infix).
pub struct Lexer<T> {
    pub number: String,
    pub name: String,
    pub sign: String,
    pub left: String,
    pub right: String,
    pub separator: String,
    number_regex: Regex,
    name_regex: Regex,
    sign_regex: Regex,
    tokenizer_regex: Regex,
    splitter_regex: Regex,
    _numeric: PhantomData<T>,
}

#[derive(Clone)]
/// A callable of fixed arity, the payload of function, prefix and suffix symbols.
///
/// Two functions are considered the same symbol when they share the underlying callable,
/// which is the case for every clone handed out by a registry.
pub struct Function<T> {
    body: Rc<dyn Fn(&[T]) -> T>,
    arity: usize,
}

#[derive(Clone)]
/// A binary callable with a precedence and an [Associativity].
pub struct Operator<T> {
    body: Rc<dyn Fn(&[T]) -> T>,
    precedence: usize,
    associativity: Associativity,
}

#[derive(Clone)]
/// A tagged symbol bound into the token stream and, for the value carrying variants, into
/// the built [Node] tree.
///
/// [Left](Symbol::Left), [Right](Symbol::Right) and [Separator](Symbol::Separator) are
/// grammar markers which never survive into a tree.
/// [Prefix](Symbol::Prefix) and [Suffix](Symbol::Suffix) carry the aliased function and
/// decay into [Function](Symbol::Function) when a tree is built.
pub enum Symbol<T: NumericImpl> {
    /// A leaf reading one slot of the shared [VariableBinding].
    Variable(usize),
    Constant(T),
    Function(Function<T>),
    Operator(Operator<T>),
    Prefix(Function<T>),
    Suffix(Function<T>),
    Left,
    Right,
    Separator,
}

/// A validated mapping from symbol names to registry payloads.
///
/// Every insertion screens the key against the lexer pattern the table was created with:
/// constants and functions must look like names, operators like sign runs.
pub struct SymbolTable<V> {
    entries: HashMap<String, V>,
    screen: Regex,
}

/// A validated mapping from prefix or suffix tokens to the aliased function names.
pub struct AliasTable {
    entries: HashMap<String, String>,
    key_screen: Regex,
    value_screen: Regex,
}

/// The ordered variable list of a tree plus one shared value slot per variable.
///
/// A binding is created per parse call and co-owned by the resulting [Node] and all of its
/// descendants; [Node::eval] writes the slots before walking the tree.
pub struct VariableBinding<T: NumericImpl> {
    names: Vec<String>,
    slots: Vec<Cell<T>>,
}

/// An immutable expression tree which is both a callable over its variables and a
/// hashable, comparable value.
///
/// Nodes are built by a [Parser] and never mutated afterwards; cloning yields a deep copy
/// rebound onto a fresh [VariableBinding] restricted to the variables occurring in the
/// clone, so the copy and the original stay independently evaluable.
pub struct Node<T: NumericImpl> {
    lexer: Rc<Lexer<T>>,
    binding: Rc<VariableBinding<T>>,
    token: String,
    symbol: Symbol<T>,
    branches: Vec<Node<T>>,
    hash: u64,
    pruned_cache: OnceCell<Vec<String>>,
}

/// Compiler of expression text into [Node] trees over the numeric backend `T`.
///
/// The registries are public and stay mutable, so the symbol set can be extended after
/// construction; the [optimize](Parser::optimize) flag enables constant folding while
/// trees are built.
pub struct Parser<T: NumericImpl> {
    lexer: Rc<Lexer<T>>,
    pub constants: SymbolTable<T>,
    pub functions: SymbolTable<Function<T>>,
    pub operators: SymbolTable<Operator<T>>,
    pub prefixes: AliasTable,
    pub suffixes: AliasTable,
    pub optimize: bool,
    debug: OnceCell<Log<&'static str>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Verbosity setting for the parser's built in debug reporting.
///
/// Each level carries the label printed with every message, and higher levels include
/// the lower ones: [Trace](Log::Trace) also reports outcomes and failures.
pub enum Log<T> {
    /// No reporting.
    None,
    /// Report failed parses with their error.
    Failures(T),
    /// Also report successful parses with their postfix form.
    Outcomes(T),
    /// Also dump the token stream of every parse.
    Trace(T),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// A complex value over two [f64] components, the second default numeric backend.
///
/// Literals use `j` or `i` for the imaginary unit: `2j`, `1+2j`, `-1.5e3-2i`.
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Construct a parser with the default registries of the numeric backend `T` and the
/// default lexer of its literal grammar.
pub fn make_parser<T: NumericImpl>() -> Parser<T> {
    Parser::new()
}

/// Construct a parser with the default registries of `T` over a custom [Lexer].
///
/// Fails with [UnsuitableName](Error::UnsuitableName) when a default symbol does not fit
/// the custom lexer patterns.
pub fn make_parser_with<T: NumericImpl>(lexer: Lexer<T>) -> Result<Parser<T>, Error> {
    Parser::with_lexer(lexer)
}
