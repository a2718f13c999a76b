use crate::util::hash_combine;
use crate::{
    AliasTable, Associativity, Error, Lexer, Log, Node, NumericImpl, Parser, Symbol, SymbolTable,
    Token, TokenKind, VariableBinding,
};
use once_cell::unsync::OnceCell;
use std::rc::Rc;

/// One element of the symbol stream between classification and tree building.
struct SymbolData<T: NumericImpl> {
    token: String,
    symbol: Symbol<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Left,
    Right,
    Separator,
    Constant,
    Function,
    Operator,
    Prefix,
    Suffix,
}

fn kind_of<T: NumericImpl>(symbol: &Symbol<T>) -> Kind {
    match symbol {
        Symbol::Variable(_) | Symbol::Constant(_) => Kind::Constant,
        Symbol::Function(_) => Kind::Function,
        Symbol::Operator(_) => Kind::Operator,
        Symbol::Prefix(_) => Kind::Prefix,
        Symbol::Suffix(_) => Kind::Suffix,
        Symbol::Left => Kind::Left,
        Symbol::Right => Kind::Right,
        Symbol::Separator => Kind::Separator,
    }
}

/// The infix successor table: which symbol kinds may follow which.
fn successor_allowed(previous: Kind, current: Kind) -> bool {
    match previous {
        Kind::Right | Kind::Constant | Kind::Suffix => matches!(
            current,
            Kind::Right | Kind::Separator | Kind::Operator | Kind::Suffix
        ),
        Kind::Left | Kind::Separator | Kind::Operator => matches!(
            current,
            Kind::Constant | Kind::Left | Kind::Function | Kind::Prefix
        ),
        Kind::Function | Kind::Prefix => current == Kind::Left,
    }
}

/// Structural hash of a prospective node: fold the child hashes, then the symbol.
fn tree_hash<T: NumericImpl>(children: &[Node<T>], symbol: &Symbol<T>) -> u64 {
    let mut hash = 0;
    for child in children {
        hash_combine(&mut hash, child.structural_hash());
    }
    hash_combine(&mut hash, symbol.hash_key());
    hash
}

impl<T: NumericImpl> Parser<T> {
    /// Create a parser over the default lexer of `T` with the default registries.
    pub fn new() -> Self {
        Self::with_lexer(Lexer::default()).expect("the default symbols fit the default lexer")
    }

    /// Create a parser over a custom lexer, installing the default registries of `T`.
    pub fn with_lexer(lexer: Lexer<T>) -> Result<Self, Error> {
        let name_screen = lexer.name_regex().clone();
        let sign_screen = lexer.sign_regex().clone();
        let mut parser = Self {
            lexer: Rc::new(lexer),
            constants: SymbolTable::new(name_screen.clone()),
            functions: SymbolTable::new(name_screen.clone()),
            operators: SymbolTable::new(sign_screen.clone()),
            prefixes: AliasTable::new(sign_screen.clone(), name_screen.clone()),
            suffixes: AliasTable::new(sign_screen, name_screen),
            optimize: false,
            debug: OnceCell::new(),
        };
        T::install(&mut parser)?;
        Ok(parser)
    }

    pub fn lexer(&self) -> &Lexer<T> {
        &self.lexer
    }

    /// Arm the debug reporting at the verbosity of the given [Log] setting; the label
    /// cell accepts a single assignment for the lifetime of the parser.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.debug
            .set(log)
            .map_err(|rejected| format!("debug label {} already set", rejected))
    }

    /// Convert a literal of the numeric domain into a value.
    pub fn cast(&self, text: &str) -> Result<T, Error> {
        self.lexer.to_value(text)
    }

    /// Format a value as a literal of the numeric domain.
    pub fn to_string(&self, value: &T) -> String {
        self.lexer.to_string(value)
    }

    fn left_data(&self) -> SymbolData<T> {
        SymbolData {
            token: self.lexer.left.clone(),
            symbol: Symbol::Left,
        }
    }

    fn right_data(&self) -> SymbolData<T> {
        SymbolData {
            token: self.lexer.right.clone(),
            symbol: Symbol::Right,
        }
    }

    /// The token an element echoes in diagnostics: prefixes and suffixes carry the
    /// aliased function name internally but report their symbolic spelling.
    fn display(&self, data: &SymbolData<T>) -> String {
        match &data.symbol {
            Symbol::Prefix(_) => self
                .prefixes
                .alias_of(&data.token)
                .unwrap_or(&data.token)
                .to_string(),
            Symbol::Suffix(_) => self
                .suffixes
                .alias_of(&data.token)
                .unwrap_or(&data.token)
                .to_string(),
            _ => data.token.clone(),
        }
    }

    /// Resolve a sign token against the registries. At an opening context a prefix
    /// alias wins, then a suffix alias, then a plain operator.
    fn resolve_sign(
        &self,
        stream: &mut Vec<SymbolData<T>>,
        token: &str,
        infix: bool,
    ) -> Result<(), Error> {
        let leftmost = stream.last().map_or(true, |previous| {
            matches!(
                previous.symbol,
                Symbol::Left | Symbol::Separator | Symbol::Operator(_) | Symbol::Prefix(_)
            )
        });
        if infix && leftmost {
            if let Some(name) = self.prefixes.get(token) {
                if let Some(function) = self.functions.get(name) {
                    stream.push(SymbolData {
                        token: name.to_string(),
                        symbol: Symbol::Prefix(function.clone()),
                    });
                    return Ok(());
                }
            }
        }
        if infix {
            if let Some(name) = self.suffixes.get(token) {
                if let Some(function) = self.functions.get(name) {
                    stream.push(SymbolData {
                        token: name.to_string(),
                        symbol: Symbol::Suffix(function.clone()),
                    });
                    return Ok(());
                }
            }
        }
        if let Some(operator) = self.operators.get(token) {
            stream.push(SymbolData {
                token: token.to_string(),
                symbol: Symbol::Operator(operator.clone()),
            });
            return Ok(());
        }
        Err(Error::UndefinedSymbol(token.to_string()))
    }

    /// Bind every token to a symbol: literals and known names to constants, names to
    /// functions or variables, sign runs through [resolve_sign](Parser::resolve_sign).
    /// A signed literal standing before a right associative operator or a suffix is
    /// straightened: its sign is resolved separately so the operator can bind tighter.
    fn classify(
        &self,
        tokens: Vec<Token>,
        infix: bool,
        binding: &VariableBinding<T>,
    ) -> Result<Vec<SymbolData<T>>, Error> {
        let mut stream: Vec<SymbolData<T>> = Vec::with_capacity(tokens.len());

        for (position, current) in tokens.iter().enumerate() {
            let next = tokens.get(position + 1);
            match current.kind {
                TokenKind::Number => {
                    let straightened = next.map_or(false, |token| {
                        self.operators
                            .get(&token.text)
                            .map_or(false, |o| o.associativity() == Associativity::Right)
                    });
                    let suffixed = next.map_or(false, |token| self.suffixes.contains(&token.text))
                        || stream
                            .last()
                            .map_or(false, |data| matches!(data.symbol, Symbol::Suffix(_)));

                    if infix
                        && (straightened || suffixed)
                        && self.lexer.prefixed(&current.text)
                    {
                        let (sign, value) = self.lexer.split(&current.text);
                        self.resolve_sign(&mut stream, &sign, infix)?;
                        stream.push(SymbolData {
                            symbol: Symbol::Constant(self.lexer.to_value(&value)?),
                            token: value,
                        });
                    } else {
                        stream.push(SymbolData {
                            symbol: Symbol::Constant(self.lexer.to_value(&current.text)?),
                            token: current.text.clone(),
                        });
                    }
                }
                TokenKind::Left => stream.push(self.left_data()),
                TokenKind::Right => stream.push(self.right_data()),
                TokenKind::Separator => stream.push(SymbolData {
                    token: self.lexer.separator.clone(),
                    symbol: Symbol::Separator,
                }),
                TokenKind::Sign => self.resolve_sign(&mut stream, &current.text, infix)?,
                TokenKind::Name => {
                    if let Some(value) = self.constants.get(&current.text) {
                        stream.push(SymbolData {
                            token: current.text.clone(),
                            symbol: Symbol::Constant(*value),
                        });
                    } else if let Some(function) = self.functions.get(&current.text) {
                        stream.push(SymbolData {
                            token: current.text.clone(),
                            symbol: Symbol::Function(function.clone()),
                        });
                    } else {
                        let index = binding.index(&current.text)?;
                        stream.push(SymbolData {
                            token: current.text.clone(),
                            symbol: Symbol::Variable(index),
                        });
                    }
                }
            }
        }
        Ok(stream)
    }

    fn syntax_error(
        &self,
        mut echo: String,
        offender: String,
        rest: std::vec::IntoIter<SymbolData<T>>,
    ) -> Error {
        echo.push('\'');
        echo.push_str(&offender);
        echo.push('\'');
        for data in rest {
            echo.push(' ');
            echo.push_str(&self.display(&data));
        }
        Error::SyntaxError(echo)
    }

    /// Enforce the infix successor table and make every prefix behave as a function
    /// call over exactly the following operand by inserting implicit parentheses.
    ///
    /// An automatic parenthesis opens right after each prefix and closes as soon as a
    /// completed value is followed by anything but a right associative operator or a
    /// suffix, and at the end of the stream.
    fn validate_infix(&self, stream: Vec<SymbolData<T>>) -> Result<Vec<SymbolData<T>>, Error> {
        if stream.is_empty() {
            return Err(Error::EmptyExpression);
        }

        let mut collected: Vec<SymbolData<T>> = Vec::with_capacity(stream.len() * 2);
        let mut automatic: Vec<bool> = Vec::new();
        let mut previous = Kind::Left;
        let mut previous_display = self.lexer.left.clone();
        let mut echo = String::new();

        let mut pending = stream.into_iter();
        while let Some(data) = pending.next() {
            let opens_prefix = matches!(data.symbol, Symbol::Prefix(_));
            if opens_prefix && pending.len() == 0 {
                let offender = self.display(&data);
                return Err(self.syntax_error(echo, offender, pending));
            }

            let current = kind_of(&data.symbol);
            if !successor_allowed(previous, current) {
                let offender = self.display(&data);
                return Err(self.syntax_error(echo, offender, pending));
            }

            if matches!(previous, Kind::Right | Kind::Constant | Kind::Suffix) {
                let chains_right = current == Kind::Suffix
                    || matches!(
                        &data.symbol,
                        Symbol::Operator(o) if o.associativity() == Associativity::Right
                    );
                if !chains_right {
                    while automatic.last() == Some(&true) {
                        automatic.pop();
                        collected.push(self.right_data());
                    }
                }
            }

            if current == Kind::Left {
                automatic.push(false);
            } else if current == Kind::Right && automatic.last() == Some(&false) {
                automatic.pop();
            }

            previous = current;
            previous_display = self.display(&data);
            echo.push_str(&previous_display);
            echo.push(' ');
            collected.push(data);

            if opens_prefix {
                automatic.push(true);
                collected.push(self.left_data());
                previous = Kind::Left;
                previous_display = self.lexer.left.clone();
            }
        }

        if matches!(previous, Kind::Right | Kind::Constant | Kind::Suffix) {
            while automatic.last() == Some(&true) {
                automatic.pop();
                collected.push(self.right_data());
            }
            Ok(collected)
        } else {
            echo.truncate(echo.len().saturating_sub(previous_display.len() + 1));
            let mut detail = echo;
            detail.push('\'');
            detail.push_str(&previous_display);
            detail.push('\'');
            Err(Error::SyntaxError(detail))
        }
    }

    /// Convert the validated infix stream into a postfix queue, tracking for every
    /// function scope how many arguments it expects and how many the separators
    /// actually delimit.
    fn shunting_yard(&self, stream: Vec<SymbolData<T>>) -> Result<Vec<SymbolData<T>>, Error> {
        enum Action {
            Pop,
            PopThenBreak,
            Break,
        }

        if stream.is_empty() {
            return Err(Error::EmptyExpression);
        }

        let mut output: Vec<SymbolData<T>> = Vec::with_capacity(stream.len());
        let mut operations: Vec<SymbolData<T>> = Vec::new();
        let mut counters: Vec<(usize, usize)> = Vec::new();
        let mut apply_function: Vec<bool> = Vec::new();
        let mut was_function = false;

        for data in stream {
            match &data.symbol {
                Symbol::Left => {
                    operations.push(data);
                    apply_function.push(was_function);
                    was_function = false;
                }
                Symbol::Right => {
                    while operations
                        .last()
                        .map_or(false, |top| !matches!(top.symbol, Symbol::Left))
                    {
                        if let Some(top) = operations.pop() {
                            output.push(top);
                        }
                    }
                    match operations.pop() {
                        Some(top) if matches!(top.symbol, Symbol::Left) => {}
                        _ => return Err(Error::ParenthesisMismatch),
                    }
                    let applying = apply_function.pop().unwrap_or(false);
                    if applying {
                        let function = match operations.pop() {
                            Some(function) => function,
                            None => return Err(Error::ParenthesisMismatch),
                        };
                        if let Some((needed, provided)) = counters.pop() {
                            if needed != provided {
                                return Err(Error::ArgumentsMismatch {
                                    needed,
                                    provided,
                                    token: Some(function.token),
                                });
                            }
                        }
                        output.push(function);
                    }
                }
                Symbol::Separator => {
                    while operations
                        .last()
                        .map_or(false, |top| !matches!(top.symbol, Symbol::Left))
                    {
                        if let Some(top) = operations.pop() {
                            output.push(top);
                        }
                    }
                    if !apply_function.last().copied().unwrap_or(false) {
                        return Err(Error::SyntaxError(format!(
                            "separator '{}' outside function",
                            data.token
                        )));
                    }
                    if let Some((_, provided)) = counters.last_mut() {
                        *provided += 1;
                    }
                    if operations.is_empty() {
                        return Err(Error::ParenthesisMismatch);
                    }
                }
                Symbol::Constant(_) | Symbol::Variable(_) | Symbol::Suffix(_) => {
                    output.push(data)
                }
                Symbol::Function(_) | Symbol::Prefix(_) => {
                    counters.push((data.symbol.arity(), 1));
                    was_function = true;
                    operations.push(data);
                }
                Symbol::Operator(operator) => {
                    let precedence = operator.precedence();
                    let leftish = operator.associativity() != Associativity::Right;
                    loop {
                        let action = operations.last().map_or(Action::Break, |top| {
                            match &top.symbol {
                                Symbol::Left => Action::Break,
                                Symbol::Function(_) | Symbol::Prefix(_) => Action::PopThenBreak,
                                Symbol::Operator(above) => {
                                    let pops = if leftish {
                                        precedence <= above.precedence()
                                    } else {
                                        precedence < above.precedence()
                                    };
                                    if pops {
                                        Action::Pop
                                    } else {
                                        Action::Break
                                    }
                                }
                                _ => Action::Break,
                            }
                        });
                        match action {
                            Action::Break => break,
                            Action::Pop => {
                                if let Some(top) = operations.pop() {
                                    output.push(top);
                                }
                            }
                            Action::PopThenBreak => {
                                if let Some(top) = operations.pop() {
                                    output.push(top);
                                }
                                break;
                            }
                        }
                    }
                    operations.push(data);
                }
            }
        }

        while let Some(data) = operations.pop() {
            if matches!(data.symbol, Symbol::Left) {
                return Err(Error::ParenthesisMismatch);
            }
            output.push(data);
        }
        Ok(output)
    }

    /// Consume the postfix queue into a tree, folding constant subtrees when the
    /// [optimize](Parser::optimize) switch is on.
    fn build_tree(
        &self,
        queue: Vec<SymbolData<T>>,
        binding: Rc<VariableBinding<T>>,
    ) -> Result<Node<T>, Error> {
        let mut operands: Vec<Node<T>> = Vec::new();

        for data in queue {
            if data.symbol.is_marker() {
                return Err(Error::SyntaxError(format!(
                    "'{}' not allowed in postfix notation",
                    data.token
                )));
            }

            let arity = data.symbol.arity();
            let mut collapse = self.optimize && arity > 0;
            let mut children: Vec<Node<T>> = Vec::new();
            if arity > 0 {
                if operands.len() < arity {
                    return Err(Error::ArgumentsMismatch {
                        needed: arity,
                        provided: operands.len(),
                        token: Some(data.token),
                    });
                }
                children = operands.split_off(operands.len() - arity);
                for child in &children {
                    collapse = collapse && child.pruned().is_empty();
                }
            }

            // an applied prefix or suffix is indistinguishable from its function
            let symbol = match data.symbol {
                Symbol::Prefix(function) | Symbol::Suffix(function) => Symbol::Function(function),
                other => other,
            };

            let node = if collapse {
                let args: Vec<T> = children.iter().map(Node::compute).collect();
                let folded = Symbol::Constant(symbol.eval(&args));
                let hash = tree_hash(&[], &folded);
                let token = match &folded {
                    Symbol::Constant(value) => self.lexer.to_string(value),
                    _ => data.token,
                };
                Node::assemble(
                    Rc::clone(&self.lexer),
                    Rc::clone(&binding),
                    token,
                    folded,
                    Vec::new(),
                    hash,
                )?
            } else {
                let hash = tree_hash(&children, &symbol);
                Node::assemble(
                    Rc::clone(&self.lexer),
                    Rc::clone(&binding),
                    data.token,
                    symbol,
                    children,
                    hash,
                )?
            };
            operands.push(node);
        }

        let node = match operands.pop() {
            Some(node) => node,
            None => return Err(Error::EmptyExpression),
        };
        if let Some(unused) = operands.pop() {
            return Err(Error::UnusedSymbol(unused.token().to_string()));
        }
        for variable in binding.variables() {
            if !node.pruned().contains(variable) {
                return Err(Error::UnusedSymbol(variable.clone()));
            }
        }
        Ok(node)
    }

    fn log_tokens(&self, _tokens: &[Token]) {
        #[cfg(debug_assertions)]
        if let Some(setting) = self.debug.get() {
            if setting.admits(&Log::Trace(())) {
                let texts: Vec<&str> = _tokens.iter().map(|t| t.text.as_str()).collect();
                println!("[{}; Tokenized]: {:?}", setting, texts);
            }
        }
    }

    fn log_outcome(&self, _outcome: &Result<Node<T>, Error>, _expression: &str) {
        #[cfg(debug_assertions)]
        if let Some(setting) = self.debug.get() {
            match _outcome {
                Ok(node) => {
                    if setting.admits(&Log::Outcomes(())) {
                        println!("[{}; Parsed]: {} => {}", setting, _expression, node.postfix());
                    }
                }
                Err(error) => {
                    if setting.admits(&Log::Failures(())) {
                        println!("[{}; Failed]: {} ({})", setting, _expression, error);
                    }
                }
            }
        }
    }

    /// Compile an infix expression over the declared variables.
    pub fn from_infix(&self, expression: &str, variables: &[&str]) -> Result<Node<T>, Error> {
        let names = variables.iter().map(|name| name.to_string()).collect();
        let binding = Rc::new(VariableBinding::new(names, &self.lexer)?);
        let tokens = self.lexer.tokenize_infix(expression);
        self.log_tokens(&tokens);

        let outcome = self
            .classify(tokens, true, &binding)
            .and_then(|stream| self.validate_infix(stream))
            .and_then(|stream| self.shunting_yard(stream))
            .and_then(|queue| self.build_tree(queue, binding));
        self.log_outcome(&outcome, expression);
        outcome
    }

    /// Compile a postfix expression over the declared variables.
    pub fn from_postfix(&self, expression: &str, variables: &[&str]) -> Result<Node<T>, Error> {
        let names = variables.iter().map(|name| name.to_string()).collect();
        let binding = Rc::new(VariableBinding::new(names, &self.lexer)?);
        let tokens = self.lexer.tokenize_postfix(expression);
        self.log_tokens(&tokens);

        let outcome = self.classify(tokens, false, &binding).and_then(|queue| {
            if queue.is_empty() {
                Err(Error::EmptyExpression)
            } else {
                self.build_tree(queue, binding)
            }
        });
        self.log_outcome(&outcome, expression);
        outcome
    }

    /// Compile an infix expression, inferring the variable list: every undefined name
    /// is appended as a variable and the parse is retried.
    pub fn parse(&self, expression: &str) -> Result<Node<T>, Error> {
        let mut inferred: Vec<String> = Vec::new();
        loop {
            let variables: Vec<&str> = inferred.iter().map(String::as_str).collect();
            match self.from_infix(expression, &variables) {
                Ok(node) => return Ok(node),
                Err(Error::UndefinedSymbol(token)) => {
                    if inferred.contains(&token) {
                        return Err(Error::UndefinedSymbol(token));
                    }
                    inferred.push(token);
                }
                Err(Error::UnsuitableName(token)) => {
                    return Err(Error::UndefinedSymbol(token))
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// A copy of `node` with every occurrence of the variable replaced by a constant
    /// of `value`; the copy's binding no longer declares that variable.
    pub fn substitute(
        &self,
        node: &Node<T>,
        variable: &str,
        value: T,
    ) -> Result<Node<T>, Error> {
        if !node.variables().iter().any(|name| name == variable) {
            return Err(Error::UndefinedSymbol(variable.to_string()));
        }
        let names = node
            .variables()
            .iter()
            .filter(|name| name.as_str() != variable)
            .cloned()
            .collect();
        let binding = Rc::new(VariableBinding::unchecked(names));
        Ok(self.substitute_walk(node, variable, value, &binding))
    }

    fn substitute_walk(
        &self,
        node: &Node<T>,
        variable: &str,
        value: T,
        binding: &Rc<VariableBinding<T>>,
    ) -> Node<T> {
        if matches!(node.symbol(), Symbol::Variable(_)) && node.token() == variable {
            let symbol = Symbol::Constant(value);
            let hash = tree_hash(&[], &symbol);
            return Node {
                lexer: Rc::clone(&self.lexer),
                binding: Rc::clone(binding),
                token: self.lexer.to_string(&value),
                symbol,
                branches: Vec::new(),
                hash,
                pruned_cache: OnceCell::new(),
            };
        }

        let symbol = match node.symbol() {
            Symbol::Variable(_) => match binding.index(node.token()) {
                Ok(index) => Symbol::Variable(index),
                Err(_) => node.symbol().clone(),
            },
            other => other.clone(),
        };
        let branches: Vec<Node<T>> = node
            .iter()
            .map(|child| self.substitute_walk(child, variable, value, binding))
            .collect();
        let hash = tree_hash(&branches, &symbol);
        Node {
            lexer: Rc::clone(&self.lexer),
            binding: Rc::clone(binding),
            token: node.token().to_string(),
            symbol,
            branches,
            hash,
            pruned_cache: OnceCell::new(),
        }
    }

    /// A copy of `node` with constant folding re-run bottom up; the declared variable
    /// list is preserved, so the copy evaluates with the same arguments.
    pub fn optimize(&self, node: &Node<T>) -> Node<T> {
        let binding = Rc::new(VariableBinding::unchecked(node.variables().to_vec()));
        self.optimize_walk(node, &binding)
    }

    fn optimize_walk(&self, node: &Node<T>, binding: &Rc<VariableBinding<T>>) -> Node<T> {
        let folded = match node.symbol() {
            Symbol::Variable(_) => match binding.index(node.token()) {
                Ok(index) => Symbol::Variable(index),
                Err(_) => node.symbol().clone(),
            },
            Symbol::Constant(value) => Symbol::Constant(*value),
            symbol => {
                let branches: Vec<Node<T>> = node
                    .iter()
                    .map(|child| self.optimize_walk(child, binding))
                    .collect();
                let foldable = !branches.is_empty()
                    && branches
                        .iter()
                        .all(|child| matches!(child.symbol(), Symbol::Constant(_)));
                if foldable {
                    let args: Vec<T> = branches.iter().map(Node::compute).collect();
                    Symbol::Constant(symbol.eval(&args))
                } else {
                    let hash = tree_hash(&branches, symbol);
                    return Node {
                        lexer: Rc::clone(&self.lexer),
                        binding: Rc::clone(binding),
                        token: node.token().to_string(),
                        symbol: symbol.clone(),
                        branches,
                        hash,
                        pruned_cache: OnceCell::new(),
                    };
                }
            }
        };

        let token = match &folded {
            Symbol::Constant(value) if !matches!(node.symbol(), Symbol::Constant(_)) => {
                self.lexer.to_string(value)
            }
            _ => node.token().to_string(),
        };
        let hash = tree_hash(&[], &folded);
        Node {
            lexer: Rc::clone(&self.lexer),
            binding: Rc::clone(binding),
            token,
            symbol: folded,
            branches: Vec::new(),
            hash,
            pruned_cache: OnceCell::new(),
        }
    }
}

impl<T: NumericImpl> Default for Parser<T> {
    fn default() -> Self {
        Self::new()
    }
}
