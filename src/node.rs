use crate::{Associativity, Error, Lexer, Node, NumericImpl, Symbol, VariableBinding};
use once_cell::unsync::OnceCell;
use ptree::TreeItem;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::rc::Rc;

impl<T: NumericImpl> Node<T> {
    /// Assemble a node over already built children; the child count must agree with the
    /// symbol arity.
    pub(crate) fn assemble(
        lexer: Rc<Lexer<T>>,
        binding: Rc<VariableBinding<T>>,
        token: String,
        symbol: Symbol<T>,
        branches: Vec<Node<T>>,
        hash: u64,
    ) -> Result<Self, Error> {
        if branches.len() != symbol.arity() {
            return Err(Error::ArgumentsMismatch {
                needed: symbol.arity(),
                provided: branches.len(),
                token: Some(token),
            });
        }
        Ok(Self {
            lexer,
            binding,
            token,
            symbol,
            branches,
            hash,
            pruned_cache: OnceCell::new(),
        })
    }

    /// Evaluate the tree against one value per declared variable.
    ///
    /// The values are written into the shared binding slots first, then the tree is
    /// walked in post order: for `op(a, b)` the subtree `a` is fully evaluated before
    /// `b`, and both before `op`. Panics raised by user callables propagate unchanged.
    pub fn eval(&self, values: &[T]) -> Result<T, Error> {
        self.binding.update(values)?;
        Ok(self.compute())
    }

    /// Evaluate a closed tree, failing when variables are still declared.
    pub fn value(&self) -> Result<T, Error> {
        if self.binding.len() > 0 {
            return Err(Error::ArgumentsMismatch {
                needed: self.binding.len(),
                provided: 0,
                token: None,
            });
        }
        Ok(self.compute())
    }

    pub(crate) fn compute(&self) -> T {
        match &self.symbol {
            Symbol::Variable(index) => self.binding.value(*index),
            Symbol::Constant(value) => *value,
            symbol => {
                let args: Vec<T> = self.branches.iter().map(Node::compute).collect();
                symbol.eval(&args)
            }
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn symbol(&self) -> &Symbol<T> {
        &self.symbol
    }

    pub(crate) fn structural_hash(&self) -> u64 {
        self.hash
    }

    /// Number of children.
    pub fn branches(&self) -> usize {
        self.branches.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.branches.iter()
    }

    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.branches.get(index)
    }

    /// The declared variables, in declaration order.
    pub fn variables(&self) -> &[String] {
        self.binding.variables()
    }

    /// The declared variables which actually occur in the tree, computed by tokenizing
    /// the postfix form and cached on first use.
    pub fn pruned(&self) -> &[String] {
        self.pruned_cache.get_or_init(|| {
            let tokens = self.lexer.tokenize_postfix(&self.postfix());
            self.binding
                .variables()
                .iter()
                .filter(|variable| {
                    tokens
                        .iter()
                        .any(|token| token.text.as_str() == variable.as_str())
                })
                .cloned()
                .collect()
        })
    }

    /// Render the canonical infix form; a re-parse of it yields an equal tree.
    pub fn infix(&self) -> String {
        self.render_infix(false)
    }

    fn render_infix(&self, right_side: bool) -> String {
        match &self.symbol {
            Symbol::Function(_) | Symbol::Prefix(_) | Symbol::Suffix(_) => {
                let mut rendered = format!("{}{}", self.token, self.lexer.left);
                for (position, child) in self.branches.iter().enumerate() {
                    rendered.push_str(&child.render_infix(false));
                    if position + 1 != self.branches.len() {
                        rendered.push_str(&self.lexer.separator);
                    }
                }
                rendered.push_str(&self.lexer.right);
                rendered
            }
            Symbol::Operator(parent) => {
                let brace = |position: usize| -> String {
                    let child = &self.branches[position];
                    if let Symbol::Operator(inner) = &child.symbol {
                        let outer_side = if position == 0 {
                            parent.associativity() != Associativity::Right
                        } else {
                            parent.associativity() != Associativity::Left
                        };
                        let wrap = if outer_side {
                            inner.precedence() < parent.precedence()
                        } else {
                            inner.precedence() <= parent.precedence()
                        };
                        if wrap {
                            return format!(
                                "{}{}{}",
                                self.lexer.left,
                                child.render_infix(false),
                                self.lexer.right
                            );
                        }
                    }
                    let to_the_right = right_side
                        || position != 0
                        || parent.associativity() == Associativity::Right;
                    child.render_infix(to_the_right)
                };
                format!("{}{}{}", brace(0), self.token, brace(1))
            }
            _ => {
                if right_side && self.lexer.prefixed(&self.token) {
                    format!("{}{}{}", self.lexer.left, self.token, self.lexer.right)
                } else {
                    self.token.clone()
                }
            }
        }
    }

    /// Render the postfix form: children joined by spaces, then the node token.
    pub fn postfix(&self) -> String {
        let mut rendered = String::new();
        for child in &self.branches {
            rendered.push_str(&child.postfix());
            rendered.push(' ');
        }
        rendered.push_str(&self.token);
        rendered
    }

    /// Render an ASCII diagram of the tree, one bracketed token per line.
    pub fn tree(&self) -> String {
        let mut lines = Vec::new();
        self.tree_lines(&mut Vec::new(), &mut lines);
        lines.join("\n")
    }

    fn tree_lines(&self, ancestry: &mut Vec<bool>, out: &mut Vec<String>) {
        let mut line = String::new();
        if let Some((_, elders)) = ancestry.split_last() {
            line.push(' ');
            for closed in elders {
                line.push_str(if *closed { "   " } else { "|  " });
            }
            line.push_str("\\_");
        }
        line.push('[');
        line.push_str(&self.token);
        line.push(']');
        out.push(line);
        for (position, child) in self.branches.iter().enumerate() {
            ancestry.push(position + 1 == self.branches.len());
            child.tree_lines(ancestry, out);
            ancestry.pop();
        }
    }

    /// Pretty print the tree to the terminal with the ambient ptree style.
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }

    fn matches(&self, other: &Self) -> bool {
        match (&self.symbol, &other.symbol) {
            (Symbol::Variable(a), Symbol::Variable(b)) => a == b,
            (a, b) => a.equivalent(b),
        }
    }

    fn compare(&self, other: &Self) -> bool {
        self.matches(other)
            && self.branches.len() == other.branches.len()
            && self
                .branches
                .iter()
                .zip(other.branches.iter())
                .all(|(mine, theirs)| mine.compare(theirs))
    }

    /// Deep copy which rewires every variable leaf onto `binding` by name.
    pub(crate) fn rebind(&self, binding: &Rc<VariableBinding<T>>) -> Node<T> {
        let symbol = match &self.symbol {
            Symbol::Variable(_) => match binding.index(&self.token) {
                Ok(index) => Symbol::Variable(index),
                Err(_) => self.symbol.clone(),
            },
            other => other.clone(),
        };
        Node {
            lexer: Rc::clone(&self.lexer),
            binding: Rc::clone(binding),
            token: self.token.clone(),
            symbol,
            branches: self
                .branches
                .iter()
                .map(|child| child.rebind(binding))
                .collect(),
            hash: self.hash,
            pruned_cache: OnceCell::new(),
        }
    }
}

impl<T: NumericImpl> Clone for Node<T> {
    /// Cloning rebinds the copy onto a fresh binding holding only the pruned variables,
    /// so the copy and the original stay independently evaluable; this also turns a
    /// borrowed subtree into a self-contained expression.
    fn clone(&self) -> Self {
        let binding = Rc::new(VariableBinding::unchecked(self.pruned().to_vec()));
        self.rebind(&binding)
    }
}

impl<T: NumericImpl> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash {
            return false;
        }
        self.compare(other)
    }
}

impl<T: NumericImpl> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: NumericImpl> Index<usize> for Node<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.branches[index]
    }
}

impl<'n, T: NumericImpl> IntoIterator for &'n Node<T> {
    type Item = &'n Node<T>;
    type IntoIter = std::slice::Iter<'n, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}

impl<T: NumericImpl> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.infix())
    }
}

impl<T: NumericImpl> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Node");
        debug_struct
            .field("token", &self.token)
            .field("symbol", &self.symbol);
        if !self.branches.is_empty() {
            debug_struct.field("branches", &self.branches);
        }
        debug_struct.finish()
    }
}

impl<T: NumericImpl> TreeItem for Node<T> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        write!(f, "{}", self.token)
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        std::borrow::Cow::from(&self.branches)
    }
}
