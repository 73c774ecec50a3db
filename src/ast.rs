use serde::Serialize;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant owns its children and its text, so a tree stays valid after
/// the token buffer it was parsed from has been dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expr {
    /// An integer literal such as `42`.
    NumericLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hi"`.
    StringLiteral {
        /// The literal contents, without quotes.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation such as `-x` or `!flag`.
    UnaryExpr {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An infix operation such as `a + b` or `a <= b`.
    BinaryExpr {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment `target = value`.
    ///
    /// The parser accepts any expression as target; only identifiers are
    /// accepted when the assignment is evaluated.
    AssignmentExpr {
        /// The expression being assigned to.
        target: Box<Self>,
        /// The value being assigned.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use ember::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryExpr { line, .. }
            | Self::BinaryExpr { line, .. }
            | Self::AssignmentExpr { line, .. } => *line,
        }
    }
}

/// Represents a statement.
///
/// A line of input holds one or more statements separated by semicolons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `let` or `const`.
    VariableDeclaration {
        /// The name of the variable.
        name:     String,
        /// The initial value; `None` declares the variable as `null`.
        value:    Option<Expr>,
        /// Whether the binding was declared with `const`.
        is_const: bool,
        /// Line number in the source code.
        line:     usize,
    },
}

/// An ordered sequence of statements parsed from one piece of source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// The statements in source order.
    pub body: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication or repetition (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Looks up the operator spelled `symbol`.
    ///
    /// # Example
    /// ```
    /// use ember::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_symbol("!"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            _ => return None,
        })
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Bitwise NOT (`~x`).
    BitNot,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl UnaryOperator {
    /// Looks up the prefix operator spelled `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(Self::Not),
            "~" => Some(Self::BitNot),
            "-" => Some(Self::Negate),
            _ => None,
        }
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
