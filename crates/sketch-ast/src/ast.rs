//! Tree types for the Go subset accepted by the translator.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// A complete source file.
///
/// A program is the unit of translation: one `package` clause, its imports,
/// and the top-level declarations in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    /// Name from the `package` clause. Not emitted.
    pub package: String,
    /// Import declarations, in source order.
    pub imports: Vec<Import>,
    /// Top-level declarations, in source order.
    pub decls: Vec<Decl>,
}

impl Program {
    /// Create an empty program for the given package.
    pub fn new(package: &str) -> Self {
        Self {
            package: String::from(package),
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// Iterate over the top-level function declarations.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Function(f) => Some(f),
            Decl::Value(_) => None,
        })
    }

    /// Number of top-level function declarations.
    pub fn function_count(&self) -> usize {
        self.functions().count()
    }
}

/// An import declaration: `import [alias] "path"`.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    /// Optional local name for the package.
    pub alias: Option<String>,
    /// The quoted path, without quotes.
    pub path: ImportPath,
}

impl Import {
    /// Create an import without an alias.
    pub fn new(path: &str) -> Self {
        Self {
            alias: None,
            path: ImportPath::new(path),
        }
    }

    /// Create an aliased import.
    pub fn aliased(alias: &str, path: &str) -> Self {
        Self {
            alias: Some(String::from(alias)),
            path: ImportPath::new(path),
        }
    }
}

/// An import path such as `github.com/andygeiss/esp32/api/controller/wifi`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportPath(String);

impl ImportPath {
    /// Wrap a raw path string.
    pub fn new(raw: &str) -> Self {
        Self(String::from(raw))
    }

    /// The path as written in the source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty `/`-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// The final component after the last separator.
    ///
    /// `github.com/x/controller/wifi` -> `wifi`. A path without separators is
    /// its own trailing segment.
    pub fn trailing_segment(&self) -> &str {
        self.segments().last().unwrap_or("")
    }
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    /// `func name(params) { ... }`
    Function(Function),
    /// `const ...` or `var ...`
    Value(ValueDecl),
}

/// A function declaration. Functions never declare a result type.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    /// Name of the function.
    pub name: String,
    /// Parameters, in declaration order.
    pub params: Vec<Param>,
    /// Function body.
    pub body: Block,
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Type name as written in the source.
    pub ty: String,
}

impl Param {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: String::from(name),
            ty: String::from(ty),
        }
    }
}

/// A braced sequence of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Which keyword introduced a value declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Const,
    Var,
}

impl DeclKind {
    /// The source keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Const => "const",
            DeclKind::Var => "var",
        }
    }
}

/// A constant or variable declaration, at top level or inside a body.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueDecl {
    /// `const` or `var`.
    pub kind: DeclKind,
    /// Declared name.
    pub name: String,
    /// Type name as written in the source.
    pub ty: String,
    /// Optional initializer.
    pub value: Option<Expression>,
}

/// A statement inside a function body.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// Local `const` / `var` declaration.
    Decl(ValueDecl),
    /// Assignment: `target = value`.
    ///
    /// The target is an identifier or a selector.
    Assign {
        target: Expression,
        value: Expression,
    },
    /// Expression statement, in practice a bare call.
    Expr(Expression),
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// Literal carried through verbatim.
    Literal(Literal),
    /// Bare identifier.
    Identifier(String),
    /// Qualified selector: `object.member`.
    Selector {
        /// Left-hand segment (package or object name).
        object: String,
        /// Right-hand segment.
        member: String,
    },
    /// Call expression.
    Call {
        /// The callee, an identifier or a selector.
        callee: Box<Expression>,
        /// Arguments, in source order.
        args: Vec<Expression>,
    },
    /// Binary operation.
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Unary operation.
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    /// Parenthesized expression, kept so the output brackets where the source did.
    Paren(Box<Expression>),
}

impl Expression {
    /// Build an identifier expression.
    pub fn ident(name: &str) -> Self {
        Expression::Identifier(String::from(name))
    }

    /// Build a selector expression.
    pub fn selector(object: &str, member: &str) -> Self {
        Expression::Selector {
            object: String::from(object),
            member: String::from(member),
        }
    }

    /// Build a call expression.
    pub fn call(callee: Expression, args: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            args,
        }
    }
}

/// A literal. The text is kept exactly as written, quotes included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// `"..."`
    String(String),
    /// `'x'`
    Char(String),
    /// Integer or floating point text, e.g. `42`, `0x1F`, `3.5`.
    Number(String),
}

impl Literal {
    /// The verbatim source text.
    pub fn text(&self) -> &str {
        match self {
            Literal::String(s) | Literal::Char(s) | Literal::Number(s) => s,
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Operator spelling, identical in source and target.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Go binding strength, 1 (`||`) to 5 (`*`). Comparisons share one level.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 3,
            BinaryOp::Add | BinaryOp::Sub => 4,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 5,
        }
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Identity (+).
    Plus,
    /// Negation (-).
    Neg,
    /// Logical not (!).
    Not,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}
