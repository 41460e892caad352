//! Parser implementation for the Go subset.
//!
//! Accepted surface:
//!
//! ```text
//! program     = "package" IDENT { import_decl } { top_decl } ;
//! import_decl = "import" ( import_spec | "(" { import_spec } ")" ) ;
//! import_spec = [ IDENT | "_" | "." ] STRING ;
//! top_decl    = func_decl | value_decl ;
//! func_decl   = "func" IDENT "(" [ param_list ] ")" block ;
//! param_list  = param_group { "," param_group } ;
//! param_group = IDENT { "," IDENT } TYPE ;
//! value_decl  = ( "const" | "var" ) IDENT TYPE [ "=" expr ] ;
//! block       = "{" { statement [ ";" ] } "}" ;
//! statement   = value_decl | operand "=" expr | call ;
//! ```
//!
//! Control flow, short variable declarations and result types are rejected
//! with a [`ParseError`] naming the construct.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    error::ErrorKind,
    IResult, Parser,
};
use sketch_ast::{
    BinaryOp, Block, Decl, DeclKind, Expression, Function, Import, ImportPath, Literal, Param,
    Program, Statement, UnaryOp, ValueDecl,
};

/// Parse error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line of the offending input, 0 when unknown.
    pub line: usize,
    /// 1-based column (in characters) of the offending input, 0 when unknown.
    pub column: usize,
}

impl ParseError {
    pub fn new(msg: &str) -> Self {
        Self {
            message: msg.to_string(),
            line: 0,
            column: 0,
        }
    }

    /// Build an error positioned at `rest`, a suffix of `source`.
    fn at(source: &str, rest: &str, msg: &str) -> Self {
        let offset = source.len().saturating_sub(rest.len());
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let column = consumed[line_start..].chars().count() + 1;
        Self {
            message: msg.to_string(),
            line,
            column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}:{}: {}", self.line, self.column, self.message)
        }
    }
}

/// Internal nom error carrying a static message and the failing input.
#[derive(Clone, Debug, PartialEq)]
struct Failure<'a> {
    input: &'a str,
    message: &'static str,
}

impl<'a> nom::error::ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::Char => "unexpected character",
            ErrorKind::Tag => "unexpected token",
            _ => "syntax error",
        };
        Failure { input, message }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, T> = IResult<&'a str, T, Failure<'a>>;

/// Abort parsing with a message. Failures are not backtracked over.
fn fail<'a, T>(input: &'a str, message: &'static str) -> PResult<'a, T> {
    Err(nom::Err::Failure(Failure { input, message }))
}

/// Reject the current branch so the caller may try another.
fn reject<'a, T>(input: &'a str, message: &'static str) -> PResult<'a, T> {
    Err(nom::Err::Error(Failure { input, message }))
}

/// Parse a program from source code.
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    match program(input) {
        Ok((remaining, prog)) => {
            let remaining = skip_ws(remaining);
            if remaining.is_empty() {
                Ok(prog)
            } else {
                Err(ParseError::at(input, remaining, "unexpected input after program"))
            }
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(ParseError::at(input, e.input, e.message))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::new("unexpected end of input")),
    }
}

/// Skip whitespace and comments.
///
/// ```text
/// LINE_COMMENT   ::= '//' [^\n]*
/// BLOCK_COMMENT  ::= '/*' .* '*/'
/// ```
fn skip_ws(input: &str) -> &str {
    let mut rest = input;
    loop {
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() && !rest.starts_with("//") && !rest.starts_with("/*") {
            break;
        }
        rest = trimmed;

        if rest.starts_with("//") {
            if let Some(pos) = rest.find('\n') {
                rest = &rest[pos + 1..];
            } else {
                rest = "";
            }
            continue;
        }

        if rest.starts_with("/*") {
            if let Some(pos) = rest.find("*/") {
                rest = &rest[pos + 2..];
            } else {
                rest = "";
            }
            continue;
        }
    }
    rest
}

/// Skip whitespace, comments and any number of `;` separators.
fn skip_separators(input: &str) -> &str {
    let mut rest = skip_ws(input);
    while let Some(stripped) = rest.strip_prefix(';') {
        rest = skip_ws(stripped);
    }
    rest
}

fn sym(input: &str, c: char) -> PResult<'_, char> {
    char(c).parse(input)
}

/// Match a keyword that is not the prefix of a longer identifier.
fn keyword<'a>(input: &'a str, kw: &'static str) -> PResult<'a, &'a str> {
    let (rest, matched) = tag::<_, _, Failure<'a>>(kw).parse(input)?;
    if rest.starts_with(is_ident_start) || rest.starts_with(|c: char| c.is_ascii_digit()) {
        return reject(input, "unexpected token");
    }
    Ok((rest, matched))
}

fn at_keyword(input: &str, kw: &str) -> bool {
    input.starts_with(kw) && !is_ident_char(input.as_bytes().get(kw.len()).copied().unwrap_or(0))
}

/// Parse a program.
fn program(input: &str) -> PResult<'_, Program> {
    let input = skip_ws(input);
    let (input, _) = match keyword(input, "package") {
        Ok(ok) => ok,
        Err(_) => return fail(input, "expected `package` clause"),
    };
    let input = skip_ws(input);
    let (input, package) = identifier(input)?;

    let mut imports = Vec::new();
    let mut decls = Vec::new();
    let mut current = input;

    loop {
        let trimmed = skip_separators(current);
        if trimmed.is_empty() {
            current = trimmed;
            break;
        }

        if at_keyword(trimmed, "import") {
            if !decls.is_empty() {
                return fail(trimmed, "imports must precede declarations");
            }
            let (rest, mut specs) = import_decl(trimmed)?;
            imports.append(&mut specs);
            current = rest;
            continue;
        }

        if at_keyword(trimmed, "func") {
            let (rest, f) = function(trimmed)?;
            decls.push(Decl::Function(f));
            current = rest;
            continue;
        }

        if at_keyword(trimmed, "const") || at_keyword(trimmed, "var") {
            let (rest, v) = value_decl(trimmed)?;
            decls.push(Decl::Value(v));
            current = rest;
            continue;
        }

        if at_keyword(trimmed, "type") {
            return fail(trimmed, "type declarations are not supported");
        }

        return fail(trimmed, "expected `import`, `func`, `const` or `var`");
    }

    Ok((current, Program { package, imports, decls }))
}

/// Parse an import declaration, single or grouped.
fn import_decl(input: &str) -> PResult<'_, Vec<Import>> {
    let (input, _) = keyword(input, "import")?;
    let input = skip_ws(input);

    if let Some(rest) = input.strip_prefix('(') {
        let mut specs = Vec::new();
        let mut current = rest;
        loop {
            let trimmed = skip_separators(current);
            if let Some(rest) = trimmed.strip_prefix(')') {
                return Ok((rest, specs));
            }
            if trimmed.is_empty() {
                return fail(trimmed, "unterminated import group");
            }
            let (rest, spec) = import_spec(trimmed)?;
            specs.push(spec);
            current = rest;
        }
    }

    let (input, spec) = import_spec(input)?;
    Ok((input, alloc::vec![spec]))
}

/// Parse `[alias] "path"`.
fn import_spec(input: &str) -> PResult<'_, Import> {
    let (input, alias) = if input.starts_with('"') {
        (input, None)
    } else if let Some(rest) = input.strip_prefix('.') {
        (rest, Some(".".to_string()))
    } else {
        let (rest, name) = match identifier(input) {
            Ok(ok) => ok,
            Err(_) => return fail(input, "expected import path"),
        };
        (rest, Some(name))
    };
    let input = skip_ws(input);
    let (input, quoted) = match string_literal(input) {
        Ok(ok) => ok,
        Err(_) => return fail(input, "expected import path"),
    };
    let path = &quoted[1..quoted.len() - 1];
    if path.is_empty() {
        return fail(input, "empty import path");
    }

    Ok((input, Import { alias, path: ImportPath::new(path) }))
}

/// Parse a function declaration.
fn function(input: &str) -> PResult<'_, Function> {
    let (input, _) = keyword(input, "func")?;
    let input = skip_ws(input);
    if input.starts_with('(') {
        return fail(input, "methods are not supported");
    }
    let (input, name) = identifier(input)?;
    let input = skip_ws(input);
    let (input, _) = sym(input, '(')?;
    let (input, params) = param_list(input)?;
    let input = skip_ws(input);
    let (input, _) = sym(input, ')')?;
    let input = skip_ws(input);
    if !input.starts_with('{') {
        return fail(input, "function result types are not supported");
    }
    let (input, body) = block(input)?;

    Ok((input, Function { name, params, body }))
}

/// Parse a parameter list, including Go's grouped form `a, b int`.
fn param_list(input: &str) -> PResult<'_, Vec<Param>> {
    let mut params = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut current = skip_ws(input);

    if current.starts_with(')') {
        return Ok((current, params));
    }

    loop {
        let (rest, name) = identifier(current)?;
        let rest = skip_ws(rest);

        if let Some(rest) = rest.strip_prefix(',') {
            pending.push(name);
            current = skip_ws(rest);
            continue;
        }
        if rest.starts_with(')') {
            return fail(rest, "parameter is missing a type");
        }

        let (rest, ty) = type_name(rest)?;
        for pending_name in pending.drain(..) {
            params.push(Param { name: pending_name, ty: ty.clone() });
        }
        params.push(Param { name, ty });

        let rest = skip_ws(rest);
        if let Some(rest) = rest.strip_prefix(',') {
            current = skip_ws(rest);
            continue;
        }
        return Ok((rest, params));
    }
}

/// Parse a type name. Only plain named types are accepted.
fn type_name(input: &str) -> PResult<'_, String> {
    if input.starts_with('[') || input.starts_with('*') || input.starts_with('(') {
        return fail(input, "composite types are not supported");
    }
    if at_keyword(input, "map") || at_keyword(input, "chan") || at_keyword(input, "struct")
        || at_keyword(input, "func") || at_keyword(input, "interface")
    {
        return fail(input, "composite types are not supported");
    }
    match identifier(input) {
        Ok(ok) => Ok(ok),
        Err(_) => fail(input, "expected type name"),
    }
}

/// Parse a `const` or `var` declaration.
fn value_decl(input: &str) -> PResult<'_, ValueDecl> {
    let (input, kind) = if at_keyword(input, "const") {
        (&input[5..], DeclKind::Const)
    } else {
        let (rest, _) = keyword(input, "var")?;
        (rest, DeclKind::Var)
    };
    let input = skip_ws(input);
    if input.starts_with('(') {
        return fail(input, "grouped declarations are not supported");
    }
    let (input, name) = identifier(input)?;
    let input = skip_ws(input);
    if input.starts_with('=') || input.starts_with(',') {
        return fail(input, "declarations require an explicit type");
    }
    let (input, ty) = type_name(input)?;

    let after_type = skip_ws(input);
    if let Some(rest) = after_type.strip_prefix('=') {
        let rest = skip_ws(rest);
        let (rest, value) = expression(rest)?;
        return Ok((rest, ValueDecl { kind, name, ty, value: Some(value) }));
    }
    if kind == DeclKind::Const {
        return fail(after_type, "constant declarations require a value");
    }

    Ok((input, ValueDecl { kind, name, ty, value: None }))
}

fn block(input: &str) -> PResult<'_, Block> {
    let (input, _) = sym(input, '{')?;
    let mut statements = Vec::new();
    let mut current = input;

    loop {
        let trimmed = skip_separators(current);
        if let Some(rest) = trimmed.strip_prefix('}') {
            return Ok((rest, Block { statements }));
        }
        if trimmed.is_empty() {
            return fail(trimmed, "unterminated block");
        }
        let (rest, stmt) = statement(trimmed)?;
        statements.push(stmt);
        current = rest;
    }
}

/// Keywords that start statements outside the supported subset.
const UNSUPPORTED_STATEMENTS: &[(&str, &str)] = &[
    ("if", "`if` statements are not supported"),
    ("for", "`for` statements are not supported"),
    ("switch", "`switch` statements are not supported"),
    ("select", "`select` statements are not supported"),
    ("return", "`return` statements are not supported"),
    ("go", "`go` statements are not supported"),
    ("defer", "`defer` statements are not supported"),
    ("goto", "`goto` statements are not supported"),
    ("break", "`break` statements are not supported"),
    ("continue", "`continue` statements are not supported"),
    ("type", "type declarations are not supported"),
    ("func", "nested functions are not supported"),
];

/// Parse a statement.
fn statement(input: &str) -> PResult<'_, Statement> {
    if at_keyword(input, "const") || at_keyword(input, "var") {
        let (rest, decl) = value_decl(input)?;
        return Ok((rest, Statement::Decl(decl)));
    }

    for &(kw, message) in UNSUPPORTED_STATEMENTS {
        if at_keyword(input, kw) {
            return fail(input, message);
        }
    }

    let (rest, expr) = expression(input)?;
    let after = skip_ws(rest);

    if after.starts_with(":=") {
        return fail(after, "short variable declarations are not supported");
    }

    if after.starts_with('=') && !after.starts_with("==") {
        if !matches!(expr, Expression::Identifier(_) | Expression::Selector { .. }) {
            return fail(input, "cannot assign to this expression");
        }
        let value_input = skip_ws(&after[1..]);
        let (rest, value) = expression(value_input)?;
        return Ok((rest, Statement::Assign { target: expr, value }));
    }

    if !matches!(expr, Expression::Call { .. }) {
        return fail(input, "expression statement must be a call");
    }

    Ok((rest, Statement::Expr(expr)))
}

/// Parse an expression.
///
/// ```text
/// expr      = or_expr ;
/// or_expr   = and_expr { "||" and_expr } ;
/// and_expr  = comp_expr { "&&" comp_expr } ;
/// comp_expr = add_expr [ comp_op add_expr ] ;
/// add_expr  = mul_expr { ( "+" | "-" ) mul_expr } ;
/// mul_expr  = unary { ( "*" | "/" | "%" ) unary } ;
/// unary     = ( "+" | "-" | "!" ) unary | postfix ;
/// ```
fn expression(input: &str) -> PResult<'_, Expression> {
    or_expr(input)
}

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    Expression::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn or_expr(input: &str) -> PResult<'_, Expression> {
    let (mut input, mut left) = and_expr(input)?;

    loop {
        let trimmed = skip_ws(input);
        if let Some(rest) = trimmed.strip_prefix("||") {
            let (rest, right) = and_expr(skip_ws(rest))?;
            left = binary(BinaryOp::Or, left, right);
            input = rest;
            continue;
        }
        break;
    }

    Ok((input, left))
}

fn and_expr(input: &str) -> PResult<'_, Expression> {
    let (mut input, mut left) = comp_expr(input)?;

    loop {
        let trimmed = skip_ws(input);
        if let Some(rest) = trimmed.strip_prefix("&&") {
            let (rest, right) = comp_expr(skip_ws(rest))?;
            left = binary(BinaryOp::And, left, right);
            input = rest;
            continue;
        }
        break;
    }

    Ok((input, left))
}

fn comp_expr(input: &str) -> PResult<'_, Expression> {
    let (input, left) = add_expr(input)?;
    let trimmed = skip_ws(input);

    let (op, op_len) = if trimmed.starts_with("==") {
        (Some(BinaryOp::Eq), 2)
    } else if trimmed.starts_with("!=") {
        (Some(BinaryOp::Ne), 2)
    } else if trimmed.starts_with("<=") {
        (Some(BinaryOp::Le), 2)
    } else if trimmed.starts_with(">=") {
        (Some(BinaryOp::Ge), 2)
    } else if trimmed.starts_with("<<") || trimmed.starts_with(">>") {
        (None, 0)
    } else if trimmed.starts_with('<') {
        (Some(BinaryOp::Lt), 1)
    } else if trimmed.starts_with('>') {
        (Some(BinaryOp::Gt), 1)
    } else {
        (None, 0)
    };

    if let Some(op) = op {
        let rest = skip_ws(&trimmed[op_len..]);
        let (rest, right) = add_expr(rest)?;
        Ok((rest, binary(op, left, right)))
    } else {
        Ok((input, left))
    }
}

fn add_expr(input: &str) -> PResult<'_, Expression> {
    let (mut input, mut left) = mul_expr(input)?;

    loop {
        let trimmed = skip_ws(input);
        let op = if trimmed.starts_with("++") || trimmed.starts_with("--") {
            return fail(trimmed, "increment and decrement statements are not supported");
        } else if trimmed.starts_with("+=") || trimmed.starts_with("-=") {
            return fail(trimmed, "compound assignment is not supported");
        } else if trimmed.starts_with('+') {
            Some(BinaryOp::Add)
        } else if trimmed.starts_with('-') {
            Some(BinaryOp::Sub)
        } else {
            None
        };

        if let Some(op) = op {
            let rest = skip_ws(&trimmed[1..]);
            let (rest, right) = mul_expr(rest)?;
            left = binary(op, left, right);
            input = rest;
            continue;
        }
        break;
    }

    Ok((input, left))
}

fn mul_expr(input: &str) -> PResult<'_, Expression> {
    let (mut input, mut left) = unary_expr(input)?;

    loop {
        let trimmed = skip_ws(input);
        let op = if trimmed.starts_with("*=") || trimmed.starts_with("/=") || trimmed.starts_with("%=") {
            return fail(trimmed, "compound assignment is not supported");
        } else if trimmed.starts_with('*') {
            Some(BinaryOp::Mul)
        } else if trimmed.starts_with('/') && !trimmed.starts_with("//") && !trimmed.starts_with("/*") {
            Some(BinaryOp::Div)
        } else if trimmed.starts_with('%') {
            Some(BinaryOp::Mod)
        } else {
            None
        };

        if let Some(op) = op {
            let rest = skip_ws(&trimmed[1..]);
            let (rest, right) = unary_expr(rest)?;
            left = binary(op, left, right);
            input = rest;
            continue;
        }
        break;
    }

    Ok((input, left))
}

fn unary_expr(input: &str) -> PResult<'_, Expression> {
    if input.starts_with("++") || input.starts_with("--") {
        return fail(input, "increment and decrement statements are not supported");
    }

    let sign = if input.starts_with('-') {
        Some(UnaryOp::Neg)
    } else if input.starts_with('+') {
        Some(UnaryOp::Plus)
    } else {
        None
    };
    if let Some(op) = sign {
        let (rest, operand) = unary_expr(skip_ws(&input[1..]))?;
        return Ok((rest, Expression::Unary {
            op,
            operand: Box::new(operand),
        }));
    }

    if input.starts_with('!') && !input.starts_with("!=") {
        let (rest, operand) = unary_expr(skip_ws(&input[1..]))?;
        return Ok((rest, Expression::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }));
    }

    postfix_expr(input)
}

/// Parse a primary expression followed by an optional selector and call.
fn postfix_expr(input: &str) -> PResult<'_, Expression> {
    let start = input;
    let (mut input, mut expr) = primary_expr(input)?;

    // Selector: IDENT "." IDENT
    if let Some(rest) = input.strip_prefix('.') {
        let object = match expr {
            Expression::Identifier(name) => name,
            _ => return fail(input, "selectors are only supported on identifiers"),
        };
        let (rest, member) = identifier(skip_ws(rest))?;
        if rest.starts_with('.') {
            return fail(rest, "nested selectors are not supported");
        }
        expr = Expression::Selector { object, member };
        input = rest;
    }

    let trimmed = skip_ws(input);
    if trimmed.starts_with('(') {
        if !matches!(expr, Expression::Identifier(_) | Expression::Selector { .. }) {
            return fail(start, "only named functions can be called");
        }
        let (rest, args) = call_args(trimmed)?;
        expr = Expression::Call {
            callee: Box::new(expr),
            args,
        };
        input = rest;

        let after = skip_ws(input);
        if after.starts_with('.') || after.starts_with('(') {
            return fail(after, "chained calls are not supported");
        }
    }

    if input.starts_with('[') {
        return fail(input, "index expressions are not supported");
    }

    Ok((input, expr))
}

/// Parse `( [ expr { "," expr } [ "," ] ] )`.
fn call_args(input: &str) -> PResult<'_, Vec<Expression>> {
    let (input, _) = sym(input, '(')?;
    let mut args = Vec::new();
    let mut current = input;

    loop {
        let trimmed = skip_ws(current);

        if let Some(rest) = trimmed.strip_prefix(')') {
            return Ok((rest, args));
        }

        let (rest, arg) = expression(trimmed)?;
        args.push(arg);
        let rest = skip_ws(rest);

        if let Some(rest) = rest.strip_prefix(',') {
            current = rest;
            continue;
        }

        if let Some(rest) = rest.strip_prefix(')') {
            return Ok((rest, args));
        }

        return fail(rest, "expected `,` or `)` in argument list");
    }
}

fn primary_expr(input: &str) -> PResult<'_, Expression> {
    if let Some(rest) = input.strip_prefix('(') {
        let (rest, inner) = expression(skip_ws(rest))?;
        let rest = skip_ws(rest);
        let (rest, _) = match sym(rest, ')') {
            Ok(ok) => ok,
            Err(_) => return fail(rest, "expected `)`"),
        };
        return Ok((rest, Expression::Paren(Box::new(inner))));
    }

    if input.starts_with('"') {
        let (rest, text) = string_literal(input)?;
        return Ok((rest, Expression::Literal(Literal::String(text.to_string()))));
    }

    if input.starts_with('\'') {
        let (rest, text) = rune_literal(input)?;
        return Ok((rest, Expression::Literal(Literal::Char(text.to_string()))));
    }

    if input.starts_with('`') {
        return fail(input, "raw string literals are not supported");
    }

    if input.starts_with(|c: char| c.is_ascii_digit()) {
        let (rest, text) = number_literal(input)?;
        return Ok((rest, Expression::Literal(Literal::Number(text.to_string()))));
    }

    if input.starts_with(is_ident_start) {
        let (rest, name) = identifier(input)?;
        return Ok((rest, Expression::Identifier(name)));
    }

    if input.is_empty() {
        return fail(input, "unexpected end of input, expected expression");
    }
    fail(input, "expected expression")
}

/// Scan a quoted literal, returning its text including the delimiters.
///
/// Escapes are skipped over but left untouched.
fn quoted<'a>(input: &'a str, delim: char, message: &'static str) -> PResult<'a, &'a str> {
    let mut escaped = false;
    for (i, c) in input.char_indices().skip(1) {
        if c == '\n' {
            break;
        }
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if c == delim {
            let end = i + c.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }
    fail(input, message)
}

fn string_literal(input: &str) -> PResult<'_, &str> {
    if !input.starts_with('"') {
        return reject(input, "expected string literal");
    }
    quoted(input, '"', "unterminated string literal")
}

fn rune_literal(input: &str) -> PResult<'_, &str> {
    quoted(input, '\'', "unterminated rune literal")
}

/// Scan a numeric literal, returning its source text.
///
/// Accepts decimal, hexadecimal and binary integers and decimal floats with
/// an optional exponent. `0o` octal has no C spelling and is rejected.
fn number_literal(input: &str) -> PResult<'_, &str> {
    let radix = if input.starts_with("0x") || input.starts_with("0X") {
        Some(is_hex_digit as fn(char) -> bool)
    } else if input.starts_with("0b") || input.starts_with("0B") {
        Some(is_binary_digit as fn(char) -> bool)
    } else if input.starts_with("0o") || input.starts_with("0O") {
        return fail(input, "`0o` octal literals are not supported");
    } else {
        None
    };

    if let Some(digit) = radix {
        let (rest, _) = take_while1::<_, _, Failure>(digit).parse(&input[2..])?;
        if rest.starts_with(is_ident_start) || rest.starts_with(|c: char| c.is_ascii_digit()) {
            return fail(rest, "malformed number literal");
        }
        return Ok((rest, &input[..input.len() - rest.len()]));
    }

    let (mut rest, _) = take_while1::<_, _, Failure>(|c: char| c.is_ascii_digit() || c == '_').parse(input)?;

    if rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
        let (after, _) = take_while::<_, _, Failure>(|c: char| c.is_ascii_digit()).parse(&rest[1..])?;
        rest = after;
    }

    if rest.starts_with('e') || rest.starts_with('E') {
        let exp = &rest[1..];
        let exp = exp.strip_prefix('+').or_else(|| exp.strip_prefix('-')).unwrap_or(exp);
        let (after, _) = take_while1::<_, _, Failure>(|c: char| c.is_ascii_digit()).parse(exp)?;
        rest = after;
    }

    if rest.starts_with(is_ident_start) {
        return fail(rest, "malformed number literal");
    }

    Ok((rest, &input[..input.len() - rest.len()]))
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1' || c == '_'
}

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type", "var",
];

fn identifier(input: &str) -> PResult<'_, String> {
    if !input.starts_with(is_ident_start) {
        return reject(input, "expected identifier");
    }

    let (rest, name) = take_while1::<_, _, Failure>(|c: char| c.is_ascii_alphanumeric() || c == '_')
        .parse(input)?;

    if KEYWORDS.contains(&name) {
        return reject(input, "unexpected keyword");
    }

    Ok((rest, name.to_string()))
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
