//! Arduino sketch generator.
//!
//! Walks a [`Program`] and emits sketch text: include directives first, then
//! every top-level declaration in source order. A program without functions
//! gets empty `loop` and `setup` entry points so the sketch always links.

use log::{debug, log_enabled, trace, Level};
use sketch_ast::pretty::pretty_print_program;
use sketch_ast::{BinaryOp, Block, Decl, DeclKind, Expression, Function, Program, Statement, ValueDecl};

use crate::imports::{include_directive, required_headers};
use crate::overrides::OverrideTable;
use crate::registry::ControllerRegistry;
use crate::resolve::SelectorResolver;

/// Options for sketch generation.
#[derive(Clone, Debug)]
pub struct SketchCodegenOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Name of the one-time initialization entry point.
    pub setup_name: String,
    /// Name of the repeating entry point.
    pub loop_name: String,
}

impl Default for SketchCodegenOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            setup_name: "setup".to_string(),
            loop_name: "loop".to_string(),
        }
    }
}

impl SketchCodegenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the entry point names synthesized for function-less programs.
    pub fn with_entry_points(mut self, setup_name: &str, loop_name: &str) -> Self {
        self.setup_name = setup_name.to_string();
        self.loop_name = loop_name.to_string();
        self
    }
}

/// Map a source type name to its sketch equivalent.
///
/// Unknown names, including `int` and `bool`, pass through unchanged.
pub fn type_to_sketch(ty: &str) -> &str {
    match ty {
        "string" => "char*",
        "float32" => "float",
        "float64" => "double",
        "byte" => "uint8_t",
        "rune" => "char",
        other => other,
    }
}

/// C binding strength. Unlike Go, equality binds looser than ordering.
fn c_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => 1,
        BinaryOp::And => 2,
        BinaryOp::Eq | BinaryOp::Ne => 3,
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 4,
        BinaryOp::Add | BinaryOp::Sub => 5,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
    }
}

/// Sketch code generator.
pub struct SketchCodegen<'a> {
    output: String,
    indent: usize,
    options: SketchCodegenOptions,
    registry: &'a ControllerRegistry,
    resolver: SelectorResolver<'a>,
}

impl<'a> SketchCodegen<'a> {
    /// Create a generator with default options.
    pub fn new(overrides: &'a OverrideTable, registry: &'a ControllerRegistry) -> Self {
        Self::with_options(overrides, registry, SketchCodegenOptions::default())
    }

    /// Create a generator with the specified options.
    pub fn with_options(
        overrides: &'a OverrideTable,
        registry: &'a ControllerRegistry,
        options: SketchCodegenOptions,
    ) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            options,
            registry,
            resolver: SelectorResolver::new(overrides, registry),
        }
    }

    /// Generate sketch text for a whole program.
    pub fn generate(&mut self, program: &Program) -> String {
        self.output.clear();
        self.indent = 0;

        if log_enabled!(Level::Trace) {
            trace!("translating program:\n{}", pretty_print_program(program));
        }

        let headers = required_headers(&program.imports, self.registry);
        for header in &headers {
            self.emit_line(&include_directive(header));
        }

        let mut previous: Option<&Decl> = None;
        for decl in &program.decls {
            let separate = match (previous, decl) {
                (None, _) => !headers.is_empty(),
                (Some(Decl::Value(_)), Decl::Value(_)) => false,
                _ => true,
            };
            if separate {
                self.emit_line("");
            }

            match decl {
                Decl::Function(function) => self.emit_function(function),
                Decl::Value(value) => self.emit_value_decl(value),
            }
            previous = Some(decl);
        }

        if program.function_count() == 0 {
            debug!(
                "no functions in package `{}`, synthesizing `{}` and `{}`",
                program.package, self.options.loop_name, self.options.setup_name
            );
            if !self.output.is_empty() {
                self.emit_line("");
            }
            let loop_name = self.options.loop_name.clone();
            let setup_name = self.options.setup_name.clone();
            self.emit_line(&format!("void {}() {{}}", loop_name));
            self.emit_line("");
            self.emit_line(&format!("void {}() {{}}", setup_name));
        }

        std::mem::take(&mut self.output)
    }

    fn emit_function(&mut self, function: &Function) {
        let params = function
            .params
            .iter()
            .map(|p| format!("{} {}", type_to_sketch(&p.ty), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        if function.body.statements.is_empty() {
            self.emit_line(&format!("void {}({}) {{}}", function.name, params));
            return;
        }

        self.emit_line(&format!("void {}({}) {{", function.name, params));
        self.indent += 1;
        self.emit_block(&function.body);
        self.indent -= 1;
        self.emit_line("}");
    }

    fn emit_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.emit_statement(stmt);
        }
    }

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Decl(decl) => self.emit_value_decl(decl),

            Statement::Assign { target, value } => {
                let target = self.expr_to_sketch(target);
                let value = self.expr_to_sketch(value);
                self.emit_line(&format!("{} = {};", target, value));
            }

            Statement::Expr(expr) => {
                let expr = self.expr_to_sketch(expr);
                self.emit_line(&format!("{};", expr));
            }
        }
    }

    fn emit_value_decl(&mut self, decl: &ValueDecl) {
        let qualifier = match decl.kind {
            DeclKind::Const => "const ",
            DeclKind::Var => "",
        };
        let ty = type_to_sketch(&decl.ty);

        match &decl.value {
            Some(value) => {
                let value = self.expr_to_sketch(value);
                self.emit_line(&format!("{}{} {} = {};", qualifier, ty, decl.name, value));
            }
            None => self.emit_line(&format!("{}{} {};", qualifier, ty, decl.name)),
        }
    }

    /// Translate an expression. Literals are emitted exactly as written.
    fn expr_to_sketch(&self, expr: &Expression) -> String {
        match expr {
            Expression::Literal(lit) => lit.text().to_string(),

            Expression::Identifier(name) => self.resolver.resolve_identifier(name),

            Expression::Selector { object, member } => self.resolver.resolve_selector(object, member),

            Expression::Call { callee, args } => {
                let callee = self.expr_to_sketch(callee);
                let args = args
                    .iter()
                    .map(|a| self.expr_to_sketch(a))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", callee, args)
            }

            Expression::Binary { op, left, right } => format!(
                "{} {} {}",
                self.binary_operand(*op, left, false),
                op.symbol(),
                self.binary_operand(*op, right, true)
            ),

            Expression::Unary { op, operand } => match **operand {
                // `-(-y)`: `--y` would decrement
                Expression::Unary { .. } | Expression::Binary { .. } => {
                    format!("{}({})", op.symbol(), self.expr_to_sketch(operand))
                }
                _ => format!("{}{}", op.symbol(), self.expr_to_sketch(operand)),
            },

            Expression::Paren(inner) => format!("({})", self.expr_to_sketch(inner)),
        }
    }

    /// Translate one side of a binary expression, bracketed when it binds
    /// looser than `parent`, or equally on the right.
    fn binary_operand(&self, parent: BinaryOp, child: &Expression, right: bool) -> String {
        let text = self.expr_to_sketch(child);
        match child {
            Expression::Binary { op, .. } => {
                let (inner, outer) = (c_precedence(*op), c_precedence(parent));
                if inner < outer || (right && inner == outer) {
                    format!("({})", text)
                } else {
                    text
                }
            }
            _ => text,
        }
    }

    fn emit_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent * self.options.indent_width {
                self.output.push(' ');
            }
            self.output.push_str(line);
        }
        self.output.push('\n');
    }
}

/// Translate a program with the built-in controller registry.
pub fn compile_to_sketch(program: &Program, overrides: &OverrideTable) -> String {
    let registry = ControllerRegistry::builtin();
    SketchCodegen::new(overrides, &registry).generate(program)
}

/// Translate a program with a caller-supplied registry and options.
pub fn compile_to_sketch_with_options(
    program: &Program,
    overrides: &OverrideTable,
    registry: &ControllerRegistry,
    options: SketchCodegenOptions,
) -> String {
    SketchCodegen::with_options(overrides, registry, options).generate(program)
}
