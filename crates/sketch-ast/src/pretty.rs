//! Pretty-printer for the source tree.
//!
//! Converts a [`Program`] back into readable Go-subset source. The output
//! re-parses to an equal tree, which the parser tests rely on.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::ast::*;

/// Indentation state for pretty-printing.
#[derive(Clone, Debug, Default)]
pub struct PrettyPrintContext {
    indent: usize,
}

impl PrettyPrintContext {
    /// Create a new pretty-print context.
    pub fn new() -> Self {
        Self::default()
    }

    fn indent_str(&self) -> String {
        "\t".repeat(self.indent)
    }

    fn with_indent<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.indent += 1;
        let result = f(self);
        self.indent -= 1;
        result
    }
}

/// Trait for pretty-printing tree nodes.
pub trait PrettyPrint {
    /// Convert this node to a pretty-printed string.
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String;
}

/// Convenience function to pretty-print a whole program.
pub fn pretty_print_program(program: &Program) -> String {
    let mut ctx = PrettyPrintContext::new();
    program.pretty_print(&mut ctx)
}

impl PrettyPrint for Program {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        let mut parts = Vec::new();
        parts.push(format!("package {}", self.package));

        if !self.imports.is_empty() {
            let imports = self
                .imports
                .iter()
                .map(|i| i.pretty_print(ctx))
                .collect::<Vec<_>>()
                .join("\n");
            parts.push(imports);
        }

        for decl in &self.decls {
            parts.push(decl.pretty_print(ctx));
        }

        parts.join("\n\n")
    }
}

impl PrettyPrint for Import {
    fn pretty_print(&self, _ctx: &mut PrettyPrintContext) -> String {
        match &self.alias {
            Some(alias) => format!("import {} \"{}\"", alias, self.path.as_str()),
            None => format!("import \"{}\"", self.path.as_str()),
        }
    }
}

impl PrettyPrint for Decl {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        match self {
            Decl::Function(f) => f.pretty_print(ctx),
            Decl::Value(v) => v.pretty_print(ctx),
        }
    }
}

impl PrettyPrint for Function {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        let indent = ctx.indent_str();
        let params = self
            .params
            .iter()
            .map(|p| p.pretty_print(ctx))
            .collect::<Vec<_>>()
            .join(", ");

        let body = self.body.pretty_print(ctx);
        format!("{}func {}({}) {}", indent, self.name, params, body)
    }
}

impl PrettyPrint for Param {
    fn pretty_print(&self, _ctx: &mut PrettyPrintContext) -> String {
        format!("{} {}", self.name, self.ty)
    }
}

impl PrettyPrint for ValueDecl {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        let indent = ctx.indent_str();
        match &self.value {
            Some(value) => format!(
                "{}{} {} {} = {}",
                indent,
                self.kind.keyword(),
                self.name,
                self.ty,
                value.pretty_print(ctx)
            ),
            None => format!("{}{} {} {}", indent, self.kind.keyword(), self.name, self.ty),
        }
    }
}

impl PrettyPrint for Block {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        if self.statements.is_empty() {
            return "{}".to_string();
        }

        let mut parts = Vec::new();
        parts.push("{".to_string());

        ctx.with_indent(|ctx| {
            for stmt in &self.statements {
                parts.push(stmt.pretty_print(ctx));
            }
        });

        parts.push(format!("{}}}", ctx.indent_str()));
        parts.join("\n")
    }
}

impl PrettyPrint for Statement {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        match self {
            Statement::Decl(decl) => decl.pretty_print(ctx),
            Statement::Assign { target, value } => {
                let indent = ctx.indent_str();
                format!("{}{} = {}", indent, target.pretty_print(ctx), value.pretty_print(ctx))
            }
            Statement::Expr(expr) => {
                let indent = ctx.indent_str();
                format!("{}{}", indent, expr.pretty_print(ctx))
            }
        }
    }
}

impl PrettyPrint for Expression {
    fn pretty_print(&self, ctx: &mut PrettyPrintContext) -> String {
        match self {
            Expression::Literal(lit) => lit.text().to_string(),
            Expression::Identifier(name) => name.clone(),
            Expression::Selector { object, member } => format!("{}.{}", object, member),
            Expression::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|a| a.pretty_print(ctx))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", callee.pretty_print(ctx), args)
            }
            Expression::Binary { op, left, right } => format!(
                "{} {} {}",
                operand_of(*op, left, false, ctx),
                op.symbol(),
                operand_of(*op, right, true, ctx)
            ),
            Expression::Unary { op, operand } => match **operand {
                // `- -x`, never `--x`
                Expression::Unary { .. } => format!("{} {}", op.symbol(), operand.pretty_print(ctx)),
                Expression::Binary { .. } => format!("{}({})", op.symbol(), operand.pretty_print(ctx)),
                _ => format!("{}{}", op.symbol(), operand.pretty_print(ctx)),
            },
            Expression::Paren(inner) => format!("({})", inner.pretty_print(ctx)),
        }
    }
}

/// Print one side of a binary expression, bracketing it when it binds looser
/// than `parent` (or equally, on the right).
fn operand_of(parent: BinaryOp, child: &Expression, right: bool, ctx: &mut PrettyPrintContext) -> String {
    let text = child.pretty_print(ctx);
    match child {
        Expression::Binary { op, .. }
            if op.precedence() < parent.precedence()
                || (right && op.precedence() == parent.precedence()) =>
        {
            format!("({})", text)
        }
        _ => text,
    }
}
