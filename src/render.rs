//! Flattened-text rendering of statements and expressions.
//!
//! The emitter only depends on the `ExprRenderer` capability. `SourceRenderer`
//! is the stock implementation: one line of source-like notation, with
//! parentheses only where operator precedence needs them.
use crate::ast::{Expr, Literal, Stmt, Storage};

pub trait ExprRenderer {
    fn render_expr(&self, expr: &Expr) -> String;
    fn render_stmt(&self, stmt: &Stmt) -> String;
}

impl<R: ExprRenderer + ?Sized> ExprRenderer for &R {
    fn render_expr(&self, expr: &Expr) -> String { (**self).render_expr(expr) }
    fn render_stmt(&self, stmt: &Stmt) -> String { (**self).render_stmt(stmt) }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRenderer;

impl ExprRenderer for SourceRenderer {
    fn render_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        write_expr(&mut out, expr);
        out
    }

    fn render_stmt(&self, stmt: &Stmt) -> String {
        let mut out = String::new();
        write_stmt(&mut out, stmt);
        out
    }
}

// ————————————————————————————————————————————————————————————————————————————
// EXPRESSIONS
// ————————————————————————————————————————————————————————————————————————————

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::FunctionInvocation(call) => {
            if let Some(pkg) = &call.package {
                out.push_str(pkg);
                out.push(':');
            }
            out.push_str(&call.name);
            write_args(out, "(", &call.args, ")");
        }
        Expr::ActionInvocation(call) => {
            if let Some(pkg) = &call.package {
                out.push_str(pkg);
                out.push(':');
            }
            out.push_str(&call.connector);
            out.push('.');
            out.push_str(&call.name);
            write_args(out, "(", &call.args, ")");
        }
        Expr::BasicLiteral(lit) => match &lit.value {
            Literal::Str(s) => out.push_str(&format!("{s:?}")),
            other => out.push_str(&other.value_text()),
        },
        Expr::Binary { op, lhs, rhs } => {
            let prec = op.precedence();
            write_operand(out, lhs, |p| p < prec);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            // left-associative: an equal-precedence right operand needs grouping
            write_operand(out, rhs, |p| p <= prec);
        }
        Expr::Unary { op, operand } => {
            out.push_str(op.symbol());
            write_operand(out, operand, |_| true);
        }
        Expr::VariableRef { name } => out.push_str(name),
        Expr::TypeCast { ty, expr } => {
            out.push('(');
            out.push_str(ty);
            out.push_str(") ");
            write_operand(out, expr, |_| true);
        }
        Expr::ArrayInit { args } => write_args(out, "[", args, "]"),
        Expr::MapInit { args } => write_args(out, "{", args, "}"),
        Expr::Backtick { template } => {
            out.push('`');
            out.push_str(template);
            out.push('`');
        }
        Expr::InstanceCreation { ty } => {
            out.push_str("new ");
            out.push_str(ty);
        }
        Expr::ArrayMapAccess { name, index } => {
            out.push_str(name);
            out.push('[');
            write_expr(out, index);
            out.push(']');
        }
        Expr::KeyValue { key, value } => {
            write_expr(out, key);
            out.push_str(": ");
            write_expr(out, value);
        }
        Expr::StructInit { ty, args } => {
            out.push_str(ty);
            write_args(out, "{", args, "}");
        }
        Expr::StructFieldAccess { name, fields } => {
            out.push_str(name);
            for f in fields {
                out.push('.');
                out.push_str(f);
            }
        }
        Expr::ResourceInvocation { name, args } => {
            out.push_str(name);
            write_args(out, "(", args, ")");
        }
        Expr::Location(loc) => {
            let storage = match loc.storage {
                Storage::Constant => "const",
                Storage::LocalVar => "local",
                Storage::ConnectorVar => "connector",
                Storage::ServiceVar => "service",
                Storage::StructVar => "struct",
            };
            out.push_str(&format!("{storage}[{}]", loc.offset));
        }
    }
}

/// Writes a binary/unary operand, grouping it when `needs_parens` says the
/// operand's own precedence is too weak for its position.
fn write_operand(out: &mut String, expr: &Expr, needs_parens: impl Fn(u8) -> bool) {
    match expr {
        Expr::Binary { op, .. } if needs_parens(op.precedence()) => {
            out.push('(');
            write_expr(out, expr);
            out.push(')');
        }
        _ => write_expr(out, expr),
    }
}

fn write_args(out: &mut String, open: &str, args: &[Expr], close: &str) {
    out.push_str(open);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(out, arg);
    }
    out.push_str(close);
}

// ————————————————————————————————————————————————————————————————————————————
// STATEMENTS
// ————————————————————————————————————————————————————————————————————————————

fn write_stmt(out: &mut String, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => {
            if block.statements.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for s in &block.statements {
                write_stmt(out, s);
                out.push(' ');
            }
            out.push('}');
        }
        Stmt::Assign { lhs, rhs } => {
            for (i, e) in lhs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, e);
            }
            out.push_str(" = ");
            write_expr(out, rhs);
            out.push(';');
        }
        Stmt::Comment { text } => out.push_str(text),
        Stmt::IfElse { condition, then_body, else_body } => {
            out.push_str("if (");
            write_expr(out, condition);
            out.push_str(") ");
            write_stmt(out, then_body);
            if let Some(else_body) = else_body {
                out.push_str(" else ");
                write_stmt(out, else_body);
            }
        }
        Stmt::While { condition, body } => {
            out.push_str("while (");
            write_expr(out, condition);
            out.push_str(") ");
            match body {
                Some(body) => write_stmt(out, body),
                None => out.push_str("{}"),
            }
        }
        Stmt::FunctionInvocation(call) => {
            write_expr(out, &Expr::FunctionInvocation(call.clone()));
            out.push(';');
        }
        Stmt::ActionInvocation(call) => {
            write_expr(out, &Expr::ActionInvocation(call.clone()));
            out.push(';');
        }
        Stmt::Reply { expr } => {
            out.push_str("reply ");
            write_expr(out, expr);
            out.push(';');
        }
        Stmt::Return { exprs } => {
            out.push_str("return");
            for (i, e) in exprs.iter().enumerate() {
                out.push_str(if i == 0 { " " } else { ", " });
                write_expr(out, e);
            }
            out.push(';');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, UnaryOp};

    fn expr(e: &Expr) -> String { SourceRenderer.render_expr(e) }
    fn stmt(s: &Stmt) -> String { SourceRenderer.render_stmt(s) }

    #[test]
    fn parenthesizes_only_weaker_operands() {
        let sum = Expr::binary(BinaryOp::Add, Expr::int(1), Expr::int(2));
        let product = Expr::binary(BinaryOp::Multiply, sum.clone(), Expr::var("x"));
        assert_eq!(expr(&product), "(1 + 2) * x");

        let nested_left = Expr::binary(BinaryOp::Subtract, sum.clone(), Expr::int(3));
        assert_eq!(expr(&nested_left), "1 + 2 - 3");

        let nested_right = Expr::binary(BinaryOp::Subtract, Expr::int(3), sum);
        assert_eq!(expr(&nested_right), "3 - (1 + 2)");
    }

    #[test]
    fn literals_and_calls() {
        assert_eq!(expr(&Expr::int(1)), "1");
        assert_eq!(expr(&Expr::string("a\"b")), r#""a\"b""#);
        let call = Expr::call("println", vec![Expr::string("hi"), Expr::var("n")]);
        assert_eq!(expr(&call), r#"println("hi", n)"#);
        let neg = Expr::Unary { op: UnaryOp::Negate, operand: Box::new(Expr::var("n")) };
        assert_eq!(expr(&neg), "-n");
    }

    #[test]
    fn statements_render_on_one_line() {
        let assign = Stmt::Assign {
            lhs: vec![Expr::var("a")],
            rhs: Expr::binary(BinaryOp::Add, Expr::var("a"), Expr::int(1)),
        };
        assert_eq!(stmt(&assign), "a = a + 1;");

        let if_else = Stmt::IfElse {
            condition: Expr::binary(BinaryOp::GreaterThan, Expr::var("a"), Expr::int(0)),
            then_body: Box::new(Stmt::block(vec![Stmt::Reply { expr: Expr::var("a") }])),
            else_body: Some(Box::new(Stmt::block(vec![]))),
        };
        assert_eq!(stmt(&if_else), "if (a > 0) { reply a; } else {}");

        assert_eq!(stmt(&Stmt::Return { exprs: vec![] }), "return;");
        assert_eq!(stmt(&Stmt::Return { exprs: vec![Expr::var("a"), Expr::int(2)] }), "return a, 2;");
    }
}
