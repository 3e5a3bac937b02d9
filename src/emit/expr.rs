use crate::ast::{ActionInvocation, BinaryOp, Expr, FunctionInvocation, NodeRef};
use crate::doc::{keys, DocKind, DocNode};
use crate::render::ExprRenderer;

use super::Emitter;

impl<'c, R: ExprRenderer> Emitter<'c, R> {
    pub(super) fn expr(&mut self, expr: &Expr) -> Option<DocNode> {
        let node = match expr {
            Expr::FunctionInvocation(call) => self.function_invocation(call),
            Expr::ActionInvocation(call) => self.action_invocation(call),
            Expr::BasicLiteral(lit) => DocNode::new(DocKind::BasicLiteral)
                .with(keys::BASIC_LITERAL_TYPE, &lit.ty)
                .with(keys::BASIC_LITERAL_VALUE, lit.value.value_text()),
            Expr::Binary { op, lhs, rhs } => {
                let children = self.group(|e| {
                    e.emit(NodeRef::Expr(lhs));
                    e.emit(NodeRef::Expr(rhs));
                });
                DocNode::new(binary_kind(*op)).attach(keys::CHILDREN, children)
            }
            Expr::Unary { operand, .. } => {
                let children = self.group(|e| e.emit(NodeRef::Expr(operand)));
                DocNode::new(DocKind::Unary).attach(keys::CHILDREN, children)
            }
            Expr::VariableRef { name } => {
                DocNode::new(DocKind::VariableRef).with(keys::VARIABLE_REFERENCE_NAME, name)
            }
            Expr::ArrayInit { args } => {
                let children = self.group(|e| e.emit_all(args, NodeRef::Expr));
                DocNode::new(DocKind::ArrayInit).attach(keys::CHILDREN, children)
            }
            Expr::Backtick { template } => {
                DocNode::new(DocKind::BackQuote).with(keys::BACK_QUOTE_ENCLOSED_STRING, template)
            }
            Expr::InstanceCreation { ty } => DocNode::new(DocKind::InstanceCreation)
                .with(keys::INSTANCE_TYPE, ty)
                .attach(keys::CHILDREN, Vec::new()),
            Expr::ArrayMapAccess { name, index } => {
                let children = self.group(|e| e.emit(NodeRef::Expr(index)));
                DocNode::new(DocKind::ArrayMapAccess)
                    .with(keys::ARRAY_MAP_ACCESS_NAME, name)
                    .attach(keys::CHILDREN, children)
            }
            Expr::TypeCast { .. }
            | Expr::MapInit { .. }
            | Expr::KeyValue { .. }
            | Expr::StructInit { .. }
            | Expr::StructFieldAccess { .. }
            | Expr::ResourceInvocation { .. }
            | Expr::Location(_) => return None,
        };
        Some(node)
    }

    pub(super) fn function_invocation(&mut self, call: &FunctionInvocation) -> DocNode {
        let name = match &call.package {
            Some(pkg) => format!("{pkg}:{}", call.name),
            None => call.name.clone(),
        };
        let args = self.group(|e| e.emit_all(&call.args, NodeRef::Expr));
        DocNode::new(DocKind::FunctionInvocation)
            .with(keys::FUNCTION_NAME, name)
            .attach(keys::CHILDREN, args)
    }

    fn action_invocation(&mut self, call: &ActionInvocation) -> DocNode {
        let args = self.group(|e| e.emit_all(&call.args, NodeRef::Expr));
        DocNode::new(DocKind::ActionInvocation)
            .with(keys::ACTION_NAME, &call.name)
            .with(keys::ACTION_PACKAGE_NAME, call.package.as_ref())
            .with(keys::ACTION_CONNECTOR_NAME, &call.connector)
            .attach(keys::CHILDREN, args)
    }
}

fn binary_kind(op: BinaryOp) -> DocKind {
    match op {
        BinaryOp::Divide => DocKind::Divide,
        BinaryOp::Add => DocKind::Add,
        BinaryOp::Subtract => DocKind::Subtract,
        BinaryOp::Multiply => DocKind::Multiply,
        BinaryOp::And => DocKind::And,
        BinaryOp::Or => DocKind::Or,
        BinaryOp::Equal => DocKind::Equal,
        BinaryOp::NotEqual => DocKind::NotEqual,
        BinaryOp::GreaterEqual => DocKind::GreaterEqual,
        BinaryOp::GreaterThan => DocKind::GreaterThan,
        BinaryOp::LessEqual => DocKind::LessEqual,
        BinaryOp::LessThan => DocKind::LessThan,
    }
}
